//! Ordered run sequences.

use serde::{Deserialize, Serialize};

use super::{Run, ATTACHMENT_PLACEHOLDER, LINE_SEPARATOR};

/// The runs of one note body, in document order.
///
/// Neighbors are found by index, so every run has O(1) access to its
/// predecessor and successor without the runs pointing at each other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunSequence {
    runs: Vec<Run>,
}

impl RunSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Append a run.
    pub fn push(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether the sequence has no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Run at `index`.
    pub fn get(&self, index: usize) -> Option<&Run> {
        self.runs.get(index)
    }

    /// Run preceding `index`.
    pub fn previous(&self, index: usize) -> Option<&Run> {
        index.checked_sub(1).and_then(|i| self.runs.get(i))
    }

    /// Run following `index`.
    pub fn next(&self, index: usize) -> Option<&Run> {
        self.runs.get(index + 1)
    }

    /// Iterate over the runs.
    pub fn iter(&self) -> std::slice::Iter<'_, Run> {
        self.runs.iter()
    }

    /// Borrow the runs as a slice.
    pub fn as_slice(&self) -> &[Run] {
        &self.runs
    }

    /// Whether the run at `index` continues its predecessor's block.
    pub fn same_style_type_previous(&self, index: usize) -> bool {
        self.get(index)
            .is_some_and(|run| run.same_style_type(self.previous(index)))
    }

    /// Whether the run at `index` is continued by its successor's block.
    pub fn same_style_type_next(&self, index: usize) -> bool {
        self.get(index)
            .is_some_and(|run| run.same_style_type(self.next(index)))
    }

    /// Whether the run at `index` has its predecessor's font weight.
    pub fn same_font_weight_previous(&self, index: usize) -> bool {
        self.get(index)
            .is_some_and(|run| run.same_font_weight(self.previous(index)))
    }

    /// Whether the run at `index` has its successor's font weight.
    pub fn same_font_weight_next(&self, index: usize) -> bool {
        self.get(index)
            .is_some_and(|run| run.same_font_weight(self.next(index)))
    }

    /// Cumulative indent of every run: its own indent plus that of all runs before it.
    pub fn total_indents(&self) -> Vec<usize> {
        self.runs
            .iter()
            .scan(0usize, |total, run| {
                *total = total.saturating_add(run.indent());
                Some(*total)
            })
            .collect()
    }

    /// Coalesce consecutive runs whose formatting is identical.
    pub fn merge_adjacent(&self) -> RunSequence {
        let mut merged: Vec<Run> = Vec::with_capacity(self.runs.len());

        for run in &self.runs {
            match merged.last_mut() {
                Some(last) if last.same_formatting(run) => last.text.push_str(&run.text),
                _ => merged.push(run.clone()),
            }
        }

        log::debug!("Merged {} runs into {}", self.runs.len(), merged.len());
        RunSequence { runs: merged }
    }

    /// Plain text of the whole note.
    ///
    /// Soft line breaks become newlines and attachment placeholders are dropped.
    pub fn plain_text(&self) -> String {
        self.runs
            .iter()
            .flat_map(|run| run.text.chars())
            .filter(|c| *c != ATTACHMENT_PLACEHOLDER)
            .map(|c| if c == LINE_SEPARATOR { '\n' } else { c })
            .collect()
    }
}

impl From<Vec<Run>> for RunSequence {
    fn from(runs: Vec<Run>) -> Self {
        Self { runs }
    }
}

impl FromIterator<Run> for RunSequence {
    fn from_iter<I: IntoIterator<Item = Run>>(iter: I) -> Self {
        Self {
            runs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RunSequence {
    type Item = &'a Run;
    type IntoIter = std::slice::Iter<'a, Run>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}
