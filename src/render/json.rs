//! JSON rendering of the output tree.

use crate::error::{Error, Result};
use crate::tree::HtmlTree;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a rendered tree to JSON.
pub fn to_json(tree: &HtmlTree, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(tree),
        JsonFormat::Compact => serde_json::to_string(tree),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HtmlTree {
        let mut tree = HtmlTree::new();
        let root = tree.root();
        let ol = tree.append_element(root, "ol", [("data-indent-amount", "0")]);
        let li = tree.append_element(ol, "li", std::iter::empty::<(&str, &str)>());
        tree.append_text(li, "Milk");
        tree
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"tag\": \"ol\""));
        assert!(json.contains("\"text\": \"Milk\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["children"][0]["attributes"]["data-indent-amount"], "0");
        assert_eq!(value["children"][0]["children"][0]["tag"], "li");
    }
}
