//! Integration tests for note rendering.

use unnotes::model::{
    Alignment, Color, Font, FontWeight, ParagraphStyle, Run, RunSequence, StyleType, MAX_INDENT,
};
use unnotes::render::{self, NoteRenderer, RenderOptions, INDENT_MARKER};
use unnotes::HtmlTree;

fn seq(runs: Vec<Run>) -> RunSequence {
    RunSequence::from(runs)
}

fn html(runs: Vec<Run>) -> String {
    render::to_html(&seq(runs), &RenderOptions::default()).unwrap()
}

fn tree(runs: Vec<Run>) -> HtmlTree {
    render::render_runs(&seq(runs))
}

fn list(text: &str, style_type: StyleType, indent: i64) -> Run {
    Run::styled(text, ParagraphStyle::new(style_type).with_indent(indent))
}

fn numbered(text: &str, indent: i64) -> Run {
    list(text, StyleType::NumberedList, indent)
}

fn checkbox(text: &str, uuid: &str, done: bool) -> Run {
    Run::styled(
        text,
        ParagraphStyle::new(StyleType::Checkbox).with_checklist(uuid, done),
    )
}

// ==================== Plain Text ====================

#[test]
fn test_empty_sequence_leaves_root_untouched() {
    let tree = tree(Vec::new());
    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.to_html().unwrap(), "");
}

#[test]
fn test_unstyled_run_is_escaped_text_only() {
    assert_eq!(html(vec![Run::new("5 < 6 & \"7\"")]), "5 &lt; 6 &amp; \"7\"");
}

#[test]
fn test_paragraph_separator_always_breaks() {
    let runs = vec![Run::styled(
        "Title\u{2028}continued",
        ParagraphStyle::new(StyleType::Title),
    )];
    assert_eq!(html(runs), "<h1>Title<br>continued</h1>");
}

// ==================== Headings and Code ====================

#[test]
fn test_heading_levels() {
    let runs = vec![
        Run::styled("A\n", ParagraphStyle::new(StyleType::Title)),
        Run::styled("B\n", ParagraphStyle::new(StyleType::Heading)),
        Run::styled("C\n", ParagraphStyle::new(StyleType::Subheading)),
    ];
    assert_eq!(html(runs), "<h1>A</h1><h2>B</h2><h3>C</h3>");
}

#[test]
fn test_same_style_runs_share_one_heading() {
    let runs = vec![
        Run::styled("Weekly ", ParagraphStyle::new(StyleType::Title)),
        Run::styled("plan\n", ParagraphStyle::new(StyleType::Title)).with_weight(FontWeight::Bold),
    ];
    let tree = tree(runs);
    assert_eq!(tree.count_elements("h1"), 1);
    // Bold is implied by the heading.
    assert_eq!(tree.to_html().unwrap(), "<h1>Weekly plan</h1>");
}

#[test]
fn test_same_style_runs_share_one_code_block() {
    let mono = ParagraphStyle::new(StyleType::Monospaced);
    let runs = vec![
        Run::styled("fn main() {\n", mono.clone()),
        Run::styled("    todo!()\n", mono.clone()).with_weight(FontWeight::Italic),
        Run::styled("}\n", mono),
    ];
    let tree = tree(runs);
    assert_eq!(tree.count_elements("pre"), 1);
    assert_eq!(
        tree.to_html().unwrap(),
        "<pre>fn main() {\n<i>    todo!()</i><i>\n</i>}\n</pre>"
    );
}

#[test]
fn test_consecutive_title_paragraphs_fuse() {
    // Heading newlines are dropped, so nothing separates the two paragraphs.
    let runs = vec![
        Run::styled("T1\n", ParagraphStyle::new(StyleType::Title)),
        Run::styled("T2\n", ParagraphStyle::new(StyleType::Title)),
    ];
    assert_eq!(html(runs), "<h1>T1T2</h1>");
}

#[test]
fn test_body_after_heading_is_a_sibling() {
    let runs = vec![
        Run::styled("Title\n", ParagraphStyle::new(StyleType::Title)),
        Run::new("First line\nSecond line"),
    ];
    assert_eq!(html(runs), "<h1>Title</h1>First line<br>Second line");
}

// ==================== Lists ====================

#[test]
fn test_numbered_indent_zero_one_zero_reuses_outer_list() {
    let tree = tree(vec![
        numbered("one\n", 0),
        numbered("two\n", 1),
        numbered("three\n", 0),
    ]);

    assert_eq!(tree.count_elements("ol"), 2);
    assert_eq!(
        tree.to_html().unwrap(),
        "<ol data-indent-amount=\"0\"><li>one\
         <ol data-indent-amount=\"1\"><li>two</li></ol></li>\
         <li>three</li></ol>"
    );
}

#[test]
fn test_multi_line_run_produces_one_item_per_line() {
    assert_eq!(
        html(vec![numbered("a\nb\nc\n", 0)]),
        "<ol data-indent-amount=\"0\"><li>a</li><li>b</li><li>c</li></ol>"
    );
}

#[test]
fn test_empty_lines_do_not_create_items() {
    let tree = tree(vec![list("a\n\nb\n", StyleType::DottedList, 0)]);
    assert_eq!(tree.count_elements("li"), 2);
}

#[test]
fn test_open_item_continues_across_runs() {
    let runs = vec![
        numbered("Buy ", 0),
        numbered("milk\n", 0).with_weight(FontWeight::Bold),
        numbered("Call mom\n", 0),
    ];
    assert_eq!(
        html(runs),
        "<ol data-indent-amount=\"0\"><li>Buy <b>milk</b></li><li>Call mom</li></ol>"
    );
}

#[test]
fn test_deep_jump_materializes_intermediate_levels() {
    let tree = tree(vec![
        list("top\n", StyleType::DottedList, 0),
        list("deep\n", StyleType::DottedList, 2),
        list("middle\n", StyleType::DottedList, 1),
    ]);

    assert_eq!(tree.count_elements("ul"), 3);
    assert_eq!(
        tree.to_html().unwrap(),
        "<ul class=\"dotted\" data-indent-amount=\"0\"><li>top\
         <ul class=\"dotted\" data-indent-amount=\"1\">\
         <li><ul class=\"dotted\" data-indent-amount=\"2\"><li>deep</li></ul></li>\
         <li>middle</li></ul></li></ul>"
    );
}

#[test]
fn test_style_change_at_top_level_starts_new_list() {
    let tree = tree(vec![
        numbered("first\n", 0),
        list("bullet\n", StyleType::DashedList, 0),
    ]);
    assert_eq!(
        tree.to_html().unwrap(),
        "<ol data-indent-amount=\"0\"><li>first</li></ol>\
         <ul class=\"dashed\" data-indent-amount=\"0\"><li>bullet</li></ul>"
    );
}

#[test]
fn test_heading_between_lists_splits_them() {
    let tree = tree(vec![
        numbered("a\n", 0),
        Run::styled("Next\n", ParagraphStyle::new(StyleType::Heading)),
        numbered("b\n", 0),
    ]);
    assert_eq!(tree.count_elements("ol"), 2);
    assert_eq!(tree.count_elements("h2"), 1);
}

#[test]
fn test_indented_paragraph_renders_as_plain_list() {
    let tree = tree(vec![Run::styled(
        "quoted\n",
        ParagraphStyle::default().with_indent(1),
    )]);
    assert_eq!(tree.count_elements("ul"), 2);
    assert!(tree.to_html().unwrap().starts_with("<ul class=\"none\""));
    assert_eq!(tree.text_content(tree.root()), "quoted");
}

#[test]
fn test_indented_paragraph_nests_under_list_item() {
    let runs = vec![
        numbered("a\n", 0),
        Run::styled("note\n", ParagraphStyle::default().with_indent(1)),
    ];
    assert_eq!(
        html(runs),
        "<ol data-indent-amount=\"0\"><li>a\
         <ul class=\"none\" data-indent-amount=\"1\"><li>note</li></ul></li></ol>"
    );
}

#[test]
fn test_return_to_level_joins_first_matching_sublist() {
    let tree = tree(vec![
        numbered("a\n", 0),
        numbered("b\n", 1),
        numbered("c\n", 0),
        numbered("d\n", 1),
        numbered("e\n", 2),
        numbered("f\n", 1),
    ]);

    assert_eq!(tree.count_elements("ol"), 4);
    // The marker search stops at the first level-1 list, which belongs to "a".
    assert_eq!(
        tree.to_html().unwrap(),
        "<ol data-indent-amount=\"0\"><li>a\
         <ol data-indent-amount=\"1\"><li>b</li><li>f</li></ol></li>\
         <li>c<ol data-indent-amount=\"1\"><li>d\
         <ol data-indent-amount=\"2\"><li>e</li></ol></li></ol></li></ol>"
    );
}

#[test]
fn test_huge_indent_is_clamped() {
    let tree = tree(vec![numbered("x\n", i64::MAX)]);
    assert_eq!(tree.count_elements("ol"), MAX_INDENT + 1);
    assert_eq!(tree.text_content(tree.root()), "x");
}

#[test]
fn test_negative_indent_is_treated_as_zero() {
    assert_eq!(
        html(vec![numbered("x\n", -4)]),
        html(vec![numbered("x\n", 0)])
    );
}

#[test]
fn test_every_container_records_its_depth() {
    let tree = tree(vec![numbered("a\n", 0), numbered("b\n", 3)]);
    let markers: Vec<&str> = tree
        .descendants(tree.root())
        .filter(|node| tree.is_named(*node, &["ol"]))
        .filter_map(|node| tree.attribute(node, INDENT_MARKER))
        .collect();
    assert_eq!(markers, vec!["0", "1", "2", "3"]);
}

// ==================== Checklists ====================

#[test]
fn test_checklist_items_share_container() {
    let tree = tree(vec![
        checkbox("Milk\n", "A", true),
        checkbox("Eggs\n", "B", false),
        checkbox("Bread\n", "B", false),
    ]);

    assert_eq!(tree.count_elements("ul"), 1);
    assert_eq!(
        tree.to_html().unwrap(),
        "<ul class=\"checklist\" data-indent-amount=\"0\">\
         <li class=\"checked\">Milk</li>\
         <li class=\"unchecked\">Eggs</li>\
         <li class=\"unchecked\">Bread</li></ul>"
    );
}

// ==================== Inline Formatting ====================

#[test]
fn test_inline_formatting_inside_list_item() {
    let mut run = numbered("link\n", 0)
        .with_link("https://example.com/?a=1&b=2")
        .with_color(Color::new(1.0, 0.0, 0.5));
    run.underlined = true;

    assert_eq!(
        html(vec![run]),
        "<ol data-indent-amount=\"0\"><li><u>\
         <span style=\"color: #FF080\">\
         <a href=\"https://example.com/?a=1&amp;b=2\" target=\"_blank\">link</a>\
         </span></u></li></ol>"
    );
}

#[test]
fn test_font_and_alignment() {
    let run = Run::styled(
        "centered",
        ParagraphStyle::default().with_alignment(Alignment::Center),
    )
    .with_font(Font::new("Noteworthy", 14.0));

    assert_eq!(
        html(vec![run]),
        "<div style=\"text-align: center\">\
         <span style=\"font-family: 'Noteworthy'; font-size: 14px\">centered</span></div>"
    );
}

// ==================== Options and Determinism ====================

#[test]
fn test_rendering_is_idempotent() {
    let runs = seq(vec![
        Run::styled("Plan\n", ParagraphStyle::new(StyleType::Title)),
        numbered("one\n", 0),
        numbered("two\n", 1),
        checkbox("done\n", "A", true),
        Run::new("tail"),
    ]);

    let first = render::render_runs(&runs);
    let second = render::render_runs(&runs);
    assert_eq!(first, second);
    assert_eq!(first.to_html().unwrap(), second.to_html().unwrap());
}

#[test]
fn test_merge_adjacent_runs_option() {
    let runs = seq(vec![Run::new("Hel"), Run::new("lo "), Run::new("there")]);

    let mut plain = NoteRenderer::new(RenderOptions::new());
    assert_eq!(plain.render(&runs).node_count(), 4);

    let mut merged = NoteRenderer::new(RenderOptions::new().with_merge_adjacent_runs(true));
    let tree = merged.render(&runs);
    assert_eq!(tree.node_count(), 2);
    assert_eq!(tree.to_html().unwrap(), "Hello there");
}

#[test]
fn test_stats_collection() {
    let runs = seq(vec![
        Run::styled("Plan\n", ParagraphStyle::new(StyleType::Title)),
        numbered("one\ntwo\n", 0),
        numbered("nested\n", 1),
        checkbox("done\n", "A", true),
        Run::new("site").with_link("https://example.com"),
    ]);

    let mut renderer = NoteRenderer::new(RenderOptions::new().with_stats(true));
    renderer.render(&runs);
    let stats = renderer.stats();

    assert_eq!(stats.run_count, 5);
    assert_eq!(stats.heading_count, 1);
    assert_eq!(stats.list_count, 3);
    assert_eq!(stats.list_item_count, 4);
    assert_eq!(stats.checked_count, 1);
    assert_eq!(stats.link_count, 1);
}

#[test]
fn test_render_into_custom_root() {
    let mut tree = HtmlTree::new();
    let root = tree.root();
    let body = tree.append_element(root, "div", [("class", "note")]);

    let mut renderer = NoteRenderer::new(RenderOptions::new());
    renderer.render_into(&seq(vec![numbered("a\n", 0)]), &mut tree, body);

    assert_eq!(
        tree.to_html().unwrap(),
        "<div class=\"note\"><ol data-indent-amount=\"0\"><li>a</li></ol></div>"
    );
}
