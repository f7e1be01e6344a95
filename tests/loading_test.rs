//! Integration tests for loading note files and the convenience API.

use std::fs;

use tempfile::TempDir;
use unnotes::{
    load_note, parse_note_json, to_html_document, to_text, DocumentOptions, Error, JsonFormat,
    RenderOptions, Unnotes,
};

const NOTE: &str = r#"{
    "metadata": {
        "title": "Recipe",
        "account": "iCloud",
        "modified": "2023-11-02T09:30:00Z"
    },
    "runs": [
        {"text": "Pancakes\n", "paragraph_style": {"style_type": "title"}},
        {"text": "Ingredients\n", "paragraph_style": {"style_type": "subheading"}},
        {"text": "Flour\nMilk\n", "paragraph_style": {"style_type": "dotted_list"}},
        {"text": "Whisk", "font_weight": "bold"},
        {"text": " well\n"}
    ]
}"#;

fn write_note(dir: &TempDir, name: &str, json: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_load_note_with_metadata() {
    let dir = TempDir::new().unwrap();
    let path = write_note(&dir, "recipe.json", NOTE);

    let note = load_note(&path).unwrap();
    assert_eq!(note.runs.len(), 5);
    assert_eq!(note.metadata.account.as_deref(), Some("iCloud"));
    assert!(note.metadata.modified.is_some());
}

#[test]
fn test_full_document_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_note(&dir, "recipe.json", NOTE);

    let html = to_html_document(&path, &RenderOptions::default()).unwrap();
    assert!(html.contains("<title>Recipe</title>"));
    assert!(html.contains("<b>Account:</b> iCloud"));
    assert!(html.contains("<b>Modified:</b> 2023-11-02T09:30:00Z"));
    assert!(html.contains(
        "<h1>Pancakes</h1><h3>Ingredients</h3>\
         <ul class=\"dotted\" data-indent-amount=\"0\"><li>Flour</li><li>Milk</li></ul>\
         <b>Whisk</b> well<br>"
    ));
}

#[test]
fn test_document_without_metadata_header() {
    let dir = TempDir::new().unwrap();
    let path = write_note(&dir, "recipe.json", NOTE);

    let options =
        RenderOptions::new().with_document(DocumentOptions::new().with_metadata(false));
    let html = to_html_document(&path, &options).unwrap();
    assert!(!html.contains("Account:"));
}

#[test]
fn test_text_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_note(&dir, "recipe.json", NOTE);

    let text = to_text(&path, &RenderOptions::default()).unwrap();
    assert_eq!(text, "Pancakes\nIngredients\nFlour\nMilk\nWhisk well");
}

#[test]
fn test_json_tree_from_builder() {
    let result = Unnotes::new().parse_str(NOTE).unwrap();
    let json = result.to_json(JsonFormat::Compact).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let children = value["children"].as_array().unwrap();
    assert_eq!(children[0]["tag"], "h1");
    assert_eq!(children[1]["tag"], "h3");
    assert_eq!(children[2]["attributes"]["class"], "dotted");
}

#[test]
fn test_numeric_enum_values_are_rejected() {
    let result = parse_note_json(r#"{"runs": [{"text": "x", "font_weight": 7}]}"#);
    assert!(matches!(result, Err(Error::Json(_))));
}

#[test]
fn test_invalid_top_level() {
    assert!(matches!(parse_note_json("\"text\""), Err(Error::InvalidRuns(_))));
    assert!(matches!(parse_note_json("null"), Err(Error::InvalidRuns(_))));
}

#[test]
fn test_batch_files() {
    let dir = TempDir::new().unwrap();
    let paths = vec![
        write_note(&dir, "a.json", r#"[{"text": "alpha"}]"#),
        write_note(&dir, "b.json", "not json"),
        write_note(&dir, "c.json", NOTE),
    ];

    let results = Unnotes::new().sequential().render_files(&paths);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap(), "alpha");
    assert!(matches!(results[1], Err(Error::Json(_))));
    assert!(results[2].as_ref().unwrap().starts_with("<h1>Pancakes</h1>"));
}
