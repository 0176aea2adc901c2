//! End-to-end tests running the `uitext` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const EN: &str = r#"{
  "strings": {
    "cart": "Cart: %1$s - %2$s",
    "cart_label": "Insert Shopping Cart",
    "greeting": "Hello, %s!"
  },
  "plurals": {
    "products": { "one": "%s product", "other": "%s products" }
  }
}"#;

const RO: &str = r#"{
  "strings": {
    "cart": "Coș: %1$s",
    "legacy": "Vechi"
  },
  "plurals": {
    "products": { "one": "%s produs", "few": "%s produse", "other": "%s de produse" }
  }
}"#;

const CART_TEXT: &str = r#"{
  "res_annotated": {
    "id": "cart",
    "args": [
      { "value": { "plural_res": { "id": "products", "quantity": 30 } } },
      {
        "value": { "res": { "id": "cart_label" } },
        "annotations": [{ "kind": "span", "value": { "color": { "r": 255, "g": 0, "b": 0 } } }]
      }
    ]
  }
}"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn uitext(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_uitext"))
        .args(["--color", "never"])
        .args(args)
        .output()
        .unwrap()
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =========================================================================
// check
// =========================================================================

#[test]
fn check_accepts_valid_table() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.json", EN);

    let output = uitext(&["check", arg(&en)]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stdout(&output).contains("4 resources"));
}

#[test]
fn check_reports_bad_format_string() {
    let dir = TempDir::new().unwrap();
    let bad = write(&dir, "en.json", r#"{ "strings": { "total": "Total: %d items" } }"#);

    let output = uitext(&["check", arg(&bad)]);
    assert_eq!(output.status.code(), Some(65));
    assert!(stderr(&output).contains("unsupported format specifier '%d'"));
}

#[test]
fn check_keeps_going_after_a_failure() {
    let dir = TempDir::new().unwrap();
    let bad = write(&dir, "de.json", r#"{ "strings": "#);
    let en = write(&dir, "en.json", EN);

    let output = uitext(&["check", arg(&bad), arg(&en)]);
    assert_eq!(output.status.code(), Some(65));
    assert!(stdout(&output).contains("en.json"));
}

#[test]
fn check_warns_about_reserved_markers() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.json", r#"{ "strings": { "total": "Total: ${3}" } }"#);

    let output = uitext(&["check", arg(&en)]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("warning:"));
    assert!(stderr(&output).contains("total"));
}

#[test]
fn check_json_lists_every_file() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.json", EN);
    let bad = write(&dir, "ro.json", r#"{ "plurals": { "products": { "several": "%s" } } }"#);

    let output = uitext(&["check", "--json", arg(&en), arg(&bad)]);
    assert_eq!(output.status.code(), Some(65));

    let results: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(results[0]["ok"], true);
    assert_eq!(results[0]["resources"], 4);
    assert_eq!(results[1]["ok"], false);
    assert!(results[1]["error"].as_str().unwrap().contains("several"));
}

// =========================================================================
// coverage
// =========================================================================

#[test]
fn coverage_json_reports_missing_extra_and_mismatched() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.json", EN);
    let ro = write(&dir, "ro.json", RO);

    let output = uitext(&["coverage", "--json", "--source", arg(&en), arg(&ro)]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let coverage: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let ro = &coverage[0];
    assert_eq!(ro["language"], "ro");
    assert_eq!(ro["total"], 4);
    assert_eq!(ro["translated"], 2);
    assert_eq!(ro["missing"], serde_json::json!(["cart_label", "greeting"]));
    assert_eq!(ro["extra"], serde_json::json!(["legacy"]));
    assert_eq!(ro["mismatched"], serde_json::json!(["cart"]));
}

#[test]
fn coverage_strict_fails_on_incomplete_translation() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.json", EN);
    let ro = write(&dir, "ro.json", RO);

    let output = uitext(&["coverage", "--strict", "--source", arg(&en), arg(&ro)]);
    assert_eq!(output.status.code(), Some(65));
    assert!(stdout(&output).contains("2/4"));
    assert!(stdout(&output).contains("Missing in ro:"));
}

#[test]
fn coverage_of_complete_translation_passes_strict() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.json", EN);
    let copy = write(&dir, "en-GB.json", EN);

    let output = uitext(&["coverage", "--strict", "--source", arg(&en), arg(&copy)]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("4/4"));
}

#[test]
fn coverage_rejects_target_with_source_language() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.json", EN);
    fs::create_dir(dir.path().join("fork")).unwrap();
    let fork = write(&dir, "fork/en.json", RO);

    let output = uitext(&["coverage", "--json", "--source", arg(&en), arg(&fork)]);
    assert_eq!(output.status.code(), Some(64));
    assert!(stderr(&output).contains("same language 'en'"));
    assert!(stdout(&output).is_empty());
}

// =========================================================================
// render
// =========================================================================

#[test]
fn render_markup_keeps_argument_styling() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.json", EN);
    let text = write(&dir, "cart.json", CART_TEXT);

    let output = uitext(&["render", "--table", arg(&en), "--text", arg(&text), "--markup"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(
        stdout(&output).trim_end(),
        "Cart: 30 products - <span color=#ff0000>Insert Shopping Cart</span>"
    );
}

#[test]
fn render_without_color_prints_plain_text() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.json", EN);
    let text = write(&dir, "cart.json", CART_TEXT);

    let output = uitext(&["render", "--table", arg(&en), "--text", arg(&text)]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim_end(), "Cart: 30 products - Insert Shopping Cart");
}

#[test]
fn render_uses_plural_rules_of_requested_language() {
    let dir = TempDir::new().unwrap();
    let table = write(
        &dir,
        "table.json",
        r#"{ "plurals": { "products": { "one": "%s produs", "few": "%s produse", "other": "%s de produse" } } }"#,
    );
    let text = write(
        &dir,
        "count.json",
        r#"{ "plural_res": { "id": "products", "quantity": 5 } }"#,
    );

    let output = uitext(&["render", "--table", arg(&table), "--lang", "ro", "--text", arg(&text)]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "5 produse");
}

#[test]
fn render_json_outputs_styled_text() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.json", EN);
    let text = write(&dir, "cart.json", CART_TEXT);

    let output = uitext(&["render", "--table", arg(&en), "--text", arg(&text), "--json"]);
    let styled: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(styled["text"], "Cart: 30 products - Insert Shopping Cart");
    assert_eq!(styled["scopes"][0]["range"]["start"], 20);
}

#[test]
fn render_missing_resource_suggests_names() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.json", EN);
    let text = write(&dir, "typo.json", r#"{ "res": { "id": "cartt" } }"#);

    let output = uitext(&["render", "--table", arg(&en), "--text", arg(&text)]);
    assert_eq!(output.status.code(), Some(65));
    assert!(stderr(&output).contains("did you mean: cart"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn render_rejects_malformed_text() {
    let dir = TempDir::new().unwrap();
    let en = write(&dir, "en.json", EN);
    let text = write(&dir, "bad.json", r#"{ "shout": "hi" }"#);

    let output = uitext(&["render", "--table", arg(&en), "--text", arg(&text)]);
    assert_ne!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("invalid UIText"));
}
