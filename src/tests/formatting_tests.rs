use serde_json::json;

use crate::formatting::{clean_description, str_field, truncate};

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a much longer description", 10), "a much ...");
    assert_eq!(truncate("ééééééééééé", 5), "éé...");
}

#[test]
fn test_clean_description() {
    assert_eq!(clean_description("\n\n**Platform** `tools`\nsecond line"), "Platform tools");
    assert_eq!(clean_description(""), "");
}

#[test]
fn test_str_field() {
    let repo = json!({"name": "infra", "description": null});
    assert_eq!(str_field(&repo, "name"), "infra");
    assert_eq!(str_field(&repo, "description"), "");
    assert_eq!(str_field(&repo, "missing"), "");
}
