use serde_json::json;

use crate::test_helpers::factory::Factory;

#[test]
fn test_row_factory_defaults_and_overrides() {
    let row = Factory::row()
        .with("size", "4KB")
        .with("label", "first")
        .create();

    assert_eq!(row.value("size"), Some(&json!("4KB")));
    assert_eq!(row.value("time"), Some(&json!("1s")));
    assert_eq!(row.value("label"), Some(&json!("first")));
}

#[test]
fn test_row_factory_without_removes_defaults() {
    let row = Factory::row().without("time").create();

    assert_eq!(row.value("time"), None);
    let names: Vec<&str> = row.names().collect();
    assert_eq!(names, vec!["size"]);
}

#[test]
fn test_row_factory_list_repeats_the_row() {
    let rows = Factory::row().with("size", "2KB").create_list(3);

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.value("size") == Some(&json!("2KB"))));
}
