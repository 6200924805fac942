use serde_json::json;

use crate::test_helpers::factory::Factory;

#[test]
fn test_batch_factory_builds_rows_in_order() {
    let batch = Factory::batch()
        .row("2KB", "500ms")
        .row("1MB", "1s")
        .create();

    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].value("size"), Some(&json!("2KB")));
    assert_eq!(batch[1].value("time"), Some(&json!("1s")));
}

#[test]
fn test_batch_factory_respects_custom_column_names() {
    let batch = Factory::batch()
        .columns("transfer", "elapsed")
        .row("10KB", "2s")
        .create();

    assert_eq!(batch[0].value("transfer"), Some(&json!("10KB")));
    assert_eq!(batch[0].value("elapsed"), Some(&json!("2s")));
    assert_eq!(batch[0].value("size"), None);
}
