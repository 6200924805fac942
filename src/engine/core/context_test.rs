use serde_json::json;

use crate::engine::core::context::{ExecutorContext, TransientStore};

// Row bookkeeping ----------------------------------------------------------

#[test]
fn row_indices_are_absolute_across_batches() {
    let mut ctx = ExecutorContext::new();
    assert_eq!(ctx.batch_index(), 0);
    assert_eq!(ctx.row_index(0), 0);
    assert_eq!(ctx.row_index(2), 2);

    ctx.advance_batch(3);
    assert_eq!(ctx.batch_index(), 1);
    assert_eq!(ctx.row_index(0), 3);
    assert_eq!(ctx.row_index(1), 4);

    ctx.advance_batch(0);
    assert_eq!(ctx.batch_index(), 2);
    assert_eq!(ctx.row_index(0), 3);
}

// Transient store ----------------------------------------------------------

#[test]
fn store_holds_values_for_the_length_of_a_run() {
    let mut store = TransientStore::new();
    assert!(store.is_empty());

    store.set("seen", 2i64);
    store.set("label", "alpha");

    assert_eq!(store.get("label"), Some(&json!("alpha")));
    assert_eq!(store.get_i64_or("seen", 0), 2);
    assert_eq!(store.get_i64_or("absent", 7), 7);

    assert_eq!(store.remove("seen"), Some(json!(2)));
    assert_eq!(store.get_i64_or("seen", 0), 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn context_store_is_reachable_mutably() {
    let mut ctx = ExecutorContext::new();
    ctx.store_mut().set("count", 1i64);
    let next = ctx.store().get_i64_or("count", 0) + 1;
    ctx.store_mut().set("count", next);
    assert_eq!(ctx.store().get_i64_or("count", 0), 2);
}
