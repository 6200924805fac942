use crate::engine::core::ExecutorContext;
use crate::engine::directive::args::Arguments;
use crate::engine::directive::drop::DropColumn;
use crate::engine::directive::traits::Directive;
use crate::recipe::tokenizer::tokenize;
use crate::test_helpers::factory::Factory;

fn drop_column(arg_line: &str) -> DropColumn {
    let args = Arguments::bind(&DropColumn::usage(), &tokenize(arg_line)).unwrap();
    DropColumn::from_args(&args).unwrap()
}

#[test]
fn removes_the_column_from_every_row() {
    let mut directive = drop_column(":time");
    let mut ctx = ExecutorContext::new();

    let batch = vec![Factory::row().create(), Factory::row().create()];
    let out = directive.execute(batch, &mut ctx).unwrap();

    assert!(out.iter().all(|row| row.value("time").is_none()));
    assert!(out.iter().all(|row| row.value("size").is_some()));
}

#[test]
fn rows_without_the_column_pass_unchanged() {
    let mut directive = drop_column(":absent");
    let mut ctx = ExecutorContext::new();

    let batch = vec![Factory::row().create()];
    let out = directive.execute(batch.clone(), &mut ctx).unwrap();

    assert_eq!(out, batch);
}
