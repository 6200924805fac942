pub mod engine;
pub mod logging;
pub mod recipe;
pub mod shared;
pub mod units;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
