pub mod counters;
pub mod models;
pub mod ranking;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
