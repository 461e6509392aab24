//! Test support shared by the lohai unit and integration tests: one logging
//! bootstrap and one proptest configuration.

pub mod logging;
pub mod proptest_prelude;
