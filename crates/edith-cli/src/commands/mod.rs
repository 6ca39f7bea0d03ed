pub mod allocations;
pub mod common;
pub mod fundraising;
pub mod schedule;
pub mod supply;
pub mod validate;
