//! Common types used across the application.

pub mod format;
pub mod id;
pub mod money;

pub use format::{Grouping, group_digits};
pub use id::TransactionId;
pub use money::{Currency, Money, MoneyError};
