//! Tolerant year/month/day/hour/minute entry.
//!
//! Typed values are held as pending fields and folded over the committed
//! date on every edit. Only a valid, in-range candidate is committed.

pub mod field;
pub mod selector;

pub use field::{DateField, FieldValidity, MONTH_LABELS, PendingFields};
pub use selector::{DateCommit, DateSelector};
