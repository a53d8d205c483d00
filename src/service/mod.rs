//! Request checks shared by every handler.

mod validation;
pub use validation::{is_truthy, value_eq, RequestValidator};
