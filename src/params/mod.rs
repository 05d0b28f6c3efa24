//! Request parameter encoding
//!
//! Every request body or query string is built as a [`Form`]: an ordered list
//! of form fields. Resource params append their fields to a form, nested
//! objects using the bracket syntax the API expects (`card[number]=...`).

mod form;
mod types;

pub use form::Form;
pub use types::{BankAccountParams, CardParams, Params};
