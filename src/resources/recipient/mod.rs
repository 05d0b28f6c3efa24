//! `/recipients` API
//!
//! Recipients are the individuals or companies transfers are sent to.

mod client;
mod types;

pub use client::{RecipientClient, RecipientIter};
pub use types::{
    BankAccount, BankAccountStatus, Card, Recipient, RecipientListParams, RecipientParams,
    RecipientType,
};
