//! HTTP transport
//!
//! Every API call goes through a [`Backend`]: one method, one path, one key,
//! one form, one JSON response. [`HttpBackend`] is the reqwest implementation;
//! tests and callers with special needs can supply their own.
//!
//! No retry or rate limiting happens at this layer. Errors are
//! passed through to the caller as they happen.

mod backend;
mod client;

pub use backend::Backend;
pub use client::HttpBackend;

#[cfg(test)]
mod tests;
