//! API resources
//!
//! One module per endpoint family. Each exposes its object types, its params,
//! and a client bound to a [`Client`](crate::Client).

pub mod event;
pub mod recipient;
