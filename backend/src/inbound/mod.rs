//! Inbound adapters translating external requests into repository calls.

pub mod http;
