//! Outbound adapters implementing the repository port.
//!
//! - **memory**: process-local store, used without a database and in tests
//! - **persistence**: PostgreSQL repositories using Diesel

pub mod memory;
pub mod persistence;

pub use memory::InMemoryRepository;
