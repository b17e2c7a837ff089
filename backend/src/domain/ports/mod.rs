//! Domain ports: the traits adapters implement at the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod repository;

pub use repository::{PolicyRepository, Repository, RepositoryError, UserRepository};
