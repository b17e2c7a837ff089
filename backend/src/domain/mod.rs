//! Domain records, identities and ports.
//!
//! Public surface:
//! - [`User`] / [`Policy`]: the two stored collections.
//! - [`Entity`]: identity contract the generic adapters rely on.
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - [`TraceId`]: request correlation identifier.
//! - [`ports`]: repository traits implemented by outbound adapters.

mod entity;
pub mod error;
pub mod policy;
pub mod ports;
mod trace_id;
pub mod user;

pub use self::entity::Entity;
pub use self::error::{Error, ErrorCode};
pub use self::policy::{Policy, PolicyId};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId};
