//! Identity contract shared by persisted records.

use std::fmt::Debug;
use std::hash::Hash;

/// A record stored and retrieved by a server-generated identity.
///
/// Stores call [`Entity::with_id`] when they assign an identifier on first
/// persistence; callers never choose identifiers themselves.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type wrapping the 64-bit value generated by the store.
    type Id: Copy + Ord + Hash + Debug + Send + Sync + From<i64> + Into<i64> + 'static;

    /// Identifier assigned by the store, `None` before first persistence.
    fn id(&self) -> Option<Self::Id>;

    /// Return the record carrying `id`.
    #[must_use]
    fn with_id(self, id: Self::Id) -> Self;
}

/// Declare a transparent 64-bit identifier newtype for an entity.
macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw identifier value.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Raw identifier value.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use define_entity_id;
