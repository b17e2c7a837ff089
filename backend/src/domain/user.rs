//! User record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entity::{Entity, define_entity_id};

define_entity_id! {
    /// Server-generated user identifier.
    UserId
}

/// A user as stored and exchanged over the API.
///
/// Fields are opaque client-supplied strings stored as-is. An explicit
/// `null` and a missing field are both kept as `None` and echoed back as
/// `null`.
///
/// # Examples
/// ```
/// use insurance_backend::domain::User;
///
/// let user: User = serde_json::from_str(r#"{"name":"Ada","email":"ada@example.com"}"#)
///     .expect("valid user JSON");
/// assert!(user.id.is_none());
/// assert_eq!(user, User::new("Ada", "ada@example.com"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    /// Identifier assigned on first persistence.
    #[schema(value_type = Option<i64>, example = 1)]
    pub id: Option<UserId>,
    /// Display name.
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    /// Contact address.
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

impl User {
    /// Build an unsaved user.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> Option<UserId> {
        self.id
    }

    fn with_id(self, id: UserId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
