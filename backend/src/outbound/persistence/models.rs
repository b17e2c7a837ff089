//! Internal Diesel row structs.
//!
//! Persistence-layer implementation details; adapters convert them to the
//! domain records before returning.

use diesel::prelude::*;

use super::schema::{policies, users};
use crate::domain::{Policy, PolicyId, User, UserId};

/// Row read back from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Column values written on insert and on full replacement.
///
/// `None` writes `NULL`, so a replacement clears fields the client omitted.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserValues<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: Some(UserId::new(row.id)),
            name: row.name,
            email: row.email,
        }
    }
}

impl<'a> From<&'a User> for UserValues<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            name: user.name.as_deref(),
            email: user.email.as_deref(),
        }
    }
}

/// Row read back from the policies table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = policies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PolicyRow {
    pub id: i64,
    pub policy_number: Option<String>,
    pub policy_type: Option<String>,
    pub premium: f64,
}

/// Column values written on insert and on full replacement.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = policies)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct PolicyValues<'a> {
    pub policy_number: Option<&'a str>,
    pub policy_type: Option<&'a str>,
    pub premium: f64,
}

impl From<PolicyRow> for Policy {
    fn from(row: PolicyRow) -> Self {
        Self {
            id: Some(PolicyId::new(row.id)),
            policy_number: row.policy_number,
            policy_type: row.policy_type,
            premium: row.premium,
        }
    }
}

impl<'a> From<&'a Policy> for PolicyValues<'a> {
    fn from(policy: &'a Policy) -> Self {
        Self {
            policy_number: policy.policy_number.as_deref(),
            policy_type: policy.policy_type.as_deref(),
            premium: policy.premium,
        }
    }
}
