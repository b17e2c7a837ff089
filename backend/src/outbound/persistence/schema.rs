//! Diesel table definitions.
//!
//! Must match the SQL under `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Users collection.
    users (id) {
        /// Primary key generated by `BIGSERIAL`.
        id -> Int8,
        name -> Nullable<Varchar>,
        email -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Insurance policies.
    policies (id) {
        /// Primary key generated by `BIGSERIAL`.
        id -> Int8,
        policy_number -> Nullable<Varchar>,
        policy_type -> Nullable<Varchar>,
        premium -> Float8,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, policies);
