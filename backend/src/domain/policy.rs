//! Insurance policy record.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::entity::{Entity, define_entity_id};

define_entity_id! {
    /// Server-generated policy identifier.
    PolicyId
}

/// An insurance policy as stored and exchanged over the API.
///
/// No uniqueness or range rules apply: `policy_number` may repeat and
/// `premium` is stored exactly as supplied. String fields keep `null` and
/// missing values as `None`; a `null` or missing premium becomes `0.0`.
///
/// # Examples
/// ```
/// use insurance_backend::domain::Policy;
///
/// let policy: Policy = serde_json::from_str(
///     r#"{"policyNumber":"P-100","policyType":"auto","premium":499.99}"#,
/// )
/// .expect("valid policy JSON");
/// assert_eq!(policy.policy_number.as_deref(), Some("P-100"));
/// assert!(policy.id.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Policy {
    /// Identifier assigned on first persistence.
    #[schema(value_type = Option<i64>, example = 1)]
    pub id: Option<PolicyId>,
    /// Client-facing policy number.
    #[schema(example = "P-100")]
    pub policy_number: Option<String>,
    /// Free-form product line, e.g. `auto` or `home`.
    #[schema(example = "auto")]
    pub policy_type: Option<String>,
    /// Premium amount.
    #[serde(deserialize_with = "null_as_zero")]
    #[schema(example = 499.99)]
    pub premium: f64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

impl Policy {
    /// Build an unsaved policy.
    pub fn new(
        policy_number: impl Into<String>,
        policy_type: impl Into<String>,
        premium: f64,
    ) -> Self {
        Self {
            id: None,
            policy_number: Some(policy_number.into()),
            policy_type: Some(policy_type.into()),
            premium,
        }
    }
}

impl Entity for Policy {
    type Id = PolicyId;

    fn id(&self) -> Option<PolicyId> {
        self.id
    }

    fn with_id(self, id: PolicyId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    fn uses_camel_case_field_names() {
        let policy = Policy::new("P-100", "auto", 499.99).with_id(PolicyId::new(12));
        let value = serde_json::to_value(&policy).expect("serialise policy");
        assert_eq!(value.get("policyNumber").and_then(Value::as_str), Some("P-100"));
        assert_eq!(value.get("policyType").and_then(Value::as_str), Some("auto"));
        assert_eq!(value.get("premium").and_then(Value::as_f64), Some(499.99));
        assert_eq!(value.get("id").and_then(Value::as_i64), Some(12));
        assert!(value.get("policy_number").is_none());
    }

    #[rstest]
    fn accepts_out_of_range_premiums() {
        let policy: Policy = serde_json::from_value(json!({
            "policyNumber": "P-1",
            "policyType": "",
            "premium": -12.5
        }))
        .expect("deserialise policy");
        assert_eq!(policy.premium, -12.5);
    }

    #[rstest]
    fn rejects_non_numeric_premium() {
        let result = serde_json::from_value::<Policy>(json!({ "premium": "lots" }));
        assert!(result.is_err());
    }

    #[rstest]
    #[case(json!({ "policyNumber": "P-1", "policyType": null, "premium": null }))]
    #[case(json!({ "policyNumber": "P-1" }))]
    fn null_and_missing_fields_are_accepted(#[case] payload: Value) {
        let policy: Policy = serde_json::from_value(payload).expect("deserialise policy");
        assert_eq!(policy.policy_number.as_deref(), Some("P-1"));
        assert_eq!(policy.policy_type, None);
        assert_eq!(policy.premium, 0.0);
    }

    #[rstest]
    fn absent_strings_serialise_as_null() {
        let value = serde_json::to_value(Policy::default()).expect("serialise policy");
        assert_eq!(value.get("policyType"), Some(&Value::Null));
        assert_eq!(value.get("policyNumber"), Some(&Value::Null));
    }
}
