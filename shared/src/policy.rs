use serde_json::{Map, Value};

/// Flags the trigger writes into every pre-signup response.
///
/// Phone auto-verification is intentionally absent: whatever the pool sent in
/// `autoVerifyPhone` is returned as-is. Turning it on needs a policy decision,
/// not a config switch, so there is no field for it here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupPolicy {
    pub auto_confirm_user: bool,
    pub auto_verify_email: bool,
}

impl SignupPolicy {
    pub const AUTO_CONFIRM: SignupPolicy = SignupPolicy {
        auto_confirm_user: true,
        auto_verify_email: true,
    };

    pub fn apply(&self, response: &mut Map<String, Value>) {
        response.insert(
            "autoConfirmUser".to_string(),
            Value::Bool(self.auto_confirm_user),
        );
        response.insert(
            "autoVerifyEmail".to_string(),
            Value::Bool(self.auto_verify_email),
        );
    }
}

impl Default for SignupPolicy {
    fn default() -> Self {
        SignupPolicy::AUTO_CONFIRM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_apply_sets_both_flags() {
        let mut response = Map::new();
        SignupPolicy::default().apply(&mut response);

        assert_eq!(
            Value::Object(response),
            json!({ "autoConfirmUser": true, "autoVerifyEmail": true })
        );
    }

    #[test]
    fn test_apply_overwrites_existing_flags() {
        let mut response = object(json!({ "autoConfirmUser": null, "autoVerifyEmail": "no" }));
        SignupPolicy::AUTO_CONFIRM.apply(&mut response);

        assert_eq!(response["autoConfirmUser"], json!(true));
        assert_eq!(response["autoVerifyEmail"], json!(true));
    }

    #[test]
    fn test_apply_leaves_phone_flag_alone() {
        let mut response = object(json!({ "autoVerifyPhone": false }));
        SignupPolicy::AUTO_CONFIRM.apply(&mut response);

        assert_eq!(
            Value::Object(response),
            json!({
                "autoConfirmUser": true,
                "autoVerifyEmail": true,
                "autoVerifyPhone": false
            })
        );
    }
}
