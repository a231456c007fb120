use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::{SignupError, SignupResult};

/// Pre-signup trigger event as delivered by the Cognito user pool.
///
/// The event is kept as the JSON object the pool sent. Fields are read
/// through accessors and only `response` is ever written, so every other key
/// (including nulls and values of unexpected types) goes back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreSignUpEvent(Map<String, Value>);

impl PreSignUpEvent {
    pub fn trigger_source(&self) -> Option<&Value> {
        self.0.get("triggerSource")
    }

    pub fn user_pool_id(&self) -> Option<&Value> {
        self.0.get("userPoolId")
    }

    pub fn user_name(&self) -> Option<&Value> {
        self.0.get("userName")
    }

    /// Known trigger source, if `triggerSource` is one of the pre-signup values.
    pub fn trigger(&self) -> Option<TriggerSource> {
        self.trigger_source()?.as_str()?.parse().ok()
    }

    /// `request.userAttributes`, unless `request` or the attributes are
    /// missing or null.
    pub fn user_attributes(&self) -> Option<&Value> {
        let request = self.0.get("request").filter(|v| !v.is_null())?;
        request.get("userAttributes").filter(|v| !v.is_null())
    }

    /// The `response` object the trigger writes its flags into.
    pub fn response_mut(&mut self) -> SignupResult<&mut Map<String, Value>> {
        match self.0.get_mut("response") {
            Some(Value::Object(response)) => Ok(response),
            Some(other) => Err(SignupError::MalformedEvent(format!(
                "response is not an object: {}",
                other
            ))),
            None => Err(SignupError::MalformedEvent(
                "response missing from event".to_string(),
            )),
        }
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSource {
    /// Self-service sign-up through the hosted UI or `SignUp` API
    SignUp,
    /// `AdminCreateUser`
    AdminCreateUser,
    /// Federated sign-in creating a linked user
    ExternalProvider,
}

impl FromStr for TriggerSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PreSignUp_SignUp" => Ok(TriggerSource::SignUp),
            "PreSignUp_AdminCreateUser" => Ok(TriggerSource::AdminCreateUser),
            "PreSignUp_ExternalProvider" => Ok(TriggerSource::ExternalProvider),
            other => Err(format!("Unknown pre-signup trigger source: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(value: Value) -> PreSignUpEvent {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_trigger_source_parsing() {
        assert_eq!(
            "PreSignUp_SignUp".parse::<TriggerSource>(),
            Ok(TriggerSource::SignUp)
        );
        assert_eq!(
            "PreSignUp_AdminCreateUser".parse::<TriggerSource>(),
            Ok(TriggerSource::AdminCreateUser)
        );
        assert_eq!(
            "PreSignUp_ExternalProvider".parse::<TriggerSource>(),
            Ok(TriggerSource::ExternalProvider)
        );
        assert!("PostConfirmation_ConfirmSignUp".parse::<TriggerSource>().is_err());
    }

    #[test]
    fn test_trigger_of_non_string_source() {
        assert_eq!(event(json!({ "triggerSource": 7, "response": {} })).trigger(), None);
        assert_eq!(event(json!({ "response": {} })).trigger(), None);
    }

    #[test]
    fn test_user_attributes_absent_or_null() {
        assert!(event(json!({ "request": {}, "response": {} }))
            .user_attributes()
            .is_none());
        assert!(event(json!({ "request": null, "response": {} }))
            .user_attributes()
            .is_none());
        assert!(event(json!({ "request": { "userAttributes": null }, "response": {} }))
            .user_attributes()
            .is_none());
    }

    #[test]
    fn test_response_mut_requires_object() {
        assert!(matches!(
            event(json!({ "response": null })).response_mut(),
            Err(SignupError::MalformedEvent(_))
        ));
        assert!(matches!(
            event(json!({ "userName": "alice" })).response_mut(),
            Err(SignupError::MalformedEvent(_))
        ));

        let mut ok = event(json!({ "response": { "autoVerifyPhone": false } }));
        assert_eq!(ok.response_mut().unwrap().len(), 1);
    }
}
