use crate::{PreSignUpEvent, SignupPolicy, SignupResult};
use serde_json::Value;
use std::fmt;
use tracing::{debug, info, warn};

/// The attribute pair logged for every sign-up that carries user attributes.
/// Values are borrowed from the event untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeRecord<'a> {
    pub email: Option<&'a Value>,
    pub email_verified: Option<&'a Value>,
}

impl fmt::Display for AttributeRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "email={}, email_verified={}",
            FieldDisplay(self.email),
            FieldDisplay(self.email_verified)
        )
    }
}

/// Strings print bare, missing fields print empty, anything else as JSON.
struct FieldDisplay<'a>(Option<&'a Value>);

impl fmt::Display for FieldDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => Ok(()),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{}", other),
        }
    }
}

/// `None` when the event has no `request` or no `request.userAttributes`.
pub fn attribute_record(event: &PreSignUpEvent) -> Option<AttributeRecord<'_>> {
    let attributes = event.user_attributes()?;
    Some(AttributeRecord {
        email: attributes.get("email"),
        email_verified: attributes.get("email_verified"),
    })
}

/// Log the interesting parts of the event, auto-confirm the user and mark the
/// email verified. Every other field is returned as received.
///
/// Fails only when the event has no `response` object to write into.
pub fn handle_pre_signup(mut event: PreSignUpEvent) -> SignupResult<PreSignUpEvent> {
    info!("Pre-signup trigger invoked");
    info!("Trigger source: {}", FieldDisplay(event.trigger_source()));
    info!("User pool ID: {}", FieldDisplay(event.user_pool_id()));
    info!("Username: {}", FieldDisplay(event.user_name()));

    match event.trigger() {
        Some(trigger) => debug!("Recognized trigger {:?}", trigger),
        None => warn!(
            "Unrecognized trigger source {:?}, applying signup policy anyway",
            event.trigger_source()
        ),
    }

    match attribute_record(&event) {
        Some(record) => info!("User attributes: {}", record),
        None => debug!("No user attributes on request"),
    }

    SignupPolicy::AUTO_CONFIRM.apply(event.response_mut()?);

    info!("Auto-confirm and auto-verify flags set");
    Ok(event)
}

/// Entry point for the raw Lambda payload.
pub fn handle_pre_signup_json(payload: Value) -> SignupResult<Value> {
    let event: PreSignUpEvent = serde_json::from_value(payload)?;
    let event = handle_pre_signup(event)?;
    Ok(Value::Object(event.into_inner()))
}
