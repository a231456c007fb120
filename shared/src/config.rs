use crate::SignupError;
use tracing::Level;

const FUNCTION_NAME: &str = "pre-signup";

/// Configuration for the trigger at runtime
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub app_name: Option<String>,
    pub environment: Option<String>,
    pub log_level: Level,
}

impl RuntimeConfig {
    /// Create runtime config from environment variables
    /// APP_NAME and ENVIRONMENT are set on the function by the deployment stack,
    /// LOG_LEVEL is optional and defaults to info
    pub fn from_env() -> Result<Self, SignupError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars<F>(lookup: F) -> Result<Self, SignupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => parse_level(&value)?,
            None => Level::INFO,
        };

        Ok(Self {
            app_name: lookup("APP_NAME").filter(|v| !v.is_empty()),
            environment: lookup("ENVIRONMENT").filter(|v| !v.is_empty()),
            log_level,
        })
    }

    /// Function name following the {APP_NAME}-{ENVIRONMENT}-pre-signup pattern
    pub fn function_name(&self) -> String {
        match (&self.app_name, &self.environment) {
            (Some(app_name), Some(environment)) => {
                format!("{}-{}-{}", app_name, environment, FUNCTION_NAME)
            }
            _ => FUNCTION_NAME.to_string(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            app_name: None,
            environment: None,
            log_level: Level::INFO,
        }
    }
}

fn parse_level(value: &str) -> Result<Level, SignupError> {
    value
        .trim()
        .parse::<Level>()
        .map_err(|_| SignupError::Configuration(format!("Invalid LOG_LEVEL: {}", value)))
}
