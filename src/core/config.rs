use std::env;

use crate::errors::AdapterError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub function_name: String,
    pub function_version: String,
}

impl AppConfig {
    /// Reads the variables the Lambda runtime sets for every function.
    pub fn from_env() -> Result<Self, AdapterError> {
        Self::from_vars(
            env::var("AWS_LAMBDA_FUNCTION_NAME").ok().as_deref(),
            env::var("AWS_LAMBDA_FUNCTION_VERSION").ok().as_deref(),
        )
    }

    pub fn from_vars(
        function_name: Option<&str>,
        function_version: Option<&str>,
    ) -> Result<Self, AdapterError> {
        let function_name = function_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                AdapterError::Config("AWS_LAMBDA_FUNCTION_NAME: not set".to_string())
            })?;

        Ok(Self {
            function_name: function_name.to_string(),
            function_version: function_version
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or("$LATEST")
                .to_string(),
        })
    }
}
