use crate::types::{Credentials, SignError};

pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";
pub const SESSION_TOKEN_VAR: &str = "AWS_SESSION_TOKEN";

/// Source of signing credentials, consulted on every signing call
pub trait CredentialsSource: Send + Sync {
    fn credentials(&self) -> Result<Credentials, SignError>;
}

/// Reads credentials from the process environment each time they are requested,
/// so rotated session credentials are picked up without a restart.
#[derive(Debug, Clone, Copy)]
pub struct EnvCredentials {
    access_key_id_var: &'static str,
    secret_access_key_var: &'static str,
    session_token_var: &'static str,
}

impl EnvCredentials {
    /// Read `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`
    pub fn new() -> Self {
        Self::with_vars(ACCESS_KEY_ID_VAR, SECRET_ACCESS_KEY_VAR, SESSION_TOKEN_VAR)
    }

    pub fn with_vars(
        access_key_id_var: &'static str,
        secret_access_key_var: &'static str,
        session_token_var: &'static str,
    ) -> Self {
        Self {
            access_key_id_var,
            secret_access_key_var,
            session_token_var,
        }
    }

    fn load_with<F>(&self, lookup: F) -> Result<Credentials, SignError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| SignError::MissingCredentials(name.to_string()))
        };

        Ok(Credentials {
            access_key_id: required(self.access_key_id_var)?,
            secret_access_key: required(self.secret_access_key_var)?,
            session_token: lookup(self.session_token_var).filter(|token| !token.is_empty()),
        })
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialsSource for EnvCredentials {
    fn credentials(&self) -> Result<Credentials, SignError> {
        self.load_with(|name| std::env::var(name).ok())
    }
}

/// Fixed credentials
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsSource for StaticCredentials {
    fn credentials(&self) -> Result<Credentials, SignError> {
        Ok(self.credentials.clone())
    }
}
