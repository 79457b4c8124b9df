mod authorization;
mod credentials;

pub use authorization::{AuthorizationInfo, CredentialScope, parse_authorization_header};
pub use credentials::{CredentialsSource, EnvCredentials, StaticCredentials};
