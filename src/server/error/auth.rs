use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The OAuth callback arrived without an authorization code.
    #[error("Authorization code missing from OAuth callback")]
    MissingAuthorizationCode,

    /// A dashboard request arrived without an access key.
    #[error("Access key missing from Authorization header")]
    MissingAccessKey,

    /// Discord rejected the access key presented by the dashboard.
    #[error("Discord rejected the provided access key")]
    InvalidAccessKey,

    /// Exchanging the authorization code for an access token failed.
    ///
    /// Covers both a code Discord refuses and transport failures talking to the
    /// token endpoint.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}
