use serde::Serialize;

/// Firm credentials, fixed at construction and embedded verbatim into every
/// outgoing request.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// The credential block every request carries. The field name
/// `authantication` is the remote service's own spelling.
#[derive(Debug, Clone, Serialize)]
pub struct AuthBlock {
    #[serde(rename = "UserName")]
    user_name: String,
    #[serde(rename = "Password")]
    password: String,
}

impl AuthBlock {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            user_name: credentials.username.clone(),
            password: credentials.password.clone(),
        }
    }
}
