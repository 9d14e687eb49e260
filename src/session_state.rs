use secrecy::{ExposeSecret, Secret};

/// Signed-in user's session, handed to the navbar by the surrounding app.
#[derive(Debug, Clone)]
pub struct UserSession {
    access_token: Secret<String>,
}

impl UserSession {
    pub fn new(access_token: Secret<String>) -> Self {
        Self { access_token }
    }

    /// Value of the `Authorization` header. The token is forwarded verbatim.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token.expose_secret())
    }
}
