use log::info;

use crate::modules::session::model::MOCK_CREDENTIALS;
use crate::modules::session::schema::Session;

/// Holds the current session, if any. Owned by the caller rather than kept
/// in a process-wide global, so identity-sensitive operations elsewhere take
/// the session explicitly.
#[derive(Debug, Default)]
pub struct SessionService {
    current: Option<Session>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact match against the mock credential table. On failure the current
    /// session is left untouched.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        let found =
            MOCK_CREDENTIALS.iter().find(|c| c.email == email && c.password == password);
        match found {
            Some(credential) => {
                info!("Session opened for {}", credential.email);
                self.current =
                    Some(Session { email: credential.email.to_string(), role: credential.role });
                true
            }
            None => false,
        }
    }

    /// Idempotent.
    pub fn logout(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }
}
