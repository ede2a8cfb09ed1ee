use crate::modules::session::schema::Role;

/// One entry of the mock credential table.
#[derive(Debug, Clone)]
pub struct Credential {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

/// Fixed demo identities, one per role. Passwords are plaintext on purpose:
/// this is mock fixture data, not an account store.
pub const MOCK_CREDENTIALS: [Credential; 3] = [
    Credential { email: "oussema_admin@gmail.com", password: "123456", role: Role::Admin },
    Credential { email: "oussema_viewer@gmail.com", password: "123456", role: Role::Viewer },
    Credential { email: "oussema_uploader@gmail.com", password: "123456", role: Role::Uploader },
];
