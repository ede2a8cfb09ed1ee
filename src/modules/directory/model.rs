use rand::Rng;
use serde::Deserialize;
use validator::Validate;

use crate::modules::session::schema::Role;

/// Input for a locally added directory entry. Additions never reach the
/// remote listing.
#[derive(Debug, Deserialize, Validate)]
pub struct NewDirectoryRecord {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub company_name: String,
    pub website: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
}

/// Uniform pick over the three console roles. Mock data only: the remote
/// listing carries no authorization information, so the console invents a
/// role for display.
pub fn random_role() -> Role {
    match rand::thread_rng().gen_range(0..3) {
        0 => Role::Admin,
        1 => Role::Uploader,
        _ => Role::Viewer,
    }
}
