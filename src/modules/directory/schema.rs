use serde::{Deserialize, Serialize};

use crate::modules::session::schema::Role;

/// One entry of the remote user listing, as it comes over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: RemoteCompany,
    pub website: String,
    pub address: RemoteAddress,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteCompany {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteAddress {
    pub city: String,
}

/// A directory entry as the console shows it: the remote fields flattened,
/// plus a locally assigned role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub website: String,
    pub city: String,
    pub role: Role,
}

impl DirectoryRecord {
    pub fn from_remote(user: RemoteUser, role: Role) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            company_name: user.company.name,
            website: user.website,
            city: user.address.city,
            role,
        }
    }
}
