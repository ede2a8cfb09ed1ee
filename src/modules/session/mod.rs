pub mod model;
pub mod schema;
pub mod service;

pub use model::{Credential, MOCK_CREDENTIALS};
pub use schema::{Role, Session};
pub use service::SessionService;
