pub mod directory;
pub mod session;
pub mod uploads;
