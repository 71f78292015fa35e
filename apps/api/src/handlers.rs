pub mod access_requests;
pub mod health;
pub mod me;
pub mod security;
