mod auth;
mod client;


pub use auth::{Authenticator, StoredToken};
pub use client::{SheetsClient, UpdateResponse};
