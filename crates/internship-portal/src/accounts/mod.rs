//! User accounts: signup and login against the users table.
//!
//! Passwords are stored as salted SHA-256 digests (see [`credentials`]); the
//! request and response shapes carry plain email and password as before.

pub mod credentials;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use credentials::PasswordHash;
pub use domain::{LoginRequest, NewUser, SignupRequest, StoredUser, User, UserId, UserView};
pub use repository::UserRepository;
pub use router::account_router;
pub use service::{AccountService, AccountServiceError};
