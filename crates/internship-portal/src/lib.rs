//! Internship postings with limited slots, student applications against them,
//! and the user accounts behind the portal, persisted in a single SQLite file.

pub mod accounts;
pub mod applications;
pub mod catalog;
pub mod config;
pub mod error;
mod http;
pub mod store;
pub mod telemetry;

#[cfg(test)]
mod test_support;
