//! Catalog of internship postings, one per (organization, category) pair.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;


pub use domain::{Posting, PostingId, PostingKey, PostingUpsert};
pub use repository::PostingRepository;
pub use router::catalog_router;
pub use service::{PostingCatalog, PostingServiceError};
