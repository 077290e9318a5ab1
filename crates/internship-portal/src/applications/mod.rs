//! Student applications against internship postings.
//!
//! Applying consumes exactly one slot of the matching posting. The slot
//! decrement and the application insert are committed together by the
//! repository, so a record exists if and only if a slot was reserved.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;


pub use domain::{
    ApplicationId, ApplicationRecord, ApplicationSubmission, NewApplication, APPLIED_AT_FORMAT,
};
pub use repository::ApplicationRepository;
pub use router::application_router;
pub use service::{ApplicationService, ApplicationServiceError};
