pub mod eligibility;
pub mod error;
pub mod repos;
pub mod service;
