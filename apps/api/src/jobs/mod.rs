// Thin job-search lookup against the external JSearch API.
// Upstream failure is never fatal: the handler degrades to an empty listing set.

pub mod client;
pub mod handlers;

pub use client::{JSearchClient, JobListing, JobSearch};
