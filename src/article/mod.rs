//! Article-level plumbing
//!
//! Everything around the section summarizer: fetching an article, splitting
//! it into sections, truncating at trailing boilerplate sections and shaping
//! the per-section results into a response.

pub mod response;
pub mod sections;
pub mod source;
