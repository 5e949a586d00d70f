//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
//!
//! ## Note
//!
//! The tests that solve programs are only ran when the backend they use is enabled.

#[cfg(feature = "microlp")]
mod microlp;
mod tables;
