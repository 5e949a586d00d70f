//! # Storing of linear programs in memory
//!
//! This module provides the backend independent data structures used to describe linear programs.
//! Backends translate these into their own native structures in `backend::my_backend`.

pub mod linear_algebra;
pub mod linear_program;
