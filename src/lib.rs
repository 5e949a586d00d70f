//! # A backend agnostic interface to linear program solvers
//!
//! Linear programs are described once, independent of any solver, and handed to one of several
//! interchangeable backends. Native status codes, parameters and variable types of each backend
//! are translated into one vocabulary.
#![warn(missing_docs)]

pub mod backend;
pub mod data;
pub mod error;
pub mod solver;

#[cfg(test)]
mod tests;
