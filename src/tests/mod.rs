//! # Scenario tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn general_form()`: the program, built constraint by constraint
//! * `fn raw_rows()`: the same constraints, in compressed row format
//! * `fn objective()`
