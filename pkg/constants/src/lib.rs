//! Centralized constants for the regsec project.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod history;
pub mod names;
pub mod paths;
pub mod secret;
