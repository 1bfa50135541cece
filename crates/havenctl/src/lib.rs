//! havenctl - command-line front end for the Haven dashboard backend.

pub mod cli;
pub mod commands;
pub mod errors;
pub mod render;
