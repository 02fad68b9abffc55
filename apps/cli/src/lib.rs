//! The `nesta` command-line application.
//!
//! Wires the SQLite repositories, the Steam clients and the core services
//! together and renders their outcomes for the terminal.

pub mod cli;
pub mod commands;
pub mod config;
mod main_lib;
pub mod render;

pub use main_lib::{build_state, init_tracing, AppState};
