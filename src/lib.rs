// Library re-exports for integration testing.
// The main binary is in main.rs; this exposes selected modules for tests.

pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod mock;
pub mod project;
pub mod scaffold;

pub mod commands;
