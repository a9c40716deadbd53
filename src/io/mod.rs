//! Input/output operations: CLI, PNG export, progress, and errors

/// Command-line interface and solve runner
pub mod cli;
/// Runtime defaults for the CLI binary
pub mod configuration;
/// Error types for validation and export
pub mod error;
/// PNG rendering of collapse events
pub mod image;
/// Solve progress display
pub mod progress;
