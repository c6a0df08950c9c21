//! Logging initialization shared by the binaries of this workspace.
pub mod tracing;
