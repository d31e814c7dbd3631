// All analysis lives in clauseguard-core
// This CLI is a thin wrapper around the core library

// Re-export core types for convenience
pub use clauseguard_core::*;
