//! Tests for the substitution pipeline
//!
//! Organized into focused submodules mirroring the pipeline stages.

// Test helper functions
mod helpers;



// Streaming pipeline tests
mod stream;
