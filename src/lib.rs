// Lib file to expose the sample module for testing and external usage.
// This file serves as the root for the library crate.

/// Module containing the example entity.
/// This includes the `StyleSample` struct and its read and reset operations.
pub mod sample;
