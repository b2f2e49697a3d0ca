/// Scan handling module
///
/// This module handles:
/// - Loading and decoding the uploaded image (loader.rs)
/// - The simulated analysis step (analyzer.rs)

pub mod analyzer;
pub mod loader;
