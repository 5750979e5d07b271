//! Common utility functions.

pub mod fs;
pub mod process;

// Re-export commonly used items
pub use fs::{copy_tree, slurp, spit};
pub use process::run_async_in;
