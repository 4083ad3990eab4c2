pub mod algorithms;

// Re-export commonly used items
pub use algorithms::{block, fixed128, stream};
