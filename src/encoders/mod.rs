pub mod algorithms;
pub mod codec;

// Re-export commonly used items
pub use algorithms::{bits, chunked, padding};
pub use codec::Codec;
