pub mod bits;
pub mod chunked;
pub mod errors;
pub mod padding;

// Re-export error types for public API
pub use errors::{DecodeError, FormatNotFoundError, find_closest_format};
