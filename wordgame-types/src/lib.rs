pub mod errors;
pub mod messages;
pub mod score;
pub mod word;

// Re-export all types
pub use errors::*;
pub use messages::*;
pub use score::*;
pub use word::*;
