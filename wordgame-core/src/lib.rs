pub mod scoring;
pub mod session;
pub mod word_validation;

// Re-export main components
pub use scoring::*;
pub use session::*;
pub use word_validation::*;
