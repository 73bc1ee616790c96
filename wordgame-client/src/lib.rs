pub mod http;
pub mod service;
pub mod timer;

// Re-export main components
pub use http::*;
pub use service::*;
pub use timer::*;
