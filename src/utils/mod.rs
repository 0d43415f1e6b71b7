pub mod data;
pub mod fallback;
pub mod status;
pub mod teams;

pub use status::StatusClassifier;
pub use teams::TeamNameResolver;
