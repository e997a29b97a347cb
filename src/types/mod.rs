// ABOUTME: Type-safe identifiers for panel resources.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod id;

pub use id::{ContainerId, Id, ImageId};
