pub mod board;
pub mod common;
pub mod object;

// Re-export common types
pub use common::{Distance, ObjectId, Position};

// Re-export board object types
pub use object::{GameObject, ObjectKind, Properties};

// Re-export the snapshot container
pub use board::Board;
