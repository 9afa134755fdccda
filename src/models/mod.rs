pub mod document;
pub mod roster;
pub mod segment;

pub use document::*;
pub use roster::*;
pub use segment::*;
