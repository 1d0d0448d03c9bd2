mod index;
pub use index::Index;

mod section;
pub use section::{NotFound, Section};
