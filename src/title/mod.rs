//! Resolved titles: the user-facing view of the disc navigation tree.

mod model;
mod resolver;

pub use model::*;
pub use resolver::*;
