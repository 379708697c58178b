//! Disc access: IFO sources, the language table and the decoded disc tree.

mod language;
mod reader;
mod source;

pub use language::*;
pub use reader::*;
pub use source::*;
