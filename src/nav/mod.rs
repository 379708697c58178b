//! Navigation tables: title search pointers and program chains.
//!
//! These tables cross-reference each other by 1-based title numbers and by
//! byte offsets; the decoders here resolve the offsets eagerly so that no
//! decoded structure keeps a pointer back into the IFO buffer.

mod pgc;
mod pgci;
mod title_search;

pub use pgc::*;
pub use pgci::*;
pub use title_search::*;
