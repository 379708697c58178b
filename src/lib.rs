//! # libdvdifo
//!
//! Decoder for the navigation metadata of DVD-Video discs.
//!
//! Reads `VIDEO_TS.IFO` and every `VTS_nn_0.IFO`, then cross-references the
//! title search table, program chains and stream attributes into a list of
//! titles with their audio and subtitle tracks. The same engine is exposed to
//! JavaScript through WebAssembly for in-memory IFO buffers.

pub mod attributes;
pub mod catalog;
pub mod disc;
pub mod error;
pub mod ifo;
mod inspector;
pub mod nav;
pub mod title;
pub mod utils;

#[cfg(test)]
mod fixtures;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize the WASM module. Call this once before using other functions.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better error messages for panics in debug builds
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Re-export main types
pub use catalog::{CatalogOptions, DiscCatalog};
pub use disc::{DirectorySource, DiscReader, IfoSource, LanguageTable, MemorySource};
pub use error::{IfoError, Result};
pub use ifo::{VmgDescriptor, VtsDescriptor};
pub use inspector::*;
pub use title::{AudioTrack, SubtitleTrack, SubtitleVariant, Title, TitleResolver};
