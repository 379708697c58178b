//! Fixed-size attribute records stored in the IFO headers.
//!
//! Each record is a packed bitfield: 2 bytes for video, 8 bytes per audio
//! stream and 6 bytes per subpicture stream.

mod audio;
mod subpicture;
mod video;

pub use audio::*;
pub use subpicture::*;
pub use video::*;

/// Whether an audio or subpicture stream carries a language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageType {
    /// No language code is stored (code 0)
    Unspecified,
    /// The record carries a two-letter language code
    UseLanguageCode,
}

impl From<u8> for LanguageType {
    fn from(value: u8) -> Self {
        if value == 0 {
            LanguageType::Unspecified
        } else {
            LanguageType::UseLanguageCode
        }
    }
}
