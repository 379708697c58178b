//! Subpicture (subtitle) attribute record (6 bytes per stream).

use std::fmt;

use super::LanguageType;
use crate::error::Result;
use crate::utils::ByteView;

/// Size of one subpicture attribute record in bytes.
pub const SUBPICTURE_ATTRIBUTES_LEN: usize = 6;

/// Subpicture coding mode. Code 0 is 2-bit run-length encoding, the only
/// coding defined for DVD-Video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubpictureCoding {
    /// 2-bit run-length encoded bitmaps
    TwoBitRle,
    /// Any other coding value
    None(u8),
}

impl From<u8> for SubpictureCoding {
    fn from(value: u8) -> Self {
        if value == 0 {
            SubpictureCoding::TwoBitRle
        } else {
            SubpictureCoding::None(value)
        }
    }
}

/// Preferred presentation of the subpicture stream (SPRM 19 values).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubpictureExtension {
    /// Code 0 and every reserved code
    NotSpecified,
    /// Normal sized captions
    Normal,
    /// Bigger captions
    Large,
    /// Captions for children
    Children,
    /// Normal sized closed captions
    ClosedCaptions,
    /// Bigger closed captions
    LargeClosedCaptions,
    /// Closed captions for children
    ChildrensClosedCaptions,
    /// Forced captions
    Forced,
    /// Director's comments
    DirectorsCommentary,
    /// Bigger director's comments
    LargeDirectorsCommentary,
    /// Director's comments for children
    DirectorsCommentaryForChildren,
}

impl From<u8> for SubpictureExtension {
    fn from(value: u8) -> Self {
        match value {
            1 => SubpictureExtension::Normal,
            2 => SubpictureExtension::Large,
            3 => SubpictureExtension::Children,
            5 => SubpictureExtension::ClosedCaptions,
            6 => SubpictureExtension::LargeClosedCaptions,
            7 => SubpictureExtension::ChildrensClosedCaptions,
            9 => SubpictureExtension::Forced,
            13 => SubpictureExtension::DirectorsCommentary,
            14 => SubpictureExtension::LargeDirectorsCommentary,
            15 => SubpictureExtension::DirectorsCommentaryForChildren,
            _ => SubpictureExtension::NotSpecified,
        }
    }
}

impl fmt::Display for SubpictureExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SubpictureExtension::NotSpecified => "Not Specified",
            SubpictureExtension::Normal => "Normal",
            SubpictureExtension::Large => "Large",
            SubpictureExtension::Children => "Children",
            SubpictureExtension::ClosedCaptions => "Closed Captions",
            SubpictureExtension::LargeClosedCaptions => "Large Closed Captions",
            SubpictureExtension::ChildrensClosedCaptions => "Children's Closed Captions",
            SubpictureExtension::Forced => "Forced",
            SubpictureExtension::DirectorsCommentary => "Director's Commentary",
            SubpictureExtension::LargeDirectorsCommentary => "Large Director's Commentary",
            SubpictureExtension::DirectorsCommentaryForChildren => {
                "Director's Commentary for Children"
            }
        };
        f.write_str(label)
    }
}

/// Decoded subpicture attribute record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubpictureAttributes {
    pub coding: SubpictureCoding,
    pub language_type: LanguageType,
    pub language_code: [u8; 2],
    /// Reserved language code extension byte
    pub language_extension: u8,
    pub extension: SubpictureExtension,
}

impl SubpictureAttributes {
    /// Parse a subpicture attribute record at `offset`.
    pub fn parse(view: &ByteView, offset: usize) -> Result<Self> {
        let raw = view.bytes(offset, SUBPICTURE_ATTRIBUTES_LEN)?;

        Ok(Self {
            coding: SubpictureCoding::from(raw[0] >> 5),
            language_type: LanguageType::from(raw[0] & 0x03),
            language_code: [raw[2], raw[3]],
            language_extension: raw[4],
            extension: SubpictureExtension::from(raw[5]),
        })
    }

    /// Parse `N` consecutive records starting at `offset`.
    pub fn parse_array<const N: usize>(view: &ByteView, offset: usize) -> Result<[Self; N]> {
        let mut records = [Self::EMPTY; N];
        for (i, record) in records.iter_mut().enumerate() {
            *record = Self::parse(view, view.at(offset, i * SUBPICTURE_ATTRIBUTES_LEN)?)?;
        }
        Ok(records)
    }

    const EMPTY: Self = Self {
        coding: SubpictureCoding::TwoBitRle,
        language_type: LanguageType::Unspecified,
        language_code: [0, 0],
        language_extension: 0,
        extension: SubpictureExtension::NotSpecified,
    };
}
