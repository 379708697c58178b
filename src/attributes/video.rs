//! Video attribute record (2 bytes).

use std::fmt;

use crate::error::Result;
use crate::utils::ByteView;

/// Size of a video attribute record in bytes.
pub const VIDEO_ATTRIBUTES_LEN: usize = 2;

/// MPEG video coding standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoCoding {
    /// MPEG-1 video (code 0)
    Mpeg1,
    /// MPEG-2 video (any other code)
    Mpeg2,
}

impl From<u8> for VideoCoding {
    fn from(value: u8) -> Self {
        if value == 0 {
            VideoCoding::Mpeg1
        } else {
            VideoCoding::Mpeg2
        }
    }
}

/// Television system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoStandard {
    /// 525/60
    Ntsc,
    /// 625/50
    Pal,
    /// Reserved code
    Unknown(u8),
}

impl From<u8> for VideoStandard {
    fn from(value: u8) -> Self {
        match value {
            0 => VideoStandard::Ntsc,
            1 => VideoStandard::Pal,
            other => VideoStandard::Unknown(other),
        }
    }
}

impl fmt::Display for VideoStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoStandard::Ntsc => f.write_str("NTSC"),
            VideoStandard::Pal => f.write_str("PAL"),
            VideoStandard::Unknown(code) => write!(f, "Unknown ({code})"),
        }
    }
}

/// Display aspect ratio of the coded picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    /// 4:3 (code 0)
    FourThree,
    /// 16:9 (code 3)
    SixteenNine,
    /// Reserved code, treated as 4:3 when synthesizing subtitles
    Unspecified(u8),
}

impl From<u8> for AspectRatio {
    fn from(value: u8) -> Self {
        match value {
            0 => AspectRatio::FourThree,
            3 => AspectRatio::SixteenNine,
            other => AspectRatio::Unspecified(other),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectRatio::FourThree => f.write_str("4:3"),
            AspectRatio::SixteenNine => f.write_str("16:9"),
            AspectRatio::Unspecified(_) => f.write_str("Unspecified"),
        }
    }
}

/// Coded picture size. Heights depend on the television system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// 720x480 (NTSC) / 720x576 (PAL)
    Full,
    /// 704x480 / 704x576
    Cropped,
    /// 352x480 / 352x576
    HalfD1,
    /// 352x240 / 352x288
    Sif,
    /// Reserved code
    Unknown(u8),
}

impl From<u8> for Resolution {
    fn from(value: u8) -> Self {
        match value {
            0 => Resolution::Full,
            1 => Resolution::Cropped,
            2 => Resolution::HalfD1,
            3 => Resolution::Sif,
            other => Resolution::Unknown(other),
        }
    }
}

impl Resolution {
    /// Width and height in pixels for the given standard.
    pub fn dimensions(&self, standard: VideoStandard) -> Option<(u16, u16)> {
        let pal = standard == VideoStandard::Pal;
        let full_height = if pal { 576 } else { 480 };
        match self {
            Resolution::Full => Some((720, full_height)),
            Resolution::Cropped => Some((704, full_height)),
            Resolution::HalfD1 => Some((352, full_height)),
            Resolution::Sif => Some((352, if pal { 288 } else { 240 })),
            Resolution::Unknown(_) => None,
        }
    }
}

/// Source material flag, only meaningful for PAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilmSource {
    /// Not a PAL stream
    NotPal,
    /// PAL video shot on camera
    Camera,
    /// PAL video from film
    Film,
}

/// Decoded video attribute record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoAttributes {
    pub coding: VideoCoding,
    pub standard: VideoStandard,
    pub aspect_ratio: AspectRatio,
    /// Automatic pan&scan allowed (stored inverted on disc)
    pub auto_pan_scan: bool,
    /// Automatic letterbox allowed (stored inverted on disc)
    pub auto_letterbox: bool,
    /// Line 21 closed captions, field 1
    pub cc_field1: bool,
    /// Line 21 closed captions, field 2
    pub cc_field2: bool,
    pub resolution: Resolution,
    /// Picture is already letterboxed inside a 4:3 frame
    pub letterboxed: bool,
    pub film_source: FilmSource,
}

impl VideoAttributes {
    /// Parse a video attribute record at `offset`.
    pub fn parse(view: &ByteView, offset: usize) -> Result<Self> {
        let raw = view.bytes(offset, VIDEO_ATTRIBUTES_LEN)?;
        let (b0, b1) = (raw[0], raw[1]);

        let standard = VideoStandard::from((b0 >> 4) & 0x03);
        let film_source = match standard {
            VideoStandard::Pal if (b1 & 0x01) != 0 => FilmSource::Film,
            VideoStandard::Pal => FilmSource::Camera,
            _ => FilmSource::NotPal,
        };

        Ok(Self {
            coding: VideoCoding::from((b0 >> 6) & 0x03),
            standard,
            aspect_ratio: AspectRatio::from((b0 >> 2) & 0x03),
            auto_pan_scan: (b0 & 0x02) == 0,
            auto_letterbox: (b0 & 0x01) == 0,
            cc_field1: (b1 & 0x80) != 0,
            cc_field2: (b1 & 0x40) != 0,
            resolution: Resolution::from((b1 >> 3) & 0x07),
            letterboxed: (b1 & 0x04) != 0,
            film_source,
        })
    }

    /// True when either closed-caption field is present.
    #[inline]
    pub fn uses_closed_captions(&self) -> bool {
        self.cc_field1 || self.cc_field2
    }

    /// Picture size in pixels, if the resolution code is known.
    pub fn dimensions(&self) -> Option<(u16, u16)> {
        self.resolution.dimensions(self.standard)
    }
}
