//! Audio attribute record (8 bytes per stream).

use std::fmt;

use super::LanguageType;
use crate::error::Result;
use crate::utils::ByteView;

/// Size of one audio attribute record in bytes.
pub const AUDIO_ATTRIBUTES_LEN: usize = 8;

/// Audio coding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCodingMode {
    /// Dolby Digital
    Ac3,
    /// MPEG-1 audio, or MPEG-2 without extension stream
    Mpeg1,
    /// MPEG-2 with extension bitstream
    Mpeg2Extended,
    /// Linear PCM
    Lpcm,
    /// Digital Theater Systems
    Dts,
    /// Reserved code
    Unknown(u8),
}

impl From<u8> for AudioCodingMode {
    fn from(value: u8) -> Self {
        match value {
            0 => AudioCodingMode::Ac3,
            2 => AudioCodingMode::Mpeg1,
            3 => AudioCodingMode::Mpeg2Extended,
            4 => AudioCodingMode::Lpcm,
            6 => AudioCodingMode::Dts,
            other => AudioCodingMode::Unknown(other),
        }
    }
}

impl AudioCodingMode {
    #[inline]
    pub fn is_mpeg(&self) -> bool {
        matches!(self, AudioCodingMode::Mpeg1 | AudioCodingMode::Mpeg2Extended)
    }
}

impl fmt::Display for AudioCodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioCodingMode::Ac3 => f.write_str("AC-3"),
            AudioCodingMode::Mpeg1 => f.write_str("MPEG-1"),
            AudioCodingMode::Mpeg2Extended => f.write_str("MPEG-2 Extended"),
            AudioCodingMode::Lpcm => f.write_str("LPCM"),
            AudioCodingMode::Dts => f.write_str("DTS"),
            AudioCodingMode::Unknown(code) => write!(f, "Unknown ({code})"),
        }
    }
}

/// Application mode of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationMode {
    /// No application specific data (code 0)
    Unspecified,
    /// Application info holds the karaoke channel assignment
    Karaoke,
    /// Application info holds the surround (Dolby) flag
    Surround,
    /// Reserved code
    Unknown(u8),
}

impl From<u8> for ApplicationMode {
    fn from(value: u8) -> Self {
        match value {
            0 => ApplicationMode::Unspecified,
            1 => ApplicationMode::Karaoke,
            2 => ApplicationMode::Surround,
            other => ApplicationMode::Unknown(other),
        }
    }
}

/// Quantization field. Its meaning depends on the coding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantization {
    /// MPEG without dynamic range control
    NoDrc,
    /// Dynamic range control present
    Drc,
    /// 16-bit LPCM samples
    Bits16,
    /// 20-bit LPCM samples
    Bits20,
    /// 24-bit LPCM samples
    Bits24,
    /// The field is not defined for this coding mode
    NotApplicable(u8),
}

impl Quantization {
    fn decode(mode: AudioCodingMode, code: u8) -> Self {
        match mode {
            m if m.is_mpeg() => {
                if code == 0 {
                    Quantization::NoDrc
                } else {
                    Quantization::Drc
                }
            }
            AudioCodingMode::Lpcm => match code {
                0 => Quantization::Bits16,
                1 => Quantization::Bits20,
                2 => Quantization::Bits24,
                _ => Quantization::Drc,
            },
            _ => Quantization::NotApplicable(code),
        }
    }
}

/// Audio language code extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCodeExtension {
    /// No extension given (code 0)
    Unspecified,
    /// Normal audio
    Normal,
    /// Audio description for the visually impaired
    VisuallyImpaired,
    /// Director's comments
    DirectorsComments,
    /// Alternate director's comments
    AlternateDirectorsComments,
    /// Reserved code
    Unknown(u8),
}

impl From<u8> for AudioCodeExtension {
    fn from(value: u8) -> Self {
        match value {
            0 => AudioCodeExtension::Unspecified,
            1 => AudioCodeExtension::Normal,
            2 => AudioCodeExtension::VisuallyImpaired,
            3 => AudioCodeExtension::DirectorsComments,
            4 => AudioCodeExtension::AlternateDirectorsComments,
            other => AudioCodeExtension::Unknown(other),
        }
    }
}

impl fmt::Display for AudioCodeExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioCodeExtension::Unspecified => f.write_str("Unspecified"),
            AudioCodeExtension::Normal => f.write_str("Normal"),
            AudioCodeExtension::VisuallyImpaired => f.write_str("Visually Impaired"),
            AudioCodeExtension::DirectorsComments => f.write_str("Director's Comments"),
            AudioCodeExtension::AlternateDirectorsComments => {
                f.write_str("Alternate Director's Comments")
            }
            AudioCodeExtension::Unknown(code) => write!(f, "Unknown ({code})"),
        }
    }
}

/// Canonical layout label for a channel count.
pub fn channel_layout(channels: u8) -> &'static str {
    match channels {
        1 => "1.0",
        2 => "2.0",
        3 => "2.1",
        4 => "4.0",
        5 => "5.0",
        6 => "5.1",
        7 => "6.1",
        8 => "7.1",
        _ => "Unknown",
    }
}

/// Decoded audio attribute record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioAttributes {
    pub coding_mode: AudioCodingMode,
    pub multichannel_extension: bool,
    pub language_type: LanguageType,
    pub application_mode: ApplicationMode,
    pub quantization: Quantization,
    /// Sample rate code; 0 is 48 kHz
    pub sample_rate: u8,
    /// Number of channels (stored on disc as count - 1)
    pub channels: u8,
    pub language_code: [u8; 2],
    pub code_extension: AudioCodeExtension,
    /// Application information byte (karaoke/surround specific)
    pub application_info: u8,
}

impl AudioAttributes {
    /// Parse an audio attribute record at `offset`.
    pub fn parse(view: &ByteView, offset: usize) -> Result<Self> {
        let raw = view.bytes(offset, AUDIO_ATTRIBUTES_LEN)?;
        let (b0, b1) = (raw[0], raw[1]);
        let coding_mode = AudioCodingMode::from(b0 >> 5);

        Ok(Self {
            coding_mode,
            multichannel_extension: (b0 & 0x10) != 0,
            language_type: LanguageType::from((b0 >> 2) & 0x03),
            application_mode: ApplicationMode::from(b0 & 0x03),
            quantization: Quantization::decode(coding_mode, b1 >> 6),
            sample_rate: (b1 >> 4) & 0x03,
            channels: (b1 & 0x07) + 1,
            language_code: [raw[2], raw[3]],
            code_extension: AudioCodeExtension::from(raw[5]),
            application_info: raw[7],
        })
    }

    /// Parse `N` consecutive records starting at `offset`.
    pub fn parse_array<const N: usize>(view: &ByteView, offset: usize) -> Result<[Self; N]> {
        let mut records = [Self::EMPTY; N];
        for (i, record) in records.iter_mut().enumerate() {
            *record = Self::parse(view, view.at(offset, i * AUDIO_ATTRIBUTES_LEN)?)?;
        }
        Ok(records)
    }

    const EMPTY: Self = Self {
        coding_mode: AudioCodingMode::Ac3,
        multichannel_extension: false,
        language_type: LanguageType::Unspecified,
        application_mode: ApplicationMode::Unspecified,
        quantization: Quantization::NotApplicable(0),
        sample_rate: 0,
        channels: 1,
        language_code: [0, 0],
        code_extension: AudioCodeExtension::Unspecified,
        application_info: 0,
    };

    /// Layout label derived from the channel count.
    #[inline]
    pub fn channel_layout(&self) -> &'static str {
        channel_layout(self.channels)
    }
}
