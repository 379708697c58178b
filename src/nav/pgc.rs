//! Program chain (PGC) parsing.

use std::fmt;

use crate::error::Result;
use crate::utils::{bcd, ByteView};

/// Number of audio stream control slots in a PGC.
pub const AUDIO_CONTROL_SLOTS: usize = 8;
/// Number of subpicture stream control slots in a PGC.
pub const SUBPICTURE_CONTROL_SLOTS: usize = 32;

const AUDIO_CONTROL_OFFSET: usize = 0x0C;
const SUBPICTURE_CONTROL_OFFSET: usize = 0x1C;
const SUBPICTURE_CONTROL_LEN: usize = 4;

/// Bytes of a PGC read by this decoder, up to the end of the subpicture controls.
pub const PGC_LEN: usize = SUBPICTURE_CONTROL_OFFSET + SUBPICTURE_CONTROL_SLOTS * SUBPICTURE_CONTROL_LEN;

/// Frame rate encoded in the top two bits of the playback time frame byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRate {
    /// Code 1
    Fps25,
    /// Code 3
    Fps30,
    /// Any other code
    Unknown(u8),
}

impl From<u8> for FrameRate {
    fn from(value: u8) -> Self {
        match value {
            1 => FrameRate::Fps25,
            3 => FrameRate::Fps30,
            other => FrameRate::Unknown(other),
        }
    }
}

impl FrameRate {
    /// Nominal frames per second, 0 when unknown.
    pub fn fps(&self) -> u8 {
        match self {
            FrameRate::Fps25 => 25,
            FrameRate::Fps30 => 30,
            FrameRate::Unknown(_) => 0,
        }
    }
}

/// PGC playback time, decoded from BCD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
    pub frame_rate: FrameRate,
}

impl PlaybackTime {
    /// Parse the 4-byte BCD playback time at `offset`.
    pub fn parse(view: &ByteView, offset: usize) -> Result<Self> {
        let raw = view.bytes(offset, 4)?;
        Ok(Self {
            hours: bcd(raw[0]),
            minutes: bcd(raw[1]),
            seconds: bcd(raw[2]),
            frames: bcd(raw[3] & 0x3F),
            frame_rate: FrameRate::from(raw[3] >> 6),
        })
    }

    /// Whole seconds, frames discarded.
    pub fn total_seconds(&self) -> u32 {
        self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }
}

impl fmt::Display for PlaybackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

/// Audio stream control entry: which VTS audio stream a slot plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioStreamControl {
    pub available: bool,
    /// Logical audio stream index (0-7)
    pub stream: u8,
}

impl AudioStreamControl {
    pub fn parse(view: &ByteView, offset: usize) -> Result<Self> {
        let b0 = view.bytes(offset, 2)?[0];
        Ok(Self {
            available: (b0 & 0x80) != 0,
            stream: b0 & 0x07,
        })
    }
}

/// Subpicture stream control entry: one stream number per display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubpictureStreamControl {
    pub available: bool,
    pub stream_4x3: u8,
    pub stream_wide: u8,
    pub stream_letterbox: u8,
    pub stream_pan_scan: u8,
}

impl SubpictureStreamControl {
    pub fn parse(view: &ByteView, offset: usize) -> Result<Self> {
        let raw = view.bytes(offset, SUBPICTURE_CONTROL_LEN)?;
        Ok(Self {
            available: (raw[0] & 0x80) != 0,
            stream_4x3: raw[0] & 0x1F,
            stream_wide: raw[1] & 0x1F,
            stream_letterbox: raw[2] & 0x1F,
            stream_pan_scan: raw[3] & 0x1F,
        })
    }
}

/// Program chain: chapter/cell counts, duration and active stream slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramChain {
    /// Number of programs (chapters)
    pub program_count: u8,
    pub cell_count: u8,
    pub playback_time: PlaybackTime,
    pub audio_control: [AudioStreamControl; AUDIO_CONTROL_SLOTS],
    pub subpicture_control: [SubpictureStreamControl; SUBPICTURE_CONTROL_SLOTS],
}

impl ProgramChain {
    /// Parse a program chain starting at absolute byte `offset`.
    pub fn parse(view: &ByteView, offset: usize) -> Result<Self> {
        // Fields below are relative to the start of the chain.
        let pgc = ByteView::new(view.bytes(offset, PGC_LEN)?);

        let program_count = pgc.u8(2)?;
        let cell_count = pgc.u8(3)?;
        let playback_time = PlaybackTime::parse(&pgc, 4)?;

        let mut audio_control = [AudioStreamControl::default(); AUDIO_CONTROL_SLOTS];
        for (i, slot) in audio_control.iter_mut().enumerate() {
            *slot = AudioStreamControl::parse(&pgc, AUDIO_CONTROL_OFFSET + i * 2)?;
        }

        let mut subpicture_control = [SubpictureStreamControl::default(); SUBPICTURE_CONTROL_SLOTS];
        for (i, slot) in subpicture_control.iter_mut().enumerate() {
            let slot_offset = SUBPICTURE_CONTROL_OFFSET + i * SUBPICTURE_CONTROL_LEN;
            *slot = SubpictureStreamControl::parse(&pgc, slot_offset)?;
        }

        Ok(Self {
            program_count,
            cell_count,
            playback_time,
            audio_control,
            subpicture_control,
        })
    }
}
