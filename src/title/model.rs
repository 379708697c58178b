//! Resolved titles and their playable tracks.

use std::fmt;

use crate::attributes::{
    ApplicationMode, AudioCodeExtension, AudioCodingMode, Quantization, SubpictureExtension,
    VideoAttributes,
};
use crate::nav::PlaybackTime;

/// One user-visible title of the disc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    /// 1-based position in the title search table
    pub id: usize,
    /// 1-based title set holding the title (VTS_nn)
    pub title_set: u8,
    /// 1-based title number within the title set
    pub title_in_set: u8,
    pub chapter_count: u16,
    pub angle_count: u8,
    pub program_count: u8,
    pub cell_count: u8,
    pub runtime: PlaybackTime,
    pub video: VideoAttributes,
    pub audio_tracks: Vec<AudioTrack>,
    pub subtitle_tracks: Vec<SubtitleTrack>,
}

impl Title {
    #[inline]
    pub fn total_seconds(&self) -> u32 {
        self.runtime.total_seconds()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioTrack {
    /// Audio stream control slot of the program chain
    pub id: u8,
    /// Logical audio stream index within the title set
    pub stream: u8,
    pub coding_mode: AudioCodingMode,
    pub language_code: [u8; 2],
    pub language: String,
    pub channels: u8,
    pub channel_layout: String,
    pub application_mode: ApplicationMode,
    pub quantization: Quantization,
    pub sample_rate: u8,
    pub multichannel_extension: bool,
    pub code_extension: AudioCodeExtension,
    /// Karaoke or surround specific information byte
    pub application_info: u8,
}

/// Display mode a subtitle track was synthesized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtitleVariant {
    /// Full-frame 4:3 picture
    FourThree,
    /// Anamorphic 16:9 picture
    Wide,
    /// 16:9 letterboxed into a 4:3 frame
    Letterbox,
    /// 16:9 cropped to 4:3
    PanScan,
    /// Line 21 captions carried in the video stream
    ClosedCaption,
}

impl fmt::Display for SubtitleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SubtitleVariant::FourThree => "4x3",
            SubtitleVariant::Wide => "Wide",
            SubtitleVariant::Letterbox => "Letterbox",
            SubtitleVariant::PanScan => "Pan & Scan",
            SubtitleVariant::ClosedCaption => "Closed Caption",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleTrack {
    /// Sequential display id, starting at 1
    pub id: u16,
    pub language: String,
    /// Label such as "1: English (Wide) [VOBSUB]"
    pub description: String,
    pub variant: SubtitleVariant,
    /// Raw subpicture stream number; `None` for line 21 captions
    pub stream_number: Option<u8>,
    pub extension: SubpictureExtension,
}

impl SubtitleTrack {
    pub(crate) fn vobsub(
        id: u16,
        language: &str,
        variant: SubtitleVariant,
        stream_number: u8,
        extension: SubpictureExtension,
    ) -> Self {
        Self {
            id,
            language: language.to_string(),
            description: format!("{id}: {language} ({variant}) [VOBSUB]"),
            variant,
            stream_number: Some(stream_number),
            extension,
        }
    }

    pub(crate) fn closed_caption(id: u16, language: &str) -> Self {
        Self {
            id,
            language: language.to_string(),
            description: format!("{id}: {language}, Closed Caption [CC608]"),
            variant: SubtitleVariant::ClosedCaption,
            stream_number: None,
            extension: SubpictureExtension::NotSpecified,
        }
    }

    #[inline]
    pub fn is_closed_caption(&self) -> bool {
        self.variant == SubtitleVariant::ClosedCaption
    }
}
