//! JavaScript facade over the disc catalog.
//!
//! The browser has no file system access to a disc, so IFO files are handed
//! over as byte buffers, resolved in one go and then queried through getters.

use js_sys::Uint32Array;
use wasm_bindgen::prelude::*;

use crate::catalog::DiscCatalog;
use crate::disc::{LanguageTable, MemorySource};
use crate::error::Result;
use crate::title::{AudioTrack, SubtitleTrack, Title};

/// Inspector for a disc supplied as in-memory IFO buffers.
#[wasm_bindgen]
pub struct DiscInspector {
    source: MemorySource,
    titles: Vec<Title>,
}

#[wasm_bindgen]
impl DiscInspector {
    /// Create an inspector with no files loaded.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            source: MemorySource::new(),
            titles: Vec::new(),
        }
    }

    /// Load the contents of VIDEO_TS.IFO.
    #[wasm_bindgen(js_name = loadVmg)]
    pub fn load_vmg(&mut self, data: &[u8]) {
        self.source.set_vmg(data.to_vec());
    }

    /// Load the contents of VTS_nn_0.IFO for the 1-based title set `n`.
    #[wasm_bindgen(js_name = loadTitleSet)]
    pub fn load_title_set(&mut self, n: u8, data: &[u8]) {
        self.source.set_title_set(n, data.to_vec());
    }

    /// Decode the loaded files and resolve all titles.
    /// Returns the number of titles, or throws the decode error message.
    #[wasm_bindgen]
    pub fn resolve(&mut self) -> std::result::Result<usize, JsValue> {
        self.resolve_titles()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Number of titles found by the last `resolve`.
    #[wasm_bindgen(getter, js_name = titleCount)]
    pub fn title_count(&self) -> usize {
        self.titles.len()
    }

    /// Get the title at a 0-based index.
    #[wasm_bindgen(js_name = getTitle)]
    pub fn get_title(&self, index: usize) -> Option<TitleInfo> {
        self.titles.get(index).cloned().map(|title| TitleInfo { title })
    }

    /// Runtime of every title in whole seconds.
    #[wasm_bindgen(js_name = getDurations)]
    pub fn get_durations(&self) -> Uint32Array {
        let seconds: Vec<u32> = self.titles.iter().map(Title::total_seconds).collect();
        Uint32Array::from(&seconds[..])
    }

    /// Dispose of all loaded buffers and resolved titles.
    #[wasm_bindgen]
    pub fn dispose(&mut self) {
        self.source.clear();
        self.titles.clear();
    }
}

impl DiscInspector {
    fn resolve_titles(&mut self) -> Result<usize> {
        self.titles = DiscCatalog::new(LanguageTable::iso639_1()).titles_from(&self.source)?;
        Ok(self.titles.len())
    }
}

impl Default for DiscInspector {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolved title.
#[wasm_bindgen]
pub struct TitleInfo {
    title: Title,
}

#[wasm_bindgen]
impl TitleInfo {
    /// 1-based position in the title search table.
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> usize {
        self.title.id
    }

    /// Title set (VTS_nn) holding the title.
    #[wasm_bindgen(getter, js_name = titleSet)]
    pub fn title_set(&self) -> u8 {
        self.title.title_set
    }

    /// Title number within its title set.
    #[wasm_bindgen(getter, js_name = titleInSet)]
    pub fn title_in_set(&self) -> u8 {
        self.title.title_in_set
    }

    /// Number of chapters.
    #[wasm_bindgen(getter, js_name = chapterCount)]
    pub fn chapter_count(&self) -> u16 {
        self.title.chapter_count
    }

    /// Number of camera angles.
    #[wasm_bindgen(getter, js_name = angleCount)]
    pub fn angle_count(&self) -> u8 {
        self.title.angle_count
    }

    /// Runtime in whole seconds.
    #[wasm_bindgen(getter, js_name = totalSeconds)]
    pub fn total_seconds(&self) -> u32 {
        self.title.total_seconds()
    }

    /// Runtime as HH:MM:SS.FF.
    #[wasm_bindgen(getter)]
    pub fn duration(&self) -> String {
        self.title.runtime.to_string()
    }

    /// "4:3", "16:9" or "Unspecified".
    #[wasm_bindgen(getter, js_name = aspectRatio)]
    pub fn aspect_ratio(&self) -> String {
        self.title.video.aspect_ratio.to_string()
    }

    /// "NTSC" or "PAL", "Unknown (n)" for reserved codes.
    #[wasm_bindgen(getter, js_name = videoStandard)]
    pub fn video_standard(&self) -> String {
        self.title.video.standard.to_string()
    }

    /// Picture width in pixels, 0 if unknown.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u16 {
        self.title.video.dimensions().map_or(0, |(w, _)| w)
    }

    /// Picture height in pixels, 0 if unknown.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u16 {
        self.title.video.dimensions().map_or(0, |(_, h)| h)
    }

    /// Number of distinct audio tracks.
    #[wasm_bindgen(getter, js_name = audioTrackCount)]
    pub fn audio_track_count(&self) -> usize {
        self.title.audio_tracks.len()
    }

    /// Get the audio track at a 0-based index.
    #[wasm_bindgen(js_name = getAudioTrack)]
    pub fn get_audio_track(&self, index: usize) -> Option<AudioTrackInfo> {
        self.title
            .audio_tracks
            .get(index)
            .cloned()
            .map(|track| AudioTrackInfo { track })
    }

    /// Number of subtitle tracks, closed captions included.
    #[wasm_bindgen(getter, js_name = subtitleTrackCount)]
    pub fn subtitle_track_count(&self) -> usize {
        self.title.subtitle_tracks.len()
    }

    /// Get the subtitle track at a 0-based index.
    #[wasm_bindgen(js_name = getSubtitleTrack)]
    pub fn get_subtitle_track(&self, index: usize) -> Option<SubtitleTrackInfo> {
        self.title
            .subtitle_tracks
            .get(index)
            .cloned()
            .map(|track| SubtitleTrackInfo { track })
    }
}

/// Audio track of a resolved title.
#[wasm_bindgen]
pub struct AudioTrackInfo {
    track: AudioTrack,
}

#[wasm_bindgen]
impl AudioTrackInfo {
    /// Audio control slot of the track.
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> u8 {
        self.track.id
    }

    /// Logical audio stream the slot plays.
    #[wasm_bindgen(getter)]
    pub fn stream(&self) -> u8 {
        self.track.stream
    }

    /// Coding mode label, e.g. "AC-3".
    #[wasm_bindgen(getter)]
    pub fn codec(&self) -> String {
        self.track.coding_mode.to_string()
    }

    /// Language name, "Unknown" when absent.
    #[wasm_bindgen(getter)]
    pub fn language(&self) -> String {
        self.track.language.clone()
    }

    /// Raw two-letter language code.
    #[wasm_bindgen(getter, js_name = languageCode)]
    pub fn language_code(&self) -> String {
        self.track.language_code.iter().map(|&b| b as char).collect()
    }

    /// Number of channels.
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.track.channels
    }

    /// Layout label such as "5.1".
    #[wasm_bindgen(getter, js_name = channelLayout)]
    pub fn channel_layout(&self) -> String {
        self.track.channel_layout.clone()
    }

    /// Language code extension label.
    #[wasm_bindgen(getter, js_name = codeExtension)]
    pub fn code_extension(&self) -> String {
        self.track.code_extension.to_string()
    }

    /// Karaoke or surround specific information byte.
    #[wasm_bindgen(getter, js_name = applicationInfo)]
    pub fn application_info(&self) -> u8 {
        self.track.application_info
    }
}

/// Subtitle or closed-caption track of a resolved title.
#[wasm_bindgen]
pub struct SubtitleTrackInfo {
    track: SubtitleTrack,
}

#[wasm_bindgen]
impl SubtitleTrackInfo {
    /// Track id, unique within the title.
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> u16 {
        self.track.id
    }

    /// Language name, "Unknown" when absent.
    #[wasm_bindgen(getter)]
    pub fn language(&self) -> String {
        self.track.language.clone()
    }

    /// Display label of the track.
    #[wasm_bindgen(getter)]
    pub fn description(&self) -> String {
        self.track.description.clone()
    }

    /// Display variant, e.g. "Wide" or "Letterbox".
    #[wasm_bindgen(getter)]
    pub fn variant(&self) -> String {
        self.track.variant.to_string()
    }

    /// Raw subpicture stream number, undefined for closed captions.
    #[wasm_bindgen(getter, js_name = streamNumber)]
    pub fn stream_number(&self) -> Option<u8> {
        self.track.stream_number
    }

    /// True for the synthesized line 21 caption track.
    #[wasm_bindgen(getter, js_name = closedCaption)]
    pub fn closed_caption(&self) -> bool {
        self.track.is_closed_caption()
    }
}
