//! Cross-referencing of title search entries against their title sets.
//!
//! A title search entry only names a title set and a title number within
//! it. The playable tracks come from joining the program chain stream
//! control slots with the title set's attribute records:
//!
//! - audio slots map to logical audio streams, first slot wins per stream
//! - each subpicture slot expands to one variant per display mode the video
//!   allows, deduplicated by raw stream number
//! - line 21 captions become one synthetic track per title

use tracing::{debug, trace};

use super::{AudioTrack, SubtitleTrack, SubtitleVariant, Title};
use crate::attributes::{
    AspectRatio, AudioCodingMode, LanguageType, SubpictureAttributes, VideoStandard,
};
use crate::disc::{DiscReader, UNKNOWN_LANGUAGE};
use crate::error::{IfoError, Result};
use crate::ifo::VtsDescriptor;
use crate::nav::{ProgramChain, AUDIO_CONTROL_SLOTS};

/// Subpicture stream numbers are 5 bits wide.
const SUBPICTURE_STREAMS: usize = 32;

/// Builds `Title`s from a decoded disc.
#[derive(Debug, Clone, Copy)]
pub struct TitleResolver<'a, 'l> {
    reader: &'a DiscReader<'l>,
    strict_codes: bool,
}

impl<'a, 'l> TitleResolver<'a, 'l> {
    pub fn new(reader: &'a DiscReader<'l>) -> Self {
        Self {
            reader,
            strict_codes: false,
        }
    }

    /// Reject unknown video standards and audio coding modes instead of
    /// passing them through as `Unknown`.
    pub fn strict_codes(mut self, strict: bool) -> Self {
        self.strict_codes = strict;
        self
    }

    /// Resolve every title, in title search table order.
    pub fn resolve_all(&self) -> Result<Vec<Title>> {
        (0..self.reader.title_count())
            .map(|index| self.resolve(index))
            .collect()
    }

    /// Resolve the title at 0-based `index` of the title search table.
    pub fn resolve(&self, index: usize) -> Result<Title> {
        let id = index + 1;
        let entry = self
            .reader
            .vmg
            .title_search
            .entries
            .get(index)
            .ok_or(IfoError::DanglingReference {
                title: id,
                title_set: 0,
                title_in_set: 0,
                reason: "no such title",
            })?;

        let dangling = |reason| IfoError::DanglingReference {
            title: id,
            title_set: entry.title_set,
            title_in_set: entry.title_in_set,
            reason,
        };
        let vts = self
            .reader
            .title_set(entry.title_set)
            .ok_or_else(|| dangling("title set out of range"))?;
        let pgc = (entry.title_in_set as usize)
            .checked_sub(1)
            .and_then(|ttn| vts.program_chain(ttn))
            .ok_or_else(|| dangling("program chain out of range"))?;

        let video = vts.title_video;
        if let (true, VideoStandard::Unknown(value)) = (self.strict_codes, video.standard) {
            return Err(IfoError::UnsupportedStructure {
                field: "video standard",
                value: value.into(),
            });
        }

        let title = Title {
            id,
            title_set: entry.title_set,
            title_in_set: entry.title_in_set,
            chapter_count: entry.chapter_count,
            angle_count: entry.angle_count,
            program_count: pgc.program_count,
            cell_count: pgc.cell_count,
            runtime: pgc.playback_time,
            video,
            audio_tracks: self.audio_tracks(vts, pgc)?,
            subtitle_tracks: self.subtitle_tracks(vts, pgc),
        };

        debug!(
            title = id,
            runtime = %title.runtime,
            audio = title.audio_tracks.len(),
            subtitles = title.subtitle_tracks.len(),
            "resolved title"
        );
        Ok(title)
    }

    fn audio_tracks(&self, vts: &VtsDescriptor, pgc: &ProgramChain) -> Result<Vec<AudioTrack>> {
        let mut claimed = [false; AUDIO_CONTROL_SLOTS];
        let mut tracks = Vec::new();

        for (slot, control) in pgc.audio_control.iter().enumerate() {
            if !control.available {
                continue;
            }
            let stream = control.stream as usize;
            if claimed[stream] {
                trace!(slot, stream, "dropping duplicate audio stream");
                continue;
            }
            claimed[stream] = true;

            let attributes = &vts.title_audio[stream];
            if let (true, AudioCodingMode::Unknown(value)) = (self.strict_codes, attributes.coding_mode) {
                return Err(IfoError::UnsupportedStructure {
                    field: "audio coding mode",
                    value: value.into(),
                });
            }

            let language = self.language(attributes.language_type, attributes.language_code);
            tracks.push(AudioTrack {
                id: slot as u8,
                stream: control.stream,
                coding_mode: attributes.coding_mode,
                language_code: attributes.language_code,
                language: language.to_string(),
                channels: attributes.channels,
                channel_layout: attributes.channel_layout().to_string(),
                application_mode: attributes.application_mode,
                quantization: attributes.quantization,
                sample_rate: attributes.sample_rate,
                multichannel_extension: attributes.multichannel_extension,
                code_extension: attributes.code_extension,
                application_info: attributes.application_info,
            });
        }

        Ok(tracks)
    }

    fn subtitle_tracks(&self, vts: &VtsDescriptor, pgc: &ProgramChain) -> Vec<SubtitleTrack> {
        let video = &vts.title_video;
        let mut used = [false; SUBPICTURE_STREAMS];
        let mut tracks = Vec::new();
        let mut next_id: u16 = 1;

        for (slot, control) in pgc.subpicture_control.iter().enumerate() {
            if !control.available {
                continue;
            }
            let attributes = &vts.title_subpicture[slot];
            let language = self.subpicture_language(attributes);

            let variants = match video.aspect_ratio {
                AspectRatio::SixteenNine => vec![
                    Some((SubtitleVariant::Wide, control.stream_wide)),
                    video
                        .auto_letterbox
                        .then_some((SubtitleVariant::Letterbox, control.stream_letterbox)),
                    video
                        .auto_pan_scan
                        .then_some((SubtitleVariant::PanScan, control.stream_pan_scan)),
                ],
                AspectRatio::FourThree | AspectRatio::Unspecified(_) => {
                    vec![Some((SubtitleVariant::FourThree, control.stream_4x3))]
                }
            };

            for (variant, stream_number) in variants.into_iter().flatten() {
                let id = next_id;
                next_id += 1;

                if used[stream_number as usize] {
                    trace!(slot, stream_number, %variant, "dropping duplicate subpicture stream");
                    continue;
                }
                used[stream_number as usize] = true;
                tracks.push(SubtitleTrack::vobsub(
                    id,
                    language,
                    variant,
                    stream_number,
                    attributes.extension,
                ));
            }
        }

        // Line 21 captions are flagged per title set, so every title of the
        // set gets one, in the language of the first subpicture stream.
        if video.uses_closed_captions() {
            let language = self.subpicture_language(&vts.title_subpicture[0]);
            tracks.push(SubtitleTrack::closed_caption(next_id, language));
        }

        tracks
    }

    fn subpicture_language(&self, attributes: &SubpictureAttributes) -> &'l str {
        self.language(attributes.language_type, attributes.language_code)
    }

    fn language(&self, language_type: LanguageType, code: [u8; 2]) -> &'l str {
        match language_type {
            LanguageType::Unspecified => UNKNOWN_LANGUAGE,
            LanguageType::UseLanguageCode => self.reader.languages().name(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{ApplicationMode, AudioCodeExtension};
    use crate::disc::{LanguageTable, MemorySource};
    use crate::fixtures::{PgcBuilder, VmgBuilder, VtsBuilder};

    fn reader(vmg: VmgBuilder, title_sets: Vec<VtsBuilder>) -> DiscReader<'static> {
        let mut source = MemorySource::new().with_vmg(vmg.bytes());
        for (i, vts) in title_sets.iter().enumerate() {
            source.set_title_set(i as u8 + 1, vts.bytes());
        }
        DiscReader::open(&source, LanguageTable::iso639_1()).unwrap()
    }

    fn single_title(vts: VtsBuilder) -> Title {
        let reader = reader(VmgBuilder::new(1).title(1, 1, 4), vec![vts]);
        TitleResolver::new(&reader).resolve(0).unwrap()
    }

    fn streams(title: &Title) -> Vec<Option<u8>> {
        title.subtitle_tracks.iter().map(|t| t.stream_number).collect()
    }

    #[test]
    fn test_title_summary() {
        let title = single_title(
            VtsBuilder::new().pgc(PgcBuilder::new().chapters(4).time(0x01, 0x02, 0x03, 0xC0 | 0x15)),
        );

        assert_eq!(title.id, 1);
        assert_eq!((title.title_set, title.title_in_set), (1, 1));
        assert_eq!(title.chapter_count, 4);
        assert_eq!(title.angle_count, 1);
        assert_eq!(title.program_count, 4);
        assert_eq!(title.total_seconds(), 3723);
        assert_eq!(title.runtime.to_string(), "01:02:03.15");
        assert!(title.audio_tracks.is_empty());
        assert!(title.subtitle_tracks.is_empty());
    }

    #[test]
    fn test_audio_dedup_by_logical_stream() {
        let title = single_title(
            VtsBuilder::new()
                .audio(0, 0, 6, "en")
                .audio(1, 4, 2, "fr")
                .pgc(
                    PgcBuilder::new()
                        .audio(0, 0)
                        .audio(1, 0)
                        .audio(2, 1)
                        .audio_disabled(3, 1),
                ),
        );

        let tracks = &title.audio_tracks;
        assert_eq!(tracks.len(), 2);

        assert_eq!((tracks[0].id, tracks[0].stream), (0, 0));
        assert_eq!(tracks[0].coding_mode, AudioCodingMode::Ac3);
        assert_eq!(tracks[0].language, "English");
        assert_eq!(tracks[0].channel_layout, "5.1");
        assert_eq!(tracks[0].code_extension, AudioCodeExtension::Unspecified);

        assert_eq!((tracks[1].id, tracks[1].stream), (2, 1));
        assert_eq!(tracks[1].coding_mode, AudioCodingMode::Lpcm);
        assert_eq!(tracks[1].language, "French");
        assert_eq!(tracks[1].channel_layout, "2.0");
    }

    #[test]
    fn test_audio_attributes_follow_logical_stream() {
        let title = single_title(
            VtsBuilder::new()
                .audio(0, 0, 2, "en")
                .audio(1, 6, 6, "de")
                .pgc(PgcBuilder::new().audio(0, 1)),
        );

        assert_eq!(title.audio_tracks.len(), 1);
        assert_eq!(title.audio_tracks[0].id, 0);
        assert_eq!(title.audio_tracks[0].coding_mode, AudioCodingMode::Dts);
        assert_eq!(title.audio_tracks[0].language, "German");
    }

    #[test]
    fn test_audio_application_info_is_carried() {
        // AC-3 karaoke, stereo, "ja", application info 0x2A
        let karaoke = [0b0000_0101, 0b0000_0001, b'j', b'a', 0, 1, 0, 0x2A];
        let title = single_title(
            VtsBuilder::new()
                .category(1)
                .audio(0, 0, 2, "en")
                .audio_record(1, karaoke)
                .pgc(PgcBuilder::new().audio(0, 0).audio(1, 1)),
        );

        let tracks = &title.audio_tracks;
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].application_mode, ApplicationMode::Unspecified);
        assert_eq!(tracks[0].application_info, 0);
        assert_eq!(tracks[1].application_mode, ApplicationMode::Karaoke);
        assert_eq!(tracks[1].application_info, 0x2A);
        assert_eq!(tracks[1].language, "Japanese");
    }

    #[test]
    fn test_unknown_languages() {
        let title = single_title(
            VtsBuilder::new()
                .audio(0, 0, 2, "qq")
                .audio(1, 0, 2, "")
                .pgc(PgcBuilder::new().audio(0, 0).audio(1, 1)),
        );

        assert_eq!(title.audio_tracks[0].language, "Unknown");
        assert_eq!(title.audio_tracks[1].language, "Unknown");
    }

    #[test]
    fn test_widescreen_variants() {
        let title = single_title(
            VtsBuilder::new()
                .widescreen(true, true)
                .subpicture(0, "en")
                .subpicture(1, "fr")
                .pgc(PgcBuilder::new().subpicture(0, [0, 0, 1, 2]).subpicture(1, [0, 3, 4, 5])),
        );

        let tracks = &title.subtitle_tracks;
        assert_eq!(tracks.len(), 6);
        assert_eq!(
            streams(&title),
            vec![Some(0), Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
        assert_eq!(tracks[0].description, "1: English (Wide) [VOBSUB]");
        assert_eq!(tracks[1].description, "2: English (Letterbox) [VOBSUB]");
        assert_eq!(tracks[2].description, "3: English (Pan & Scan) [VOBSUB]");
        assert_eq!(tracks[3].description, "4: French (Wide) [VOBSUB]");
        assert_eq!(tracks[5].variant, SubtitleVariant::PanScan);
    }

    #[test]
    fn test_widescreen_letterbox_only() {
        let title = single_title(
            VtsBuilder::new()
                .widescreen(true, false)
                .subpicture(0, "en")
                .pgc(PgcBuilder::new().subpicture(0, [0, 0, 1, 2])),
        );

        let variants: Vec<_> = title.subtitle_tracks.iter().map(|t| t.variant).collect();
        assert_eq!(variants, vec![SubtitleVariant::Wide, SubtitleVariant::Letterbox]);
    }

    #[test]
    fn test_four_three_single_variant() {
        let title = single_title(
            VtsBuilder::new()
                .subpicture(0, "en")
                .subpicture(1, "es")
                .pgc(PgcBuilder::new().subpicture(0, [0, 7, 8, 9]).subpicture(1, [1, 7, 8, 9])),
        );

        let tracks = &title.subtitle_tracks;
        assert_eq!(tracks.len(), 2);
        assert_eq!(streams(&title), vec![Some(0), Some(1)]);
        assert_eq!(tracks[0].description, "1: English (4x3) [VOBSUB]");
        assert_eq!(tracks[1].description, "2: Spanish (4x3) [VOBSUB]");
    }

    #[test]
    fn test_cross_slot_dedup_keeps_ids() {
        let title = single_title(
            VtsBuilder::new()
                .widescreen(true, true)
                .subpicture(0, "en")
                .subpicture(1, "en")
                .pgc(PgcBuilder::new().subpicture(0, [0, 0, 1, 2]).subpicture(1, [0, 1, 3, 4])),
        );

        let ids: Vec<_> = title.subtitle_tracks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5, 6]);
        assert_eq!(
            streams(&title),
            vec![Some(0), Some(1), Some(2), Some(3), Some(4)]
        );
    }

    #[test]
    fn test_zero_stream_slots_collapse() {
        let title = single_title(
            VtsBuilder::new()
                .subpicture(0, "en")
                .subpicture(1, "fr")
                .pgc(PgcBuilder::new().subpicture(0, [0; 4]).subpicture(1, [0; 4])),
        );

        assert_eq!(title.subtitle_tracks.len(), 1);
        assert_eq!(title.subtitle_tracks[0].language, "English");
    }

    #[test]
    fn test_closed_captions_on_every_title() {
        let vts = VtsBuilder::new()
            .closed_captions()
            .subpicture(0, "es")
            .pgc(PgcBuilder::new())
            .pgc(PgcBuilder::new().subpicture(0, [2, 0, 0, 0]))
            .pgc(PgcBuilder::new());
        let reader = reader(
            VmgBuilder::new(1).title(1, 1, 1).title(1, 2, 1).title(1, 3, 1),
            vec![vts],
        );

        let titles = TitleResolver::new(&reader).resolve_all().unwrap();
        assert_eq!(titles.len(), 3);
        for title in &titles {
            let captions: Vec<_> = title
                .subtitle_tracks
                .iter()
                .filter(|t| t.is_closed_caption())
                .collect();
            assert_eq!(captions.len(), 1);
            assert_eq!(captions[0].language, "Spanish");
            assert_eq!(captions[0].stream_number, None);
        }

        assert_eq!(
            titles[0].subtitle_tracks[0].description,
            "1: Spanish, Closed Caption [CC608]"
        );
        assert_eq!(
            titles[1].subtitle_tracks[1].description,
            "2: Spanish, Closed Caption [CC608]"
        );
    }

    #[test]
    fn test_dangling_references() {
        let reader = reader(
            VmgBuilder::new(1).title(2, 1, 1).title(1, 5, 1).title(1, 0, 1),
            vec![VtsBuilder::new().pgc(PgcBuilder::new())],
        );
        let resolver = TitleResolver::new(&reader);

        match resolver.resolve(0) {
            Err(IfoError::DanglingReference { title, title_set, .. }) => {
                assert_eq!((title, title_set), (1, 2));
            }
            other => panic!("expected dangling reference, got {other:?}"),
        }
        match resolver.resolve(1) {
            Err(IfoError::DanglingReference { title, title_in_set, .. }) => {
                assert_eq!((title, title_in_set), (2, 5));
            }
            other => panic!("expected dangling reference, got {other:?}"),
        }
        assert!(matches!(resolver.resolve(2), Err(IfoError::DanglingReference { .. })));
        assert!(matches!(resolver.resolve(3), Err(IfoError::DanglingReference { .. })));
        assert!(resolver.resolve_all().is_err());
    }

    #[test]
    fn test_strict_codes() {
        let reader = reader(
            VmgBuilder::new(2).title(1, 1, 1).title(2, 1, 1),
            vec![
                VtsBuilder::new().video_byte(0b0110_0000).pgc(PgcBuilder::new()),
                VtsBuilder::new().audio(0, 7, 2, "en").pgc(PgcBuilder::new().audio(0, 0)),
            ],
        );

        let lenient = TitleResolver::new(&reader).resolve_all().unwrap();
        assert_eq!(lenient[0].video.standard, VideoStandard::Unknown(2));
        assert_eq!(lenient[1].audio_tracks[0].coding_mode, AudioCodingMode::Unknown(7));

        let strict = TitleResolver::new(&reader).strict_codes(true);
        assert!(matches!(
            strict.resolve(0),
            Err(IfoError::UnsupportedStructure { field: "video standard", value: 2 })
        ));
        assert!(matches!(
            strict.resolve(1),
            Err(IfoError::UnsupportedStructure { field: "audio coding mode", value: 7 })
        ));
    }
}
