//! Test fixtures: synthetic IFO images.
//!
//! Builds byte-exact VIDEO_TS.IFO and VTS_nn_0.IFO buffers so decoding and
//! resolution can be tested without disc images.

use crate::ifo::DVD_BLOCK_LEN;
use crate::nav::PGC_LEN;

/// Initialize tracing for tests, writing to the captured test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Program chain description.
#[derive(Debug, Clone)]
pub struct PgcBuilder {
    chapters: u8,
    cells: u8,
    time: [u8; 4],
    audio: Vec<(usize, u8)>,
    subpictures: Vec<(usize, [u8; 4])>,
}

impl PgcBuilder {
    pub fn new() -> Self {
        Self {
            chapters: 1,
            cells: 1,
            time: [0x00, 0x30, 0x00, 0xC0],
            audio: Vec::new(),
            subpictures: Vec::new(),
        }
    }

    pub fn chapters(mut self, chapters: u8) -> Self {
        self.chapters = chapters;
        self.cells = chapters;
        self
    }

    /// Raw BCD hours, minutes, seconds and frame byte.
    pub fn time(mut self, hours: u8, minutes: u8, seconds: u8, frames: u8) -> Self {
        self.time = [hours, minutes, seconds, frames];
        self
    }

    /// Available audio control slot playing logical `stream`.
    pub fn audio(mut self, slot: usize, stream: u8) -> Self {
        self.audio.push((slot, 0x80 | stream));
        self
    }

    /// Control slot that names a stream but is marked unavailable.
    pub fn audio_disabled(mut self, slot: usize, stream: u8) -> Self {
        self.audio.push((slot, stream));
        self
    }

    /// Available subpicture control slot with its 4:3, wide, letterbox and
    /// pan&scan stream numbers.
    pub fn subpicture(mut self, slot: usize, streams: [u8; 4]) -> Self {
        self.subpictures
            .push((slot, [0x80 | streams[0], streams[1], streams[2], streams[3]]));
        self
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut data = vec![0u8; PGC_LEN];
        data[2] = self.chapters;
        data[3] = self.cells;
        data[4..8].copy_from_slice(&self.time);
        for &(slot, value) in &self.audio {
            data[0x0C + slot * 2] = value;
        }
        for &(slot, streams) in &self.subpictures {
            let offset = 0x1C + slot * 4;
            data[offset..offset + 4].copy_from_slice(&streams);
        }
        data
    }
}

/// VTS_PGCI table followed by its program chains.
pub fn pgci_bytes(pgcs: &[PgcBuilder]) -> Vec<u8> {
    let header_len = 8 + pgcs.len() * 8;
    let mut data = vec![0u8; header_len];
    data[0..2].copy_from_slice(&(pgcs.len() as u16).to_be_bytes());

    for (i, pgc) in pgcs.iter().enumerate() {
        let entry = 8 + i * 8;
        data[entry] = 0x80 | (i as u8 + 1);
        let offset = data.len() as u32;
        data[entry + 4..entry + 8].copy_from_slice(&offset.to_be_bytes());
        data.extend_from_slice(&pgc.bytes());
    }

    let end_address = data.len() as u32 - 1;
    data[4..8].copy_from_slice(&end_address.to_be_bytes());
    data
}

/// MPEG-2 PAL 16:9, both automatic modes allowed, 704 wide, camera source.
pub const MENU_VIDEO: [u8; 2] = [0b0101_1100, 0b0000_1000];
/// LPCM 16 bit stereo, "en", normal extension.
pub const MENU_AUDIO: [u8; 8] = [0b1000_0100, 0b0000_0001, b'e', b'n', 0, 1, 0, 0];
/// 2-bit RLE, "fr", forced.
pub const MENU_SUBPICTURE: [u8; 6] = [0x01, 0, b'f', b'r', 0, 9];

fn put_u32(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

/// Menu attributes shared by both IFO kinds at 0x100..0x15C.
fn write_menu_attributes(data: &mut [u8]) {
    data[0x100..0x102].copy_from_slice(&MENU_VIDEO);
    data[0x102..0x104].copy_from_slice(&1u16.to_be_bytes());
    data[0x104..0x10C].copy_from_slice(&MENU_AUDIO);
    data[0x154..0x156].copy_from_slice(&1u16.to_be_bytes());
    data[0x156..0x15C].copy_from_slice(&MENU_SUBPICTURE);
}

fn pad_to_block(data: &mut Vec<u8>) {
    let blocks = data.len().div_ceil(DVD_BLOCK_LEN).max(1);
    data.resize(blocks * DVD_BLOCK_LEN, 0);
}

/// Title set description.
#[derive(Debug, Clone)]
pub struct VtsBuilder {
    category: u32,
    video: [u8; 2],
    audio: Vec<(usize, [u8; 8])>,
    subpictures: Vec<(usize, [u8; 6])>,
    pgcs: Vec<PgcBuilder>,
}

impl VtsBuilder {
    /// NTSC 4:3, no captions, no streams.
    pub fn new() -> Self {
        Self {
            category: 0,
            video: [0b0100_0000, 0],
            audio: Vec::new(),
            subpictures: Vec::new(),
            pgcs: Vec::new(),
        }
    }

    /// NTSC 16:9 with the automatic display modes allowed as given.
    pub fn widescreen(mut self, letterbox: bool, pan_scan: bool) -> Self {
        let mut b0 = 0b0100_1100;
        if !pan_scan {
            b0 |= 0x02;
        }
        if !letterbox {
            b0 |= 0x01;
        }
        self.video[0] = b0;
        self
    }

    /// VTS category; 1 marks a karaoke title set.
    pub fn category(mut self, category: u32) -> Self {
        self.category = category;
        self
    }

    pub fn closed_captions(mut self) -> Self {
        self.video[1] |= 0x80;
        self
    }

    /// Raw first video attribute byte.
    pub fn video_byte(mut self, b0: u8) -> Self {
        self.video[0] = b0;
        self
    }

    /// Audio attributes at logical index `index`: AC-3 unless `coding` says
    /// otherwise, `channels` channels, language `code` (empty for none).
    pub fn audio(mut self, index: usize, coding: u8, channels: u8, code: &str) -> Self {
        let mut record = [0u8; 8];
        record[0] = coding << 5;
        if !code.is_empty() {
            record[0] |= 0x04;
            record[2..4].copy_from_slice(&code.as_bytes()[..2]);
        }
        record[1] = channels - 1;
        self.audio.push((index, record));
        self
    }

    /// Raw 8-byte audio attribute record at logical index `index`.
    pub fn audio_record(mut self, index: usize, record: [u8; 8]) -> Self {
        self.audio.push((index, record));
        self
    }

    /// Subpicture attributes at `index` with language `code` (empty for none).
    pub fn subpicture(mut self, index: usize, code: &str) -> Self {
        let mut record = [0u8; 6];
        if !code.is_empty() {
            record[0] = 0x01;
            record[2..4].copy_from_slice(&code.as_bytes()[..2]);
        }
        self.subpictures.push((index, record));
        self
    }

    pub fn pgc(mut self, pgc: PgcBuilder) -> Self {
        self.pgcs.push(pgc);
        self
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut data = vec![0u8; DVD_BLOCK_LEN];
        data[0..12].copy_from_slice(b"DVDVIDEO-VTS");
        put_u32(&mut data, 0x0C, 0x0000_4E1F);
        put_u32(&mut data, 0x1C, 0x0000_0013);
        data[0x21] = 0x10;
        put_u32(&mut data, 0x22, self.category);
        put_u32(&mut data, 0x80, 0x0000_03FF);
        put_u32(&mut data, 0xC0, 0x0000_0014);
        // The PGCI follows the first block; every other pointer is a sentinel.
        put_u32(&mut data, 0xC4, 0x0000_0030);
        put_u32(&mut data, 0xC8, 0x0000_0031);
        put_u32(&mut data, 0xCC, 1);
        for (i, offset) in (0xD0..=0xE4).step_by(4).enumerate() {
            put_u32(&mut data, offset, 0x33 + i as u32);
        }
        write_menu_attributes(&mut data);
        data[0x200..0x202].copy_from_slice(&self.video);
        data[0x202..0x204].copy_from_slice(&(self.audio.len() as u16).to_be_bytes());
        for &(index, record) in &self.audio {
            let offset = 0x204 + index * 8;
            data[offset..offset + 8].copy_from_slice(&record);
        }
        data[0x254..0x256].copy_from_slice(&(self.subpictures.len() as u16).to_be_bytes());
        for &(index, record) in &self.subpictures {
            let offset = 0x256 + index * 6;
            data[offset..offset + 6].copy_from_slice(&record);
        }

        data.extend_from_slice(&pgci_bytes(&self.pgcs));
        pad_to_block(&mut data);
        data
    }
}

/// Video manager description.
#[derive(Debug, Clone)]
pub struct VmgBuilder {
    title_sets: u16,
    provider: &'static str,
    titles: Vec<(u8, u8, u16)>,
}

impl VmgBuilder {
    pub fn new(title_sets: u16) -> Self {
        Self {
            title_sets,
            provider: "",
            titles: Vec::new(),
        }
    }

    pub fn provider(mut self, provider: &'static str) -> Self {
        self.provider = provider;
        self
    }

    /// Append a title pointing at `title_set`, `title_in_set` (both 1-based).
    pub fn title(mut self, title_set: u8, title_in_set: u8, chapters: u16) -> Self {
        self.titles.push((title_set, title_in_set, chapters));
        self
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut data = vec![0u8; DVD_BLOCK_LEN];
        data[0..12].copy_from_slice(b"DVDVIDEO-VMG");
        put_u32(&mut data, 0x0C, 0x0000_0A2F);
        put_u32(&mut data, 0x1C, 0x0000_0011);
        data[0x21] = 0x11;
        put_u32(&mut data, 0x22, 0x00FE_0000);
        data[0x26..0x28].copy_from_slice(&1u16.to_be_bytes());
        data[0x28..0x2A].copy_from_slice(&1u16.to_be_bytes());
        data[0x2A] = 1;
        data[0x3E..0x40].copy_from_slice(&self.title_sets.to_be_bytes());
        data[0x40..0x60].fill(b' ');
        data[0x40..0x40 + self.provider.len()].copy_from_slice(self.provider.as_bytes());
        data[0x60..0x68].copy_from_slice(&0x0102_0304_0506_0708u64.to_be_bytes());
        put_u32(&mut data, 0x80, 0x0000_03FF);
        put_u32(&mut data, 0x84, 0x0000_0400);
        put_u32(&mut data, 0xC0, 0x0000_0012);
        // TT_SRPT follows the first block; every other pointer is a sentinel.
        put_u32(&mut data, 0xC4, 1);
        for (i, offset) in (0xC8..=0xDC).step_by(4).enumerate() {
            put_u32(&mut data, offset, 0x21 + i as u32);
        }
        write_menu_attributes(&mut data);

        let mut table = vec![0u8; 8];
        table[0..2].copy_from_slice(&(self.titles.len() as u16).to_be_bytes());
        for &(title_set, title_in_set, chapters) in &self.titles {
            let mut entry = [0u8; 12];
            entry[0] = 0x3C;
            entry[1] = 1;
            entry[2..4].copy_from_slice(&chapters.to_be_bytes());
            entry[6] = title_set;
            entry[7] = title_in_set;
            table.extend_from_slice(&entry);
        }
        let end_address = table.len() as u32 - 1;
        table[4..8].copy_from_slice(&end_address.to_be_bytes());

        data.extend_from_slice(&table);
        pad_to_block(&mut data);
        data
    }
}
