//! Title search pointer table (TT_SRPT) parsing.

use tracing::trace;

use crate::error::Result;
use crate::utils::ByteView;

/// Size of the TT_SRPT header in bytes.
pub const TT_SRPT_HEADER_LEN: usize = 8;
/// Size of one TT_SRPT entry in bytes.
pub const TT_SRPT_ENTRY_LEN: usize = 12;

/// One title as the player presents it, mapped to its title set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleSearchEntry {
    /// Title playback type flags
    pub title_type: u8,
    pub angle_count: u8,
    /// Number of chapters (PTTs)
    pub chapter_count: u16,
    pub parental_mask: u16,
    /// 1-based title set number (VTS_nn_0.IFO)
    pub title_set: u8,
    /// 1-based title number within that title set
    pub title_in_set: u8,
    /// Start sector of the title set on disc
    pub start_sector: u32,
}

impl TitleSearchEntry {
    /// Parse a 12-byte entry at `offset`.
    pub fn parse(view: &ByteView, offset: usize) -> Result<Self> {
        let entry = ByteView::new(view.bytes(offset, TT_SRPT_ENTRY_LEN)?);
        Ok(Self {
            title_type: entry.u8(0)?,
            angle_count: entry.u8(1)?,
            chapter_count: entry.u16(2)?,
            parental_mask: entry.u16(4)?,
            title_set: entry.u8(6)?,
            title_in_set: entry.u8(7)?,
            start_sector: entry.u32(8)?,
        })
    }
}

/// Title search pointer table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleSearchTable {
    /// Address of the last byte of the table, relative to its start
    pub end_address: u32,
    pub entries: Vec<TitleSearchEntry>,
}

impl TitleSearchTable {
    /// Parse the table starting at absolute byte `offset`.
    pub fn parse(view: &ByteView, offset: usize) -> Result<Self> {
        let header = ByteView::new(view.bytes(offset, TT_SRPT_HEADER_LEN)?);
        let count = header.u16(0)? as usize;
        let end_address = header.u32(4)?;

        let mut entries = Vec::with_capacity(count);
        for i in 0..count {
            let entry_offset = view.at(offset, TT_SRPT_HEADER_LEN + i * TT_SRPT_ENTRY_LEN)?;
            entries.push(TitleSearchEntry::parse(view, entry_offset)?);
        }

        trace!(titles = count, end_address, "parsed TT_SRPT");
        Ok(Self {
            end_address,
            entries,
        })
    }

    /// Number of titles on the disc.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
