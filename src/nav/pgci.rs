//! Program chain index (VTS_PGCI) parsing.

use tracing::trace;

use super::ProgramChain;
use crate::error::Result;
use crate::utils::ByteView;

const PGCI_HEADER_LEN: usize = 8;
const PGCI_ENTRY_LEN: usize = 8;

/// One search pointer of the index, with its program chain resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramChainEntry {
    /// Marks the entry PGC of a title
    pub entry_pgc: bool,
    /// Title number within the title set (7 bits)
    pub title_number: u8,
    pub parental_mask: u16,
    pub pgc: ProgramChain,
}

/// Ordered list of the program chains of a title set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramChainIndex {
    /// Address of the last byte of the final PGC, relative to the table start
    pub end_address: u32,
    pub entries: Vec<ProgramChainEntry>,
}

impl ProgramChainIndex {
    /// Parse the index starting at absolute byte `offset`, following every
    /// search pointer to its program chain.
    pub fn parse(view: &ByteView, offset: usize) -> Result<Self> {
        let header = ByteView::new(view.bytes(offset, PGCI_HEADER_LEN)?);
        let count = header.u16(0)? as usize;
        let end_address = header.u32(4)?;

        let mut entries = Vec::with_capacity(count);
        for i in 0..count {
            let entry_offset = view.at(offset, PGCI_HEADER_LEN + i * PGCI_ENTRY_LEN)?;
            let entry = ByteView::new(view.bytes(entry_offset, PGCI_ENTRY_LEN)?);
            let flags = entry.u8(0)?;
            let parental_mask = entry.u16(2)?;
            let pgc_offset = view.at(offset, entry.u32(4)? as usize)?;

            entries.push(ProgramChainEntry {
                entry_pgc: (flags & 0x80) != 0,
                title_number: flags & 0x7F,
                parental_mask,
                pgc: ProgramChain::parse(view, pgc_offset)?,
            });
        }

        trace!(pgcs = count, end_address, "parsed VTS_PGCI");
        Ok(Self {
            end_address,
            entries,
        })
    }

    /// Program chain for a 0-based index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&ProgramChain> {
        self.entries.get(index).map(|entry| &entry.pgc)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
