//! IFO file descriptors: the video manager (VIDEO_TS.IFO) and the video
//! title sets (VTS_nn_0.IFO).

mod vmg;
mod vts;

pub use vmg::*;
pub use vts::*;

use std::fmt;

use crate::error::{IfoError, Result};
use crate::utils::ByteView;

/// Logical block size of DVD media. Sector pointers count these blocks.
pub const DVD_BLOCK_LEN: usize = 2048;

/// Length of the identifier at the start of every IFO file.
pub const MAGIC_LEN: usize = 12;

/// Which of the two IFO kinds a buffer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IfoKind {
    Vmg,
    Vts,
}

impl IfoKind {
    /// Identifier expected in the first 12 bytes.
    pub fn magic(&self) -> &'static str {
        match self {
            IfoKind::Vmg => "DVDVIDEO-VMG",
            IfoKind::Vts => "DVDVIDEO-VTS",
        }
    }
}

/// Immutable IFO buffer whose identifier has been validated.
#[derive(Debug, Clone)]
pub struct RawImage {
    kind: IfoKind,
    bytes: Vec<u8>,
}

impl RawImage {
    /// Take ownership of `bytes`, checking the identifier against `kind`.
    pub fn new(kind: IfoKind, bytes: Vec<u8>) -> Result<Self> {
        let view = ByteView::new(&bytes);
        let magic = view.bytes(0, MAGIC_LEN)?;
        if magic != kind.magic().as_bytes() {
            return Err(IfoError::Format {
                expected: kind.magic(),
                found: magic.iter().map(|&b| b as char).collect(),
            });
        }

        Ok(Self { kind, bytes })
    }

    #[inline]
    pub fn kind(&self) -> IfoKind {
        self.kind
    }

    #[inline]
    pub fn view(&self) -> ByteView<'_> {
        ByteView::new(&self.bytes)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Byte offset of a sector pointer within the file behind `view`.
///
/// Fails with `TruncatedData` when the product does not fit in `usize` or
/// lands past the end of the buffer, so the result is the same on 32-bit
/// and 64-bit targets.
pub fn sector_offset(view: &ByteView, sector: u32) -> Result<usize> {
    usize::try_from(sector)
        .ok()
        .and_then(|sector| sector.checked_mul(DVD_BLOCK_LEN))
        .filter(|&offset| offset <= view.len())
        .ok_or(IfoError::TruncatedData {
            offset: (sector as u64 * DVD_BLOCK_LEN as u64).min(usize::MAX as u64) as usize,
            len: DVD_BLOCK_LEN,
            available: view.len(),
        })
}

/// Format version stored at offset 0x21.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfoVersion {
    pub major: u8,
    pub minor: u8,
}

impl IfoVersion {
    fn parse(view: &ByteView, offset: usize) -> Result<Self> {
        let raw = view.u8(offset)?;
        Ok(Self {
            major: raw >> 4,
            minor: raw & 0x0F,
        })
    }
}

impl fmt::Display for IfoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
