//! Video title set (VTS_nn_0.IFO) decoding.

use tracing::{debug, warn};

use super::{sector_offset, IfoKind, IfoVersion, RawImage};
use crate::attributes::{AudioAttributes, SubpictureAttributes, VideoAttributes};
use crate::error::Result;
use crate::nav::{ProgramChain, ProgramChainIndex};

/// Sector pointers of the VTSI_MAT (all relative to the start of the IFO).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VtsSectors {
    pub title_vob_start: u32,
    /// Part-of-title search pointer table
    pub vts_ptt_srpt: u32,
    /// Title program chain index
    pub vts_pgci: u32,
    pub vtsm_pgci_ut: u32,
    /// Time map table
    pub vts_tmapti: u32,
    pub vtsm_c_adt: u32,
    pub vtsm_vobu_admap: u32,
    pub vts_c_adt: u32,
    pub vts_vobu_admap: u32,
}

/// Fully decoded VTS_nn_0.IFO.
#[derive(Debug, Clone)]
pub struct VtsDescriptor {
    pub last_sector_title_set: u32,
    pub last_sector_ifo: u32,
    pub version: IfoVersion,
    /// VTS category, 1 for karaoke
    pub category: u32,
    pub end_address_vts_mat: u32,
    pub menu_vob_start_sector: u32,
    pub sectors: VtsSectors,

    pub menu_video: VideoAttributes,
    pub menu_audio_count: u16,
    pub menu_audio: [AudioAttributes; 8],
    pub menu_subpicture_count: u16,
    pub menu_subpicture: SubpictureAttributes,

    pub title_video: VideoAttributes,
    pub title_audio_count: u16,
    pub title_audio: [AudioAttributes; 8],
    pub title_subpicture_count: u16,
    pub title_subpicture: [SubpictureAttributes; 32],

    pub program_chains: ProgramChainIndex,
}

impl VtsDescriptor {
    /// Validate and decode a VTS_nn_0.IFO buffer.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::parse(&RawImage::new(IfoKind::Vts, bytes)?)
    }

    /// Decode a validated VTS image.
    pub fn parse(image: &RawImage) -> Result<Self> {
        let view = image.view();

        let sectors = VtsSectors {
            title_vob_start: view.u32(0xC4)?,
            vts_ptt_srpt: view.u32(0xC8)?,
            vts_pgci: view.u32(0xCC)?,
            vtsm_pgci_ut: view.u32(0xD0)?,
            vts_tmapti: view.u32(0xD4)?,
            vtsm_c_adt: view.u32(0xD8)?,
            vtsm_vobu_admap: view.u32(0xDC)?,
            vts_c_adt: view.u32(0xE0)?,
            vts_vobu_admap: view.u32(0xE4)?,
        };

        let mut vts = Self {
            last_sector_title_set: view.u32(0x0C)?,
            last_sector_ifo: view.u32(0x1C)?,
            version: IfoVersion::parse(&view, 0x21)?,
            category: view.u32(0x22)?,
            end_address_vts_mat: view.u32(0x80)?,
            menu_vob_start_sector: view.u32(0xC0)?,
            sectors,

            menu_video: VideoAttributes::parse(&view, 0x100)?,
            menu_audio_count: view.u16(0x102)?,
            menu_audio: AudioAttributes::parse_array::<8>(&view, 0x104)?,
            menu_subpicture_count: view.u16(0x154)?,
            menu_subpicture: SubpictureAttributes::parse(&view, 0x156)?,

            title_video: VideoAttributes::parse(&view, 0x200)?,
            title_audio_count: view.u16(0x202)?,
            title_audio: AudioAttributes::parse_array::<8>(&view, 0x204)?,
            title_subpicture_count: view.u16(0x254)?,
            title_subpicture: SubpictureAttributes::parse_array::<32>(&view, 0x256)?,

            program_chains: ProgramChainIndex::default(),
        };

        if sectors.vts_pgci == 0 {
            warn!("VTS has no program chain index");
        } else {
            let offset = sector_offset(&view, sectors.vts_pgci)?;
            vts.program_chains = ProgramChainIndex::parse(&view, offset)?;
        }

        debug!(
            version = %vts.version,
            aspect = %vts.title_video.aspect_ratio,
            audio_streams = vts.title_audio_count,
            subpicture_streams = vts.title_subpicture_count,
            pgcs = vts.program_chains.len(),
            "decoded VTS IFO"
        );
        Ok(vts)
    }

    /// Program chain for a 0-based title number within this set.
    #[inline]
    pub fn program_chain(&self, index: usize) -> Option<&ProgramChain> {
        self.program_chains.get(index)
    }

    #[inline]
    pub fn is_karaoke(&self) -> bool {
        self.category == 1
    }
}
