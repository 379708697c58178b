//! Video manager (VIDEO_TS.IFO) decoding.

use tracing::{debug, warn};

use super::{sector_offset, IfoKind, IfoVersion, RawImage};
use crate::attributes::{AudioAttributes, SubpictureAttributes, VideoAttributes};
use crate::error::Result;
use crate::nav::TitleSearchTable;
use crate::utils::trim_padding;

/// Sector pointers of the VMGI_MAT (all relative to the start of the IFO).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VmgSectors {
    /// Title search pointer table
    pub tt_srpt: u32,
    /// Menu program chain information unit table
    pub vmgm_pgci_ut: u32,
    /// Parental management masks
    pub ptl_mait: u32,
    /// Copies of the title set attributes
    pub vts_atrt: u32,
    /// Text data
    pub txtdt_mg: u32,
    /// Menu cell address table
    pub vmgm_c_adt: u32,
    /// Menu VOBU address map
    pub vmgm_vobu_admap: u32,
}

/// Fully decoded VIDEO_TS.IFO.
#[derive(Debug, Clone)]
pub struct VmgDescriptor {
    pub last_sector_vmg: u32,
    pub last_sector_ifo: u32,
    pub version: IfoVersion,
    pub category: u32,
    pub volume_count: u16,
    pub volume_number: u16,
    pub side_id: u8,
    pub title_set_count: u16,
    /// Provider identifier with padding removed
    pub provider_id: String,
    pub vmg_pos: u64,
    pub end_address_vmgi_mat: u32,
    pub first_play_pgc_address: u32,
    pub menu_vob_start_sector: u32,
    pub sectors: VmgSectors,
    pub menu_video: VideoAttributes,
    pub menu_audio_count: u16,
    pub menu_audio: [AudioAttributes; 8],
    pub menu_subpicture_count: u16,
    pub menu_subpicture: SubpictureAttributes,
    pub title_search: TitleSearchTable,
}

impl VmgDescriptor {
    /// Validate and decode a VIDEO_TS.IFO buffer.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::parse(&RawImage::new(IfoKind::Vmg, bytes)?)
    }

    /// Decode a validated VMG image.
    pub fn parse(image: &RawImage) -> Result<Self> {
        let view = image.view();

        let sectors = VmgSectors {
            tt_srpt: view.u32(0xC4)?,
            vmgm_pgci_ut: view.u32(0xC8)?,
            ptl_mait: view.u32(0xCC)?,
            vts_atrt: view.u32(0xD0)?,
            txtdt_mg: view.u32(0xD4)?,
            vmgm_c_adt: view.u32(0xD8)?,
            vmgm_vobu_admap: view.u32(0xDC)?,
        };

        let mut vmg = Self {
            last_sector_vmg: view.u32(0x0C)?,
            last_sector_ifo: view.u32(0x1C)?,
            version: IfoVersion::parse(&view, 0x21)?,
            category: view.u32(0x22)?,
            volume_count: view.u16(0x26)?,
            volume_number: view.u16(0x28)?,
            side_id: view.u8(0x2A)?,
            title_set_count: view.u16(0x3E)?,
            provider_id: trim_padding(&view.string(0x40, 32)?).to_string(),
            vmg_pos: view.u64(0x60)?,
            end_address_vmgi_mat: view.u32(0x80)?,
            first_play_pgc_address: view.u32(0x84)?,
            menu_vob_start_sector: view.u32(0xC0)?,
            sectors,
            menu_video: VideoAttributes::parse(&view, 0x100)?,
            menu_audio_count: view.u16(0x102)?,
            menu_audio: AudioAttributes::parse_array::<8>(&view, 0x104)?,
            menu_subpicture_count: view.u16(0x154)?,
            menu_subpicture: SubpictureAttributes::parse(&view, 0x156)?,
            title_search: TitleSearchTable::default(),
        };

        if sectors.tt_srpt == 0 {
            warn!("VMG has no title search pointer table");
        } else {
            let offset = sector_offset(&view, sectors.tt_srpt)?;
            vmg.title_search = TitleSearchTable::parse(&view, offset)?;
        }

        debug!(
            version = %vmg.version,
            title_sets = vmg.title_set_count,
            titles = vmg.title_search.len(),
            provider = %vmg.provider_id,
            "decoded VIDEO_TS.IFO"
        );
        Ok(vmg)
    }
}
