//! Decoding of the VMG and every title set it references.

use tracing::debug;

use super::{IfoSource, LanguageTable};
use crate::error::{IfoError, Result};
use crate::ifo::{VmgDescriptor, VtsDescriptor};

/// Title set numbers are two decimal digits in the file names.
const MAX_TITLE_SETS: u16 = 99;

/// Decoded navigation tree of a disc.
#[derive(Debug, Clone)]
pub struct DiscReader<'l> {
    pub vmg: VmgDescriptor,
    /// Title sets in file order; index 0 is VTS_01_0.IFO
    pub title_sets: Vec<VtsDescriptor>,
    languages: &'l LanguageTable,
}

impl<'l> DiscReader<'l> {
    /// Decode VIDEO_TS.IFO and then every title set it declares.
    pub fn open<S: IfoSource + ?Sized>(source: &S, languages: &'l LanguageTable) -> Result<Self> {
        let vmg = VmgDescriptor::from_bytes(source.read_vmg()?)?;

        let count = vmg.title_set_count;
        if count > MAX_TITLE_SETS {
            return Err(IfoError::UnsupportedStructure {
                field: "title set count",
                value: count.into(),
            });
        }

        let mut title_sets = Vec::with_capacity(count as usize);
        for n in 1..=count as u8 {
            debug!(title_set = n, "decoding title set");
            title_sets.push(VtsDescriptor::from_bytes(source.read_title_set(n)?)?);
        }

        debug!(
            title_sets = title_sets.len(),
            titles = vmg.title_search.len(),
            "disc navigation decoded"
        );
        Ok(Self {
            vmg,
            title_sets,
            languages,
        })
    }

    #[inline]
    pub fn languages(&self) -> &'l LanguageTable {
        self.languages
    }

    /// Title set for a 1-based title set number.
    pub fn title_set(&self, n: u8) -> Option<&VtsDescriptor> {
        (n as usize).checked_sub(1).and_then(|i| self.title_sets.get(i))
    }

    /// Number of titles in the title search table.
    #[inline]
    pub fn title_count(&self) -> usize {
        self.vmg.title_search.len()
    }
}
