//! Disc catalog: the top-level entry point turning a disc into titles.

use std::path::Path;

use tracing::debug;

use crate::disc::{DirectorySource, DiscReader, IfoSource, LanguageTable};
use crate::error::Result;
use crate::title::{Title, TitleResolver};

/// Default cap on the size of a single IFO file.
pub const DEFAULT_MAX_IFO_SIZE: u64 = 16 * 1024 * 1024;

/// Options controlling how a disc is read and resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Name of the directory holding the IFO files, relative to the disc root
    pub video_ts_dir: String,
    /// Files larger than this are refused
    pub max_ifo_size: u64,
    /// Fail on unknown video standards and audio coding modes
    pub strict_codes: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            video_ts_dir: "VIDEO_TS".to_string(),
            max_ifo_size: DEFAULT_MAX_IFO_SIZE,
            strict_codes: false,
        }
    }
}

impl CatalogOptions {
    pub fn video_ts_dir(mut self, dir: impl Into<String>) -> Self {
        self.video_ts_dir = dir.into();
        self
    }

    pub fn max_ifo_size(mut self, limit: u64) -> Self {
        self.max_ifo_size = limit;
        self
    }

    pub fn strict_codes(mut self, strict: bool) -> Self {
        self.strict_codes = strict;
        self
    }
}

/// Produces the ordered title list of a disc.
#[derive(Debug, Clone)]
pub struct DiscCatalog<'l> {
    languages: &'l LanguageTable,
    options: CatalogOptions,
}

impl<'l> DiscCatalog<'l> {
    pub fn new(languages: &'l LanguageTable) -> Self {
        Self {
            languages,
            options: CatalogOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CatalogOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn options(&self) -> &CatalogOptions {
        &self.options
    }

    /// Source reading the disc rooted at `root` with these options.
    pub fn directory(&self, root: impl AsRef<Path>) -> DirectorySource {
        DirectorySource::with_options(root.as_ref(), self.options.clone())
    }

    /// Titles of the disc rooted at `root` (the directory containing VIDEO_TS).
    pub fn open(&self, root: impl AsRef<Path>) -> Result<Vec<Title>> {
        let root = root.as_ref();
        debug!(root = %root.display(), "opening disc");
        self.titles_from(&self.directory(root))
    }

    /// Titles of the disc provided by `source`, in title search table order.
    pub fn titles_from<S: IfoSource + ?Sized>(&self, source: &S) -> Result<Vec<Title>> {
        let reader = self.reader(source)?;
        TitleResolver::new(&reader)
            .strict_codes(self.options.strict_codes)
            .resolve_all()
    }

    /// Decoded navigation tree, for callers that need the raw tables.
    pub fn reader<S: IfoSource + ?Sized>(&self, source: &S) -> Result<DiscReader<'l>> {
        DiscReader::open(source, self.languages)
    }
}
