//! Whole-file access to the IFO files of a disc.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::catalog::CatalogOptions;
use crate::error::{IfoError, Result};

/// Highest VOB part number of a title set (VTS_nn_1.VOB .. VTS_nn_9.VOB).
const MAX_VOB_PARTS: u8 = 9;

/// Provider of raw IFO buffers.
pub trait IfoSource {
    /// Contents of VIDEO_TS.IFO.
    fn read_vmg(&self) -> Result<Vec<u8>>;

    /// Contents of VTS_nn_0.IFO for the 1-based title set `n`.
    fn read_title_set(&self, n: u8) -> Result<Vec<u8>>;
}

/// File name of the IFO of a 1-based title set.
pub fn title_set_ifo_name(n: u8) -> String {
    format!("VTS_{n:02}_0.IFO")
}

/// Reads IFO files from `<root>/VIDEO_TS`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    options: CatalogOptions,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_options(root, CatalogOptions::default())
    }

    pub fn with_options(root: impl Into<PathBuf>, options: CatalogOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the IFO and VOB files.
    pub fn video_ts(&self) -> PathBuf {
        self.root.join(&self.options.video_ts_dir)
    }

    pub fn vmg_path(&self) -> PathBuf {
        self.video_ts().join("VIDEO_TS.IFO")
    }

    pub fn title_set_path(&self, n: u8) -> PathBuf {
        self.video_ts().join(title_set_ifo_name(n))
    }

    /// Existing title VOB files of title set `n`, in part order.
    pub fn title_vobs(&self, n: u8) -> Vec<PathBuf> {
        let dir = self.video_ts();
        (1..=MAX_VOB_PARTS)
            .map(|part| dir.join(format!("VTS_{n:02}_{part}.VOB")))
            .filter(|path| path.is_file())
            .collect()
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let metadata = fs::metadata(path).map_err(|err| not_found(err, path))?;
        let limit = self.options.max_ifo_size;
        if metadata.len() > limit {
            return Err(IfoError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }

        let bytes = fs::read(path).map_err(|err| not_found(err, path))?;
        trace!(path = %path.display(), len = bytes.len(), "read IFO file");
        Ok(bytes)
    }
}

fn not_found(err: io::Error, path: &Path) -> IfoError {
    if err.kind() == io::ErrorKind::NotFound {
        IfoError::MissingFile(path.display().to_string())
    } else {
        IfoError::Io(err)
    }
}

impl IfoSource for DirectorySource {
    fn read_vmg(&self) -> Result<Vec<u8>> {
        self.read_file(&self.vmg_path())
    }

    fn read_title_set(&self, n: u8) -> Result<Vec<u8>> {
        self.read_file(&self.title_set_path(n))
    }
}

/// IFO buffers supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    vmg: Option<Vec<u8>>,
    title_sets: HashMap<u8, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_vmg(&mut self, bytes: Vec<u8>) {
        self.vmg = Some(bytes);
    }

    /// Register the IFO of the 1-based title set `n`, replacing any previous one.
    pub fn set_title_set(&mut self, n: u8, bytes: Vec<u8>) {
        self.title_sets.insert(n, bytes);
    }

    pub fn with_vmg(mut self, bytes: Vec<u8>) -> Self {
        self.set_vmg(bytes);
        self
    }

    pub fn with_title_set(mut self, n: u8, bytes: Vec<u8>) -> Self {
        self.set_title_set(n, bytes);
        self
    }

    pub fn clear(&mut self) {
        self.vmg = None;
        self.title_sets.clear();
    }
}

impl IfoSource for MemorySource {
    fn read_vmg(&self) -> Result<Vec<u8>> {
        self.vmg
            .clone()
            .ok_or_else(|| IfoError::MissingFile("VIDEO_TS.IFO".to_string()))
    }

    fn read_title_set(&self, n: u8) -> Result<Vec<u8>> {
        self.title_sets
            .get(&n)
            .cloned()
            .ok_or_else(|| IfoError::MissingFile(title_set_ifo_name(n)))
    }
}
