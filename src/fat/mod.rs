//! FAT-style single-level filesystem driver

use alloc::boxed::Box;
use log::{debug, trace};

use crate::constants::{MAX_FILES, METADATA_SECTOR, NO_SECTOR, SECTOR_SIZE};
use crate::{BlockDevice, FsError};

mod fat_entry;
mod meta;

pub use fat_entry::FatEntry;
use meta::Metadata;

/// Single-level filesystem over a fixed 256-sector block device.
///
/// One instance owns the device and all cached state. The metadata sector is
/// mounted on first use and mutated only in memory; `flush` makes the
/// current state durable.
pub struct SectorFs<'a> {
    /// Underlying block device
    device: Box<dyn BlockDevice + 'a>,
    /// In-memory directory and allocation table
    meta: Metadata,
    /// Whether `meta` mirrors the on-disk metadata sector
    mounted: bool,
}

impl<'a> SectorFs<'a> {
    /// Creates a filesystem over `device` without touching it
    pub fn new(device: Box<dyn BlockDevice + 'a>) -> Self {
        Self {
            device,
            meta: Metadata::erased(),
            mounted: false,
        }
    }

    /// Consumes the filesystem and hands the device back
    pub fn into_device(self) -> Box<dyn BlockDevice + 'a> {
        self.device
    }

    /// Loads the metadata sector into memory if it is not already cached.
    /// Redundant calls return immediately without any I/O.
    fn ensure_mounted(&mut self) -> Result<(), FsError> {
        if self.mounted {
            return Ok(());
        }
        let mut buf = [0u8; SECTOR_SIZE];
        self.device.read_sector(METADATA_SECTOR, &mut buf)?;
        self.meta = Metadata::from_sector(&buf);
        self.mounted = true;
        debug!("mounted metadata from sector {}", METADATA_SECTOR);
        Ok(())
    }

    /// Returns the id of a new file for writing.
    ///
    /// The id is the first one with no directory entry. An id only becomes
    /// occupied by its first append, so repeated calls without an
    /// intervening append return the same id.
    pub fn create(&mut self) -> Result<u8, FsError> {
        self.ensure_mounted()?;
        for id in 0..MAX_FILES {
            if self.meta.directory[id] == NO_SECTOR {
                return Ok(id as u8);
            }
        }
        Err(FsError::NoSpace)
    }

    /// Returns the number of sectors in `file`, 0 if it holds no data
    pub fn size(&mut self, file: u8) -> Result<usize, FsError> {
        self.ensure_mounted()?;
        self.meta.chain_len(self.meta.directory[file as usize])
    }

    /// Appends one sector of data to `file`.
    ///
    /// The data is written before the chain is linked, so a failed write
    /// leaves the file unchanged.
    pub fn append(&mut self, file: u8, data: &[u8; SECTOR_SIZE]) -> Result<(), FsError> {
        if file as usize >= MAX_FILES {
            return Err(FsError::NotFound);
        }
        self.ensure_mounted()?;
        let sector = self.meta.find_free_sector()?;
        self.device.write_sector(sector, data)?;
        self.meta.append_to_chain(file, sector)?;
        trace!("file {} grew to sector {}", file, sector);
        Ok(())
    }

    /// Reads the sector at logical `index` of `file` into `buf`
    pub fn read(
        &mut self,
        file: u8,
        index: usize,
        buf: &mut [u8; SECTOR_SIZE],
    ) -> Result<(), FsError> {
        self.ensure_mounted()?;
        let start = self.meta.directory[file as usize];
        let sector = self.meta.nth_sector(start, index)?;
        self.device.read_sector(sector, buf)
    }

    /// Writes the in-memory metadata back to the metadata sector.
    ///
    /// Power can be removed any time after a successful flush. The cache
    /// stays mounted.
    pub fn flush(&mut self) -> Result<(), FsError> {
        self.ensure_mounted()?;
        let mut buf = [0u8; SECTOR_SIZE];
        self.meta.to_sector(&mut buf);
        self.device.write_sector(METADATA_SECTOR, &buf)?;
        debug!("flushed metadata to sector {}", METADATA_SECTOR);
        Ok(())
    }

    /// Erases every file and all data.
    ///
    /// On success the cache is reset and the next operation remounts from
    /// the device; on failure the cache is left untouched.
    pub fn format(&mut self) -> Result<(), FsError> {
        self.device.format()?;
        self.meta = Metadata::erased();
        self.mounted = false;
        debug!("device formatted");
        Ok(())
    }
}
