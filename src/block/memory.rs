//! In-memory block device implementation

use crate::constants::{SECTOR_COUNT, SECTOR_SIZE};
use crate::{BlockDevice, FsError};
use alloc::vec;
use alloc::vec::Vec;

/// Block device that stores its sectors in memory
pub struct MemoryBlockDevice {
    /// Sector contents, one fixed-size payload per sector
    sectors: Vec<[u8; SECTOR_SIZE]>,
}

impl MemoryBlockDevice {
    /// Creates a new device with every sector in the erased state
    pub fn new() -> Self {
        Self {
            sectors: vec![[0xFF; SECTOR_SIZE]; SECTOR_COUNT],
        }
    }
}

impl Default for MemoryBlockDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDevice for MemoryBlockDevice {
    /// Reads a sector into the buffer
    fn read_sector(&self, sector: u8, buf: &mut [u8; SECTOR_SIZE]) -> Result<(), FsError> {
        buf.copy_from_slice(&self.sectors[sector as usize]);
        Ok(())
    }

    /// Writes the buffer to a sector
    fn write_sector(&mut self, sector: u8, buf: &[u8; SECTOR_SIZE]) -> Result<(), FsError> {
        self.sectors[sector as usize].copy_from_slice(buf);
        Ok(())
    }

    /// Erases every sector back to 0xFF
    fn format(&mut self) -> Result<(), FsError> {
        for sector in self.sectors.iter_mut() {
            sector.fill(0xFF);
        }
        Ok(())
    }
}
