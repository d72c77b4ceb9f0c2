//! File-backed block device for host-side image tooling

use crate::constants::{SECTOR_COUNT, SECTOR_SIZE};
use crate::{BlockDevice, FsError};
use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::fs::FileExt;
use std::path::Path;

/// Total image size in bytes
const IMAGE_LEN: u64 = (SECTOR_COUNT * SECTOR_SIZE) as u64;

/// Block device backed by a disk image file
pub struct FileBlockDevice {
    image: File,
}

impl FileBlockDevice {
    /// Creates a fresh, fully erased image file
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let image = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        image.set_len(IMAGE_LEN)?;
        let device = Self { image };
        device.erase_all()?;
        Ok(device)
    }

    /// Opens an existing image file
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let image = OpenOptions::new().read(true).write(true).open(path)?;
        if image.metadata()?.len() != IMAGE_LEN {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "image is not a 256-sector volume",
            ));
        }
        Ok(Self { image })
    }

    fn erase_all(&self) -> io::Result<()> {
        let erased = [0xFFu8; SECTOR_SIZE];
        for sector in 0..SECTOR_COUNT {
            self.image
                .write_all_at(&erased, (sector * SECTOR_SIZE) as u64)?;
        }
        Ok(())
    }
}

impl BlockDevice for FileBlockDevice {
    fn read_sector(&self, sector: u8, buf: &mut [u8; SECTOR_SIZE]) -> Result<(), FsError> {
        self.image
            .read_exact_at(buf, sector as u64 * SECTOR_SIZE as u64)
            .map_err(|_| FsError::IOError)
    }

    fn write_sector(&mut self, sector: u8, buf: &[u8; SECTOR_SIZE]) -> Result<(), FsError> {
        self.image
            .write_all_at(buf, sector as u64 * SECTOR_SIZE as u64)
            .map_err(|_| FsError::IOError)
    }

    fn format(&mut self) -> Result<(), FsError> {
        self.erase_all().map_err(|_| FsError::IOError)
    }
}
