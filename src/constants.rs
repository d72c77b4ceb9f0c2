//! Filesystem geometry and sentinel constants

/// Size of a disk sector in bytes
pub const SECTOR_SIZE: usize = 512;

/// Total number of sectors on the device
pub const SECTOR_COUNT: usize = 256;

/// Sector holding the directory and allocation table
pub const METADATA_SECTOR: u8 = 255;

/// Number of sectors usable for file data (all but the metadata sector)
pub const DATA_SECTORS: usize = 255;

/// Number of directory entries, one per possible file id
pub const DIR_ENTRIES: usize = 256;

/// Number of usable file ids (id 255 is reserved)
pub const MAX_FILES: usize = 255;

/// Sentinel marking an empty directory entry or the end of a sector chain
pub const NO_SECTOR: u8 = 255;
