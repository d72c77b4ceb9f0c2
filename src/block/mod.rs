//! Block device implementations

pub mod memory;

#[cfg(feature = "host-tool")]
pub mod file;

pub use memory::MemoryBlockDevice;

#[cfg(feature = "host-tool")]
pub use file::FileBlockDevice;
