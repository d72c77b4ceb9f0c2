//! Host tool for building and inspecting sectorfs disk images

use clap::Parser;
use sectorfs::block::FileBlockDevice;
use sectorfs::constants::{MAX_FILES, SECTOR_SIZE};
use sectorfs::{FsError, SectorFs};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
struct Args {
    /// Disk image path
    #[arg(short, long)]
    output: PathBuf,

    /// Directory to import files from
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// List the files in an existing image instead of creating one
    #[arg(short, long)]
    list: bool,
}

fn fs_err(err: FsError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("filesystem error: {err:?}"))
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if args.list {
        return list_image(&args.output);
    }

    println!("Creating image: {} (256 sectors)", args.output.display());
    let device = FileBlockDevice::create(&args.output)?;
    let mut volume = SectorFs::new(Box::new(device));
    volume.format().map_err(fs_err)?;

    let mut imported = 0usize;
    if let Some(ref src_dir) = args.dir {
        let mut paths: Vec<PathBuf> = fs::read_dir(src_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        for path in paths {
            let data = fs::read(&path)?;
            if data.is_empty() {
                println!("  skipping empty file {}", path.display());
                continue;
            }

            let id = volume.create().map_err(fs_err)?;
            let mut sector = [0u8; SECTOR_SIZE];
            let mut sectors = 0usize;
            for chunk in data.chunks(SECTOR_SIZE) {
                sector.fill(0);
                sector[..chunk.len()].copy_from_slice(chunk);
                volume.append(id, &sector).map_err(fs_err)?;
                sectors += 1;
            }

            println!("  file {id:3}  {sectors:3} sectors  {}", path.display());
            imported += 1;
        }
    }

    volume.flush().map_err(fs_err)?;
    println!("Done: {imported} files imported");
    Ok(())
}

fn list_image(path: &Path) -> io::Result<()> {
    let device = FileBlockDevice::open(path)?;
    let mut volume = SectorFs::new(Box::new(device));

    let mut total = 0usize;
    for id in 0..MAX_FILES as u8 {
        let sectors = volume.size(id).map_err(fs_err)?;
        if sectors > 0 {
            println!("  file {id:3}  {sectors:3} sectors");
            total += sectors;
        }
    }
    println!("{total} of 255 data sectors in use");
    Ok(())
}
