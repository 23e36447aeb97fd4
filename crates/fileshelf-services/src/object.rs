//! Read handle on a stored file's bytes

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Open handle on an existing regular file.
#[derive(Debug)]
pub struct FileObject {
    path: PathBuf,
    file: File,
    len: u64,
}

impl FileObject {
    /// Open `path` for reading. Directories and other non-regular files are
    /// reported as `NotFound`.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = File::open(&path)?;
        let metadata = file.metadata()?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a regular file", path.display()),
            ));
        }

        Ok(Self {
            path,
            file,
            len: metadata.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read at most `limit` bytes from the start of the file.
    pub fn read_head(&mut self, limit: usize) -> io::Result<Vec<u8>> {
        self.file.seek(SeekFrom::Start(0))?;
        let mut buf = Vec::with_capacity(limit.min(self.len as usize));
        (&mut self.file).take(limit as u64).read_to_end(&mut buf)?;
        Ok(buf)
    }
}
