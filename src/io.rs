// File-oriented hashing: wraps a `File` in a seekable `RewindRead` impl and
// drives the adaptive block-size loop from `hash::hash_reader` over it.
//
// Buffering matches the 64 KiB chunking the teacher's own file helpers used
// for streaming reads, independent of the 8 KiB chunking inside the
// block-size loop itself (`hash::STREAM_BUF_SIZE`).

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::hash::{self, HashError, RewindRead};

const BUF_SIZE: usize = 64 * 1024;

/// Errors from `hash_from_file()`.
#[derive(Debug)]
pub enum FileError {
    /// No file exists at the given path.
    NotFound,
    /// The file exists but could not be opened or read due to permissions.
    AccessDenied,
    /// Some other I/O failure (e.g. the path is a directory).
    Io(io::Error),
    /// Failure from the hashing core itself.
    Hash(HashError),
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::AccessDenied => write!(f, "permission denied"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Hash(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Hash(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HashError> for FileError {
    fn from(e: HashError) -> Self {
        Self::Hash(e)
    }
}

impl From<io::Error> for FileError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::AccessDenied,
            _ => Self::Io(e),
        }
    }
}

/// A buffered file reader that can seek back to the start, satisfying
/// `RewindRead` for the block-size retry loop.
struct SeekableFile(BufReader<File>);

impl Read for SeekableFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl RewindRead for SeekableFile {
    fn rewind_to_start(&mut self) -> io::Result<()> {
        self.0.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}

/// Compute the fuzzy-hash digest of the file at `path`.
pub fn hash_from_file(path: &Path) -> Result<String, FileError> {
    // `File::open` happily succeeds on a directory on Unix; the spec
    // requires `NotFound` for "not a regular file" (ppdeep.py checks
    // `os.path.isfile` before opening), so reject it up front rather
    // than letting it surface later as an opaque read error.
    if !path.is_file() {
        return Err(FileError::NotFound);
    }
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    let mut reader = SeekableFile(BufReader::with_capacity(BUF_SIZE, file));
    Ok(hash::hash_reader(&mut reader, len)?)
}
