//! Scenarios that acquire a real resource handle and provoke its failure
//! mode: writing after release, opening a missing path, reading past the
//! end of a byte source.
//!
//! Every handle here is scoped. The temp directory removes itself on drop,
//! success and failure paths alike, so no scenario leaves files behind.

use std::fs::File;
use std::io::{BufWriter, Cursor, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::FaultError;

/// Append-only scratch file that can be released early.
///
/// `close` takes the writer out, so a later append is rejected as
/// `ResourceClosed` without ever touching the filesystem again.
pub struct ScratchLog {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl ScratchLog {
    pub fn create(path: &Path) -> Result<Self, FaultError> {
        let file = File::create(path)
            .map_err(|err| FaultError::from_open(path.display().to_string(), err))?;
        Ok(ScratchLog {
            path: path.to_path_buf(),
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn append(&mut self, line: &str) -> Result<(), FaultError> {
        match self.writer.as_mut() {
            Some(writer) => {
                writeln!(writer, "{line}")?;
                Ok(())
            }
            None => Err(FaultError::ResourceClosed {
                resource: self.path.display().to_string(),
            }),
        }
    }

    /// Flush and drop the underlying handle. The log stays usable as a
    /// value but rejects every further append.
    pub fn close(&mut self) -> Result<(), FaultError> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }
}

/// First append lands, the handle is released, and the second append must
/// be rejected as `ResourceClosed`.
pub fn write_after_close() -> Result<(), FaultError> {
    let dir = tempfile::tempdir()?;
    let mut log = ScratchLog::create(&dir.path().join("scratch.log"))?;
    log.append("first entry")?;
    log.close()?;
    log.append("second entry")?;
    Ok(())
}

/// Opening a path nobody ever created must be `ResourceNotFound`; the
/// failed open leaves no handle acquired.
pub fn open_missing_file() -> Result<(), FaultError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("does_not_exist.txt");
    let mut file =
        File::open(&path).map_err(|err| FaultError::from_open(path.display().to_string(), err))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(())
}

/// Reading a fixed-width integer from an empty byte source must be
/// `EndOfData`, never the generic I/O fallback.
pub fn read_past_end() -> Result<(), FaultError> {
    let mut source = Cursor::new(Vec::new());
    let _value = read_u32(&mut source)?;
    Ok(())
}

/// Read a big-endian u32 from any byte source.
fn read_u32(source: &mut impl Read) -> Result<u32, FaultError> {
    let mut buf = [0u8; 4];
    source.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}
