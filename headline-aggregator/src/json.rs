use crate::types::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Permission bits for files written by [`write_json_file`].
pub const FILE_MODE: u32 = 0o644;

/// Pretty-print `value` as JSON (two-space indent) followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write `value` to `path` in the same format as [`write_json`], replacing
/// any existing file. On Unix the file ends up with mode 0644.
pub fn write_json_file<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let file = options.open(path)?;
    write_json(BufWriter::new(file), value)?;

    // open() only applies the mode to new files (and through the umask)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(FILE_MODE))?;
    }

    debug!("Wrote JSON to {}", path.display());
    Ok(())
}

/// Read a JSON file into whatever shape the caller asks for.
pub fn read_json_file<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    debug!("Read JSON from {}", path.display());
    Ok(value)
}
