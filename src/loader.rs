use crate::error::{Error, Result};
use bytes::Bytes;
use log::{debug, warn};
use std::{fs, path::Path};

///
/// Read the whole file at `path`.
///
/// Fails when the file can't be read or when it has no content at all.
///
pub fn load_bytes<P>(path: P) -> Result<Bytes>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let raw = fs::read(path).map_err(|e| Error::ReadError(path.to_path_buf(), e))?;

    if raw.is_empty() {
        return Err(Error::EmptyFile(path.to_path_buf()));
    }

    debug!("loaded {} bytes from {}", raw.len(), path.display());

    Ok(Bytes::from(raw))
}

///
/// Same as [`load_bytes`](load_bytes) but decoded as utf-8 text.
///
/// Invalid sequences are replaced with `U+FFFD`, the rest of the file
/// stays usable.
///
pub fn load_file<P>(path: P) -> Result<String>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let raw = Vec::from(load_bytes(path)?);

    match String::from_utf8(raw) {
        Ok(content) => Ok(content),
        Err(e) => {
            warn!(
                "{} is not valid utf-8 (valid up to byte {}), invalid sequences replaced",
                path.display(),
                e.utf8_error().valid_up_to()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
