use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::reports::errors::Error;
use crate::reports::Result;

/// Fails with [`Error::MissingFile`] carrying the path when nothing exists there.
pub fn check_file_exists<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::MissingFile(path.display().to_string()));
    }

    log::debug!("found expected file {}", path.display());
    Ok(())
}

pub(crate) fn read_file_content(file: File) -> std::result::Result<String, std::io::Error> {
    let mut file_content = String::new();
    let mut buf_reader = BufReader::new(file);
    buf_reader.read_to_string(&mut file_content)?;
    Ok(file_content)
}

pub(crate) fn read_path_content<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = File::open(path.as_ref())?;
    Ok(read_file_content(file)?)
}
