//! Zip-backed EPI container access.

use std::io::Cursor;
use std::io::Read;

use crate::Result;
use crate::error::VerifyError;

/// Required entry holding the format sentinel.
pub const MIMETYPE_ENTRY: &str = "mimetype";

/// Required entry holding the manifest document.
pub const MANIFEST_ENTRY: &str = "manifest.json";

/// Optional entry holding the self-contained embedded viewer.
pub const VIEWER_ENTRY: &str = "viewer.html";

/// Exact sentinel value the `mimetype` entry must hold (after trimming).
pub const EPI_MIMETYPE: &str = "application/vnd.epi+zip";

/// An opened `.epi` container.
///
/// Borrows the input bytes and never mutates them; all reads decompress into
/// fresh buffers.
#[derive(Debug)]
pub struct Container<'a> {
    zip: zip::ZipArchive<Cursor<&'a [u8]>>,
}

impl<'a> Container<'a> {
    /// Opens the byte stream as a zip container.
    ///
    /// Fails with [`VerifyError::MalformedArchive`] if the bytes are not a
    /// valid zip archive.
    pub fn open(bytes: &'a [u8]) -> Result<Self> {
        let zip = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| VerifyError::MalformedArchive(e.to_string()))?;
        Ok(Self { zip })
    }

    /// Returns whether the container holds an entry with the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.zip.index_for_name(name).is_some()
    }

    /// Reads an entry's full content.
    ///
    /// The caller is expected to have checked presence; a vanished or
    /// unreadable entry maps to [`VerifyError::Unexpected`].
    pub fn read_bytes(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut entry = self
            .zip
            .by_name(name)
            .map_err(|e| VerifyError::Unexpected(format!("failed to open entry {name}: {e}")))?;

        let mut buffer = Vec::with_capacity(usize::try_from(entry.size()).unwrap_or(0));
        entry
            .read_to_end(&mut buffer)
            .map_err(|e| VerifyError::Unexpected(format!("failed to read entry {name}: {e}")))?;
        Ok(buffer)
    }

    /// Reads an entry's content as UTF-8 text.
    pub fn read_text(&mut self, name: &str) -> Result<String> {
        let bytes = self.read_bytes(name)?;
        String::from_utf8(bytes)
            .map_err(|_| VerifyError::Unexpected(format!("entry {name} is not valid UTF-8")))
    }

    /// Reads an entry's content as text, replacing invalid UTF-8 sequences.
    ///
    /// Used for the mimetype gate, where a garbled value should be reported
    /// back to the user rather than classified as unexpected.
    pub fn read_text_lossy(&mut self, name: &str) -> Result<String> {
        let bytes = self.read_bytes(name)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
