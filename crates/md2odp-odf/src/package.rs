//! ODP zip container reading and writing.
//!
//! The package is held fully in memory: entry names and bytes in archive
//! order. Writing preserves every entry as read, with two packaging rules
//! applied: the `mimetype` entry comes first and is stored uncompressed,
//! everything else is deflated.

use std::io::{Read, Seek, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::DocumentError;

pub(crate) const MIMETYPE_ENTRY: &str = "mimetype";
pub(crate) const CONTENT_ENTRY: &str = "content.xml";
pub(crate) const STYLES_ENTRY: &str = "styles.xml";
pub(crate) const PRESENTATION_MIMETYPE: &str = "application/vnd.oasis.opendocument.presentation";

/// One package entry.
#[derive(Debug)]
struct PackageEntry {
    name: String,
    data: Vec<u8>,
    dir: bool,
}

/// An in-memory ODF package.
#[derive(Debug)]
pub(crate) struct OdpPackage {
    entries: Vec<PackageEntry>,
}

impl OdpPackage {
    /// Read a package from a zip archive.
    pub(crate) fn read<R: Read + Seek>(reader: R) -> Result<Self, DocumentError> {
        let mut archive = ZipArchive::new(reader)?;
        let mut entries = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            let dir = file.is_dir();
            let name = file.name().to_owned();
            let mut data = Vec::new();
            if !dir {
                file.read_to_end(&mut data)?;
            }
            entries.push(PackageEntry { name, data, dir });
        }
        Ok(Self { entries })
    }

    /// The bytes of a file entry, if present.
    pub(crate) fn entry(&self, name: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|entry| !entry.dir && entry.name == name)
            .map(|entry| entry.data.as_slice())
    }

    /// Write the package, substituting the named entry's bytes.
    ///
    /// The `mimetype` entry is written first and stored uncompressed, as
    /// required for the package to be recognized as an ODF document.
    pub(crate) fn write<W: Write + Seek>(
        &self,
        writer: W,
        replace_name: &str,
        replace_data: &[u8],
    ) -> Result<(), DocumentError> {
        let mut zip = ZipWriter::new(writer);
        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        if let Some(mime) = self.entry(MIMETYPE_ENTRY) {
            zip.start_file(MIMETYPE_ENTRY, stored)?;
            zip.write_all(mime)?;
        }
        for entry in &self.entries {
            if entry.name == MIMETYPE_ENTRY {
                continue;
            }
            if entry.dir {
                zip.add_directory(entry.name.trim_end_matches('/'), deflated)?;
            } else {
                zip.start_file(entry.name.as_str(), deflated)?;
                if entry.name == replace_name {
                    zip.write_all(replace_data)?;
                } else {
                    zip.write_all(&entry.data)?;
                }
            }
        }
        zip.finish()?;
        Ok(())
    }
}
