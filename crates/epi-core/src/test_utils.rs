//! Test utilities for building in-memory `.epi` containers.
//!
//! These helpers are used by unit, integration, and CLI tests to assemble
//! well-formed and deliberately broken containers without fixture files.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

use crate::container::EPI_MIMETYPE;
use crate::integrity::sha256_hex;

/// Creates an in-memory ZIP archive from a list of `(path, content)` entries.
///
/// Entries are stored uncompressed in the order given.
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (path, data) in entries {
        zip.start_file(path, options).unwrap();
        zip.write_all(data).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// Builder for in-memory `.epi` containers.
///
/// Payload hashes are computed automatically, so a default build is always
/// internally consistent; `tamper` and the override methods break specific
/// invariants on purpose.
///
/// # Examples
///
/// ```
/// use epi_core::test_utils::EpiBuilder;
/// use epi_core::verify_container;
///
/// let bytes = EpiBuilder::new()
///     .payload("data.txt", b"hello")
///     .signature("ed25519:default:deadbeef")
///     .build();
/// assert!(verify_container(&bytes).is_ok());
/// ```
#[derive(Default)]
pub struct EpiBuilder {
    mimetype: Option<String>,
    raw_manifest: Option<String>,
    payloads: Vec<(String, Vec<u8>)>,
    tampered: Vec<(String, Vec<u8>)>,
    missing: Vec<String>,
    signature: Option<String>,
    viewer: Option<Vec<u8>>,
    workflow_id: String,
}

impl EpiBuilder {
    /// Creates a builder for a minimal valid container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            workflow_id: "wf-test".to_string(),
            ..Self::default()
        }
    }

    /// Overrides the `mimetype` entry content.
    #[must_use]
    pub fn mimetype(mut self, value: &str) -> Self {
        self.mimetype = Some(value.to_string());
        self
    }

    /// Replaces `manifest.json` with raw text, bypassing manifest assembly.
    #[must_use]
    pub fn raw_manifest(mut self, json: &str) -> Self {
        self.raw_manifest = Some(json.to_string());
        self
    }

    /// Sets the manifest's workflow identifier.
    #[must_use]
    pub fn workflow_id(mut self, id: &str) -> Self {
        self.workflow_id = id.to_string();
        self
    }

    /// Adds a payload file; its hash is recorded in the manifest.
    #[must_use]
    pub fn payload(mut self, path: &str, content: &[u8]) -> Self {
        self.payloads.push((path.to_string(), content.to_vec()));
        self
    }

    /// Writes different bytes for `path` than the manifest hash was computed
    /// from, producing a hash mismatch.
    #[must_use]
    pub fn tamper(mut self, path: &str, content: &[u8]) -> Self {
        self.tampered.push((path.to_string(), content.to_vec()));
        self
    }

    /// Lists `path` in the manifest but omits the archive entry, producing a
    /// missing-file mismatch. The hash recorded is that of `content`.
    #[must_use]
    pub fn omit_payload(mut self, path: &str, content: &[u8]) -> Self {
        self.payloads.push((path.to_string(), content.to_vec()));
        self.missing.push(path.to_string());
        self
    }

    /// Sets the manifest's signature envelope.
    #[must_use]
    pub fn signature(mut self, envelope: &str) -> Self {
        self.signature = Some(envelope.to_string());
        self
    }

    /// Adds an embedded `viewer.html` entry.
    #[must_use]
    pub fn viewer(mut self, html: &str) -> Self {
        self.viewer = Some(html.as_bytes().to_vec());
        self
    }

    /// Adds an embedded `viewer.html` entry with raw bytes, which need not
    /// be valid UTF-8.
    #[must_use]
    pub fn viewer_bytes(mut self, content: &[u8]) -> Self {
        self.viewer = Some(content.to_vec());
        self
    }

    /// Assembles the container bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        let manifest = self.raw_manifest.clone().unwrap_or_else(|| {
            let files: serde_json::Map<String, serde_json::Value> = self
                .payloads
                .iter()
                .map(|(path, content)| {
                    (path.clone(), serde_json::Value::from(sha256_hex(content)))
                })
                .collect();

            serde_json::to_string_pretty(&serde_json::json!({
                "workflow_id": self.workflow_id,
                "spec_version": "1.0",
                "created_at": "2025-07-01T12:00:00+00:00",
                "file_manifest": files,
                "signature": self.signature,
            }))
            .unwrap()
        });

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

        zip.start_file("mimetype", options).unwrap();
        zip.write_all(
            self.mimetype
                .as_deref()
                .unwrap_or(EPI_MIMETYPE)
                .as_bytes(),
        )
        .unwrap();

        zip.start_file("manifest.json", options).unwrap();
        zip.write_all(manifest.as_bytes()).unwrap();

        for (path, content) in &self.payloads {
            if self.missing.contains(path) {
                continue;
            }
            let written = self
                .tampered
                .iter()
                .find(|(p, _)| p == path)
                .map_or(content.as_slice(), |(_, c)| c.as_slice());
            zip.start_file(path, options).unwrap();
            zip.write_all(written).unwrap();
        }

        if let Some(html) = &self.viewer {
            zip.start_file("viewer.html", options).unwrap();
            zip.write_all(html).unwrap();
        }

        zip.finish().unwrap().into_inner()
    }
}
