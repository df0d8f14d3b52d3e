//! Document serialization and file writing.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use jsd_convert::{convert_scene, ConvertOptions, Document};
use jsd_scene::Scene;
use log::info;

use crate::error::{ExportError, Result};

/// Options for JSD export.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Pretty-print the JSON output. Off by default; the reference behavior
    /// writes the compact form.
    pub pretty: bool,
    /// Scene conversion options.
    pub convert: ConvertOptions,
}

impl ExportOptions {
    /// Create default export options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-print the output.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Set the conversion options.
    pub fn with_convert(mut self, convert: ConvertOptions) -> Self {
        self.convert = convert;
        self
    }
}

/// Render a document to its JSD textual encoding (UTF-8 JSON bytes).
///
/// Purely structural; field names and order come from the document types.
pub fn serialize(doc: &Document, options: &ExportOptions) -> Result<Vec<u8>> {
    let bytes = if options.pretty {
        serde_json::to_vec_pretty(doc)?
    } else {
        serde_json::to_vec(doc)?
    };
    Ok(bytes)
}

/// Convert a scene and write the resulting JSD document to `path`.
///
/// The document is fully built and serialized in memory before the
/// destination is opened, so a failure never leaves a partial file: either
/// conversion fails with no file touched, or the whole document is written.
pub fn export(scene: &Scene, path: &Path, options: &ExportOptions) -> Result<()> {
    let doc = convert_scene(scene, &options.convert)?;
    let bytes = serialize(&doc, options)?;

    let mut file = File::create(path).map_err(|source| ExportError::UnwritableDestination {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(&bytes)?;

    info!(
        "exported {} meshes, {} cameras to {}",
        doc.mesh_count(),
        doc.camera_count(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_empty_document_compact() {
        let doc = Document::default();
        let bytes = serialize(&doc, &ExportOptions::new()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            r#"{"objects":[],"cameras":[],"world":{"type":"world","name":"World","color":[0.0,0.0,0.0]}}"#
        );
    }

    #[test]
    fn test_serialize_pretty_has_newlines() {
        let doc = Document::default();
        let bytes = serialize(&doc, &ExportOptions::new().pretty()).unwrap();
        assert!(bytes.contains(&b'\n'));
    }
}
