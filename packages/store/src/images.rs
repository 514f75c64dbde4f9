//! Uploaded image storage.
//!
//! Uploads land in one flat directory under server-generated names; the
//! client-supplied filename contributes only its extension. The stored
//! name comes back as a relative URL that the content document and the
//! catalogs keep as a plain string field.

use std::path::PathBuf;

use tracing::info;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

/// MIME types an upload may declare.
pub const ALLOWED_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Upload size ceiling, 5 MB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// A stored image, ready to serve.
#[derive(Debug)]
pub struct StoredImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// The upload directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn open(dir: impl Into<PathBuf>) -> ImageStore {
        ImageStore { dir: dir.into() }
    }

    /// Validate and store an upload. Returns the relative URL under
    /// which the image is served.
    pub fn save(
        &self,
        bytes: &[u8],
        declared_type: &str,
        original_filename: &str,
    ) -> StoreResult<String> {
        if !ALLOWED_TYPES.contains(&declared_type) {
            return Err(StoreError::UnsupportedImageType(declared_type.to_string()));
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(StoreError::ImageTooLarge {
                size: bytes.len(),
                max: MAX_UPLOAD_BYTES,
            });
        }

        // Only the extension of the client name survives, and only when
        // it is plain alphanumeric; anything else stays out of the path.
        let extension = original_filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));
        let filename = match extension {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };

        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(&filename), bytes)?;
        info!(filename, size = bytes.len(), "stored uploaded image");

        Ok(format!("/uploads/{filename}"))
    }

    /// Read a stored image back for serving.
    pub fn open_image(&self, filename: &str) -> StoreResult<StoredImage> {
        // The filename is a single path component, nothing more.
        if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
            return Err(StoreError::InvalidFilename(filename.to_string()));
        }

        let path = self.dir.join(filename);
        if !path.exists() {
            return Err(StoreError::NotFound("image".to_string()));
        }

        Ok(StoredImage {
            bytes: std::fs::read(path)?,
            content_type: content_type_for(filename),
        })
    }
}

fn content_type_for(filename: &str) -> &'static str {
    let extension = filename
        .rsplit('.')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_generates_a_fresh_name_keeping_the_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path());

        let url = store.save(b"fake png", "image/png", "vinice.png").unwrap();
        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with(".png"));
        assert!(!url.contains("vinice"));

        let filename = url.strip_prefix("/uploads/").unwrap();
        let stored = store.open_image(filename).unwrap();
        assert_eq!(stored.bytes, b"fake png");
        assert_eq!(stored.content_type, "image/png");
    }

    #[test]
    fn hostile_extensions_are_dropped_from_the_stored_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path());

        for name in ["a.png/evil", "b.png\\evil", "c.", "noext", "d..", "e.p g"] {
            let url = store.save(b"bytes", "image/png", name).unwrap();
            let filename = url.strip_prefix("/uploads/").unwrap();
            // Bare uuid, no extension, served straight from the flat dir.
            assert!(Uuid::parse_str(filename).is_ok(), "{name} -> {filename}");
            assert_eq!(store.open_image(filename).unwrap().bytes, b"bytes");
        }
    }

    #[test]
    fn oversized_uploads_are_rejected_without_side_effects() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path());

        let six_megabytes = vec![0u8; 6 * 1024 * 1024];
        let result = store.save(&six_megabytes, "image/jpeg", "big.jpg");
        assert!(matches!(result, Err(StoreError::ImageTooLarge { .. })));
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn non_image_types_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path());

        let result = store.save(b"%PDF-1.4", "application/pdf", "doc.pdf");
        assert!(matches!(
            result,
            Err(StoreError::UnsupportedImageType(t)) if t == "application/pdf"
        ));
    }

    #[test]
    fn traversal_attempts_are_invalid_filenames() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path());

        for name in ["../secret", "a/../b.png", "dir/file.png", "..\\win.png"] {
            assert!(matches!(
                store.open_image(name),
                Err(StoreError::InvalidFilename(_))
            ));
        }
    }

    #[test]
    fn missing_images_are_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::open(dir.path());
        assert!(matches!(
            store.open_image("nope.png"),
            Err(StoreError::NotFound(_))
        ));
    }
}
