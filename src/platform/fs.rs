// Placement Predictor - platform/fs.rs
//
// Filesystem helpers: size-bounded text reads and image decoding.
// Returns plain byte buffers so nothing above this layer needs to know
// how files are read or decoded.

use crate::util::error::AssetError;
use std::io;
use std::path::Path;

/// Outcome of a size-bounded read.
#[derive(Debug)]
pub enum BoundedRead {
    Text(String),
    TooLarge { size: u64 },
}

/// Read a UTF-8 file, refusing anything larger than `max_bytes`.
pub fn read_text_bounded(path: &Path, max_bytes: u64) -> io::Result<BoundedRead> {
    let size = std::fs::metadata(path)?.len();
    if size > max_bytes {
        return Ok(BoundedRead::TooLarge { size });
    }
    std::fs::read_to_string(path).map(BoundedRead::Text)
}

/// A decoded RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Unmultiplied RGBA, row-major, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> Result<DecodedImage, AssetError> {
    let bytes = std::fs::read(path).map_err(|e| AssetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let img = image::load_from_memory(&bytes).map_err(|e| AssetError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(path = %path.display(), width, height, "Image decoded");
    Ok(DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_read_refuses_large_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.json");
        std::fs::write(&path, "0123456789").unwrap();

        assert!(matches!(
            read_text_bounded(&path, 4).unwrap(),
            BoundedRead::TooLarge { size: 10 }
        ));
        match read_text_bounded(&path, 10).unwrap() {
            BoundedRead::Text(t) => assert_eq!(t, "0123456789"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_image_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(&dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn garbage_image_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            load_image(&path).unwrap_err(),
            AssetError::Decode { .. }
        ));
    }
}
