use crate::error::{SketchError, SketchResult};
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Immutable PNG encoding of a whole surface at one instant.
///
/// Snapshots are copies, never references into the surface, so later
/// drawing cannot change them. Cloning shares the encoded bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    encoded: Arc<[u8]>,
}

impl Snapshot {
    /// Encode the full contents of `pixmap`.
    pub fn capture(pixmap: &Pixmap) -> SketchResult<Self> {
        let encoded = pixmap
            .encode_png()
            .map_err(|e| SketchError::Encode(e.to_string()))?;
        Ok(Self {
            width: pixmap.width(),
            height: pixmap.height(),
            encoded: encoded.into(),
        })
    }

    /// Decode back into a pixmap. Decoding the same snapshot twice yields
    /// identical pixels.
    pub fn decode(&self) -> SketchResult<Pixmap> {
        Pixmap::decode_png(&self.encoded).map_err(|e| SketchError::Decode(e.to_string()))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The encoded PNG bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.encoded
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("encoded_len", &self.encoded.len())
            .finish()
    }
}
