/// Where a body scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyEnd {
    /// Reached the 0x3B trailer.
    Trailer,
    /// Ran out of bytes without a trailer.
    EndOfStream,
    /// A comment length byte promised more bytes than the file holds.
    TruncatedPayload,
}

impl BodyEnd {
    pub fn is_complete(&self) -> bool {
        matches!(self, BodyEnd::Trailer)
    }
}

/// How far each body pass got. Never an error; partial data is still
/// returned in the owning [`GifMetadata`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyScanReport {
    pub images: BodyEnd,
    pub comments: BodyEnd,
}

impl BodyScanReport {
    pub fn is_complete(&self) -> bool {
        self.images.is_complete() && self.comments.is_complete()
    }
}

/// Structural metadata of one GIF file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifMetadata {
    /// Three bytes after the signature, e.g. `89a`. Not checked against
    /// known versions.
    pub version: String,
    pub width: u16,
    pub height: u16,
    /// One of 2, 4, 8, ..., 256.
    pub color_table_size: u16,
    /// Packed fields byte as `0x..` hex text.
    pub background_color_indicator: String,
    pub image_count: usize,
    /// Comment fragments joined with `"; "`; `None` if the file has none.
    pub comments: Option<String>,
    pub body: BodyScanReport,
}
