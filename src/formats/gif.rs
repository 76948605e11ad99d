use memchr::{memchr2, memchr2_iter};

use crate::core::error::ScanError;
use crate::types::{BodyEnd, BodyScanReport, GifMetadata};

pub const GIF_SIGNATURE: &[u8; 3] = b"GIF";

/// Signature, version and the logical screen descriptor fields read here
/// (width, height, packed byte).
pub const HEADER_LEN: usize = 11;

pub const IMAGE_SEPARATOR: u8 = 0x2C;
pub const EXTENSION_INTRODUCER: u8 = 0x21;
pub const COMMENT_LABEL: u8 = 0xFE;
pub const TRAILER: u8 = 0x3B;

pub const COMMENT_SEPARATOR: &str = "; ";

const COLOR_TABLE_EXPONENT_MASK: u8 = 0b0000_0111;

/// Fixed-size part of a GIF file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifHeader {
    pub version: String,
    pub width: u16,
    pub height: u16,
    pub packed: u8,
}

impl GifHeader {
    /// Global color table size, `2^(n+1)` for the low three bits `n`.
    #[inline]
    pub fn color_table_size(&self) -> u16 {
        1 << ((self.packed & COLOR_TABLE_EXPONENT_MASK) + 1)
    }

    /// The whole packed byte as hex text.
    ///
    /// This is not the background color index (that byte follows the packed
    /// fields); stored catalogs have always carried the packed byte here.
    pub fn background_indicator(&self) -> String {
        format!("{:#x}", self.packed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCount {
    pub count: usize,
    pub end: BodyEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentScan {
    pub fragments: Vec<String>,
    pub end: BodyEnd,
}

impl CommentScan {
    /// Fragments joined with `"; "`, or `None` when there were none.
    pub fn joined(&self) -> Option<String> {
        if self.fragments.is_empty() {
            None
        } else {
            Some(self.fragments.join(COMMENT_SEPARATOR))
        }
    }
}

/// Extracts header fields, image count and comments from a whole GIF file.
///
/// Fails only when the signature is wrong or the header is cut short.
pub fn scan(data: &[u8]) -> Result<GifMetadata, ScanError> {
    let header = decode_header(data)?;
    let body = &data[HEADER_LEN..];

    let images = count_images(body);
    let comments = extract_comments(body);

    tracing::trace!(
        version = %header.version,
        width = header.width,
        height = header.height,
        images = images.count,
        comment_fragments = comments.fragments.len(),
        "decoded GIF"
    );

    Ok(GifMetadata {
        color_table_size: header.color_table_size(),
        background_color_indicator: header.background_indicator(),
        version: header.version,
        width: header.width,
        height: header.height,
        image_count: images.count,
        comments: comments.joined(),
        body: BodyScanReport {
            images: images.end,
            comments: comments.end,
        },
    })
}

pub fn decode_header(data: &[u8]) -> Result<GifHeader, ScanError> {
    if !data.starts_with(GIF_SIGNATURE) {
        return Err(ScanError::NotAGif);
    }

    if data.len() < HEADER_LEN {
        return Err(ScanError::TruncatedHeader { len: data.len() });
    }

    Ok(GifHeader {
        version: String::from_utf8_lossy(&data[3..6]).into_owned(),
        width: u16::from_le_bytes([data[6], data[7]]),
        height: u16::from_le_bytes([data[8], data[9]]),
        packed: data[10],
    })
}

/// Counts image separator bytes up to the trailer.
///
/// Every 0x2C counts, including ones inside descriptor or sub-block data, so
/// the result can overshoot on files whose payload happens to contain it.
pub fn count_images(body: &[u8]) -> ImageCount {
    let mut count = 0;

    for pos in memchr2_iter(IMAGE_SEPARATOR, TRAILER, body) {
        if body[pos] == TRAILER {
            return ImageCount {
                count,
                end: BodyEnd::Trailer,
            };
        }
        count += 1;
    }

    ImageCount {
        count,
        end: BodyEnd::EndOfStream,
    }
}

/// Collects the first sub-block of every comment extension up to the trailer.
///
/// Non-comment extensions are not skipped: scanning resumes right after
/// their label byte.
pub fn extract_comments(body: &[u8]) -> CommentScan {
    let mut fragments = Vec::new();
    let mut pos = 0;

    while let Some(found) = memchr2(EXTENSION_INTRODUCER, TRAILER, &body[pos..]) {
        let at = pos + found;

        if body[at] == TRAILER {
            return CommentScan {
                fragments,
                end: BodyEnd::Trailer,
            };
        }

        let Some(&label) = body.get(at + 1) else {
            break;
        };
        pos = at + 2;

        if label != COMMENT_LABEL {
            continue;
        }

        let Some(&len) = body.get(pos) else {
            return CommentScan {
                fragments,
                end: BodyEnd::TruncatedPayload,
            };
        };
        pos += 1;

        if len == 0 {
            continue;
        }

        let end = pos + len as usize;
        if end > body.len() {
            fragments.push(decode_ascii(&body[pos..]));
            return CommentScan {
                fragments,
                end: BodyEnd::TruncatedPayload,
            };
        }

        fragments.push(decode_ascii(&body[pos..end]));
        pos = end;
    }

    CommentScan {
        fragments,
        end: BodyEnd::EndOfStream,
    }
}

fn decode_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b.is_ascii() {
                b as char
            } else {
                char::REPLACEMENT_CHARACTER
            }
        })
        .collect()
}
