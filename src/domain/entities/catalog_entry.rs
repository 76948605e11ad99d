//! Catalog entry entity
//!
//! The record stored for each scanned GIF file.

use crate::core::io::FileTimestamps;
use crate::types::GifMetadata;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// All stored records, keyed by file path.
pub type Catalog = BTreeMap<String, CatalogEntry>;

pub const COMPRESSION: &str = "LZW";
pub const NUMBER_FORMAT: &str = "Little-endian";

/// Errors from editing a stored record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("No catalog entry for {0}")]
    UnknownPath(String),

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Editable fields of a [`CatalogEntry`], in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Version,
    Width,
    Height,
    ColorCount,
    Compression,
    NumberFormat,
    BackgroundColor,
    ImageCount,
    CreationDate,
    ModifiedDate,
    Comments,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Version,
        Field::Width,
        Field::Height,
        Field::ColorCount,
        Field::Compression,
        Field::NumberFormat,
        Field::BackgroundColor,
        Field::ImageCount,
        Field::CreationDate,
        Field::ModifiedDate,
        Field::Comments,
    ];

    /// Key used in the store file
    pub fn key(&self) -> &'static str {
        match self {
            Field::Version => "version",
            Field::Width => "width",
            Field::Height => "height",
            Field::ColorCount => "color_count",
            Field::Compression => "compression",
            Field::NumberFormat => "number_format",
            Field::BackgroundColor => "background_color",
            Field::ImageCount => "image_count",
            Field::CreationDate => "creation_date",
            Field::ModifiedDate => "modified_date",
            Field::Comments => "comments",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Version => "Version",
            Field::Width => "Width",
            Field::Height => "Height",
            Field::ColorCount => "Color count",
            Field::Compression => "Compression",
            Field::NumberFormat => "Number format",
            Field::BackgroundColor => "Background color",
            Field::ImageCount => "Image count",
            Field::CreationDate => "Created",
            Field::ModifiedDate => "Modified",
            Field::Comments => "Comments",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| EditError::UnknownField(s.to_string()))
    }
}

/// Stored record for one GIF file
///
/// Combines the scanner output with filesystem timestamps. Serialized
/// field names are the store file's keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub version: String,
    pub width: u16,
    pub height: u16,
    pub color_count: u16,
    pub compression: String,
    pub number_format: String,
    pub background_color: String,
    pub image_count: usize,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub modified_date: Option<String>,
    #[serde(default)]
    pub comments: String,
}

impl CatalogEntry {
    /// Merges scanner output with the file's timestamps
    pub fn from_scan(metadata: GifMetadata, timestamps: FileTimestamps) -> Self {
        Self {
            version: metadata.version,
            width: metadata.width,
            height: metadata.height,
            color_count: metadata.color_table_size,
            compression: COMPRESSION.to_string(),
            number_format: NUMBER_FORMAT.to_string(),
            background_color: metadata.background_color_indicator,
            image_count: metadata.image_count,
            creation_date: timestamps.created,
            modified_date: timestamps.modified,
            comments: metadata.comments.unwrap_or_default(),
        }
    }

    /// Display value of one field; missing timestamps render empty
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::Version => self.version.clone(),
            Field::Width => self.width.to_string(),
            Field::Height => self.height.to_string(),
            Field::ColorCount => self.color_count.to_string(),
            Field::Compression => self.compression.clone(),
            Field::NumberFormat => self.number_format.clone(),
            Field::BackgroundColor => self.background_color.clone(),
            Field::ImageCount => self.image_count.to_string(),
            Field::CreationDate => self.creation_date.clone().unwrap_or_default(),
            Field::ModifiedDate => self.modified_date.clone().unwrap_or_default(),
            Field::Comments => self.comments.clone(),
        }
    }

    /// All fields with their display values, in display order
    pub fn fields(&self) -> impl Iterator<Item = (Field, String)> + '_ {
        Field::ALL.into_iter().map(|field| (field, self.get(field)))
    }

    /// Replaces one field from user text. Numeric fields must parse.
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), EditError> {
        match field {
            Field::Version => self.version = value.to_string(),
            Field::Width => self.width = parse_number(field, value)?,
            Field::Height => self.height = parse_number(field, value)?,
            Field::ColorCount => self.color_count = parse_number(field, value)?,
            Field::Compression => self.compression = value.to_string(),
            Field::NumberFormat => self.number_format = value.to_string(),
            Field::BackgroundColor => self.background_color = value.to_string(),
            Field::ImageCount => self.image_count = parse_number(field, value)?,
            Field::CreationDate => self.creation_date = non_empty(value),
            Field::ModifiedDate => self.modified_date = non_empty(value),
            Field::Comments => self.comments = value.to_string(),
        }
        Ok(())
    }

    /// Case-insensitive substring match against every field value.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.fields()
            .any(|(_, value)| value.to_lowercase().contains(needle))
    }
}

fn parse_number<T>(field: Field, value: &str) -> Result<T, EditError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| EditError::InvalidValue {
            field: field.key(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
