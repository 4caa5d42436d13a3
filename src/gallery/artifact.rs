//! Artifact records produced by a catalog scan.
//!
//! A record is the in-memory representation of one artifact source file.
//! Records are rebuilt from the file system on every query and never
//! persisted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::title::format_title;

/// One discovered artifact source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// On-disk file name including extension; unique within the gallery
    pub file_name: String,

    /// Public identifier: the file name minus its recognized extension
    pub name: String,

    /// Resolved path, used for re-reading content and mtime lookups
    pub path: PathBuf,

    /// Path relative to the gallery root
    pub relative_path: PathBuf,

    /// Display metadata derived from the file's comments
    pub metadata: ArtifactMetadata,
}

/// Display metadata derived from an artifact's source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Human-readable title; never empty
    pub title: String,

    /// Free-text description, possibly empty
    #[serde(default)]
    pub description: String,

    /// Grouping category, when the source declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ArtifactMetadata {
    /// Default metadata for an artifact whose content is missing or
    /// carries no recognized markers: the formatted name becomes the title.
    pub fn fallback(name: &str) -> Self {
        Self {
            title: format_title(name),
            description: String::new(),
            category: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_metadata() {
        let metadata = ArtifactMetadata::fallback("emoji-flash");

        assert_eq!(metadata.title, "Emoji Flash");
        assert_eq!(metadata.description, "");
        assert!(metadata.category.is_none());
    }

    #[test]
    fn test_record_serialization() {
        let record = ArtifactRecord {
            file_name: "pretty-clock.jsx".to_string(),
            name: "pretty-clock".to_string(),
            path: PathBuf::from("/site/src/components/artifacts/pretty-clock.jsx"),
            relative_path: PathBuf::from("pretty-clock.jsx"),
            metadata: ArtifactMetadata::fallback("pretty-clock"),
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: ArtifactRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
        // Absent category is omitted from the wire format
        assert!(!json.contains("category"));
    }
}
