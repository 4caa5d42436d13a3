//! File-system-backed artifact catalog.
//!
//! The catalog scans a directory of component sources, derives one record
//! per matching file, and answers identifier and adjacency queries. Every
//! query re-reads the directory; there is no cache to invalidate, so the
//! file system stays the single source of truth.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;

use super::artifact::ArtifactRecord;
use super::metadata::extract_metadata;

/// Sort key for ordering records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// File modification time
    Date,

    /// Metadata title, case-insensitive
    Name,

    /// Metadata category, case-insensitive; records without one sort first
    Category,
}

impl Default for SortBy {
    fn default() -> Self {
        Self::Date
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortBy::Date => write!(f, "date"),
            SortBy::Name => write!(f, "name"),
            SortBy::Category => write!(f, "category"),
        }
    }
}

/// Direction applied to the natural ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Desc
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Neighbors of a record under a sort order, with circular wraparound
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdjacentArtifacts {
    pub previous: Option<ArtifactRecord>,
    pub next: Option<ArtifactRecord>,
}

/// Default recognized component-file extensions
pub fn default_extensions() -> Vec<String> {
    vec!["jsx".to_string(), "tsx".to_string()]
}

/// File-system-backed catalog of artifact components
#[derive(Debug, Clone)]
pub struct ArtifactCatalog {
    root: PathBuf,
    extensions: Vec<String>,
}

impl ArtifactCatalog {
    /// Create a catalog over `root` with the default extensions
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: default_extensions(),
        }
    }

    /// Replace the recognized extensions
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// The gallery root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List every artifact in the gallery.
    ///
    /// A missing root directory is an empty catalog, not an error. Entries
    /// are processed in file-name order so the listing is deterministic;
    /// when two files collide on the same derived name (`x.jsx` and
    /// `x.tsx`), the lexicographically first file wins on lookup.
    pub async fn all(&self) -> Result<Vec<ArtifactRecord>> {
        if !self.root.exists() {
            tracing::warn!("Artifacts directory not found: {}", self.root.display());
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.root)
            .await
            .with_context(|| format!("Failed to read artifacts directory: {}", self.root.display()))?;

        let mut file_names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let file_type = match entry.file_type().await {
                Ok(file_type) => file_type,
                Err(_) => continue,
            };
            if !file_type.is_file() {
                continue;
            }
            if let Some(file_name) = entry.file_name().to_str() {
                if self.artifact_stem(file_name).is_some() {
                    file_names.push(file_name.to_string());
                }
            }
        }

        file_names.sort();

        let mut records = Vec::with_capacity(file_names.len());
        for file_name in file_names {
            records.push(self.build_record(file_name).await);
        }

        Ok(records)
    }

    /// Look up an artifact by its name (file name without extension).
    ///
    /// Absence is an expected, recoverable case: the result is `Ok(None)`
    /// with a logged warning, never an error.
    pub async fn by_name(&self, name: &str) -> Result<Option<ArtifactRecord>> {
        let record = self.all().await?.into_iter().find(|a| a.name == name);
        if record.is_none() {
            tracing::warn!("Artifact with name {:?} not found", name);
        }
        Ok(record)
    }

    /// Look up an artifact by its on-disk file name.
    pub async fn by_file_name(&self, file_name: &str) -> Result<Option<ArtifactRecord>> {
        let record = self
            .all()
            .await?
            .into_iter()
            .find(|a| a.file_name == file_name);
        if record.is_none() {
            tracing::warn!("Artifact with file name {:?} not found", file_name);
        }
        Ok(record)
    }

    /// Read the raw source content of an artifact.
    ///
    /// Both a missing record and a failed read resolve to `Ok(None)`.
    pub async fn content(&self, name: &str) -> Result<Option<String>> {
        let Some(record) = self.by_name(name).await? else {
            return Ok(None);
        };

        match fs::read_to_string(&record.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) => {
                tracing::warn!("Failed to read artifact {}: {}", record.path.display(), e);
                Ok(None)
            }
        }
    }

    /// Compute the previous/next neighbors of `name` under a sort policy.
    ///
    /// Indexing wraps circularly: the first record's previous is the last
    /// record, and the last record's next is the first. A catalog with
    /// fewer than two records has no neighbors, and an unknown `name`
    /// (the caller and the directory have diverged) resolves to none.
    pub async fn adjacent(
        &self,
        name: &str,
        sort_by: SortBy,
        direction: SortDirection,
    ) -> Result<AdjacentArtifacts> {
        let records = self.all().await?;
        if records.len() <= 1 {
            return Ok(AdjacentArtifacts::default());
        }

        let sorted = self.sorted(records, sort_by, direction).await?;

        let Some(index) = sorted.iter().position(|a| a.name == name) else {
            tracing::warn!("Current artifact {:?} not found in sorted catalog", name);
            return Ok(AdjacentArtifacts::default());
        };

        let previous = sorted[(index + sorted.len() - 1) % sorted.len()].clone();
        let next = sorted[(index + 1) % sorted.len()].clone();

        Ok(AdjacentArtifacts {
            previous: Some(previous),
            next: Some(next),
        })
    }

    /// Sort records under the given policy.
    ///
    /// Date sorting stats every file up front; a failed stat is an error
    /// for the whole call, since ordering cannot be trusted with a
    /// timestamp missing. The sort is stable, so equal keys keep their
    /// listing order.
    pub async fn sorted(
        &self,
        records: Vec<ArtifactRecord>,
        sort_by: SortBy,
        direction: SortDirection,
    ) -> Result<Vec<ArtifactRecord>> {
        let mut keyed = Vec::with_capacity(records.len());
        for record in records {
            let key = match sort_by {
                SortBy::Date => SortKey::Date(modified_at(&record.path).await?),
                SortBy::Name => SortKey::Text(record.metadata.title.to_lowercase()),
                SortBy::Category => SortKey::Text(
                    record
                        .metadata
                        .category
                        .as_deref()
                        .unwrap_or_default()
                        .to_lowercase(),
                ),
            };
            keyed.push((key, record));
        }

        keyed.sort_by(|a, b| {
            let ordering = a.0.cmp(&b.0);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        Ok(keyed.into_iter().map(|(_, record)| record).collect())
    }

    /// Derive the public identifier from a file name, if it carries a
    /// recognized extension.
    fn artifact_stem<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        self.extensions.iter().find_map(|ext| {
            file_name
                .strip_suffix(&format!(".{ext}"))
                .filter(|stem| !stem.is_empty())
        })
    }

    /// Build one record. A file that cannot be read still yields a record,
    /// just with the formatted-name defaults for metadata.
    async fn build_record(&self, file_name: String) -> ArtifactRecord {
        let name = self
            .artifact_stem(&file_name)
            .unwrap_or(&file_name)
            .to_string();
        let path = self.root.join(&file_name);

        let content = match fs::read_to_string(&path).await {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!("Failed to read artifact {}: {}", path.display(), e);
                None
            }
        };

        let metadata = extract_metadata(&name, content.as_deref());

        ArtifactRecord {
            relative_path: PathBuf::from(&file_name),
            file_name,
            name,
            path,
            metadata,
        }
    }
}

/// Modification time of a file as a UTC timestamp
pub async fn modified_at(path: &Path) -> Result<DateTime<Utc>> {
    let metadata = fs::metadata(path)
        .await
        .with_context(|| format!("Failed to stat artifact: {}", path.display()))?;
    let modified = metadata
        .modified()
        .with_context(|| format!("Modification time unavailable for {}", path.display()))?;
    Ok(modified.into())
}

/// Per-record key computed before sorting; one variant per policy
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Date(DateTime<Utc>),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_stem() {
        let catalog = ArtifactCatalog::new("/gallery");

        assert_eq!(catalog.artifact_stem("emoji-flash.jsx"), Some("emoji-flash"));
        assert_eq!(
            catalog.artifact_stem("flying-toasters.tsx"),
            Some("flying-toasters")
        );
        assert_eq!(catalog.artifact_stem("notes.md"), None);
        assert_eq!(catalog.artifact_stem("styles.css"), None);
        // A bare extension is not a component
        assert_eq!(catalog.artifact_stem(".jsx"), None);
    }

    #[test]
    fn test_custom_extensions() {
        let catalog =
            ArtifactCatalog::new("/gallery").with_extensions(vec!["svelte".to_string()]);

        assert_eq!(catalog.artifact_stem("clock.svelte"), Some("clock"));
        assert_eq!(catalog.artifact_stem("clock.jsx"), None);
    }

    #[test]
    fn test_sort_defaults() {
        assert_eq!(SortBy::default(), SortBy::Date);
        assert_eq!(SortDirection::default(), SortDirection::Desc);
    }

    #[tokio::test]
    async fn test_missing_root_is_empty() {
        let catalog = ArtifactCatalog::new("/definitely/not/a/real/gallery");

        let records = catalog.all().await.unwrap();
        assert!(records.is_empty());
    }
}
