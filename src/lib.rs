//! vitrine - artifact catalog for a static showcase site
//!
//! A small file-system-backed catalog over a directory of standalone
//! visual/animation component files ("artifacts"). The catalog discovers
//! artifact sources, derives display metadata from embedded comments,
//! and computes the previous/next navigation a static page generator
//! needs.
//!
//! # Architecture
//!
//! The file system is the only source of truth:
//! - Records are rebuilt from the directory on every query, never cached
//! - Metadata lives in comments inside each artifact source
//! - Recoverable absences (missing directory, unknown name) are empty
//!   results or `None`, never errors
//!
//! # Modules
//!
//! - `gallery`: The catalog, record types, and the metadata/title helpers
//! - `config`: vitrine.yaml discovery and resolution
//! - `cli`: Command-line interface (the reference catalog consumer)
//!
//! # Usage
//!
//! ```bash
//! # List the gallery
//! vitrine list
//!
//! # Prev/next navigation for one artifact
//! vitrine adjacent emoji-flash --sort-by name --direction asc
//!
//! # Emit records as JSON for the page generator
//! vitrine list --json
//! ```

pub mod cli;
pub mod config;
pub mod gallery;

// Re-export main types at crate root for convenience
pub use config::{ConfigError, SiteConfig};
pub use gallery::{
    AdjacentArtifacts, ArtifactCatalog, ArtifactMetadata, ArtifactRecord, SortBy, SortDirection,
};
pub use gallery::{extract_metadata, format_title};
