//! Artifact catalog for the showcase gallery.
//!
//! The gallery is a directory of standalone visual component sources
//! (one file per artifact). The catalog scans that directory on every
//! query, derives display metadata from comments embedded in each file,
//! and answers the navigation queries the page generator needs.
//!
//! # Directory Layout
//!
//! ```text
//! src/components/artifacts/
//! ├── emoji-flash.jsx           # name: "emoji-flash"
//! ├── pretty-clock.jsx          # name: "pretty-clock"
//! └── flying-toasters.tsx       # name: "flying-toasters"
//! ```
//!
//! Nothing is cached between queries: the directory is the single source
//! of truth, read-only from the catalog's perspective.

pub mod artifact;
pub mod catalog;
pub mod metadata;
pub mod title;

pub use artifact::{ArtifactMetadata, ArtifactRecord};
pub use catalog::{AdjacentArtifacts, ArtifactCatalog, SortBy, SortDirection};
pub use metadata::extract_metadata;
pub use title::format_title;
