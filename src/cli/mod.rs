//! Command-line interface for vitrine.
//!
//! The CLI is the reference consumer of the catalog: it issues the same
//! queries a static page generator would (enumerate the gallery, look up
//! one artifact, read its source, compute prev/next navigation).

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{load_config, SiteConfig};
use crate::gallery::{ArtifactCatalog, ArtifactRecord, SortBy, SortDirection};

/// vitrine - artifact catalog for a static showcase site
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all artifacts in the gallery
    List {
        /// Sort the listing (defaults to directory order)
        #[arg(short, long, value_enum)]
        sort_by: Option<SortKeyArg>,

        /// Sort direction (defaults to the configured value)
        #[arg(short, long, value_enum)]
        direction: Option<DirectionArg>,

        /// Emit records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one artifact's record
    Show {
        /// Artifact name (file name without extension)
        name: String,

        /// Emit the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print an artifact's raw source
    Content {
        /// Artifact name (file name without extension)
        name: String,
    },

    /// Show previous/next navigation for an artifact
    Adjacent {
        /// Artifact name (file name without extension)
        name: String,

        /// Sort key (defaults to the configured value)
        #[arg(short, long, value_enum)]
        sort_by: Option<SortKeyArg>,

        /// Sort direction (defaults to the configured value)
        #[arg(short, long, value_enum)]
        direction: Option<DirectionArg>,

        /// Emit the pair as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Sort key for the CLI (maps to SortBy)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKeyArg {
    /// File modification time
    Date,

    /// Metadata title
    Name,

    /// Metadata category
    Category,
}

impl From<SortKeyArg> for SortBy {
    fn from(arg: SortKeyArg) -> Self {
        match arg {
            SortKeyArg::Date => SortBy::Date,
            SortKeyArg::Name => SortBy::Name,
            SortKeyArg::Category => SortBy::Category,
        }
    }
}

/// Sort direction for the CLI (maps to SortDirection)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    Asc,
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => SortDirection::Asc,
            DirectionArg::Desc => SortDirection::Desc,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = load_config()?;

        match self.command {
            Commands::List {
                sort_by,
                direction,
                json,
            } => list_artifacts(&config, sort_by, direction, json).await,
            Commands::Show { name, json } => show_artifact(&config, &name, json).await,
            Commands::Content { name } => show_content(&config, &name).await,
            Commands::Adjacent {
                name,
                sort_by,
                direction,
                json,
            } => show_adjacent(&config, &name, sort_by, direction, json).await,
            Commands::Config => show_config(&config),
        }
    }
}

/// Build a catalog from the resolved configuration
fn catalog_from(config: &SiteConfig) -> ArtifactCatalog {
    ArtifactCatalog::new(&config.artifacts_dir).with_extensions(config.extensions.clone())
}

/// List all artifacts, optionally sorted
async fn list_artifacts(
    config: &SiteConfig,
    sort_by: Option<SortKeyArg>,
    direction: Option<DirectionArg>,
    json: bool,
) -> Result<()> {
    let catalog = catalog_from(config);
    let mut records = catalog.all().await?;

    if let Some(sort_by) = sort_by {
        let direction = direction
            .map(SortDirection::from)
            .unwrap_or(config.sort_direction);
        records = catalog.sorted(records, sort_by.into(), direction).await?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No artifacts found in {}", config.artifacts_dir.display());
        return Ok(());
    }

    println!("{:<28} {:<32} {}", "NAME", "TITLE", "DESCRIPTION");
    println!("{}", "-".repeat(90));

    for record in &records {
        println!(
            "{:<28} {:<32} {}",
            record.name,
            truncated(&record.metadata.title, 29),
            truncated(&record.metadata.description, 40)
        );
    }

    println!("\nTotal: {} artifacts", records.len());

    Ok(())
}

/// Show one artifact's record
async fn show_artifact(config: &SiteConfig, name: &str, json: bool) -> Result<()> {
    let catalog = catalog_from(config);

    let Some(record) = catalog.by_name(name).await? else {
        println!("Artifact not found: {}", name);
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let modified = crate::gallery::catalog::modified_at(&record.path).await?;

    println!("Name:        {}", record.name);
    println!("File:        {}", record.file_name);
    println!("Path:        {}", record.path.display());
    println!("Modified:    {}", modified.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("Title:       {}", record.metadata.title);
    if !record.metadata.description.is_empty() {
        println!("Description: {}", record.metadata.description);
    }
    if let Some(category) = &record.metadata.category {
        println!("Category:    {}", category);
    }

    Ok(())
}

/// Print an artifact's raw source to stdout
async fn show_content(config: &SiteConfig, name: &str) -> Result<()> {
    let catalog = catalog_from(config);

    match catalog.content(name).await? {
        Some(content) => print!("{}", content),
        None => println!("Artifact not found: {}", name),
    }

    Ok(())
}

/// Show prev/next navigation for an artifact
async fn show_adjacent(
    config: &SiteConfig,
    name: &str,
    sort_by: Option<SortKeyArg>,
    direction: Option<DirectionArg>,
    json: bool,
) -> Result<()> {
    let catalog = catalog_from(config);

    let sort_by = sort_by.map(SortBy::from).unwrap_or(config.sort_by);
    let direction = direction
        .map(SortDirection::from)
        .unwrap_or(config.sort_direction);

    let adjacent = catalog.adjacent(name, sort_by, direction).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&adjacent)?);
        return Ok(());
    }

    println!("Sort: {} {}", sort_by, direction);
    println!("Previous: {}", describe(&adjacent.previous));
    println!("Next:     {}", describe(&adjacent.next));

    Ok(())
}

/// Show resolved configuration
fn show_config(config: &SiteConfig) -> Result<()> {
    println!("vitrine configuration");
    println!();
    println!(
        "Config file:    {}",
        config
            .config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!("Artifacts dir:  {}", config.artifacts_dir.display());
    println!("Extensions:     {}", config.extensions.join(", "));
    println!("Sort by:        {}", config.sort_by);
    println!("Sort direction: {}", config.sort_direction);

    Ok(())
}

/// One-line rendering of an optional neighbor
fn describe(record: &Option<ArtifactRecord>) -> String {
    match record {
        Some(record) => format!("{} ({})", record.metadata.title, record.name),
        None => "(none)".to_string(),
    }
}

/// Truncate a string for table display
fn truncated(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let prefix: String = text.chars().take(max).collect();
        format!("{}...", prefix)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_arg_conversion() {
        assert_eq!(SortBy::from(SortKeyArg::Date), SortBy::Date);
        assert_eq!(SortBy::from(SortKeyArg::Name), SortBy::Name);
        assert_eq!(SortBy::from(SortKeyArg::Category), SortBy::Category);
    }

    #[test]
    fn test_truncated() {
        assert_eq!(truncated("short", 10), "short");
        assert_eq!(truncated("a much longer string", 6), "a much...");
    }
}
