//! Comment-based metadata extraction.
//!
//! Artifact sources carry display metadata in comments, following one of
//! two conventions:
//!
//! ```text
//! /**
//!  * @title Pretty Clock
//!  * @description A clock face built from toggle switches
//!  * @category clocks
//!  */
//! ```
//!
//! or a plain leading block comment whose body becomes the description:
//!
//! ```text
//! /*
//! * All the emojis strobing
//! */
//! ```
//!
//! Extraction is pure text scanning; a missing pattern is never an error,
//! it just degrades to the formatted-name defaults.

use std::sync::LazyLock;

use regex::Regex;

use super::artifact::ArtifactMetadata;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\* @title\s+(.+)$").expect("title pattern compiles"));

static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)\* @description\s+(.+)$").expect("description pattern compiles")
});

static CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\* @category\s+(.+)$").expect("category pattern compiles"));

static BLOCK_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\*?(.*?)\*/").expect("block comment pattern compiles"));

/// Derive metadata for the artifact `name` from its source text.
///
/// Explicit `@title` / `@description` markers win; when neither is present
/// anywhere in the content, the body of the first block comment is used as
/// the description. The title always falls back to the formatted name.
pub fn extract_metadata(name: &str, content: Option<&str>) -> ArtifactMetadata {
    let Some(content) = content else {
        return ArtifactMetadata::fallback(name);
    };

    let mut metadata = ArtifactMetadata::fallback(name);

    let title = capture_line(&TITLE_RE, content);
    let description = capture_line(&DESCRIPTION_RE, content);

    if let Some(title) = &title {
        metadata.title = title.clone();
    }
    if let Some(description) = &description {
        metadata.description = description.clone();
    }
    metadata.category = capture_line(&CATEGORY_RE, content);

    // No explicit markers at all: fall back to the first block comment
    if title.is_none() && description.is_none() {
        if let Some(captures) = BLOCK_COMMENT_RE.captures(content) {
            metadata.description = captures[1].trim().to_string();
        }
    }

    metadata
}

/// First match of a marker line, trimmed; empty matches are discarded.
fn capture_line(pattern: &Regex, content: &str) -> Option<String> {
    pattern
        .captures(content)
        .map(|captures| captures[1].trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_content_uses_formatted_name() {
        let metadata = extract_metadata("wing-demo-fly", None);

        assert_eq!(metadata.title, "Wing Demo Fly");
        assert_eq!(metadata.description, "");
    }

    #[test]
    fn test_explicit_markers() {
        let content = r#"
/**
 * @title Interactive Particles
 * @description Particles that follow the pointer
 * @category particles
 */
import React from 'react';
"#;
        let metadata = extract_metadata("interactive-particles", Some(content));

        assert_eq!(metadata.title, "Interactive Particles");
        assert_eq!(metadata.description, "Particles that follow the pointer");
        assert_eq!(metadata.category.as_deref(), Some("particles"));
    }

    #[test]
    fn test_marker_precedence_over_block_comment() {
        let content = r#"
/**
 * @title Custom Title
 */
/* this comment should be ignored */
"#;
        let metadata = extract_metadata("emoji-grid", Some(content));

        assert_eq!(metadata.title, "Custom Title");
        assert_eq!(metadata.description, "");
    }

    #[test]
    fn test_block_comment_fallback() {
        let content = "/*\n* Animate unicode characters\n*/\n\nimport React from 'react';\n";
        let metadata = extract_metadata("unicode-animator", Some(content));

        assert_eq!(metadata.title, "Unicode Animator");
        assert_eq!(metadata.description, "* Animate unicode characters");
    }

    #[test]
    fn test_plain_source_gets_defaults() {
        let content = "import React from 'react';\n\nexport default () => null;\n";
        let metadata = extract_metadata("circle-scale-toys", Some(content));

        assert_eq!(metadata.title, "Circle Scale Toys");
        assert_eq!(metadata.description, "");
        assert!(metadata.category.is_none());
    }

    #[test]
    fn test_marker_text_is_trimmed() {
        let content = "/**\n * @title   Twilight Lanterns   \n */\n";
        let metadata = extract_metadata("twilight-lanterns", Some(content));

        assert_eq!(metadata.title, "Twilight Lanterns");
    }

    #[test]
    fn test_description_only_marker_keeps_formatted_title() {
        let content = "/**\n * @description All the emojis strobing\n */\n";
        let metadata = extract_metadata("emoji-flash", Some(content));

        assert_eq!(metadata.title, "Emoji Flash");
        assert_eq!(metadata.description, "All the emojis strobing");
    }
}
