//! YAML frontmatter parsing and writing
//!
//! Catalog documents are markdown files with a YAML mapping on top:
//! ```markdown
//! ---
//! id: eventcatalog-core-user
//! name: Eventcatalog Core User
//! ---
//!
//! This is the core user for Eventcatalog
//! ```
//!
//! The codec is schema-agnostic: metadata travels as a `serde_yaml::Mapping`
//! and the body is kept verbatim, so `parse_frontmatter(write_with_frontmatter(m, b))`
//! gives back exactly `(m, b)`.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

const FRONTMATTER_DELIMITER: &str = "---";

/// Frontmatter parsing/writing errors
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("no frontmatter found - file must start with ---")]
    NoFrontmatter,

    #[error("unclosed frontmatter - missing second ---")]
    Unclosed,

    #[error("frontmatter is not a key/value mapping")]
    NotAMapping,

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parse a document into (metadata, body).
///
/// The first line must be `---`; the metadata ends at the next line that is
/// exactly `---`. One blank separator line after it is dropped and the rest
/// is returned untouched.
pub fn parse_frontmatter(content: &str) -> Result<(Mapping, String), FrontmatterError> {
    let rest = strip_opening(content).ok_or(FrontmatterError::NoFrontmatter)?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if is_delimiter(line) {
            let yaml = &rest[..offset];
            let after = &rest[offset + line.len()..];
            let body = after
                .strip_prefix("\r\n")
                .or_else(|| after.strip_prefix('\n'))
                .unwrap_or(after);

            return Ok((parse_mapping(yaml)?, body.to_string()));
        }
        offset += line.len();
    }

    Err(FrontmatterError::Unclosed)
}

/// Write metadata and body as a frontmatter document
pub fn write_with_frontmatter(metadata: &Mapping, body: &str) -> Result<String, FrontmatterError> {
    let yaml = serde_yaml::to_string(metadata)?;

    Ok(format!(
        "{FRONTMATTER_DELIMITER}\n{yaml}{FRONTMATTER_DELIMITER}\n\n{body}"
    ))
}

fn strip_opening(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(FRONTMATTER_DELIMITER)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(|c: char| c == '\n' || c == '\r') == FRONTMATTER_DELIMITER
}

fn parse_mapping(yaml: &str) -> Result<Mapping, FrontmatterError> {
    if yaml.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(FrontmatterError::NotAMapping),
    }
}
