// ABOUTME: Configuration module for the tana-deck application
// ABOUTME: Provides output settings and environment variable handling

use crate::errors::{DeckError, Result};
use crate::pptx::PackageProps;
use crate::xml::validate_text;
use chrono::{DateTime, TimeZone, Utc};
use log::warn;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "Tana_Market_Premium_Presentation.pptx";
pub const DEFAULT_TITLE: &str = "Tana Market";
pub const DEFAULT_AUTHOR: &str = "Tana Market Team";

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub output: PathBuf,
    pub title: String,
    pub author: String,
    /// Creation time recorded in the document; `None` means "now"
    pub created: Option<DateTime<Utc>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            created: None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => {
            warn!("Ignoring empty environment variable {}", name);
            None
        }
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

/// Parse a `SOURCE_DATE_EPOCH` value (seconds since the Unix epoch)
pub fn parse_source_date_epoch(value: &str) -> Result<DateTime<Utc>> {
    let seconds = value.trim().parse::<i64>().map_err(|e| {
        DeckError::ConfigError(format!("Invalid SOURCE_DATE_EPOCH {:?}: {}", value, e))
    })?;
    Utc.timestamp_opt(seconds, 0).single().ok_or_else(|| {
        DeckError::ConfigError(format!("SOURCE_DATE_EPOCH {} is out of range", seconds))
    })
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let output = non_empty_var("DECK_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or(defaults.output);
        let title = non_empty_var("DECK_TITLE").unwrap_or(defaults.title);
        let author = non_empty_var("DECK_AUTHOR").unwrap_or(defaults.author);
        let created = non_empty_var("SOURCE_DATE_EPOCH")
            .map(|value| parse_source_date_epoch(&value))
            .transpose()?;

        let config = Self {
            output,
            title,
            author,
            created,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject a title or author that cannot be stored in the document
    pub fn validate(&self) -> Result<()> {
        validate_text("Title", &self.title)?;
        validate_text("Author", &self.author)
    }

    /// Document properties for the package writer
    pub fn package_props(&self) -> PackageProps {
        PackageProps {
            title: self.title.clone(),
            author: self.author.clone(),
            created: self.created.unwrap_or_else(Utc::now),
        }
    }
}
