//! Loader for walkthrough configuration files (TOML format)

use anyhow::{Context, Result};
use closure_lab::WalkthroughConfig;
use std::path::Path;

/// Parse a walkthrough config from path
pub fn from_file(path: &Path) -> Result<WalkthroughConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse from TOML string. Missing keys keep their defaults.
pub fn from_str(content: &str) -> Result<WalkthroughConfig> {
    toml::from_str(content).context("Invalid TOML format")
}

/// Config from `path`, or the defaults when no path was given
pub fn load(path: Option<&Path>) -> Result<WalkthroughConfig> {
    match path {
        Some(path) => {
            log::info!("Loading walkthrough config from {}", path.display());
            from_file(path)
        }
        None => Ok(WalkthroughConfig::default()),
    }
}
