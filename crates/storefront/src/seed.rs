//! Seed data for first-run initialization and catalog reconciliation.
//!
//! Seeds are YAML with two lists:
//!
//! ```yaml
//! catalog:
//!   - name: Sonero Classic Gold
//!     price: 2450
//!     image: https://...
//!     desc: Ceas clasic cu cadran auriu.
//! news:
//!   - title: Bine ai venit la Sonero!
//!     type: noutate
//!     desc: Descoperă colecția noastră premium de ceasuri.
//! ```
//!
//! The bundled file ships with the crate; a deployment can replace it with
//! its own file (see `STOREFRONT_SEED_FILE`).

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{NewNewsItem, NewProduct};

/// Seed file compiled into the crate.
const BUNDLED_SEED: &str = include_str!("../seed/default.yaml");

/// Errors that can occur when loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Preset catalog and news entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    /// Preset products, matched against the stored catalog by name.
    #[serde(default)]
    pub catalog: Vec<NewProduct>,
    /// News written when the feed is empty.
    #[serde(default)]
    pub news: Vec<NewNewsItem>,
}

impl SeedData {
    /// The seed data bundled with this release.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Parse` if the bundled YAML is malformed.
    pub fn bundled() -> Result<Self, SeedError> {
        Self::parse(BUNDLED_SEED)
    }

    /// Parse seed data from YAML.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Parse` if the YAML does not match the seed layout.
    pub fn parse(yaml: &str) -> Result<Self, SeedError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load seed data from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Io` if the file cannot be read and
    /// `SeedError::Parse` if it is malformed.
    pub async fn from_file(path: &Path) -> Result<Self, SeedError> {
        tracing::info!(path = %path.display(), "Loading seed data from file");
        let content = tokio::fs::read_to_string(path).await?;
        Self::parse(&content)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use sonero_core::NewsKind;

    use super::*;

    #[test]
    fn test_bundled_seed_parses() {
        let seed = SeedData::bundled().unwrap();
        assert!(seed.catalog.len() >= 3);
        assert_eq!(seed.news.len(), 1);

        let classic = seed
            .catalog
            .iter()
            .find(|p| p.name == "Sonero Classic Gold")
            .unwrap();
        assert_eq!(classic.price, Decimal::from(2450));
    }

    #[test]
    fn test_bundled_seed_names_are_unique() {
        let seed = SeedData::bundled().unwrap();
        let mut names: Vec<_> = seed.catalog.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), seed.catalog.len());
    }

    #[test]
    fn test_parse_custom_seed() {
        let seed = SeedData::parse(
            "catalog:\n  - name: Test\n    price: 10.5\n    image: t.jpg\nnews:\n  - title: Salut\n    type: promotie\n",
        )
        .unwrap();
        assert_eq!(seed.catalog.len(), 1);
        assert_eq!(seed.catalog[0].price, Decimal::new(105, 1));
        assert_eq!(seed.news[0].kind, Some(NewsKind::from("promotie")));
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        assert!(matches!(
            SeedData::parse("catalog: [name: "),
            Err(SeedError::Parse(_))
        ));
    }
}
