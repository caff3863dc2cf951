//! # Tool Catalogue
//!
//! The static, ordered list of installable tools. Loaded once from the
//! embedded TOML document, validated, and immutable afterwards. Positions
//! match the numbering shown by `armory list` and the interactive menu.

pub mod types;

pub use types::ToolRecord;

use crate::error::{CatalogueError, Result};
use log::debug;
use once_cell::sync::OnceCell;
use std::collections::HashMap;

const EMBEDDED_CATALOGUE: &str = include_str!("data/tools.toml");

static SHARED: OnceCell<Catalogue> = OnceCell::new();

/// Ordered, validated tool catalogue with name and category lookups
#[derive(Debug)]
pub struct Catalogue {
    records: Vec<ToolRecord>,
    by_name: HashMap<String, usize>,
    prerequisites: Vec<String>,
}

impl Catalogue {
    /// Load and validate the embedded catalogue.
    pub fn load() -> Result<Self> {
        Self::from_toml(EMBEDDED_CATALOGUE)
    }

    /// The process-wide catalogue, loaded on first access.
    pub fn shared() -> Result<&'static Self> {
        SHARED.get_or_try_init(Self::load)
    }

    /// Parse and validate a catalogue from a TOML document.
    ///
    /// Fails with `MalformedCatalogue` when an entry lacks a name, has zero
    /// install steps, or reuses an existing name. Record order is preserved.
    pub fn from_toml(document: &str) -> Result<Self> {
        let raw: types::RawCatalogue =
            toml::from_str(document).map_err(CatalogueError::Parse)?;

        let mut records = Vec::with_capacity(raw.tools.len());
        let mut by_name = HashMap::with_capacity(raw.tools.len());

        for (index, tool) in raw.tools.into_iter().enumerate() {
            let name = match tool.name {
                Some(name) if !name.trim().is_empty() => name,
                _ => return Err(CatalogueError::MissingName { index }.into()),
            };
            if tool.steps.is_empty() {
                return Err(CatalogueError::EmptySteps { name }.into());
            }
            if by_name.insert(name.to_lowercase(), index).is_some() {
                return Err(CatalogueError::DuplicateName { name }.into());
            }
            records.push(ToolRecord {
                name,
                category: tool.category,
                homepage: tool.homepage,
                description: tool.description,
                steps: tool.steps,
            });
        }

        debug!("catalogue loaded: {} tools", records.len());

        Ok(Self {
            records,
            by_name,
            prerequisites: raw.prerequisites.steps,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a menu position, if in range.
    pub fn get(&self, index: usize) -> Option<&ToolRecord> {
        self.records.get(index)
    }

    /// Case-insensitive lookup by tool name.
    pub fn find(&self, name: &str) -> Option<&ToolRecord> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&index| &self.records[index])
    }

    /// All records in a category, in catalogue order.
    pub fn by_category(&self, category: &str) -> Vec<&ToolRecord> {
        let wanted = category.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.category.eq_ignore_ascii_case(&wanted))
            .collect()
    }

    /// Category names in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.category.as_str()) {
                seen.push(record.category.as_str());
            }
        }
        seen
    }

    /// Environment prerequisite steps (package index refresh, git, curl).
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolRecord> {
        self.records.iter()
    }
}
