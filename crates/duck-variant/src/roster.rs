//! Name-keyed registry of variant presets.
//!
//! A roster always starts from the built-in [`Variant`]s (see
//! [`Roster::standard`]) and may be extended from a JSON array of
//! [`VariantConfig`] records:
//!
//! ```json
//! [
//!   { "name": "rubber", "display": "I'm a rubber duckie", "fly": "flightless", "quack": "squeak" },
//!   { "name": "decoy",  "display": "I'm a decoy",         "fly": "flightless", "quack": "mute" }
//! ]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::{FromConfig, Variant, VariantConfig, VariantError, VariantResult};

/// One roster JSON record.  Behavior names stay as text until
/// [`VariantConfig::from_names`] parses them, so a bad name reports its family.
#[derive(Deserialize)]
struct RosterEntry {
    name:    String,
    display: String,
    fly:     String,
    quack:   String,
}

/// Variant presets keyed by lower-cased name.  Iteration is in name order.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    variants: BTreeMap<String, VariantConfig>,
}

impl Roster {
    /// A roster with no presets at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A roster holding every built-in [`Variant`].
    pub fn standard() -> Self {
        let mut roster = Self::empty();
        for variant in Variant::ALL {
            roster.variants.insert(variant.name().to_string(), variant.config());
        }
        roster
    }

    /// Parse a JSON array of presets into a fresh roster (no built-ins).
    pub fn from_json_str(json: &str) -> VariantResult<Self> {
        let mut roster = Self::empty();
        roster.merge_json_str(json)?;
        Ok(roster)
    }

    /// Add every preset from a JSON array.  Returns how many were added.
    ///
    /// Fails without modifying the roster if the JSON is malformed, a
    /// behavior name is unknown, a preset is blank, or any name collides
    /// with an existing or earlier entry.
    pub fn merge_json_str(&mut self, json: &str) -> VariantResult<usize> {
        let entries: Vec<RosterEntry> = serde_json::from_str(json)?;
        let configs = entries
            .into_iter()
            .map(|e| VariantConfig::from_names(e.name, e.display, &e.fly, &e.quack))
            .collect::<VariantResult<Vec<_>>>()?;

        let mut staged = self.clone();
        for config in configs.iter().cloned() {
            staged.insert(config)?;
        }
        *self = staged;

        debug!(added = configs.len(), total = self.len(), "merged roster presets");
        Ok(configs.len())
    }

    /// Read a JSON roster file and merge it in.
    pub fn merge_json_file(&mut self, path: &Path) -> VariantResult<usize> {
        let json = std::fs::read_to_string(path)?;
        self.merge_json_str(&json)
    }

    /// Register one preset.  Names are unique, compared case-insensitively,
    /// and neither the name nor the display line may be blank.
    pub fn insert(&mut self, config: VariantConfig) -> VariantResult<()> {
        config.validate()?;
        let key = config.name.trim().to_ascii_lowercase();
        if self.variants.contains_key(&key) {
            return Err(VariantError::DuplicateVariant(config.name));
        }
        self.variants.insert(key, config);
        Ok(())
    }

    pub fn get(&self, name: &str) -> VariantResult<&VariantConfig> {
        self.variants
            .get(&name.trim().to_ascii_lowercase())
            .ok_or_else(|| VariantError::UnknownVariant(name.to_string()))
    }

    /// Build a duck from the named preset in encoding `D`.
    pub fn build<D: FromConfig>(&self, name: &str) -> VariantResult<D> {
        self.get(name).map(D::from_config)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariantConfig> {
        self.variants.values()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
