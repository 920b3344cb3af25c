// SPDX-License-Identifier: GPL-3.0

//! JSON fixture files configuring many operations at once.
//!
//! ```json
//! {
//!   "get_td": { "values": ["0x1"] },
//!   "suggest_price": { "values": ["0x1"], "error": { "kind": "unavailable", "message": "syncing" } },
//!   "lock_account": { "failure": "keystore corrupted" }
//! }
//! ```

use crate::{TestBackend, catalogue, error::{DoubleError, FixtureError}};
use ethapi_backend::BackendError;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};

/// Configuration of one operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureEntry {
	/// Positional values as a JSON array, decoded per the operation's declared types.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub values: Option<serde_json::Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<BackendError>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub failure: Option<String>,
}

/// Operation name to [`FixtureEntry`] map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixtureSet {
	entries: BTreeMap<String, FixtureEntry>,
}

impl FixtureSet {
	pub fn from_json(json: &str) -> Result<Self, FixtureError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Reads a fixture set from a JSON file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
		let path = path.as_ref();
		let contents = fs::read_to_string(path)
			.map_err(|source| FixtureError::Io { path: path.to_path_buf(), source })?;
		Self::from_json(&contents)
	}

	pub fn insert(&mut self, name: impl Into<String>, entry: FixtureEntry) -> &mut Self {
		self.entries.insert(name.into(), entry);
		self
	}

	pub fn get(&self, name: &str) -> Option<&FixtureEntry> {
		self.entries.get(name)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entries in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &FixtureEntry)> {
		self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
	}
}

impl TestBackend {
	/// Applies every entry of `fixtures`, in name order.
	///
	/// Values are registered first, then the error, then the failure, so an
	/// entry can combine all three. Stops at the first entry that does not fit
	/// its operation; entries applied before it stay applied.
	pub fn apply(&mut self, fixtures: &FixtureSet) -> Result<&mut Self, DoubleError> {
		for (name, entry) in fixtures.iter() {
			let spec =
				catalogue::find(name).ok_or_else(|| DoubleError::UnknownOperation(name.to_string()))?;
			log::debug!("applying fixture for `{name}`");
			if let Some(json) = &entry.values {
				let values = spec.decode(json.clone())?;
				self.register(name, values)?;
			}
			if let Some(error) = &entry.error {
				self.set_error(name, error.clone())?;
			}
			if let Some(message) = &entry.failure {
				self.set_failure(name, message.clone())?;
			}
		}
		Ok(self)
	}
}
