// SPDX-License-Identifier: GPL-3.0

//! Per-double store of configured operation behaviour.

use crate::value::Value;
use ethapi_backend::BackendError;
use std::collections::HashMap;

/// What one operation does when invoked.
#[derive(Clone, Default)]
pub struct ResultEntry {
	/// `None` until the operation is registered.
	values: Option<Vec<Value>>,
	error: Option<BackendError>,
	failure: Option<String>,
}

impl ResultEntry {
	/// The registered values, in declared result order.
	pub fn values(&self) -> &[Value] {
		self.values.as_deref().unwrap_or_default()
	}

	/// Whether values were registered. Setting an error or a failure alone does not register.
	pub fn is_registered(&self) -> bool {
		self.values.is_some()
	}

	/// The error returned instead of the values, if any.
	pub fn error(&self) -> Option<&BackendError> {
		self.error.as_ref()
	}

	/// The message to panic with on invocation, if any.
	pub fn failure(&self) -> Option<&str> {
		self.failure.as_deref().filter(|message| !message.is_empty())
	}
}

impl std::fmt::Debug for ResultEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ResultEntry")
			.field("values", &self.values.as_ref().map(Vec::len))
			.field("error", &self.error)
			.field("failure", &self.failure)
			.finish()
	}
}

/// Operation name to [`ResultEntry`] map.
///
/// The table performs no type checking: values are only matched against an
/// operation's declared results when the operation projects them.
#[derive(Debug, Default)]
pub struct ResultTable {
	entries: HashMap<String, ResultEntry>,
}

impl ResultTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `values` for `name`, clearing any error or failure set for it.
	pub fn register(&mut self, name: &str, values: Vec<Value>) {
		log::trace!("registering {} value(s) for `{name}`", values.len());
		let entry = ResultEntry { values: Some(values), error: None, failure: None };
		self.entries.insert(name.to_string(), entry);
	}

	/// Stores the error returned by `name`, leaving its values and failure untouched.
	pub fn set_error(&mut self, name: &str, error: BackendError) {
		log::trace!("setting error for `{name}`: {error}");
		self.entries.entry(name.to_string()).or_default().error = Some(error);
	}

	/// Removes the error set for `name`, if any.
	pub fn clear_error(&mut self, name: &str) {
		if let Some(entry) = self.entries.get_mut(name) {
			entry.error = None;
		}
	}

	/// Makes every invocation of `name` panic with `message` until the next
	/// [`register`](Self::register) for it. An empty message sets no failure.
	pub fn set_failure(&mut self, name: &str, message: impl Into<String>) {
		let message = message.into();
		log::trace!("setting failure for `{name}`: {message:?}");
		self.entries.entry(name.to_string()).or_default().failure = Some(message);
	}

	pub fn lookup(&self, name: &str) -> Option<&ResultEntry> {
		self.entries.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Configured operation names, sorted.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::values;

	fn first_u64(table: &ResultTable, name: &str) -> Option<u64> {
		table.lookup(name)?.values().first()?.downcast_ref::<u64>().copied()
	}

	#[test]
	fn lookup_of_unregistered_name_is_none() {
		let table = ResultTable::new();
		assert!(table.lookup("get_td").is_none());
		assert!(table.is_empty());
	}

	#[test]
	fn register_overwrites_previous_values() {
		let mut table = ResultTable::new();
		table.register("get_pool_nonce", values![1u64]);
		table.register("get_pool_nonce", values![2u64]);
		assert_eq!(first_u64(&table, "get_pool_nonce"), Some(2));
		assert_eq!(table.len(), 1);
	}

	#[test]
	fn register_clears_error_and_failure() {
		let mut table = ResultTable::new();
		table.register("get_pool_nonce", values![1u64]);
		table.set_error("get_pool_nonce", BackendError::not_found("nonce"));
		table.set_failure("get_pool_nonce", "boom");

		table.register("get_pool_nonce", values![3u64]);

		let entry = table.lookup("get_pool_nonce").unwrap();
		assert!(entry.error().is_none());
		assert!(entry.failure().is_none());
		assert_eq!(first_u64(&table, "get_pool_nonce"), Some(3));
	}

	#[test]
	fn set_error_keeps_values() {
		let mut table = ResultTable::new();
		table.register("get_pool_nonce", values![5u64]);
		table.set_error("get_pool_nonce", BackendError::Unavailable("syncing".into()));

		let entry = table.lookup("get_pool_nonce").unwrap();
		assert_eq!(entry.error(), Some(&BackendError::Unavailable("syncing".into())));
		assert_eq!(first_u64(&table, "get_pool_nonce"), Some(5));

		table.clear_error("get_pool_nonce");
		assert!(table.lookup("get_pool_nonce").unwrap().error().is_none());
		assert_eq!(first_u64(&table, "get_pool_nonce"), Some(5));
	}

	#[test]
	fn set_error_without_values_creates_empty_entry() {
		let mut table = ResultTable::new();
		table.set_error("suggest_price", BackendError::Internal("oops".into()));
		let entry = table.lookup("suggest_price").unwrap();
		assert!(entry.values().is_empty());
		assert!(entry.failure().is_none());
		assert!(!entry.is_registered());
	}

	#[test]
	fn set_failure_keeps_values_and_error() {
		let mut table = ResultTable::new();
		table.register("lock_account", values![true]);
		table.set_error("lock_account", BackendError::not_found("account"));
		table.set_failure("lock_account", "boom");

		let entry = table.lookup("lock_account").unwrap();
		assert_eq!(entry.failure(), Some("boom"));
		assert!(entry.error().is_some());
		assert_eq!(entry.values().len(), 1);
	}

	#[test]
	fn empty_failure_message_is_no_failure() {
		let mut table = ResultTable::new();
		table.set_failure("lock_account", "");
		let entry = table.lookup("lock_account").unwrap();
		assert!(entry.failure().is_none());
		assert!(!entry.is_registered());
	}

	#[test]
	fn registering_no_values_still_registers() {
		let mut table = ResultTable::new();
		table.register("send_tx", Vec::new());
		assert!(table.lookup("send_tx").unwrap().is_registered());
	}

	#[test]
	fn entries_are_independent() {
		let mut table = ResultTable::new();
		table.register("get_pool_nonce", values![1u64]);
		table.set_failure("get_td", "boom");
		assert!(table.lookup("get_pool_nonce").unwrap().failure().is_none());
		assert_eq!(table.names(), ["get_pool_nonce", "get_td"]);
		assert!(table.contains("get_td"));
	}
}
