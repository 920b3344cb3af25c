// SPDX-License-Identifier: GPL-3.0

//! Errors raised by the test double itself.
//!
//! These report defects in test setup, never business conditions: a
//! [`BackendError`](ethapi_backend::BackendError) is what an operation
//! returns, a [`DoubleError`] is what a test author got wrong.

use crate::value::ProjectionError;
use std::path::PathBuf;
use thiserror::Error;

/// Misconfiguration of a [`TestBackend`](crate::TestBackend).
#[derive(Debug, Error)]
pub enum DoubleError {
	/// The operation name is empty or not part of the backend interface.
	#[error("unknown operation `{0}`")]
	UnknownOperation(String),
	/// An operation was invoked before anything was registered for it.
	#[error("operation `{operation}` is not configured: register its results before invoking it")]
	NotConfigured {
		/// The operation that was invoked.
		operation: String,
	},
	/// Registered values do not fit the operation's declared results.
	#[error("operation `{operation}` is not configured correctly: {source}")]
	Projection {
		/// The operation the values were registered for.
		operation: String,
		/// What did not fit.
		source: ProjectionError,
	},
	/// An error was configured for an operation that cannot return one.
	#[error("operation `{0}` has no error result")]
	NoErrorSlot(String),
	/// A fixture could not be read or decoded.
	#[error(transparent)]
	Fixture(#[from] FixtureError),
}

/// Errors raised while loading a fixture set.
#[derive(Debug, Error)]
pub enum FixtureError {
	#[error("Failed to read fixture file {}: {source}", path.display())]
	Io { path: PathBuf, source: std::io::Error },
	#[error("Invalid fixture JSON: {0}")]
	Json(#[from] serde_json::Error),
	/// The values of `operation` are trait objects and cannot come from JSON.
	#[error("operation `{0}` returns values that cannot be loaded from a fixture")]
	Opaque(&'static str),
	#[error("values of `{0}` must be a JSON array")]
	NotAnArray(&'static str),
	#[error("operation `{operation}` returns {expected} value(s), fixture has {found}")]
	Arity { operation: &'static str, expected: usize, found: usize },
}
