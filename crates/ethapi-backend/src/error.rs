// SPDX-License-Identifier: GPL-3.0

//! Business errors reported by backend operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a backend returns on its ordinary failure paths.
///
/// These are expected conditions the RPC layer must check and turn into
/// JSON-RPC errors, as opposed to faults that abort a request.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum BackendError {
	/// The requested item (block, event, staker, account...) does not exist.
	#[error("Not found: {0}")]
	NotFound(String),
	/// The backend cannot serve the request right now (syncing, shutting down).
	#[error("Backend unavailable: {0}")]
	Unavailable(String),
	/// An argument was rejected by the backend.
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	/// Any other internal failure.
	#[error("Internal error: {0}")]
	Internal(String),
}

impl BackendError {
	/// Shorthand for [`BackendError::NotFound`].
	pub fn not_found(what: impl Into<String>) -> Self {
		Self::NotFound(what.into())
	}
}
