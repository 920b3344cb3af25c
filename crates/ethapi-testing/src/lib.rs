// SPDX-License-Identifier: GPL-3.0

//! Configurable test double for the [`Backend`](ethapi_backend::Backend) interface.
//!
//! [`TestBackend`] implements every backend operation with the same generic
//! body: resolve the operation's own name, look its configuration up in a
//! [`ResultTable`] and replay it. A test configures only the operations it
//! exercises, either typed through the markers in [`ops`] or by name, and an
//! operation it forgot to configure panics instead of inventing a result.
//!
//! # Invocation
//!
//! ```text
//!   get_td(hash)
//!        │ call_site!()
//!        ▼
//!   "get_td" ──▶ ResultTable ──▶ failure set?     ──▶ panic!(message)
//!                                     │ no
//!                                     ▼
//!                                 registered?     ──▶ panic!(not configured)
//!                                     │ yes
//!                                     ▼
//!                                 project values  ──▶ panic!(not configured correctly)
//!                                     │
//!                                     ▼
//!                                 error set?      ──▶ Err(error)
//!                                     │ no
//!                                     ▼
//!                                 Ok(values)
//! ```
//!
//! # Example
//!
//! ```
//! use ethapi_backend::{Backend, BackendError, types::Address};
//! use ethapi_testing::{TestBackend, ops};
//!
//! let mut backend = TestBackend::with_defaults();
//! backend.fails_with::<ops::GetPoolNonce>(BackendError::not_found("account"));
//!
//! assert!(backend.get_pool_nonce(Address::zero()).is_err());
//! assert_eq!(backend.stats(), (2, 2));
//! ```

pub mod call_site;
pub mod catalogue;
mod double;
pub mod error;
pub mod fakes;
mod fixture_set;
pub mod fixtures;
pub mod logging;
pub mod ops;
pub mod table;
pub mod value;

pub use catalogue::Operation;
pub use double::TestBackend;
pub use error::{DoubleError, FixtureError};
pub use fixture_set::{FixtureEntry, FixtureSet};
pub use table::{ResultEntry, ResultTable};
pub use value::{ProjectionError, Value, value};
