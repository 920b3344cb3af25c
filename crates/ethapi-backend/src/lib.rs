// SPDX-License-Identifier: GPL-3.0

//! Backend interface consumed by the Ethereum-compatible RPC layer.
//!
//! The RPC API layer never talks to the node directly: every chain, pool,
//! DAG, staking and wallet query goes through the [`Backend`] trait. This
//! crate holds that contract together with the plain data types crossing it,
//! so that the real node and the test double in `ethapi-testing` can both
//! implement it.
//!
//! # Operation groups
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        RPC API layer                         │
//! └──────────────────────────────────────────────────────────────┘
//!                                │ Backend
//!     ┌──────────┬───────────┬───┴───────┬───────────┬──────────┐
//!     ▼          ▼           ▼           ▼           ▼          ▼
//!  general    chain       tx pool     DAG         SFC       accounts
//! ```

mod backend;
pub mod error;
pub mod types;

pub use backend::Backend;
pub use error::BackendError;
pub use sp_core::{H160, H256, U256};

/// Result type returned by fallible backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;
