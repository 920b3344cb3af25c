// SPDX-License-Identifier: GPL-3.0

//! Data crossing the [`Backend`](crate::Backend) boundary.
//!
//! Everything here is plain data (cloneable, comparable, serde-enabled) except
//! the collaborator traits ([`Wallet`], [`AccountManager`], [`StateReader`],
//! [`Subscription`]), which the backend hands out as shared trait objects.

mod account;
mod chain;
mod dag;
mod idx;
mod sfc;

pub use account::{Account, AccountManager, Wallet, WalletEvent, WalletEventKind, WalletUrl};
pub use chain::{
	BlockNumber, ChainConfig, EvmBlock, EvmHeader, NewTxsNotify, PeerProgress, Receipt,
	StateReader, Transaction,
};
pub use dag::{EpochStats, Event, EventHash, EventHeaderData, TtfMode};
pub use idx::{BlockIdx, Epoch, EventIdx, StakerId, Timestamp};
pub use sfc::{Delegator, DelegatorAndAddr, Staker, StakerAndId, Validators};

/// A 20-byte account address.
pub type Address = sp_core::H160;

/// Handle to an event feed subscription.
///
/// Dropping the handle does not cancel the feed; call [`Subscription::unsubscribe`].
pub trait Subscription: Send + Sync {
	/// Stops delivery to the sink the subscription was created with.
	fn unsubscribe(&self);

	/// Whether events are still being delivered.
	fn is_active(&self) -> bool;
}
