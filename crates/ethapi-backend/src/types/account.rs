// SPDX-License-Identifier: GPL-3.0

//! Wallets and accounts managed by the node.

use super::{Address, Transaction};
use crate::Result;
use serde::{Deserialize, Serialize};
use sp_core::U256;
use std::{fmt, sync::Arc};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Location of a wallet, e.g. `keystore:///home/me/.lachesis/keystore`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletUrl {
	pub scheme: String,
	pub path: String,
}

impl WalletUrl {
	pub fn new(scheme: impl Into<String>, path: impl Into<String>) -> Self {
		Self { scheme: scheme.into(), path: path.into() }
	}
}

impl fmt::Display for WalletUrl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.scheme.is_empty() {
			f.write_str(&self.path)
		} else {
			write!(f, "{}://{}", self.scheme, self.path)
		}
	}
}

/// An account held by a wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
	pub address: Address,
	pub url: WalletUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum WalletEventKind {
	/// A wallet was attached (USB device plugged in, keystore file created).
	Arrived,
	/// A wallet was successfully opened.
	Opened,
	/// A wallet was detached.
	Dropped,
}

/// Lifecycle notification delivered to wallet subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletEvent {
	pub url: WalletUrl,
	pub kind: WalletEventKind,
}

/// A software or hardware wallet holding one or more accounts.
pub trait Wallet: Send + Sync {
	fn url(&self) -> WalletUrl;

	/// Human readable status, e.g. `"unlocked"`.
	fn status(&self) -> Result<String>;

	fn accounts(&self) -> Vec<Account>;

	fn contains(&self, account: &Account) -> bool {
		self.accounts().iter().any(|a| a.address == account.address)
	}

	fn sign_data(&self, account: &Account, mime_type: &str, data: &[u8]) -> Result<Vec<u8>>;

	fn sign_tx(&self, account: &Account, tx: &Transaction, chain_id: U256) -> Result<Transaction>;
}

/// Collection of the wallets known to the node.
pub trait AccountManager: Send + Sync {
	fn wallets(&self) -> Vec<Arc<dyn Wallet>>;

	/// The wallet holding `address`, if any.
	fn find(&self, address: &Address) -> Option<Arc<dyn Wallet>> {
		self.wallets()
			.into_iter()
			.find(|wallet| wallet.accounts().iter().any(|a| &a.address == address))
	}

	/// Addresses of all accounts over all wallets, in wallet order.
	fn accounts(&self) -> Vec<Address> {
		self.wallets()
			.iter()
			.flat_map(|wallet| wallet.accounts())
			.map(|account| account.address)
			.collect()
	}
}
