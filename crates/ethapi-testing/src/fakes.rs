// SPDX-License-Identifier: GPL-3.0

//! Minimal implementations of the backend's collaborator traits.
//!
//! The double hands these out from operations whose results are trait
//! objects (wallets, subscriptions, account managers and state readers).

use ethapi_backend::{
	Result, U256,
	types::{
		Account, AccountManager, Address, StateReader, Subscription, Transaction, Wallet, WalletUrl,
	},
};
use std::{
	collections::HashMap,
	sync::{
		Arc,
		atomic::{AtomicBool, Ordering},
	},
};

/// Length of the signatures produced by [`TestWallet`].
pub const SIGNATURE_LEN: usize = 128;

/// The transaction every [`TestWallet`] returns when asked to sign.
pub fn signed_transaction() -> Transaction {
	Transaction::new(1, Some(Address::repeat_byte(1)), U256::one(), 1, U256::zero(), Vec::new())
}

/// A wallet at `https://test.ru/test` holding a single account.
///
/// Signing always succeeds: data signatures are [`SIGNATURE_LEN`] zero bytes
/// and transactions sign to [`signed_transaction`].
#[derive(Debug, Clone)]
pub struct TestWallet {
	url: WalletUrl,
	accounts: Vec<Account>,
}

impl TestWallet {
	pub fn new() -> Self {
		Self::with_address(Address::repeat_byte(1))
	}

	/// A wallet at the default URL holding `address`.
	pub fn with_address(address: Address) -> Self {
		let url = WalletUrl::new("https", "test.ru/test");
		Self { accounts: vec![Account { address, url: url.clone() }], url }
	}
}

impl Default for TestWallet {
	fn default() -> Self {
		Self::new()
	}
}

impl Wallet for TestWallet {
	fn url(&self) -> WalletUrl {
		self.url.clone()
	}

	fn status(&self) -> Result<String> {
		Ok("ok".to_string())
	}

	fn accounts(&self) -> Vec<Account> {
		self.accounts.clone()
	}

	fn sign_data(&self, _account: &Account, _mime_type: &str, _data: &[u8]) -> Result<Vec<u8>> {
		Ok(vec![0; SIGNATURE_LEN])
	}

	fn sign_tx(&self, _account: &Account, _tx: &Transaction, _chain_id: U256) -> Result<Transaction> {
		Ok(signed_transaction())
	}
}

/// A subscription that only records whether it was cancelled.
#[derive(Debug)]
pub struct TestSubscription {
	active: AtomicBool,
}

impl Default for TestSubscription {
	fn default() -> Self {
		Self { active: AtomicBool::new(true) }
	}
}

impl Subscription for TestSubscription {
	fn unsubscribe(&self) {
		self.active.store(false, Ordering::SeqCst);
	}

	fn is_active(&self) -> bool {
		self.active.load(Ordering::SeqCst)
	}
}

/// An account manager over a fixed list of wallets.
#[derive(Clone, Default)]
pub struct StaticAccountManager {
	wallets: Vec<Arc<dyn Wallet>>,
}

impl StaticAccountManager {
	pub fn new(wallets: Vec<Arc<dyn Wallet>>) -> Self {
		Self { wallets }
	}
}

impl AccountManager for StaticAccountManager {
	fn wallets(&self) -> Vec<Arc<dyn Wallet>> {
		self.wallets.clone()
	}
}

#[derive(Debug, Clone, Default)]
struct AccountState {
	balance: U256,
	nonce: u64,
	code: Vec<u8>,
}

/// In-memory account state. Unknown accounts read as empty.
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
	accounts: HashMap<Address, AccountState>,
}

impl MemoryState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces an account.
	pub fn with_account(mut self, address: Address, balance: U256, nonce: u64, code: Vec<u8>) -> Self {
		self.accounts.insert(address, AccountState { balance, nonce, code });
		self
	}
}

impl StateReader for MemoryState {
	fn balance(&self, address: &Address) -> U256 {
		self.accounts.get(address).map(|a| a.balance).unwrap_or_default()
	}

	fn nonce(&self, address: &Address) -> u64 {
		self.accounts.get(address).map(|a| a.nonce).unwrap_or_default()
	}

	fn code(&self, address: &Address) -> Vec<u8> {
		self.accounts.get(address).map(|a| a.code.clone()).unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_wallet_signs_everything() {
		let wallet = TestWallet::new();
		let account = &wallet.accounts()[0];
		assert_eq!(wallet.url().to_string(), "https://test.ru/test");
		assert_eq!(account.url, wallet.url());
		assert_eq!(wallet.status(), Ok("ok".to_string()));
		assert_eq!(wallet.sign_data(account, "text/plain", b"hi").unwrap(), vec![0; 128]);
		let tx = Transaction::new(9, None, U256::zero(), 0, U256::zero(), vec![1]);
		assert_eq!(wallet.sign_tx(account, &tx, U256::one()), Ok(signed_transaction()));
		assert!(wallet.contains(account));
	}

	#[test]
	fn subscription_unsubscribes_once() {
		let subscription = TestSubscription::default();
		assert!(subscription.is_active());
		subscription.unsubscribe();
		subscription.unsubscribe();
		assert!(!subscription.is_active());
	}

	#[test]
	fn account_manager_finds_wallet_by_address() {
		let manager = StaticAccountManager::new(vec![
			Arc::new(TestWallet::with_address(Address::repeat_byte(1))),
			Arc::new(TestWallet::with_address(Address::repeat_byte(2))),
		]);
		assert_eq!(manager.accounts(), [Address::repeat_byte(1), Address::repeat_byte(2)]);
		assert!(manager.find(&Address::repeat_byte(2)).is_some());
		assert!(manager.find(&Address::repeat_byte(3)).is_none());
	}

	#[test]
	fn memory_state_reads_accounts() {
		let owner = Address::repeat_byte(1);
		let state = MemoryState::new().with_account(owner, U256::from(10), 1, vec![1, 2, 3]);
		assert_eq!(state.balance(&owner), U256::from(10));
		assert_eq!(state.nonce(&owner), 1);
		assert_eq!(state.code(&owner), [1, 2, 3]);
		assert!(state.exists(&owner));
		assert!(!state.exists(&Address::zero()));
	}
}
