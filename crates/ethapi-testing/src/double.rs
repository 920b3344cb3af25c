// SPDX-License-Identifier: GPL-3.0

//! The generic [`Backend`] test double.
//!
//! Every operation body is the same one-liner: resolve the operation's own
//! name with [`call_site!`](crate::call_site!) and replay whatever the result
//! table holds for it.

use crate::{
	call_site,
	catalogue::{self, Operation, OperationSpec},
	error::DoubleError,
	table::{ResultEntry, ResultTable},
	value::{Cursor, FromValues, ProjectionError, Value},
};
use ethapi_backend::{
	Backend, BackendError, H256, Result, U256,
	types::{
		AccountManager, Address, BlockIdx, BlockNumber, ChainConfig, Delegator, DelegatorAndAddr,
		Epoch, EpochStats, Event, EventHash, EventHeaderData, EventIdx, EvmBlock, EvmHeader,
		NewTxsNotify, PeerProgress, Receipt, Staker, StakerAndId, StakerId, StateReader,
		Subscription, Timestamp, Transaction, TtfMode, Validators, Wallet, WalletEvent,
	},
};
use std::{any::Any, collections::HashMap, sync::Arc, time::Duration};
use tokio::sync::mpsc::UnboundedSender;

/// A [`Backend`] whose every operation replays configured results.
///
/// Configure it with `&mut` access, then hand it to the code under test.
/// Invoking an operation whose results were never registered panics, even
/// when an error was set for it.
///
/// ```
/// use ethapi_backend::{Backend, BackendError, U256};
/// use ethapi_testing::{TestBackend, ops};
///
/// let mut backend = TestBackend::new();
/// backend.returns::<ops::Stats>((2, 5));
/// backend
/// 	.returns::<ops::SuggestPrice>(U256::one())
/// 	.fails_with::<ops::SuggestPrice>(BackendError::Unavailable("syncing".into()));
///
/// assert_eq!(backend.stats(), (2, 5));
/// assert!(backend.suggest_price().is_err());
/// ```
#[derive(Debug, Default)]
pub struct TestBackend {
	results: ResultTable,
}

impl TestBackend {
	/// A double with no operation configured.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers the results `O` returns. Clears any error or failure set for it.
	pub fn returns<O: Operation>(&mut self, values: O::Values) -> &mut Self {
		self.results.register(O::NAME, O::into_values(values));
		self
	}

	/// Makes `O` return `error` instead of its registered values.
	///
	/// Using an operation without an error result fails to compile.
	pub fn fails_with<O: Operation>(&mut self, error: BackendError) -> &mut Self {
		const { assert!(O::FALLIBLE, "operation has no error result") };
		self.results.set_error(O::NAME, error);
		self
	}

	/// Makes every invocation of `O` panic with `message` until it is registered again.
	pub fn panics_with<O: Operation>(&mut self, message: impl Into<String>) -> &mut Self {
		self.results.set_failure(O::NAME, message);
		self
	}

	/// Registers values by operation name.
	///
	/// The values are checked against the operation's declared results here,
	/// so a mismatch is reported at setup rather than when the operation runs.
	pub fn register(
		&mut self,
		name: &str,
		values: Vec<Value>,
	) -> std::result::Result<&mut Self, DoubleError> {
		let spec = Self::spec(name)?;
		spec.check(&values)
			.map_err(|source| DoubleError::Projection { operation: name.to_string(), source })?;
		self.results.register(spec.name, values);
		Ok(self)
	}

	/// Sets the error returned by an operation, by name.
	pub fn set_error(
		&mut self,
		name: &str,
		error: BackendError,
	) -> std::result::Result<&mut Self, DoubleError> {
		let spec = Self::spec(name)?;
		if !spec.fallible {
			return Err(DoubleError::NoErrorSlot(name.to_string()));
		}
		self.results.set_error(spec.name, error);
		Ok(self)
	}

	/// Sets the failure message of an operation, by name.
	pub fn set_failure(
		&mut self,
		name: &str,
		message: impl Into<String>,
	) -> std::result::Result<&mut Self, DoubleError> {
		let spec = Self::spec(name)?;
		self.results.set_failure(spec.name, message);
		Ok(self)
	}

	pub fn table(&self) -> &ResultTable {
		&self.results
	}

	/// Unchecked access to the result table.
	///
	/// Values registered here are only matched against the declared results
	/// when the operation is invoked.
	pub fn table_mut(&mut self) -> &mut ResultTable {
		&mut self.results
	}

	fn spec(name: &str) -> std::result::Result<&'static OperationSpec, DoubleError> {
		catalogue::find(name).ok_or_else(|| DoubleError::UnknownOperation(name.to_string()))
	}

	/// The entry of `operation`, panicking on unknown, failing or unregistered operations.
	///
	/// A failure fires even before registration. An error alone does not make
	/// the operation configured.
	fn entry(&self, operation: &str) -> &ResultEntry {
		if operation.is_empty() {
			abort(DoubleError::UnknownOperation(operation.to_string()));
		}
		let entry = self.results.lookup(operation);
		if let Some(message) = entry.and_then(ResultEntry::failure) {
			panic!("{message}");
		}
		match entry {
			Some(entry) if entry.is_registered() => entry,
			_ => abort(DoubleError::NotConfigured { operation: operation.to_string() }),
		}
	}

	fn value<T: Any + Clone>(&self, operation: &str) -> T {
		let entry = self.entry(operation);
		project(operation, Cursor::new(entry.values()).take())
	}

	fn values<T: FromValues>(&self, operation: &str) -> T {
		let entry = self.entry(operation);
		project(operation, T::from_values(entry.values()))
	}

	/// Registered values are projected even when an error is returned instead.
	fn try_value<T: Any + Clone>(&self, operation: &str) -> Result<T> {
		let entry = self.entry(operation);
		let value = project(operation, Cursor::new(entry.values()).take());
		entry.error().map_or(Ok(value), |error| Err(error.clone()))
	}

	fn try_values<T: FromValues>(&self, operation: &str) -> Result<T> {
		let entry = self.entry(operation);
		let values = project(operation, T::from_values(entry.values()));
		entry.error().map_or(Ok(values), |error| Err(error.clone()))
	}
}

fn project<T>(operation: &str, projected: std::result::Result<T, ProjectionError>) -> T {
	projected.unwrap_or_else(|source| {
		abort(DoubleError::Projection { operation: operation.to_string(), source })
	})
}

fn abort(err: DoubleError) -> ! {
	panic!("{err}")
}

impl Backend for TestBackend {
	fn protocol_version(&self) -> u32 {
		self.value(call_site!())
	}

	fn progress(&self) -> PeerProgress {
		self.value(call_site!())
	}

	fn suggest_price(&self) -> Result<U256> {
		self.try_value(call_site!())
	}

	fn ext_rpc_enabled(&self) -> bool {
		self.value(call_site!())
	}

	fn rpc_gas_cap(&self) -> U256 {
		self.value(call_site!())
	}

	fn header_by_number(&self, _number: BlockNumber) -> Result<Option<EvmHeader>> {
		self.try_value(call_site!())
	}

	fn header_by_hash(&self, _hash: H256) -> Result<Option<EvmHeader>> {
		self.try_value(call_site!())
	}

	fn block_by_number(&self, _number: BlockNumber) -> Result<Option<EvmBlock>> {
		self.try_value(call_site!())
	}

	fn state_and_header_by_number(
		&self,
		_number: BlockNumber,
	) -> Result<(Arc<dyn StateReader>, EvmHeader)> {
		self.try_values(call_site!())
	}

	fn get_block(&self, _hash: H256) -> Result<Option<EvmBlock>> {
		self.try_value(call_site!())
	}

	fn get_receipts_by_number(&self, _number: BlockNumber) -> Result<Vec<Receipt>> {
		self.try_value(call_site!())
	}

	fn get_td(&self, _hash: H256) -> U256 {
		self.value(call_site!())
	}

	fn chain_config(&self) -> ChainConfig {
		self.value(call_site!())
	}

	fn current_block(&self) -> EvmBlock {
		self.value(call_site!())
	}

	fn send_tx(&self, _signed_tx: Transaction) -> Result<()> {
		self.try_values(call_site!())
	}

	fn get_transaction(&self, _tx_hash: H256) -> Result<(Option<Transaction>, u64, u64)> {
		self.try_values(call_site!())
	}

	fn get_pool_transactions(&self) -> Result<Vec<Transaction>> {
		self.try_value(call_site!())
	}

	fn get_pool_transaction(&self, _tx_hash: H256) -> Option<Transaction> {
		self.value(call_site!())
	}

	fn get_pool_nonce(&self, _address: Address) -> Result<u64> {
		self.try_value(call_site!())
	}

	fn stats(&self) -> (usize, usize) {
		self.values(call_site!())
	}

	fn tx_pool_content(
		&self,
	) -> (HashMap<Address, Vec<Transaction>>, HashMap<Address, Vec<Transaction>>) {
		self.values(call_site!())
	}

	fn subscribe_new_txs_notify(
		&self,
		_sink: UnboundedSender<NewTxsNotify>,
	) -> Arc<dyn Subscription> {
		self.value(call_site!())
	}

	fn get_event(&self, _short_event_id: &str) -> Result<Option<Event>> {
		self.try_value(call_site!())
	}

	fn get_event_header(&self, _short_event_id: &str) -> Result<Option<EventHeaderData>> {
		self.try_value(call_site!())
	}

	fn get_consensus_time(&self, _short_event_id: &str) -> Result<Timestamp> {
		self.try_value(call_site!())
	}

	fn get_heads(&self, _epoch: BlockNumber) -> Result<Vec<EventHash>> {
		self.try_value(call_site!())
	}

	fn current_epoch(&self) -> Epoch {
		self.value(call_site!())
	}

	fn get_epoch_stats(&self, _requested_epoch: BlockNumber) -> Result<Option<EpochStats>> {
		self.try_value(call_site!())
	}

	fn ttf_report(
		&self,
		_until_block: BlockNumber,
		_max_blocks: BlockIdx,
		_mode: TtfMode,
	) -> Result<HashMap<EventHash, Duration>> {
		self.try_value(call_site!())
	}

	fn for_each_event(
		&self,
		_epoch: BlockNumber,
		on_event: &mut dyn FnMut(&Event) -> bool,
	) -> Result<()> {
		let events: Vec<Event> = self.try_value(call_site!())?;
		for event in &events {
			if !on_event(event) {
				break;
			}
		}
		Ok(())
	}

	fn validator_time_drifts(
		&self,
		_epoch: BlockNumber,
		_max_events: EventIdx,
	) -> Result<HashMap<StakerId, HashMap<EventHash, Duration>>> {
		self.try_value(call_site!())
	}

	fn get_validators(&self) -> Validators {
		self.value(call_site!())
	}

	fn get_validation_score(&self, _staker_id: StakerId) -> Result<U256> {
		self.try_value(call_site!())
	}

	fn get_origination_score(&self, _staker_id: StakerId) -> Result<U256> {
		self.try_value(call_site!())
	}

	fn get_reward_weights(&self, _staker_id: StakerId) -> Result<(U256, U256)> {
		self.try_values(call_site!())
	}

	fn get_staker_poi(&self, _staker_id: StakerId) -> Result<U256> {
		self.try_value(call_site!())
	}

	fn get_downtime(&self, _staker_id: StakerId) -> Result<(BlockIdx, Timestamp)> {
		self.try_values(call_site!())
	}

	fn get_delegator_claimed_rewards(&self, _address: Address) -> Result<U256> {
		self.try_value(call_site!())
	}

	fn get_staker_claimed_rewards(&self, _staker_id: StakerId) -> Result<U256> {
		self.try_value(call_site!())
	}

	fn get_staker_delegators_claimed_rewards(&self, _staker_id: StakerId) -> Result<U256> {
		self.try_value(call_site!())
	}

	fn get_staker(&self, _staker_id: StakerId) -> Result<Option<Staker>> {
		self.try_value(call_site!())
	}

	fn get_staker_id(&self, _address: Address) -> Result<StakerId> {
		self.try_value(call_site!())
	}

	fn get_stakers(&self) -> Result<Vec<StakerAndId>> {
		self.try_value(call_site!())
	}

	fn get_delegators_of(&self, _staker_id: StakerId) -> Result<Vec<DelegatorAndAddr>> {
		self.try_value(call_site!())
	}

	fn get_delegator(&self, _address: Address) -> Result<Option<Delegator>> {
		self.try_value(call_site!())
	}

	fn wallets(&self) -> Vec<Arc<dyn Wallet>> {
		self.value(call_site!())
	}

	fn subscribe(&self, _sink: UnboundedSender<WalletEvent>) -> Arc<dyn Subscription> {
		self.value(call_site!())
	}

	fn account_manager(&self) -> Arc<dyn AccountManager> {
		self.value(call_site!())
	}

	fn lock_account(&self, _address: Address) -> Result<bool> {
		self.try_value(call_site!())
	}

	fn unlock_account(
		&self,
		_address: Address,
		_passphrase: &str,
		_duration: Option<Duration>,
	) -> Result<bool> {
		self.try_value(call_site!())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{ops, values};
	use std::panic::{AssertUnwindSafe, catch_unwind};
	use tokio::sync::mpsc::unbounded_channel;

	fn panic_message(f: impl FnOnce()) -> String {
		let payload = catch_unwind(AssertUnwindSafe(f)).expect_err("call did not panic");
		payload
			.downcast_ref::<String>()
			.cloned()
			.or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
			.unwrap_or_default()
	}

	#[test]
	fn returns_registered_value() {
		let mut backend = TestBackend::new();
		backend.returns::<ops::GetTd>(U256::from(1_000));
		assert_eq!(backend.get_td(H256::zero()), U256::from(1_000));
		// Replays on every invocation.
		assert_eq!(backend.get_td(H256::repeat_byte(1)), U256::from(1_000));
	}

	#[test]
	fn projects_multiple_values_in_order() {
		let tx = Transaction::new(1, None, U256::one(), 21_000, U256::one(), Vec::new());
		let mut backend = TestBackend::new();
		backend
			.returns::<ops::GetTransaction>((Some(tx.clone()), 7, 2))
			.returns::<ops::Stats>((3, 4))
			.returns::<ops::SendTx>(());

		assert_eq!(backend.get_transaction(tx.hash()), Ok((Some(tx.clone()), 7, 2)));
		assert_eq!(backend.stats(), (3, 4));
		assert_eq!(backend.send_tx(tx), Ok(()));
	}

	#[test]
	fn fails_with_returns_error() {
		let mut backend = TestBackend::new();
		backend
			.returns::<ops::SuggestPrice>(U256::from(3))
			.fails_with::<ops::SuggestPrice>(BackendError::Unavailable("syncing".into()));
		assert_eq!(backend.suggest_price(), Err(BackendError::Unavailable("syncing".into())));
	}

	#[test]
	fn error_takes_precedence_over_values_until_reregistered() {
		let mut backend = TestBackend::new();
		backend
			.returns::<ops::GetPoolNonce>(9)
			.fails_with::<ops::GetPoolNonce>(BackendError::not_found("account"));
		assert_eq!(backend.get_pool_nonce(Address::zero()), Err(BackendError::not_found("account")));

		backend.table_mut().clear_error("get_pool_nonce");
		assert_eq!(backend.get_pool_nonce(Address::zero()), Ok(9));

		backend
			.fails_with::<ops::GetPoolNonce>(BackendError::not_found("account"))
			.returns::<ops::GetPoolNonce>(10);
		assert_eq!(backend.get_pool_nonce(Address::zero()), Ok(10));
	}

	#[test]
	#[should_panic(expected = "boom")]
	fn panics_with_configured_message() {
		let mut backend = TestBackend::new();
		backend.returns::<ops::LockAccount>(true).panics_with::<ops::LockAccount>("boom");
		let _ = backend.lock_account(Address::zero());
	}

	#[test]
	fn failure_persists_until_register() {
		let mut backend = TestBackend::new();
		backend.panics_with::<ops::CurrentEpoch>("epoch sealed");
		let invoke = |backend: &TestBackend| {
			panic_message(|| {
				backend.current_epoch();
			})
		};
		assert_eq!(invoke(&backend), "epoch sealed");
		assert_eq!(invoke(&backend), "epoch sealed");

		// Setting an error does not lift the failure.
		backend.table_mut().set_error("current_epoch", BackendError::Internal("x".into()));
		assert_eq!(invoke(&backend), "epoch sealed");

		backend.returns::<ops::CurrentEpoch>(Epoch(4));
		assert_eq!(backend.current_epoch(), Epoch(4));
	}

	#[test]
	#[should_panic(expected = "operation `get_td` is not configured")]
	fn unconfigured_operation_panics() {
		let mut backend = TestBackend::new();
		backend.returns::<ops::GetPoolNonce>(1);
		backend.get_td(H256::zero());
	}

	#[test]
	fn register_by_name_is_checked() {
		let mut backend = TestBackend::new();
		assert!(backend.register("get_pool_nonce", values![3u64]).is_ok());
		assert_eq!(backend.get_pool_nonce(Address::zero()), Ok(3));

		assert!(matches!(
			backend.register("GetPoolNonce", values![3u64]),
			Err(DoubleError::UnknownOperation(name)) if name == "GetPoolNonce"
		));
		assert!(matches!(backend.register("", vec![]), Err(DoubleError::UnknownOperation(_))));
		assert!(matches!(
			backend.register("get_pool_nonce", values![3u32]),
			Err(DoubleError::Projection { source: ProjectionError::Mismatch { position: 0, .. }, .. })
		));
		assert!(matches!(
			backend.register("stats", values![1usize]),
			Err(DoubleError::Projection { source: ProjectionError::Missing { position: 1, .. }, .. })
		));
		// Rejected registrations leave the previous one in place.
		assert_eq!(backend.get_pool_nonce(Address::zero()), Ok(3));
	}

	#[test]
	fn set_error_by_name_needs_error_slot() {
		let mut backend = TestBackend::new();
		let err = backend.set_error("get_td", BackendError::Internal("x".into())).unwrap_err();
		assert_eq!(err.to_string(), "operation `get_td` has no error result");
		assert!(!backend.table().contains("get_td"));

		backend.register("get_staker", values![None::<Staker>]).unwrap();
		backend.set_error("get_staker", BackendError::not_found("staker")).unwrap();
		assert_eq!(backend.get_staker(StakerId(1)), Err(BackendError::not_found("staker")));
	}

	#[test]
	fn set_failure_by_name() {
		let mut backend = TestBackend::new();
		backend.set_failure("wallets", "keystore locked").unwrap();
		assert_eq!(panic_message(|| drop(backend.wallets())), "keystore locked");
		assert!(backend.set_failure("nope", "x").is_err());
	}

	#[test]
	#[should_panic(expected = "operation `get_staker` is not configured")]
	fn error_without_registration_is_not_configured() {
		let mut backend = TestBackend::new();
		backend.fails_with::<ops::GetStaker>(BackendError::not_found("staker"));
		let _ = backend.get_staker(StakerId(1));
	}

	#[test]
	#[should_panic(expected = "operation `lock_account` is not configured")]
	fn raw_error_without_registration_is_not_configured() {
		let mut backend = TestBackend::new();
		backend.table_mut().set_error("lock_account", BackendError::Internal("x".into()));
		let _ = backend.lock_account(Address::zero());
	}

	#[test]
	fn cleared_failure_without_registration_is_not_configured() {
		let mut backend = TestBackend::new();
		backend.set_failure("send_tx", "").unwrap();
		let tx = Transaction::new(0, None, U256::zero(), 0, U256::zero(), Vec::new());
		let message = panic_message(|| {
			let _ = backend.send_tx(tx);
		});
		assert!(message.contains("operation `send_tx` is not configured"), "{message}");
	}

	#[test]
	#[should_panic(expected = "unknown operation")]
	fn empty_operation_name_panics() {
		TestBackend::new().value::<u32>("");
	}

	#[test]
	#[should_panic(expected = "operation `get_pool_nonce` is not configured correctly")]
	fn mismatched_values_panic_even_when_error_is_set() {
		let mut backend = TestBackend::new();
		backend.table_mut().register("get_pool_nonce", values![3u32]);
		backend.table_mut().set_error("get_pool_nonce", BackendError::not_found("account"));
		let _ = backend.get_pool_nonce(Address::zero());
	}

	#[test]
	#[should_panic(expected = "operation `get_td` is not configured correctly")]
	fn raw_mismatch_panics_at_invocation() {
		let mut backend = TestBackend::new();
		backend.table_mut().register("get_td", values![7u64]);
		backend.get_td(H256::zero());
	}

	#[test]
	#[should_panic(expected = "is not configured correctly: no value at position 0")]
	fn missing_value_panics_at_invocation() {
		let mut backend = TestBackend::new();
		backend.table_mut().register("protocol_version", Vec::new());
		backend.protocol_version();
	}

	#[test]
	fn raw_trailing_values_are_ignored() {
		let mut backend = TestBackend::new();
		backend.table_mut().register("get_reward_weights", values![U256::one(), U256::zero(), 5u8]);
		assert_eq!(backend.get_reward_weights(StakerId(1)), Ok((U256::one(), U256::zero())));
	}

	#[test]
	fn for_each_event_stops_when_callback_declines() {
		let events: Vec<Event> = (0..3u32)
			.map(|lamport| {
				let mut event = Event::default();
				event.header.lamport = lamport;
				event
			})
			.collect();
		let mut backend = TestBackend::new();
		backend.returns::<ops::ForEachEvent>(events);

		let mut seen = Vec::new();
		let result = backend.for_each_event(BlockNumber::Latest, &mut |event: &Event| {
			seen.push(event.header.lamport);
			seen.len() < 2
		});
		assert_eq!(result, Ok(()));
		assert_eq!(seen, [0, 1]);

		backend.fails_with::<ops::ForEachEvent>(BackendError::not_found("epoch"));
		let mut calls = 0;
		let result = backend.for_each_event(BlockNumber::Number(3), &mut |_: &Event| {
			calls += 1;
			true
		});
		assert_eq!(result, Err(BackendError::not_found("epoch")));
		assert_eq!(calls, 0);
	}

	#[test]
	fn opaque_results_are_shared() {
		let subscription: Arc<dyn Subscription> = Arc::new(crate::fakes::TestSubscription::default());
		let mut backend = TestBackend::new();
		backend.returns::<ops::SubscribeNewTxsNotify>(subscription.clone());

		let (sink, _events) = unbounded_channel();
		let returned = backend.subscribe_new_txs_notify(sink);
		returned.unsubscribe();
		assert!(!subscription.is_active());
	}

	#[test]
	fn double_is_shareable() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<TestBackend>();

		let mut backend = TestBackend::new();
		backend.returns::<ops::CurrentEpoch>(Epoch(2));
		let shared: Arc<dyn Backend> = Arc::new(backend);
		let handle = {
			let shared = shared.clone();
			std::thread::spawn(move || shared.current_epoch())
		};
		assert_eq!(handle.join().unwrap(), Epoch(2));
	}

	macro_rules! assert_resolves {
		($backend:ident: $($method:ident($($arg:expr),*);)*) => {{
			let mut checked = 0;
			$(
				assert_eq!(
					panic_message(|| {
						let _ = $backend.$method($($arg),*);
					}),
					stringify!($method)
				);
				checked += 1;
			)*
			checked
		}};
	}

	#[test]
	fn every_operation_resolves_to_its_catalogue_name() {
		let mut backend = TestBackend::new();
		for op in catalogue::all() {
			backend.set_failure(op.name, op.name).unwrap();
		}
		let block = BlockNumber::Latest;
		let hash = H256::zero();
		let staker = StakerId(1);
		let address = Address::zero();
		let tx = Transaction::new(0, None, U256::zero(), 0, U256::zero(), Vec::new());

		let checked = assert_resolves! { backend:
			protocol_version();
			progress();
			suggest_price();
			ext_rpc_enabled();
			rpc_gas_cap();
			header_by_number(block);
			header_by_hash(hash);
			block_by_number(block);
			state_and_header_by_number(block);
			get_block(hash);
			get_receipts_by_number(block);
			get_td(hash);
			chain_config();
			current_block();
			send_tx(tx.clone());
			get_transaction(hash);
			get_pool_transactions();
			get_pool_transaction(hash);
			get_pool_nonce(address);
			stats();
			tx_pool_content();
			subscribe_new_txs_notify(unbounded_channel().0);
			get_event("1:2:a2004f");
			get_event_header("1:2:a2004f");
			get_consensus_time("1:2:a2004f");
			get_heads(block);
			current_epoch();
			get_epoch_stats(block);
			ttf_report(block, BlockIdx(10), TtfMode::ArrivalTime);
			for_each_event(block, &mut |_: &Event| true);
			validator_time_drifts(block, EventIdx(10));
			get_validators();
			get_validation_score(staker);
			get_origination_score(staker);
			get_reward_weights(staker);
			get_staker_poi(staker);
			get_downtime(staker);
			get_delegator_claimed_rewards(address);
			get_staker_claimed_rewards(staker);
			get_staker_delegators_claimed_rewards(staker);
			get_staker(staker);
			get_staker_id(address);
			get_stakers();
			get_delegators_of(staker);
			get_delegator(address);
			wallets();
			subscribe(unbounded_channel().0);
			account_manager();
			lock_account(address);
			unlock_account(address, "secret", None);
		};
		assert_eq!(checked, catalogue::all().len());
	}
}
