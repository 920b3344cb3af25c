// SPDX-License-Identifier: GPL-3.0

//! Canned domain values and a fully configured double built from them.

use crate::{
	TestBackend,
	fakes::{MemoryState, StaticAccountManager, TestSubscription, TestWallet},
	ops,
};
use ethapi_backend::{
	H256, U256,
	types::{
		AccountManager, Address, BlockIdx, ChainConfig, Delegator, DelegatorAndAddr, Epoch,
		EpochStats, Event, EventHash, EventHeaderData, EventIdx, EvmBlock, EvmHeader, PeerProgress,
		Receipt, Staker, StakerAndId, StakerId, StateReader, Subscription, Timestamp, Transaction,
		Validators, Wallet,
	},
};
use std::{
	collections::HashMap,
	sync::Arc,
	time::{Duration, SystemTime, UNIX_EPOCH},
};

/// A plain value transfer of `n` wei to `0x0n0n..`, with nonce and gas `n`.
pub fn sample_transaction(n: u8) -> Transaction {
	Transaction::new(
		n.into(),
		Some(Address::repeat_byte(n)),
		U256::from(n),
		n.into(),
		U256::zero(),
		Vec::new(),
	)
}

/// Header of block 1 with distinct, recognisable hashes.
pub fn sample_header() -> EvmHeader {
	EvmHeader {
		number: U256::one(),
		hash: H256::repeat_byte(2),
		parent_hash: H256::repeat_byte(3),
		root: H256::repeat_byte(4),
		tx_hash: H256::repeat_byte(5),
		time: Timestamp(6),
		coinbase: Address::repeat_byte(7),
		gas_limit: 8,
		gas_used: 9,
	}
}

/// Block 1 carrying a single transaction.
pub fn sample_block() -> EvmBlock {
	EvmBlock { header: sample_header(), transactions: vec![sample_transaction(1)] }
}

pub fn sample_receipts() -> Vec<Receipt> {
	vec![
		Receipt {
			status: false,
			cumulative_gas_used: 100,
			post_state: vec![1, 2, 3],
			contract_address: Some(Address::repeat_byte(1)),
			tx_hash: sample_transaction(1).hash(),
		},
		Receipt { cumulative_gas_used: 100, ..Default::default() },
	]
}

/// Root event of epoch 2, created by staker 1.
pub fn sample_event_header() -> EventHeaderData {
	EventHeaderData {
		version: 1,
		epoch: Epoch(2),
		seq: EventIdx(1),
		frame: 1,
		is_root: true,
		creator: StakerId(1),
		..Default::default()
	}
}

pub fn sample_event() -> Event {
	Event {
		header: sample_event_header(),
		sig: Vec::new(),
		transactions: vec![sample_transaction(1)],
	}
}

pub fn sample_epoch_stats() -> EpochStats {
	EpochStats { epoch: Epoch(1), start: Timestamp(1), end: Timestamp(2), ..Default::default() }
}

/// An active staker at `0x0101..` with a stake of 1.
pub fn sample_staker() -> Staker {
	Staker {
		created_epoch: Epoch(1),
		created_time: Timestamp(1),
		address: Address::repeat_byte(1),
		stake_amount: U256::one(),
		..Default::default()
	}
}

/// An active delegation to staker 1.
pub fn sample_delegator() -> Delegator {
	Delegator {
		created_epoch: Epoch(1),
		created_time: Timestamp(2),
		to_staker_id: StakerId(1),
		..Default::default()
	}
}

/// Sync progress whose current block is 91 minutes old.
pub fn sample_progress() -> PeerProgress {
	let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
	PeerProgress {
		current_epoch: Epoch(1),
		current_block: BlockIdx(2),
		current_block_hash: EventHash::from_low_u64_be(3),
		current_block_time: Timestamp::from_unix(now.saturating_sub(Duration::from_secs(91 * 60))),
		highest_block: BlockIdx(5),
		highest_epoch: Epoch(6),
	}
}

/// Time-to-finality of events `0x1..=0x4`: `n` seconds for event `n`.
pub fn sample_ttf_report() -> HashMap<EventHash, Duration> {
	(1..=4).map(|n| (EventHash::from_low_u64_be(n), Duration::from_secs(n))).collect()
}

/// Time drifts of staker 1 (events `0x1`, `0x2`) and staker 2 (events `0x3`, `0x4`).
pub fn sample_time_drifts() -> HashMap<StakerId, HashMap<EventHash, Duration>> {
	let drifts = |events: [u64; 2]| {
		events
			.into_iter()
			.map(|n| (EventHash::from_low_u64_be(n), Duration::from_secs(n)))
			.collect::<HashMap<_, _>>()
	};
	HashMap::from([(StakerId(1), drifts([1, 2])), (StakerId(2), drifts([3, 4]))])
}

/// Account `0x0101..` with balance 10, nonce 1 and code `[1, 2, 3]`.
pub fn sample_state() -> MemoryState {
	MemoryState::new().with_account(Address::repeat_byte(1), U256::from(10), 1, vec![1, 2, 3])
}

/// Three [`TestWallet`]s.
pub fn sample_wallets() -> Vec<Arc<dyn Wallet>> {
	(0..3).map(|_| Arc::new(TestWallet::new()) as Arc<dyn Wallet>).collect()
}

impl TestBackend {
	/// A double with every operation configured to return the `sample_*` values.
	///
	/// Tests then override only the operations they exercise.
	pub fn with_defaults() -> Self {
		let mut backend = Self::new();
		backend.prepare_defaults();
		backend
	}

	fn prepare_defaults(&mut self) {
		log::debug!("registering default results for every operation");
		let one = U256::one();
		let subscription: Arc<dyn Subscription> = Arc::new(TestSubscription::default());
		let state: Arc<dyn StateReader> = Arc::new(sample_state());
		let account_manager: Arc<dyn AccountManager> =
			Arc::new(StaticAccountManager::new(sample_wallets()));
		let pending = HashMap::from([(
			Address::repeat_byte(1),
			vec![sample_transaction(1), sample_transaction(2)],
		)]);
		let queued = HashMap::from([(
			Address::repeat_byte(1),
			vec![sample_transaction(3), sample_transaction(4)],
		)]);

		self
			// General
			.returns::<ops::ProtocolVersion>(1)
			.returns::<ops::Progress>(sample_progress())
			.returns::<ops::SuggestPrice>(one)
			.returns::<ops::ExtRpcEnabled>(false)
			.returns::<ops::RpcGasCap>(one)
			// Chain
			.returns::<ops::HeaderByNumber>(Some(EvmHeader { number: one, ..Default::default() }))
			.returns::<ops::HeaderByHash>(Some(EvmHeader { number: one, ..Default::default() }))
			.returns::<ops::BlockByNumber>(Some(sample_block()))
			.returns::<ops::StateAndHeaderByNumber>((state, EvmHeader::default()))
			.returns::<ops::GetBlock>(Some(sample_block()))
			.returns::<ops::GetReceiptsByNumber>(sample_receipts())
			.returns::<ops::GetTd>(one)
			.returns::<ops::ChainConfig>(ChainConfig { chain_id: one })
			.returns::<ops::CurrentBlock>(sample_block())
			// Transaction pool
			.returns::<ops::SendTx>(())
			.returns::<ops::GetTransaction>((Some(sample_transaction(1)), 1, 1))
			.returns::<ops::GetPoolTransactions>(vec![sample_transaction(3), sample_transaction(4)])
			.returns::<ops::GetPoolTransaction>(Some(sample_transaction(3)))
			.returns::<ops::GetPoolNonce>(1)
			.returns::<ops::Stats>((2, 2))
			.returns::<ops::TxPoolContent>((pending, queued))
			.returns::<ops::SubscribeNewTxsNotify>(subscription.clone())
			// DAG
			.returns::<ops::GetEvent>(Some(sample_event()))
			.returns::<ops::GetEventHeader>(Some(sample_event_header()))
			.returns::<ops::GetConsensusTime>(Timestamp(1))
			.returns::<ops::GetHeads>(vec![EventHash::from_low_u64_be(1)])
			.returns::<ops::CurrentEpoch>(Epoch(1))
			.returns::<ops::GetEpochStats>(Some(sample_epoch_stats()))
			.returns::<ops::TtfReport>(sample_ttf_report())
			.returns::<ops::ForEachEvent>(vec![sample_event()])
			.returns::<ops::ValidatorTimeDrifts>(sample_time_drifts())
			// SFC
			.returns::<ops::GetValidators>(Validators::from_iter([(StakerId(1), one)]))
			.returns::<ops::GetValidationScore>(one)
			.returns::<ops::GetOriginationScore>(one)
			.returns::<ops::GetRewardWeights>((one, one))
			.returns::<ops::GetStakerPoi>(one)
			.returns::<ops::GetDowntime>((BlockIdx(1), Timestamp(1)))
			.returns::<ops::GetDelegatorClaimedRewards>(one)
			.returns::<ops::GetStakerClaimedRewards>(one)
			.returns::<ops::GetStakerDelegatorsClaimedRewards>(one)
			.returns::<ops::GetStaker>(Some(sample_staker()))
			.returns::<ops::GetStakerId>(StakerId(1))
			.returns::<ops::GetStakers>(vec![StakerAndId {
				staker_id: StakerId(1),
				staker: sample_staker(),
			}])
			.returns::<ops::GetDelegatorsOf>(vec![DelegatorAndAddr {
				delegator: sample_delegator(),
				addr: Address::repeat_byte(1),
			}])
			.returns::<ops::GetDelegator>(Some(sample_delegator()))
			// Accounts
			.returns::<ops::Wallets>(sample_wallets())
			.returns::<ops::Subscribe>(subscription)
			.returns::<ops::AccountManager>(account_manager)
			.returns::<ops::LockAccount>(true)
			.returns::<ops::UnlockAccount>(true);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalogue;
	use ethapi_backend::{Backend, types::BlockNumber};

	#[test]
	fn defaults_cover_every_operation() {
		let backend = TestBackend::with_defaults();
		let names: Vec<&str> = catalogue::all().iter().map(|op| op.name).collect();
		let mut expected = names.clone();
		expected.sort_unstable();
		assert_eq!(backend.table().names(), expected);
		for op in catalogue::all() {
			let entry = backend.table().lookup(op.name).unwrap();
			assert_eq!(op.check(entry.values()), Ok(()), "defaults of `{}`", op.name);
		}
	}

	#[test]
	fn defaults_are_consistent() {
		let backend = TestBackend::with_defaults();
		let block = backend.current_block();
		assert_eq!(block.number(), U256::one());
		assert_eq!(backend.get_block(block.hash()), Ok(Some(block)));

		let (state, _header) = backend.state_and_header_by_number(BlockNumber::Latest).unwrap();
		assert_eq!(state.balance(&Address::repeat_byte(1)), U256::from(10));

		let manager = backend.account_manager();
		assert_eq!(manager.wallets().len(), 3);
		assert!(manager.find(&Address::repeat_byte(1)).is_some());

		let staker = backend.get_staker(StakerId(1)).unwrap().unwrap();
		assert!(staker.is_active());
		assert_eq!(backend.get_validators().total_weight(), staker.total_stake());
	}

	#[test]
	fn progress_lags_behind_now() {
		let progress = sample_progress();
		let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap();
		let lag = now - progress.current_block_time.as_duration();
		assert!(lag >= Duration::from_secs(91 * 60));
	}

	#[test]
	fn overriding_a_default_leaves_the_rest() {
		let mut backend = TestBackend::with_defaults();
		backend.returns::<ops::GetTd>(U256::from(99));
		assert_eq!(backend.get_td(H256::zero()), U256::from(99));
		assert_eq!(backend.rpc_gas_cap(), U256::one());
	}
}
