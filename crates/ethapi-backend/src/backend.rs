// SPDX-License-Identifier: GPL-3.0

use crate::{
	Result,
	types::{
		AccountManager, Address, BlockIdx, BlockNumber, ChainConfig, Delegator, DelegatorAndAddr,
		Epoch, EpochStats, Event, EventHash, EventHeaderData, EventIdx, EvmBlock, EvmHeader,
		NewTxsNotify, PeerProgress, Receipt, Staker, StakerAndId, StakerId, StateReader,
		Subscription, Timestamp, Transaction, TtfMode, Validators, Wallet, WalletEvent,
	},
};
use sp_core::{H256, U256};
use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::sync::mpsc::UnboundedSender;

/// Everything the RPC API layer needs from the node.
///
/// Calls are synchronous and complete immediately. Operations without a
/// [`Result`] cannot fail in a way the caller is expected to handle.
pub trait Backend: Send + Sync {
	// --- General ---

	fn protocol_version(&self) -> u32;

	fn progress(&self) -> PeerProgress;

	/// Gas price suggested for new transactions.
	fn suggest_price(&self) -> Result<U256>;

	/// Whether RPC is reachable from outside the host.
	fn ext_rpc_enabled(&self) -> bool;

	/// Global gas cap applied to `eth_call` over RPC.
	fn rpc_gas_cap(&self) -> U256;

	// --- Chain ---

	fn header_by_number(&self, number: BlockNumber) -> Result<Option<EvmHeader>>;

	fn header_by_hash(&self, hash: H256) -> Result<Option<EvmHeader>>;

	fn block_by_number(&self, number: BlockNumber) -> Result<Option<EvmBlock>>;

	/// State and header of a block, used to serve balance, nonce and code queries.
	fn state_and_header_by_number(
		&self,
		number: BlockNumber,
	) -> Result<(Arc<dyn StateReader>, EvmHeader)>;

	fn get_block(&self, hash: H256) -> Result<Option<EvmBlock>>;

	fn get_receipts_by_number(&self, number: BlockNumber) -> Result<Vec<Receipt>>;

	/// Total difficulty of the chain up to the given block.
	fn get_td(&self, hash: H256) -> U256;

	fn chain_config(&self) -> ChainConfig;

	fn current_block(&self) -> EvmBlock;

	// --- Transaction pool ---

	fn send_tx(&self, signed_tx: Transaction) -> Result<()>;

	/// A transaction with the number and index of the block including it.
	fn get_transaction(&self, tx_hash: H256) -> Result<(Option<Transaction>, u64, u64)>;

	fn get_pool_transactions(&self) -> Result<Vec<Transaction>>;

	fn get_pool_transaction(&self, tx_hash: H256) -> Option<Transaction>;

	fn get_pool_nonce(&self, address: Address) -> Result<u64>;

	/// Number of pending and queued transactions.
	fn stats(&self) -> (usize, usize);

	/// Pending and queued transactions grouped by sender.
	fn tx_pool_content(
		&self,
	) -> (HashMap<Address, Vec<Transaction>>, HashMap<Address, Vec<Transaction>>);

	fn subscribe_new_txs_notify(
		&self,
		sink: UnboundedSender<NewTxsNotify>,
	) -> Arc<dyn Subscription>;

	// --- Lachesis DAG ---

	fn get_event(&self, short_event_id: &str) -> Result<Option<Event>>;

	fn get_event_header(&self, short_event_id: &str) -> Result<Option<EventHeaderData>>;

	fn get_consensus_time(&self, short_event_id: &str) -> Result<Timestamp>;

	fn get_heads(&self, epoch: BlockNumber) -> Result<Vec<EventHash>>;

	fn current_epoch(&self) -> Epoch;

	fn get_epoch_stats(&self, requested_epoch: BlockNumber) -> Result<Option<EpochStats>>;

	/// Time-to-finality of the events of the last `max_blocks` blocks up to `until_block`.
	fn ttf_report(
		&self,
		until_block: BlockNumber,
		max_blocks: BlockIdx,
		mode: TtfMode,
	) -> Result<HashMap<EventHash, Duration>>;

	/// Feeds every event of `epoch` to `on_event` until it returns `false`.
	fn for_each_event(
		&self,
		epoch: BlockNumber,
		on_event: &mut dyn FnMut(&Event) -> bool,
	) -> Result<()>;

	/// Clock drift of each validator, measured per event.
	fn validator_time_drifts(
		&self,
		epoch: BlockNumber,
		max_events: EventIdx,
	) -> Result<HashMap<StakerId, HashMap<EventHash, Duration>>>;

	// --- Lachesis SFC ---

	fn get_validators(&self) -> Validators;

	fn get_validation_score(&self, staker_id: StakerId) -> Result<U256>;

	fn get_origination_score(&self, staker_id: StakerId) -> Result<U256>;

	/// Base and transaction reward weights of a staker.
	fn get_reward_weights(&self, staker_id: StakerId) -> Result<(U256, U256)>;

	/// Proof of importance.
	fn get_staker_poi(&self, staker_id: StakerId) -> Result<U256>;

	/// Missed blocks and the time the staker has been offline.
	fn get_downtime(&self, staker_id: StakerId) -> Result<(BlockIdx, Timestamp)>;

	fn get_delegator_claimed_rewards(&self, address: Address) -> Result<U256>;

	fn get_staker_claimed_rewards(&self, staker_id: StakerId) -> Result<U256>;

	fn get_staker_delegators_claimed_rewards(&self, staker_id: StakerId) -> Result<U256>;

	fn get_staker(&self, staker_id: StakerId) -> Result<Option<Staker>>;

	fn get_staker_id(&self, address: Address) -> Result<StakerId>;

	fn get_stakers(&self) -> Result<Vec<StakerAndId>>;

	fn get_delegators_of(&self, staker_id: StakerId) -> Result<Vec<DelegatorAndAddr>>;

	fn get_delegator(&self, address: Address) -> Result<Option<Delegator>>;

	// --- Accounts ---

	fn wallets(&self) -> Vec<Arc<dyn Wallet>>;

	/// Subscribes `sink` to wallet arrival and departure events.
	fn subscribe(&self, sink: UnboundedSender<WalletEvent>) -> Arc<dyn Subscription>;

	fn account_manager(&self) -> Arc<dyn AccountManager>;

	/// Re-locks an unlocked account. Returns whether the account was found.
	fn lock_account(&self, address: Address) -> Result<bool>;

	/// Unlocks an account for `duration`, or until locked again when `None`.
	fn unlock_account(
		&self,
		address: Address,
		passphrase: &str,
		duration: Option<Duration>,
	) -> Result<bool>;
}
