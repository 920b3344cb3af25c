// SPDX-License-Identifier: GPL-3.0

//! One marker type per [`Backend`](ethapi_backend::Backend) operation.
//!
//! Markers name an operation in typed configuration calls:
//!
//! ```
//! use ethapi_backend::{Backend, U256};
//! use ethapi_testing::{TestBackend, ops};
//!
//! let mut backend = TestBackend::new();
//! backend.returns::<ops::GetTd>(U256::from(7));
//! assert_eq!(backend.get_td(Default::default()), U256::from(7));
//! ```

use crate::catalogue::operations;
use ethapi_backend::{
	U256,
	types::{
		self, Address, BlockIdx, Delegator, DelegatorAndAddr, Epoch, EpochStats, Event, EventHash,
		EventHeaderData, EvmBlock, EvmHeader, PeerProgress, Receipt, Staker, StakerAndId, StakerId,
		StateReader, Subscription, Timestamp, Transaction, Validators, Wallet,
	},
};
use std::{collections::HashMap, sync::Arc, time::Duration};

operations! {
	// General
	protocol_version(u32);
	progress(PeerProgress);
	suggest_price(U256) fallible;
	ext_rpc_enabled(bool);
	rpc_gas_cap(U256);

	// Chain
	header_by_number(Option<EvmHeader>) fallible;
	header_by_hash(Option<EvmHeader>) fallible;
	block_by_number(Option<EvmBlock>) fallible;
	/// The state half cannot be described in JSON.
	state_and_header_by_number(Arc<dyn StateReader>, EvmHeader) fallible opaque;
	get_block(Option<EvmBlock>) fallible;
	get_receipts_by_number(Vec<Receipt>) fallible;
	get_td(U256);
	chain_config(types::ChainConfig);
	current_block(EvmBlock);

	// Transaction pool
	send_tx() fallible;
	/// Transaction, block number and index within the block.
	get_transaction(Option<Transaction>, u64, u64) fallible;
	get_pool_transactions(Vec<Transaction>) fallible;
	get_pool_transaction(Option<Transaction>);
	get_pool_nonce(u64) fallible;
	/// Pending and queued counts.
	stats(usize, usize);
	tx_pool_content(HashMap<Address, Vec<Transaction>>, HashMap<Address, Vec<Transaction>>);
	subscribe_new_txs_notify(Arc<dyn Subscription>) opaque;

	// Lachesis DAG
	get_event(Option<Event>) fallible;
	get_event_header(Option<EventHeaderData>) fallible;
	get_consensus_time(Timestamp) fallible;
	get_heads(Vec<EventHash>) fallible;
	current_epoch(Epoch);
	get_epoch_stats(Option<EpochStats>) fallible;
	ttf_report(HashMap<EventHash, Duration>) fallible;
	/// Events fed to the callback, in order.
	for_each_event(Vec<Event>) fallible;
	validator_time_drifts(HashMap<StakerId, HashMap<EventHash, Duration>>) fallible;

	// Lachesis SFC
	get_validators(Validators);
	get_validation_score(U256) fallible;
	get_origination_score(U256) fallible;
	/// Base and transaction reward weights.
	get_reward_weights(U256, U256) fallible;
	get_staker_poi(U256) fallible;
	get_downtime(BlockIdx, Timestamp) fallible;
	get_delegator_claimed_rewards(U256) fallible;
	get_staker_claimed_rewards(U256) fallible;
	get_staker_delegators_claimed_rewards(U256) fallible;
	get_staker(Option<Staker>) fallible;
	get_staker_id(StakerId) fallible;
	get_stakers(Vec<StakerAndId>) fallible;
	get_delegators_of(Vec<DelegatorAndAddr>) fallible;
	get_delegator(Option<Delegator>) fallible;

	// Accounts
	wallets(Vec<Arc<dyn Wallet>>) opaque;
	subscribe(Arc<dyn Subscription>) opaque;
	account_manager(Arc<dyn types::AccountManager>) opaque;
	lock_account(bool) fallible;
	unlock_account(bool) fallible;
}
