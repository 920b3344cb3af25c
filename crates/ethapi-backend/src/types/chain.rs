// SPDX-License-Identifier: GPL-3.0

//! Chain, block and transaction types.

use super::{Address, BlockIdx, Epoch, EventHash, Timestamp};
use serde::{Deserialize, Serialize};
use sp_core::{H256, U256};
use std::fmt;

/// Block selector accepted by RPC queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockNumber {
	/// The block currently being assembled.
	Pending,
	/// The most recent finalized block.
	Latest,
	/// The genesis block.
	Earliest,
	/// A specific block height.
	Number(u64),
}

impl fmt::Display for BlockNumber {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BlockNumber::Pending => f.write_str("pending"),
			BlockNumber::Latest => f.write_str("latest"),
			BlockNumber::Earliest => f.write_str("earliest"),
			BlockNumber::Number(n) => write!(f, "{n:#x}"),
		}
	}
}

/// A signed EVM transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
	pub nonce: u64,
	/// Recipient; `None` for contract creation.
	pub to: Option<Address>,
	pub value: U256,
	pub gas: u64,
	pub gas_price: U256,
	pub input: Vec<u8>,
}

impl Transaction {
	pub fn new(
		nonce: u64,
		to: Option<Address>,
		value: U256,
		gas: u64,
		gas_price: U256,
		input: Vec<u8>,
	) -> Self {
		Self { nonce, to, value, gas, gas_price, input }
	}

	/// Keccak-256 digest of the transaction fields.
	///
	/// Fields are concatenated big-endian in declaration order; an absent
	/// recipient contributes no bytes.
	pub fn hash(&self) -> H256 {
		let mut buf = Vec::with_capacity(8 + 32 + 8 + 20 + 32 + self.input.len());
		buf.extend(self.nonce.to_be_bytes());
		push_u256(&mut buf, &self.gas_price);
		buf.extend(self.gas.to_be_bytes());
		if let Some(to) = &self.to {
			buf.extend(to.as_bytes());
		}
		push_u256(&mut buf, &self.value);
		buf.extend(&self.input);
		H256(sp_core::keccak_256(&buf))
	}
}

fn push_u256(buf: &mut Vec<u8>, value: &U256) {
	for limb in value.0.iter().rev() {
		buf.extend(limb.to_be_bytes());
	}
}

/// Outcome of an executed transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
	/// Whether execution succeeded.
	pub status: bool,
	pub cumulative_gas_used: u64,
	pub post_state: Vec<u8>,
	pub contract_address: Option<Address>,
	pub tx_hash: H256,
}

/// Header of an EVM-compatible block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmHeader {
	pub number: U256,
	pub hash: H256,
	pub parent_hash: H256,
	pub root: H256,
	pub tx_hash: H256,
	pub time: Timestamp,
	pub coinbase: Address,
	pub gas_limit: u64,
	pub gas_used: u64,
}

/// An EVM-compatible block: header plus transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvmBlock {
	pub header: EvmHeader,
	pub transactions: Vec<Transaction>,
}

impl EvmBlock {
	pub fn number(&self) -> U256 {
		self.header.number
	}

	pub fn hash(&self) -> H256 {
		self.header.hash
	}
}

/// Chain parameters exposed through `eth_chainId` and friends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
	pub chain_id: U256,
}

/// Synchronisation progress reported by `eth_syncing`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerProgress {
	pub current_epoch: Epoch,
	pub current_block: BlockIdx,
	pub current_block_hash: EventHash,
	pub current_block_time: Timestamp,
	pub highest_block: BlockIdx,
	pub highest_epoch: Epoch,
}

/// Notification sent to pool subscribers when transactions enter the pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTxsNotify {
	pub txs: Vec<Transaction>,
}

/// Read access to account state at some block.
pub trait StateReader: Send + Sync {
	fn balance(&self, address: &Address) -> U256;

	fn nonce(&self, address: &Address) -> u64;

	fn code(&self, address: &Address) -> Vec<u8>;

	/// Whether the account has any balance, nonce or code.
	fn exists(&self, address: &Address) -> bool {
		!self.balance(address).is_zero() || self.nonce(address) > 0 || !self.code(address).is_empty()
	}
}
