// SPDX-License-Identifier: GPL-3.0

//! Lachesis DAG types: events, their headers and per-epoch statistics.

use super::{Epoch, EventIdx, StakerId, Timestamp, Transaction};
use serde::{Deserialize, Serialize};
use sp_core::{H256, U256};
use std::fmt;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Hash identifying a DAG event.
///
/// The first four bytes carry the event epoch and the next four its Lamport
/// time, both big-endian.
#[derive(
	Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EventHash(pub H256);

impl EventHash {
	/// Builds a hash from a number right-aligned in the 32 bytes.
	pub fn from_low_u64_be(value: u64) -> Self {
		Self(H256::from_low_u64_be(value))
	}

	pub fn epoch(&self) -> Epoch {
		Epoch(u32::from_be_bytes(self.prefix(0)))
	}

	pub fn lamport(&self) -> u32 {
		u32::from_be_bytes(self.prefix(4))
	}

	fn prefix(&self, offset: usize) -> [u8; 4] {
		let bytes = self.0.as_bytes();
		[bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]]
	}
}

impl From<H256> for EventHash {
	fn from(hash: H256) -> Self {
		Self(hash)
	}
}

impl fmt::Display for EventHash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

/// Header fields of a DAG event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHeaderData {
	pub version: u32,
	pub epoch: Epoch,
	pub seq: EventIdx,
	pub frame: u32,
	pub is_root: bool,
	pub creator: StakerId,
	pub prev_epoch_hash: H256,
	pub parents: Vec<EventHash>,
	pub gas_power_used: u64,
	pub lamport: u32,
	pub claimed_time: Timestamp,
	pub median_time: Timestamp,
	pub tx_hash: H256,
	pub extra: Vec<u8>,
}

/// A signed DAG event with its payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
	pub header: EventHeaderData,
	pub sig: Vec<u8>,
	pub transactions: Vec<Transaction>,
}

/// Aggregated statistics of a sealed epoch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochStats {
	pub epoch: Epoch,
	pub start: Timestamp,
	pub end: Timestamp,
	pub total_fee: U256,
	pub total_base_reward_weight: U256,
	pub total_tx_reward_weight: U256,
}

/// Reference time used by time-to-finality reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum TtfMode {
	/// Measure from the moment the event arrived at this node.
	ArrivalTime,
	/// Measure from the time claimed by the event creator.
	ClaimedTime,
}
