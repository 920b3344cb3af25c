// SPDX-License-Identifier: GPL-3.0

//! Special Fee Contract (staking registry) records.

use super::{Address, Epoch, StakerId, Timestamp};
use serde::{Deserialize, Serialize};
use sp_core::U256;
use std::collections::BTreeMap;

/// A registered staker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staker {
	pub created_epoch: Epoch,
	pub created_time: Timestamp,
	/// Zero while the staker is active.
	pub deactivated_epoch: Epoch,
	pub deactivated_time: Timestamp,
	pub address: Address,
	pub stake_amount: U256,
	pub delegated_me: U256,
}

impl Staker {
	pub fn is_active(&self) -> bool {
		self.deactivated_epoch == Epoch(0)
	}

	/// Own stake plus everything delegated to the staker.
	pub fn total_stake(&self) -> U256 {
		self.stake_amount.saturating_add(self.delegated_me)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakerAndId {
	pub staker_id: StakerId,
	pub staker: Staker,
}

/// A delegation to a staker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegator {
	pub created_epoch: Epoch,
	pub created_time: Timestamp,
	pub deactivated_epoch: Epoch,
	pub deactivated_time: Timestamp,
	pub amount: U256,
	pub to_staker_id: StakerId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorAndAddr {
	pub delegator: Delegator,
	pub addr: Address,
}

/// Validator set of the current epoch with voting weights.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Validators {
	weights: BTreeMap<StakerId, U256>,
}

impl Validators {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the weight of a validator, replacing any previous weight.
	pub fn set(&mut self, id: StakerId, weight: U256) {
		self.weights.insert(id, weight);
	}

	pub fn get(&self, id: StakerId) -> Option<U256> {
		self.weights.get(&id).copied()
	}

	pub fn len(&self) -> usize {
		self.weights.len()
	}

	pub fn is_empty(&self) -> bool {
		self.weights.is_empty()
	}

	pub fn total_weight(&self) -> U256 {
		self.weights.values().fold(U256::zero(), |acc, w| acc.saturating_add(*w))
	}

	/// Validators in ascending id order.
	pub fn iter(&self) -> impl Iterator<Item = (StakerId, U256)> + '_ {
		self.weights.iter().map(|(id, w)| (*id, *w))
	}
}

impl FromIterator<(StakerId, U256)> for Validators {
	fn from_iter<I: IntoIterator<Item = (StakerId, U256)>>(iter: I) -> Self {
		Self { weights: iter.into_iter().collect() }
	}
}
