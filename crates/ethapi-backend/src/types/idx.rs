// SPDX-License-Identifier: GPL-3.0

//! Index newtypes used by the Lachesis consensus.

use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

macro_rules! index_type {
	($(#[$meta:meta])* $name:ident($inner:ty)) => {
		$(#[$meta])*
		#[derive(
			Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
		)]
		#[serde(transparent)]
		pub struct $name(pub $inner);

		impl From<$inner> for $name {
			fn from(value: $inner) -> Self {
				Self(value)
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				self.0.fmt(f)
			}
		}
	};
}

index_type!(
	/// Consensus epoch number.
	Epoch(u32)
);
index_type!(
	/// Finalized block number.
	BlockIdx(u64)
);
index_type!(
	/// Sequence number of an event within its creator's chain.
	EventIdx(u32)
);
index_type!(
	/// Identifier of a registered staker (validator).
	StakerId(u32)
);
index_type!(
	/// Unix time in nanoseconds.
	Timestamp(u64)
);

impl Timestamp {
	/// Converts a duration since the Unix epoch, saturating at `u64::MAX` nanoseconds.
	pub fn from_unix(since_epoch: Duration) -> Self {
		Self(u64::try_from(since_epoch.as_nanos()).unwrap_or(u64::MAX))
	}

	/// The time elapsed since the Unix epoch.
	pub fn as_duration(&self) -> Duration {
		Duration::from_nanos(self.0)
	}
}
