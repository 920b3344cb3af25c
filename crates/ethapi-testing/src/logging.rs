// SPDX-License-Identifier: GPL-3.0

//! Test log output.

/// Routes `log` records to the test harness output.
///
/// Verbosity follows `RUST_LOG`. Safe to call from every test: only the first
/// call installs the logger.
pub fn init() {
	let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn init_is_idempotent() {
		init();
		init();
		log::trace!("logger installed");
	}
}
