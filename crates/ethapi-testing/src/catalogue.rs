// SPDX-License-Identifier: GPL-3.0

//! Typed description of every backend operation.
//!
//! Each operation gets a zero-sized marker in [`ops`](crate::ops) implementing
//! [`Operation`]. The marker ties the operation name to its declared result
//! types, so typed registrations are checked by the compiler and by-name
//! registrations can be checked against the [`OperationSpec`] catalogue
//! before anything is stored.

use crate::{
	error::FixtureError,
	value::{ProjectionError, Value},
};

/// Compile-time description of one backend operation.
pub trait Operation {
	/// The backend method name, used as the result table key.
	const NAME: &'static str;
	/// Whether the operation returns a `Result`.
	const FALLIBLE: bool;
	/// Number of values returned besides the error.
	const ARITY: usize;
	/// The declared results: the bare type for one value, a tuple for several,
	/// `()` for none.
	type Values: Send + Sync + 'static;

	/// Splits results into their positional values.
	fn into_values(values: Self::Values) -> Vec<Value>;

	/// Checks `values` has exactly the declared arity and types.
	fn check(values: &[Value]) -> Result<(), ProjectionError>;

	/// Decodes the positional values from a JSON array.
	fn decode(json: serde_json::Value) -> Result<Vec<Value>, FixtureError>;
}

/// Runtime view of an [`Operation`], looked up by name.
#[derive(Debug, Clone, Copy)]
pub struct OperationSpec {
	pub name: &'static str,
	pub fallible: bool,
	pub arity: usize,
	check: fn(&[Value]) -> Result<(), ProjectionError>,
	decode: fn(serde_json::Value) -> Result<Vec<Value>, FixtureError>,
}

impl OperationSpec {
	pub const fn of<O: Operation>() -> Self {
		Self {
			name: O::NAME,
			fallible: O::FALLIBLE,
			arity: O::ARITY,
			check: O::check,
			decode: O::decode,
		}
	}

	pub fn check(&self, values: &[Value]) -> Result<(), ProjectionError> {
		(self.check)(values)
	}

	pub fn decode(&self, json: serde_json::Value) -> Result<Vec<Value>, FixtureError> {
		(self.decode)(json)
	}
}

/// Every backend operation, in interface order.
pub fn all() -> &'static [OperationSpec] {
	crate::ops::CATALOGUE
}

/// Looks an operation up by its method name.
pub fn find(name: &str) -> Option<&'static OperationSpec> {
	all().iter().find(|op| op.name == name)
}

/// Unpacks the JSON array holding the values of `operation`.
#[doc(hidden)]
pub fn json_items(
	operation: &'static str,
	json: serde_json::Value,
	expected: usize,
) -> Result<std::vec::IntoIter<serde_json::Value>, FixtureError> {
	let serde_json::Value::Array(items) = json else {
		return Err(FixtureError::NotAnArray(operation));
	};
	if items.len() != expected {
		return Err(FixtureError::Arity { operation, expected, found: items.len() });
	}
	Ok(items.into_iter())
}

/// Declares operation markers and the catalogue.
///
/// Each entry reads `name(Result, Types) flags;` where the flags are
/// `fallible` (returns a `Result`) and `opaque` (results cannot be decoded
/// from JSON).
macro_rules! operations {
	(@values) => { () };
	(@values $out:ty) => { $out };
	(@values $($out:ty),+) => { ($($out),+) };

	(@pack $values:ident;) => {{
		let () = $values;
		Vec::new()
	}};
	(@pack $values:ident; $out:ty) => { vec![$crate::value::value($values)] };
	(@pack $values:ident; $($out:ty),+) => { $crate::value::IntoValues::into_values($values) };

	(@count) => { 0usize };
	(@count $head:tt $($tail:tt)*) => { 1usize + operations!(@count $($tail)*) };

	(@has $want:ident) => { false };
	(@has fallible fallible $($rest:ident)*) => { true };
	(@has opaque opaque $($rest:ident)*) => { true };
	(@has $want:ident $other:ident $($rest:ident)*) => { operations!(@has $want $($rest)*) };

	(@decode ; $name:ident $json:ident; $($out:ty),*) => {{
		#[allow(unused_mut, unused_variables)]
		let mut items = $crate::catalogue::json_items(
			stringify!($name),
			$json,
			operations!(@count $($out)*),
		)?;
		Ok(vec![$($crate::value::value(
			serde_json::from_value::<$out>(items.next().unwrap_or_default())?
		)),*])
	}};
	(@decode opaque $($rest:ident)* ; $name:ident $json:ident; $($out:ty),*) => {{
		let _ = $json;
		Err($crate::error::FixtureError::Opaque(stringify!($name)))
	}};
	(@decode $other:ident $($rest:ident)* ; $name:ident $json:ident; $($out:ty),*) => {
		operations!(@decode $($rest)* ; $name $json; $($out),*)
	};

	($(
		$(#[$meta:meta])*
		$name:ident($($out:ty),*) $($flag:ident)*;
	)*) => {
		paste::paste! {
			$(
				$(#[$meta])*
				#[derive(Debug, Clone, Copy, Default)]
				pub struct [<$name:camel>];

				impl $crate::catalogue::Operation for [<$name:camel>] {
					const NAME: &'static str = stringify!($name);
					const FALLIBLE: bool = operations!(@has fallible $($flag)*);
					const ARITY: usize = operations!(@count $($out)*);
					type Values = operations!(@values $($out),*);

					fn into_values(values: Self::Values) -> Vec<$crate::value::Value> {
						operations!(@pack values; $($out),*)
					}

					fn check(
						values: &[$crate::value::Value],
					) -> Result<(), $crate::value::ProjectionError> {
						#[allow(unused_mut)]
						let mut cursor = $crate::value::Cursor::new(values);
						$(cursor.expect::<$out>()?;)*
						cursor.finish()
					}

					fn decode(
						json: serde_json::Value,
					) -> Result<Vec<$crate::value::Value>, $crate::error::FixtureError> {
						operations!(@decode $($flag)* ; $name json; $($out),*)
					}
				}
			)*

			pub(crate) static CATALOGUE: &[$crate::catalogue::OperationSpec] = &[
				$($crate::catalogue::OperationSpec::of::<[<$name:camel>]>(),)*
			];
		}
	};
}

pub(crate) use operations;
