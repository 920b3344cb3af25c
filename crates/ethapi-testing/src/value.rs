// SPDX-License-Identifier: GPL-3.0

//! Opaque canned values and their positional projection.
//!
//! A registration stores values type-erased, in declaration order. An
//! invocation walks them with a [`Cursor`], downcasting each position to the
//! type the operation declares.

use std::{
	any::{Any, type_name},
	sync::Arc,
};
use thiserror::Error;

/// A single type-erased result value.
pub type Value = Arc<dyn Any + Send + Sync>;

/// Erases `value` for storage in a result table.
pub fn value<T: Any + Send + Sync>(value: T) -> Value {
	Arc::new(value)
}

/// Builds a `Vec<Value>` from a list of expressions.
///
/// ```
/// use ethapi_testing::values;
///
/// let values = values![2usize, 3usize];
/// assert_eq!(values.len(), 2);
/// ```
#[macro_export]
macro_rules! values {
	($($value:expr),* $(,)?) => {
		vec![$($crate::value::value($value)),*]
	};
}

/// Errors raised when stored values do not fit the declared result types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
	/// Fewer values were registered than the operation returns.
	#[error("no value at position {position} ({available} registered)")]
	Missing { position: usize, available: usize },
	/// The value at `position` has another type than declared.
	#[error("value at position {position} is not a `{expected}`")]
	Mismatch { position: usize, expected: &'static str },
	/// More values were registered than the operation returns.
	#[error("expected {expected} value(s), found {found}")]
	Unexpected { expected: usize, found: usize },
}

/// Reads stored values one position at a time.
pub struct Cursor<'a> {
	values: &'a [Value],
	position: usize,
}

impl<'a> Cursor<'a> {
	pub fn new(values: &'a [Value]) -> Self {
		Self { values, position: 0 }
	}

	/// Clones the value at the current position as a `T` and advances.
	pub fn take<T: Any + Clone>(&mut self) -> Result<T, ProjectionError> {
		self.next::<T>().cloned()
	}

	/// Checks the value at the current position is a `T` and advances.
	pub fn expect<T: Any>(&mut self) -> Result<(), ProjectionError> {
		self.next::<T>().map(|_| ())
	}

	/// Fails if values remain past the current position.
	pub fn finish(self) -> Result<(), ProjectionError> {
		if self.position == self.values.len() {
			Ok(())
		} else {
			Err(ProjectionError::Unexpected { expected: self.position, found: self.values.len() })
		}
	}

	fn next<T: Any>(&mut self) -> Result<&'a T, ProjectionError> {
		let position = self.position;
		let stored = self
			.values
			.get(position)
			.ok_or(ProjectionError::Missing { position, available: self.values.len() })?;
		let typed = stored
			.downcast_ref::<T>()
			.ok_or(ProjectionError::Mismatch { position, expected: type_name::<T>() })?;
		self.position += 1;
		Ok(typed)
	}
}

/// Splits a tuple of results into stored values.
pub trait IntoValues {
	fn into_values(self) -> Vec<Value>;
}

/// Rebuilds a tuple of results from stored values.
///
/// Trailing values past the tuple arity are ignored.
pub trait FromValues: Sized {
	fn from_values(values: &[Value]) -> Result<Self, ProjectionError>;
}

impl IntoValues for () {
	fn into_values(self) -> Vec<Value> {
		Vec::new()
	}
}

impl FromValues for () {
	fn from_values(_: &[Value]) -> Result<Self, ProjectionError> {
		Ok(())
	}
}

macro_rules! tuple_values {
	($($name:ident $var:ident),+) => {
		impl<$($name: Any + Send + Sync),+> IntoValues for ($($name,)+) {
			fn into_values(self) -> Vec<Value> {
				let ($($var,)+) = self;
				vec![$(value($var)),+]
			}
		}

		impl<$($name: Any + Clone),+> FromValues for ($($name,)+) {
			fn from_values(values: &[Value]) -> Result<Self, ProjectionError> {
				let mut cursor = Cursor::new(values);
				Ok(($(cursor.take::<$name>()?,)+))
			}
		}
	};
}

tuple_values!(A a, B b);
tuple_values!(A a, B b, C c);
tuple_values!(A a, B b, C c, D d);
