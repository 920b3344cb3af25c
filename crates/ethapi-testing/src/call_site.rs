// SPDX-License-Identifier: GPL-3.0

//! Resolution of the currently executing function's name.
//!
//! [`call_site!`](crate::call_site!) lets one generic accessor serve every
//! backend operation: the operation body never spells out its own name, it
//! asks for the function it is expanded in.

/// Name of the item the resolver nests inside the calling function.
#[doc(hidden)]
pub const MARKER: &str = "__call_site";

const CLOSURE: &str = "{{closure}}";

/// Expands to the unqualified name of the enclosing function, as a `&'static str`.
///
/// Resolves to `""` inside closures, where no stable name exists.
///
/// ```
/// use ethapi_testing::call_site;
///
/// fn get_td() -> &'static str {
/// 	call_site!()
/// }
///
/// assert_eq!(get_td(), "get_td");
/// ```
#[macro_export]
macro_rules! call_site {
	() => {{
		fn __call_site() {}
		$crate::call_site::resolve(::std::any::type_name_of_val(&__call_site))
	}};
}

/// Reduces the path of the nested marker item to its enclosing function name.
///
/// `crate::module::<impl Trait for Type>::method::__call_site` becomes
/// `method`. Returns `""` when no enclosing function remains or the enclosing
/// scope is an anonymous closure.
pub fn resolve(path: &'static str) -> &'static str {
	let path = match path.strip_suffix(MARKER) {
		Some(rest) => rest.strip_suffix("::").unwrap_or(rest),
		None => path,
	};
	match path.rsplit("::").next() {
		Some(CLOSURE | "") | None => "",
		Some(name) => name,
	}
}
