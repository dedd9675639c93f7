//! Combinators for optional values.
//!
//! Optional declaration fields (a category name, a library prefix, a
//! superclass) are carried as [`Option`] all the way into rendering. The
//! free functions here give the model a uniform, argument-order-stable
//! vocabulary for working with them: the function comes first and the value
//! last, so they compose well inside iterator chains.

/// Wrap a value as present.
pub fn present<T>(value: T) -> Option<T> {
    Some(value)
}

/// An absent value.
pub fn absent<T>() -> Option<T> {
    None
}

/// Alias of [`present`].
pub fn unit<T>(value: T) -> Option<T> {
    present(value)
}

/// Dispatch to exactly one branch depending on whether `value` is present.
pub fn match_with<T, U>(
    on_present: impl FnOnce(T) -> U,
    on_absent: impl FnOnce() -> U,
    value: Option<T>,
) -> U {
    match value {
        Some(v) => on_present(v),
        None => on_absent(),
    }
}

/// Apply `f` to a present value; absence is propagated.
pub fn map<T, U>(f: impl FnOnce(T) -> U, value: Option<T>) -> Option<U> {
    match_with(|v| present(f(v)), absent, value)
}

/// Apply an optional-returning `f` to a present value; absence is propagated.
pub fn bind<T, U>(f: impl FnOnce(T) -> Option<U>, value: Option<T>) -> Option<U> {
    match_with(f, absent, value)
}

/// Drop absent entries and unwrap present ones, preserving order.
pub fn compact<T>(values: impl IntoIterator<Item = Option<T>>) -> Vec<T> {
    values.into_iter().flatten().collect()
}
