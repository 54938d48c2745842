//! Helpers for checking parser output, used by unit and doc tests.

use crate::parsers::ParseResult;

pub trait UnwrapValue<T> {
    /// Whether the parser succeeded with `value`, ignoring any remaining
    /// input.
    fn is_value(&self, value: T) -> bool;

    fn unwrap_value(self) -> T;
}

impl<'a, T: PartialEq> UnwrapValue<T> for ParseResult<'a, T> {
    fn is_value(&self, value: T) -> bool {
        match self {
            Ok((_, parsed)) => *parsed == value,
            Err(_) => false,
        }
    }

    fn unwrap_value(self) -> T {
        match self {
            Ok((_, parsed)) => parsed,
            Err(e) => panic!("parser failed: {:?}", e),
        }
    }
}

#[cfg(test)]
pub(crate) trait Match<T> {
    /// Whether the parser succeeded with `value` and consumed all input.
    fn is_exactly(&self, value: T) -> bool;
}

#[cfg(test)]
impl<'a, T: PartialEq> Match<T> for ParseResult<'a, T> {
    fn is_exactly(&self, value: T) -> bool {
        match self {
            Ok((remainder, parsed)) => remainder.is_empty() && *parsed == value,
            Err(_) => false,
        }
    }
}
