//! Provides parsers for edge costs and heuristic values.

use crate::parsers::{ParseResult, Span};
use nom::combinator::map_opt;
use nom::number::complete::recognize_float;

/// Parses a decimal number, e.g. `28`, `2.5` or `1e3`.
///
/// ## Example
/// ```
/// # use statesearch::parsers::{parse_cost, preamble::*};
/// assert!(parse_cost(Span::new("28")).is_value(28.0));
/// assert!(parse_cost(Span::new("2.5")).is_value(2.5));
/// assert!(parse_cost(Span::new("1e3")).is_value(1000.0));
/// assert!(parse_cost(Span::new("0")).is_value(0.0));
///
/// assert!(parse_cost(Span::new("")).is_err());
/// assert!(parse_cost(Span::new("abc")).is_err());
///```
pub fn parse_cost<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, f64> {
    map_opt(recognize_float, |number: Span<'a>| {
        number.fragment().parse::<f64>().ok()
    })(input.into())
}
