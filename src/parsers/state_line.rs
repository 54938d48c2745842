//! Provides parsers for state lines.

use crate::parsed_types::StateLine;
use crate::parsers::{line, parse_edge, parse_state_name, space_separated_list0, ParseResult, Span};
use nom::character::complete::{char, space0};
use nom::combinator::map;
use nom::sequence::{preceded, terminated, tuple};

/// Parses a state line, i.e. `<state>: <target>,<cost> ...`. A state without
/// outgoing edges is written as `<state>:`.
///
/// ## Example
/// ```
/// # use statesearch::parsers::{parse_state_line, preamble::*};
/// # use statesearch::parsed_types::{Edge, StateLine};
/// assert!(parse_state_line(Span::new("Pula: Barban,28 Vodnjan,12\n")).is_value(StateLine::new(
///     "Pula".into(),
///     vec![Edge::new("Barban".into(), 28.0), Edge::new("Vodnjan".into(), 12.0)],
/// )));
/// assert!(parse_state_line(Span::new("Umag:")).is_value(StateLine::new("Umag".into(), vec![])));
///
/// assert!(parse_state_line(Span::new("Umag")).is_err());
/// assert!(parse_state_line(Span::new("Pula: Barban")).is_err());
///```
pub fn parse_state_line<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, StateLine> {
    map(
        line(tuple((
            terminated(parse_state_name, char(':')),
            preceded(space0, space_separated_list0(parse_edge)),
        ))),
        |(name, edges)| StateLine::new(name, edges),
    )(input.into())
}

impl crate::parsers::Parser for StateLine {
    type Item = StateLine;

    /// Parses a state line.
    ///
    /// ## See also
    /// See [`parse_state_line`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_state_line(input)
    }
}
