//! Provides parsers for heuristic entries.

use crate::parsed_types::HeuristicEntry;
use crate::parsers::{line, parse_cost, parse_state_name, ParseResult, Span};
use nom::character::complete::{char, space0};
use nom::combinator::map;
use nom::sequence::{pair, separated_pair};

/// Parses a heuristic entry, i.e. `<state>: <value>`.
///
/// ## Example
/// ```
/// # use statesearch::parsers::{parse_heuristic_entry, preamble::*};
/// # use statesearch::parsed_types::HeuristicEntry;
/// assert!(parse_heuristic_entry(Span::new("Pula: 57")).is_value(HeuristicEntry::new("Pula".into(), 57.0)));
/// assert!(parse_heuristic_entry(Span::new("Buje:0.5\n")).is_value(HeuristicEntry::new("Buje".into(), 0.5)));
///
/// assert!(parse_heuristic_entry(Span::new("Pula 57")).is_err());
/// assert!(parse_heuristic_entry(Span::new("Pula:")).is_err());
///```
pub fn parse_heuristic_entry<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, HeuristicEntry> {
    map(
        line(separated_pair(
            parse_state_name,
            pair(char(':'), space0),
            parse_cost,
        )),
        |(state, value)| HeuristicEntry::new(state, value),
    )(input.into())
}

impl crate::parsers::Parser for HeuristicEntry {
    type Item = HeuristicEntry;

    /// Parses a heuristic entry.
    ///
    /// ## See also
    /// See [`parse_heuristic_entry`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_heuristic_entry(input)
    }
}
