//! Provides parsers for edges.

use crate::parsed_types::Edge;
use crate::parsers::{parse_cost, parse_state_name, ParseResult, Span};
use nom::character::complete::char;
use nom::combinator::map;
use nom::sequence::separated_pair;

/// Parses an edge, i.e. `<target>,<cost>`.
///
/// ## Example
/// ```
/// # use statesearch::parsers::{parse_edge, preamble::*};
/// # use statesearch::parsed_types::Edge;
/// assert!(parse_edge(Span::new("Barban,28")).is_value(Edge::new("Barban".into(), 28.0)));
/// assert!(parse_edge(Span::new("x,0.5")).is_value(Edge::new("x".into(), 0.5)));
///
/// assert!(parse_edge(Span::new("Barban")).is_err());
/// assert!(parse_edge(Span::new("Barban, 28")).is_err());
/// assert!(parse_edge(Span::new(",28")).is_err());
///```
pub fn parse_edge<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Edge> {
    map(
        separated_pair(parse_state_name, char(','), parse_cost),
        |(target, cost)| Edge::new(target, cost),
    )(input.into())
}

impl crate::parsers::Parser for Edge {
    type Item = Edge;

    /// Parses an edge.
    ///
    /// ## See also
    /// See [`parse_edge`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_edge(input)
    }
}
