//! Provides parsers for state names.

use crate::parsed_types::StateName;
use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::take_till1;
use nom::combinator::map;

/// Parses a state name, i.e. any non-empty run of characters other than
/// whitespace, `:` and `,`.
///
/// ## Example
/// ```
/// # use statesearch::parsers::{parse_state_name, preamble::*};
/// assert!(parse_state_name(Span::new("Pula")).is_value("Pula".into()));
/// assert!(parse_state_name(Span::new("enroll_artificial_intelligence")).is_value("enroll_artificial_intelligence".into()));
/// assert!(parse_state_name(Span::new("123_46x_758")).is_value("123_46x_758".into()));
/// assert!(parse_state_name(Span::new("Pula: Barban,28")).is_value("Pula".into()));
/// assert!(parse_state_name(Span::new("Barban,28")).is_value("Barban".into()));
///
/// assert!(parse_state_name(Span::new("")).is_err());
/// assert!(parse_state_name(Span::new(" Pula")).is_err());
/// assert!(parse_state_name(Span::new(": Pula")).is_err());
///```
pub fn parse_state_name<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, StateName> {
    map(
        take_till1(|c: char| c.is_whitespace() || c == ':' || c == ','),
        |name: Span<'a>| StateName::new(name.fragment()),
    )(input.into())
}

impl crate::parsers::Parser for StateName {
    type Item = StateName;

    /// Parses a state name.
    ///
    /// ## Example
    /// ```
    /// # use statesearch::parsers::Parser;
    /// # use statesearch::parsed_types::StateName;
    /// let (_, name) = StateName::parse("Pula").unwrap();
    /// assert_eq!(name, "Pula".into());
    ///```
    ///
    /// ## See also
    /// See [`parse_state_name`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_state_name(input)
    }
}
