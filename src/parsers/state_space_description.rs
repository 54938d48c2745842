//! Provides parsers for whole state space files.

use crate::parsed_types::StateSpaceDescription;
use crate::parsers::{
    ignore_comment_lines, line, parse_state_line, parse_state_name, space_separated_list1,
    ParseResult, Span,
};
use nom::character::complete::space0;
use nom::combinator::{eof, map};
use nom::multi::many0;
use nom::sequence::{preceded, terminated, tuple};

/// Parses a state space file: the start state, the goal states, then one
/// line per state. Comment lines are allowed anywhere. The whole input must
/// be consumed.
///
/// ## Example
/// ```
/// # use statesearch::parsers::{parse_state_space_description, preamble::*};
/// # use statesearch::parsed_types::StateName;
/// let input = r#"# a tiny graph
/// A
/// C
/// A: B,1 C,4
/// B: C,1
/// C:
/// "#;
/// let description = parse_state_space_description(Span::new(input)).unwrap_value();
/// assert_eq!(description.start(), StateName::new("A"));
/// assert_eq!(description.goals(), &vec![StateName::new("C")]);
/// assert_eq!(description.states().len(), 3);
///```
pub fn parse_state_space_description<'a, T: Into<Span<'a>>>(
    input: T,
) -> ParseResult<'a, StateSpaceDescription> {
    map(
        terminated(
            tuple((
                preceded(ignore_comment_lines, line(parse_state_name)),
                preceded(
                    ignore_comment_lines,
                    line(space_separated_list1(parse_state_name)),
                ),
                many0(preceded(ignore_comment_lines, parse_state_line)),
            )),
            tuple((ignore_comment_lines, space0, eof)),
        ),
        |(start, goals, states)| StateSpaceDescription::new(start, goals, states),
    )(input.into())
}

impl crate::parsers::Parser for StateSpaceDescription {
    type Item = StateSpaceDescription;

    /// Parses a state space file.
    ///
    /// ## See also
    /// See [`parse_state_space_description`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_state_space_description(input)
    }
}
