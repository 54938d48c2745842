use crate::parsers::{end_of_line, ParseResult, Span};
use nom::branch::alt;
use nom::bytes::complete::is_not;
use nom::character::complete::{char, line_ending, space0};
use nom::combinator::{opt, value};
use nom::multi::many0;
use nom::sequence::{pair, tuple};

/// Consumes any number of comment lines (`# ...`) and blank lines.
pub fn ignore_comment_lines<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value(
        (),
        many0(alt((
            value(
                (),
                tuple((space0, char('#'), opt(is_not("\r\n")), end_of_line)),
            ),
            value((), pair(space0, line_ending)),
        ))),
    )(input.into())
}
