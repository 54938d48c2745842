//! Utility parsers.

use nom::{
    branch::alt,
    character::complete::{line_ending, space0, space1},
    combinator::{eof, value},
    multi::{separated_list0, separated_list1},
    sequence::{delimited, pair},
};

use crate::parsers::{ParseResult, Span};

/// Consumes trailing blanks and the end of a line, or the end of the input.
pub fn end_of_line(input: Span) -> ParseResult<()> {
    value((), pair(space0, alt((line_ending, eof))))(input)
}

/// A combinator that takes a parser `inner` and produces a parser that
/// consumes exactly one line: leading blanks, `inner`, then trailing blanks
/// and the line ending.
pub fn line<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    delimited(space0, inner, end_of_line)
}

/// A combinator that takes a parser `inner` and produces a parser that
/// consumes a list separated by spaces or tabs (never line breaks),
/// returning the outputs of `inner`.
pub fn space_separated_list0<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, Vec<O>>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    separated_list0(space1, inner)
}

/// Like [`space_separated_list0`], but requires at least one element.
pub fn space_separated_list1<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, Vec<O>>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    separated_list1(space1, inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::StateName;
    use crate::parsers::{parse_state_name, Match};

    #[test]
    fn line_works() {
        let mut parser = line(parse_state_name);
        assert!(parser(Span::new("  Pula  \n")).is_exactly(StateName::new("Pula")));
        assert!(parser(Span::new("Pula")).is_exactly(StateName::new("Pula")));
    }

    #[test]
    fn line_stops_at_line_ending() {
        let mut parser = line(parse_state_name);
        let (remainder, name) = parser(Span::new("Pula\nBuje\n")).unwrap();
        assert_eq!(name, StateName::new("Pula"));
        assert_eq!(remainder.fragment(), &"Buje\n");
    }

    #[test]
    fn space_separated_list0_works() {
        let mut parser = space_separated_list0(parse_state_name);
        assert!(parser(Span::new("x y")).is_exactly(vec!["x".into(), "y".into()]));
        assert!(parser(Span::new("x\ty")).is_exactly(vec!["x".into(), "y".into()]));
        assert!(parser(Span::new("x")).is_exactly(vec!["x".into()]));
        assert!(parser(Span::new("")).is_exactly(vec![]));
    }

    #[test]
    fn space_separated_list1_works() {
        let mut parser = space_separated_list1(parse_state_name);
        assert!(parser(Span::new("x y")).is_exactly(vec!["x".into(), "y".into()]));
        assert!(parser(Span::new("x")).is_exactly(vec!["x".into()]));
        assert!(parser(Span::new("")).is_err());
    }

    #[test]
    fn lists_do_not_cross_lines() {
        let mut parser = space_separated_list1(parse_state_name);
        let (remainder, names) = parser(Span::new("x y\nz")).unwrap();
        assert_eq!(names, vec![StateName::new("x"), StateName::new("y")]);
        assert_eq!(remainder.fragment(), &"\nz");
    }
}
