//! Provides parsers for whole heuristic files.

use crate::parsed_types::HeuristicDescription;
use crate::parsers::{ignore_comment_lines, parse_heuristic_entry, ParseResult, Span};
use nom::character::complete::space0;
use nom::combinator::{eof, map};
use nom::multi::many0;
use nom::sequence::{preceded, terminated, tuple};

/// Parses a heuristic file: one `<state>: <value>` line per state, with
/// comment lines allowed anywhere. The whole input must be consumed.
///
/// ## Example
/// ```
/// # use statesearch::parsers::{parse_heuristic_description, preamble::*};
/// # use statesearch::parsed_types::{HeuristicDescription, HeuristicEntry};
/// let input = r#"# straight line distances
/// Pula: 57
/// Buje: 21
/// "#;
/// assert!(parse_heuristic_description(Span::new(input)).is_value(HeuristicDescription::new(vec![
///     HeuristicEntry::new("Pula".into(), 57.0),
///     HeuristicEntry::new("Buje".into(), 21.0),
/// ])));
///```
pub fn parse_heuristic_description<'a, T: Into<Span<'a>>>(
    input: T,
) -> ParseResult<'a, HeuristicDescription> {
    map(
        terminated(
            many0(preceded(ignore_comment_lines, parse_heuristic_entry)),
            tuple((ignore_comment_lines, space0, eof)),
        ),
        HeuristicDescription::new,
    )(input.into())
}

impl crate::parsers::Parser for HeuristicDescription {
    type Item = HeuristicDescription;

    /// Parses a heuristic file.
    ///
    /// ## See also
    /// See [`parse_heuristic_description`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_heuristic_description(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::Match;

    #[test]
    fn empty_file() {
        assert!(parse_heuristic_description(Span::new(""))
            .is_exactly(HeuristicDescription::new(vec![])));
        assert!(parse_heuristic_description(Span::new("# nothing here\n\n"))
            .is_exactly(HeuristicDescription::new(vec![])));
    }

    #[test]
    fn interleaved_comments() {
        let input = "A: 1\n# middle\nB: 2";
        let (_, description) = parse_heuristic_description(Span::new(input)).unwrap();
        assert_eq!(description.entries().len(), 2);
        assert_eq!(description.entries()[1].value(), 2.0);
    }

    #[test]
    fn malformed_line_is_an_error() {
        assert!(parse_heuristic_description(Span::new("A: 1\nB two\n")).is_err());
    }
}
