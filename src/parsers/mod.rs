mod comments;
mod cost;
mod edge;
mod heuristic_description;
mod heuristic_entry;
mod state_line;
mod state_name;
mod state_space_description;
mod test_helpers;
mod utilities;

#[cfg(test)]
pub(crate) use test_helpers::Match;
pub use test_helpers::UnwrapValue;

pub trait Parser {
    type Item;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item>;

    fn parse_span(input: Span) -> ParseResult<Self::Item> {
        Self::parse(input)
    }

    /// Parse a string slice into the desired type. Discards any remaining
    /// input.
    fn from_str(input: &str) -> Result<Self::Item, nom::Err<ParseError>> {
        let (_, value) = Self::parse(input)?;
        Ok(value)
    }
}

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

/// Re-exports commonly used types.
pub mod preamble {
    pub use crate::parsers::test_helpers::UnwrapValue;
    pub use crate::parsers::Parser;
    pub use crate::parsers::{ParseError, ParseResult, Span};
}

/// Returns the 1-based line of `text` holding the furthest point the parser
/// reached before failing, if the error carries a position.
pub fn error_line(text: &str, error: &nom::Err<ParseError>) -> Option<usize> {
    match error {
        nom::Err::Error(e) | nom::Err::Failure(e) => nom_greedyerror::error_position(e)
            .map(|offset| text[..offset.min(text.len())].matches('\n').count() + 1),
        nom::Err::Incomplete(_) => None,
    }
}

// Parsers
pub use comments::ignore_comment_lines;
pub use cost::parse_cost;
pub use edge::parse_edge;
pub use heuristic_description::parse_heuristic_description;
pub use heuristic_entry::parse_heuristic_entry;
pub use state_line::parse_state_line;
pub use state_name::parse_state_name;
pub use state_space_description::parse_state_space_description;

pub(crate) use utilities::{end_of_line, line, space_separated_list0, space_separated_list1};
