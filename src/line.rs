use winnow::combinator::separated_pair;
use winnow::error::StrContext;
use winnow::prelude::*;
use winnow::token::{rest, take_till};

use crate::error::LineError;

/// A single classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'s> {
    /// Blank or `#` comment.
    Skip,
    /// `key = value`, both trimmed. The value may be empty.
    Pair { key: &'s str, value: &'s str },
}

impl<'s> Line<'s> {
    /// Classify an already trimmed line.
    pub(crate) fn parse(text: &'s str) -> Result<Line<'s>, LineError> {
        if text.is_empty() || text.starts_with('#') {
            return Ok(Line::Skip);
        }

        let (key, value) = key_value
            .parse(text)
            .map_err(|_| LineError::MissingEquals)?;
        if key.is_empty() {
            return Err(LineError::EmptyKey);
        }

        Ok(Line::Pair { key, value })
    }
}

// Winnow parsers

/// Split on the first `=`, trimming both sides.
fn key_value<'s>(input: &mut &'s str) -> ModalResult<(&'s str, &'s str)> {
    separated_pair(
        take_till(0.., '='),
        '='.context(StrContext::Label("'='")),
        rest,
    )
    .map(|(key, value): (&'s str, &'s str)| (key.trim(), value.trim()))
    .parse_next(input)
}
