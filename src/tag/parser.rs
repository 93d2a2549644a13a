//! Annotation tag parser

use super::types::Directive;
use crate::error::{Error, Result};

const ESCAPE: char = '\\';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NextDirective,
    Key,
    Value,
}

/// Parse an annotation string into its ordered directive list
///
/// # Examples
///
/// ```
/// use schemadoc::tag::{parse_tag, Directive};
///
/// let directives = parse_tag("required desc(test()) pattern(^[A-Z](.*))").unwrap();
/// assert_eq!(
///     directives,
///     vec![
///         Directive::bare("required"),
///         Directive::new("desc", "test()"),
///         Directive::new("pattern", "^[A-Z](.*)"),
///     ]
/// );
/// ```
pub fn parse_tag(content: &str) -> Result<Vec<Directive>> {
    let mut directives = Vec::new();
    let mut state = State::NextDirective;
    let mut depth = 0usize;
    let mut key = String::new();
    let mut value = String::new();

    for ch in content.chars() {
        match state {
            State::NextDirective => {
                if ch != ' ' {
                    state = State::Key;
                    depth = 0;
                    key.push(ch);
                }
            }
            State::Key => match ch {
                ' ' => {
                    directives.push(Directive::new(
                        std::mem::take(&mut key),
                        std::mem::take(&mut value),
                    ));
                    state = State::NextDirective;
                }
                '(' => state = State::Value,
                _ => key.push(ch),
            },
            State::Value => match ch {
                '(' | ')' if value.ends_with(ESCAPE) => {
                    value.pop();
                    value.push(ch);
                }
                '(' => {
                    depth += 1;
                    value.push(ch);
                }
                ')' if depth == 0 => {
                    directives.push(Directive::new(
                        std::mem::take(&mut key),
                        std::mem::take(&mut value),
                    ));
                    state = State::NextDirective;
                }
                ')' => {
                    depth -= 1;
                    value.push(ch);
                }
                _ => value.push(ch),
            },
        }
    }

    match state {
        State::NextDirective => {}
        // A lone bare key without a trailing space
        State::Key if directives.is_empty() => directives.push(Directive::new(key, value)),
        _ => return Err(Error::malformed_tag(content)),
    }

    Ok(directives)
}
