//! Bracket-aware token splitting over debug-representation text.
//!
//! A token is the largest prefix of the buffer that is bracket-balanced at
//! its own top level and ends at a depth-zero comma (or at the end of the
//! buffer). Splitting never allocates; tokens borrow from the input.

use crate::error::ReprError;

// ──────────────────────────────────────────────
// Token splitting
// ──────────────────────────────────────────────

fn matching_opener(closer: char) -> char {
    match closer {
        ')' => '(',
        '}' => '{',
        _ => '[',
    }
}

/// Returns the next top-level token of `buf`: the prefix ending at the first
/// depth-zero comma, or the whole buffer if no such comma exists.
///
/// An empty or blank buffer is returned unchanged, signaling "no more
/// tokens" to the caller. A closer that does not match the innermost open
/// bracket, or a scan that ends with brackets still open, is malformed.
pub fn split_token(buf: &str) -> Result<&str, ReprError> {
    if buf.trim().is_empty() {
        return Ok(buf);
    }

    let mut stack: Vec<char> = Vec::new();
    for (i, c) in buf.char_indices() {
        match c {
            '(' | '{' | '[' => stack.push(c),
            ')' | '}' | ']' => match stack.last() {
                Some(&top) if top == matching_opener(c) => {
                    stack.pop();
                }
                _ => {
                    return Err(ReprError::MalformedInput {
                        text: buf.to_owned(),
                    })
                }
            },
            ',' if stack.is_empty() => return Ok(&buf[..i]),
            _ => {}
        }
    }

    if stack.is_empty() {
        Ok(buf)
    } else {
        Err(ReprError::MalformedInput {
            text: buf.to_owned(),
        })
    }
}

/// Splits a `name=value` token on its first `=`.
///
/// Only object-field and mapping-entry tokens go through here; array and
/// sequence element tokens are values on their own and bypass this.
pub fn parse_assignment(token: &str) -> Result<(&str, &str), ReprError> {
    match token.split_once('=') {
        Some((name, raw_value)) => Ok((name, raw_value)),
        None => Err(ReprError::MalformedInput {
            text: token.to_owned(),
        }),
    }
}

/// Consumes `token` and one following comma from the front of `buf`.
pub(crate) fn consume_token<'a>(buf: &'a str, token: &str) -> &'a str {
    let rest = buf.strip_prefix(token).unwrap_or(buf).trim_start();
    rest.strip_prefix(',').unwrap_or(rest).trim_start()
}

// ──────────────────────────────────────────────
// Token iteration
// ──────────────────────────────────────────────

/// Iterator over the top-level tokens of a buffer.
///
/// Yields each token in order; a bracket error ends iteration with that
/// error. Blank buffers yield nothing.
pub struct Tokens<'a> {
    rest: &'a str,
}

/// Iterates the top-level comma-delimited tokens of `buf`.
pub fn tokens(buf: &str) -> Tokens<'_> {
    Tokens { rest: buf.trim() }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<&'a str, ReprError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let token = match split_token(self.rest) {
            Ok(token) => token,
            Err(e) => {
                self.rest = "";
                return Some(Err(e));
            }
        };
        if token.trim().is_empty() {
            self.rest = "";
            return None;
        }
        self.rest = consume_token(self.rest, token);
        Some(Ok(token))
    }
}

// ──────────────────────────────────────────────
// Prefix and bracket stripping
// ──────────────────────────────────────────────

/// Strips the rendered class-name prefix if `text` starts with it.
/// Absence of the prefix is a no-op, which makes stripping idempotent.
pub(crate) fn strip_class_prefix<'a>(name: &str, text: &'a str) -> &'a str {
    match text.strip_prefix(name) {
        Some(rest) => rest.trim(),
        None => text,
    }
}

/// Strips one `open`/`close` pair from the ends of `text`, trimming
/// surrounding whitespace. Each side is stripped independently.
pub(crate) fn strip_pair(text: &str, open: char, close: char) -> &str {
    let text = text.trim();
    let text = match text.strip_prefix(open) {
        Some(rest) => rest.trim(),
        None => text,
    };
    match text.strip_suffix(close) {
        Some(rest) => rest.trim(),
        None => text,
    }
}

/// Strips one layer of enclosing brackets from an object body, tolerating
/// either `(...)` or `{...}`.
pub(crate) fn strip_enclosing_brackets(text: &str) -> &str {
    strip_pair(strip_pair(text, '(', ')'), '{', '}')
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
