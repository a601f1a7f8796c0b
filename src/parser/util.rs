use pest::error::{Error, ErrorVariant};
use pest::iterators::Pair;

use super::api::Rule;

/// Builds a parse error for a pair that appeared where the grammar should
/// not have allowed it. The tag identifies the call site.
pub(crate) fn get_unexpected_error(tag: u32, pair: &Pair<Rule>) -> Error<Rule> {
    Error::new_from_span(
        ErrorVariant::CustomError {
            message: format!("Unexpected rule {:?} (#{})", pair.as_rule(), tag),
        },
        pair.as_span(),
    )
}

/// Resolves the escape sequences of a string literal body.
pub(crate) fn unescape_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some(other) => out.push(other),
                None => {}
            }
        } else {
            out.push(c);
        }
    }
    out
}
