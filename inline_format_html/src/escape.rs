// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Cow;

/// Escapes `text` for use as HTML character data.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text, |c| matches!(c, '&' | '<' | '>' | '\u{a0}'))
}

/// Escapes `value` for use inside a double-quoted attribute.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape(value, |c| matches!(c, '&' | '"' | '<' | '>' | '\u{a0}'))
}

fn escape(input: &str, needs_escape: impl Fn(char) -> bool) -> Cow<'_, str> {
    let Some(first) = input.find(&needs_escape) else {
        return Cow::Borrowed(input);
    };
    let mut out = String::with_capacity(input.len() + 8);
    out.push_str(&input[..first]);
    for c in input[first..].chars() {
        match c {
            c if !needs_escape(c) => out.push(c),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
