// Copyright 2023 宋昊文
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

/// Collect a HTTP quoted-string (RFC 9110 section 5.6.4) starting the search at `position`
///
/// The returned slice spans the opening quote through the closing quote, escape sequences
/// are left untouched. On success `position` is moved just past the closing quote, otherwise
/// it is left unchanged.
///
/// # Examples
///
/// ```
/// let a = b"foo=\"abc\" bar";
/// let mut position = 4;
///
/// let token = rust_http_cache_core::internet::syntax::collect_http_quoted_string(a, &mut position);
///
/// assert_eq!(token, Some(&b"\"abc\""[..]));
/// assert_eq!(position, 9);
/// assert_eq!(&a[position..], b" bar");
/// ```
///
/// An escaped quote does not end the string
///
/// ```
/// let a = b"\"4\\\"5\", no-cache";
/// let mut position = 0;
///
/// let token = rust_http_cache_core::internet::syntax::collect_http_quoted_string(a, &mut position);
///
/// assert_eq!(token, Some(&b"\"4\\\"5\""[..]));
/// ```
///
/// Unterminated input yields nothing
///
/// ```
/// let a = b"\"unterminated";
/// let mut position = 0;
///
/// let token = rust_http_cache_core::internet::syntax::collect_http_quoted_string(a, &mut position);
///
/// assert!(token.is_none());
/// assert_eq!(position, 0);
/// ```
pub fn collect_http_quoted_string<'a>(s: &'a [u8], position: &mut usize) -> Option<&'a [u8]> {
    let start = *position + s.get(*position..)?.iter().position(|c| *c == b'"')?;

    let mut i = start + 1;

    while i < s.len() {
        match s[i] {
            b'\\' => i = i + 2,

            b'"' => {
                *position = i + 1;
                return Some(&s[start..i + 1]);
            }

            _ => i = i + 1,
        }
    }

    None
}

/// Retrieve the literal value of a complete quoted-string token, resolving `\` escapes
///
/// Returns `None` if `s` is not exactly one well-formed quoted-string.
///
/// # Examples
///
/// ```
/// let a = b"\"Login to \\\"apps\\\"\"";
///
/// let value = rust_http_cache_core::internet::syntax::unescape_http_quoted_string(a).unwrap();
///
/// assert_eq!(value.as_ref(), b"Login to \"apps\"");
/// ```
pub fn unescape_http_quoted_string(s: &[u8]) -> Option<Cow<'_, [u8]>> {
    if !s.starts_with(b"\"") {
        return None;
    }

    let mut position = 0;
    let token = collect_http_quoted_string(s, &mut position)?;
    if token.len() != s.len() {
        return None;
    }

    let inner = &s[1..s.len() - 1];
    if !inner.contains(&b'\\') {
        return Some(Cow::Borrowed(inner));
    }

    let mut value = Vec::with_capacity(inner.len());
    let mut iter = inner.iter();
    while let Some(c) = iter.next() {
        if *c == b'\\' {
            if let Some(escaped) = iter.next() {
                value.push(*escaped);
            }
        } else {
            value.push(*c);
        }
    }

    Some(Cow::Owned(value))
}

/// Trim a string from both starting and ending white spaces
///
/// # Examples
///
/// ```
/// let a = b" Hello, World! ";
///
/// let slice = rust_http_cache_core::internet::syntax::trim(a);
///
/// assert_eq!(slice, b"Hello, World!");
/// ```
///
/// Trimming a string full of white spaces should yield an empty slice
///
/// ```
/// let a = b"    \t   ";
///
/// let slice = rust_http_cache_core::internet::syntax::trim(a);
///
/// assert_eq!(slice, b"");
/// ```
pub fn trim(s: &[u8]) -> &[u8] {
    let is_ows = |c: &u8| *c == b' ' || *c == b'\t';

    match s.iter().position(|c| !is_ows(c)) {
        Some(i) => {
            let j = s.iter().rposition(|c| !is_ows(c)).map_or(s.len(), |j| j + 1);
            &s[i..j]
        }
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::{collect_http_quoted_string, trim, unescape_http_quoted_string};

    fn collect(s: &[u8], skip: usize) -> Option<&[u8]> {
        let mut position = skip;
        collect_http_quoted_string(s, &mut position)
    }

    #[test]
    fn test_collect() {
        assert_eq!(collect(b"\"\"", 0), Some(&b"\"\""[..]));
        assert_eq!(collect(b"\"abc\"", 0), Some(&b"\"abc\""[..]));
        assert_eq!(collect(b"foo \"abc\"", 4), Some(&b"\"abc\""[..]));
        assert_eq!(collect(b"foo=\"abc\"", 4), Some(&b"\"abc\""[..]));
        assert_eq!(collect(b"foo=\"abc\" bar", 4), Some(&b"\"abc\""[..]));
        assert_eq!(collect(b"\"abc\" bar", 0), Some(&b"\"abc\""[..]));
    }

    #[test]
    fn test_collect_searches_for_opening_quote() {
        assert_eq!(collect(b"foo \"abc\"", 0), Some(&b"\"abc\""[..]));
        assert_eq!(collect(b"no quotes here", 0), None);
        assert_eq!(collect(b"", 0), None);
        assert_eq!(collect(b"\"abc\"", 42), None);
    }

    #[test]
    fn test_collect_escapes() {
        assert_eq!(collect(b"\"4\\5\"", 0), Some(&b"\"4\\5\""[..]));
        assert_eq!(collect(b"\"4\\\"5\"", 0), Some(&b"\"4\\\"5\""[..]));
        assert_eq!(collect(b"\"4\\\\5\"", 0), Some(&b"\"4\\\\5\""[..]));
        assert_eq!(collect(b"\"4\\\\\" tail", 0), Some(&b"\"4\\\\\""[..]));
    }

    #[test]
    fn test_collect_unterminated() {
        assert_eq!(collect(b"\"unterminated", 0), None);
        assert_eq!(collect(b"\"escaped end\\\"", 0), None);
        assert_eq!(collect(b"\"trailing backslash\\", 0), None);
    }

    #[test]
    fn test_cursor_advances_past_token() {
        let a = b"\"a\", \"b\"";
        let mut position = 0;

        assert_eq!(collect_http_quoted_string(a, &mut position), Some(&b"\"a\""[..]));
        assert_eq!(position, 3);

        assert_eq!(collect_http_quoted_string(a, &mut position), Some(&b"\"b\""[..]));
        assert_eq!(position, a.len());

        assert_eq!(collect_http_quoted_string(a, &mut position), None);
        assert_eq!(position, a.len());
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape_http_quoted_string(b"\"\"").unwrap().as_ref(), b"");
        assert_eq!(unescape_http_quoted_string(b"\"abc\"").unwrap().as_ref(), b"abc");
        assert_eq!(unescape_http_quoted_string(b"\"a\\\"b\"").unwrap().as_ref(), b"a\"b");
        assert_eq!(unescape_http_quoted_string(b"\"a\\\\b\"").unwrap().as_ref(), b"a\\b");
        assert_eq!(unescape_http_quoted_string(b"\"a\\b\"").unwrap().as_ref(), b"ab");

        assert!(unescape_http_quoted_string(b"abc").is_none());
        assert!(unescape_http_quoted_string(b"\"abc").is_none());
        assert!(unescape_http_quoted_string(b"\"abc\" tail").is_none());
        assert!(unescape_http_quoted_string(b" \"abc\"").is_none());
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim(b"\t4 "), b"4");
        assert_eq!(trim(b"4"), b"4");
        assert_eq!(trim(b""), b"");
        assert_eq!(trim(b" a b "), b"a b");
    }
}
