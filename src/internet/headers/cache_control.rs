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

use crate::util::raw_string::{DecimalDigits, StrEq};

use super::super::syntax;

/// Largest delta-seconds value kept as is, anything above is clamped to it (RFC 9111 section 1.2.2)
pub const DELTA_SECONDS_LIMIT: u32 = 2147483648;

pub struct Directive<'a> {
    pub name: &'a [u8],
    pub value: Option<&'a [u8]>,
}

/// Splits a `Cache-Control` field value into directives
///
/// Commas inside quoted-strings are not separators. Empty members are skipped, and an
/// unterminated quoted-string ends the walk.
pub struct DirectiveParser<'a> {
    s: &'a [u8],
    p: usize,
}

impl<'a> DirectiveParser<'a> {
    pub fn new(s: &'a [u8]) -> DirectiveParser<'a> {
        DirectiveParser { s, p: 0 }
    }
}

impl<'a> Iterator for DirectiveParser<'a> {
    type Item = Directive<'a>;
    fn next(&mut self) -> Option<Directive<'a>> {
        while self.p < self.s.len() {
            let start = self.p;
            let mut i = start;
            let mut equals = None;

            while i < self.s.len() {
                match self.s[i] {
                    b',' => break,

                    b'"' => {
                        if syntax::collect_http_quoted_string(self.s, &mut i).is_none() {
                            self.p = self.s.len();
                            return None;
                        }
                        continue;
                    }

                    b'=' if equals.is_none() => equals = Some(i),

                    _ => {}
                }

                i = i + 1;
            }

            self.p = i + 1;

            let directive = match equals {
                Some(idx) => {
                    let mut value = syntax::trim(&self.s[idx + 1..i]);
                    if value.starts_with(b"\"") {
                        let mut position = 0;
                        if let Some(token) = syntax::collect_http_quoted_string(value, &mut position)
                        {
                            value = token;
                        }
                    }

                    Directive {
                        name: syntax::trim(&self.s[start..idx]),
                        value: Some(value),
                    }
                }

                None => {
                    let name = syntax::trim(&self.s[start..i]);
                    if name.is_empty() {
                        continue;
                    }

                    Directive { name, value: None }
                }
            };

            return Some(directive);
        }

        None
    }
}

fn delta_seconds(s: &[u8], name: &[u8]) -> Option<u32> {
    extract_directive(s, name).and_then(parse_delta_seconds)
}

fn find_directive<'a>(s: &'a [u8], name: &[u8]) -> Option<Directive<'a>> {
    if name.is_empty() {
        return None;
    }

    DirectiveParser::new(s).find(|d| d.name.equals_bytes(name, true))
}

/// Whether `s` carries the directive `name` (RFC 9111 section 5.2)
///
/// # Examples
///
/// ```
/// use rust_http_cache_core::internet::headers::cache_control::contains_directive;
///
/// assert!(contains_directive(b"public, No-Cache", b"no-cache"));
/// assert!(!contains_directive(b"abno-cachecd", b"no-cache"));
/// assert!(!contains_directive(b"max-age=\"4, no-cache", b"no-cache"));
/// ```
pub fn contains_directive(s: &[u8], name: &[u8]) -> bool {
    find_directive(s, name).is_some()
}

/// Value of the first directive called `name` in `s`
///
/// A directive without argument yields an empty slice. Quoted arguments are returned with
/// their quotes and escapes.
///
/// # Examples
///
/// ```
/// use rust_http_cache_core::internet::headers::cache_control::extract_directive;
///
/// assert_eq!(extract_directive(b"max-age = 4 , no-cache", b"max-age"), Some(&b"4"[..]));
/// assert_eq!(extract_directive(b"max-age=4, no-cache", b"no-cache"), Some(&b""[..]));
/// assert_eq!(extract_directive(b"max-age=\"4,5\"", b"max-age"), Some(&b"\"4,5\""[..]));
/// assert_eq!(extract_directive(b"max-age=4", b"s-maxage"), None);
/// ```
pub fn extract_directive<'a>(s: &'a [u8], name: &[u8]) -> Option<&'a [u8]> {
    find_directive(s, name).map(|d| d.value.unwrap_or(&[]))
}

/// Parse a delta-seconds argument, accepting the quoted form
///
/// # Examples
///
/// ```
/// use rust_http_cache_core::internet::headers::cache_control::parse_delta_seconds;
///
/// assert_eq!(parse_delta_seconds(b"60"), Some(60));
/// assert_eq!(parse_delta_seconds(b"\"60\""), Some(60));
/// assert_eq!(parse_delta_seconds(b"99999999999"), Some(2147483648));
/// assert_eq!(parse_delta_seconds(b"-1"), None);
/// ```
pub fn parse_delta_seconds(s: &[u8]) -> Option<u32> {
    let unquoted;
    let digits = if s.starts_with(b"\"") {
        unquoted = syntax::unescape_http_quoted_string(s)?;
        &*unquoted
    } else {
        s
    };

    if !digits.is_decimal_digits() {
        return None;
    }

    match digits.to_u64_checked() {
        Some(n) if n < u64::from(DELTA_SECONDS_LIMIT) => u32::try_from(n).ok(),
        _ => Some(DELTA_SECONDS_LIMIT),
    }
}

/// The response directives of RFC 9111 section 5.2.2 plus the common extensions
///
/// Each field reflects the first occurrence of its directive. Delta-seconds fields are
/// `None` when the directive is missing or its argument is invalid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheControl {
    pub max_age: Option<u32>,
    pub s_maxage: Option<u32>,
    pub no_cache: bool,
    pub no_cache_fields: Vec<Vec<u8>>,
    pub no_store: bool,
    pub no_transform: bool,
    pub must_revalidate: bool,
    pub proxy_revalidate: bool,
    pub must_understand: bool,
    pub private: bool,
    pub public: bool,
    pub immutable: bool,
    pub stale_while_revalidate: Option<u32>,
    pub stale_if_error: Option<u32>,
}

impl CacheControl {
    /// # Examples
    ///
    /// ```
    /// use rust_http_cache_core::internet::headers::cache_control::CacheControl;
    ///
    /// let cc = CacheControl::parse(b"public, max-age=\"60\", no-cache=\"Set-Cookie, ETag\"");
    ///
    /// assert!(cc.public);
    /// assert_eq!(cc.max_age, Some(60));
    /// assert!(cc.no_cache);
    /// assert_eq!(cc.no_cache_fields, vec![b"Set-Cookie".to_vec(), b"ETag".to_vec()]);
    /// ```
    pub fn parse(s: &[u8]) -> CacheControl {
        let mut cc = CacheControl {
            max_age: delta_seconds(s, b"max-age"),
            s_maxage: delta_seconds(s, b"s-maxage"),
            no_store: contains_directive(s, b"no-store"),
            no_transform: contains_directive(s, b"no-transform"),
            must_revalidate: contains_directive(s, b"must-revalidate"),
            proxy_revalidate: contains_directive(s, b"proxy-revalidate"),
            must_understand: contains_directive(s, b"must-understand"),
            private: contains_directive(s, b"private"),
            public: contains_directive(s, b"public"),
            immutable: contains_directive(s, b"immutable"),
            stale_while_revalidate: delta_seconds(s, b"stale-while-revalidate"),
            stale_if_error: delta_seconds(s, b"stale-if-error"),
            ..Default::default()
        };

        if let Some(value) = extract_directive(s, b"no-cache") {
            cc.no_cache = true;
            if let Some(fields) = syntax::unescape_http_quoted_string(value) {
                cc.no_cache_fields = fields
                    .split(|c| *c == b',')
                    .map(syntax::trim)
                    .filter(|f| !f.is_empty())
                    .map(|f| f.to_vec())
                    .collect();
            }
        }

        cc
    }
}
