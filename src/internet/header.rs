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
use std::fmt;
use std::slice::Iter;

use crate::util::raw_string::StrEq;

use super::headers::content_length::{self, ContentLength};

pub struct Header {
    name: Box<dyn AsRef<[u8]> + Send + Sync>,
    value: Box<dyn AsRef<[u8]> + Send + Sync>,
}

impl Header {
    pub fn new<N, V>(name: N, value: V) -> Header
    where
        N: AsRef<[u8]> + Send + Sync + 'static,
        V: AsRef<[u8]> + Send + Sync + 'static,
    {
        Header {
            name: Box::new(name),
            value: Box::new(value),
        }
    }

    pub fn get_name(&self) -> &[u8] {
        self.name.as_ref().as_ref()
    }

    pub fn get_value(&self) -> &[u8] {
        self.value.as_ref().as_ref()
    }
}

impl Clone for Header {
    fn clone(&self) -> Self {
        Header {
            name: Box::new(self.get_name().to_vec()),
            value: Box::new(self.get_value().to_vec()),
        }
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Header")
            .field(
                &String::from_utf8_lossy(self.get_name()),
                &String::from_utf8_lossy(self.get_value()),
            )
            .finish()
    }
}

/// Walks a header slice in order, yielding every entry whose name matches ignoring ASCII case
#[derive(Clone)]
pub struct HeaderSearch<'a, 'b> {
    iter: Iter<'a, Header>,
    name: &'b [u8],
}

impl<'a, 'b> HeaderSearch<'a, 'b> {
    pub fn new(headers: &'a [Header], name: &'b [u8]) -> HeaderSearch<'a, 'b> {
        HeaderSearch {
            iter: headers.iter(),
            name,
        }
    }
}

impl<'a> Iterator for HeaderSearch<'a, '_> {
    type Item = &'a Header;
    fn next(&mut self) -> Option<&'a Header> {
        let name = self.name;
        self.iter
            .by_ref()
            .find(|h| h.get_name().equals_bytes(name, true))
    }
}

pub fn search<'a>(headers: &'a [Header], name: &[u8]) -> Option<&'a Header> {
    HeaderSearch::new(headers, name).next()
}

/// Values of every header sharing one name, in insertion order
///
/// Cloning the iterator restarts the walk from wherever the clone was taken.
#[derive(Clone)]
pub struct HeaderValues<'a, 'b> {
    search: HeaderSearch<'a, 'b>,
}

impl<'a> Iterator for HeaderValues<'a, '_> {
    type Item = &'a [u8];
    fn next(&mut self) -> Option<&'a [u8]> {
        self.search.next().map(Header::get_value)
    }
}

/// Ordered, append-only list of header fields
///
/// Duplicate names are kept as separate entries and original casing is preserved,
/// lookups compare names ignoring ASCII case.
#[derive(Clone, Default)]
pub struct HeaderList {
    headers: Vec<Header>,
}

impl HeaderList {
    pub fn new() -> HeaderList {
        HeaderList {
            headers: Vec::new(),
        }
    }

    pub fn append<N, V>(&mut self, name: N, value: V)
    where
        N: AsRef<[u8]> + Send + Sync + 'static,
        V: AsRef<[u8]> + Send + Sync + 'static,
    {
        self.headers.push(Header::new(name, value));
    }

    /// Every value stored under `name`
    ///
    /// # Examples
    ///
    /// ```
    /// let mut headers = rust_http_cache_core::internet::HeaderList::new();
    /// headers.append("Content-Length", "42");
    /// headers.append("Cache-Control", "no-cache");
    /// headers.append("content-length", "43");
    ///
    /// let values: Vec<&[u8]> = headers.get_all("CONTENT-LENGTH").collect();
    ///
    /// assert_eq!(values, vec![&b"42"[..], &b"43"[..]]);
    /// ```
    pub fn get_all<'a, 'b, N>(&'a self, name: &'b N) -> HeaderValues<'a, 'b>
    where
        N: AsRef<[u8]> + ?Sized,
    {
        HeaderValues {
            search: HeaderSearch::new(&self.headers, name.as_ref()),
        }
    }

    /// Combined value of `name`: every value joined with `", "`, or `None` if there is none
    pub fn get<N>(&self, name: &N) -> Option<Cow<'_, [u8]>>
    where
        N: AsRef<[u8]> + ?Sized,
    {
        let mut values = self.get_all(name);
        let first = values.next()?;

        match values.next() {
            None => Some(Cow::Borrowed(first)),

            Some(second) => {
                let mut combined = first.to_vec();
                for value in std::iter::once(second).chain(values) {
                    combined.extend_from_slice(b", ");
                    combined.extend_from_slice(value);
                }
                Some(Cow::Owned(combined))
            }
        }
    }

    pub fn contains<N>(&self, name: &N) -> bool
    where
        N: AsRef<[u8]> + ?Sized,
    {
        search(&self.headers, name.as_ref()).is_some()
    }

    /// Content-Length of the message, see [`content_length::extract_length`]
    pub fn extract_length(&self) -> ContentLength {
        content_length::extract_length(self)
    }

    pub fn iter(&self) -> Iter<'_, Header> {
        self.headers.iter()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = &'a Header;
    type IntoIter = Iter<'a, Header>;
    fn into_iter(self) -> Iter<'a, Header> {
        self.headers.iter()
    }
}

impl From<&[httparse::Header<'_>]> for HeaderList {
    fn from(headers: &[httparse::Header<'_>]) -> HeaderList {
        let mut list = HeaderList::new();
        for h in headers {
            list.append(String::from(h.name), h.value.to_vec());
        }
        list
    }
}

impl fmt::Debug for HeaderList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.headers.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::HeaderList;

    fn sample() -> HeaderList {
        let mut headers = HeaderList::new();
        headers.append("Content-Type", "text/plain");
        headers.append("Cache-Control", "max-age=4");
        headers.append("content-type", "charset=utf-8");
        headers.append(String::from("CACHE-CONTROL"), b"no-cache".to_vec());
        headers
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let headers = sample();
        assert_eq!(headers.len(), 4);

        let names: Vec<&[u8]> = headers.iter().map(|h| h.get_name()).collect();
        assert_eq!(
            names,
            vec![
                &b"Content-Type"[..],
                &b"Cache-Control"[..],
                &b"content-type"[..],
                &b"CACHE-CONTROL"[..]
            ]
        );
    }

    #[test]
    fn test_get_all() {
        let headers = sample();

        let values: Vec<&[u8]> = headers.get_all("cache-control").collect();
        assert_eq!(values, vec![&b"max-age=4"[..], &b"no-cache"[..]]);

        assert_eq!(headers.get_all(b"Content-Length").count(), 0);
        assert_eq!(HeaderList::new().get_all("Content-Length").count(), 0);
    }

    #[test]
    fn test_get_all_is_restartable() {
        let headers = sample();

        let values = headers.get_all("Content-Type");
        let first: Vec<&[u8]> = values.clone().collect();
        let second: Vec<&[u8]> = values.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_get_combines_values() {
        let headers = sample();

        assert_eq!(
            headers.get("Cache-Control").unwrap().as_ref(),
            b"max-age=4, no-cache"
        );
        assert!(headers.get("Content-Length").is_none());

        let mut single = HeaderList::new();
        single.append("ETag", "\"abc\"");
        assert_eq!(single.get("etag").unwrap().as_ref(), b"\"abc\"");
    }

    #[test]
    fn test_contains() {
        let headers = sample();
        assert!(headers.contains("CONTENT-TYPE"));
        assert!(!headers.contains("Content"));
        assert!(!headers.contains(""));
    }

    #[test]
    fn test_from_httparse() {
        let raw = [
            httparse::Header {
                name: "Content-Length",
                value: b"42",
            },
            httparse::Header {
                name: "Age",
                value: b"7",
            },
        ];

        let headers = HeaderList::from(&raw[..]);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get_all("age").next(), Some(&b"7"[..]));
    }
}
