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


use std::fmt;

use httparse::Status;

use crate::ffi::log::{platform_log, platform_log_bytes};

use crate::internet::headers::cache_control::CacheControl;
use crate::internet::headers::content_length::ContentLength;
use crate::internet::HeaderList;

const LOG_TAG: &str = "http_response";

/// Header slots offered to `httparse` per response head
pub const MAX_HEADERS: usize = 64;

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("malformed response head: {0}")]
    Parse(#[from] httparse::Error),
    #[error("response head has no status line")]
    MissingStatus,
}

pub type Result<T> = std::result::Result<T, ErrorKind>;

/// A response head whose header list is owned by the response
pub struct Response {
    pub status_code: u16,
    pub reason_phrase: Vec<u8>,
    pub headers: HeaderList,
}

impl Response {
    pub fn from(resp: &httparse::Response) -> Option<Response> {
        if let (Some(code), Some(reason)) = (resp.code, resp.reason) {
            platform_log(LOG_TAG, format!("HTTP/1.1 {} {}", code, reason));

            for h in &*resp.headers {
                platform_log_bytes(LOG_TAG, &format!("{}: ", h.name), h.value);
            }

            return Some(Response {
                status_code: code,
                reason_phrase: reason.as_bytes().to_vec(),
                headers: HeaderList::from(&*resp.headers),
            });
        }

        None
    }

    /// Parse a response head from the start of `buf`
    ///
    /// Returns `Ok(None)` while the head is incomplete, otherwise the response and the
    /// number of bytes the head took up.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_http_cache_core::http::Response;
    /// use rust_http_cache_core::internet::headers::ContentLength;
    ///
    /// let buf = b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nCache-Control: max-age=60\r\n\r\nhello";
    ///
    /// let (resp, consumed) = Response::parse(buf).unwrap().unwrap();
    ///
    /// assert_eq!(resp.status_code, 200);
    /// assert_eq!(&buf[consumed..], b"hello");
    /// assert_eq!(resp.content_length(), ContentLength::Value(5));
    /// assert_eq!(resp.cache_control().unwrap().max_age, Some(60));
    /// ```
    pub fn parse(buf: &[u8]) -> Result<Option<(Response, usize)>> {
        let mut headers = [httparse::EMPTY_HEADER; MAX_HEADERS];
        let mut parser = httparse::Response::new(&mut headers);

        match parser.parse(buf) {
            Ok(Status::Partial) => {
                platform_log(LOG_TAG, "on partial http header");
                Ok(None)
            }

            Ok(Status::Complete(size)) => {
                platform_log(LOG_TAG, "on complete http header");
                match Response::from(&parser) {
                    Some(resp) => Ok(Some((resp, size))),
                    None => Err(ErrorKind::MissingStatus),
                }
            }

            Err(e) => {
                platform_log(LOG_TAG, format!("failed to parse response head: {}", e));
                Err(ErrorKind::Parse(e))
            }
        }
    }

    pub fn content_length(&self) -> ContentLength {
        self.headers.extract_length()
    }

    /// Typed view over the combined `Cache-Control` value, `None` without such a field
    pub fn cache_control(&self) -> Option<CacheControl> {
        self.headers
            .get("Cache-Control")
            .map(|value| CacheControl::parse(&value))
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status_code", &self.status_code)
            .field(
                "reason_phrase",
                &String::from_utf8_lossy(&self.reason_phrase),
            )
            .field("headers", &self.headers)
            .finish()
    }
}
