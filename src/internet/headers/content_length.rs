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

use crate::ffi::log::{platform_log, platform_log_bytes};
use crate::util::raw_string::DecimalDigits;

use super::super::header::HeaderList;

const LOG_TAG: &str = "content_length";

#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthError {
    #[error("Content-Length value is not a non-empty run of decimal digits")]
    Malformed,
    #[error("conflicting Content-Length values")]
    Conflicting,
    #[error("Content-Length value does not fit in 64 bits")]
    Overflow,
}

/// Outcome of [`extract_length`]
///
/// A `Failure` must be treated as a protocol error by whoever frames the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentLength {
    Absent,
    Value(u64),
    Failure(LengthError),
}

impl ContentLength {
    pub fn value(&self) -> Option<u64> {
        match self {
            ContentLength::Value(n) => Some(*n),
            ContentLength::Absent | ContentLength::Failure(_) => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ContentLength::Failure(_))
    }
}

/// Extract the message length from every `Content-Length` field of `headers` (RFC 9112 section 6.3)
///
/// Every value must be digits only. Repeated fields are tolerated only when they carry the
/// exact same text, distinct values are a failure rather than first-wins.
///
/// # Examples
///
/// ```
/// use rust_http_cache_core::internet::headers::content_length::{extract_length, ContentLength, LengthError};
/// use rust_http_cache_core::internet::HeaderList;
///
/// let mut headers = HeaderList::new();
/// assert_eq!(extract_length(&headers), ContentLength::Absent);
///
/// headers.append("Content-Length", "42");
/// headers.append("content-length", "42");
/// assert_eq!(extract_length(&headers), ContentLength::Value(42));
///
/// headers.append("Content-Length", "43");
/// assert_eq!(extract_length(&headers), ContentLength::Failure(LengthError::Conflicting));
/// ```
pub fn extract_length(headers: &HeaderList) -> ContentLength {
    let mut candidate: Option<&[u8]> = None;
    let mut conflicting = false;

    for value in headers.get_all("Content-Length") {
        if !value.is_decimal_digits() {
            platform_log_bytes(LOG_TAG, "malformed Content-Length: ", value);
            return ContentLength::Failure(LengthError::Malformed);
        }

        match candidate {
            None => candidate = Some(value),
            Some(c) => {
                if c != value {
                    conflicting = true;
                }
            }
        }
    }

    let Some(candidate) = candidate else {
        return ContentLength::Absent;
    };

    if conflicting {
        platform_log(LOG_TAG, "conflicting Content-Length values");
        return ContentLength::Failure(LengthError::Conflicting);
    }

    match candidate.to_u64_checked() {
        Some(n) => ContentLength::Value(n),
        None => {
            platform_log_bytes(LOG_TAG, "Content-Length overflow: ", candidate);
            ContentLength::Failure(LengthError::Overflow)
        }
    }
}
