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

pub trait StrEq {
    fn equals_bytes(&self, b: &[u8], ignore_case: bool) -> bool;
    fn equals_string(&self, s: &str, ignore_case: bool) -> bool;
}

impl StrEq for [u8] {
    /// Byte-wise equality, optionally folding ASCII letters only
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_http_cache_core::util::raw_string::StrEq;
    ///
    /// assert!(b"Content-Length".equals_bytes(b"content-length", true));
    /// assert!(!b"Content-Length".equals_bytes(b"content-length", false));
    /// assert!(!b"max-age".equals_bytes(b"max-ag", true));
    /// ```
    fn equals_bytes(&self, b: &[u8], ignore_case: bool) -> bool {
        if self.len() != b.len() {
            return false;
        }

        if ignore_case {
            self.iter()
                .zip(b.iter())
                .all(|(lhs, rhs)| lhs.to_ascii_lowercase() == rhs.to_ascii_lowercase())
        } else {
            self == b
        }
    }

    fn equals_string(&self, s: &str, ignore_case: bool) -> bool {
        <[u8]>::equals_bytes(self, s.as_bytes(), ignore_case)
    }
}

impl StrEq for Vec<u8> {
    fn equals_bytes(&self, b: &[u8], ignore_case: bool) -> bool {
        <[u8]>::equals_bytes(self, b, ignore_case)
    }

    fn equals_string(&self, s: &str, ignore_case: bool) -> bool {
        <[u8]>::equals_string(self, s, ignore_case)
    }
}

pub trait DecimalDigits {
    fn is_decimal_digits(&self) -> bool;
    fn to_u64_checked(&self) -> Option<u64>;
}

impl DecimalDigits for [u8] {
    /// Non-empty and made of ASCII `0`-`9` only, no sign and no whitespace
    fn is_decimal_digits(&self) -> bool {
        !self.is_empty() && self.iter().all(u8::is_ascii_digit)
    }

    /// Decimal value of a digits-only string, `None` if it is not one or if it does not fit in 64 bits
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_http_cache_core::util::raw_string::DecimalDigits;
    ///
    /// assert_eq!(b"18446744073709551615".to_u64_checked(), Some(u64::MAX));
    /// assert_eq!(b"18446744073709551616".to_u64_checked(), None);
    /// assert_eq!(b"+1".to_u64_checked(), None);
    /// ```
    fn to_u64_checked(&self) -> Option<u64> {
        if !self.is_decimal_digits() {
            return None;
        }

        let mut n: u64 = 0;
        for c in self {
            n = n.checked_mul(10)?.checked_add(u64::from(c - b'0'))?;
        }

        Some(n)
    }
}

impl DecimalDigits for Vec<u8> {
    fn is_decimal_digits(&self) -> bool {
        <[u8]>::is_decimal_digits(self)
    }

    fn to_u64_checked(&self) -> Option<u64> {
        <[u8]>::to_u64_checked(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{DecimalDigits, StrEq};

    #[test]
    fn test_equals_ignore_case() {
        assert!(b"Cache-Control".equals_string("CACHE-CONTROL", true));
        assert!(b"no-cache".equals_bytes(b"No-Cache", true));
        assert!(!b"no-cache".equals_bytes(b"no_cache", true));
        assert!(!b"".equals_bytes(b"a", true));
        assert!(b"".equals_bytes(b"", false));
    }

    #[test]
    fn test_equals_only_folds_ascii_letters() {
        // '@' and '`' sit right before 'A' and 'a'
        assert!(!b"@".equals_bytes(b"`", true));
        assert!(!b"[".equals_bytes(b"{", true));
    }

    #[test]
    fn test_decimal_digits() {
        assert!(b"0".is_decimal_digits());
        assert!(b"0042".is_decimal_digits());
        assert!(!b"".is_decimal_digits());
        assert!(!b" 42".is_decimal_digits());
        assert!(!b"-1".is_decimal_digits());
        assert!(!b"4 2".is_decimal_digits());

        assert_eq!(b"0042".to_u64_checked(), Some(42));
        assert_eq!(b"99999999999999999999999".to_u64_checked(), None);
        assert_eq!(b"42abc".to_u64_checked(), None);
    }
}
