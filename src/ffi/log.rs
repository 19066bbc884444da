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

//! Debug-build diagnostics routed to the host platform logger.

#[cfg(any(
    all(feature = "android", target_os = "android"),
    all(feature = "ohos", all(target_os = "linux", target_env = "ohos"))
))]
mod sink {
    extern crate libc;

    use std::ffi::CString;

    use libc::c_char;

    extern "C" {
        fn platform_log_impl(tag: *const c_char, message: *const c_char);
    }

    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    pub(super) fn emit(tag: &str, message: &str) {
        if let (Ok(tag), Ok(message)) = (CString::new(tag), CString::new(message)) {
            unsafe {
                platform_log_impl(tag.as_ptr(), message.as_ptr());
            }
        }
    }
}

#[cfg(not(any(
    all(feature = "android", target_os = "android"),
    all(feature = "ohos", all(target_os = "linux", target_env = "ohos"))
)))]
mod sink {
    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    pub(super) fn emit(tag: &str, message: &str) {
        println!("{}:   {}", tag, message);
    }
}

/// Writes a tagged diagnostic line.
///
/// With the `android` or `ohos` feature on the matching target the line is handed to
/// the host's `platform_log_impl`, elsewhere it goes to stdout. Release builds drop it.
#[cfg(debug_assertions)]
pub fn platform_log<M>(tag: &str, message: M)
where
    M: AsRef<str>,
{
    sink::emit(tag, message.as_ref());
}

#[cfg(not(debug_assertions))]
pub fn platform_log<M>(_tag: &str, _message: M)
where
    M: AsRef<str>,
{
}

/// Like [`platform_log`], for raw header bytes that may not be UTF-8.
pub fn platform_log_bytes(tag: &str, prefix: &str, bytes: &[u8]) {
    if cfg!(debug_assertions) {
        platform_log(
            tag,
            format!("{}{}", prefix, String::from_utf8_lossy(bytes)),
        );
    }
}
