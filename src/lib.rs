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


//! Parsing primitives for the response metadata HTTP caching depends on: the
//! quoted-string grammar, `Cache-Control` directive lists and `Content-Length`
//! extraction with conflict and overflow detection.
//!
//! Everything here works on raw header bytes, performs no I/O and never panics on
//! malformed input.

pub mod ffi;
pub mod http;
pub mod internet;
pub mod util;
