// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Hash related utils.

use crate::Error;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::digest::KeyInit;
use hmac::Mac;

/// Base64 encode
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

/// Base64 decode
pub fn base64_decode(content: &str) -> crate::Result<Vec<u8>> {
    BASE64_STANDARD
        .decode(content)
        .map_err(|e| Error::unexpected("base64 decode failed").with_source(e))
}

/// Build a keyed MAC state that can be cloned for every message.
///
/// HMAC accepts keys of any length, but the error is still surfaced instead
/// of unwrapped so other MAC types can reuse this helper.
pub fn mac_init<M: Mac + KeyInit>(key: &[u8]) -> crate::Result<M> {
    <M as KeyInit>::new_from_slice(key)
        .map_err(|e| Error::invalid_key_material(format!("mac rejected key: {e}")))
}

/// Base64 encoded MAC of `content`, computed on a copy of the keyed state.
///
/// The shared `mac` is never updated in place.
pub fn base64_mac<M: Mac + Clone>(mac: &M, content: &[u8]) -> String {
    let mut h = mac.clone();
    h.update(content);

    base64_encode(&h.finalize().into_bytes())
}

/// Check a base64 encoded MAC in constant time.
///
/// Returns `false` for malformed base64 as well as for mismatches.
pub fn verify_base64_mac<M: Mac + Clone>(mac: &M, content: &[u8], expected: &str) -> bool {
    let Ok(tag) = base64_decode(expected) else {
        return false;
    };

    let mut h = mac.clone();
    h.update(content);
    h.verify_slice(&tag).is_ok()
}
