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

use std::fmt::Debug;

use oauthsign_core::time::format_unix_timestamp;
use oauthsign_core::time::now;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// ClockAndNonceProvider supplies `oauth_nonce` and `oauth_timestamp` for
/// every signed request.
///
/// The default [`SystemProvider`] reads the system clock and a random
/// source. Tests use [`StaticProvider`] to get reproducible signatures.
pub trait ClockAndNonceProvider: Debug + Send + Sync + 'static {
    /// A unique, unpredictable token for this request.
    fn nonce(&self) -> String;

    /// Seconds since the unix epoch in UTC, as a decimal string.
    fn timestamp(&self) -> String;
}

const NONCE_LENGTH: usize = 32;

/// SystemProvider reads the system clock and generates random nonces.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProvider {
    utc_offset: i32,
}

impl SystemProvider {
    /// Create a new SystemProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `seconds` to every timestamp.
    ///
    /// Servers reject timestamps too far from their own clock. Set this to
    /// the difference between the server time (for example from a `Date`
    /// response header) and the local time.
    pub fn with_utc_offset(mut self, seconds: i32) -> Self {
        self.utc_offset = seconds;
        self
    }
}

impl ClockAndNonceProvider for SystemProvider {
    fn nonce(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LENGTH)
            .map(char::from)
            .collect()
    }

    fn timestamp(&self) -> String {
        let now = now() + chrono::TimeDelta::seconds(i64::from(self.utc_offset));
        format_unix_timestamp(now)
    }
}

/// StaticProvider always returns the same nonce and timestamp.
///
/// # Note
///
/// Reusing a nonce makes requests replayable. Only use this for tests.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    nonce: String,
    timestamp: String,
}

impl StaticProvider {
    /// Create a new StaticProvider.
    pub fn new(nonce: &str, timestamp: &str) -> Self {
        Self {
            nonce: nonce.to_string(),
            timestamp: timestamp.to_string(),
        }
    }
}

impl ClockAndNonceProvider for StaticProvider {
    fn nonce(&self) -> String {
        self.nonce.clone()
    }

    fn timestamp(&self) -> String {
        self.timestamp.clone()
    }
}
