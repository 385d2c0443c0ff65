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

use std::fmt::{Debug, Formatter};

use oauthsign_core::utils::Redact;

/// Credential for OAuth 1.0a.
///
/// `access_token` and `access_token_secret` are independent: a token secret
/// without a token still takes part in the signing key.
#[derive(Clone, Default)]
pub struct Credential {
    /// Consumer key, sent as `oauth_consumer_key`.
    pub consumer_key: String,
    /// Consumer secret, never sent.
    pub consumer_secret: String,
    /// Access token, sent as `oauth_token` if present.
    pub access_token: Option<String>,
    /// Access token secret, never sent.
    pub access_token_secret: Option<String>,
}

impl Credential {
    /// Create a new credential with consumer key and secret only.
    pub fn new(consumer_key: &str, consumer_secret: &str) -> Self {
        Self {
            consumer_key: consumer_key.to_string(),
            consumer_secret: consumer_secret.to_string(),
            access_token: None,
            access_token_secret: None,
        }
    }

    /// Set the access token.
    pub fn with_access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    /// Set the access token secret.
    pub fn with_access_token_secret(mut self, secret: &str) -> Self {
        self.access_token_secret = Some(secret.to_string());
        self
    }

    /// Signing key: `consumer_secret & access_token_secret`.
    ///
    /// The `&` is always present, even without a token secret.
    ///
    /// Reference: [RFC 5849 3.4.2](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.2)
    pub fn signing_key(&self) -> String {
        let secret = self.access_token_secret.as_deref().unwrap_or_default();

        let mut key = String::with_capacity(self.consumer_secret.len() + secret.len() + 1);
        key.push_str(&self.consumer_secret);
        key.push('&');
        key.push_str(secret);
        key
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("access_token", &self.access_token)
            .field(
                "access_token_secret",
                &Redact::from(&self.access_token_secret),
            )
            .finish()
    }
}
