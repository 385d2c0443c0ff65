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
use oauthsign_core::{Env, Error, Result};

use crate::constants::*;
use crate::credential::Credential;
use crate::sign_request::{RequestSigner, SignOptions};
use crate::signature::SignatureMethod;

/// Config carries all the configuration for OAuth 1.0a signing.
#[derive(Clone, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `OAUTH1_CONSUMER_KEY`
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `OAUTH1_CONSUMER_SECRET`
    pub consumer_secret: Option<String>,
    /// `access_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `OAUTH1_ACCESS_TOKEN`
    pub access_token: Option<String>,
    /// `access_token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `OAUTH1_ACCESS_TOKEN_SECRET`
    pub access_token_secret: Option<String>,
    /// `signature_method` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `OAUTH1_SIGNATURE_METHOD`
    ///
    /// Falls back to `HMAC-SHA1`.
    pub signature_method: Option<String>,
    /// `realm` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `OAUTH1_REALM`
    pub realm: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set consumer_key
    pub fn with_consumer_key(mut self, consumer_key: impl Into<String>) -> Self {
        self.consumer_key = Some(consumer_key.into());
        self
    }

    /// Set consumer_secret
    pub fn with_consumer_secret(mut self, consumer_secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(consumer_secret.into());
        self
    }

    /// Set access_token
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Set access_token_secret
    pub fn with_access_token_secret(mut self, access_token_secret: impl Into<String>) -> Self {
        self.access_token_secret = Some(access_token_secret.into());
        self
    }

    /// Set signature_method
    pub fn with_signature_method(mut self, method: SignatureMethod) -> Self {
        self.signature_method = Some(method.as_str().to_string());
        self
    }

    /// Set realm
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, env: &impl Env) -> Self {
        if let Some(v) = env.var(OAUTH1_CONSUMER_KEY) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = env.var(OAUTH1_CONSUMER_SECRET) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = env.var(OAUTH1_ACCESS_TOKEN) {
            self.access_token.get_or_insert(v);
        }
        if let Some(v) = env.var(OAUTH1_ACCESS_TOKEN_SECRET) {
            self.access_token_secret.get_or_insert(v);
        }
        if let Some(v) = env.var(OAUTH1_SIGNATURE_METHOD) {
            self.signature_method.get_or_insert(v);
        }
        if let Some(v) = env.var(OAUTH1_REALM) {
            self.realm.get_or_insert(v);
        }

        self
    }

    /// Build the credential, consumer key and secret are required.
    pub fn credential(&self) -> Result<Credential> {
        let (Some(key), Some(secret)) = (&self.consumer_key, &self.consumer_secret) else {
            return Err(Error::config_invalid(
                "consumer_key and consumer_secret are required",
            ));
        };

        let mut cred = Credential::new(key, secret);
        if let Some(v) = &self.access_token {
            cred = cred.with_access_token(v);
        }
        if let Some(v) = &self.access_token_secret {
            cred = cred.with_access_token_secret(v);
        }
        Ok(cred)
    }

    /// Resolve the configured signature method.
    pub fn signature_method(&self) -> Result<SignatureMethod> {
        match &self.signature_method {
            Some(v) => v.parse(),
            None => Ok(SignatureMethod::HmacSha1),
        }
    }

    /// Build a [`RequestSigner`] from this config.
    pub fn request_signer(&self) -> Result<RequestSigner> {
        RequestSigner::new(&self.credential()?, self.signature_method()?)
    }

    /// Default [`SignOptions`] carrying the configured realm.
    pub fn sign_options(&self) -> SignOptions {
        let opts = SignOptions::default();
        match &self.realm {
            Some(realm) => opts.with_realm(realm),
            None => opts,
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &self.consumer_key)
            .field(
                "consumer_secret",
                &self.consumer_secret.as_ref().map(Redact::from),
            )
            .field("access_token", &self.access_token)
            .field(
                "access_token_secret",
                &self.access_token_secret.as_ref().map(Redact::from),
            )
            .field("signature_method", &self.signature_method)
            .field("realm", &self.realm)
            .finish()
    }
}
