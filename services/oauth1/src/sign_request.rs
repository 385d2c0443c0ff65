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

//! OAuth 1.0a request signer.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use http::header::AUTHORIZATION;
use http::request::Parts;
use http::HeaderValue;
use log::debug;
use oauthsign_core::time::parse_unix_timestamp;
use oauthsign_core::{Error, Result};

use crate::base_string::base_string;
use crate::constants::*;
use crate::credential::Credential;
use crate::header::build_authorization;
use crate::header::parse_authorization;
use crate::params::Parameter;
use crate::params::ParameterSet;
use crate::provider::ClockAndNonceProvider;
use crate::provider::SystemProvider;
use crate::request::RequestDescriptor;
use crate::signature::SignatureMethod;
use crate::signature::Signer;

/// Per request options.
#[derive(Debug, Clone)]
pub struct SignOptions {
    /// Protection realm, sent in the header but never signed.
    pub realm: Option<String>,
    /// Sent as `oauth_callback`.
    pub callback: Option<String>,
    /// Send `oauth_version="1.0"`, defaults to `true`.
    pub include_version: bool,
}

impl Default for SignOptions {
    fn default() -> Self {
        Self {
            realm: None,
            callback: None,
            include_version: true,
        }
    }
}

impl SignOptions {
    /// Set the realm.
    pub fn with_realm(mut self, realm: &str) -> Self {
        self.realm = Some(realm.to_string());
        self
    }

    /// Set the callback.
    pub fn with_callback(mut self, callback: &str) -> Self {
        self.callback = Some(callback.to_string());
        self
    }

    /// Include or omit `oauth_version`.
    pub fn with_version(mut self, include: bool) -> Self {
        self.include_version = include;
        self
    }
}

/// RequestSigner that implements OAuth 1.0a.
///
/// - [RFC 5849: The OAuth 1.0 Protocol](https://www.rfc-editor.org/rfc/rfc5849)
///
/// The signing key is derived once in [`RequestSigner::new`]; the signer
/// can then be reused, and shared between threads, for any number of
/// requests.
#[derive(Clone)]
pub struct RequestSigner {
    consumer_key: String,
    access_token: Option<String>,
    signer: Signer,
    provider: Arc<dyn ClockAndNonceProvider>,
}

impl Debug for RequestSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("consumer_key", &self.consumer_key)
            .field("access_token", &self.access_token)
            .field("signer", &self.signer)
            .field("provider", &self.provider)
            .finish()
    }
}

impl RequestSigner {
    /// Create a new signer with the system clock and a random nonce.
    pub fn new(cred: &Credential, method: SignatureMethod) -> Result<Self> {
        Ok(Self {
            consumer_key: cred.consumer_key.clone(),
            access_token: cred.access_token.clone(),
            signer: Signer::new(method, cred)?,
            provider: Arc::new(SystemProvider::new()),
        })
    }

    /// Replace the nonce and timestamp source.
    pub fn with_provider(mut self, provider: impl ClockAndNonceProvider) -> Self {
        self.provider = Arc::new(provider);
        self
    }

    /// The signature method in use.
    pub fn signature_method(&self) -> SignatureMethod {
        self.signer.method()
    }

    /// Compute the `Authorization` header value for the request.
    pub fn authorization(&self, req: &RequestDescriptor, opts: &SignOptions) -> Result<String> {
        req.validate()?;

        let protocol = self.protocol_parameters(opts);

        let mut params = protocol.clone();
        params.merge(&req.parameters());

        let base_url = req.base_url();
        let string_to_sign = base_string(&req.method, &base_url, &params);
        debug!("string to sign: {}", &string_to_sign);

        let mut header_params = protocol.header_order().to_vec();
        header_params.push(Parameter::new(
            OAUTH_SIGNATURE,
            self.signer.sign(&string_to_sign),
        ));

        Ok(build_authorization(opts.realm.as_deref(), &header_params))
    }

    /// Sign the request in place by inserting the `Authorization` header.
    ///
    /// `body` is only read for `application/x-www-form-urlencoded` requests.
    /// If the request can't be signed, for example because it has no host,
    /// `parts` is left untouched and an error of kind
    /// `MissingRequiredField` is returned; such a request must not be sent.
    pub fn sign(&self, parts: &mut Parts, body: &[u8], opts: &SignOptions) -> Result<()> {
        let req = RequestDescriptor::from_parts(parts, body)?;
        let auth = self.authorization(&req, opts)?;

        let mut value: HeaderValue = auth.parse()?;
        value.set_sensitive(true);
        parts.headers.insert(AUTHORIZATION, value);

        Ok(())
    }

    /// Sign a whole http::Request.
    pub fn sign_request<B: AsRef<[u8]>>(
        &self,
        req: http::Request<B>,
        opts: &SignOptions,
    ) -> Result<http::Request<B>> {
        let (mut parts, body) = req.into_parts();
        self.sign(&mut parts, body.as_ref(), opts)?;
        Ok(http::Request::from_parts(parts, body))
    }

    /// Verify the `Authorization` header of a request signed with the same
    /// credential.
    ///
    /// Returns `Ok(false)` when the consumer key, token, signature method,
    /// timestamp or signature don't match. Nonce replay is not tracked.
    pub fn verify(&self, parts: &Parts, body: &[u8]) -> Result<bool> {
        let auth = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| Error::missing_required_field("request has no authorization header"))?
            .to_str()?;
        let (_, mut header_params) = parse_authorization(auth)?;

        let Some(signature) = header_params.get(OAUTH_SIGNATURE).map(str::to_string) else {
            return Ok(false);
        };
        if header_params.get(OAUTH_CONSUMER_KEY) != Some(self.consumer_key.as_str())
            || header_params.get(OAUTH_TOKEN) != self.access_token.as_deref()
            || header_params.get(OAUTH_SIGNATURE_METHOD) != Some(self.signer.method().as_str())
        {
            return Ok(false);
        }
        match header_params.get(OAUTH_TIMESTAMP) {
            Some(ts) if parse_unix_timestamp(ts).is_ok() => {}
            _ => return Ok(false),
        }

        header_params = header_params
            .header_order()
            .iter()
            .filter(|p| p.name != OAUTH_SIGNATURE)
            .cloned()
            .collect();

        let req = RequestDescriptor::from_parts(parts, body)?;
        header_params.merge(&req.parameters());

        let string_to_sign = base_string(&req.method, &req.base_url(), &header_params);
        debug!("string to verify: {}", &string_to_sign);

        Ok(self.signer.verify(&string_to_sign, &signature))
    }

    /// Protocol parameters in header order.
    fn protocol_parameters(&self, opts: &SignOptions) -> ParameterSet {
        let mut params = ParameterSet::new();
        if let Some(token) = &self.access_token {
            params.push(OAUTH_TOKEN, token);
        }
        params.push(OAUTH_NONCE, self.provider.nonce());
        params.push(OAUTH_SIGNATURE_METHOD, self.signer.method().as_str());
        params.push(OAUTH_CONSUMER_KEY, &self.consumer_key);
        params.push(OAUTH_TIMESTAMP, self.provider.timestamp());
        if opts.include_version {
            params.push(OAUTH_VERSION, OAUTH_VERSION_1_0);
        }
        if let Some(callback) = &opts.callback {
            params.push(OAUTH_CALLBACK, callback);
        }
        params
    }
}
