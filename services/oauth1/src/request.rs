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

use http::header::CONTENT_TYPE;
use http::request::Parts;
use oauthsign_core::{Error, Result};

use crate::base_string::base_url;
use crate::constants::FORM_URLENCODED;
use crate::constants::OAUTH_SIGNATURE;
use crate::params::ParameterSet;

/// RequestDescriptor carries the parts of a request that take part in the
/// signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// HTTP method, uppercased when signing.
    pub method: String,
    /// URI scheme, compared case-insensitively.
    pub scheme: String,
    /// Host, compared case-insensitively.
    pub host: String,
    /// Explicit port, dropped from the base string if it's the scheme default.
    pub port: Option<u16>,
    /// Path as sent on the wire, empty means `/`.
    pub path: String,
    /// Decoded query parameters.
    pub query: ParameterSet,
    /// Decoded `application/x-www-form-urlencoded` body parameters.
    ///
    /// Bodies of any other content type never take part in the signature.
    pub form_body: Option<ParameterSet>,
}

impl RequestDescriptor {
    /// Create a new descriptor without parameters.
    pub fn new(method: &str, scheme: &str, host: &str, path: &str) -> Self {
        Self {
            method: method.to_string(),
            scheme: scheme.to_string(),
            host: host.to_string(),
            port: None,
            path: path.to_string(),
            query: ParameterSet::new(),
            form_body: None,
        }
    }

    /// Set the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the query parameters.
    pub fn with_query(mut self, query: ParameterSet) -> Self {
        self.query = query;
        self
    }

    /// Set the form body parameters.
    pub fn with_form_body(mut self, body: ParameterSet) -> Self {
        self.form_body = Some(body);
        self
    }

    /// Build a descriptor from http::request::Parts and the request body.
    ///
    /// The body is only parsed when `Content-Type` is
    /// `application/x-www-form-urlencoded`.
    pub fn from_parts(parts: &Parts, body: &[u8]) -> Result<Self> {
        let uri = &parts.uri;
        let host = uri.host().ok_or_else(|| {
            Error::missing_required_field("request without host is invalid for signing")
        })?;

        let form_body = if is_form_urlencoded(parts)? {
            Some(ParameterSet::from_urlencoded(body))
        } else {
            None
        };

        Ok(Self {
            method: parts.method.as_str().to_string(),
            scheme: uri.scheme_str().unwrap_or("http").to_string(),
            host: host.to_string(),
            port: uri.port_u16(),
            path: uri.path().to_string(),
            query: uri
                .query()
                .map(|q| ParameterSet::from_urlencoded(q.as_bytes()))
                .unwrap_or_default(),
            form_body,
        })
    }

    /// Check that method, scheme and host are present.
    pub fn validate(&self) -> Result<()> {
        if self.method.is_empty() {
            return Err(Error::missing_required_field("request method is empty"));
        }
        if self.scheme.is_empty() {
            return Err(Error::missing_required_field("request scheme is empty"));
        }
        if self.host.is_empty() {
            return Err(Error::missing_required_field("request host is empty"));
        }
        Ok(())
    }

    /// Base string URI of this request.
    pub fn base_url(&self) -> String {
        base_url(&self.scheme, &self.host, self.port, &self.path)
    }

    /// Query and form body parameters merged in that order.
    ///
    /// `oauth_signature` is never signed, so it is left out wherever it
    /// appears.
    pub fn parameters(&self) -> ParameterSet {
        let body = self.form_body.iter().flat_map(|b| b.header_order());
        self.query
            .header_order()
            .iter()
            .chain(body)
            .filter(|p| p.name != OAUTH_SIGNATURE)
            .cloned()
            .collect()
    }
}

fn is_form_urlencoded(parts: &Parts) -> Result<bool> {
    let Some(v) = parts.headers.get(CONTENT_TYPE) else {
        return Ok(false);
    };

    let mime = v.to_str()?.split(';').next().unwrap_or_default().trim();
    Ok(mime.eq_ignore_ascii_case(FORM_URLENCODED))
}
