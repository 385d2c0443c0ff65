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

//! Signature base string construction.
//!
//! Reference: [RFC 5849 3.4.1](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1)

use crate::encode::percent_encode;
use crate::params::ParameterSet;

/// Build the base string URI: `scheme://host[:port]/path`.
///
/// Scheme and host are lowercased, the port is only kept when it is not the
/// default of the scheme and an empty path becomes `/`. The path is used
/// verbatim otherwise, trailing slashes included.
pub fn base_url(scheme: &str, host: &str, port: Option<u16>, path: &str) -> String {
    let scheme = scheme.to_ascii_lowercase();
    let host = host.to_ascii_lowercase();

    let mut s = String::with_capacity(scheme.len() + host.len() + path.len() + 9);
    s.push_str(&scheme);
    s.push_str("://");
    s.push_str(&host);
    if let Some(port) = port {
        if Some(port) != default_port(&scheme) {
            s.push(':');
            s.push_str(&port.to_string());
        }
    }
    if path.is_empty() {
        s.push('/');
    } else {
        s.push_str(path);
    }

    s
}

fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}

/// Construct the signature base string.
///
/// ## Format
///
/// ```text
/// UPPERCASE(method) + "&" +
/// encode(base_url) + "&" +
/// encode(normalized parameters)
/// ```
pub fn base_string(method: &str, base_url: &str, params: &ParameterSet) -> String {
    let method = method.to_ascii_uppercase();
    let base_url = percent_encode(base_url);
    let params = percent_encode(&params.normalized());

    let mut s = String::with_capacity(method.len() + base_url.len() + params.len() + 2);
    s.push_str(&method);
    s.push('&');
    s.push_str(&base_url);
    s.push('&');
    s.push_str(&params);

    s
}
