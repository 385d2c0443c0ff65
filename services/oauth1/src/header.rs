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

//! `Authorization` header assembly and parsing.
//!
//! Reference: [RFC 5849 3.5.1](https://www.rfc-editor.org/rfc/rfc5849#section-3.5.1)

use oauthsign_core::{Error, Result};

use crate::constants::*;
use crate::encode::percent_decode;
use crate::encode::percent_encode;
use crate::params::Parameter;
use crate::params::ParameterSet;

/// Build the header value.
///
/// ## Format
///
/// ```text
/// OAuth realm="Example", oauth_consumer_key="9djdj82h48djs9d2", ...
/// ```
///
/// Parameters are emitted in the given order with percent encoded values.
/// The realm goes first and is not percent encoded, only `"` and `\` are
/// escaped so the quoted string stays well formed.
pub fn build_authorization(realm: Option<&str>, params: &[Parameter]) -> String {
    let mut s = String::with_capacity(256);
    s.push_str(AUTH_SCHEME);
    s.push(' ');

    let mut first = true;
    if let Some(realm) = realm {
        s.push_str(REALM);
        s.push_str("=\"");
        for c in realm.chars() {
            if c == '"' || c == '\\' {
                s.push('\\');
            }
            s.push(c);
        }
        s.push('"');
        first = false;
    }

    for p in params {
        if !first {
            s.push_str(", ");
        }
        first = false;

        s.push_str(&p.name);
        s.push_str("=\"");
        s.push_str(&percent_encode(&p.value));
        s.push('"');
    }

    s
}

/// Parse a header value produced by [`build_authorization`] or by another
/// OAuth 1.0a client.
///
/// Returns the realm, if any, and the other parameters percent decoded in
/// header order.
pub fn parse_authorization(value: &str) -> Result<(Option<String>, ParameterSet)> {
    let value = value.trim_start();
    let rest = match value.get(..AUTH_SCHEME.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(AUTH_SCHEME) => &value[AUTH_SCHEME.len()..],
        _ => {
            return Err(Error::unexpected(
                "authorization header is not using the OAuth scheme",
            ))
        }
    };
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return Err(Error::unexpected(
            "authorization header is not using the OAuth scheme",
        ));
    }

    let mut realm = None;
    let mut params = ParameterSet::new();

    let mut chars = rest.chars().peekable();
    loop {
        while chars.next_if(|c| c.is_whitespace() || *c == ',').is_some() {}
        if chars.peek().is_none() {
            break;
        }

        let mut name = String::new();
        while let Some(c) = chars.next_if(|c| *c != '=') {
            name.push(c);
        }
        let name = name.trim().to_string();
        if chars.next() != Some('=') || chars.next() != Some('"') || name.is_empty() {
            return Err(Error::unexpected(format!(
                "malformed authorization parameter: {name}"
            )));
        }

        let mut raw = String::new();
        let mut closed = false;
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some(escaped) => raw.push(escaped),
                    None => break,
                },
                '"' => {
                    closed = true;
                    break;
                }
                c => raw.push(c),
            }
        }
        if !closed {
            return Err(Error::unexpected(format!(
                "unterminated authorization parameter: {name}"
            )));
        }

        if name == REALM {
            realm = Some(raw);
        } else {
            let value = percent_decode(&raw)?.into_owned();
            params.push(name, value);
        }
    }

    Ok((realm, params))
}
