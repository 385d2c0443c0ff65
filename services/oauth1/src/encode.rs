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

//! Percent encoding and parameter value stringification.

use std::borrow::Cow;

use oauthsign_core::{Error, Result};
use percent_encoding::percent_decode_str;
use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// Everything except the RFC 3986 unreserved characters: `A-Z a-z 0-9 - . _ ~`
///
/// Reference: [RFC 5849 3.6](https://www.rfc-editor.org/rfc/rfc5849#section-3.6)
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent encode the input as RFC 5849 requires, with uppercase hex digits.
///
/// ```
/// use oauthsign_oauth1::percent_encode;
///
/// assert_eq!(percent_encode("r b&c=d"), "r%20b%26c%3Dd");
/// ```
pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, OAUTH_ENCODE_SET).to_string()
}

/// Reverse of [`percent_encode`]. `+` is kept as is.
pub fn percent_decode(s: &str) -> Result<Cow<'_, str>> {
    percent_decode_str(s)
        .decode_utf8()
        .map_err(|e| {
            Error::unexpected(format!("percent decoded {s:?} is not utf-8")).with_source(e)
        })
}

/// A scalar parameter value before it is turned into its canonical string.
///
/// Only scalars are accepted. Composite values must be serialized by the
/// caller, for example into a JSON string, and passed as [`Value::String`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Passed through untouched.
    String(String),
    /// Signed integer in base 10.
    Int(i64),
    /// Unsigned integer in base 10.
    UInt(u64),
    /// Double precision float, shortest representation that round-trips.
    Float(f64),
    /// Single precision float, shortest representation that round-trips as `f32`.
    Float32(f32),
    /// `true` or `false`.
    Bool(bool),
}

impl Value {
    /// Canonical string form of this value.
    ///
    /// Fails with `UnsupportedParameterValue` for NaN and infinities since
    /// they have no stable decimal form.
    pub fn stringify(&self) -> Result<String> {
        match self {
            Value::String(v) => Ok(v.clone()),
            Value::Int(v) => Ok(v.to_string()),
            Value::UInt(v) => Ok(v.to_string()),
            Value::Float(v) if v.is_finite() => Ok(v.to_string()),
            Value::Float32(v) if v.is_finite() => Ok(v.to_string()),
            Value::Float(v) => Err(Error::unsupported_parameter_value(format!(
                "float {v} has no canonical string form"
            ))),
            Value::Float32(v) => Err(Error::unsupported_parameter_value(format!(
                "float {v} has no canonical string form"
            ))),
            Value::Bool(v) => Ok(v.to_string()),
        }
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64, u8, u16, u32, u64, usize);

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(v: serde_json::Value) -> Result<Self> {
        match v {
            serde_json::Value::String(s) => Ok(Value::String(s)),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Value::UInt(u))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(Error::unsupported_parameter_value(format!(
                        "number {n} can't be represented"
                    )))
                }
            }
            serde_json::Value::Null => Err(Error::unsupported_parameter_value(
                "null has no canonical string form",
            )),
            serde_json::Value::Array(_) => Err(Error::unsupported_parameter_value(
                "arrays must be serialized by the caller",
            )),
            serde_json::Value::Object(_) => Err(Error::unsupported_parameter_value(
                "objects must be serialized by the caller",
            )),
        }
    }
}
