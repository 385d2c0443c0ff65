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

use oauthsign_core::Result;

use crate::encode::percent_encode;
use crate::encode::Value;

/// A single request or protocol parameter, already stringified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name, not encoded.
    pub name: String,
    /// Parameter value, not encoded.
    pub value: String,
}

impl Parameter {
    /// Create a new parameter.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// ParameterSet keeps parameters in insertion order and can hand them out
/// sorted for signing.
///
/// Repeated names are kept, never collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    params: Vec<Parameter>,
}

impl ParameterSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a scalar value, stringifying it first.
    ///
    /// Nothing is inserted if the value has no canonical string form.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let value = value.into().stringify()?;
        self.params.push(Parameter::new(name, value));
        Ok(())
    }

    /// Insert a JSON scalar. Arrays, objects and null are rejected.
    pub fn insert_json(&mut self, name: impl Into<String>, value: serde_json::Value) -> Result<()> {
        let value = Value::try_from(value)?.stringify()?;
        self.params.push(Parameter::new(name, value));
        Ok(())
    }

    /// Push a string parameter.
    #[inline]
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.push(Parameter::new(name, value));
    }

    /// Append all parameters of `other` after ours.
    pub fn merge(&mut self, other: &ParameterSet) {
        self.params.extend(other.params.iter().cloned());
    }

    /// Parse `application/x-www-form-urlencoded` content, as found in a
    /// query string or a form body.
    ///
    /// `+` decodes to a space and a name without `=` gets an empty value.
    pub fn from_urlencoded(input: &[u8]) -> Self {
        let params = form_urlencoded::parse(input)
            .map(|(k, v)| Parameter::new(k, v))
            .collect();
        Self { params }
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if the set has no parameter.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// First value of the parameter `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Parameters in the order they were inserted.
    pub fn header_order(&self) -> &[Parameter] {
        &self.params
    }

    /// Parameters sorted by encoded name, then encoded value, comparing bytes.
    ///
    /// The sort is stable so fully equal pairs keep their insertion order.
    ///
    /// Reference: [RFC 5849 3.4.1.3.2](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1.3.2)
    pub fn signing_order(&self) -> Vec<(String, String)> {
        let mut encoded: Vec<(String, String)> = self
            .params
            .iter()
            .map(|p| (percent_encode(&p.name), percent_encode(&p.value)))
            .collect();
        encoded.sort_by(|a, b| {
            a.0.as_bytes()
                .cmp(b.0.as_bytes())
                .then_with(|| a.1.as_bytes().cmp(b.1.as_bytes()))
        });

        encoded
    }

    /// Normalized parameter string: `name=value` pairs in signing order joined by `&`.
    pub fn normalized(&self) -> String {
        let mut s = String::with_capacity(16);
        for (idx, (k, v)) in self.signing_order().into_iter().enumerate() {
            if idx != 0 {
                s.push('&');
            }

            s.push_str(&k);
            s.push('=');
            s.push_str(&v);
        }

        s
    }
}

impl FromIterator<Parameter> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = Parameter>>(iter: T) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
