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

//! Signature methods and the signers implementing them.

use std::fmt;
use std::fmt::{Debug, Formatter};
use std::str::FromStr;

use hmac::Hmac;
use log::debug;
use oauthsign_core::hash::base64_mac;
use oauthsign_core::hash::mac_init;
use oauthsign_core::hash::verify_base64_mac;
use oauthsign_core::{Error, Result};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

use crate::credential::Credential;

/// SignatureMethod is the `oauth_signature_method` used to sign a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureMethod {
    /// `HMAC-SHA1`, the only HMAC method RFC 5849 defines.
    HmacSha1,
    /// `HMAC-SHA224`
    HmacSha224,
    /// `HMAC-SHA256`
    HmacSha256,
    /// `HMAC-SHA384`
    HmacSha384,
    /// `HMAC-SHA512`
    HmacSha512,
    /// `PLAINTEXT`
    Plaintext,
}

impl SignatureMethod {
    /// All supported methods.
    pub const ALL: [SignatureMethod; 6] = [
        SignatureMethod::HmacSha1,
        SignatureMethod::HmacSha224,
        SignatureMethod::HmacSha256,
        SignatureMethod::HmacSha384,
        SignatureMethod::HmacSha512,
        SignatureMethod::Plaintext,
    ];

    /// Wire name of this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureMethod::HmacSha1 => "HMAC-SHA1",
            SignatureMethod::HmacSha224 => "HMAC-SHA224",
            SignatureMethod::HmacSha256 => "HMAC-SHA256",
            SignatureMethod::HmacSha384 => "HMAC-SHA384",
            SignatureMethod::HmacSha512 => "HMAC-SHA512",
            SignatureMethod::Plaintext => "PLAINTEXT",
        }
    }
}

impl fmt::Display for SignatureMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureMethod {
    type Err = Error;

    /// Wire names are matched exactly.
    fn from_str(s: &str) -> Result<Self> {
        SignatureMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::config_invalid(format!("unsupported signature method: {s}")))
    }
}

/// Signer turns a signature base string into `oauth_signature`.
///
/// HMAC variants hold the MAC state already keyed with the signing key. Each
/// call to [`Signer::sign`] works on a clone of it, so one signer can be
/// shared between threads.
#[derive(Clone)]
pub enum Signer {
    /// HMAC-SHA1 keyed state.
    HmacSha1(Hmac<Sha1>),
    /// HMAC-SHA224 keyed state.
    HmacSha224(Hmac<Sha224>),
    /// HMAC-SHA256 keyed state.
    HmacSha256(Hmac<Sha256>),
    /// HMAC-SHA384 keyed state.
    HmacSha384(Hmac<Sha384>),
    /// HMAC-SHA512 keyed state.
    HmacSha512(Hmac<Sha512>),
    /// The signing key, which is the signature itself.
    Plaintext(String),
}

impl Signer {
    /// Create a signer for `method` from the credential's secrets.
    pub fn new(method: SignatureMethod, cred: &Credential) -> Result<Self> {
        let key = cred.signing_key();
        debug!("building {method} signer");

        let signer = match method {
            SignatureMethod::HmacSha1 => Signer::HmacSha1(mac_init(key.as_bytes())?),
            SignatureMethod::HmacSha224 => Signer::HmacSha224(mac_init(key.as_bytes())?),
            SignatureMethod::HmacSha256 => Signer::HmacSha256(mac_init(key.as_bytes())?),
            SignatureMethod::HmacSha384 => Signer::HmacSha384(mac_init(key.as_bytes())?),
            SignatureMethod::HmacSha512 => Signer::HmacSha512(mac_init(key.as_bytes())?),
            SignatureMethod::Plaintext => Signer::Plaintext(key),
        };

        Ok(signer)
    }

    /// The method this signer implements.
    pub fn method(&self) -> SignatureMethod {
        match self {
            Signer::HmacSha1(_) => SignatureMethod::HmacSha1,
            Signer::HmacSha224(_) => SignatureMethod::HmacSha224,
            Signer::HmacSha256(_) => SignatureMethod::HmacSha256,
            Signer::HmacSha384(_) => SignatureMethod::HmacSha384,
            Signer::HmacSha512(_) => SignatureMethod::HmacSha512,
            Signer::Plaintext(_) => SignatureMethod::Plaintext,
        }
    }

    /// Sign the base string.
    ///
    /// The result is not percent encoded yet. `PLAINTEXT` ignores the input.
    pub fn sign(&self, base_string: &str) -> String {
        let content = base_string.as_bytes();
        match self {
            Signer::HmacSha1(mac) => base64_mac(mac, content),
            Signer::HmacSha224(mac) => base64_mac(mac, content),
            Signer::HmacSha256(mac) => base64_mac(mac, content),
            Signer::HmacSha384(mac) => base64_mac(mac, content),
            Signer::HmacSha512(mac) => base64_mac(mac, content),
            Signer::Plaintext(key) => key.clone(),
        }
    }

    /// Check a decoded `oauth_signature` against the base string in constant time.
    pub fn verify(&self, base_string: &str, signature: &str) -> bool {
        let content = base_string.as_bytes();
        match self {
            Signer::HmacSha1(mac) => verify_base64_mac(mac, content, signature),
            Signer::HmacSha224(mac) => verify_base64_mac(mac, content, signature),
            Signer::HmacSha256(mac) => verify_base64_mac(mac, content, signature),
            Signer::HmacSha384(mac) => verify_base64_mac(mac, content, signature),
            Signer::HmacSha512(mac) => verify_base64_mac(mac, content, signature),
            Signer::Plaintext(key) => key.as_bytes().ct_eq(signature.as_bytes()).into(),
        }
    }
}

impl Debug for Signer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("method", &self.method())
            .finish_non_exhaustive()
    }
}
