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

//! OAuth 1.0a (RFC 5849) request signing.
//!
//! ```
//! use oauthsign_oauth1::{Credential, RequestSigner, SignOptions, SignatureMethod};
//!
//! # fn main() -> oauthsign_core::Result<()> {
//! let cred = Credential::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
//!     .with_access_token("nnch734d00sl2jdk")
//!     .with_access_token_secret("pfkkdhi9sl3r4s00");
//! let signer = RequestSigner::new(&cred, SignatureMethod::HmacSha1)?;
//!
//! let req = http::Request::get("http://photos.example.net/photos?size=original")
//!     .body(Vec::<u8>::new())
//!     .map_err(|e| oauthsign_core::Error::unexpected("invalid request").with_source(e))?;
//! let req = signer.sign_request(req, &SignOptions::default())?;
//! assert!(req.headers().contains_key(http::header::AUTHORIZATION));
//! # Ok(())
//! # }
//! ```

mod encode;
pub use encode::{percent_decode, percent_encode, Value};

mod params;
pub use params::{Parameter, ParameterSet};

mod base_string;
pub use base_string::{base_string, base_url};

mod credential;
pub use credential::Credential;

mod signature;
pub use signature::{SignatureMethod, Signer};

mod provider;
pub use provider::{ClockAndNonceProvider, StaticProvider, SystemProvider};

mod header;
pub use header::{build_authorization, parse_authorization};

mod request;
pub use request::RequestDescriptor;

mod sign_request;
pub use sign_request::{RequestSigner, SignOptions};

mod config;
pub use config::Config;

mod constants;
