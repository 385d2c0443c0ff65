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

use http::header::AUTHORIZATION;
use http::Request;
use oauthsign_oauth1::parse_authorization;
use oauthsign_oauth1::{Credential, RequestSigner, SignOptions, SignatureMethod, StaticProvider};

mod methods;
mod properties;
mod rfc;

pub const CONSUMER_KEY: &str = "dpf43f3p2l4k3l03";
pub const CONSUMER_SECRET: &str = "kd94hf93k423kf44";
pub const TOKEN: &str = "nnch734d00sl2jdk";
pub const TOKEN_SECRET: &str = "pfkkdhi9sl3r4s00";
pub const NONCE: &str = "kllo9940pd9333jh";
pub const TIMESTAMP: &str = "1191242096";
pub const PHOTOS_URL: &str = "http://photos.example.net/photos?size=original&file=vacation.jpg";

/// Build a signer with a fixed nonce and timestamp.
pub fn init_signer(cred: &Credential, method: SignatureMethod) -> RequestSigner {
    let _ = env_logger::builder().is_test(true).try_init();

    RequestSigner::new(cred, method)
        .expect("signer must be valid")
        .with_provider(StaticProvider::new(NONCE, TIMESTAMP))
}

/// The photos credential, with the access token and its secret.
pub fn photos_credential() -> Credential {
    Credential::new(CONSUMER_KEY, CONSUMER_SECRET)
        .with_access_token(TOKEN)
        .with_access_token_secret(TOKEN_SECRET)
}

/// Sign the request and return the `Authorization` header value.
pub fn authorization<B: AsRef<[u8]>>(
    signer: &RequestSigner,
    req: Request<B>,
    opts: &SignOptions,
) -> String {
    let req = signer.sign_request(req, opts).expect("sign must succeed");
    req.headers()
        .get(AUTHORIZATION)
        .expect("authorization header must be set")
        .to_str()
        .expect("header must be ascii")
        .to_string()
}

/// Sign the request and return the decoded `oauth_signature`.
pub fn signature<B: AsRef<[u8]>>(
    signer: &RequestSigner,
    req: Request<B>,
    opts: &SignOptions,
) -> String {
    let header = authorization(signer, req, opts);
    let (_, params) = parse_authorization(&header).expect("header must be parsable");
    params
        .get("oauth_signature")
        .expect("signature must be present")
        .to_string()
}

pub fn get(url: &str) -> Request<&'static str> {
    Request::get(url).body("").expect("request must be valid")
}
