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

use oauthsign_oauth1::{Credential, SignOptions, SignatureMethod};
use pretty_assertions::assert_eq;
use test_case::test_case;

use super::*;

#[test_case(SignatureMethod::HmacSha1, "tR3+Ty81lMeYAr/Fid0kMTYa/WM="; "hmac_sha1")]
#[test_case(SignatureMethod::HmacSha224, "ycgflrLS+1kf4HAiA5YbFWTlosayqxpESKfC/A=="; "hmac_sha224")]
#[test_case(
    SignatureMethod::HmacSha256,
    "WVPzl1j6ZsnkIjWr7e3OZ3jkenL57KwaLFhYsroX1hg=";
    "hmac_sha256"
)]
#[test_case(
    SignatureMethod::HmacSha384,
    "l59uSHEtmBKa3ePDQbKT3yYr7KBiI9NbN0qX6xj594WQz/cWLoTX1871hNYq2Q6P";
    "hmac_sha384"
)]
#[test_case(
    SignatureMethod::HmacSha512,
    "nQYVqZl8EkEH4fThSn+25i1gc68aX+FHTHSAXrxIl2ixdAofXM/pq2x90UaOFIZQxvkzE5VRZpPbjo6i+fe6rg==";
    "hmac_sha512"
)]
fn test_hmac_methods(method: SignatureMethod, expected: &str) {
    let signer = init_signer(&photos_credential(), method);
    let header = authorization(&signer, get(PHOTOS_URL), &SignOptions::default());

    assert!(header.contains(&format!("oauth_signature_method=\"{method}\"")));
    assert_eq!(
        signature(&signer, get(PHOTOS_URL), &SignOptions::default()),
        expected
    );
}

#[test]
fn test_without_token() {
    let signer = init_signer(
        &Credential::new(CONSUMER_KEY, CONSUMER_SECRET),
        SignatureMethod::HmacSha1,
    );

    let header = authorization(&signer, get(PHOTOS_URL), &SignOptions::default());
    assert!(!header.contains("oauth_token="));
    assert_eq!(
        signature(&signer, get(PHOTOS_URL), &SignOptions::default()),
        "Jg5MXVnexhzMDTv7IBUy3goIGqc="
    );
}

#[test]
fn test_without_token_with_token_secret() {
    let cred =
        Credential::new(CONSUMER_KEY, CONSUMER_SECRET).with_access_token_secret(TOKEN_SECRET);
    let signer = init_signer(&cred, SignatureMethod::HmacSha1);

    assert_eq!(
        signature(&signer, get(PHOTOS_URL), &SignOptions::default()),
        "WxydVSuTSrs7nu8nqCUpbRQuu/U="
    );
}

#[test_case("http://photos.example.net/a/b/c/?size=original&file=vacation.jpg", "ixhhhte3356BnKrwap0ZttXlIFg="; "trailing_slash")]
#[test_case("http://photos.example.net/a/b/c?size=original&file=vacation.jpg", "nVhLWlxUgmqTt5zl15jyYNi/Ce8="; "no_trailing_slash")]
fn test_path(url: &str, expected: &str) {
    let cred =
        Credential::new(CONSUMER_KEY, CONSUMER_SECRET).with_access_token_secret(TOKEN_SECRET);
    let signer = init_signer(&cred, SignatureMethod::HmacSha1);

    assert_eq!(
        signature(&signer, get(url), &SignOptions::default()),
        expected
    );
}
