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

//! Examples from RFC 5849.

use http::header::CONTENT_TYPE;
use http::Request;
use oauthsign_oauth1::{Credential, SignOptions, SignatureMethod, StaticProvider};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_photos_request() {
    let signer = init_signer(&photos_credential(), SignatureMethod::HmacSha1);

    assert_eq!(
        authorization(&signer, get(PHOTOS_URL), &SignOptions::default()),
        "OAuth oauth_token=\"nnch734d00sl2jdk\", oauth_nonce=\"kllo9940pd9333jh\", \
         oauth_signature_method=\"HMAC-SHA1\", oauth_consumer_key=\"dpf43f3p2l4k3l03\", \
         oauth_timestamp=\"1191242096\", oauth_version=\"1.0\", \
         oauth_signature=\"tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D\""
    );
}

#[test]
fn test_photos_request_without_version() {
    let signer = init_signer(&photos_credential(), SignatureMethod::HmacSha1);
    let opts = SignOptions::default().with_version(false);

    let header = authorization(&signer, get(PHOTOS_URL), &opts);
    assert!(!header.contains("oauth_version"));
    assert_eq!(
        signature(&signer, get(PHOTOS_URL), &opts),
        "dLOLK+Rer90siIrHXE0LMA6Y6X4="
    );
}

#[test]
fn test_signature_base_string_example() {
    let cred = Credential::new("9djdj82h48djs9d2", "j49sk3j29djd")
        .with_access_token("kkk9d7dh3k39sjv7")
        .with_access_token_secret("dh893hdasih9");
    let signer = init_signer(&cred, SignatureMethod::HmacSha1)
        .with_provider(StaticProvider::new("7d8f3e4a", "137131201"));

    let req = Request::post("http://example.com/request?b5=%3D%253D&a3=a&c%40=&a2=r%20b")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body("c2&a3=2+q")
        .expect("request must be valid");
    let opts = SignOptions::default()
        .with_realm("Example")
        .with_version(false);

    assert_eq!(
        authorization(&signer, req, &opts),
        "OAuth realm=\"Example\", oauth_token=\"kkk9d7dh3k39sjv7\", \
         oauth_nonce=\"7d8f3e4a\", oauth_signature_method=\"HMAC-SHA1\", \
         oauth_consumer_key=\"9djdj82h48djs9d2\", oauth_timestamp=\"137131201\", \
         oauth_signature=\"r6%2FTJjbCOr97%2F%2BUU0NsvSne7s5g%3D\""
    );
}

#[test]
fn test_temporary_credentials_request() {
    let cred = Credential::new(CONSUMER_KEY, CONSUMER_SECRET);
    let signer = init_signer(&cred, SignatureMethod::HmacSha1)
        .with_provider(StaticProvider::new("wIjqoS", "137131200"));

    let req = Request::post("https://photos.example.net/initiate")
        .body("")
        .expect("request must be valid");
    let opts = SignOptions::default()
        .with_realm("Photos")
        .with_version(false)
        .with_callback("http://printer.example.com/ready");

    assert_eq!(
        authorization(&signer, req, &opts),
        "OAuth realm=\"Photos\", oauth_nonce=\"wIjqoS\", \
         oauth_signature_method=\"HMAC-SHA1\", oauth_consumer_key=\"dpf43f3p2l4k3l03\", \
         oauth_timestamp=\"137131200\", \
         oauth_callback=\"http%3A%2F%2Fprinter.example.com%2Fready\", \
         oauth_signature=\"74KNZJeDHnMBp0EMJ9ZHt%2FXKycU%3D\""
    );
}

#[test]
fn test_plaintext() {
    let signer = init_signer(&photos_credential(), SignatureMethod::Plaintext);
    assert_eq!(
        signature(&signer, get(PHOTOS_URL), &SignOptions::default()),
        "kd94hf93k423kf44&pfkkdhi9sl3r4s00"
    );

    let header = authorization(&signer, get(PHOTOS_URL), &SignOptions::default());
    assert!(header.contains("oauth_signature=\"kd94hf93k423kf44%26pfkkdhi9sl3r4s00\""));
    assert!(header.contains("oauth_signature_method=\"PLAINTEXT\""));
}

#[test]
fn test_plaintext_without_token_secret() {
    let signer = init_signer(
        &Credential::new(CONSUMER_KEY, CONSUMER_SECRET),
        SignatureMethod::Plaintext,
    );

    let header = authorization(&signer, get(PHOTOS_URL), &SignOptions::default());
    assert!(header.contains("oauth_signature=\"kd94hf93k423kf44%26\""));
    assert!(!header.contains("oauth_token="));
}
