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

use std::thread;

use http::header::CONTENT_TYPE;
use http::Request;
use oauthsign_oauth1::{
    parse_authorization, Credential, Parameter, ParameterSet, RequestDescriptor, SignOptions,
    SignatureMethod,
};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_deterministic() {
    let signer = init_signer(&photos_credential(), SignatureMethod::HmacSha1);
    let opts = SignOptions::default().with_realm("Photos");

    assert_eq!(
        authorization(&signer, get(PHOTOS_URL), &opts),
        authorization(&signer, get(PHOTOS_URL), &opts)
    );
}

#[test]
fn test_query_order_does_not_matter() {
    let signer = init_signer(&photos_credential(), SignatureMethod::HmacSha1);
    let opts = SignOptions::default();

    assert_eq!(
        signature(
            &signer,
            get("http://photos.example.net/photos?file=vacation.jpg&size=original"),
            &opts
        ),
        signature(&signer, get(PHOTOS_URL), &opts)
    );
}

#[test]
fn test_parameter_insertion_order_does_not_matter() {
    let signer = init_signer(&photos_credential(), SignatureMethod::HmacSha256);
    let opts = SignOptions::default();

    let forward: ParameterSet = [
        Parameter::new("size", "original"),
        Parameter::new("file", "vacation.jpg"),
    ]
    .into_iter()
    .collect();
    let mut backward = ParameterSet::new();
    backward.insert("file", "vacation.jpg").expect("must insert");
    backward.insert("size", "original").expect("must insert");

    let a = RequestDescriptor::new("GET", "http", "photos.example.net", "/photos")
        .with_query(forward);
    let b = RequestDescriptor::new("GET", "http", "photos.example.net", "/photos")
        .with_query(backward);

    assert_eq!(
        signer.authorization(&a, &opts).expect("must sign"),
        signer.authorization(&b, &opts).expect("must sign")
    );
}

#[test]
fn test_host_and_scheme_are_case_insensitive() {
    let signer = init_signer(&photos_credential(), SignatureMethod::HmacSha1);
    let opts = SignOptions::default();

    let upper = RequestDescriptor::new("GET", "HTTP", "Photos.Example.NET", "/photos");
    let lower = RequestDescriptor::new("GET", "http", "photos.example.net", "/photos");
    assert_eq!(
        signer.authorization(&upper, &opts).expect("must sign"),
        signer.authorization(&lower, &opts).expect("must sign")
    );

    let other_path = RequestDescriptor::new("GET", "http", "photos.example.net", "/Photos");
    assert_ne!(
        signer.authorization(&other_path, &opts).expect("must sign"),
        signer.authorization(&lower, &opts).expect("must sign")
    );
}

#[test]
fn test_realm_is_not_signed() {
    let signer = init_signer(&photos_credential(), SignatureMethod::HmacSha1);

    assert_eq!(
        signature(&signer, get(PHOTOS_URL), &SignOptions::default().with_realm("Photos")),
        signature(&signer, get(PHOTOS_URL), &SignOptions::default())
    );
}

#[test]
fn test_body_ignored_without_form_content_type() {
    let signer = init_signer(&photos_credential(), SignatureMethod::HmacSha1);
    let opts = SignOptions::default();

    let json = Request::post("http://photos.example.net/photos")
        .header(CONTENT_TYPE, "application/json")
        .body("a=1")
        .expect("request must be valid");
    let empty = Request::post("http://photos.example.net/photos")
        .body("")
        .expect("request must be valid");
    assert_eq!(
        signature(&signer, json, &opts),
        signature(&signer, empty, &opts)
    );

    let form = Request::post("http://photos.example.net/photos")
        .header(
            CONTENT_TYPE,
            "application/x-www-form-urlencoded; charset=utf-8",
        )
        .body("a=1")
        .expect("request must be valid");
    let empty = Request::post("http://photos.example.net/photos")
        .body("")
        .expect("request must be valid");
    assert_ne!(
        signature(&signer, form, &opts),
        signature(&signer, empty, &opts)
    );
}

#[test]
fn test_header_values_round_trip() {
    let signer = init_signer(&photos_credential(), SignatureMethod::HmacSha1);
    let opts = SignOptions::default()
        .with_realm("Photo \"Album\"")
        .with_callback("http://printer.example.com/ready?a=b c&d=é");

    let header = authorization(&signer, get(PHOTOS_URL), &opts);
    let (realm, params) = parse_authorization(&header).expect("header must be parsable");

    assert_eq!(realm.as_deref(), Some("Photo \"Album\""));
    assert_eq!(
        params.get("oauth_callback"),
        Some("http://printer.example.com/ready?a=b c&d=é")
    );
    assert_eq!(params.get("oauth_consumer_key"), Some(CONSUMER_KEY));
    assert_eq!(params.get("oauth_token"), Some(TOKEN));
}

#[test]
fn test_shared_between_threads() {
    let signer = &init_signer(&photos_credential(), SignatureMethod::HmacSha1);

    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(move || signature(signer, get(PHOTOS_URL), &SignOptions::default()))
            })
            .collect();
        for h in handles {
            assert_eq!(
                h.join().expect("thread must not panic"),
                "tR3+Ty81lMeYAr/Fid0kMTYa/WM="
            );
        }
    });
}

#[test]
fn test_system_provider_nonce_is_unique() {
    let signer = RequestSigner::new(
        &Credential::new(CONSUMER_KEY, CONSUMER_SECRET),
        SignatureMethod::HmacSha1,
    )
    .expect("signer must be valid");

    let a = authorization(&signer, get(PHOTOS_URL), &SignOptions::default());
    let b = authorization(&signer, get(PHOTOS_URL), &SignOptions::default());
    assert_ne!(a, b);

    let (parts, body) = signer
        .sign_request(get(PHOTOS_URL), &SignOptions::default())
        .expect("sign must succeed")
        .into_parts();
    assert!(signer.verify(&parts, body.as_bytes()).expect("verify must succeed"));
}
