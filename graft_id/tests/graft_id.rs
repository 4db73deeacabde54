// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `graft_id` crate.
//!
//! These pin down the identifier wire format and the value semantics that the
//! graph relies on when ids are used as map keys.

use std::collections::HashSet;

use graft_id::{Guid, Id, Number};

#[test]
fn ids_serialize_externally_tagged() {
    let guid = Id::from(Guid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef));
    assert_eq!(
        serde_json::to_string(&guid).unwrap(),
        r#"{"guid":"0123456789abcdef0123456789abcdef"}"#
    );
    assert_eq!(
        serde_json::to_string(&Id::string("hi")).unwrap(),
        r#"{"string":"hi"}"#
    );
    assert_eq!(
        serde_json::to_string(&Id::number(1.5)).unwrap(),
        r#"{"number":1.5}"#
    );
}

#[test]
fn ids_deserialize_from_persisted_json() {
    let guid: Id = serde_json::from_str(r#"{"guid":"aba6ac79fd3d409da860a77c90942852"}"#).unwrap();
    assert_eq!(
        guid.as_guid(),
        Some(Guid::from_u128(0xaba6_ac79_fd3d_409d_a860_a77c_9094_2852))
    );

    // Integral JSON numbers are accepted for number ids.
    let number: Id = serde_json::from_str(r#"{"number":3}"#).unwrap();
    assert_eq!(number, Id::number(3.0));

    let bad = serde_json::from_str::<Id>(r#"{"guid":"xyz"}"#);
    assert!(bad.is_err());
}

#[test]
fn variants_never_compare_equal_across_kinds() {
    assert_ne!(Id::string("3"), Id::number(3.0));
    let mut set = HashSet::new();
    set.insert(Id::string("a"));
    set.insert(Id::string("a"));
    set.insert(Id::number(0.0));
    set.insert(Id::number(-0.0));
    assert_eq!(set.len(), 2);
}

#[test]
fn accessors_match_variant() {
    let id = Id::number(2.0);
    assert_eq!(id.as_number(), Some(2.0));
    assert_eq!(id.as_str(), None);
    assert_eq!(id.as_guid(), None);
    assert_eq!(Number::from(2.0).get(), 2.0);
    assert_eq!(Id::number(2.0).to_string(), "2");
}
