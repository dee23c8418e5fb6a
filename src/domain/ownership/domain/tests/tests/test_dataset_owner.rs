// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::str::FromStr;

use dataset_ownership::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_new_owner_has_only_user_name() {
    let owner = DatasetOwner::new("alice");

    pretty_assertions::assert_eq!(owner, DatasetOwner::builder().user_name("alice").build());
    assert_eq!(owner.email, None);
    assert_eq!(owner.owner_type, None);
    assert_eq!(owner.sort_id, None);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_owner_builder() {
    let owner = DatasetOwner::builder()
        .user_name("data-eng")
        .name("Data Engineering")
        .is_group(true)
        .id_type(OwnerIdType::Group)
        .owner_type(OwnerType::Producer)
        .sort_id(2)
        .source("SCM")
        .source_url("https://scm.example.com/data-eng")
        .confirmed_by("alice")
        .modified_time(1_700_000_000_000)
        .build();

    assert_eq!(owner.user_name, "data-eng");
    assert_eq!(owner.name.as_deref(), Some("Data Engineering"));
    assert_eq!(owner.is_group, Some(true));
    assert_eq!(owner.id_type, Some(OwnerIdType::Group));
    assert_eq!(owner.owner_type, Some(OwnerType::Producer));
    assert_eq!(owner.sort_id, Some(2));
    assert_eq!(owner.namespace, None);
    assert_eq!(owner.is_active, None);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_owner_id_type_strings() {
    assert_eq!(OwnerIdType::User.to_string(), "USER");
    assert_eq!(OwnerIdType::Service.to_string(), "SERVICE");
    assert_eq!(OwnerIdType::from_str("GROUP"), Ok(OwnerIdType::Group));
    assert_eq!(OwnerIdType::from_str("URN"), Ok(OwnerIdType::Urn));
    assert!(OwnerIdType::from_str("user").is_err());
}

#[test]
fn test_owner_type_strings() {
    assert_eq!(OwnerType::DataOwner.to_string(), "DataOwner");
    assert_eq!(
        OwnerType::from_str("Stakeholder"),
        Ok(OwnerType::Stakeholder)
    );
    assert!(OwnerType::from_str("Owner").is_err());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
