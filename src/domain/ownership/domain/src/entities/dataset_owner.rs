// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{OwnerIdType, OwnerType};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A single individual, group or service recorded as an owner of a dataset.
///
/// Everything except `user_name` is optional and carried verbatim: no field
/// is checked for format, and `sort_id` is an opaque ordering hint supplied
/// by whoever produced the entry.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
pub struct DatasetOwner {
    #[builder(into)]
    pub user_name: String,
    #[builder(into)]
    pub source: Option<String>,
    #[builder(into)]
    pub namespace: Option<String>,
    /// Display name
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub email: Option<String>,
    pub is_group: Option<bool>,
    pub is_active: Option<bool>,
    pub id_type: Option<OwnerIdType>,
    #[serde(rename = "type")]
    pub owner_type: Option<OwnerType>,
    #[builder(into)]
    pub sub_type: Option<String>,
    pub sort_id: Option<i32>,
    #[builder(into)]
    pub source_url: Option<String>,
    #[builder(into)]
    pub confirmed_by: Option<String>,
    /// Epoch milliseconds
    pub modified_time: Option<i64>,
}

impl DatasetOwner {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            source: None,
            namespace: None,
            name: None,
            email: None,
            is_group: None,
            is_active: None,
            id_type: None,
            owner_type: None,
            sub_type: None,
            sort_id: None,
            source_url: None,
            confirmed_by: None,
            modified_time: None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(any(feature = "testing", test))]
impl DatasetOwner {
    pub fn test(user_name: &str) -> Self {
        Self::builder()
            .user_name(user_name)
            .namespace("urn:li:corpuser")
            .email(format!("{user_name}@example.com"))
            .is_group(false)
            .is_active(true)
            .id_type(OwnerIdType::User)
            .owner_type(OwnerType::DataOwner)
            .build()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
