// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::DatasetOwner;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Ownership metadata of a single dataset, as captured by ingestion and
/// handed over to presentation layers.
///
/// Every field is independently optional. `None` means "never set" and is
/// distinct from an explicitly empty value such as `Some(vec![])` or
/// `Some(String::new())`. No combination of fields is validated.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
#[serde(default, rename_all = "camelCase")]
pub struct DatasetOwnershipRecord {
    /// Owners in source order
    pub owners: Option<Vec<DatasetOwner>>,

    /// Whether the record came from an upstream system of record rather
    /// than manual entry
    pub from_upstream: Option<bool>,

    #[builder(into)]
    pub dataset_urn: Option<String>,

    /// Epoch milliseconds
    pub last_modified: Option<i64>,

    /// User or system that last modified the record
    #[builder(into)]
    pub actor: Option<String>,
}

impl DatasetOwnershipRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unset(&self) -> bool {
        self.owners.is_none()
            && self.from_upstream.is_none()
            && self.dataset_urn.is_none()
            && self.last_modified.is_none()
            && self.actor.is_none()
    }

    pub fn owners(&self) -> Option<&[DatasetOwner]> {
        self.owners.as_deref()
    }

    pub fn set_owners(&mut self, owners: Vec<DatasetOwner>) {
        self.owners = Some(owners);
    }

    pub fn from_upstream(&self) -> Option<bool> {
        self.from_upstream
    }

    pub fn set_from_upstream(&mut self, from_upstream: bool) {
        self.from_upstream = Some(from_upstream);
    }

    pub fn dataset_urn(&self) -> Option<&str> {
        self.dataset_urn.as_deref()
    }

    pub fn set_dataset_urn(&mut self, dataset_urn: impl Into<String>) {
        self.dataset_urn = Some(dataset_urn.into());
    }

    pub fn last_modified(&self) -> Option<i64> {
        self.last_modified
    }

    pub fn set_last_modified(&mut self, last_modified: i64) {
        self.last_modified = Some(last_modified);
    }

    /// View of `last_modified` as a UTC timestamp. Returns `None` when unset
    /// or when the stored milliseconds fall outside the range `chrono` can
    /// represent.
    pub fn last_modified_at(&self) -> Option<DateTime<Utc>> {
        self.last_modified
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    /// Sub-millisecond precision is dropped
    pub fn set_last_modified_at(&mut self, last_modified_at: DateTime<Utc>) {
        self.last_modified = Some(last_modified_at.timestamp_millis());
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    pub fn set_actor(&mut self, actor: impl Into<String>) {
        self.actor = Some(actor.into());
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
