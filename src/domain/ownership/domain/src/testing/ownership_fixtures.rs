// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{DatasetOwner, DatasetOwnershipRecord};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const TEST_DATASET_URN: &str = "urn:li:dataset:(example,1)";
pub const TEST_ACTOR: &str = "user123";
pub const TEST_LAST_MODIFIED_MS: i64 = 1_700_000_000_000;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl DatasetOwnershipRecord {
    /// Fully populated record owned by the given users, in order
    pub fn test(owner_names: &[&str]) -> Self {
        Self::builder()
            .owners(owner_names.iter().map(|n| DatasetOwner::test(n)).collect())
            .from_upstream(true)
            .dataset_urn(TEST_DATASET_URN)
            .last_modified(TEST_LAST_MODIFIED_MS)
            .actor(TEST_ACTOR)
            .build()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
