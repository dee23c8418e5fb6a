// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod dataset_owner;
mod dataset_ownership_record;
mod owner_id_type;
mod owner_type;

pub use dataset_owner::*;
pub use dataset_ownership_record::*;
pub use owner_id_type::*;
pub use owner_type::*;
