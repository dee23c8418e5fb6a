// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! JSON wire form of the ownership entities.
//!
//! Property names are camelCase (`owners`, `fromUpstream`, `datasetUrn`,
//! `lastModified`, `actor`). Unset fields are omitted when encoding, while
//! absent and `null` fields both decode to `None`. Unknown properties are
//! ignored so that payloads produced by newer writers still decode.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[tracing::instrument(level = "debug", skip_all)]
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String, JsonEncodeError> {
    serde_json::to_string(value).map_err(JsonEncodeError::log)
}

#[tracing::instrument(level = "debug", skip_all)]
pub fn to_json_value<T: Serialize>(value: &T) -> Result<serde_json::Value, JsonEncodeError> {
    serde_json::to_value(value).map_err(JsonEncodeError::log)
}

#[tracing::instrument(level = "debug", skip_all, fields(len = s.len()))]
pub fn from_json_str<T: DeserializeOwned>(s: &str) -> Result<T, JsonDecodeError> {
    serde_json::from_str(s).map_err(JsonDecodeError::log)
}

#[tracing::instrument(level = "debug", skip_all, fields(len = bytes.len()))]
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, JsonDecodeError> {
    serde_json::from_slice(bytes).map_err(JsonDecodeError::log)
}

#[tracing::instrument(level = "debug", skip_all)]
pub fn from_json_value<T: DeserializeOwned>(
    value: serde_json::Value,
) -> Result<T, JsonDecodeError> {
    serde_json::from_value(value).map_err(JsonDecodeError::log)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("Failed to encode ownership entity as JSON")]
pub struct JsonEncodeError {
    #[source]
    source: serde_json::Error,
}

impl JsonEncodeError {
    fn log(source: serde_json::Error) -> Self {
        tracing::warn!(error = %source, "JSON encoding failed");
        Self { source }
    }
}

#[derive(Error, Debug)]
#[error("Failed to decode ownership entity from JSON at line {line}, column {column}")]
pub struct JsonDecodeError {
    pub line: usize,
    pub column: usize,
    #[source]
    source: serde_json::Error,
}

impl JsonDecodeError {
    fn log(source: serde_json::Error) -> Self {
        tracing::debug!(
            error = %source,
            category = ?source.classify(),
            line = source.line(),
            column = source.column(),
            "JSON decoding failed"
        );
        Self {
            line: source.line(),
            column: source.column(),
            source,
        }
    }

    pub fn is_data_error(&self) -> bool {
        self.source.is_data()
    }

    pub fn is_syntax_error(&self) -> bool {
        self.source.is_syntax() || self.source.is_eof()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
