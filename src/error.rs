// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Validation failures detected at the engine boundary, before any fold
/// runs. None of these is fatal to the process; a rejected input simply
/// produces no result for that one query.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid monetary amount '{0}': must be a non-negative decimal")]
    InvalidAmount(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid period '{0}', expected one of the enumerated period tags")]
    InvalidPeriod(String),

    #[error("event account belongs to owner {event_owner}, query is for owner {query_owner}")]
    AccountMismatch { event_owner: i64, query_owner: i64 },
}
