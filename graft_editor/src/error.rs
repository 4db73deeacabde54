// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use graft_graph::{PersistError, WriteError};
use thiserror::Error;

/// Why an editor operation failed.
#[derive(Debug, Error)]
pub enum EditError {
    /// A write was refused; the edit was rolled back.
    #[error(transparent)]
    Write(#[from] WriteError),
    /// A document or clipboard could not be encoded or decoded.
    #[error(transparent)]
    Persist(#[from] PersistError),
    /// The configuration could not be read.
    #[error("invalid editor configuration: {0}")]
    Config(serde_json::Error),
}
