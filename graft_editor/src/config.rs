// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor configuration.

use alloc::sync::Arc;

use graft_display::RenderOptions;
use serde::Deserialize;

use crate::error::EditError;

/// Settings for an [`EditorState`](crate::EditorState).
///
/// Every field has a default, so a host can deserialize a partial JSON
/// object:
///
/// ```rust
/// use graft_editor::EditorConfig;
///
/// let config = EditorConfig::from_json(r#"{ "undo_limit": 50, "separator": ";" }"#).unwrap();
/// assert_eq!(config.undo_limit, Some(50));
/// assert_eq!(&*config.separator, ";");
/// assert_eq!(&*config.opening, "[");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Most undo steps kept; the oldest are dropped first. `None` keeps all.
    pub undo_limit: Option<usize>,
    /// Shown for fields and constructors without a name.
    pub unnamed: Arc<str>,
    /// Text before the first element of a list.
    pub opening: Arc<str>,
    /// Text after the last element of a list.
    pub closing: Arc<str>,
    /// Text between list elements.
    pub separator: Arc<str>,
    /// Whether a cycle with no recorded choice is collapsed.
    pub collapse_cycles: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            undo_limit: None,
            unnamed: options.unnamed,
            opening: options.opening,
            closing: options.closing,
            separator: options.separator,
            collapse_cycles: options.collapse_cycles,
        }
    }
}

impl EditorConfig {
    /// Starts a builder from the defaults.
    #[must_use]
    pub fn builder() -> EditorConfigBuilder {
        EditorConfigBuilder::new()
    }

    /// Reads a configuration from JSON; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, EditError> {
        serde_json::from_str(text).map_err(EditError::Config)
    }

    /// The presentation part of the configuration.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            unnamed: self.unnamed.clone(),
            opening: self.opening.clone(),
            closing: self.closing.clone(),
            separator: self.separator.clone(),
            collapse_cycles: self.collapse_cycles,
        }
    }
}

/// Builder for [`EditorConfig`].
#[derive(Clone, Debug, Default)]
pub struct EditorConfigBuilder {
    config: EditorConfig,
}

impl EditorConfigBuilder {
    /// Creates a builder holding the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `limit` undo steps.
    #[must_use]
    pub fn undo_limit(mut self, limit: usize) -> Self {
        self.config.undo_limit = Some(limit);
        self
    }

    /// Sets the text shown for things without a name.
    #[must_use]
    pub fn unnamed(mut self, text: impl Into<Arc<str>>) -> Self {
        self.config.unnamed = text.into();
        self
    }

    /// Sets the default list punctuation.
    #[must_use]
    pub fn list_punctuation(
        mut self,
        opening: impl Into<Arc<str>>,
        closing: impl Into<Arc<str>>,
        separator: impl Into<Arc<str>>,
    ) -> Self {
        self.config.opening = opening.into();
        self.config.closing = closing.into();
        self.config.separator = separator.into();
        self
    }

    /// Sets whether cycles start out collapsed.
    #[must_use]
    pub fn collapse_cycles(mut self, collapse: bool) -> Self {
        self.config.collapse_cycles = collapse;
        self
    }

    /// Finishes the configuration.
    #[must_use]
    pub fn build(self) -> EditorConfig {
        self.config
    }
}
