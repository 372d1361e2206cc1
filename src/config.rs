//! Resolver options
//!
//! The defaults reproduce the fixed JSDoc rules: a block comment opening
//! with `/**` that ends on the line directly above (or the same line as) the
//! documented construct.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tunables for [`JsDocResolver`](crate::ast::JsDocResolver)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JsDocOptions {
    /// Largest allowed `start line - comment end line`
    pub max_line_gap: u32,
    /// First character of a JSDoc block comment's text
    pub marker: char,
}

impl JsDocOptions {
    pub const DEFAULT_MAX_LINE_GAP: u32 = 1;
    pub const DEFAULT_MARKER: char = '*';

    /// Load options from a JSON object; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config {
            message: e.to_string(),
        })
    }

    pub fn with_max_line_gap(mut self, max_line_gap: u32) -> Self {
        self.max_line_gap = max_line_gap;
        self
    }
}

impl Default for JsDocOptions {
    fn default() -> Self {
        Self {
            max_line_gap: Self::DEFAULT_MAX_LINE_GAP,
            marker: Self::DEFAULT_MARKER,
        }
    }
}
