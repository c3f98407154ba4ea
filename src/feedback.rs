//! Result records and the host feedback document.
//!
//! The launcher reads a single JSON document from stdout per invocation:
//! an ordered `items` array where each item carries a title, subtitle, the
//! value handed back when the row is actioned, copy/large-type text, a deep
//! link for the preview pane, an icon path, and a validity flag. Items with
//! `valid: false` are informational only (setup prompts, warnings) and cannot
//! be actioned.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Icon shown on prompts and "nothing found" rows.
pub const WARNING_ICON: &str = "icons/warning.png";

/// One row in the launcher's result list.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub title: String,
    pub subtitle: String,
    /// Value handed to the host action when the row is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quicklookurl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<ItemText>,
    pub icon: Icon,
}

/// Copy and large-type values for an item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemText {
    pub copy: String,
    pub largetype: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Icon {
    pub path: PathBuf,
}

impl Item {
    /// A selectable row whose `arg` is handed back to the host.
    pub fn actionable(title: impl Into<String>, subtitle: impl Into<String>, arg: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            arg: Some(arg.into()),
            valid: true,
            quicklookurl: None,
            text: None,
            icon: Icon {
                path: PathBuf::from(WARNING_ICON),
            },
        }
    }

    /// An informational, non-actionable row (setup prompts, warnings).
    pub fn warning(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            arg: None,
            valid: false,
            quicklookurl: None,
            text: None,
            icon: Icon {
                path: PathBuf::from(WARNING_ICON),
            },
        }
    }

    pub fn with_quicklook_url(mut self, url: impl Into<String>) -> Self {
        self.quicklookurl = Some(url.into());
        self
    }

    pub fn with_text(mut self, copy: impl Into<String>, largetype: impl Into<String>) -> Self {
        self.text = Some(ItemText {
            copy: copy.into(),
            largetype: largetype.into(),
        });
        self
    }

    pub fn with_icon(mut self, path: PathBuf) -> Self {
        self.icon = Icon { path };
        self
    }
}

/// The ordered item list sent to the host once per invocation.
#[derive(Debug, Default, Serialize)]
pub struct Feedback {
    pub items: Vec<Item>,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Serializes the feedback document to the given writer.
    pub fn send<W: Write>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer(&mut *writer, self).context("Failed to serialize feedback")?;
        writeln!(writer)?;
        Ok(())
    }
}
