//! # Command Layer
//!
//! This module contains the **core business logic** for the stock sheet. Each
//! command lives in its own submodule and implements plain Rust functions that
//! operate on a [`RecordStore`](crate::store::RecordStore).
//!
//! ## What Commands Do NOT Do
//!
//! Commands explicitly avoid:
//! - **Terminal I/O**: No stdout, stderr, or table formatting
//! - **User interaction**: No prompts or confirmations; the CLI collects input
//!   (through [`crate::prompt`]) and hands commands finished values
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. It carries the vehicles that
//! were listed or affected plus leveled messages; the UI decides how to render
//! them.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and its failure switches, so every branch
//! (empty sheet, corrupt sheet, failing store) runs without a network.
//!
//! ## Command Modules
//!
//! - [`list`]: Read and normalize the whole stock
//! - [`add`]: Assign the next ID and append a vehicle
//! - [`remove`]: Delete a located vehicle's row
//! - [`helpers`]: Shared fetch + normalize

use crate::model::Vehicle;
use serde::Serialize;

pub mod add;
pub mod helpers;
pub mod list;
pub mod remove;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_vehicles: Vec<Vehicle>,
    pub listed_vehicles: Vec<Vehicle>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_vehicles(mut self, vehicles: Vec<Vehicle>) -> Self {
        self.affected_vehicles = vehicles;
        self
    }

    pub fn with_listed_vehicles(mut self, vehicles: Vec<Vehicle>) -> Self {
        self.listed_vehicles = vehicles;
        self
    }
}
