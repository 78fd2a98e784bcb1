//! # garageapp
//!
//! UI-agnostic core of the garage stock manager: vehicle records kept in a
//! spreadsheet-like row store, and the validation that keeps them consistent.
//!
//! ## Layering
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  api.rs        GarageApi<S>: entry point for UI clients  │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  commands/     list, add, remove (no terminal I/O)       │
//! │  prompt.rs     retry-until-valid input loops             │
//! │  validation.rs pure field validators                     │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  model.rs      Vehicle, normalize, find_by_id, next_id   │
//! │  store/        RecordStore adapter over sheet backends   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is always an explicit value handed to [`api::GarageApi`], so tests
//! swap in [`store::memory::InMemoryStore`] and simulate failures, empty sheets
//! and corrupt rows.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod prompt;
pub mod store;
pub mod validation;
