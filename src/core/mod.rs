//! # Core Application Logic
//!
//! This module contains bookrack's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (view-model) │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`book`]: The `Book` record
//! - [`catalog`]: The catalog view-model — search, sort, favourite toggling
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`config`]: TOML configuration with the defaults → file → env → CLI chain
//! - [`library`]: Seed data — built-in catalog or a JSON library file

pub mod action;
pub mod book;
pub mod catalog;
pub mod config;
pub mod library;
pub mod state;
