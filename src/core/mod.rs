//! # Core Application Logic
//!
//! This module contains sabi's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Command (19 RPC ops) │
//!                    │  • NavigationStack      │
//!                    │  • BatchCoordinator     │
//!                    │                         │
//!                    │  No terminal I/O here.  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    RPC     │      │   Config   │
//!     │  Adapter   │      │ Dispatcher │      │  (toml)    │
//!     │ (ratatui)  │      │ (reqwest)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`command`]: The `RpcOp` catalog, every remote operation
//! - [`nav`]: The navigation stack driving what the user sees
//! - [`batch`]: Deferred execution of queued jobs

pub mod batch;
pub mod command;
pub mod config;
pub mod nav;
pub mod state;
