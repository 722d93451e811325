//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `Catalog` / `Element` - The bundled element data
//! - `GridLayout` - Where each element sits in the table
//! - `FilterCriteria` / `compare` - Pure queries over the catalog
//! - `SessionState` - Filters, detail selection and comparison slots
//! - `ModalStack` - Modal overlay management

pub mod catalog;
pub mod compare;
pub mod element;
pub mod filter;
pub mod layout;
pub mod modal;
pub mod session;
pub mod ui;
