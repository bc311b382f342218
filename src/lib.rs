//! State and derivation core of a lead-management console.
//!
//! Leads live in a [`repository::LeadRepository`] that persists JSON
//! collections through a pluggable key-value [`storage`] backend and
//! derives filtered/sorted/paginated views on demand. Every failure
//! surfaces as a normalized, user-displayable error instead of a panic.
//! Converting a lead into an opportunity is a deliberate two-step write
//! sequence owned by [`services::convert`]; [`console::SellerConsole`]
//! wires both repositories and their error state together the way the
//! dashboard page consumes them.

pub mod console;
pub mod domain;
pub mod dto;
pub mod error_handler;
pub mod forms;
pub mod pagination;
pub mod repository;
pub mod services;
pub mod storage;

pub use console::SellerConsole;
