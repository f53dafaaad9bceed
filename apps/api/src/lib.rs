//! Football Teams API Library
//!
//! This library provides the core functionality for the football teams API:
//! the team domain, its services, storage adapters, and the HTTP layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod services;
