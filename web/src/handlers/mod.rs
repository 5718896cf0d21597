//! HTTP request handlers.
//!
//! This module contains all HTTP handlers organized by resource.

pub mod catalog;
pub mod favorites;
pub mod health;

pub use health::health_check;
