//! Huobi push/subscription message mapping.
//!
//! Provides typed models for order-list and order-detail responses, the
//! JSON accessors and timestamp conversion they are built on, and the
//! account-id → account-type lookup used to tag each order.

pub mod auth;
pub mod config;
pub mod credentials;
pub mod error;
pub mod handler;
pub mod json;
pub mod models;
pub mod rest;
pub mod timestamp;

#[cfg(test)]
mod test_env;

pub use error::{HuobiError, Result};
