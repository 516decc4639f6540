//! HTTP route handlers.

pub mod check_food;
pub mod health;
pub mod metrics;
