//! HTTP handlers for planets, accounts, and the introductory routes.

pub mod auth;
pub mod planets;
pub mod tutorial;
