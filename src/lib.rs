//! Server-rendered storefront skeleton.
//!
//! A small hyper-based web server with a fixed route table: each route either
//! renders a named template against a per-request view context or issues a
//! redirect, with static assets served from a public directory and a 404
//! fallback for everything else.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
pub mod view;
