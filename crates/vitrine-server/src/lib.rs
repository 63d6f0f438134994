//! Vitrine Server - HTTP content and admin API
//!
//! Hosts the resolution engine behind an actix-web server: read-only
//! content endpoints for page rendering, an admin write path for content
//! editors, and a health probe.

pub mod api;
pub mod model;
pub mod startup;
