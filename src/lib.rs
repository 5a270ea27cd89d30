//! Blockpress - a block-based page builder CMS backend
//!
//! This library provides the HTTP API, the data models and the service and
//! repository layers of the Blockpress CMS.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
