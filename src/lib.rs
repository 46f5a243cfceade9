//! Mission and task tracking service.
//!
//! Missions own tasks, tasks move through a fixed set of statuses, and tags put a
//! colored label on missions. Creation events are recorded in an activity log.

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod store;
