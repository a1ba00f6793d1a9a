//! Gantt: task record management service.
//!
//! This crate provides the core functionality for recording tasks,
//! tracking their status and priority over time, and exposing the
//! records over an HTTP API.
//!
//! # Architecture
//!
//! Gantt follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`tasks`]: Task records, validation rules and storage
//! - [`rest`]: HTTP surface over the task lifecycle service

pub mod rest;
pub mod tasks;
