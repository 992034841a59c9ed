//! Client SDK for the SPARTA orchestration gateway.
//!
//! Provides the wire-level data contract (workflow requests, status
//! snapshots, results) and a typed HTTP client over the gateway's
//! versioned REST API. UI concerns live in `sparta-chat`.

// HTTP client over the gateway REST API
pub mod client;

// Gateway location and request timeout
pub mod config;

// Error type for client operations
pub mod error;

// Backend seam trait implemented by the client
pub mod service;

// Wire types shared with the gateway
pub mod types;

pub use client::ApiClient;
pub use config::Config;
pub use error::{ApiError, Result};
pub use service::WorkflowService;
pub use types::{
    HealthStatus, TaskStatus, WorkflowRequest, WorkflowResult, WorkflowStage, WorkflowStatus,
};

// Re-export async_trait for downstream WorkflowService implementations
pub use async_trait::async_trait;
