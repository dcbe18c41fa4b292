//! # Inventory Server Library
//!
//! This crate provides the read-side HTTP backend for the Inventory ERP
//! system:
//! - RESTful HTTP API endpoints for approved orders and user lookups
//! - MongoDB for document storage
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Document models and repository traits
//! - **Application Layer**: Use-case services and DTOs
//! - **Infrastructure Layer**: MongoDB client and repository implementations
//! - **Presentation Layer**: HTTP routes, handlers, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! inventory_server/
//! +-- config/        Configuration management
//! +-- domain/        Document models and repository traits
//! +-- application/   Use-case services and DTOs
//! +-- infrastructure/ MongoDB implementations
//! +-- presentation/  HTTP routes, handlers, and middleware
//! +-- shared/        Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Document models and repository traits
pub mod domain;

// Application layer - Use-case services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
