//! # keyrelay - Password Resolver Library
//!
//! This is a facade crate that re-exports all public APIs from the resolver components.
//! Use this crate to get access to the password flows in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `IdentityAccount`, `OperationResult`, etc.
//! - **Ports**: `IdentityManagement`, `IdentityAuthentication`, `BackendApi`
//! - **Use cases**: `ForgotPasswordUseCase`, `UpdatePasswordUseCase`
//! - **Adapters**: `Auth0ManagementClient`, `Auth0AuthenticationClient`, `GraphQlBackendClient`
//! - **Service**: `ResolverService` - HTTP host for both resolvers

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use keyrelay_core::*;
}

// Re-export most commonly used core types at the root level
pub use keyrelay_core::{
    BackendUser, Connection, Email, IdentityAccount, IdentityKey, InputError, OperationResult,
    Password, SessionContext,
};

pub use keyrelay_core::{
    BackendApiError, IdentityProviderError, ResolverError, SessionResolutionError,
};

// ============================================================================
// Ports
// ============================================================================

pub use keyrelay_core::{BackendApi, IdentityAuthentication, IdentityManagement};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use keyrelay_application::*;
}

pub use keyrelay_application::{ForgotPasswordUseCase, UpdatePasswordUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic resolver entry points
    pub mod handlers {
        pub use keyrelay_adapters::handlers::*;
    }

    /// Identity-provider clients
    pub mod identity {
        pub use keyrelay_adapters::identity::*;
    }

    /// Backend API clients
    pub mod backend {
        pub use keyrelay_adapters::backend::*;
    }

    /// Configuration
    pub mod config {
        pub use keyrelay_adapters::config::*;
    }

    /// Axum routes and extractors
    pub mod axum {
        pub use keyrelay_axum::*;
    }
}

pub use keyrelay_adapters::{
    backend::GraphQlBackendClient,
    config::{AllowedOrigins, Settings},
    handlers::ResolverResponse,
    identity::{Auth0AuthenticationClient, Auth0ManagementClient, ManagementTokenProvider},
};

// ============================================================================
// Resolver Service (Main Entry Point)
// ============================================================================

pub use keyrelay_service::{
    ResolverClients, ResolverService, ServiceBuildError, build_clients, build_http_client,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
