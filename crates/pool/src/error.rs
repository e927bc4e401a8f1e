//! Error types for pool operations

use thiserror::Error;

/// Result type for pool operations
pub type PoolResult<T> = Result<T, PoolError>;

/// Errors reported by pools and the pool registry
///
/// Every variant is recoverable: the operation that produced it is aborted
/// without touching pool state, and the caller decides whether to retry,
/// fall back, or surface the problem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// The template source could not resolve a template for this pool name.
    #[error("no template available for pool '{pool}'")]
    TemplateNotFound {
        /// The pool name the lookup was attempted for
        pool: String,
    },

    /// The named pool has never been registered.
    #[error("pool '{pool}' is not registered")]
    UnknownPool {
        /// The requested pool name
        pool: String,
    },

    /// An instance was returned to a pool other than the one that owns it.
    #[error("instance owned by pool '{owner}' cannot be returned to pool '{pool}'")]
    ForeignInstance {
        /// The pool the return was attempted on
        pool: String,
        /// The pool recorded in the instance's tag
        owner: String,
    },
}

impl PoolError {
    /// Create a template-not-found error
    pub fn template_not_found(pool: impl Into<String>) -> Self {
        Self::TemplateNotFound { pool: pool.into() }
    }

    /// Create an unknown-pool error
    pub fn unknown_pool(pool: impl Into<String>) -> Self {
        Self::UnknownPool { pool: pool.into() }
    }

    /// Create a foreign-instance error
    pub fn foreign_instance(pool: impl Into<String>, owner: impl Into<String>) -> Self {
        Self::ForeignInstance { pool: pool.into(), owner: owner.into() }
    }
}
