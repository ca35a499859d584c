//! Engine-specific error types

use thiserror::Error;
use shared::{CallerId, LeadId, SharedError};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Lead not found: {lead_id}")]
    LeadNotFound { lead_id: LeadId },

    #[error("Caller not found: {caller_id}")]
    CallerNotFound { caller_id: CallerId },

    #[error("Caller {caller_id} is not available for assignment")]
    CallerUnavailable { caller_id: CallerId },

    #[error("Validation failed: {field} {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Invalid merge request: {reason}")]
    InvalidMerge { reason: String },

    #[error("Store operation failed: {operation}: {message}")]
    StoreError { operation: String, message: String },

    #[error("Seed file error: {path}: {message}")]
    SeedError { path: String, message: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),
}

impl EngineError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_merge(reason: impl Into<String>) -> Self {
        Self::InvalidMerge { reason: reason.into() }
    }

    pub fn store(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StoreError {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
