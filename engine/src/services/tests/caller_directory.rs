//! Tests for RealCallerDirectory

use assert_matches::assert_matches;
use shared::{CallerId, CallerStatus, Role};

use super::common::*;
use crate::error::EngineError;
use crate::services::RealCallerDirectory;
use crate::traits::CallerDirectory;

#[tokio::test]
async fn test_create_caller_assigns_increasing_ids() {
    let directory = RealCallerDirectory::new(test_state());

    let first = directory.create_caller(new_caller("Asha")).await.unwrap();
    let second = directory.create_caller(new_caller("Ravi")).await.unwrap();

    assert_eq!(first.id, CallerId(1));
    assert_eq!(second.id, CallerId(2));
    assert_eq!(directory.list_callers().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_caller_rejects_blank_and_duplicate() {
    let directory = RealCallerDirectory::new(test_state());

    let blank = directory.create_caller(new_caller("  ")).await;
    assert_matches!(blank, Err(EngineError::ValidationError { .. }));

    directory.create_caller(new_caller("Asha")).await.unwrap();
    let mut again = new_caller("Other");
    again.email = "ASHA@example.com".to_string();
    let duplicate = directory.create_caller(again).await;
    assert_matches!(duplicate, Err(EngineError::ValidationError { field, .. }) if field == "email");
}

#[tokio::test]
async fn test_active_callers_excludes_admins_and_inactive() {
    let directory = RealCallerDirectory::new(test_state());

    let mut admin = new_caller("Boss");
    admin.role = Role::Admin;
    directory.create_caller(admin).await.unwrap();
    let a = directory.create_caller(new_caller("A")).await.unwrap();
    let b = directory.create_caller(new_caller("B")).await.unwrap();
    directory.set_status(a.id, CallerStatus::Inactive).await.unwrap();

    let pool = directory.active_callers().await.unwrap();
    assert_eq!(pool.len(), 1);
    assert_eq!(pool[0].id, b.id);
}

#[tokio::test]
async fn test_set_status_unknown_caller() {
    let directory = RealCallerDirectory::new(test_state());

    let result = directory.set_status(CallerId(99), CallerStatus::Active).await;
    assert_matches!(result, Err(EngineError::CallerNotFound { caller_id }) if caller_id == CallerId(99));
}

#[tokio::test]
async fn test_get_caller() {
    let directory = RealCallerDirectory::new(test_state());
    let created = directory.create_caller(new_caller("Asha")).await.unwrap();

    assert_eq!(directory.get_caller(created.id).await.unwrap(), Some(created));
    assert_eq!(directory.get_caller(CallerId(42)).await.unwrap(), None);
}
