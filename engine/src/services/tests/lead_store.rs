//! Tests for RealLeadStore

use assert_matches::assert_matches;
use shared::{CallerId, LeadId, LeadStage};

use super::common::*;
use crate::error::EngineError;
use crate::services::RealLeadStore;
use crate::traits::LeadStore;

#[tokio::test]
async fn test_insert_and_list_in_id_order() {
    let store = RealLeadStore::new(test_state());

    let first = store.insert_lead(new_lead("Ann", "555", "NYC"), None).await.unwrap();
    let second = store
        .insert_lead(new_lead("Bob", "777", "LA"), Some(CallerId(2)))
        .await
        .unwrap();

    assert_eq!(first.stage, LeadStage::New);
    assert_eq!(second.assigned_to, Some(CallerId(2)));

    let ids: Vec<LeadId> = store.list_leads().await.unwrap().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_update_lead() {
    let store = RealLeadStore::new(test_state());
    let mut lead = store.insert_lead(new_lead("Ann", "555", "NYC"), None).await.unwrap();

    lead.stage = LeadStage::SiteVisit;
    let updated = store.update_lead(lead.clone()).await.unwrap();

    assert_eq!(updated.stage, LeadStage::SiteVisit);
    assert!(updated.updated_at >= lead.created_at);
    assert_eq!(store.get_lead(lead.id).await.unwrap().unwrap().stage, LeadStage::SiteVisit);
}

#[tokio::test]
async fn test_update_missing_lead() {
    let store = RealLeadStore::new(test_state());
    let mut lead = store.insert_lead(new_lead("Ann", "555", "NYC"), None).await.unwrap();
    lead.id = LeadId(404);

    assert_matches!(store.update_lead(lead).await, Err(EngineError::LeadNotFound { .. }));
}

#[tokio::test]
async fn test_delete_leads_counts_existing_only() {
    let store = RealLeadStore::new(test_state());
    let a = store.insert_lead(new_lead("Ann", "555", "NYC"), None).await.unwrap();
    let b = store.insert_lead(new_lead("Bob", "777", "LA"), None).await.unwrap();

    let deleted = store.delete_leads(&[a.id, LeadId(999)]).await.unwrap();
    assert_eq!(deleted, 1);
    assert!(store.get_lead(a.id).await.unwrap().is_none());
    assert!(store.get_lead(b.id).await.unwrap().is_some());
}
