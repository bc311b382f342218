use seller_console::domain::lead::LeadStatus;
use seller_console::domain::opportunity::{Opportunity, OpportunityStage};
use seller_console::forms::FormError;
use seller_console::forms::lead::SaveLeadForm;
use seller_console::forms::opportunity::ConvertLeadForm;
use seller_console::repository::errors::ErrorCode;
use seller_console::repository::{LeadRepository, OpportunityRepository};
use seller_console::services::convert::convert_lead;
use seller_console::services::leads::{LeadStats, lead_stats, save_lead};
use seller_console::services::opportunities::opportunity_stats;
use seller_console::services::ServiceError;
use seller_console::storage::{KeyValueStore, LEADS_KEY, OPPORTUNITIES_KEY};

mod common;

use common::{lead, seeded_failing_store};

fn convert_form() -> ConvertLeadForm {
    ConvertLeadForm {
        name: "Ann - Acme Opportunity".to_string(),
        stage: "proposal".to_string(),
        amount: "1500".to_string(),
        account_name: "Acme".to_string(),
    }
}

#[test]
fn conversion_creates_the_opportunity_and_removes_the_lead() {
    let store = seeded_failing_store(&[
        lead(5, "Ann", "Acme", 90, LeadStatus::Qualified),
        lead(6, "Bob", "Globex", 40, LeadStatus::New),
    ]);
    let mut leads = LeadRepository::new(store.clone());
    let mut opportunities = OpportunityRepository::new(store.clone());
    leads.load().unwrap();
    opportunities.load().unwrap();

    let created = convert_lead(&mut leads, &mut opportunities, 5, convert_form()).unwrap();

    assert_eq!(created.lead_id, 5);
    assert_eq!(created.stage, OpportunityStage::Proposal);
    assert_eq!(created.amount, Some(1500.0));
    assert_eq!(created.account_name, "Acme");

    assert!(leads.get(5).is_none());
    assert!(leads.get(6).is_some());

    let persisted_leads = store.get(LEADS_KEY).unwrap().unwrap();
    assert!(!persisted_leads.contains("\"id\":5"));

    let persisted: Vec<Opportunity> =
        serde_json::from_str(&store.get(OPPORTUNITIES_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted, vec![created]);
}

#[test]
fn conversion_rejects_a_malformed_amount_before_any_write() {
    let store = seeded_failing_store(&[lead(5, "Ann", "Acme", 90, LeadStatus::Qualified)]);
    let mut leads = LeadRepository::new(store.clone());
    let mut opportunities = OpportunityRepository::new(store.clone());
    leads.load().unwrap();
    opportunities.load().unwrap();

    let mut form = convert_form();
    form.amount = "lots".to_string();

    let err = convert_lead(&mut leads, &mut opportunities, 5, form).unwrap_err();
    assert!(matches!(err, ServiceError::Form(FormError::InvalidAmount)));

    assert!(leads.get(5).is_some());
    assert!(opportunities.all().is_empty());
    assert!(store.get(OPPORTUNITIES_KEY).unwrap().is_none());
}

#[test]
fn conversion_rejects_a_negative_amount() {
    let store = seeded_failing_store(&[lead(5, "Ann", "Acme", 90, LeadStatus::Qualified)]);
    let mut leads = LeadRepository::new(store.clone());
    let mut opportunities = OpportunityRepository::new(store);
    leads.load().unwrap();
    opportunities.load().unwrap();

    let mut form = convert_form();
    form.amount = "-10".to_string();

    let err = convert_lead(&mut leads, &mut opportunities, 5, form).unwrap_err();
    assert!(matches!(err, ServiceError::Form(FormError::InvalidAmount)));
}

#[test]
fn conversion_requires_a_name_and_a_known_stage() {
    let store = seeded_failing_store(&[lead(5, "Ann", "Acme", 90, LeadStatus::Qualified)]);
    let mut leads = LeadRepository::new(store.clone());
    let mut opportunities = OpportunityRepository::new(store);
    leads.load().unwrap();
    opportunities.load().unwrap();

    let mut form = convert_form();
    form.name = String::new();
    let err = convert_lead(&mut leads, &mut opportunities, 5, form).unwrap_err();
    assert!(matches!(err, ServiceError::Form(FormError::Validation(_))));

    let mut form = convert_form();
    form.stage = "daydream".to_string();
    let err = convert_lead(&mut leads, &mut opportunities, 5, form).unwrap_err();
    assert!(matches!(err, ServiceError::Form(FormError::Domain(_))));

    assert!(leads.get(5).is_some());
    assert!(opportunities.all().is_empty());
}

#[test]
fn conversion_of_an_unknown_lead_fails() {
    let store = seeded_failing_store(&[lead(5, "Ann", "Acme", 90, LeadStatus::Qualified)]);
    let mut leads = LeadRepository::new(store.clone());
    let mut opportunities = OpportunityRepository::new(store);
    leads.load().unwrap();
    opportunities.load().unwrap();

    let err = convert_lead(&mut leads, &mut opportunities, 99, convert_form()).unwrap_err();
    assert!(matches!(err, ServiceError::LeadNotFound(99)));
}

#[test]
fn failed_opportunity_write_leaves_the_lead_untouched() {
    let store = seeded_failing_store(&[lead(5, "Ann", "Acme", 90, LeadStatus::Qualified)]);
    let mut leads = LeadRepository::new(store.clone());
    let mut opportunities = OpportunityRepository::new(store.clone());
    leads.load().unwrap();
    opportunities.load().unwrap();

    store.reject_writes_to(OPPORTUNITIES_KEY);
    let err = convert_lead(&mut leads, &mut opportunities, 5, convert_form()).unwrap_err();

    match err {
        ServiceError::Repository(e) => assert_eq!(e.code, ErrorCode::SaveFailed),
        other => panic!("unexpected error: {other}"),
    }

    assert!(leads.get(5).is_some());
    assert!(opportunities.all().is_empty());
    assert!(store.get(OPPORTUNITIES_KEY).unwrap().is_none());
}

#[test]
fn failed_lead_removal_leaves_both_records_in_place() {
    let store = seeded_failing_store(&[lead(5, "Ann", "Acme", 90, LeadStatus::Qualified)]);
    let mut leads = LeadRepository::new(store.clone());
    let mut opportunities = OpportunityRepository::new(store.clone());
    leads.load().unwrap();
    opportunities.load().unwrap();

    store.reject_writes_to(LEADS_KEY);
    let err = convert_lead(&mut leads, &mut opportunities, 5, convert_form()).unwrap_err();

    match err {
        ServiceError::Repository(e) => assert_eq!(e.code, ErrorCode::DeleteFailed),
        other => panic!("unexpected error: {other}"),
    }

    // Step one committed, step two did not: the opportunity exists while
    // its source lead is still present.
    assert_eq!(opportunities.all().len(), 1);
    assert_eq!(opportunities.all()[0].lead_id, 5);
    assert!(leads.get(5).is_some());
    assert!(store.get(OPPORTUNITIES_KEY).unwrap().is_some());
}

#[test]
fn prefill_mirrors_the_selected_lead() {
    let source = lead(5, "Ann", "Acme", 90, LeadStatus::Qualified);
    let form = ConvertLeadForm::prefill(&source);

    assert_eq!(form.name, "Ann - Acme Opportunity");
    assert_eq!(form.stage, "qualification");
    assert_eq!(form.amount, "");
    assert_eq!(form.account_name, "Acme");
}

#[test]
fn save_rejects_an_invalid_email_before_any_write() {
    let store = seeded_failing_store(&[lead(1, "Ann", "Acme", 90, LeadStatus::New)]);
    let mut repo = LeadRepository::new(store.clone());
    repo.load().unwrap();

    store.reject_writes_to(LEADS_KEY);
    let err = save_lead(&mut repo, SaveLeadForm {
        id: 1,
        email: "not-an-email".to_string(),
        status: "contacted".to_string(),
    })
    .unwrap_err();

    assert!(matches!(err, ServiceError::Form(FormError::Validation(_))));
    assert_eq!(repo.get(1).unwrap().email, "ann@example.com");
}

#[test]
fn save_applies_only_the_fields_that_changed() {
    let store = seeded_failing_store(&[lead(1, "Ann", "Acme", 90, LeadStatus::New)]);
    let mut repo = LeadRepository::new(store);
    repo.load().unwrap();

    let saved = save_lead(&mut repo, SaveLeadForm {
        id: 1,
        email: "ann@example.com".to_string(),
        status: "contacted".to_string(),
    })
    .unwrap()
    .unwrap();

    assert_eq!(saved.status, LeadStatus::Contacted);
    assert_eq!(saved.email, "ann@example.com");
}

#[test]
fn save_without_changes_skips_the_write() {
    let store = seeded_failing_store(&[lead(1, "Ann", "Acme", 90, LeadStatus::New)]);
    let mut repo = LeadRepository::new(store.clone());
    repo.load().unwrap();

    // With writes rejected, an unchanged form still succeeds because no
    // persist is attempted.
    store.reject_writes_to(LEADS_KEY);
    let saved = save_lead(&mut repo, SaveLeadForm {
        id: 1,
        email: "ann@example.com".to_string(),
        status: "new".to_string(),
    })
    .unwrap()
    .unwrap();

    assert_eq!(saved.status, LeadStatus::New);
}

#[test]
fn save_of_an_unknown_lead_is_a_noop() {
    let store = seeded_failing_store(&[lead(1, "Ann", "Acme", 90, LeadStatus::New)]);
    let mut repo = LeadRepository::new(store);
    repo.load().unwrap();

    let saved = save_lead(&mut repo, SaveLeadForm {
        id: 42,
        email: "ghost@example.com".to_string(),
        status: "lost".to_string(),
    })
    .unwrap();

    assert!(saved.is_none());
}

#[test]
fn lead_stats_cover_the_whole_slice() {
    let leads = vec![
        lead(1, "Ann", "Acme", 90, LeadStatus::Qualified),
        lead(2, "Bob", "Globex", 40, LeadStatus::New),
        lead(3, "Cleo", "Initech", 70, LeadStatus::New),
    ];

    let stats = lead_stats(&leads);
    assert_eq!(stats, LeadStats {
        total: 3,
        qualified: 1,
        average_score: 67,
    });

    assert_eq!(lead_stats(&[]), LeadStats::default());
}

#[test]
fn opportunity_stats_count_open_stages_and_sum_amounts() {
    let base = Opportunity {
        id: 1,
        name: "Deal".to_string(),
        stage: OpportunityStage::Qualification,
        amount: Some(100.5),
        account_name: "Acme".to_string(),
        lead_id: 1,
    };
    let opportunities = vec![
        base.clone(),
        Opportunity {
            id: 2,
            stage: OpportunityStage::ClosedWon,
            amount: Some(50.0),
            ..base.clone()
        },
        Opportunity {
            id: 3,
            stage: OpportunityStage::Negotiation,
            amount: None,
            ..base
        },
    ];

    let stats = opportunity_stats(&opportunities);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.open, 2);
    assert_eq!(stats.pipeline_amount, 150.5);
}
