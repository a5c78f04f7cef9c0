//! End-to-end marketplace scenarios driven through the public API.

use cardealer::app::{filter_listings, FlowState, WorkflowController};
use cardealer::domain::{ListingStatus, MintFields};
use cardealer::storage::{seed_demo_listings, ListingStore, MemoryStore};
use cardealer::{handle_event, initialize, Action, CarDealerError, Config, Event, ListingId, ViewMode};

fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::default();
    seed_demo_listings(&mut store);
    store
}

fn mint_fields(name: &str) -> MintFields {
    MintFields {
        name: name.to_string(),
        model: "M4".to_string(),
        year: "2024".to_string(),
        price: "1.9".to_string(),
        image: "/host/cars/m4.png".to_string(),
    }
}

#[test]
fn created_listing_is_available() {
    let mut store = MemoryStore::default();
    let id = store.create(&mint_fields("BMW M4")).unwrap();
    assert_eq!(store.get(id).unwrap().status, ListingStatus::Available);
}

#[test]
fn second_sale_is_refused() {
    let mut store = seeded_store();
    let id = ListingId::new(1);
    store.mark_sold(id).unwrap();
    assert!(matches!(store.mark_sold(id), Err(CarDealerError::AlreadySold(_))));
}

#[test]
fn remove_shrinks_only_for_present_ids() {
    let mut store = seeded_store();

    store.remove(ListingId::new(2)).unwrap();
    assert!(store.get(ListingId::new(2)).is_none());
    assert_eq!(store.len(), 2);

    assert!(store.remove(ListingId::new(2)).is_err());
    assert_eq!(store.len(), 2);
}

#[test]
fn filter_is_case_insensitive_and_order_preserving() {
    let store = seeded_store();
    let all = filter_listings("", store.listings());
    assert_eq!(all.len(), store.len());
    assert!(all.iter().zip(store.listings()).all(|(a, b)| a.id == b.id));

    let lower: Vec<_> = filter_listings("tesla", store.listings()).iter().map(|l| l.id).collect();
    let upper: Vec<_> = filter_listings("TESLA", store.listings()).iter().map(|l| l.id).collect();
    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 1);
}

#[test]
fn mint_with_blank_name_flags_only_name() {
    let mut store = seeded_store();
    let err = store.create(&mint_fields("")).unwrap_err();

    let CarDealerError::Validation(report) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(report.invalid_fields(), vec!["name"]);
    assert_eq!(store.len(), 3);
}

#[test]
fn delete_request_then_cancel_keeps_collection() {
    let store = seeded_store();
    let before: Vec<_> = store.listings().to_vec();
    let mut workflow = WorkflowController::default();

    let target = store.get(ListingId::new(2)).unwrap().clone();
    workflow.request_delete(&target).unwrap();
    assert_eq!(workflow.delete_state(), FlowState::Confirming(ListingId::new(2)));

    workflow.cancel().unwrap();
    assert_eq!(workflow.delete_state(), FlowState::Idle);
    assert_eq!(store.listings(), before.as_slice());
}

#[test]
fn buy_flow_through_the_event_handler() {
    let mut state = initialize(&Config::default());
    assert_eq!(state.selected_listing().map(|l| l.name.as_str()), Some("Tesla Model S"));

    let (rendered, _) = handle_event(&mut state, &Event::RequestPurchase).unwrap();
    assert!(rendered);
    let dialog = state.compute_viewmodel(24, 80).dialog.expect("purchase dialog");
    assert!(dialog.message.contains("Tesla Model S"));

    let (_, actions) = handle_event(&mut state, &Event::Confirm).unwrap();
    let token = match actions.as_slice() {
        [Action::ScheduleDismiss { token, after_secs }] => {
            assert!((after_secs - 2.0).abs() < f64::EPSILON);
            *token
        }
        other => panic!("unexpected actions {other:?}"),
    };

    assert_eq!(state.store.get(ListingId::new(3)).unwrap().status, ListingStatus::Sold);
    let vm = state.compute_viewmodel(24, 80);
    assert!(vm.dialog.is_none());
    assert!(vm.notice.is_some());

    handle_event(&mut state, &Event::DismissElapsed(token)).unwrap();
    assert!(state.compute_viewmodel(24, 80).notice.is_none());
    assert_eq!(state.workflow.purchase_state(), FlowState::Idle);
}

#[test]
fn stale_timer_after_second_purchase_is_ignored() {
    let mut state = initialize(&Config::default());

    handle_event(&mut state, &Event::RequestPurchase).unwrap();
    let (_, first) = handle_event(&mut state, &Event::Confirm).unwrap();

    handle_event(&mut state, &Event::KeyDown).unwrap();
    handle_event(&mut state, &Event::RequestPurchase).unwrap();
    handle_event(&mut state, &Event::Confirm).unwrap();

    let [Action::ScheduleDismiss { token: first, .. }] = first.as_slice() else {
        panic!("expected dismiss action");
    };
    let (rendered, _) = handle_event(&mut state, &Event::DismissElapsed(*first)).unwrap();
    assert!(!rendered);
    assert!(state.workflow.notice_visible());
}

#[test]
fn mint_then_wallet_shows_activity() {
    let mut state = initialize(&Config::default());

    handle_event(&mut state, &Event::ShowView(ViewMode::Mint)).unwrap();
    for value in ["Ford Mustang", "GT", "1967", "0.9", "https://cars.test/gt.png"] {
        for c in value.chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        handle_event(&mut state, &Event::NextField).unwrap();
    }
    handle_event(&mut state, &Event::SubmitMint).unwrap();
    assert_eq!(state.view_mode, ViewMode::Marketplace);
    assert_eq!(state.store.listings()[0].name, "Ford Mustang");

    handle_event(&mut state, &Event::ShowView(ViewMode::Wallet)).unwrap();
    let vm = state.compute_viewmodel(24, 80);
    let cardealer::ui::ViewBody::Wallet(wallet) = vm.body else {
        panic!("expected wallet view");
    };
    assert_eq!(wallet.address, "0x742d...E5A8");
    assert_eq!(wallet.activity[0].description, "Minted Ford Mustang");
    assert_eq!(wallet.balance, "0.00 ETH");
}
