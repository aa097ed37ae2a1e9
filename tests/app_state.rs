mod common;

use std::cell::RefCell;
use std::rc::Rc;

use kiosk::events::{AppEvent, EventBus, EventKind, Matcher, OrderField};
use kiosk::model::{AppState, PaymentMethod};

use common::{count_kind, make_product, record_kinds};

fn make_state() -> (AppState, EventBus) {
    let bus = EventBus::new();
    (AppState::new(bus.clone()), bus)
}

#[test]
fn set_catalog_replaces_and_announces() {
    let (mut state, bus) = make_state();
    let log = record_kinds(&bus);

    state.set_catalog(vec![
        make_product("p1", "Widget", Some(60)),
        make_product("p2", "Gadget", Some(40)),
    ]);

    assert_eq!(state.catalog().len(), 2);
    assert_eq!(*log.borrow(), vec![EventKind::CatalogChanged]);
}

#[test]
fn add_and_remove_track_membership_and_total() {
    let (mut state, _bus) = make_state();
    let p1 = make_product("p1", "Widget", Some(60));
    let p2 = make_product("p2", "Gadget", Some(40));

    state.add_to_basket(&p1);
    state.add_to_basket(&p2);
    assert!(state.basket_contains("p1"));
    assert!(state.basket_contains("p2"));
    assert_eq!(state.basket().len(), 2);
    assert_eq!(state.basket_total(), 100);

    state.remove_from_basket(&p1);
    assert!(!state.basket_contains("p1"));
    assert_eq!(state.basket_total(), 40);
}

#[test]
fn duplicate_add_is_a_no_op() {
    let (mut state, bus) = make_state();
    let log = record_kinds(&bus);
    let item = make_product("p1", "Widget", Some(60));

    state.add_to_basket(&item);
    state.add_to_basket(&item.clone());

    assert_eq!(state.basket().len(), 1);
    assert_eq!(state.basket_total(), 60);
    // The second add emitted nothing.
    assert_eq!(count_kind(&log, EventKind::CounterChanged), 1);
    assert_eq!(count_kind(&log, EventKind::BasketChanged), 1);
}

#[test]
fn basket_mutation_emits_counter_then_contents() {
    let (mut state, bus) = make_state();
    let log = record_kinds(&bus);

    state.add_to_basket(&make_product("p1", "Widget", Some(60)));

    assert_eq!(
        *log.borrow(),
        vec![EventKind::CounterChanged, EventKind::BasketChanged]
    );
}

#[test]
fn basket_changed_carries_items_and_total() {
    let (mut state, bus) = make_state();
    let payload = Rc::new(RefCell::new(None));

    let sink = Rc::clone(&payload);
    bus.subscribe(Matcher::Kind(EventKind::BasketChanged), move |event| {
        if let AppEvent::BasketChanged { items, total } = event {
            *sink.borrow_mut() = Some((items.len(), *total));
        }
        Ok(())
    });

    state.add_to_basket(&make_product("p1", "Widget", Some(60)));
    state.add_to_basket(&make_product("p2", "Gadget", Some(40)));

    assert_eq!(*payload.borrow(), Some((2, 100)));
}

#[test]
fn priceless_items_add_nothing_to_total() {
    let (mut state, _bus) = make_state();

    state.add_to_basket(&make_product("p1", "Widget", Some(60)));
    state.add_to_basket(&make_product("p2", "Mystery", None));

    assert_eq!(state.basket().len(), 2);
    assert_eq!(state.basket_total(), 60);
}

#[test]
fn clear_basket_empties_and_announces() {
    let (mut state, bus) = make_state();
    state.add_to_basket(&make_product("p1", "Widget", Some(60)));

    let log = record_kinds(&bus);
    state.clear_basket();

    assert!(state.basket().is_empty());
    assert_eq!(
        *log.borrow(),
        vec![
            EventKind::BasketCleared,
            EventKind::CounterChanged,
            EventKind::BasketChanged,
        ]
    );
}

#[test]
fn preview_reports_basket_membership() {
    let (mut state, bus) = make_state();
    let memberships = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&memberships);
    bus.subscribe(Matcher::Kind(EventKind::PreviewChanged), move |event| {
        if let AppEvent::PreviewChanged { in_basket, .. } = event {
            sink.borrow_mut().push(*in_basket);
        }
        Ok(())
    });

    let item = make_product("p1", "Widget", Some(60));
    state.set_preview(&item);
    state.add_to_basket(&item);
    state.set_preview(&item);

    assert_eq!(state.preview(), Some("p1"));
    assert_eq!(*memberships.borrow(), vec![false, true]);
}

#[test]
fn fresh_draft_fails_validation_on_empty_fields() {
    let (mut state, _bus) = make_state();

    assert!(!state.validate_order_form());

    let errors = state.form_errors();
    // Online payment is preselected, everything else starts empty.
    assert!(errors.get(OrderField::Payment).is_none());
    assert!(errors.get(OrderField::Address).is_some());
    assert!(errors.get(OrderField::Email).is_some());
    assert!(errors.get(OrderField::Phone).is_some());
}

#[test]
fn filling_every_field_passes_validation() {
    let (mut state, _bus) = make_state();

    state.set_order_field(OrderField::Address, "Elm street 5");
    state.set_order_field(OrderField::Email, "a@b.test");
    assert_eq!(state.order().email, "a@b.test");
    assert!(!state.validate_order_form());

    state.set_order_field(OrderField::Phone, "555-0100");
    assert!(state.validate_order_form());
    assert!(state.form_errors().is_empty());
}

#[test]
fn only_the_empty_field_is_reported() {
    let (mut state, _bus) = make_state();

    state.set_order_field(OrderField::Email, "a@b.test");
    state.set_order_field(OrderField::Phone, "555-0100");
    state.validate_order_form();

    let errors = state.form_errors();
    assert!(errors.get(OrderField::Address).is_some());
    assert!(errors.get(OrderField::Email).is_none());
    assert!(errors.get(OrderField::Phone).is_none());
}

#[test]
fn every_field_edit_runs_exactly_one_validation_pass() {
    let (mut state, bus) = make_state();
    let log = record_kinds(&bus);

    state.set_order_field(OrderField::Address, "Elm street 5");
    state.set_order_field(OrderField::Email, "a@b.test");
    state.set_order_field(OrderField::Phone, "555-0100");

    assert_eq!(count_kind(&log, EventKind::FormErrorsChanged), 3);
}

#[test]
fn unknown_payment_value_clears_the_selection() {
    let (mut state, _bus) = make_state();

    state.set_order_field(OrderField::Payment, "cash");
    assert_eq!(state.order().payment, Some(PaymentMethod::Cash));

    state.set_order_field(OrderField::Payment, "barter");
    assert_eq!(state.order().payment, None);
    assert!(state.form_errors().get(OrderField::Payment).is_some());
}

#[test]
fn prepare_checkout_snapshots_ids_and_total() {
    let (mut state, _bus) = make_state();
    state.add_to_basket(&make_product("p1", "Widget", Some(60)));
    state.add_to_basket(&make_product("p2", "Gadget", Some(40)));

    state.prepare_checkout();
    assert_eq!(state.order().items, vec!["p1".to_string(), "p2".to_string()]);
    assert_eq!(state.order().total, 100);

    // The snapshot is not live against the basket.
    state.remove_from_basket(&make_product("p2", "Gadget", Some(40)));
    assert_eq!(state.order().items.len(), 2);
    assert_eq!(state.order().total, 100);
}

#[test]
fn clear_order_resets_draft_silently() {
    let (mut state, bus) = make_state();
    state.set_order_field(OrderField::Address, "Elm street 5");
    state.prepare_checkout();

    let log = record_kinds(&bus);
    state.clear_order();
    let once = state.order().clone();
    state.clear_order();

    assert_eq!(*state.order(), once);
    assert_eq!(state.order().address, "");
    assert_eq!(state.order().payment, Some(PaymentMethod::Online));
    assert!(state.order().items.is_empty());
    assert!(log.borrow().is_empty());
}
