use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;

use anyhow::Result;
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::{debug, error, warn};

use crate::api::{self, NetEvent, StoreApi};
use crate::config::Config;
use crate::events::{AppEvent, EventBus, EventKind, FieldPath, FormKind, Matcher, OrderField};
use crate::model::{AppState, ProductItem};
use crate::ui::basket::{BasketProps, BasketView};
use crate::ui::card::{Card, CardKind, CardProps};
use crate::ui::events::{EventHandler, RuntimeEvent};
use crate::ui::forms::{ContactsForm, ContactsFormProps, OrderForm, OrderFormProps};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::modal::{Modal, ModalContent};
use crate::ui::page::{Page, PageProps};
use crate::ui::success::{Success, SuccessProps};
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::view::View;

const SUBMIT_FAILED_NOTICE: &str = "Submission failed, press Enter to retry";

/// The assembled UI: the bus, the state store, and every view, shared via
/// `Rc<RefCell<_>>` so that bus handlers can reach them. Everything lives on
/// the single UI thread.
pub struct Ui {
    pub bus: EventBus,
    pub state: Rc<RefCell<AppState>>,
    pub page: Rc<RefCell<Page>>,
    pub modal: Rc<RefCell<Modal>>,
    pub basket: Rc<RefCell<BasketView>>,
    pub preview: Rc<RefCell<Card>>,
    pub order_form: Rc<RefCell<OrderForm>>,
    pub contacts_form: Rc<RefCell<ContactsForm>>,
    pub success: Rc<RefCell<Success>>,
}

impl Ui {
    pub fn new(bus: EventBus) -> Self {
        Self {
            state: Rc::new(RefCell::new(AppState::new(bus.clone()))),
            page: Rc::new(RefCell::new(Page::new())),
            modal: Rc::new(RefCell::new(Modal::new(bus.clone()))),
            basket: Rc::new(RefCell::new(BasketView::new())),
            preview: Rc::new(RefCell::new(Card::new(CardKind::Preview))),
            order_form: Rc::new(RefCell::new(OrderForm::new())),
            contacts_form: Rc::new(RefCell::new(ContactsForm::new())),
            success: Rc::new(RefCell::new(Success::new())),
            bus,
        }
    }
}

fn catalog_card(item: &ProductItem) -> Card {
    let mut card = Card::new(CardKind::Tile);
    card.update(CardProps {
        title: Some(item.title.clone()),
        image: Some(item.image.clone()),
        category: Some(item.category.clone()),
        price: Some(item.price),
        ..CardProps::default()
    });
    card
}

fn basket_row(index: usize, item: &ProductItem) -> Card {
    let mut card = Card::new(CardKind::Row);
    card.update(CardProps {
        index: Some(index + 1),
        title: Some(item.title.clone()),
        price: Some(item.price),
        ..CardProps::default()
    });
    card
}

fn preview_button_text(item: &ProductItem, in_basket: bool) -> String {
    if !item.is_purchasable() {
        "Unavailable".to_string()
    } else if in_basket {
        "Remove from basket".to_string()
    } else {
        "Buy".to_string()
    }
}

/// Connect every subscriber. This is the whole business choreography:
/// state-change events fan out to views, user-intent events fan into state.
pub fn wire(ui: &Ui, api: StoreApi, tx: Sender<RuntimeEvent>, in_flight: Rc<Cell<bool>>) {
    let bus = &ui.bus;

    // Diagnostic monitor for every event crossing the bus.
    bus.subscribe_all(|event| {
        debug!(kind = ?event.kind(), "event");
        Ok(())
    });

    // Catalog arrived: rebuild the page's card grid.
    {
        let page = Rc::clone(&ui.page);
        bus.subscribe(Matcher::Kind(EventKind::CatalogChanged), move |event| {
            if let AppEvent::CatalogChanged { catalog } = event {
                let cards = catalog.iter().map(catalog_card).collect();
                page.borrow_mut().update(PageProps {
                    catalog: Some(cards),
                    ..PageProps::default()
                });
            }
            Ok(())
        });
    }

    // Basket size changed: refresh the header counter.
    {
        let page = Rc::clone(&ui.page);
        bus.subscribe(Matcher::Kind(EventKind::CounterChanged), move |event| {
            if let AppEvent::CounterChanged { count } = event {
                page.borrow_mut().update(PageProps {
                    counter: Some(*count),
                    ..PageProps::default()
                });
            }
            Ok(())
        });
    }

    // Basket contents changed: rebuild rows, update total, gate checkout.
    {
        let basket = Rc::clone(&ui.basket);
        bus.subscribe(Matcher::Kind(EventKind::BasketChanged), move |event| {
            if let AppEvent::BasketChanged { items, total } = event {
                let rows = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| basket_row(index, item))
                    .collect();
                let mut basket = basket.borrow_mut();
                basket.update(BasketProps {
                    items: Some(rows),
                    total: Some(*total),
                });
                basket.toggle_button(*total == 0);
            }
            Ok(())
        });
    }

    // A product was selected for preview: fill the preview card and open
    // the modal around it.
    {
        let preview = Rc::clone(&ui.preview);
        let modal = Rc::clone(&ui.modal);
        bus.subscribe(Matcher::Kind(EventKind::PreviewChanged), move |event| {
            if let AppEvent::PreviewChanged { item, in_basket } = event {
                preview.borrow_mut().update(CardProps {
                    title: Some(item.title.clone()),
                    description: Some(item.description.clone()),
                    image: Some(item.image.clone()),
                    category: Some(item.category.clone()),
                    price: Some(item.price),
                    button_text: Some(preview_button_text(item, *in_basket)),
                    ..CardProps::default()
                });
                modal.borrow_mut().open(ModalContent::Preview);
            }
            Ok(())
        });
    }

    // Validation ran: both form steps derive their own validity from their
    // subset of the error mapping.
    {
        let order_form = Rc::clone(&ui.order_form);
        let contacts_form = Rc::clone(&ui.contacts_form);
        bus.subscribe(Matcher::Kind(EventKind::FormErrorsChanged), move |event| {
            if let AppEvent::FormErrorsChanged { errors } = event {
                order_form.borrow_mut().update(OrderFormProps {
                    valid: Some(errors.order_valid()),
                    errors: Some(errors.order_message()),
                    ..OrderFormProps::default()
                });
                contacts_form.borrow_mut().update(ContactsFormProps {
                    valid: Some(errors.contacts_valid()),
                    errors: Some(errors.contacts_message()),
                    ..ContactsFormProps::default()
                });
            }
            Ok(())
        });
    }

    // Field edits from either form step land in the one state mutation.
    for form in [FormKind::Order, FormKind::Contacts] {
        let state = Rc::clone(&ui.state);
        bus.subscribe(Matcher::Form(form), move |event| {
            if let AppEvent::FieldChanged { path, value } = event {
                state.borrow_mut().set_order_field(path.field, value);
            }
            Ok(())
        });
    }

    // Card selected on the page: record the preview selection.
    {
        let state = Rc::clone(&ui.state);
        bus.subscribe(Matcher::Kind(EventKind::CardSelected), move |event| {
            if let AppEvent::CardSelected { item } = event {
                state.borrow_mut().set_preview(item);
            }
            Ok(())
        });
    }

    // Toggle = add or remove depending on current membership, then flip the
    // preview card's button label.
    {
        let state = Rc::clone(&ui.state);
        let preview = Rc::clone(&ui.preview);
        let nested = bus.clone();
        bus.subscribe(Matcher::Kind(EventKind::ProductToggled), move |event| {
            if let AppEvent::ProductToggled { item } = event {
                let in_basket = state.borrow().basket_contains(&item.id);
                if in_basket {
                    nested.publish(&AppEvent::ProductRemoved { item: item.clone() });
                } else {
                    nested.publish(&AppEvent::ProductAdded { item: item.clone() });
                }
                preview.borrow_mut().update(CardProps {
                    button_text: Some(preview_button_text(item, !in_basket)),
                    ..CardProps::default()
                });
            }
            Ok(())
        });
    }

    {
        let state = Rc::clone(&ui.state);
        bus.subscribe(Matcher::Kind(EventKind::ProductAdded), move |event| {
            if let AppEvent::ProductAdded { item } = event {
                state.borrow_mut().add_to_basket(item);
            }
            Ok(())
        });
    }

    {
        let state = Rc::clone(&ui.state);
        bus.subscribe(Matcher::Kind(EventKind::ProductRemoved), move |event| {
            if let AppEvent::ProductRemoved { item } = event {
                state.borrow_mut().remove_from_basket(item);
            }
            Ok(())
        });
    }

    {
        let modal = Rc::clone(&ui.modal);
        bus.subscribe(Matcher::Kind(EventKind::BasketOpened), move |_| {
            modal.borrow_mut().open(ModalContent::Basket);
            Ok(())
        });
    }

    // Checkout starts: snapshot the basket into the draft, sync the forms
    // with the draft, open step 1, and push current validity to the views.
    {
        let state = Rc::clone(&ui.state);
        let modal = Rc::clone(&ui.modal);
        let order_form = Rc::clone(&ui.order_form);
        let contacts_form = Rc::clone(&ui.contacts_form);
        bus.subscribe(Matcher::Kind(EventKind::OrderOpened), move |_| {
            state.borrow_mut().prepare_checkout();
            {
                let state = state.borrow();
                let draft = state.order();
                order_form.borrow_mut().update(OrderFormProps {
                    payment: Some(draft.payment),
                    address: Some(draft.address.clone()),
                    ..OrderFormProps::default()
                });
                contacts_form.borrow_mut().update(ContactsFormProps {
                    email: Some(draft.email.clone()),
                    phone: Some(draft.phone.clone()),
                    ..ContactsFormProps::default()
                });
            }
            modal.borrow_mut().open(ModalContent::Order);
            state.borrow_mut().validate_order_form();
            Ok(())
        });
    }

    // Step 1 passed: move on to contacts, clearing any stale retry notice.
    {
        let modal = Rc::clone(&ui.modal);
        let contacts_form = Rc::clone(&ui.contacts_form);
        bus.subscribe(Matcher::Kind(EventKind::OrderSubmitted), move |_| {
            contacts_form.borrow_mut().update(ContactsFormProps {
                notice: Some(None),
                ..ContactsFormProps::default()
            });
            modal.borrow_mut().open(ModalContent::Contacts);
            Ok(())
        });
    }

    // Step 2 passed: hand the draft to a worker thread, guarding against a
    // second submission while one is outstanding.
    {
        let state = Rc::clone(&ui.state);
        bus.subscribe(Matcher::Kind(EventKind::ContactsSubmitted), move |_| {
            if in_flight.get() {
                warn!("order submission already in flight, ignoring");
                return Ok(());
            }
            in_flight.set(true);
            let draft = state.borrow().order().clone();
            api::submit_order(api.clone(), draft, tx.clone());
            Ok(())
        });
    }

    // Payment choice is a field edit plus a display update.
    {
        let order_form = Rc::clone(&ui.order_form);
        let nested = bus.clone();
        bus.subscribe(Matcher::Kind(EventKind::PaymentToggled), move |event| {
            if let AppEvent::PaymentToggled { method } = event {
                nested.publish(&AppEvent::FieldChanged {
                    path: FieldPath::new(OrderField::Payment),
                    value: method.as_str().to_string(),
                });
                order_form.borrow_mut().update(OrderFormProps {
                    payment: Some(Some(*method)),
                    ..OrderFormProps::default()
                });
            }
            Ok(())
        });
    }

    // Lock the page shell while any modal is open.
    {
        let page = Rc::clone(&ui.page);
        bus.subscribe(Matcher::Kind(EventKind::ModalOpened), move |_| {
            page.borrow_mut().update(PageProps {
                locked: Some(true),
                ..PageProps::default()
            });
            Ok(())
        });
    }
    {
        let page = Rc::clone(&ui.page);
        bus.subscribe(Matcher::Kind(EventKind::ModalClosed), move |_| {
            page.borrow_mut().update(PageProps {
                locked: Some(false),
                ..PageProps::default()
            });
            Ok(())
        });
    }
}

/// Apply a network result to the UI. Runs on the UI thread, between frames.
pub fn handle_net(ui: &Ui, in_flight: &Cell<bool>, event: NetEvent) {
    match event {
        NetEvent::Catalog(Ok(items)) => {
            ui.state.borrow_mut().set_catalog(items);
        }
        NetEvent::Catalog(Err(err)) => {
            error!(error = %err, "catalog fetch failed");
        }
        NetEvent::OrderConfirmed(Ok(confirmation)) => {
            in_flight.set(false);
            {
                let mut state = ui.state.borrow_mut();
                state.clear_basket();
                state.clear_order();
            }
            ui.success.borrow_mut().update(SuccessProps {
                total: Some(confirmation.total),
            });
            ui.modal.borrow_mut().open(ModalContent::Success);
        }
        NetEvent::OrderConfirmed(Err(err)) => {
            in_flight.set(false);
            error!(error = %err, "order submission failed");
            ui.contacts_form.borrow_mut().update(ContactsFormProps {
                notice: Some(Some(SUBMIT_FAILED_NOTICE.to_string())),
                ..ContactsFormProps::default()
            });
        }
    }
}

fn draw(frame: &mut Frame<'_>, ui: &Ui) {
    let area: Rect = frame.area();
    ui.page.borrow().draw(frame, area);

    let modal = ui.modal.borrow();
    if let Some(inner) = modal.draw_frame(frame, area) {
        match modal.content() {
            Some(ModalContent::Preview) => ui.preview.borrow().draw(frame, inner),
            Some(ModalContent::Basket) => ui.basket.borrow().draw(frame, inner),
            Some(ModalContent::Order) => ui.order_form.borrow().draw(frame, inner),
            Some(ModalContent::Contacts) => ui.contacts_form.borrow().draw(frame, inner),
            Some(ModalContent::Success) => ui.success.borrow().draw(frame, inner),
            None => {}
        }
    }
}

/// Build everything and run the main loop until quit.
pub fn run(config: Config) -> Result<()> {
    let api = StoreApi::new(&config.api)?;
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    let events = EventHandler::new(tick_rate);

    let bus = EventBus::new();
    let ui = Ui::new(bus);
    let in_flight = Rc::new(Cell::new(false));
    wire(&ui, api.clone(), events.sender(), Rc::clone(&in_flight));

    api::fetch_catalog(api, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &ui))?;

        match events.next(tick_rate) {
            Ok(RuntimeEvent::Key(key)) => {
                if handle_key(&ui, key) == InputAction::Quit {
                    break;
                }
            }
            Ok(RuntimeEvent::Tick) | Ok(RuntimeEvent::Resize(..)) => {}
            Ok(RuntimeEvent::Net(net)) => handle_net(&ui, &in_flight, net),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
