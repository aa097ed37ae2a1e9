use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::events::{AppEvent, FieldPath, OrderField};
use crate::model::PaymentMethod;
use crate::ui::modal::ModalContent;
use crate::ui::runtime::Ui;

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Handled (or ignored) internally.
    None,
    /// Quit was requested.
    Quit,
}

/// Central key routing. Translates terminal keys into the small set of
/// user-intent events the views are allowed to originate; everything that
/// changes state goes through the bus from here.
pub fn handle_key(ui: &Ui, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') {
        return InputAction::Quit;
    }

    let content = ui.modal.borrow().content();
    match content {
        None => handle_browse(ui, key),
        Some(ModalContent::Preview) => handle_preview(ui, key),
        Some(ModalContent::Basket) => handle_basket(ui, key),
        Some(ModalContent::Order) => handle_order(ui, key),
        Some(ModalContent::Contacts) => handle_contacts(ui, key),
        Some(ModalContent::Success) => handle_success(ui, key),
    }
}

fn handle_browse(ui: &Ui, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('q') => return InputAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => ui.page.borrow_mut().select_prev(),
        KeyCode::Down | KeyCode::Char('j') => ui.page.borrow_mut().select_next(),
        KeyCode::Char('b') => ui.bus.publish(&AppEvent::BasketOpened),
        KeyCode::Enter => {
            let item = {
                let state = ui.state.borrow();
                let page = ui.page.borrow();
                state.catalog().get(page.selected()).cloned()
            };
            if let Some(item) = item {
                ui.bus.publish(&AppEvent::CardSelected { item });
            }
        }
        _ => {}
    }
    InputAction::None
}

fn handle_preview(ui: &Ui, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => ui.modal.borrow_mut().close(),
        KeyCode::Char('b') => ui.bus.publish(&AppEvent::BasketOpened),
        KeyCode::Enter => {
            let item = {
                let state = ui.state.borrow();
                state
                    .preview()
                    .and_then(|id| state.catalog().iter().find(|p| p.id == id))
                    .cloned()
            };
            match item {
                Some(item) if item.is_purchasable() => {
                    ui.bus.publish(&AppEvent::ProductToggled { item });
                }
                _ => {}
            }
        }
        _ => {}
    }
    InputAction::None
}

fn handle_basket(ui: &Ui, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => ui.modal.borrow_mut().close(),
        KeyCode::Up | KeyCode::Char('k') => ui.basket.borrow_mut().select_prev(),
        KeyCode::Down | KeyCode::Char('j') => ui.basket.borrow_mut().select_next(),
        KeyCode::Char('d') | KeyCode::Delete => {
            let item = {
                let state = ui.state.borrow();
                let basket = ui.basket.borrow();
                state.basket().get(basket.selected()).cloned()
            };
            if let Some(item) = item {
                ui.bus.publish(&AppEvent::ProductRemoved { item });
            }
        }
        KeyCode::Enter => {
            if ui.basket.borrow().checkout_enabled() {
                ui.bus.publish(&AppEvent::OrderOpened);
            }
        }
        _ => {}
    }
    InputAction::None
}

fn handle_order(ui: &Ui, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => ui.modal.borrow_mut().close(),
        KeyCode::Left => ui.bus.publish(&AppEvent::PaymentToggled {
            method: PaymentMethod::Online,
        }),
        KeyCode::Right => ui.bus.publish(&AppEvent::PaymentToggled {
            method: PaymentMethod::Cash,
        }),
        KeyCode::Char(ch) => {
            let value = {
                let mut form = ui.order_form.borrow_mut();
                form.input_char(ch);
                form.address().to_string()
            };
            publish_field(ui, OrderField::Address, value);
        }
        KeyCode::Backspace => {
            let value = {
                let mut form = ui.order_form.borrow_mut();
                form.backspace();
                form.address().to_string()
            };
            publish_field(ui, OrderField::Address, value);
        }
        KeyCode::Enter => {
            if ui.order_form.borrow().valid() {
                ui.bus.publish(&AppEvent::OrderSubmitted);
            }
        }
        _ => {}
    }
    InputAction::None
}

fn handle_contacts(ui: &Ui, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => ui.modal.borrow_mut().close(),
        KeyCode::Tab => ui.contacts_form.borrow_mut().toggle_focus(),
        KeyCode::Char(ch) => {
            let (field, value) = {
                let mut form = ui.contacts_form.borrow_mut();
                form.input_char(ch);
                (form.focused_field(), form.focused_value().to_string())
            };
            publish_field(ui, field, value);
        }
        KeyCode::Backspace => {
            let (field, value) = {
                let mut form = ui.contacts_form.borrow_mut();
                form.backspace();
                (form.focused_field(), form.focused_value().to_string())
            };
            publish_field(ui, field, value);
        }
        KeyCode::Enter => {
            if ui.contacts_form.borrow().valid() {
                ui.bus.publish(&AppEvent::ContactsSubmitted);
            }
        }
        _ => {}
    }
    InputAction::None
}

fn handle_success(ui: &Ui, key: KeyEvent) -> InputAction {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        ui.modal.borrow_mut().close();
    }
    InputAction::None
}

fn publish_field(ui: &Ui, field: OrderField, value: String) {
    ui.bus.publish(&AppEvent::FieldChanged {
        path: FieldPath::new(field),
        value,
    });
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
