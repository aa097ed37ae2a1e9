use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::events::OrderField;
use crate::model::PaymentMethod;
use crate::ui::theme::{ACCENT, ERROR_TEXT, HEADER_TEXT, MUTED_TEXT};
use crate::ui::view::View;

fn input_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let value_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let mut spans = vec![
        Span::styled(format!("{:<9}", label), Style::default().fg(MUTED_TEXT)),
        Span::styled(value.to_string(), value_style),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
    }
    Line::from(spans)
}

fn submit_line(label: &str, enabled: bool) -> Line<'static> {
    let style = if enabled {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    };
    Line::from(Span::styled(format!("[Enter] {}", label), style))
}

fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(ERROR_TEXT),
    ))
}

// ---------------------------------------------------------------------------
// Order form (step 1: payment method + delivery address)
// ---------------------------------------------------------------------------

/// Partial display properties of the first checkout step.
#[derive(Default)]
pub struct OrderFormProps {
    /// Outer `Option` = "was this prop supplied"; inner = selected method.
    pub payment: Option<Option<PaymentMethod>>,
    pub address: Option<String>,
    pub valid: Option<bool>,
    pub errors: Option<String>,
}

pub struct OrderForm {
    payment: Option<PaymentMethod>,
    address: String,
    valid: bool,
    errors: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderForm {
    pub fn new() -> Self {
        Self {
            payment: Some(PaymentMethod::Online),
            address: String::new(),
            valid: false,
            errors: String::new(),
        }
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Edit the address buffer. The caller publishes the resulting
    /// field-change event once the borrow on this view is released.
    pub fn input_char(&mut self, ch: char) {
        self.address.push(ch);
    }

    pub fn backspace(&mut self) {
        self.address.pop();
    }
}

impl View for OrderForm {
    type Props = OrderFormProps;

    fn update(&mut self, props: OrderFormProps) {
        if let Some(payment) = props.payment {
            self.payment = payment;
        }
        if let Some(address) = props.address {
            self.address = address;
        }
        if let Some(valid) = props.valid {
            self.valid = valid;
        }
        if let Some(errors) = props.errors {
            self.errors = errors;
        }
    }

    fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        let method_span = |method: PaymentMethod, label: &str| {
            if self.payment == Some(method) {
                Span::styled(
                    format!("[{}]", label),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!(" {} ", label), Style::default().fg(MUTED_TEXT))
            }
        };

        let mut lines = vec![
            Line::from(Span::styled(
                "Step 1 of 2: payment and delivery",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Payment:  ", Style::default().fg(MUTED_TEXT)),
                method_span(PaymentMethod::Online, "Online"),
                Span::raw("  "),
                method_span(PaymentMethod::Cash, "Cash"),
                Span::styled("   ←/→ selects", Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)),
            ]),
            input_line("Address:", &self.address, true),
            Line::from(""),
        ];
        if !self.errors.is_empty() {
            lines.push(error_line(&self.errors));
        }
        lines.push(submit_line("Continue", self.valid));
        frame.render_widget(Paragraph::new(lines), area);
    }
}

// ---------------------------------------------------------------------------
// Contacts form (step 2: email + phone)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactsFocus {
    Email,
    Phone,
}

/// Partial display properties of the second checkout step.
#[derive(Default)]
pub struct ContactsFormProps {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub valid: Option<bool>,
    pub errors: Option<String>,
    /// Transient notice line (e.g. the submission-failure retry hint).
    /// `Some(None)` clears it.
    pub notice: Option<Option<String>>,
}

pub struct ContactsForm {
    email: String,
    phone: String,
    valid: bool,
    errors: String,
    notice: Option<String>,
    focus: ContactsFocus,
}

impl Default for ContactsForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactsForm {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            phone: String::new(),
            valid: false,
            errors: String::new(),
            notice: None,
            focus: ContactsFocus::Email,
        }
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            ContactsFocus::Email => ContactsFocus::Phone,
            ContactsFocus::Phone => ContactsFocus::Email,
        };
    }

    pub fn focused_field(&self) -> OrderField {
        match self.focus {
            ContactsFocus::Email => OrderField::Email,
            ContactsFocus::Phone => OrderField::Phone,
        }
    }

    pub fn focused_value(&self) -> &str {
        match self.focus {
            ContactsFocus::Email => &self.email,
            ContactsFocus::Phone => &self.phone,
        }
    }

    /// Edit the focused buffer. The caller publishes the resulting
    /// field-change event once the borrow on this view is released.
    pub fn input_char(&mut self, ch: char) {
        match self.focus {
            ContactsFocus::Email => self.email.push(ch),
            ContactsFocus::Phone => self.phone.push(ch),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            ContactsFocus::Email => self.email.pop(),
            ContactsFocus::Phone => self.phone.pop(),
        };
    }
}

impl View for ContactsForm {
    type Props = ContactsFormProps;

    fn update(&mut self, props: ContactsFormProps) {
        if let Some(email) = props.email {
            self.email = email;
        }
        if let Some(phone) = props.phone {
            self.phone = phone;
        }
        if let Some(valid) = props.valid {
            self.valid = valid;
        }
        if let Some(errors) = props.errors {
            self.errors = errors;
        }
        if let Some(notice) = props.notice {
            self.notice = notice;
        }
    }

    fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Step 2 of 2: contacts",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            input_line("Email:", &self.email, self.focus == ContactsFocus::Email),
            input_line("Phone:", &self.phone, self.focus == ContactsFocus::Phone),
            Line::from(Span::styled(
                "Tab switches fields",
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
            )),
            Line::from(""),
        ];
        if !self.errors.is_empty() {
            lines.push(error_line(&self.errors));
        }
        if let Some(notice) = &self.notice {
            lines.push(Line::from(Span::styled(
                notice.clone(),
                Style::default().fg(ERROR_TEXT).add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(submit_line("Pay", self.valid));
        frame.render_widget(Paragraph::new(lines), area);
    }
}
