//! # Input Form Component
//!
//! The free-form fields operations read. Up/Down moves between fields,
//! typing edits the focused one. The Wallet row edits the selected roster
//! entry; every other row maps to an `OperationInput` field. Each edit
//! re-renders the method palette's enablement.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::state::App;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Wallet,
    Label,
    Password,
    Mnemonic,
    Address,
    Amount,
    Txid,
    RawTx,
    FeeTarget,
}

pub const FIELDS: [FormField; 9] = [
    FormField::Wallet,
    FormField::Label,
    FormField::Password,
    FormField::Mnemonic,
    FormField::Address,
    FormField::Amount,
    FormField::Txid,
    FormField::RawTx,
    FormField::FeeTarget,
];

impl FormField {
    fn label(&self) -> &'static str {
        match self {
            FormField::Wallet => "Wallet",
            FormField::Label => "Label",
            FormField::Password => "Password",
            FormField::Mnemonic => "Mnemonic",
            FormField::Address => "Address",
            FormField::Amount => "Amount (sats)",
            FormField::Txid => "Txid",
            FormField::RawTx => "Raw tx",
            FormField::FeeTarget => "Fee target",
        }
    }
}

/// Persistent state for the input form.
pub struct InputFormState {
    pub selected: usize,
}

impl InputFormState {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn focused_field(&self) -> FormField {
        FIELDS[self.selected.min(FIELDS.len() - 1)]
    }

    pub fn cursor_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        self.selected = (self.selected + 1).min(FIELDS.len() - 1);
    }

    pub fn insert_char(&self, app: &mut App, c: char) {
        match self.focused_field() {
            FormField::Wallet => {
                let mut name = app.selected_wallet().to_string();
                name.push(c);
                app.rename_selected_wallet(name);
            }
            field => field_mut(app, field).push(c),
        }
    }

    pub fn backspace(&self, app: &mut App) {
        match self.focused_field() {
            FormField::Wallet => {
                let mut name = app.selected_wallet().to_string();
                name.pop();
                app.rename_selected_wallet(name);
            }
            field => {
                field_mut(app, field).pop();
            }
        }
    }
}

impl Default for InputFormState {
    fn default() -> Self {
        Self::new()
    }
}

fn field_mut(app: &mut App, field: FormField) -> &mut String {
    match field {
        // Wallet is handled by the callers above.
        FormField::Wallet => unreachable!("wallet edits go through the roster"),
        FormField::Label => &mut app.input.label,
        FormField::Password => &mut app.input.password,
        FormField::Mnemonic => &mut app.input.mnemonic,
        FormField::Address => &mut app.input.address,
        FormField::Amount => &mut app.input.amount,
        FormField::Txid => &mut app.input.txid,
        FormField::RawTx => &mut app.input.raw_tx,
        FormField::FeeTarget => &mut app.input.fee_target,
    }
}

fn field_display(app: &App, field: FormField) -> String {
    match field {
        FormField::Wallet => app.selected_wallet().to_string(),
        FormField::Label => app.input.label.clone(),
        FormField::Password => "•".repeat(app.input.password.chars().count()),
        FormField::Mnemonic => app.input.mnemonic.clone(),
        FormField::Address => app.input.address.clone(),
        FormField::Amount => app.input.amount.clone(),
        FormField::Txid => app.input.txid.clone(),
        FormField::RawTx => app.input.raw_tx.clone(),
        FormField::FeeTarget => app.input.fee_target.clone(),
    }
}

/// Transient render wrapper for the input form.
pub struct InputForm<'a> {
    state: &'a InputFormState,
    app: &'a App,
    focused: bool,
}

impl<'a> InputForm<'a> {
    pub fn new(state: &'a InputFormState, app: &'a App, focused: bool) -> Self {
        Self {
            state,
            app,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let lines: Vec<Line> = FIELDS
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let is_selected = i == self.state.selected && self.focused;
                let label_style = if is_selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let value_style = if is_selected {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let mut value = field_display(self.app, *field);
                if is_selected {
                    value.push('_');
                }
                Line::from(vec![
                    Span::styled(format!("{:<14}", field.label()), label_style),
                    Span::styled(value, value_style),
                ])
            })
            .collect();

        let form = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Input "),
        );

        frame.render_widget(form, area);
    }
}
