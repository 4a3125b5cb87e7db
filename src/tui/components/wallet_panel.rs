//! # Wallet Panel Component
//!
//! The wallet roster. Selection drives every wallet-scoped operation's
//! endpoint; Ctrl+N adds a wallet, Ctrl+W removes the selected one, and
//! the form's Wallet field renames it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::core::state::App;

pub struct WalletPanelState {
    pub list_state: ListState,
}

impl WalletPanelState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }
}

impl Default for WalletPanelState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct WalletPanel<'a> {
    state: &'a mut WalletPanelState,
    app: &'a App,
    focused: bool,
}

impl<'a> WalletPanel<'a> {
    pub fn new(state: &'a mut WalletPanelState, app: &'a App, focused: bool) -> Self {
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

        self.state.list_state.select(if self.app.wallets.is_empty() {
            None
        } else {
            Some(self.app.selected)
        });

        let items: Vec<ListItem> = self
            .app
            .wallets
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let style = if i == self.app.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(name.clone()).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Wallets "),
        );

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
