//! # Method Palette Component
//!
//! The 19 RPC operations as a selectable list. Entries whose required
//! input is missing render dimmed and refuse to run.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MethodListState` lives in `TuiState`
//! - `MethodList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::core::command::{ALL, RpcOp};
use crate::core::state::App;

/// Persistent state for the method palette.
pub struct MethodListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl MethodListState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    pub fn selected_op(&self) -> RpcOp {
        ALL[self.selected.min(ALL.len() - 1)]
    }

    pub fn cursor_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.list_state.select(Some(self.selected));
    }

    pub fn cursor_down(&mut self) {
        self.selected = (self.selected + 1).min(ALL.len() - 1);
        self.list_state.select(Some(self.selected));
    }
}

impl Default for MethodListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the method palette.
pub struct MethodList<'a> {
    state: &'a mut MethodListState,
    app: &'a App,
    focused: bool,
}

impl<'a> MethodList<'a> {
    pub fn new(state: &'a mut MethodListState, app: &'a App, focused: bool) -> Self {
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

        let items: Vec<ListItem> = ALL
            .iter()
            .enumerate()
            .map(|(i, op)| {
                let enabled = self.app.can_execute(*op);
                let style = if i == self.state.selected && self.focused {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if enabled {
                    Style::default().fg(Color::Gray)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let marker = if enabled { "  " } else { "· " };
                ListItem::new(format!("{marker}{}", op.label())).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Methods "),
        );

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
