//! Frame layout: wallet roster and method palette on the left, input form
//! and the current dialog on the right, one status line at the bottom.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::batch::BatchMode;
use crate::core::state::App;
use crate::tui::components::{DialogView, InputForm, MethodList, WalletPanel};
use crate::tui::{Focus, TuiState};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [main, status] =
        Layout::vertical([Constraint::Min(10), Constraint::Length(1)]).areas(frame.area());

    let [left, right] =
        Layout::horizontal([Constraint::Length(30), Constraint::Min(40)]).areas(main);

    let wallet_rows = (app.wallets.len() as u16 + 2).clamp(3, 8);
    let [wallets, methods] =
        Layout::vertical([Constraint::Length(wallet_rows), Constraint::Min(5)]).areas(left);

    let [form, dialog] =
        Layout::vertical([Constraint::Length(11), Constraint::Min(5)]).areas(right);

    WalletPanel::new(&mut tui.wallets, app, tui.focus == Focus::Wallets)
        .render(frame, wallets);
    MethodList::new(&mut tui.methods, app, tui.focus == Focus::Methods)
        .render(frame, methods);
    InputForm::new(&tui.form, app, tui.focus == Focus::Form).render(frame, form);
    DialogView::new(app).render(frame, dialog);

    draw_status_bar(frame, app, status, spinner_frame);
}

fn draw_status_bar(
    frame: &mut Frame,
    app: &App,
    area: ratatui::layout::Rect,
    spinner_frame: usize,
) {
    let mode = match app.batch.mode() {
        BatchMode::Immediate => Span::styled(" IMMEDIATE ", Style::default().fg(Color::DarkGray)),
        BatchMode::Batching => Span::styled(
            format!(" BATCHING ({} queued) ", app.batch.pending()),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
    };

    let spinner = if app.in_flight > 0 {
        format!(" {} {} in flight ", SPINNER_FRAMES[spinner_frame % 4], app.in_flight)
    } else {
        String::new()
    };

    let line = Line::from(vec![
        mode,
        Span::styled(spinner, Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::styled(app.status_message.as_str(), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("  [{}]", app.endpoint),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
