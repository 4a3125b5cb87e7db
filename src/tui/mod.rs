//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into operations on the core state.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Dispatch model
//!
//! The event loop is synchronous. Running an operation spawns a tokio task
//! that performs the single network suspension and sends the resulting
//! navigation action back over a std mpsc channel; the loop applies it at
//! its own pace. The navigation stack and batch queue are therefore only
//! ever touched from this loop; outstanding calls never mutate shared
//! state from their own task.

mod components;
mod event;
mod ui;

use std::sync::{Arc, mpsc};

use log::{info, warn};

use crate::core::batch::{self, BatchMode, PendingCall};
use crate::core::command::RpcOp;
use crate::core::config::ResolvedConfig;
use crate::core::nav::NavAction;
use crate::core::state::App;
use crate::rpc::{HttpDispatcher, RpcDispatcher};
use crate::tui::components::{InputFormState, MethodListState, WalletPanelState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which panel keyboard input goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Methods,
    Form,
    Wallets,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Methods => Focus::Form,
            Focus::Form => Focus::Wallets,
            Focus::Wallets => Focus::Methods,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub methods: MethodListState,
    pub wallets: WalletPanelState,
    pub form: InputFormState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Methods,
            methods: MethodListState::new(),
            wallets: WalletPanelState::new(),
            form: InputFormState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Results background tasks report to the event loop.
enum UiMsg {
    /// One immediate-mode operation resolved.
    Operation(NavAction),
    /// A flush finished: actions in enqueue order.
    FlushDone(Vec<NavAction>),
}

/// Build the dispatcher from resolved credentials.
pub fn build_dispatcher(config: &ResolvedConfig) -> Arc<dyn RpcDispatcher> {
    match (&config.rpc_user, &config.rpc_password) {
        (Some(user), Some(password)) => {
            info!("RPC credentials found, using basic auth");
            Arc::new(HttpDispatcher::with_credentials(
                user.clone(),
                password.clone(),
            ))
        }
        _ => Arc::new(HttpDispatcher::new()),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let dispatcher = build_dispatcher(&config);
    let mut app = App::new(dispatcher, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for navigation actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if app.in_flight > 0 {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 8.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short poll while calls are outstanding so the spinner moves.
        let timeout = if app.in_flight > 0 {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::ForceQuit => should_quit = true,
                TuiEvent::Resize => {}
                TuiEvent::FocusNext => tui.focus = tui.focus.next(),
                TuiEvent::Escape => app.nav.back(),
                TuiEvent::ClearStack => {
                    app.nav.clear();
                    app.status_message = String::from("Cleared dialogs");
                }
                TuiEvent::ToggleBatch => toggle_batch(&mut app),
                TuiEvent::Flush => start_flush(&mut app, &tx),
                TuiEvent::AddWallet => {
                    app.add_wallet();
                    tui.focus = Focus::Form;
                    tui.form.selected = 0;
                }
                TuiEvent::RemoveWallet => app.remove_wallet(),
                TuiEvent::CursorUp => match tui.focus {
                    Focus::Methods => tui.methods.cursor_up(),
                    Focus::Form => tui.form.cursor_up(),
                    Focus::Wallets => app.select_prev_wallet(),
                },
                TuiEvent::CursorDown => match tui.focus {
                    Focus::Methods => tui.methods.cursor_down(),
                    Focus::Form => tui.form.cursor_down(),
                    Focus::Wallets => app.select_next_wallet(),
                },
                TuiEvent::Submit => match tui.focus {
                    Focus::Methods => run_selected(&mut app, tui.methods.selected_op(), &tx),
                    Focus::Form => tui.form.cursor_down(),
                    Focus::Wallets => tui.focus = Focus::Methods,
                },
                TuiEvent::InputChar(c) => {
                    if tui.focus == Focus::Form {
                        tui.form.insert_char(&mut app, c);
                    }
                }
                TuiEvent::Backspace => {
                    if tui.focus == Focus::Form {
                        tui.form.backspace(&mut app);
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Apply results from background tasks: the loop's single
        // resumption point for shared-state mutation.
        while let Ok(msg) = rx.try_recv() {
            needs_redraw = true;
            match msg {
                UiMsg::Operation(action) => {
                    app.in_flight = app.in_flight.saturating_sub(1);
                    action.apply(&mut app.nav);
                }
                UiMsg::FlushDone(actions) => {
                    app.in_flight = app.in_flight.saturating_sub(1);
                    app.status_message = format!("Flushed {} job(s)", actions.len());
                    for action in actions {
                        action.apply(&mut app.nav);
                    }
                    app.batch.end_flush();
                }
            }
        }
    }

    ratatui::restore();
    Ok(())
}

fn toggle_batch(app: &mut App) {
    let target = if app.batch.is_batching() {
        BatchMode::Immediate
    } else {
        BatchMode::Batching
    };
    app.batch.set_mode(target);
    // Reflect the actual mode; the toggle is ignored during a flush.
    app.status_message = match app.batch.mode() {
        BatchMode::Batching => String::from("Batch mode on: methods queue until Ctrl+F"),
        BatchMode::Immediate => String::from("Batch mode off"),
    };
}

/// The execution protocol: gate on `can_execute`, build the job, then
/// either queue it or dispatch it on a background task.
fn run_selected(app: &mut App, op: RpcOp, tx: &mpsc::Sender<UiMsg>) {
    if !app.can_execute(op) {
        app.status_message = format!("{} needs more input", op.label());
        return;
    }

    let job = app.create_job(op);
    let wallet = app.selected_wallet().to_string();

    if app.batch.is_batching() {
        app.batch.enqueue(PendingCall {
            op,
            job,
            wallet,
        });
        app.status_message = format!("Queued {} ({} pending)", op.label(), app.batch.pending());
        return;
    }

    info!("Dispatching {}", op.method());
    app.in_flight += 1;
    let dispatcher = app.dispatcher.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let action = op.dispatch(dispatcher.as_ref(), &job, &wallet).await;
        if tx.send(UiMsg::Operation(action)).is_err() {
            warn!("Failed to report {} outcome: receiver dropped", op.method());
        }
    });
}

fn start_flush(app: &mut App, tx: &mpsc::Sender<UiMsg>) {
    if !app.batch.is_batching() {
        app.status_message = String::from("Nothing to flush: not in batch mode");
        return;
    }
    let Some(calls) = app.batch.begin_flush() else {
        app.status_message = String::from("Flush already in progress");
        return;
    };
    if calls.is_empty() {
        app.batch.end_flush();
        app.status_message = String::from("Nothing to flush");
        return;
    }

    info!("Flushing {} queued job(s)", calls.len());
    app.status_message = format!("Flushing {} job(s)...", calls.len());
    app.in_flight += 1;
    let dispatcher = app.dispatcher.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let actions = batch::run_flush(calls, dispatcher.as_ref()).await;
        if tx.send(UiMsg::FlushDone(actions)).is_err() {
            warn!("Failed to report flush outcome: receiver dropped");
        }
    });
}
