//! # Dialog View Component
//!
//! Renders the navigation stack's current item: the domain record,
//! success marker, or error record the last operation produced. Purely
//! read-only; all stack mutation happens in the event loop.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::nav::Dialog;
use crate::core::state::App;
use crate::rpc::{CoinInfo, HistoryEntry, KeyInfo};

pub struct DialogView<'a> {
    app: &'a App,
}

impl<'a> DialogView<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let depth = self.app.nav.depth();
        let title = match self.app.nav.current() {
            Some(dialog) => format!(" {} (depth {depth}) ", dialog_title(dialog)),
            None => " (nothing to show) ".to_string(),
        };

        let border_color = match self.app.nav.current() {
            Some(Dialog::Error(_)) => Color::Red,
            Some(Dialog::Success { .. }) => Color::Green,
            _ => Color::DarkGray,
        };

        let lines = match self.app.nav.current() {
            Some(dialog) => dialog_lines(dialog),
            None => vec![Line::from(Span::styled(
                "Stack is empty. Run a method to see something here.",
                Style::default().fg(Color::DarkGray),
            ))],
        };

        let view = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(title)
                    .title_bottom(Line::from(" Esc Back  Ctrl+L Clear ").centered())
                    .title_alignment(Alignment::Left),
            );

        frame.render_widget(view, area);
    }
}

fn dialog_title(dialog: &Dialog) -> &'static str {
    match dialog {
        Dialog::WalletSelect => "Select a wallet",
        Dialog::Status(_) => "Status",
        Dialog::WalletCreated(_) => "Wallet created",
        Dialog::Coins(_) => "Coins",
        Dialog::UnspentCoins(_) => "Unspent coins",
        Dialog::WalletInfo(_) => "Wallet info",
        Dialog::Address(_) => "New address",
        Dialog::Transaction(_) => "Transaction",
        Dialog::BuiltTransaction(_) => "Built transaction",
        Dialog::Broadcasted(_) => "Broadcast",
        Dialog::History(_) => "History",
        Dialog::Keys(_) => "Keys",
        Dialog::FeeRates(_) => "Fee rates",
        Dialog::Success { .. } => "Success",
        Dialog::Error(_) => "Error",
    }
}

fn kv(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<18}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value, Style::default().fg(Color::Gray)),
    ])
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn dialog_lines(dialog: &Dialog) -> Vec<Line<'static>> {
    match dialog {
        Dialog::WalletSelect => vec![
            Line::from("Pick a wallet on the left, fill in any inputs, then run a method."),
            Line::from(""),
            Line::from(Span::styled(
                "Tab Focus  Enter Run  Ctrl+B Batch  Ctrl+F Flush  Ctrl+C Quit",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        Dialog::Status(status) => {
            let mut lines = vec![
                kv("Tor", opt(&status.tor_status)),
                kv("Backend", opt(&status.backend_status)),
                kv("Network", opt(&status.network)),
                kv("Height", opt(&status.best_blockchain_height)),
                kv("Best hash", opt(&status.best_blockchain_hash)),
                kv(
                    "Filters",
                    format!(
                        "{} ({} left)",
                        status.filters_count.unwrap_or(0),
                        status.filters_left.unwrap_or(0)
                    ),
                ),
            ];
            if let Some(rate) = status.exchange_rate {
                lines.push(kv("Exchange rate", format!("{rate:.2}")));
            }
            lines.push(kv("Peers", status.peers.len().to_string()));
            lines
        }
        Dialog::WalletCreated(mnemonic) => vec![
            Line::from("Write the recovery words down before doing anything else:"),
            Line::from(""),
            Line::from(Span::styled(
                mnemonic.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ],
        Dialog::Coins(coins) | Dialog::UnspentCoins(coins) => coin_lines(coins),
        Dialog::WalletInfo(info) => {
            let mut lines = vec![
                kv("Wallet", opt(&info.wallet_name)),
                kv("State", opt(&info.state)),
                kv("Fingerprint", opt(&info.master_key_fingerprint)),
                kv("Balance", format!("{} sats", info.balance.unwrap_or(0))),
            ];
            for account in &info.accounts {
                lines.push(kv(
                    "Account",
                    format!("{} {}", opt(&account.name), opt(&account.key_path)),
                ));
            }
            lines
        }
        Dialog::Address(address) => vec![
            Line::from(Span::styled(
                address.address.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            kv("Label", opt(&address.label)),
            kv("Key path", opt(&address.key_path)),
            kv("Script pubkey", opt(&address.script_pub_key)),
        ],
        Dialog::Transaction(tx) => vec![
            kv("Txid", opt(&tx.txid)),
            kv("Raw tx", tx.tx.clone()),
        ],
        Dialog::BuiltTransaction(hex) => vec![
            Line::from("Unbroadcast transaction hex (use Broadcast to send it):"),
            Line::from(""),
            Line::from(Span::styled(hex.clone(), Style::default().fg(Color::Gray))),
        ],
        Dialog::Broadcasted(info) => vec![kv("Txid", info.txid.clone())],
        Dialog::History(entries) => history_lines(entries),
        Dialog::Keys(keys) => key_lines(keys),
        Dialog::FeeRates(rates) => {
            let mut targets: Vec<(u64, u64)> = rates
                .iter()
                .filter_map(|(blocks, rate)| blocks.parse::<u64>().ok().map(|b| (b, *rate)))
                .collect();
            targets.sort_unstable();
            targets
                .into_iter()
                .map(|(blocks, rate)| kv(&format!("{blocks} blocks"), format!("{rate} sat/vB")))
                .collect()
        }
        Dialog::Success { message } => vec![Line::from(Span::styled(
            message.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))],
        Dialog::Error(error) => {
            let code = error
                .code
                .map(|c| format!(" (code {c})"))
                .unwrap_or_default();
            vec![Line::from(Span::styled(
                format!("{}{code}", error.message),
                Style::default().fg(Color::Red),
            ))]
        }
    }
}

fn coin_lines(coins: &[CoinInfo]) -> Vec<Line<'static>> {
    if coins.is_empty() {
        return vec![Line::from(Span::styled(
            "No coins.",
            Style::default().fg(Color::DarkGray),
        ))];
    }
    coins
        .iter()
        .map(|coin| {
            let spent = if coin.spent_by.is_some() { " spent" } else { "" };
            Line::from(format!(
                "{:>12} sats  conf {:<4} anon {:<5} {}:{}{}",
                coin.amount,
                coin.confirmations.unwrap_or(0),
                coin.anonymity_score.unwrap_or(1.0),
                &coin.txid[..coin.txid.len().min(16)],
                coin.index,
                spent,
            ))
        })
        .collect()
}

fn history_lines(entries: &[HistoryEntry]) -> Vec<Line<'static>> {
    if entries.is_empty() {
        return vec![Line::from(Span::styled(
            "No transactions yet.",
            Style::default().fg(Color::DarkGray),
        ))];
    }
    entries
        .iter()
        .map(|entry| {
            let cj = if entry.is_likely_coinjoin { " [cj]" } else { "" };
            Line::from(format!(
                "{}  {:>12} sats  {}{}",
                entry.datetime.format("%Y-%m-%d %H:%M"),
                entry.amount,
                entry.label.clone().unwrap_or_default(),
                cj,
            ))
        })
        .collect()
}

fn key_lines(keys: &[KeyInfo]) -> Vec<Line<'static>> {
    if keys.is_empty() {
        return vec![Line::from(Span::styled(
            "No keys.",
            Style::default().fg(Color::DarkGray),
        ))];
    }
    keys.iter()
        .map(|key| {
            let side = match key.internal {
                Some(true) => "int",
                Some(false) => "ext",
                None => "  ?",
            };
            Line::from(format!(
                "{side}  {:<20} {}",
                key.full_key_path.clone().unwrap_or_default(),
                key.address.clone().unwrap_or_default(),
            ))
        })
        .collect()
}
