use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::Kind;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_opt_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(ledger) = app.ledger.as_ref().filter(|l| !l.transactions.is_empty()) else {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press r to fetch the sheet, w to switch worksheet",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Transactions (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    };

    let header_cells = ["Date", "Kind", "Amount", "Merchant", "Bank", "Message"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let message_col = ledger.roles.message;

    let rows: Vec<Row> = ledger
        .transactions
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let date = txn
                .date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "—".into());
            let amount_style = match txn.kind {
                Kind::Credit => theme::credit_style(),
                _ => theme::debit_style(),
            };
            let merchant = txn.merchant.as_deref().unwrap_or("—");
            let bank = txn.bank.as_deref().unwrap_or("—");
            let message = message_col
                .and_then(|c| txn.raw.get(c))
                .map(String::as_str)
                .unwrap_or("");

            let style = if i == app.transaction_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(date),
                Cell::from(txn.kind.to_string()),
                Cell::from(Span::styled(
                    format_opt_amount(txn.abs_amount()),
                    amount_style,
                )),
                Cell::from(truncate(merchant, 24)),
                Cell::from(truncate(bank, 12)),
                Cell::from(truncate(message, 48)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(14),
        Constraint::Length(26),
        Constraint::Length(14),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Transactions ({}) ", ledger.transactions.len()),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}
