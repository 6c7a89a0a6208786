use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Sparkline},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::models::Kind;
use crate::pipeline::Aggregates;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(agg) = &app.aggregates else {
        render_empty(f, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(10),   // Monthly debit vs credit
            Constraint::Length(4), // Daily spending sparkline
        ])
        .split(area);

    render_summary_cards(f, chunks[0], agg);
    render_monthly_chart(f, chunks[1], agg);
    render_daily_sparkline(f, chunks[2], agg);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let block = titled_block(" Dashboard ");
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No data loaded yet.",
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to fetch the sheet, w to switch worksheet",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(block);
    f.render_widget(msg, area);
}

fn render_summary_cards(f: &mut Frame, area: Rect, agg: &Aggregates) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let latest = agg
        .summary
        .latest
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "N/A".into());

    render_card(
        f,
        cards[0],
        "Total Spent (Debit)",
        format_amount(agg.summary.total_debit),
        theme::RED,
    );
    render_card(
        f,
        cards[1],
        "Total Credit",
        format_amount(agg.summary.total_credit),
        theme::GREEN,
    );
    render_card(
        f,
        cards[2],
        "Transactions",
        agg.summary.transaction_count.to_string(),
        theme::ACCENT,
    );
    render_card(f, cards[3], "Latest txn", latest, theme::YELLOW);
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: ratatui::style::Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_monthly_chart(f: &mut Frame, area: Rect, agg: &Aggregates) {
    if agg.monthly.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No dated records to chart",
            theme::dim_style(),
        )))
        .centered()
        .block(titled_block(" Monthly Debit vs Credit "));
        f.render_widget(msg, area);
        return;
    }

    // One group per month, a debit bar and a credit bar side by side.
    let groups: Vec<BarGroup> = agg
        .monthly
        .iter()
        .map(|row| {
            let bars = vec![
                Bar::default()
                    .value(row.total(Kind::Debit).to_u64().unwrap_or(0))
                    .style(theme::debit_style())
                    .value_style(Style::default().fg(theme::TEXT)),
                Bar::default()
                    .value(row.total(Kind::Credit).to_u64().unwrap_or(0))
                    .style(theme::credit_style())
                    .value_style(Style::default().fg(theme::TEXT)),
            ];
            BarGroup::default()
                .label(Line::from(row.month.clone()))
                .bars(&bars)
        })
        .collect();

    let mut chart = BarChart::default()
        .block(titled_block(" Monthly Debit vs Credit "))
        .bar_width(8)
        .bar_gap(1)
        .group_gap(3);
    for group in groups {
        chart = chart.data(group);
    }

    f.render_widget(chart, area);
}

fn render_daily_sparkline(f: &mut Frame, area: Rect, agg: &Aggregates) {
    let data: Vec<u64> = agg
        .daily_debit
        .iter()
        .map(|(_, amount)| amount.to_u64().unwrap_or(0))
        .collect();

    let sparkline = Sparkline::default()
        .block(titled_block(" Daily Spending (debits) "))
        .data(&data)
        .style(Style::default().fg(theme::YELLOW));

    f.render_widget(sparkline, area);
}

fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ))
}
