use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::pipeline::{histogram, weekday_name, Aggregates};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(agg) = &app.aggregates else {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No data loaded yet. Press r to fetch the sheet.",
            theme::dim_style(),
        )))
        .centered()
        .block(titled_block(" Breakdown "));
        f.render_widget(msg, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_weekday_chart(f, top[0], agg);
    render_merchant_chart(f, top[1], agg);
    render_bank_table(f, bottom[0], agg);
    render_histogram(f, bottom[1], agg, app.config.histogram_buckets);
}

fn render_weekday_chart(f: &mut Frame, area: Rect, agg: &Aggregates) {
    let bars: Vec<Bar> = agg
        .weekday_average_debit
        .iter()
        .map(|(weekday, avg)| {
            let val = avg.and_then(|a| a.to_u64()).unwrap_or(0);
            Bar::default()
                .value(val)
                .label(Line::from(&weekday_name(*weekday)[..3]))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(Style::default().fg(theme::TEXT))
        })
        .collect();

    let chart = BarChart::default()
        .block(titled_block(" Average Debit by Weekday "))
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn render_merchant_chart(f: &mut Frame, area: Rect, agg: &Aggregates) {
    if agg.top_merchants.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No merchants found in messages",
            theme::dim_style(),
        )))
        .centered()
        .block(titled_block(" Top Merchants by Spend "));
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = agg
        .top_merchants
        .iter()
        .map(|(merchant, total)| {
            Bar::default()
                .value(total.to_u64().unwrap_or(0))
                .label(Line::from(truncate(merchant, 10)))
                .style(Style::default().fg(theme::YELLOW))
                .value_style(Style::default().fg(theme::TEXT))
        })
        .collect();

    let chart = BarChart::default()
        .block(titled_block(" Top Merchants by Spend "))
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn render_bank_table(f: &mut Frame, area: Rect, agg: &Aggregates) {
    let Some(banks) = &agg.bank_totals else {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Sheet has no bank column",
            theme::dim_style(),
        )))
        .centered()
        .block(titled_block(" Bank-wise Debit vs Credit "));
        f.render_widget(msg, area);
        return;
    };

    let header = Row::new(
        ["Bank", "Debit", "Credit"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    )
    .height(1);

    let rows: Vec<Row> = banks
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(truncate(&row.bank, 16)),
                Cell::from(Span::styled(format_amount(row.debit), theme::debit_style())),
                Cell::from(Span::styled(
                    format_amount(row.credit),
                    theme::credit_style(),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(10),
        Constraint::Length(14),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(titled_block(" Bank-wise Debit vs Credit "));
    f.render_widget(table, area);
}

fn render_histogram(f: &mut Frame, area: Rect, agg: &Aggregates, buckets: usize) {
    // The terminal cannot fit 30 labelled buckets; cap to what the pane holds.
    let max_buckets = ((area.width.saturating_sub(2)) / 6).max(1) as usize;
    let hist = histogram(&agg.debit_amounts, buckets.min(max_buckets));

    if hist.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No debit amounts to bucket",
            theme::dim_style(),
        )))
        .centered()
        .block(titled_block(" Debit Amount Distribution "));
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = hist
        .iter()
        .map(|bucket| {
            Bar::default()
                .value(bucket.count)
                .label(Line::from(format!("{:.0}", bucket.lower)))
                .style(Style::default().fg(theme::GREEN))
                .value_style(Style::default().fg(theme::TEXT))
        })
        .collect();

    let chart = BarChart::default()
        .block(titled_block(" Debit Amount Distribution "))
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1);

    f.render_widget(chart, area);
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
