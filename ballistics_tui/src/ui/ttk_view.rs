//! Shots and time to deplete each zone

use super::progress_bar;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let header = vec![
        Line::from(vec![
            Span::styled("Ammo: ", Style::default().fg(Color::Gray)),
            Span::styled(app.ammo().name.clone(), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("  {:.0} dmg / {:.0} pen", app.ammo().damage, app.ammo().penetration_power),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("Fire rate: ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{:.0} RPM", app.fire_rate), Style::default().fg(Color::White)),
        ]),
    ];
    let header = Paragraph::new(header).block(Block::default().borders(Borders::ALL).title(" Time to kill "));
    f.render_widget(header, chunks[0]);

    let rows: Vec<Row> = app
        .zone_rows()
        .into_iter()
        .map(|row| {
            let ttk = &row.time_to_kill;
            let shots = if ttk.is_lethal() {
                ttk.shots_to_kill.to_string()
            } else {
                "∞".to_string()
            };
            let seconds = ttk
                .time_to_kill
                .map(|s| format!("{:.3}s", s))
                .unwrap_or_else(|| "-".to_string());
            let style = match ttk.shots_to_kill {
                1 => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                2 | 3 => Style::default().fg(Color::Yellow),
                _ => Style::default().fg(Color::White),
            };
            Row::new(vec![
                row.part.label().to_string(),
                format!("{:.0}", ttk.target_health),
                format!("{:.2}", ttk.damage_per_shot),
                format!("{:.2}", ttk.penetration_chance),
                shots,
                seconds,
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Min(8),
    ];

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(chunks[1]);

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Zone", "HP", "Dmg/shot", "Pen %", "Shots", "Time"])
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(table, body[0]);

    let bar = progress_bar(app.fire_rate, 1200.0, body[1].width.saturating_sub(2), Color::Cyan)
        .block(Block::default().borders(Borders::ALL).title(" RPM "));
    f.render_widget(bar, body[1]);
}
