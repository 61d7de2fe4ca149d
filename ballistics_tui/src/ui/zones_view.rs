//! Per-zone damage of ammo A against the worn set

use super::{chance_color, percent_line, section_header};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(60), Constraint::Length(38)])
        .split(area);

    draw_zone_table(f, app, chunks[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(7)])
        .split(chunks[1]);

    draw_armor_list(f, app, side[0]);
    draw_ricochet(f, app, side[1]);
}

fn draw_zone_table(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["Zone", "Armor", "Pen %", "Dmg/hit", "Frag %", "+Frag", "Wear"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .zone_rows()
        .into_iter()
        .map(|row| {
            let armor = row
                .damage
                .protection
                .as_ref()
                .map(|a| format!("{} ({})", a.name, a.class))
                .unwrap_or_else(|| "-".to_string());
            let style = if row.part == app.zone() {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(chance_color(row.damage.penetration_chance))
            };
            Row::new(vec![
                row.part.label().to_string(),
                armor,
                format!("{:.2}", row.damage.penetration_chance),
                format!("{:.2}", row.damage.effective_damage),
                format!("{:.2}", row.fragmentation.fragmentation_chance),
                format!("{:.2}", row.fragmentation.fragmentation_damage),
                format!("{:.2}", row.damage.armor_damage),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Min(16),
        Constraint::Length(7),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", app.ammo().name)),
    );
    f.render_widget(table, area);
}

fn draw_armor_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .catalog
        .armor
        .iter()
        .enumerate()
        .map(|(i, armor)| {
            let marker = if app.is_equipped(i) { "[x]" } else { "[ ]" };
            let mut style = if app.is_equipped(i) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            if i == app.selected_armor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(
                format!("{} {} c{}", marker, armor.name, armor.class),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Armor "));
    f.render_widget(list, area);
}

fn draw_ricochet(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        section_header("Ricochet"),
        Line::from(vec![
            Span::styled("Angle  ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{:.0}°", app.impact_angle), Style::default().fg(Color::White)),
        ]),
        percent_line("Chance", app.ricochet_chance()),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" vs {} ", app.armor().name)),
    );
    f.render_widget(paragraph, area);
}
