//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let constants = &app.model.constants;

    let lines = vec![
        heading("═══ Navigation ═══"),
        key_line("1-5", "Jump to tab (Compare/Zones/TTK/Wear/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        heading("═══ Selection ═══"),
        key_line("↑/k  ↓/j", "Previous/next ammo A"),
        key_line("←/h  →/l", "Previous/next ammo B"),
        key_line("a", "Cycle armor"),
        key_line("z", "Cycle body zone"),
        key_line("e", "Wear or remove the selected armor"),
        key_line("+ / -", "Raise/lower fire rate"),
        key_line("[ / ]", "Flatten/steepen impact angle"),
        key_line("s", "Roll sampled engagements (Wear tab)"),
        Line::from(""),
        heading("═══ Damage Model ═══"),
        Line::from(""),
        Line::from(Span::styled("Penetration:", Style::default().fg(Color::Yellow))),
        Line::from(format!(
            "  Resistance = Class × {} × Material × max({}, Durability%)",
            constants.class_resistance_step, constants.durability_floor
        )),
        Line::from("  Chance follows a curve of Penetration − Resistance"),
        Line::from(""),
        Line::from(Span::styled("Blocked hits:", Style::default().fg(Color::Yellow))),
        Line::from(format!(
            "  Blunt reduction = min({}, Class × {} × Material)",
            constants.blunt_reduction_cap, constants.blunt_reduction_per_class
        )),
        Line::from("  Average = Pen% × Damage + (1 − Pen%) × Blocked"),
        Line::from(""),
        Line::from(Span::styled("Armor wear:", Style::default().fg(Color::Yellow))),
        Line::from(format!(
            "  Penetration × {} (× {} if penetrating) × Destructibility, floor {}",
            constants.wear_per_penetration, constants.penetrated_wear_multiplier, constants.minimum_wear
        )),
        Line::from(""),
        Line::from(Span::styled("Time to kill:", Style::default().fg(Color::Yellow))),
        Line::from("  Shots = ⌈Zone HP / Average damage⌉"),
        Line::from("  Time = (Shots − 1) / (RPM / 60)"),
        Line::from(""),
        Line::from(Span::styled(
            "All figures are expected values; only the Wear tab samples.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}
