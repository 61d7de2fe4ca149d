//! Two rounds against one armor piece

use super::{percent_line, section_header, stat_line};
use crate::app::App;
use ballistics_core::{AmmoEvaluation, ComparisonWinner};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let comparison = app.comparison();
    draw_target(f, app, rows[0], comparison.winner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let first_wins = comparison.winner == ComparisonWinner::First;
    let second_wins = comparison.winner == ComparisonWinner::Second;
    draw_side(f, " Ammo A ", &comparison.first, first_wins, columns[0]);
    draw_side(f, " Ammo B ", &comparison.second, second_wins, columns[1]);
}

fn draw_target(f: &mut Frame, app: &App, area: Rect, winner: ComparisonWinner) {
    let armor = app.armor();
    let verdict = match winner {
        ComparisonWinner::First => Span::styled(
            format!("{} wins", app.ammo().name),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        ComparisonWinner::Second => Span::styled(
            format!("{} wins", app.second_ammo().name),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        ComparisonWinner::Tie => Span::styled("Tie", Style::default().fg(Color::Yellow)),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Armor: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} (class {}, {})", armor.name, armor.class, armor.material),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  {:.0}/{:.0}", armor.durability, armor.effective_max_durability()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("Zone:  ", Style::default().fg(Color::Gray)),
            Span::styled(app.zone().label(), Style::default().fg(Color::White)),
            Span::styled(
                format!("  ({:.0} HP)", app.model.body_part_health(app.zone().as_str())),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(verdict),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Target "));
    f.render_widget(paragraph, area);
}

fn draw_side(f: &mut Frame, title: &str, side: &AmmoEvaluation, winning: bool, area: Rect) {
    let calc = &side.zone.calculation;
    let border = if winning {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let lines = vec![
        Line::from(Span::styled(
            side.ammo_name.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section_header("Per hit"),
        percent_line("Penetration", calc.penetration_chance),
        stat_line("If penetrating", calc.damage_if_penetrates),
        stat_line("If blocked", calc.damage_if_blocked),
        stat_line("Average", calc.average_damage),
        stat_line("Blunt", calc.blunt_damage),
        stat_line("Armor wear", calc.armor_damage),
        Line::from(""),
        section_header("To deplete"),
        Line::from(Span::styled(
            side.time_to_kill.summary(),
            Style::default().fg(Color::White),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title.to_string()),
    );
    f.render_widget(paragraph, area);
}
