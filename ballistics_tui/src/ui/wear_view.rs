//! Engagement projection on one zone with armor wearing down

use super::{chance_color, progress_bar, section_header, stat_line};
use crate::app::{App, SAMPLE_RUNS};
use ballistics_core::EngagementProjection;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(50), Constraint::Length(36)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(chunks[0]);

    let projection = app.projection();
    draw_status_bar(f, app, &projection, left[0]);
    draw_shot_log(f, &projection, left[1]);
    draw_summary(f, app, &projection, chunks[1]);
}

fn draw_status_bar(f: &mut Frame, app: &App, projection: &EngagementProjection, area: Rect) {
    let inner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .margin(1)
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} → {} ", app.ammo().name, app.zone().label()));
    f.render_widget(block, area);

    let armor_line = match &projection.armor_name {
        Some(name) => Line::from(vec![
            Span::styled("Armor: ", Style::default().fg(Color::Gray)),
            Span::styled(name.clone(), Style::default().fg(Color::White)),
            Span::styled(
                format!(
                    "  {:.1} → {:.1}",
                    projection.steps.first().and_then(|s| s.durability_before).unwrap_or_default(),
                    projection.final_durability.unwrap_or_default()
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::from(Span::styled("Zone exposed", Style::default().fg(Color::Red))),
    };
    f.render_widget(Paragraph::new(armor_line), inner[0]);

    // durability left against the piece's maximum
    let max = app
        .equipped_armor()
        .iter()
        .find(|a| Some(&a.name) == projection.armor_name.as_ref())
        .map(|a| a.effective_max_durability())
        .unwrap_or_default();
    let left = projection.final_durability.unwrap_or_default();
    let color = if max > 0.0 && left / max > 0.5 {
        Color::Green
    } else if max > 0.0 && left / max > 0.25 {
        Color::Yellow
    } else {
        Color::Red
    };
    f.render_widget(progress_bar(left, max, inner[1].width, color), inner[1]);
}

fn draw_shot_log(f: &mut Frame, projection: &EngagementProjection, area: Rect) {
    let items: Vec<ListItem> = projection
        .steps
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|step| {
            let durability = step
                .durability_before
                .map(|d| format!("{:6.2}", d))
                .unwrap_or_else(|| "     -".to_string());
            let depleted = step.remaining_health <= 0.0;
            let style = if depleted {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(chance_color(step.penetration_chance))
            };
            ListItem::new(Line::from(Span::styled(
                format!(
                    "#{:<3} dur {}  pen {:6.2}%  dmg {:6.2}  wear {:5.2}  hp {:6.2}",
                    step.shot,
                    durability,
                    step.penetration_chance,
                    step.damage,
                    step.armor_damage,
                    step.remaining_health
                ),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Expected shots "));
    f.render_widget(list, area);
}

fn draw_summary(f: &mut Frame, app: &App, projection: &EngagementProjection, area: Rect) {
    let mut lines = vec![
        section_header("Projection"),
        stat_line("Target HP", projection.target_health),
        stat_line("Damage dealt", projection.total_damage()),
        stat_line("Armor lost", projection.total_armor_damage()),
        match projection.incapacitated_after {
            Some(shot) => Line::from(Span::styled(
                format!("Depleted after {} shots", shot),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(
                format!("Standing after {} shots", projection.shots_fired()),
                Style::default().fg(Color::Green),
            )),
        },
        Line::from(""),
        section_header("Sampled"),
    ];

    match &app.sample {
        Some(sample) => {
            lines.push(stat_line("Runs", f64::from(sample.runs)));
            lines.push(stat_line("Depleted %", sample.kill_rate()));
            lines.push(stat_line("Penetrations/run", sample.mean_penetrations));
            if let (Some(mean), Some(best), Some(worst)) = (sample.mean_shots, sample.best, sample.worst) {
                lines.push(stat_line("Mean shots", mean));
                lines.push(Line::from(Span::styled(
                    format!("Best {} / worst {}", best, worst),
                    Style::default().fg(Color::White),
                )));
            }
        }
        None => lines.push(Line::from(Span::styled(
            format!("[s] roll {} engagements", SAMPLE_RUNS),
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Summary "));
    f.render_widget(paragraph, area);
}
