//! Velocity bar chart rendering.

use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

use crate::app::App;
use crate::models::knowledge::VELOCITY_MAX;
use crate::theme::{BORDER_SUBTLE, TEAL_BRIGHT, TEXT_MUTED, TEXT_PRIMARY};

/// Render the velocity series as a bar chart, one bar per sprint. The
/// value axis starts at zero; `max` keeps the scale fixed so new bars do
/// not rescale the existing ones.
pub fn render_velocity_chart(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Team Velocity - Story Points per Sprint ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_SUBTLE));

    let bars: Vec<Bar> = app
        .velocity
        .sprints()
        .iter()
        .map(|sprint| {
            // "Sprint 12" -> "S12" so labels survive narrow bars
            let short_label = sprint
                .label
                .strip_prefix("Sprint ")
                .map(|n| format!("S{}", n))
                .unwrap_or_else(|| sprint.label.clone());
            Bar::default()
                .value(sprint.points as u64)
                .label(Line::from(short_label))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1)
        .max((VELOCITY_MAX + 5) as u64)
        .bar_style(Style::default().fg(TEAL_BRIGHT))
        .value_style(Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD))
        .label_style(Style::default().fg(TEXT_MUTED));

    frame.render_widget(chart, area);
}
