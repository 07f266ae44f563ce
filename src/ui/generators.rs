//! Rendering for the story and release-plan generator tabs.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{GeneratorKind, Mode};
use crate::theme::{
    BORDER_SUBTLE, TEAL_BRIGHT, TEAL_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::spinner_frame;
use crate::widgets::{Artifact, Generator};

/// Either generator tab: input field, trigger line, output area.
pub fn render_generator(frame: &mut Frame, area: Rect, app: &App) {
    let Some(generator) = app.generator_for_tab() else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Trigger line
            Constraint::Min(4),    // Output
        ])
        .split(area);

    render_input(frame, rows[0], app, generator);
    render_trigger(frame, rows[1], app, generator);
    render_output(frame, rows[2], generator);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App, generator: &Generator) {
    let title = match generator.kind() {
        GeneratorKind::Story => " Product Vision ",
        GeneratorKind::Release => " Release Goal ",
    };
    let editing = app.mode == Mode::Insert;
    let border = if editing { TEAL_PRIMARY } else { BORDER_SUBTLE };

    // Block cursor while editing
    let text = if editing {
        format!("{}█", generator.input())
    } else if generator.input().is_empty() {
        "(press i to type)".to_string()
    } else {
        generator.input().to_string()
    };
    let color = if generator.input().is_empty() && !editing {
        TEXT_MUTED
    } else {
        TEXT_PRIMARY
    };

    let input = Paragraph::new(text).style(Style::default().fg(color)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, area);
}

fn render_trigger(frame: &mut Frame, area: Rect, app: &App, generator: &Generator) {
    let line = if generator.is_loading() {
        Line::from(vec![
            Span::styled(
                format!(" {} ", spinner_frame(app.animation_tick)),
                Style::default().fg(TEAL_BRIGHT),
            ),
            Span::styled(generator.trigger_label(), Style::default().fg(TEXT_MUTED)),
        ])
    } else {
        Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(TEAL_PRIMARY).add_modifier(Modifier::BOLD)),
            Span::styled(generator.trigger_label(), Style::default().fg(TEXT_SECONDARY)),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_output(frame: &mut Frame, area: Rect, generator: &Generator) {
    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_SUBTLE));

    let Some(artifact) = generator.artifact() else {
        let placeholder = match generator.kind() {
            GeneratorKind::Story => "Generated user stories will appear here.",
            GeneratorKind::Release => "Your release plan outline will appear here.",
        };
        let hint = Paragraph::new(placeholder)
            .style(Style::default().fg(TEXT_MUTED))
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let lines = match artifact {
        Artifact::Stories {
            stories,
            total,
            time_estimate,
        } => story_lines(stories, *total, time_estimate),
        Artifact::Release(plan) => release_lines(plan),
    };

    let output = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(output, area);
}

fn story_lines(
    stories: &[(&'static str, u32)],
    total: u32,
    time_estimate: &'static str,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Generated User Stories:",
            Style::default().fg(TEAL_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for (story, points) in stories {
        lines.push(Line::from(Span::styled(
            *story,
            Style::default().fg(TEXT_PRIMARY),
        )));
        lines.push(Line::from(Span::styled(
            format!("  Estimated: {} story points", points),
            Style::default().fg(TEAL_BRIGHT),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            "Total Estimated Effort: ",
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} story points", total),
            Style::default().fg(TEAL_BRIGHT),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        time_estimate,
        Style::default().fg(TEXT_SECONDARY),
    )));
    lines
}

fn release_lines(plan: &crate::widgets::generator::ReleasePlan) -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().fg(TEAL_PRIMARY).add_modifier(Modifier::BOLD),
        ))
    };
    let item = |text: String| Line::from(Span::styled(text, Style::default().fg(TEXT_SECONDARY)));

    let mut lines = vec![
        Line::from(Span::styled(
            "Release Plan Outline:",
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        heading("Release Goal"),
        item(format!("  {}", plan.goal)),
        Line::default(),
        heading("Key Features"),
    ];
    for feature in plan.features {
        lines.push(item(format!("  • {}", feature)));
    }
    lines.push(Line::default());
    lines.push(heading("Timeline"));
    lines.push(item(format!("  {}", plan.timeline)));
    lines.push(Line::default());
    lines.push(heading("Key Risks"));
    for risk in plan.risks {
        lines.push(item(format!("  • {}", risk)));
    }
    lines.push(Line::default());
    lines.push(heading("Success Metrics"));
    for metric in plan.metrics {
        lines.push(item(format!("  • {}", metric)));
    }
    lines
}
