//! Panel rendering for the roadmap, planning poker, and explainer tabs.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::RoadmapTopic;
use crate::models::knowledge::ESTIMATE_SCALE;
use crate::theme::{
    AMBER_WARNING, BG_SECONDARY, BORDER_SUBTLE, GREEN_SUCCESS, TEAL_PRIMARY, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::wrap_text;
use crate::widgets::roadmap::topic_record;

/// Roadmap tab: three topic cards on the left, details on the right.
pub fn render_roadmap(frame: &mut Frame, area: Rect, app: &App) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let card_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(panels[0]);

    for (i, topic) in RoadmapTopic::ALL.iter().enumerate() {
        render_topic_card(frame, card_rows[i], app, *topic, i + 1);
    }

    render_topic_details(frame, panels[1], app);
}

fn render_topic_card(frame: &mut Frame, area: Rect, app: &App, topic: RoadmapTopic, number: usize) {
    let focused = app.roadmap.focused() == topic;
    let selected = app.roadmap.selected() == Some(topic);

    let border_color = if selected {
        TEAL_PRIMARY
    } else if focused {
        TEXT_SECONDARY
    } else {
        BORDER_SUBTLE
    };

    let indicator = if selected { "●" } else { "○" };
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", indicator),
            Style::default().fg(if selected { TEAL_PRIMARY } else { TEXT_MUTED }),
        ),
        Span::styled(
            format!("{}. ", number),
            Style::default().fg(TEXT_MUTED),
        ),
        Span::styled(
            topic_record(topic).title,
            Style::default().fg(TEXT_PRIMARY).add_modifier(if focused {
                Modifier::BOLD
            } else {
                Modifier::empty()
            }),
        ),
    ]);

    let card = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(BG_SECONDARY)),
    );
    frame.render_widget(card, area);
}

fn render_topic_details(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_SUBTLE));

    let Some(record) = app.roadmap.details() else {
        let placeholder = Paragraph::new("Select a stage to see its details.")
            .style(Style::default().fg(TEXT_MUTED))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let width = area.width.saturating_sub(4) as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            record.title,
            Style::default().fg(TEAL_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for (label, text) in record.facts {
        for (i, wrapped) in wrap_text(text, width.saturating_sub(label.len() + 2))
            .into_iter()
            .enumerate()
        {
            if i == 0 {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}: ", label),
                        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(wrapped, Style::default().fg(TEXT_SECONDARY)),
                ]));
            } else {
                lines.push(Line::from(Span::styled(
                    wrapped,
                    Style::default().fg(TEXT_SECONDARY),
                )));
            }
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        record.bullet_heading,
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    )));
    for bullet in record.bullets {
        lines.push(Line::from(Span::styled(
            format!("  • {}", bullet),
            Style::default().fg(TEXT_SECONDARY),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Planning poker tab: story prompt, the seven estimate cards, and the
/// round result.
pub fn render_poker(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Story prompt
            Constraint::Length(3), // Estimate cards
            Constraint::Min(4),    // Result
        ])
        .split(area);

    let prompt = Paragraph::new(format!("\"{}\"", app.poker.story()))
        .style(Style::default().fg(TEXT_PRIMARY))
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(
                    " Story {}/{} ",
                    app.poker.cursor() + 1,
                    crate::models::knowledge::STORY_PROMPTS.len()
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER_SUBTLE)),
        );
    frame.render_widget(prompt, rows[0]);

    let card_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7])
        .split(rows[1]);

    for (i, value) in ESTIMATE_SCALE.iter().enumerate() {
        let selected = app.poker.selected_card() == Some(i);
        let style = if selected {
            Style::default().fg(TEAL_PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_SECONDARY)
        };
        let border = if selected { TEAL_PRIMARY } else { BORDER_SUBTLE };
        let card = Paragraph::new(format!("{}", value))
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        frame.render_widget(card, card_cols[i]);
    }

    render_poker_result(frame, rows[2], app);
}

fn render_poker_result(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_SUBTLE));

    let Some(round) = app.poker.round() else {
        let hint = Paragraph::new("Pick a card (1-7) to estimate this story.")
            .style(Style::default().fg(TEXT_MUTED))
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let verdict = if round.consensus() {
        Span::styled("Consensus reached!", Style::default().fg(GREEN_SUCCESS))
    } else {
        Span::styled(
            "Discussion needed to align estimates",
            Style::default().fg(AMBER_WARNING),
        )
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Your estimate: ", Style::default().fg(TEXT_SECONDARY)),
            Span::styled(
                format!("{} points", round.picked),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Team average: ", Style::default().fg(TEXT_SECONDARY)),
            Span::styled(
                format!("{} points", round.team),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(verdict),
        Line::default(),
        Line::from(Span::styled(
            "Next story in a few seconds...",
            Style::default().fg(TEXT_MUTED),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// PMBOK vs Agile tab: a toggleable static comparison block.
pub fn render_explainer(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" How do PMBOK and Agile relate? ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_SUBTLE));

    let Some(sections) = app.explainer.sections() else {
        let hint = Paragraph::new("Press Enter to show the comparison.")
            .style(Style::default().fg(TEXT_MUTED))
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let width = area.width.saturating_sub(4) as usize;
    let mut lines = Vec::new();
    for section in sections {
        lines.push(Line::from(Span::styled(
            section.heading,
            Style::default().fg(TEAL_PRIMARY).add_modifier(Modifier::BOLD),
        )));
        for text in section.lines {
            for wrapped in wrap_text(text, width.saturating_sub(2)) {
                lines.push(Line::from(Span::styled(
                    format!("  {}", wrapped),
                    Style::default().fg(TEXT_SECONDARY),
                )));
            }
        }
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
