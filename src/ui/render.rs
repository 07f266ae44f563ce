//! Top-level frame rendering: tabs bar, active panel, notices, footer.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::App;
use crate::models::{Mode, Tab};
use crate::notices::NoticeKind;
use crate::theme::{
    BG_PRIMARY, BORDER_SUBTLE, GREEN_SUCCESS, RED_ERROR, TEAL_PRIMARY, TEXT_MUTED, TEXT_SECONDARY,
};
use crate::ui::chart::render_velocity_chart;
use crate::ui::generators::render_generator;
use crate::ui::panels::{render_explainer, render_poker, render_roadmap};

/// Draw one frame of the whole interface.
pub fn draw(frame: &mut Frame, app: &App) {
    let background = Block::default().style(Style::default().bg(BG_PRIMARY));
    frame.render_widget(background, frame.area());

    let notice_count = app.notices.for_tab(app.active_tab).count() as u16;
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Tabs bar
            Constraint::Min(6),               // Active panel
            Constraint::Length(notice_count), // Transient notices
            Constraint::Length(1),            // Footer hints
        ])
        .split(frame.area());

    render_tabs(frame, main_layout[0], app);

    match app.active_tab {
        Tab::Roadmap => render_roadmap(frame, main_layout[1], app),
        Tab::Velocity => render_velocity_chart(frame, main_layout[1], app),
        Tab::Poker => render_poker(frame, main_layout[1], app),
        Tab::Stories | Tab::Release => render_generator(frame, main_layout[1], app),
        Tab::Pmbok => render_explainer(frame, main_layout[1], app),
    }

    render_notices(frame, main_layout[2], app);
    render_footer(frame, main_layout[3], app);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.label())).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" PM Lab ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER_SUBTLE)),
        )
        .select(app.active_tab.index())
        .style(Style::default().fg(TEXT_SECONDARY))
        .highlight_style(Style::default().fg(TEAL_PRIMARY).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn render_notices(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let lines: Vec<Line> = app
        .notices
        .for_tab(app.active_tab)
        .map(|notice| {
            let color = match notice.kind {
                NoticeKind::Error => RED_ERROR,
                NoticeKind::Status => GREEN_SUCCESS,
            };
            Line::from(Span::styled(
                format!(" {}", notice.text),
                Style::default().fg(color),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match (app.mode, app.active_tab) {
        (Mode::Insert, _) => " Esc: Done | Enter: Generate | type to edit ",
        (_, Tab::Roadmap) => " q: Quit | ←/→: Tab | ↑/↓: Focus | Enter/1-3: Select stage ",
        (_, Tab::Velocity) => " q: Quit | ←/→: Tab | a: Add Sprint ",
        (_, Tab::Poker) => " q: Quit | ←/→: Tab | 1-7: Pick estimate card ",
        (_, Tab::Stories) => " q: Quit | ←/→: Tab | i: Edit vision | Enter: Generate ",
        (_, Tab::Release) => " q: Quit | ←/→: Tab | i: Edit goal | Enter: Generate ",
        (_, Tab::Pmbok) => " q: Quit | ←/→: Tab | Enter: Toggle explanation ",
    };
    let footer = Paragraph::new(hints).style(Style::default().fg(TEXT_MUTED).bg(BG_PRIMARY));
    frame.render_widget(footer, area);
}
