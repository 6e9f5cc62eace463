use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::Chapter;

pub fn render(frame: &mut Frame, area: Rect, chapter: &Chapter) {
    let visual_height = chapter.learn.visual.lines().count() as u16 + 2;

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(visual_height),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let heading = Paragraph::new("Learning Time!")
        .fg(Color::LightMagenta)
        .bold();
    frame.render_widget(heading, chunks[0]);

    let concept = Paragraph::new(chapter.learn.concept.as_str())
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(concept, chunks[1]);

    let visual_lines: Vec<Line> = chapter
        .learn
        .visual
        .lines()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::LightMagenta).bold())))
        .collect();
    let visual = Paragraph::new(visual_lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(visual, chunks[2]);

    super::render_controls(frame, chunks[4], "enter/v play voice  ·  esc back to chapter");
}
