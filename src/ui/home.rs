use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chapters = app.curriculum().chapters();

    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let greeting = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Hi ", Style::default().fg(Color::White).bold()),
            Span::styled(
                format!("{}!", app.learner()),
                Style::default().fg(Color::LightMagenta).bold(),
            ),
        ]),
        Line::from("Ready for your Math Adventure today? Pick a chapter to start!".fg(Color::Gray)),
    ];
    let widget = Paragraph::new(greeting).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Magenta),
    );
    frame.render_widget(widget, chunks[0]);

    let mut lines: Vec<Line> = Vec::with_capacity(chapters.len() * 2);
    for (index, chapter) in chapters.iter().enumerate() {
        let is_selected = index == app.chapter_cursor();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::raw(format!("{}  ", chapter.icon)),
            Span::styled(chapter.title.as_str(), style),
            Span::styled("   Grade 1", Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), chunks[2]);

    super::render_controls(frame, chunks[3], "j/k choose  ·  enter open  ·  q quit");
}
