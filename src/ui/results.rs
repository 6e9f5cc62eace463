use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::controller::{Acknowledgement, TestOutcome};

pub fn render(frame: &mut Frame, area: Rect, outcome: &TestOutcome, learner: &str) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let (trophy, headline, color) = match outcome.acknowledgement() {
        Acknowledgement::Celebratory => ("🏆", format!("Amazing Job, {}!", learner), Color::Green),
        Acknowledgement::Encouraging => ("💪", "Good Effort!".to_string(), Color::Gray),
    };

    let content = vec![
        Line::from(""),
        Line::from(trophy),
        Line::from(""),
        Line::from(Span::styled(headline, Style::default().fg(Color::White).bold())),
        Line::from(Span::styled(
            format!("You scored {} out of {}", outcome.score(), outcome.total()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%", outcome.percent()),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    super::render_controls(frame, chunks[3], "r try again  ·  esc back to index  ·  q quit");
}
