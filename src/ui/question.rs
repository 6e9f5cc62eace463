use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::controller::Pass;
use crate::models::{NUM_OPTIONS, QuestionSet};

const OPTION_LABELS: [char; NUM_OPTIONS] = ['A', 'B', 'C', 'D'];

/// Practice worksheet or test question, depending on the pass.
pub fn render(frame: &mut Frame, area: Rect, pass: &Pass, selected: usize) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(NUM_OPTIONS as u16 * 2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], pass);
    render_question_text(frame, chunks[1], pass.question().prompt());
    render_options(frame, chunks[2], pass, selected);
    render_feedback(frame, chunks[3], pass);

    let controls = match (pass.set(), pass.answer().is_some()) {
        (_, true) => "enter continue  ·  esc quit",
        (QuestionSet::Practice, false) => "j/k or 1-4 choose  ·  enter answer  ·  ? help  ·  esc back",
        (QuestionSet::Test, false) => "j/k or 1-4 choose  ·  enter answer  ·  esc quit test",
    };
    super::render_controls(frame, chunks[4], controls);
}

fn render_progress(frame: &mut Frame, area: Rect, pass: &Pass) {
    let (heading, color) = match pass.set() {
        QuestionSet::Practice => ("Practice Worksheet", Color::LightYellow),
        QuestionSet::Test => ("Final Assessment", Color::LightCyan),
    };
    frame.render_widget(Paragraph::new(heading).fg(color).bold(), area);

    let progress = format!("Question {} of {}", pass.index() + 1, pass.total());
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, pass: &Pass, selected: usize) {
    let options = pass.question().options();
    let answer = pass.answer();
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let chosen = answer.filter(|a| a.selected() == option);
        let is_selected = answer.is_none() && index == selected;

        let style = match chosen {
            Some(a) if a.is_correct() => Style::default().fg(Color::Black).bg(Color::Green).bold(),
            Some(_) => Style::default().fg(Color::White).bg(Color::Red).bold(),
            None if is_selected => Style::default().fg(Color::Cyan).bold(),
            None => Style::default().fg(Color::Gray),
        };
        let marker = if is_selected || chosen.is_some() { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, pass: &Pass) {
    let Some(answer) = pass.answer() else {
        return;
    };
    // Tests only reveal correctness through the option colours.
    if pass.set() == QuestionSet::Test {
        return;
    }

    let verdict = if answer.is_correct() {
        Line::from(Span::styled("Correct! 🌟", Style::default().fg(Color::Green).bold()))
    } else {
        Line::from(Span::styled(
            "Try again next time!",
            Style::default().fg(Color::Red).bold(),
        ))
    };

    let mut lines = vec![verdict];
    if let Some(help) = pass.question().help() {
        lines.push(Line::from(""));
        lines.push(Line::from(help.fg(Color::Gray)));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
