mod chapter_menu;
mod confetti;
mod home;
mod learn;
mod question;
mod results;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

pub use confetti::Confetti;

use crate::app::App;
use crate::controller::Screen;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let caption_height = if app.caption().is_some() { 4 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(caption_height),
    ])
    .split(area);

    render_header(frame, chunks[0]);

    let body = chunks[1];
    match app.session().screen() {
        Screen::Home => home::render(frame, body, app),
        Screen::ChapterMenu { chapter } => chapter_menu::render(frame, body, chapter, app.module_cursor()),
        Screen::Learn { chapter } => learn::render(frame, body, chapter),
        Screen::Practice(pass) | Screen::Test(pass) => question::render(frame, body, pass, app.option_cursor()),
        Screen::Results { outcome, .. } => results::render(frame, body, outcome, app.learner()),
    }

    if let Some(caption) = app.caption() {
        render_caption(frame, chunks[2], caption);
    }

    confetti::render(frame, area, app.confetti());
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" KID", Style::default().fg(Color::LightMagenta).bold()),
        Span::styled("TUTOR", Style::default().fg(Color::LightCyan).bold()),
    ]);
    let badge = Line::from(Span::styled(
        "★ Math Whiz ",
        Style::default().fg(Color::LightYellow).bold(),
    ))
    .alignment(Alignment::Right);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Color::DarkGray);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(title), inner);
    frame.render_widget(Paragraph::new(badge), inner);
}

fn render_caption(frame: &mut Frame, area: Rect, caption: &str) {
    let widget = Paragraph::new(caption)
        .wrap(Wrap { trim: true })
        .fg(Color::LightYellow)
        .italic()
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Color::DarkGray)
                .title(" 🔊 ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

/// Controls line shared by every screen.
pub(crate) fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
