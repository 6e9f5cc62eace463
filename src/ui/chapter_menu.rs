use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{Chapter, ModuleKind};

pub fn render(frame: &mut Frame, area: Rect, chapter: &Chapter, selected: usize) {
    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let title = vec![
        Line::from(""),
        Line::from(chapter.icon.as_str()),
        Line::from(Span::styled(
            chapter.title.as_str(),
            Style::default().fg(Color::White).bold(),
        )),
    ];
    let widget = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Cyan),
    );
    frame.render_widget(widget, chunks[0]);

    let mut lines: Vec<Line> = Vec::with_capacity(ModuleKind::ALL.len() * 2);
    for (index, module) in ModuleKind::ALL.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(module_color(*module)).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. {}", index + 1, module.title()), style),
            Span::styled(
                format!("   {}", module.subtitle()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), chunks[2]);

    super::render_controls(frame, chunks[3], "j/k choose  ·  enter open  ·  esc back to index");
}

fn module_color(module: ModuleKind) -> Color {
    match module {
        ModuleKind::Learn => Color::LightMagenta,
        ModuleKind::Practice => Color::LightYellow,
        ModuleKind::Test => Color::LightCyan,
    }
}
