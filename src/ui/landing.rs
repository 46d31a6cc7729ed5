use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Fill(1),
    ])
    .split(area);

    let score = app.session().score();
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "IDIOM MASTER",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("English idioms · Vietnamese meanings".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} idioms in the library", app.corpus().len()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        menu_line("ENTER", "start quiz"),
        menu_line("L", "browse library"),
        menu_line("Q", "quit"),
        Line::from(""),
    ];

    if score.total() > 0 {
        content.push(Line::from(Span::styled(
            format!(
                "Session score {} / 10  ·  best streak {}",
                score.display_score(),
                score.best_streak()
            ),
            Style::default().fg(Color::Yellow),
        )));
    } else if !app.explanations_enabled() {
        content.push(Line::from(
            "Set GEMINI_API_KEY to enable AI explanations".fg(Color::DarkGray),
        ));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

fn menu_line<'a>(key: &'a str, label: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(key, Style::default().fg(Color::Green).bold()),
        Span::styled(format!("  {}", label), Style::default().fg(Color::Gray)),
    ])
}
