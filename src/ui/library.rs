use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::IdiomRecord;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let results = app.library_results();

    render_header(frame, chunks[0], results.len(), app.corpus().len());
    render_search(frame, chunks[1], app.library_query());
    render_results(frame, chunks[2], &results, app.library_scroll());
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect, shown: usize, total: usize) {
    let line = Line::from(vec![
        Span::styled("IDIOM LIBRARY", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("   showing {} of {}", shown, total),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_search(frame: &mut Frame, area: Rect, query: &str) {
    let line = Line::from(vec![
        Span::styled(query, Style::default().fg(Color::Yellow)),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Search ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_results(frame: &mut Frame, area: Rect, results: &[&IdiomRecord], scroll: usize) {
    if results.is_empty() {
        let widget = Paragraph::new(vec![
            Line::from(""),
            Line::from("No idioms found".bold()),
            Line::from("Try searching for something else".fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(widget, area);
        return;
    }

    let lines: Vec<Line> = results
        .iter()
        .skip(scroll)
        .flat_map(|idiom| {
            [
                Line::from(vec![
                    Span::styled(format!("#{:<4}", idiom.id), Style::default().fg(Color::DarkGray)),
                    Span::styled(idiom.english.as_str(), Style::default().fg(Color::White).bold()),
                ]),
                Line::from(vec![
                    Span::raw("     "),
                    Span::styled(idiom.vietnamese.as_str(), Style::default().fg(Color::Gray).italic()),
                ]),
            ]
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("type to search  ·  ↑/↓ scroll  ·  esc back")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
