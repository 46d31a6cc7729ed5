use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Explanation, ScoreState};
use crate::quiz::{ExplanationState, Round, Verdict};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let round = session.round();

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_score(frame, chunks[0], session.score());
    render_meaning(frame, chunks[1], &round.question.idiom().vietnamese);
    render_phrase(frame, chunks[2], round);
    render_feedback(frame, chunks[3], round);
    render_explanation(frame, chunks[4], round, app.explanations_enabled());
    render_controls(frame, chunks[5], round.verdict.is_some());
}

fn render_score(frame: &mut Frame, area: Rect, score: ScoreState) {
    let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let left = Paragraph::new(vec![
        Line::from("SCORE".fg(Color::DarkGray)),
        Line::from(vec![
            Span::styled(score.display_score(), Style::default().fg(Color::White).bold()),
            Span::styled(" / 10", Style::default().fg(Color::DarkGray)),
        ]),
    ]);

    let right = Paragraph::new(vec![
        Line::from("CORRECT".fg(Color::DarkGray)),
        Line::from(Span::styled(
            format!(
                "{} / {}  ·  streak {}  ·  best {}",
                score.correct(),
                score.total(),
                score.streak(),
                score.best_streak()
            ),
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Right);

    frame.render_widget(left, columns[0]);
    frame.render_widget(right, columns[1]);
}

fn render_meaning(frame: &mut Frame, area: Rect, vietnamese: &str) {
    let widget = Paragraph::new(format!("\"{}\"", vietnamese))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).italic())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" Vietnamese meaning ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_phrase(frame: &mut Frame, area: Rect, round: &Round) {
    let question = &round.question;
    let blank_style = match round.verdict {
        Some(Verdict::Correct) => Style::default().fg(Color::Green).bold().underlined(),
        Some(Verdict::Incorrect) => Style::default().fg(Color::Red).bold().underlined(),
        None => Style::default().fg(Color::Cyan).bold().underlined(),
    };

    let mut spans = Vec::with_capacity(question.display_parts().len() * 2);
    for (index, part) in question.display_parts().iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        if index == question.missing_index() {
            let typed = if round.input.is_empty() { "..." } else { round.input.as_str() };
            spans.push(Span::styled(typed, blank_style));
        } else {
            spans.push(Span::styled(part.as_str(), Style::default().fg(Color::White).bold()));
        }
    }

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::vertical(1)));
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, round: &Round) {
    let line = match round.verdict {
        Some(Verdict::Correct) => Line::from(Span::styled(
            "Correct!",
            Style::default().fg(Color::Green).bold(),
        )),
        Some(Verdict::Incorrect) => Line::from(vec![
            Span::styled("Wrong! ", Style::default().fg(Color::Red).bold()),
            Span::styled(
                format!("The idiom is \"{}\"", round.question.reconstruct()),
                Style::default().fg(Color::Gray),
            ),
        ]),
        None => Line::from(""),
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_explanation(frame: &mut Frame, area: Rect, round: &Round, enabled: bool) {
    if round.verdict.is_none() {
        return;
    }

    let lines = match &round.explanation {
        ExplanationState::Idle if enabled => vec![Line::from(
            "Press e for a detailed AI explanation".fg(Color::DarkGray),
        )],
        ExplanationState::Idle => vec![Line::from(
            "AI explanations need GEMINI_API_KEY".fg(Color::DarkGray),
        )],
        ExplanationState::Pending => vec![Line::from("Loading explanation...".fg(Color::Yellow))],
        ExplanationState::Unavailable => vec![Line::from(vec![
            Span::styled("Explanation unavailable. ", Style::default().fg(Color::Red)),
            Span::styled("Press e to try again.", Style::default().fg(Color::DarkGray)),
        ])],
        ExplanationState::Ready(explanation) => explanation_lines(explanation),
    };

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Explanation ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn explanation_lines(explanation: &Explanation) -> Vec<Line<'_>> {
    let heading = |text: &'static str| Line::from(Span::styled(text, Style::default().fg(Color::Cyan).bold()));
    let body = |text: &str| Line::from(Span::styled(text.to_string(), Style::default().fg(Color::Gray)));

    vec![
        heading("Meaning"),
        body(&explanation.meaning),
        Line::from(""),
        heading("Origin"),
        body(&explanation.origin),
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", explanation.example),
            Style::default().fg(Color::Yellow).italic(),
        )),
        Line::from(""),
        heading("Vietnamese context"),
        body(&explanation.vietnamese_context),
    ]
}

fn render_controls(frame: &mut Frame, area: Rect, graded: bool) {
    let hint = if graded {
        "enter/n next question  ·  e explain  ·  esc menu"
    } else {
        "type the missing word  ·  enter check  ·  tab skip  ·  esc menu"
    };

    let widget = Paragraph::new(hint).alignment(Alignment::Center).fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
