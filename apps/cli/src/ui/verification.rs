use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use vera_http::HttpClient;
use vera_report::VerificationResult;

use crate::app::{App, VerificationState};

pub fn render<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let lines = match &app.verification {
        VerificationState::Idle => vec![Line::from(Span::styled(
            " Run an analysis first; its claims are verified here.",
            Style::default().fg(Color::DarkGray),
        ))],
        VerificationState::Loading => vec![Line::from(Span::styled(
            " Loading...",
            Style::default().fg(Color::Cyan),
        ))],
        VerificationState::Failed(message) => vec![Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ))],
        VerificationState::Ready(results) => results_lines(results),
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn results_lines(results: &[VerificationResult]) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(Span::styled(
        " Verification Results",
        Style::default().add_modifier(Modifier::UNDERLINED),
    ))];
    for result in results {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                result.claim.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::raw(result.evidence.as_str()),
        ]));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled("Citations: ", Style::default().fg(Color::DarkGray)),
            Span::raw(result.citations.join(", ")),
        ]));
    }
    lines
}
