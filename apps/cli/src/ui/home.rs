use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use vera_http::HttpClient;
use vera_report::{FactCheck, ProcessingStatus, Report, ScoreBand, SourceRef};

use crate::app::App;
use crate::ui::{band_color, verdict_color};

pub fn render<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let [input_area, status_area, results_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    render_input(frame, app, input_area);
    render_status(frame, app, status_area);
    if let Some(report) = app.home.workflow.report() {
        render_results(frame, report, app.home.selected, results_area);
    }
}

fn render_input<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let processing = app.home.workflow.is_processing();
    let title = if processing {
        " Analyzing... "
    } else {
        " Paste a YouTube URL, enter to verify "
    };
    let border_style = if processing {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let text = if app.home.input.is_empty() && !processing {
        Span::styled(
            "https://...",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::raw(app.home.input.as_str())
    };
    frame.render_widget(
        Paragraph::new(Line::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        ),
        area,
    );
}

fn render_status<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let line = match app.home.workflow.status() {
        ProcessingStatus::Transcribing => Line::from(Span::styled(
            " Step 1/2: Transcribing video...",
            Style::default().fg(Color::Cyan),
        )),
        ProcessingStatus::FactChecking => Line::from(Span::styled(
            " Step 2/2: Verifying claims with sources...",
            Style::default().fg(Color::Cyan),
        )),
        ProcessingStatus::Error => Line::from(Span::styled(
            format!(" {}", app.home.workflow.error().unwrap_or("Error")),
            Style::default().fg(Color::Red),
        )),
        ProcessingStatus::Idle if app.home.workflow.error().is_some() => {
            // local validation message; no request was made
            Line::from(Span::styled(
                format!(" {}", app.home.workflow.error().unwrap_or_default()),
                Style::default().fg(Color::Red),
            ))
        }
        _ => Line::default(),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_results(frame: &mut Frame, report: &Report, selected: usize, area: Rect) {
    let [summary_area, cards_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);

    render_summary(frame, report, summary_area);
    render_cards(frame, &report.fact_checks, selected, cards_area);
}

fn render_summary(frame: &mut Frame, report: &Report, area: Rect) {
    let score = report.overall.score;
    let color = band_color(ScoreBand::of(score));
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{score}"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" / 100", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::raw(report.overall.summary.as_str())),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_cards(frame: &mut Frame, checks: &[FactCheck], selected: usize, area: Rect) {
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        "Detailed Analysis",
        Style::default().add_modifier(Modifier::UNDERLINED),
    ))];
    for (index, check) in checks.iter().enumerate() {
        lines.push(Line::default());
        lines.extend(card_lines(check, index == selected));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn card_lines(check: &FactCheck, selected: bool) -> Vec<Line<'_>> {
    let marker = if selected { "▶ " } else { "  " };
    let mut lines = vec![Line::from(vec![
        Span::raw(marker),
        Span::styled("Claim: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(check.claim.as_str()),
    ])];
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("Verdict: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            check.verdict.as_str(),
            Style::default()
                .fg(verdict_color(check.verdict_kind()))
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            "Explanation: ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(check.explanation.as_str()),
    ]));
    let source = match check.source_ref() {
        SourceRef::Link(url) => Span::styled(
            url,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ),
        SourceRef::Text(text) => Span::raw(text),
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("Source: ", Style::default().add_modifier(Modifier::BOLD)),
        source,
    ]));
    lines
}
