use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use vera_http::HttpClient;
use vera_report::Segment;

use crate::app::{App, SummarySlot};

pub fn render<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let [input_area, status_area, body_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    render_input(frame, app, input_area);
    render_status(frame, app, status_area);

    if !app.analysis.claims.is_empty() || !app.analysis.summaries.is_empty() {
        let [highlight_area, side_area] =
            Layout::horizontal([Constraint::Fill(2), Constraint::Fill(1)]).areas(body_area);
        render_highlights(frame, app, highlight_area);
        render_side(frame, app, side_area);
    }
}

fn render_input<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let title = if app.analysis.loading {
        " Analyzing... "
    } else {
        " Enter content for analysis, enter to run "
    };
    frame.render_widget(
        Paragraph::new(app.analysis.input.as_str())
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn render_status<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>, area: Rect) {
    if let Some(error) = &app.analysis.error {
        frame.render_widget(
            Paragraph::new(format!(" {error}")).style(Style::default().fg(Color::Red)),
            area,
        );
    }
}

fn render_highlights<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let selected_id = app
        .analysis
        .claims
        .get(app.analysis.selected)
        .map(|c| c.id.as_str());

    let spans: Vec<Span> = app
        .analysis
        .segments
        .iter()
        .map(|segment| segment_span(segment, selected_id))
        .collect();

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(" claims ", Style::default().fg(Color::DarkGray)));
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn segment_span<'a>(segment: &'a Segment, selected_id: Option<&str>) -> Span<'a> {
    match segment.claim_id.as_deref() {
        Some(id) if selected_id == Some(id) => Span::styled(
            segment.text.as_str(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Some(_) => Span::styled(
            segment.text.as_str(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::UNDERLINED),
        ),
        None => Span::raw(segment.text.as_str()),
    }
}

fn render_side<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Summaries",
        Style::default().add_modifier(Modifier::UNDERLINED),
    ))];
    if app.analysis.summaries.is_empty() {
        lines.push(Line::from(Span::styled(
            "none returned",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for summary in &app.analysis.summaries {
        lines.push(Line::from(Span::raw(summary.as_str())));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Claim summary",
        Style::default().add_modifier(Modifier::UNDERLINED),
    )));
    match &app.analysis.summary {
        SummarySlot::Empty => lines.push(Line::from(Span::styled(
            "select a claim, ctrl-s to fetch",
            Style::default().fg(Color::DarkGray),
        ))),
        SummarySlot::Loading { .. } => lines.push(Line::from(Span::styled(
            "Generating...",
            Style::default().fg(Color::Cyan),
        ))),
        SummarySlot::Ready { summary, .. } => {
            lines.push(Line::from(Span::raw(summary.as_str())));
        }
        SummarySlot::Failed(message) => lines.push(Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        ))),
    }

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
