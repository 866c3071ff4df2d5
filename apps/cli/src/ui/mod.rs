mod analysis;
mod home;
mod verification;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use vera_report::{ScoreBand, Verdict};
use vera_http::HttpClient;

use crate::app::{App, Page};

pub fn draw<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>) {
    let [header_area, body_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, app, header_area);

    match app.page {
        Page::Home => home::render(frame, app, body_area),
        Page::Analysis => analysis::render(frame, app, body_area),
        Page::Verification => verification::render(frame, app, body_area),
    }

    render_hints(frame, app, hint_area);
}

fn render_header<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let mut spans = vec![Span::styled(
        " veracity ",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for page in [Page::Home, Page::Analysis, Page::Verification] {
        let style = if page == app.page {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("| {} ", page.title()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_hints<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let hints = match app.page {
        Page::Home => " tab: page │ enter: verify │ ↑/↓: cards │ ctrl-o: open source │ esc: quit ",
        Page::Analysis => " tab: page │ enter: analyze │ ↑/↓: claims │ ctrl-s: summary │ esc: quit ",
        Page::Verification => " tab: page │ esc: quit ",
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

pub(crate) fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::True => Color::Green,
        Verdict::False => Color::Red,
        Verdict::Misleading => Color::Yellow,
        Verdict::Other => Color::DarkGray,
    }
}

pub(crate) fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Success => Color::Green,
        ScoreBand::Warning => Color::Yellow,
        ScoreBand::Danger => Color::Red,
    }
}
