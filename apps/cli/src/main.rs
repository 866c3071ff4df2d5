mod app;
mod event;
mod tasks;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use vera_client::VeracityClient;
use vera_http::ReqwestClient;

use crate::app::App;
use crate::event::{AppEvent, EventHandler};

#[derive(Parser)]
#[command(name = "veracity", about = "Fact-checking TUI")]
struct Cli {
    #[arg(
        long,
        env = "VERACITY_BASE_URL",
        default_value = "http://localhost:8000"
    )]
    base_url: String,

    /// Request logs go to a file; the terminal belongs to the UI.
    #[arg(long, env = "VERACITY_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn setup_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        original(info);
    }));
}

fn init_tracing(log_file: Option<PathBuf>) {
    let path = log_file.unwrap_or_else(|| std::env::temp_dir().join("veracity.log"));
    if let Ok(file) = std::fs::File::create(&path) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .try_init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_file);

    let client = Arc::new(VeracityClient::new(ReqwestClient::new(&cli.base_url)));
    let (task_tx, task_rx) = tokio::sync::mpsc::unbounded_channel();

    setup_panic_hook();
    let mut terminal = ratatui::init();
    let mut app = App::new(client, task_tx);
    let mut events = EventHandler::new(task_rx);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app)).ok();

        match events.next().await {
            Some(AppEvent::Key(key)) => app.handle_key(key),
            Some(AppEvent::Task(event)) => app.handle_task_event(event),
            Some(AppEvent::Resize) | Some(AppEvent::Tick) => {}
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    ratatui::restore();
}
