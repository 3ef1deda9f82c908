// sentitty: terminal sentiment analyzer with a live iridescent background

use std::io;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use sentitty::analysis::{HttpSentimentClient, SentimentService};
use sentitty::config::Cli;
use sentitty::logging;
use sentitty::orchestrator::Orchestrator;
use sentitty::render::RendererConfig;
use sentitty::ui::results::ResultView;
use sentitty::ui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.validate()?;
    logging::init(&cli.log_file)?;

    let client = HttpSentimentClient::new(cli.api_url.clone(), cli.timeout())
        .context("building HTTP client")?;
    info!(endpoint = client.endpoint(), "sentitty starting");

    if let Some(text) = &cli.print {
        return print_once(&client, text).await;
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Put the terminal back before the panic message is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    // Create and run app
    let renderer_config = RendererConfig::default().with_frame_interval(cli.frame_interval());
    let mut app = App::new(Arc::new(client), renderer_config);
    let res = app.run(&mut terminal).await;

    // Restore terminal
    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("event loop failed: {:?}", err);
    }
    res
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )
}

/// Analyze `text` once and print the result card as plain text
async fn print_once(client: &HttpSentimentClient, text: &str) -> anyhow::Result<()> {
    let mut orchestrator = Orchestrator::new();
    let submission = orchestrator
        .submit(text)
        .map_err(|e| anyhow!(e.user_message()))?;
    let outcome = client.analyze(&submission.text).await;
    orchestrator.complete(submission.id, outcome);

    if let Some(message) = orchestrator.error() {
        bail!("{}", message);
    }
    if let Some(result) = orchestrator.result() {
        for line in ResultView::new(result).plain_lines() {
            println!("{}", line);
        }
    }
    Ok(())
}
