use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use valence_survey::config::Config;
use valence_survey::tui::{self, state::App};
use valence_survey::{words, ResultExporter, Session};

const DEFAULT_CONFIG: &str = "config.toml";

/// `--config <path>`, otherwise config.toml in the working directory.
fn config_path() -> PathBuf {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG))
}

fn main() -> Result<()> {
    let config = Config::load_or_default(&config_path())?;

    // Log to a file; stdout belongs to the alternate screen.
    let log_file = std::fs::File::create(&config.logging.file).with_context(|| {
        format!("Failed to create log file: {}", config.logging.file.display())
    })?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .init();

    let word_list = match &config.survey.word_file {
        Some(path) => words::load_word_file(path)?,
        None => words::default_words(),
    };
    tracing::info!(
        words = word_list.len(),
        source = ?config.survey.word_file,
        "word list loaded"
    );

    let output = config.output.path();
    let mut app = App::new(
        config.survey.title.clone(),
        Session::new(word_list),
        ResultExporter::new(&output),
    );

    tui::run_tui(&mut app)?;

    let (answered, total) = app.session.progress();
    println!();
    if app.is_saved() {
        println!("  Survey complete: {} judgments saved to {}", answered, output.display());
    } else {
        println!(
            "  Exited without saving ({} of {} words answered).",
            answered, total
        );
    }
    println!();

    Ok(())
}
