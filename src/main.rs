use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use jex::config::{self, Config};
use jex::input::InputReader;
use jex::query::{self, PathIndexer};
use jex::{App, Document};

/// Interactive JSON path explorer
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive JSON path explorer: fuzzy-find a path, preview its value"
)]
struct Args {
    /// Input JSON file (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Resolve PATH and print the result without starting the UI
    #[arg(short, long, value_name = "PATH")]
    query: Option<String>,

    /// Print every indexed path, one per line, without starting the UI
    #[arg(short, long, conflicts_with = "query")]
    list: bool,

    /// Include `name.#` array length paths in the index
    #[arg(long)]
    counts: bool,

    /// Include `name[N]` element paths in the index
    #[arg(long)]
    indices: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/jex-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/jex-debug.log")
        {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    use std::time::SystemTime;
                    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();
        }

        log::debug!("=== JEX DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let config_result = config::load_config();
    let args = Args::parse();

    let mut config = config_result.config;
    apply_cli_overrides(&mut config, &args);

    let document = InputReader::read_json(args.input.as_deref())?;

    if let Some(path) = &args.query {
        println!("{}", query::resolve(path, &document));
        return Ok(());
    }

    if args.list {
        print_index(&document, &config);
        return Ok(());
    }

    let app = App::new(document, &config).with_warning(config_result.warning);

    let terminal = init_terminal()?;
    let result = run(terminal, app);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    if let Some(output) = app.final_output() {
        println!("{}", output);
    }

    #[cfg(debug_assertions)]
    log::debug!("=== JEX DEBUG SESSION ENDED ===");

    Ok(())
}

/// Flags only ever switch index features on
fn apply_cli_overrides(config: &mut Config, args: &Args) {
    config.index.array_counts |= args.counts;
    config.index.array_indices |= args.indices;
}

fn print_index(document: &Document, config: &Config) {
    let paths = PathIndexer::new(config.index.to_options()).build(document.root());
    for path in paths {
        println!("{}", path);
    }
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
