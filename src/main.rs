use anyhow::Context;
use crossterm::{
    event::{Event, read},
    terminal::{
        self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
};
use log::{LevelFilter, info};
use micrn::cli::{self, CliArgs};
use micrn::config::EditorConfig;
use micrn::editor::Editor;
use micrn::key;
use micrn::ui::TuiRenderer;
use std::fs::File;

/// Parse arguments, load config and files, then run the key loop until
/// the editor asks to quit. The terminal is restored even if the loop
/// fails.
fn main() -> anyhow::Result<()> {
    let cli_args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    init_logging(&cli_args)?;

    let config = EditorConfig::load(cli_args.config.as_deref())
        .context("Failed to load configuration")?;
    let mut editor = Editor::new(config);
    editor.open_files(&cli_args.files);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let result = run(&mut editor);

    crossterm::execute!(stdout, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run(editor: &mut Editor) -> anyhow::Result<()> {
    let mut renderer = TuiRenderer::new()?;
    let (cols, rows) = terminal::size()?;
    editor.handle_resize(cols, rows);

    loop {
        renderer.draw(editor)?;

        match read()? {
            Event::Key(key_event) => {
                for key in key::translate(&key_event) {
                    if editor.handle_key(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                }
            }
            Event::Resize(cols, rows) => editor.handle_resize(cols, rows),
            _ => {}
        }
    }
}

/// Log to `--log-file` when given. The terminal is in raw mode, so there
/// is no stderr logging; without a file logging stays off.
fn init_logging(args: &CliArgs) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create log file {}", path.display()))?;
            if std::env::var_os("RUST_LOG").is_none() {
                builder.filter_level(LevelFilter::Info);
            }
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }
    builder.init();
    Ok(())
}
