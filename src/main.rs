//! Entry point for the locale store command-line tool.

use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use anyhow::Context;
use clap::{
    Parser,
    Subcommand,
};
use locale_store::config::LocaleSettings;
use locale_store::loader::FileLocaleSource;
use locale_store::store::TranslationStore;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "locale-store", version, about = "Inspect and query localized page strings")]
struct Cli {
    /// Command to run
    #[command(subcommand)]
    command: Command,

    /// Project root holding `.locale-store.json`.
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// List the loaded languages.
    Languages,
    /// Print every string of a page.
    Page {
        /// Page identifier.
        page: String,
        /// Language to read; defaults to the active language.
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Translate text written in the master language.
    Translate {
        /// Master-language text.
        text: String,
        /// Target language; defaults to the active language.
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Report entries of the master language missing from other languages.
    Check,
}

/// Loads the store and runs the selected command.
fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file.as_deref())?;

    let store = load_store(&cli.root)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Command::Languages => {
            for language in store.languages() {
                writeln!(out, "{language}")?;
            }
        }
        Command::Page { page, lang } => {
            let language = lang.as_deref().unwrap_or_else(|| store.active_language());
            let strings = store.get_strings_for_page(&page, language)?;
            for (key, text) in strings {
                writeln!(out, "{key} = {text}")?;
            }
        }
        Command::Translate { text, lang } => {
            let language = lang.as_deref().unwrap_or_else(|| store.active_language());
            writeln!(out, "{}", store.translate_to(&text, language))?;
        }
        Command::Check => {
            let missing = store.check_parity();
            for entry in &missing {
                writeln!(out, "{entry}")?;
            }
            if !missing.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Installs the tracing subscriber; `RUST_LOG` overrides the `info` default.
///
/// The returned guard flushes the log file on drop.
fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(path) = log_file else {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let dir = path.parent().filter(|dir| !dir.as_os_str().is_empty()).unwrap_or(Path::new("."));

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false).init();

    Ok(Some(guard))
}

/// Reads the settings under `root` and loads every configured language.
fn load_store(root: &Path) -> anyhow::Result<TranslationStore> {
    let settings = LocaleSettings::load(root)?;

    let source = FileLocaleSource::from_settings(&settings, root);
    let languages = match &settings.languages {
        Some(languages) => languages.clone(),
        None => source.discover_languages()?,
    };
    tracing::info!(dir = %source.dir().display(), ?languages, "Loading locales");

    let mut store = TranslationStore::new(&settings.master_language, settings.active_language());
    store
        .load(&source, &languages)
        .with_context(|| format!("Failed to load locales from {}", source.dir().display()))?;

    Ok(store)
}
