use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::Level;
use services::{ApiConfig, HttpQuizApi, QuizApi, QuizService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag });
    }
    Ok(value)
}

struct DesktopApp {
    quiz_service: Arc<QuizService>,
    default_level: Level,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn default_level(&self) -> Level {
        self.default_level.clone()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    server: Option<String>,
    certificates_dir: PathBuf,
    level: Level,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--server <url>] [--certificates-dir <path>] [--level <level>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --server {}", services::DEFAULT_SERVER_URL);
    eprintln!("  --certificates-dir <downloads dir>");
    eprintln!("  --level {}", Level::default());
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_SERVER_URL, QUIZ_CERT_DIR, QUIZ_LEVEL, QUIZ_LOG");
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn default_certificates_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(std::env::temp_dir)
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut server = None;
        let mut certificates_dir = env_value("QUIZ_CERT_DIR").map(PathBuf::from);
        let mut level = env_value("QUIZ_LEVEL").map(Level::new);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--server" => server = Some(require_value(args, "--server")?),
                "--certificates-dir" => {
                    certificates_dir = Some(PathBuf::from(require_value(args, "--certificates-dir")?));
                }
                "--level" => level = Some(Level::new(require_value(args, "--level")?)),
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            server,
            certificates_dir: certificates_dir.unwrap_or_else(default_certificates_dir),
            level: level.unwrap_or_default(),
        }))
    }
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("QUIZ_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| format!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    // Flag wins over QUIZ_SERVER_URL.
    let config = match parsed.server.as_deref() {
        Some(raw) => ApiConfig::new(raw)?,
        None => ApiConfig::from_env()?,
    };
    tracing::info!(
        server = %config.base_url(),
        certificates_dir = %parsed.certificates_dir.display(),
        level = %parsed.level,
        "starting dog quiz"
    );

    let api: Arc<dyn QuizApi> = Arc::new(HttpQuizApi::new(config));
    let quiz_service =
        Arc::new(QuizService::new(api).with_certificate_dir(parsed.certificates_dir));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_service,
        default_level: parsed.level,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Dog Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
