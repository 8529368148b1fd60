mod telemetry;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use onboard_core::model::{Catalog, StepId};
use ui::{App, ChecklistTheme, ThemePreset, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTheme { raw: String },
    InvalidStepsPath { raw: String },
    UnsupportedFlag { flag: &'static str, command: Command },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTheme { raw } => write!(f, "invalid --theme value: {raw}"),
            ArgsError::InvalidStepsPath { raw } => write!(f, "invalid --steps value: {raw:?}"),
            ArgsError::UnsupportedFlag { flag, command } => {
                write!(f, "{flag} is not accepted by `{}`", command.as_str())
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    catalog: Catalog,
    theme: ChecklistTheme,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    fn theme(&self) -> ChecklistTheme {
        self.theme
    }

    fn on_step_action(&self, id: StepId) {
        // No business logic yet: the action only leaves a trace.
        tracing::info!(step_id = %id, "step action triggered");
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--theme <violet|emerald>] [--steps <catalog.toml>]");
    eprintln!("  cargo run -p app -- check [--steps <catalog.toml>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --theme violet");
    eprintln!("  --steps (built-in onboarding catalog)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ONBOARD_THEME, ONBOARD_STEPS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::Check => "check",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Args {
    theme: ThemePreset,
    steps_path: Option<PathBuf>,
}

impl Args {
    /// `check` renders nothing, so it ignores `ONBOARD_THEME`.
    fn from_env(cmd: Command) -> Result<Self, ArgsError> {
        let theme = theme_for(cmd, std::env::var("ONBOARD_THEME").ok())?;
        let steps_path = std::env::var("ONBOARD_STEPS")
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self { theme, steps_path })
    }

    fn apply_flags(
        mut self,
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--theme" if cmd == Command::Check => {
                    return Err(ArgsError::UnsupportedFlag {
                        flag: "--theme",
                        command: cmd,
                    });
                }
                "--theme" => {
                    let value = require_value(args, "--theme")?;
                    self.theme = parse_theme(value)?;
                }
                "--steps" => {
                    let value = require_value(args, "--steps")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidStepsPath { raw: value });
                    }
                    self.steps_path = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(self)
    }
}

fn theme_for(cmd: Command, env_value: Option<String>) -> Result<ThemePreset, ArgsError> {
    match (cmd, env_value) {
        (Command::Ui, Some(raw)) => parse_theme(raw),
        _ => Ok(ThemePreset::default()),
    }
}

fn parse_theme(raw: String) -> Result<ThemePreset, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidTheme { raw })
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(Catalog::default_onboarding());
    };
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("cannot read catalog {}: {err}", path.display()))?;
    Ok(Catalog::from_toml_str(&raw)?)
}

fn report_conventions(catalog: &Catalog) {
    let active = catalog.active_count();
    if active > 1 {
        tracing::warn!(active, "more than one step is active; each gets its own action");
    }
    if !catalog.is_conventionally_ordered() {
        tracing::warn!("steps are not ordered completed, then active, then pending");
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::from_env(cmd)
        .and_then(|args| args.apply_flags(cmd, &mut iter))
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    let catalog = load_catalog(parsed.steps_path.as_ref())?;
    let progress = catalog.progress();
    tracing::info!(
        theme = %parsed.theme,
        source = %parsed
            .steps_path
            .as_ref()
            .map_or_else(|| "built-in".to_string(), |p| p.display().to_string()),
        steps = progress.total,
        completed = progress.completed,
        percentage = progress.percentage,
        "catalog loaded"
    );
    report_conventions(&catalog);

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                catalog,
                theme: parsed.theme.theme(),
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            // Explicitly disable it so the app doesn't behave like a modal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Web3 Payment Platform")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            println!(
                "{} steps, {} completed ({}% completed)",
                progress.total, progress.completed, progress.percentage
            );
            Ok(())
        }
    }
}

fn main() {
    telemetry::init_logging();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
