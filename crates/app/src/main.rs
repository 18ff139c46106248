use std::fmt;

use services::{AppServices, Clock, View};
use study_core::model::{TaskId, WeekNumber};
use tracing_subscriber::EnvFilter;

mod render;

const DEFAULT_DB_URL: &str = "sqlite://study.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDbUrl { raw: String },
    InvalidWeek { raw: String },
    InvalidTaskId { raw: String, reason: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown command: {cmd}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidWeek { raw } => {
                write!(f, "invalid week: {raw} (expected 1-16 or --today)")
            }
            ArgsError::InvalidTaskId { raw, reason } => {
                write!(f, "invalid task id {raw}: {reason}")
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  study [status]              dashboard for the current week");
    eprintln!("  study light | heavy         checklist for the current week");
    eprintln!("  study roadmap               four-month roadmap");
    eprintln!("  study toggle <task-id>      flip a task, e.g. week3-light-0");
    eprintln!("  study week <1-16>           change the current week");
    eprintln!("  study week --today          jump to the week containing today");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>           default {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STUDY_DB_URL, RUST_LOG");
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Show(View),
    Toggle(TaskId),
    Week(WeekTarget),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeekTarget {
    Number(WeekNumber),
    Today,
}

#[derive(Debug)]
struct Args {
    db_url: String,
    command: Command,
}

impl Args {
    fn parse(argv: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("STUDY_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);

        let mut positional = Vec::new();
        let mut today = false;
        let mut args = argv.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--today" => today = true,
                flag if flag.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let command = match positional.next().as_deref() {
            None | Some("status") => Command::Show(View::Dashboard),
            Some("toggle") => {
                let raw = positional
                    .next()
                    .ok_or(ArgsError::MissingValue { flag: "toggle" })?;
                let id = raw.parse::<TaskId>().map_err(|err| ArgsError::InvalidTaskId {
                    raw: raw.clone(),
                    reason: err.to_string(),
                })?;
                Command::Toggle(id)
            }
            Some("week") if today => Command::Week(WeekTarget::Today),
            Some("week") => {
                let raw = positional
                    .next()
                    .ok_or(ArgsError::MissingValue { flag: "week" })?;
                let week = raw
                    .parse::<WeekNumber>()
                    .map_err(|_| ArgsError::InvalidWeek { raw: raw.clone() })?;
                Command::Week(WeekTarget::Number(week))
            }
            Some(other) => Command::Show(
                other
                    .parse::<View>()
                    .map_err(|err| ArgsError::UnknownCommand(err.0))?,
            ),
        };

        if let Some(extra) = positional.next() {
            return Err(ArgsError::UnknownArg(extra));
        }
        if today && !matches!(command, Command::Week(_)) {
            return Err(ArgsError::UnknownArg("--today".into()));
        }

        Ok(Self { db_url, command })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if matches!(argv.first().map(String::as_str), Some("--help" | "-h" | "help")) {
        print_usage();
        return Ok(());
    }

    let parsed = Args::parse(argv).inspect_err(|_| print_usage())?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    tracing::debug!(db_url = %parsed.db_url, command = ?parsed.command, "starting");
    let services = AppServices::new_sqlite(&parsed.db_url, Clock::default_clock()).await?;
    let mut session = services.open_session().await;

    match parsed.command {
        Command::Show(view) => {
            session.select_view(view);
        }
        Command::Toggle(id) => {
            let done = session.toggle_task(&id);
            println!("{id}: {}", if done { "done" } else { "not done" });
            // Another week's checklist would not show the toggled task.
            session.select_view(if id.week() == session.week() {
                View::schedule_for(id.kind())
            } else {
                View::Dashboard
            });
        }
        Command::Week(target) => {
            let week = match target {
                WeekTarget::Number(week) => {
                    session.change_week(week);
                    week
                }
                WeekTarget::Today => session.change_week_to_today(),
            };
            println!("current week: {week}");
        }
    }

    print!("{}", render::render(&session.render()));

    // Saves are fire-and-forget; wait for them before the runtime shuts down.
    session.flush().await;
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
