//! CLI entry point for fstree

use std::collections::HashSet;
use std::io::{self, IsTerminal};
use std::path::{Component, Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use fstree::output::DEFAULT_FORMAT;
use fstree::{
    ExcludeFilter, JsonReport, OutputConfig, OutputFormat, Template, TreeBuilder, TreeFormatter,
    scan, write_json,
};
use termcolor::{ColorChoice, StandardStream};
use tracing::{debug, info};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fstree")]
#[command(about = "Show a directory tree with the size of every file and directory")]
#[command(version)]
struct Args {
    /// Paths to display
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Space-separated names to leave out, matched against whole entry
    /// names as regular expressions (can be used multiple times)
    #[arg(short = 'e', long = "exclude", value_name = "PATTERNS")]
    exclude: Vec<String>,

    /// Line template; `type`, `name` and `size` are replaced per entry and
    /// `\t` becomes a tab
    #[arg(short = 'f', long = "format", value_name = "TEMPLATE", default_value = DEFAULT_FORMAT)]
    format: String,

    /// Output in JSON format: one array holding an object per path
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("fstree={level}").into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();
}

/// Collapse `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Turn a command-line path into the path to walk.
///
/// Absolute paths are used as given. `~` and `~/...` expand to the home
/// directory. Anything else is joined to `cwd` and normalized.
fn resolve_target(arg: &Path, cwd: &Path, home: Option<&Path>) -> PathBuf {
    if arg.is_absolute() {
        return arg.to_path_buf();
    }
    if let Some(home) = home {
        if arg == Path::new("~") {
            return home.to_path_buf();
        }
        if let Ok(rest) = arg.strip_prefix("~") {
            return home.join(rest);
        }
    }
    if arg.to_string_lossy().starts_with('~') {
        return arg.to_path_buf();
    }
    normalize(&cwd.join(arg))
}

/// Resolve every distinct argument, keeping first-occurrence order.
fn resolve_targets(args: &[PathBuf], cwd: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    args.iter()
        .filter(|arg| seen.insert(*arg))
        .map(|arg| resolve_target(arg, cwd, home))
        .collect()
}

/// Build, aggregate and write every target in turn. A target that cannot be
/// read still produces its (single-line) report; only output failures stop
/// the run. JSON reports are collected and written as one array at the end.
fn run(targets: &[PathBuf], builder: &TreeBuilder, config: &OutputConfig) -> io::Result<()> {
    let choice = if config.use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    let formatter = TreeFormatter::new(config.template.clone());
    let mut json_reports = Vec::new();

    for target in targets {
        let tree = scan(builder, target);
        debug!(
            target = %target.display(),
            nodes = tree.node_count(),
            bytes = tree.total_size().unwrap_or(0),
            "scanned"
        );
        for diagnostic in tree.diagnostics() {
            eprintln!("fstree: {}", diagnostic);
        }

        match config.format {
            OutputFormat::Text => formatter.report(target, &tree).write(&mut stdout)?,
            OutputFormat::Json => json_reports.push(JsonReport::new(target, &tree)),
        }
    }

    if config.format == OutputFormat::Json {
        write_json(&mut stdout, &json_reports)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    info!(
        platform = std::env::consts::OS,
        cwd = %cwd.display(),
        "starting"
    );
    debug!(?args, "parsed arguments");

    let filter = match ExcludeFilter::from_tokens(&args.exclude) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("fstree: {}", e);
            return ExitCode::from(2);
        }
    };

    let home = dirs::home_dir();
    let targets = resolve_targets(&args.paths, &cwd, home.as_deref());

    let config = OutputConfig {
        use_color: !args.json && should_use_color(args.color),
        format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
        template: Template::parse(&args.format),
    };

    match run(&targets, &TreeBuilder::new(filter), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fstree: error writing output: {}", e);
            ExitCode::FAILURE
        }
    }
}
