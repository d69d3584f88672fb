//! a11yguard: accessibility audit CLI

use a11yguard::audit::engine::FileAuditResult;
use a11yguard::audit::{AuditEngine, AuditOptions};
use a11yguard::config::{build_ignore_set, is_ignored, load_config, Config, CONFIG_FILENAME};
use a11yguard::fixer::{self, FixOptions};
use a11yguard::reporter::{json, markdown, ConsoleReporter};
use a11yguard::{extract, FixReport};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// File extensions the auditor knows how to normalize
const AUDITABLE_EXTENSIONS: &[&str] = &["html", "htm", "jsx", "tsx", "vue", "svelte"];

/// Extensions the fixer can rewrite in place (dialect extraction is lossy,
/// so only real HTML is fixable)
const FIXABLE_EXTENSIONS: &[&str] = &["html", "htm"];

/// a11yguard: accessibility auditor and auto-fixer for HTML
#[derive(Parser, Debug)]
#[command(name = "a11yguard")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File or directory to audit (omit when using a subcommand)
    #[arg(required = true)]
    path: Option<PathBuf>,

    /// WCAG level to audit at: A, AA, or AAA (default: AA)
    #[arg(long, short)]
    level: Option<String>,

    /// Output results as JSON
    #[arg(long, short)]
    json: bool,

    /// Output results as Markdown
    #[arg(long, short)]
    markdown: bool,

    /// Quiet mode (one summary line per file)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (include remediation suggestions)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .a11yguardrc.json in the target
    /// directory and its parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply automatic fixes to HTML files
    Fix {
        /// File or directory to fix
        path: PathBuf,

        /// Write fixed markup back to the files
        #[arg(long)]
        write: bool,

        /// Print a line diff of the changes
        #[arg(long)]
        patch: bool,

        /// Language code for the document-language fix (default: en)
        #[arg(long)]
        lang: Option<String>,

        /// Output the fix report as JSON
        #[arg(long, short)]
        json: bool,

        /// Path to config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create .a11yguardrc.json with sensible defaults
    Init {
        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(command) = args.command {
        return match command {
            Commands::Fix {
                path,
                write,
                patch,
                lang,
                json,
                config,
            } => run_fix(&path, write, patch, lang.as_deref(), json, config.as_deref()),
            Commands::Init { dir } => run_init(dir.as_deref()),
        };
    }

    let path = args.path.clone().expect("path required without subcommand");
    run_audit(&args, &path)
}

fn run_audit(args: &Args, path: &Path) -> Result<ExitCode> {
    let work_dir = work_dir_for(path);
    let config = load_config(work_dir, args.config.as_deref())?;
    let level = config.resolve_level(args.level.as_deref());
    let options = AuditOptions { level };

    let files = collect_files(path, &config, AUDITABLE_EXTENSIONS)?;
    if files.is_empty() {
        eprintln!("{}: No auditable files found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let engine = AuditEngine::new();
    let results: Vec<Result<FileAuditResult>> = files
        .par_iter()
        .map(|file| {
            let content = fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let name = file.to_string_lossy().to_string();
            let markup = extract::auditable_markup(&content, &name);
            let result = engine.audit_with_config(&markup, &options, Some(&config));
            Ok(FileAuditResult { file: name, result })
        })
        .collect();

    let mut audited = Vec::new();
    for result in results {
        match result {
            Ok(r) => audited.push(r),
            Err(e) => eprintln!("{}: {:#}", "Warning".yellow(), e),
        }
    }
    if audited.is_empty() {
        anyhow::bail!("No files could be audited");
    }

    if args.json {
        println!("{}", json::audit_reports(&audited)?);
    } else if args.markdown {
        for file_result in &audited {
            println!("{}", markdown::audit_report(&file_result.result));
        }
    } else {
        let reporter = build_reporter(args.quiet, args.verbose);
        for file_result in &audited {
            if args.quiet {
                reporter.report_quiet(&file_result.result, &file_result.file);
            } else {
                reporter.report_audit(&file_result.result, Some(file_result.file.as_str()));
            }
        }
    }

    let total_errors: usize = audited.iter().map(|r| r.result.summary.errors).sum();
    if total_errors > 0 {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_fix(
    path: &Path,
    write: bool,
    patch: bool,
    cli_lang: Option<&str>,
    as_json: bool,
    config_path: Option<&Path>,
) -> Result<ExitCode> {
    let config = load_config(work_dir_for(path), config_path)?;
    let fix_options = FixOptions {
        lang: config.resolve_lang(cli_lang),
    };

    let files = collect_files(path, &config, FIXABLE_EXTENSIONS)?;
    if files.is_empty() {
        eprintln!("{}: No fixable HTML files found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    let reporter = ConsoleReporter::new().verbose();
    for file in &files {
        let content = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let report: FixReport = fixer::fix_all(&content, &fix_options);

        let name = file.to_string_lossy();
        if as_json {
            println!("{}", json::fix_report(&report)?);
        } else {
            reporter.report_fixes(&report, Some(name.as_ref()));
        }
        if patch && !report.changes.is_empty() {
            println!("{}", fixer::generate_patch(&content, &report.fixed));
        }
        if write && !report.changes.is_empty() {
            fs::write(file, &report.fixed)
                .with_context(|| format!("Failed to write {}", file.display()))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_init(dir: Option<&Path>) -> Result<ExitCode> {
    let dir = dir.unwrap_or(Path::new("."));
    let path = dir.join(CONFIG_FILENAME);
    if path.exists() {
        anyhow::bail!("Config already exists: {}", path.display());
    }
    let pretty: serde_json::Value =
        serde_json::from_str(&a11yguard::config::default_config_json())?;
    fs::write(&path, serde_json::to_string_pretty(&pretty)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn work_dir_for(path: &Path) -> &Path {
    if path.is_file() {
        path.parent().unwrap_or(Path::new("."))
    } else {
        path
    }
}

fn build_reporter(quiet: bool, verbose: bool) -> ConsoleReporter {
    let reporter = ConsoleReporter::new();
    if quiet {
        reporter.without_colors()
    } else if verbose {
        reporter.verbose()
    } else {
        reporter
    }
}

/// Collect matching files under `path`, honoring config ignore globs.
fn collect_files(path: &Path, config: &Config, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.exists() {
        anyhow::bail!("Path not found: {}", path.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let file = entry.path();
        let ext = file
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        if !extensions.contains(&ext.as_str()) {
            continue;
        }
        if let Some(ref set) = ignore_set {
            if is_ignored(file, set) {
                continue;
            }
        }
        files.push(file.to_path_buf());
    }
    files.sort();
    Ok(files)
}
