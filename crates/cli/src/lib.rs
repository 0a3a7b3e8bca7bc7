//! # Laragen CLI
//!
//! Command-line interface for Laragen.
//!
//! Every subcommand follows the same path: parse the arguments into a
//! plan, render the plan into files, then hand the files to the writer.
//! Parsing failures abort before anything is written; write-time trouble
//! (an existing target, a failed write) is reported per file while the
//! rest of the batch proceeds.
//!
//! ## Commands
//!
//! - `migration` (`mig`) - Timestamped migration with schema boilerplate
//! - `controller` (`c`) - Controller class with method stubs
//! - `model` (`m`) - Eloquent model skeleton
//! - `view` (`v`) - View templates from dotted paths
//! - `asset` (`a`) - css/js starter files
//! - `resource` (`r`) - Controller, views, and model in one go
//!

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use laragen_codegen::{
    DiskStore, GeneratedFile, GenerationReport, ScaffoldContext, WriteOutcome, Writer,
    generate_assets, generate_controller, generate_migration, generate_model, generate_resource,
    generate_views,
};
use laragen_core::{GeneratorResult, PathsConfig};
use laragen_schema::{ControllerSpec, MigrationPlan, MigrationRequest};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Argument surface
// ============================================================================

/// Command-line interface for Laragen
///
/// Generates Laravel scaffolding: migrations, controllers, models, views,
/// and assets.
#[derive(Debug, Parser)]
#[command(name = "laragen")]
#[command(version, about = "Scaffolding generator for Laravel applications", long_about = None)]
pub struct Cli {
    /// Application root the generated files land in
    #[arg(long, global = true, default_value = ".")]
    pub app_dir: PathBuf,

    /// Generate plain .php views instead of .blade.php
    #[arg(long, global = true, default_value_t = false)]
    pub no_blade: bool,

    /// Show what would be written without writing it
    #[arg(long, global = true, default_value_t = false)]
    pub dry_run: bool,

    /// Print the report as JSON
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available generator commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a timestamped migration with schema boilerplate
    #[command(visible_alias = "mig")]
    Migration {
        /// Migration name, e.g. create_users_table
        name: Option<String>,

        /// Columns as field:type or field:type:modifier
        columns: Vec<String>,
    },

    /// Generate a controller class with method stubs
    #[command(visible_alias = "c")]
    Controller {
        /// Controller name; class and file names are pluralized
        name: Option<String>,

        /// Methods, optionally verb-pinned (index:post); "restful" is a flag
        methods: Vec<String>,
    },

    /// Generate an Eloquent model skeleton
    #[command(visible_alias = "m")]
    Model {
        /// Model name
        name: Option<String>,
    },

    /// Generate view templates from dotted paths (book.admin.show)
    #[command(visible_alias = "v")]
    View {
        /// Dotted view paths
        paths: Vec<String>,
    },

    /// Generate css/js starter files routed by extension
    #[command(visible_alias = "a")]
    Asset {
        /// Asset file names, e.g. style.css app.js
        files: Vec<String>,
    },

    /// Generate a controller, its views, and a model in one go
    #[command(visible_alias = "r")]
    Resource {
        /// Resource name
        name: Option<String>,

        /// Controller methods; each distinct name also gets a view
        methods: Vec<String>,
    },
}

// ============================================================================
// Execution
// ============================================================================

/// Plan every file for a parsed command line.
///
/// Asset planning may raise warnings for skipped arguments; they land in
/// the report while the surviving files are returned.
fn plan_files(
    cli: &Cli,
    ctx: &ScaffoldContext,
    report: &mut GenerationReport,
) -> GeneratorResult<Vec<GeneratedFile>> {
    match &cli.command {
        Commands::Migration { name, columns } => {
            let request = MigrationRequest::new(name.clone().unwrap_or_default(), columns.clone());
            let plan = MigrationPlan::from_request(&request)?;
            Ok(vec![generate_migration(&plan, ctx)])
        }
        Commands::Controller { name, methods } => {
            let spec = ControllerSpec::from_args(name.as_deref().unwrap_or_default(), methods)?;
            Ok(vec![generate_controller(&spec, ctx)])
        }
        Commands::Model { name } => {
            Ok(vec![generate_model(name.as_deref().unwrap_or_default(), ctx)?])
        }
        Commands::View { paths } => generate_views(paths, ctx),
        Commands::Asset { files } => {
            let batch = generate_assets(files, ctx)?;
            for warning in batch.warnings {
                report.add_warning(warning);
            }
            Ok(batch.files)
        }
        Commands::Resource { name, methods } => {
            generate_resource(name.as_deref().unwrap_or_default(), methods, ctx)
        }
    }
}

/// Run one parsed command line against the real file system.
pub fn execute(cli: &Cli) -> GeneratorResult<GenerationReport> {
    let mut paths = PathsConfig::load(&cli.app_dir)?;
    if cli.no_blade {
        paths.blade = false;
    }
    let ctx = ScaffoldContext::new(paths).with_root(&cli.app_dir);

    let mut report = GenerationReport::new();
    let files = plan_files(cli, &ctx, &mut report)?;

    tracing::debug!(files = files.len(), dry_run = cli.dry_run, "writing planned files");

    let store = DiskStore;
    let mut writer = Writer::new(&store, &cli.app_dir);
    if cli.dry_run {
        writer = writer.dry_run();
    }
    writer.write_all(&files, &mut report);

    Ok(report)
}

// ============================================================================
// Report output
// ============================================================================

fn print_report(cli: &Cli, report: &GenerationReport) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for outcome in &report.outcomes {
        match outcome {
            WriteOutcome::Written(path) => {
                println!("{} {}", "✓ Created:".green(), path.display());
            }
            WriteOutcome::Planned(path) => {
                println!("{} {}", "→ Would create:".cyan(), path.display());
            }
            WriteOutcome::SkippedExists(path) => {
                println!(
                    "{} {} {}",
                    "! Skipped:".yellow(),
                    path.display(),
                    "(already exists)".yellow()
                );
            }
            WriteOutcome::Failed { path, message } => {
                println!("{} {}: {}", "✗ Failed:".red().bold(), path.display(), message);
            }
        }
    }

    for warning in &report.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    Ok(())
}

/// Parse the process arguments, execute, and report.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(report) => {
            print_report(&cli, &report)?;
            if report.has_failures() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            Ok(ExitCode::FAILURE)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn test_parse_migration_with_columns() {
        let cli = parse(&[
            "laragen",
            "migration",
            "create_users_table",
            "id:integer",
            "email:string",
        ]);

        match cli.command {
            Commands::Migration { name, columns } => {
                assert_eq!(name.as_deref(), Some("create_users_table"));
                assert_eq!(columns, vec!["id:integer", "email:string"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert!(matches!(
            parse(&["laragen", "mig", "create_users_table"]).command,
            Commands::Migration { .. }
        ));
        assert!(matches!(
            parse(&["laragen", "c", "admin"]).command,
            Commands::Controller { .. }
        ));
        assert!(matches!(
            parse(&["laragen", "m", "book"]).command,
            Commands::Model { .. }
        ));
        assert!(matches!(
            parse(&["laragen", "v", "book.index"]).command,
            Commands::View { .. }
        ));
        assert!(matches!(
            parse(&["laragen", "a", "style.css"]).command,
            Commands::Asset { .. }
        ));
        assert!(matches!(
            parse(&["laragen", "r", "user"]).command,
            Commands::Resource { .. }
        ));
    }

    #[test]
    fn test_global_flags_parse_after_subcommand() {
        let cli = parse(&[
            "laragen",
            "model",
            "book",
            "--app-dir",
            "/tmp/app",
            "--dry-run",
            "--no-blade",
        ]);

        assert_eq!(cli.app_dir, PathBuf::from("/tmp/app"));
        assert!(cli.dry_run);
        assert!(cli.no_blade);
        assert!(!cli.json);
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["laragen"]).is_err());
    }

    fn cli_for(dir: &std::path::Path, args: &[&str]) -> Cli {
        let mut full = vec!["laragen".to_string()];
        full.extend(args.iter().map(|a| a.to_string()));
        full.push("--app-dir".to_string());
        full.push(dir.display().to_string());
        Cli::try_parse_from(full).expect("arguments should parse")
    }

    #[test]
    fn test_execute_writes_model() {
        let dir = tempfile::tempdir().unwrap();
        let report = execute(&cli_for(dir.path(), &["model", "book"])).unwrap();

        assert_eq!(report.written_count(), 1);
        let written = dir.path().join("application/models/book.php");
        let content = std::fs::read_to_string(written).unwrap();
        assert!(content.contains("class Book extends Eloquent"));
    }

    #[test]
    fn test_execute_skips_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        execute(&cli_for(dir.path(), &["model", "book"])).unwrap();
        let report = execute(&cli_for(dir.path(), &["model", "book"])).unwrap();

        assert_eq!(report.written_count(), 0);
        assert!(report.has_skips());
    }

    #[test]
    fn test_execute_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let report = execute(&cli_for(dir.path(), &["model", "book", "--dry-run"])).unwrap();

        assert_eq!(report.written_count(), 0);
        assert!(matches!(report.outcomes[0], WriteOutcome::Planned(_)));
        assert!(!dir.path().join("application/models/book.php").exists());
    }

    #[test]
    fn test_execute_missing_name_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let err = execute(&cli_for(dir.path(), &["model"])).unwrap_err();
        assert!(err.is_usage());
        assert!(!dir.path().join("application").exists());
    }

    #[test]
    fn test_execute_reads_laragen_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("laragen.toml"),
            "models_dir = \"domain/models\"\n",
        )
        .unwrap();

        execute(&cli_for(dir.path(), &["model", "book"])).unwrap();
        assert!(dir.path().join("domain/models/book.php").exists());
    }

    #[test]
    fn test_execute_no_blade_changes_view_extension() {
        let dir = tempfile::tempdir().unwrap();
        execute(&cli_for(dir.path(), &["view", "book.index", "--no-blade"])).unwrap();

        assert!(dir.path().join("application/views/book/index.php").exists());
        assert!(!dir.path().join("application/views/book/index.blade.php").exists());
    }

    #[test]
    fn test_execute_view_lands_inside_the_app_dir() {
        let dir = tempfile::tempdir().unwrap();
        execute(&cli_for(dir.path(), &["view", ".admin.show"])).unwrap();

        let target = dir.path().join("application/views/admin/show.blade.php");
        let content = std::fs::read_to_string(&target).unwrap();
        assert_eq!(
            content,
            format!(
                "This is the {} view.\n",
                dir.path().join("application/views/admin/show").display()
            )
        );
    }

    #[test]
    fn test_execute_asset_batch_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let report = execute(&cli_for(
            dir.path(),
            &["asset", "style.css", "notes.txt", "app.js"],
        ))
        .unwrap();

        assert_eq!(report.written_count(), 2);
        assert!(report.has_warnings());
        assert!(dir.path().join("public/css/style.css").exists());
        assert!(dir.path().join("public/js/app.js").exists());
        assert!(!dir.path().join("public/notes.txt").exists());
    }
}
