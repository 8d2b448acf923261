// Rust guideline compliant 2026-10-18

//! Approval Queue CLI Application
//!
//! Command-line interface for reviewing pending facility reservations.

use anyhow::Result;
use approvals_app::{AppError, ErrorEnvelope, WorkspaceContext};
use approvals_cli::commands::{self, decide::DecideOptions};
use approvals_cli::{create_formatter, logging, should_use_color, OutputFormatter};
use approvals_core::{ApprovalAction, Config, OutputFormat as ConfigOutputFormat};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "aq",
    version,
    about = "Approval Queue: review pending facility reservations",
    long_about = "Lists facility-reservation requests awaiting approval, highest priority and oldest first, and records approve / reject / request-changes decisions.",
    after_help = "Examples:\n  aq init\n  aq list --search acme --priority high\n  aq show res-0042\n  aq approve res-0042 --reviewer registrar\n  aq request-changes res-0042 --note \"Please attach the program flow\"\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Directory containing `.approvals` (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs as JSON to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Args)]
struct DecisionArgs {
    /// Reservation ID (full or unique prefix)
    id: String,

    /// Reviewer recorded with the decision
    #[arg(long)]
    reviewer: Option<String>,

    /// Note for the organizer
    #[arg(long)]
    note: Option<String>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize an approval queue workspace
    Init,

    /// List pending reservations in review order
    List {
        /// Search event titles and organizations (case-insensitive)
        #[arg(long, short)]
        search: Option<String>,

        /// Priority filter: high, medium, normal, or all
        #[arg(long, short)]
        priority: Option<String>,

        /// Maximum number of items to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show details of a pending reservation
    Show {
        /// Reservation ID (full or unique prefix)
        id: String,
    },

    /// Approve a reservation
    Approve(DecisionArgs),

    /// Reject a reservation
    Reject(DecisionArgs),

    /// Send a reservation back to the organizer for changes
    RequestChanges(DecisionArgs),

    /// List recorded decisions
    Decisions {
        /// Only show decisions for this reservation ID
        #[arg(long)]
        id: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && should_use_color();
    let mut json = cli.json || matches!(cli.format, Some(OutputFormat::Json));

    let _guard = match logging::init_tracing(&cli.log_level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            report_error(&err, json, use_color);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(cli, use_color, &mut json) {
        tracing::debug!(error = %err, "command failed");
        report_error(&err, json, use_color);
        std::process::exit(1);
    }
}

/// Runs the command, updating `json` once the workspace config has been
/// consulted so that errors are reported in the same format as results.
fn run(cli: Cli, use_color: bool, json: &mut bool) -> Result<()> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    if matches!(cli.command, Commands::Init) {
        return commands::init::execute(&root, use_color);
    }

    let session = Session::open(&root, cli.format, cli.json, use_color)?;
    *json = session.json;
    session.execute(cli.command, use_color)
}

/// Workspace state shared by every command except `init`.
struct Session {
    context: WorkspaceContext,
    config: Config,
    formatter: Box<dyn OutputFormatter>,
    json: bool,
}

impl Session {
    fn open(
        root: &Path,
        format: Option<OutputFormat>,
        json: bool,
        use_color: bool,
    ) -> Result<Self> {
        let context = WorkspaceContext::discover(Some(root))?;
        let config = context.load_config()?;

        let format = match format {
            Some(OutputFormat::Json) => "json",
            Some(OutputFormat::Table) => "table",
            Some(OutputFormat::Plain) => "plain",
            None if json => "json",
            None => match config.output_format {
                ConfigOutputFormat::Json => "json",
                ConfigOutputFormat::Table => "table",
                ConfigOutputFormat::Plain => "plain",
            },
        };

        Ok(Self {
            formatter: create_formatter(format, use_color, config.show_legend),
            json: format == "json",
            context,
            config,
        })
    }

    fn execute(&self, command: Commands, use_color: bool) -> Result<()> {
        let formatter = self.formatter.as_ref();

        match command {
            Commands::Init => commands::init::execute(self.context.root(), use_color),
            Commands::List {
                search,
                priority,
                limit,
            } => commands::list::execute(
                &self.context,
                &self.config,
                search,
                priority,
                limit,
                formatter,
            ),
            Commands::Show { id } => commands::show::execute(&self.context, &id, formatter),
            Commands::Approve(args) => self.decide(ApprovalAction::Approve, args, use_color),
            Commands::Reject(args) => self.decide(ApprovalAction::Reject, args, use_color),
            Commands::RequestChanges(args) => {
                self.decide(ApprovalAction::RequestChanges, args, use_color)
            }
            Commands::Decisions { id } => commands::decisions::execute(&self.context, id, formatter),
        }
    }

    fn decide(&self, action: ApprovalAction, args: DecisionArgs, use_color: bool) -> Result<()> {
        let options = DecideOptions {
            action,
            id: args.id,
            reviewer: args.reviewer,
            note: args.note,
        };
        commands::decide::execute(
            &self.context,
            &self.config,
            options,
            self.formatter.as_ref(),
            !self.json,
            use_color,
        )
    }
}

fn report_error(err: &anyhow::Error, json: bool, use_color: bool) {
    if json {
        let envelope = match err.downcast_ref::<AppError>() {
            Some(app) => ErrorEnvelope::from_error(app),
            None => ErrorEnvelope::unknown(err.to_string()),
        };
        match serde_json::to_string_pretty(&envelope) {
            Ok(body) => println!("{}", body),
            Err(_) => eprintln!("Error: {}", err),
        }
    } else {
        eprintln!("{}", create_formatter("table", use_color, false).format_error(&err.to_string()));
    }
}
