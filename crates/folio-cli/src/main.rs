// Rust guideline compliant 2026-10-14

//! Folio CLI Application
//!
//! Command-line interface for managing and rendering a personal portfolio.

use clap::Parser;
use folio_app::{AppError, ErrorEnvelope, SiteContext};
use folio_cli::commands;
use folio_cli::logging::init_tracing;
use folio_cli::terminal::disable_color;
use folio_cli::{create_formatter, should_use_color, OutputFormatter};
use folio_core::Section;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Folio: a file-backed personal portfolio",
    long_about = "Folio stores portfolio sections (experience, education, organizations, projects, certificates, contacts) as JSONL collections with uploaded images beside them, and renders them as a single Markdown page.",
    after_help = "Examples:\n  folio init --owner \"Jo Doe\"\n  folio login --email jo@example.com\n  folio add experience --set company=Acme --set position=Engineer --set start_date=2021-03 --set \"skills=Rust, SQL\"\n  folio list experience\n  folio period 2019-03 Present\n  folio tokens encode \"Rust\" \"Hello, World\"\n  folio render --output portfolio.md\n"
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

    /// Site root (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Folio site
    Init {
        /// Portfolio owner name
        #[arg(long)]
        owner: Option<String>,

        /// Site title
        #[arg(long)]
        title: Option<String>,
    },

    /// Print the SHA-256 digest of a password for the config file
    Passwd {
        /// Password to hash
        password: String,
    },

    /// Sign in as the site admin
    Login {
        /// Admin email
        #[arg(long)]
        email: String,

        /// Admin password (or set FOLIO_PASSWORD)
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign out
    Logout,

    /// Show the current admin session
    Whoami,

    /// Add a record to a section
    Add {
        /// Section (experience, education, organizations, projects, certificates, contacts)
        section: Section,

        /// Field assignment; list fields take comma-separated values with "\," for literal commas
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Image to upload and attach
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Update fields of a record
    Update {
        /// Section of the record
        section: Section,

        /// Record ID (full or partial)
        id: String,

        /// Field assignment; an empty value clears optional fields
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Replacement image
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Delete a record and its image
    Delete {
        /// Section of the record
        section: Section,

        /// Record ID (full or partial)
        id: String,
    },

    /// List the records of a section
    List {
        /// Section to list
        section: Section,
    },

    /// Show a record
    Show {
        /// Section of the record
        section: Section,

        /// Record ID (full or partial)
        id: String,
    },

    /// Render the portfolio as Markdown
    Render {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the period between two dates
    Period {
        /// Start date
        start: String,

        /// End date, "Present" or omitted for now
        end: Option<String>,

        /// Round to the nearest half year
        #[arg(long)]
        short: bool,
    },

    /// Encode or decode escaped comma lists
    Tokens {
        #[command(subcommand)]
        action: TokensAction,
    },

    /// Show record counts, session and last commit
    Status,
}

#[derive(Debug, clap::Subcommand)]
enum TokensAction {
    /// Join items into one escaped string
    Encode {
        /// Items to join
        items: Vec<String>,
    },

    /// Split an escaped string into items
    Decode {
        /// Escaped text
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if cli.no_color {
        disable_color();
    }

    let format = resolve_format(&cli);
    let formatter = create_formatter(format, should_use_color());

    if let Err(err) = run(cli, format == "json", formatter.as_ref()) {
        report_error(&err, format == "json", formatter.as_ref());
        std::process::exit(1);
    }
}

fn resolve_format(cli: &Cli) -> &'static str {
    match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None if cli.json => "json",
        None => {
            let configured = SiteContext::discover(cli.root.as_deref())
                .and_then(|site| site.load_config())
                .map(|config| config.output_format)
                .unwrap_or_default();
            match configured {
                folio_core::OutputFormat::Json => "json",
                folio_core::OutputFormat::Table => "table",
                folio_core::OutputFormat::Plain => "plain",
            }
        }
    }
}

fn report_error(err: &anyhow::Error, json: bool, formatter: &dyn OutputFormatter) {
    if json {
        if let Some(app_error) = err.downcast_ref::<AppError>() {
            let envelope = ErrorEnvelope::from_error(app_error);
            if let Ok(text) = serde_json::to_string(&envelope) {
                eprintln!("{}", text);
                return;
            }
        }
    }
    eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
}

fn run(cli: Cli, json: bool, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    let root = cli.root.as_deref();

    match cli.command {
        Some(Commands::Init { owner, title }) => {
            commands::init::execute(root, owner, title)?;
        }
        Some(Commands::Passwd { password }) => {
            commands::auth::passwd(&password);
        }
        Some(Commands::Login { email, password }) => {
            commands::auth::login(root, &email, password, json)?;
        }
        Some(Commands::Logout) => {
            commands::auth::logout(root, json)?;
        }
        Some(Commands::Whoami) => {
            commands::auth::whoami(root, json)?;
        }
        Some(Commands::Add {
            section,
            set,
            image,
        }) => {
            commands::content::add(root, section, set, image.as_deref(), formatter, json)?;
        }
        Some(Commands::Update {
            section,
            id,
            set,
            image,
        }) => {
            commands::content::update(root, section, &id, set, image.as_deref(), formatter, json)?;
        }
        Some(Commands::Delete { section, id }) => {
            commands::content::delete(root, section, &id, json)?;
        }
        Some(Commands::List { section }) => {
            commands::content::list(root, section, formatter)?;
        }
        Some(Commands::Show { section, id }) => {
            commands::content::show(root, section, &id, formatter)?;
        }
        Some(Commands::Render { output }) => {
            commands::render::execute(root, output.as_deref())?;
        }
        Some(Commands::Period { start, end, short }) => {
            commands::period::execute(&start, end.as_deref(), short)?;
        }
        Some(Commands::Tokens { action }) => match action {
            TokensAction::Encode { items } => commands::tokens::encode(&items),
            TokensAction::Decode { text } => commands::tokens::decode(&text, json)?,
        },
        Some(Commands::Status) => {
            commands::status::execute(root, json)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
