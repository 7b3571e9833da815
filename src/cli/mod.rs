use clap::{Args, Parser, Subcommand, ValueEnum};

// ══════════════════════════════════════════════════════════════════════════════
// GLOBAL OPTIONS
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Parser)]
#[command(name = "note-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Minimal GraphQL API over in-memory notes, users and comments")]
#[command(long_about = r#"
notegraph serves three in-memory collections (users, notes, comments)
behind a single GraphQL endpoint. Fixtures are loaded at startup; only
the notes collection grows, via the createNote mutation.

EXAMPLES:
  # Start the HTTP gateway on the default port
  note-cli serve

  # Run a query against the fixture store without a server
  note-cli query '{ notes { name text } }'

  # Print the schema SDL
  note-cli schema
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Log level
    #[arg(short, long, global = true)]
    #[arg(value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

// ══════════════════════════════════════════════════════════════════════════════
// VALUE ENUMS
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Elvish,
    PowerShell,
}

// ══════════════════════════════════════════════════════════════════════════════
// COMMANDS
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP gateway
    #[command(visible_alias = "srv")]
    Serve {
        /// Host to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Execute a GraphQL document against the in-process fixture store
    #[command(visible_alias = "q")]
    Query {
        /// The document to execute (@file reads it from a file)
        query: String,

        /// Variables as a JSON object
        #[arg(short, long)]
        variables: Option<String>,

        /// Pretty print the response
        #[arg(long)]
        pretty: bool,
    },

    /// Print the schema SDL
    Schema {
        /// Output file (- for stdout)
        #[arg(default_value = "-")]
        output: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
