use crate::export::ExportFormat;
use crate::models::ledger::LedgerKind;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rbudget
/// CLI dashboard over the mission and consultancy budget workbook
#[derive(Parser)]
#[command(
    name = "rbudget",
    version = env!("CARGO_PKG_VERSION"),
    about = "Budget dashboard: missions, consultancies and DPP reconciliation over a workbook",
    long_about = None
)]
pub struct Cli {
    /// Override workbook path
    #[arg(global = true, long = "workbook")]
    pub workbook: Option<String>,

    /// Override credentials file path
    #[arg(global = true, long = "credentials")]
    pub credentials: Option<String>,

    /// Override audit database path (useful for tests)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Username to log in with
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Password to log in with
    #[arg(
        global = true,
        long = "password",
        env = "RBUDGET_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, credentials file, template workbook and audit log
    Init,

    /// Inspect the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate configuration, credentials and workbook")]
        check: bool,
    },

    /// Register a new user
    Register(RegisterArgs),

    /// List the dashboard sections visible to the logged-in user
    Sections,

    /// Show the calculated view of a sheet
    Show {
        /// Sheet name (e.g. VPD_Misiones)
        sheet: String,
    },

    /// Show a reconciliation ledger
    Ledger {
        #[arg(value_enum, default_value = "missions")]
        kind: LedgerKind,
    },

    /// Edit one cell of a sheet
    Set {
        /// Sheet name
        sheet: String,

        #[arg(long, help = "Row index (0-based); the row count appends a new row")]
        row: usize,

        #[arg(long, help = "Column header")]
        column: String,

        #[arg(long, help = "New value (numbers are stored as numbers)")]
        value: String,
    },

    /// Replace a sheet with the first sheet of an uploaded workbook
    Replace {
        /// Sheet name
        sheet: String,

        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Download a sheet or a ledger
    Export {
        #[arg(long, conflicts_with = "ledger", required_unless_present = "ledger")]
        sheet: Option<String>,

        #[arg(long, value_enum)]
        ledger: Option<LedgerKind>,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the workbook
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Args)]
pub struct RegisterArgs {
    /// Unique username
    pub username: String,

    #[arg(long = "first-name", default_value = "")]
    pub first_name: String,

    #[arg(long = "last-name", default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long = "new-password", help = "Password of the new user")]
    pub new_password: String,

    #[arg(long, default_value = "viewer", help = "admin, editor or viewer")]
    pub role: String,

    #[arg(long, help = "Organizational area: VPD, VPO, VPF, VPE or PRE")]
    pub area: String,
}
