use crate::export::{ExportFormat, ExportTarget};
use clap::{Parser, Subcommand};

/// Command-line interface definition for giftlog
#[derive(Parser)]
#[command(
    name = "giftlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Keep track of people, occasions and gift ideas, with upcoming events always in view",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Compute every date view as if today were this day (YYYY-MM-DD)
    #[arg(global = true, long = "today", value_name = "YYYY-MM-DD")]
    pub today: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Manage people
    Person {
        #[command(subcommand)]
        action: PersonAction,
    },

    /// Manage events (holidays, anniversaries, special occasions)
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Manage gift ideas
    Gift {
        #[command(subcommand)]
        action: GiftAction,
    },

    /// List everyone's next birthday, soonest first
    Birthdays {
        #[arg(long = "by-month", help = "Group birthdays by month")]
        by_month: bool,
    },

    /// Summary: counts, next events, recent gift ideas, holidays
    Dashboard,

    /// Export people, events and gift ideas
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_enum,
            help = "What to export (default: all for JSON, events for CSV)"
        )]
        what: Option<ExportTarget>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import a JSON document produced by `export --format json`
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}

#[derive(Subcommand)]
pub enum PersonAction {
    /// Add a person
    Add {
        name: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long, help = "family, friend, coworker or other")]
        relationship: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        birthday: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Update a person (only the given fields; pass "" to clear one)
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        relationship: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        birthday: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a person and their gift ideas
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List people
    List {
        #[arg(long, short = 's', help = "Filter by name, email or notes")]
        search: Option<String>,
    },

    /// Show a person with their next birthday and gift ideas
    Show { id: i64 },
}

#[derive(Subcommand)]
pub enum EventAction {
    /// Add an event (recurring every year unless --once)
    Add {
        name: String,

        #[arg(long, value_name = "YYYY-MM-DD")]
        date: String,

        #[arg(long = "type", help = "holiday, anniversary or special_occasion")]
        event_type: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, help = "One-off event: does not repeat every year")]
        once: bool,
    },

    /// Update an event (only the given fields)
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,

        #[arg(long = "type")]
        event_type: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, value_name = "true|false")]
        recurring: Option<bool>,
    },

    /// Delete an event (its gift ideas are kept)
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List upcoming (default) or past events
    List {
        #[arg(long, help = "Show past events, most recent first")]
        past: bool,

        #[arg(long, short = 's', help = "Filter by name or description")]
        search: Option<String>,

        #[arg(
            long,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Upcoming window in months (default from config)"
        )]
        months: Option<u32>,

        #[arg(long, help = "Include people's birthdays")]
        birthdays: bool,
    },

    /// Show an event; accepts `birthday-<person id>` too
    Show { id: String },
}

#[derive(Subcommand)]
pub enum GiftAction {
    /// Add a gift idea for a person
    Add {
        idea: String,

        #[arg(long, value_name = "PERSON_ID")]
        person: i64,

        #[arg(long, value_name = "EVENT_ID")]
        event: Option<i64>,

        #[arg(long, help = "idea, purchased or given")]
        status: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Update a gift idea (only the given fields)
    Edit {
        id: i64,

        #[arg(long)]
        idea: Option<String>,

        #[arg(long, value_name = "PERSON_ID")]
        person: Option<i64>,

        #[arg(long, value_name = "EVENT_ID", conflicts_with = "no_event")]
        event: Option<i64>,

        #[arg(long = "no-event", help = "Detach the gift idea from its event")]
        no_event: bool,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a gift idea
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List gift ideas, newest first
    List {
        #[arg(long, short = 's', help = "Filter by idea, person or event name")]
        search: Option<String>,

        #[arg(long, value_name = "PERSON_ID")]
        person: Option<i64>,
    },
}
