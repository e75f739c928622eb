use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lumore-admin", bin_name = "lumore-admin", version)]
#[command(
    about = "Build user filters, inspect recipient lists and manage the admin session",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the filterable fields
    #[command(display_order = 1)]
    Fields,

    /// Build a filter set and print its encoding
    #[command(display_order = 2)]
    Filter {
        /// Filter as KEY=VALUE (repeatable, applied in order)
        #[arg(short = 'f', long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,

        /// Print the JSON body form instead of query parameters
        #[arg(long)]
        json: bool,
    },

    /// Split a recipient list into user ids and usernames
    #[command(display_order = 3)]
    Recipients {
        /// Comma or newline separated ids/usernames (read from stdin if omitted)
        input: Option<String>,
    },

    /// Show, save or clear the admin session
    #[command(display_order = 4)]
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },

    /// Get or set configuration
    #[command(display_order = 5)]
    Config {
        /// Configuration key (api-url, page-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Print the stored session
    Show,

    /// Store a session obtained from the login endpoint
    Save {
        /// Access token
        #[arg(long)]
        token: String,

        /// Username of the signed-in admin
        #[arg(long)]
        username: String,

        /// User id of the signed-in admin
        #[arg(long = "user-id")]
        user_id: String,

        #[arg(long)]
        email: Option<String>,

        /// Mark the user as admin
        #[arg(long)]
        admin: bool,
    },

    /// Remove the stored session
    Clear,
}
