use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "abook", bin_name = "abook", version)]
#[command(about = "Personal address book: contacts, phones and birthdays", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address book file (overrides the configured book-file)
    #[arg(short, long, global = true, env = "ABOOK_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact (replaces an existing contact with the same name)
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Contact name
        name: String,

        /// Phone number, exactly 10 digits (repeatable)
        #[arg(short, long = "phone", value_name = "PHONE")]
        phones: Vec<String>,

        /// Birthday as YYYY-MM-DD
        #[arg(short, long, value_name = "DATE")]
        birthday: Option<String>,
    },

    /// List contacts, one page at a time
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Page number (starting at 1)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        page: u64,

        /// Contacts per page (defaults to the configured page-size)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        page_size: Option<u64>,

        /// Only show the first N contacts
        #[arg(long, value_name = "N", conflicts_with_all = ["page", "page_size"])]
        first: Option<usize>,
    },

    /// Search names and phone numbers (prompts for a keyword when omitted)
    #[command(display_order = 3)]
    Search {
        /// Keyword: matched anywhere in a name, or at the start of a phone
        keyword: Option<String>,
    },

    /// Show one contact
    #[command(display_order = 4)]
    Show {
        /// Contact name
        name: String,
    },

    /// Remove a contact
    #[command(alias = "rm", display_order = 5)]
    Remove {
        /// Contact name
        name: String,
    },

    /// Manage a contact's phone numbers
    #[command(display_order = 6)]
    Phone {
        #[command(subcommand)]
        action: PhoneCommands,
    },

    /// Set or clear a contact's birthday
    #[command(display_order = 7)]
    Birthday {
        /// Contact name
        name: String,

        /// Birthday as YYYY-MM-DD
        #[arg(required_unless_present = "clear")]
        date: Option<String>,

        /// Remove the birthday
        #[arg(long, conflicts_with = "date")]
        clear: bool,
    },

    /// List upcoming birthdays
    #[command(display_order = 8)]
    Birthdays {
        /// Look-ahead window in days
        #[arg(short, long, default_value_t = 7)]
        within: u32,
    },

    /// Get or set configuration
    #[command(display_order = 9)]
    Config {
        /// Configuration key (book-file, page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PhoneCommands {
    /// Add a phone number to a contact
    Add { name: String, phone: String },

    /// Delete a phone number from a contact
    #[command(alias = "rm")]
    Delete { name: String, phone: String },

    /// Replace one of a contact's phone numbers
    Edit {
        name: String,
        old: String,
        new: String,
    },
}
