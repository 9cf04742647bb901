//! Per-command handlers: each one calls the API and prints the `CmdResult`.

use super::render::{
    print_messages, render_card, render_config, render_record_list, render_search_results,
    render_upcoming,
};
use super::setup::{Cli, Commands, PhoneCommands};
use abook::api::{AbookApi, CmdResult, ConfigAction, ListRange};
use abook::config::AbookConfig;
use abook::error::{AbookError, Result};
use abook::store::fs::JsonFileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_ENV: &str = "ABOOK_CONFIG_DIR";

struct AppContext {
    api: AbookApi<JsonFileStore>,
    page_size: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            phones,
            birthday,
        }) => handle_mutation(ctx.api.add_contact(&name, &phones, birthday.as_deref())),
        Some(Commands::List {
            page,
            page_size,
            first,
        }) => {
            let range = match first {
                Some(n) => ListRange::First(n),
                None => ListRange::Page {
                    number: page as usize,
                    size: page_size.map(|s| s as usize).unwrap_or(ctx.page_size),
                },
            };
            handle_list(&ctx, range)
        }
        Some(Commands::Search { keyword }) => handle_search(&ctx, keyword),
        Some(Commands::Show { name }) => handle_show(&ctx, &name),
        Some(Commands::Remove { name }) => handle_mutation(ctx.api.remove_contact(&name)),
        Some(Commands::Phone { action }) => match action {
            PhoneCommands::Add { name, phone } => {
                handle_mutation(ctx.api.add_phone(&name, &phone))
            }
            PhoneCommands::Delete { name, phone } => {
                handle_mutation(ctx.api.delete_phone(&name, &phone))
            }
            PhoneCommands::Edit { name, old, new } => {
                handle_mutation(ctx.api.edit_phone(&name, &old, &new))
            }
        },
        Some(Commands::Birthday { name, date, clear }) => {
            let date = if clear { None } else { date };
            handle_mutation(ctx.api.set_birthday(&name, date.as_deref()))
        }
        Some(Commands::Birthdays { within }) => handle_birthdays(&ctx, within),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => {
            let range = ListRange::Page {
                number: 1,
                size: ctx.page_size,
            };
            handle_list(&ctx, range)
        }
    }
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "abook", "abook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            AbookError::InvalidConfig("could not determine the config directory".to_string())
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = AbookConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!("ignoring unreadable config in {}: {}", config_dir.display(), e);
        AbookConfig::default()
    });

    let book_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.book_file.clone());
    debug!(book_file = %book_file.display(), config_dir = %config_dir.display(), "resolved paths");

    let api = AbookApi::open(JsonFileStore::new(book_file), config_dir)?;
    Ok(AppContext {
        api,
        page_size: config.page_size,
    })
}

fn handle_mutation(result: Result<CmdResult>) -> Result<()> {
    let result = result?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, range: ListRange) -> Result<()> {
    let result = ctx.api.list_contacts(range)?;
    print!("{}", render_record_list(&result.listed_records));
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, keyword: Option<String>) -> Result<()> {
    let keyword = match keyword {
        Some(k) => k,
        None => prompt_keyword()?,
    };
    let result = ctx.api.search(&keyword)?;
    if !result.listed_records.is_empty() {
        print!("{}", render_search_results(&result.listed_records));
    }
    print_messages(&result.messages);
    Ok(())
}

fn prompt_keyword() -> Result<String> {
    print!("Input keyword: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn handle_show(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.show_contact(name)?;
    for listed in &result.listed_records {
        print!("{}", render_card(listed));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_birthdays(ctx: &AppContext, within: u32) -> Result<()> {
    let result = ctx.api.upcoming_birthdays(i64::from(within))?;
    print!("{}", render_upcoming(&result.listed_records));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}
