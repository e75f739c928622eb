use super::print::{
    print_config, print_display_list, print_fields, print_info, print_json, print_query,
    print_recipients, print_rejected, print_session, print_success,
};
use super::setup::{Cli, Commands, SessionCommands};
use clap::Parser;
use lumore_admin::config::{AdminConfig, AdminPaths};
use lumore_admin::error::{LumoreError, Result};
use lumore_admin::filters::{
    encode_json_object, encode_query_params, list_fields, resolve, FilterSet,
};
use lumore_admin::recipients::Recipients;
use lumore_admin::session::fs::FileSessionStore;
use lumore_admin::session::{AdminSession, SessionStore, SessionUser};
use serde_json::{json, Value};
use std::io::{IsTerminal, Read};

struct AppContext {
    paths: AdminPaths,
    sessions: FileSessionStore,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Commands::Fields => handle_fields(),
        Commands::Filter { filters, json } => handle_filter(&filters, json),
        Commands::Recipients { input } => handle_recipients(input),
        Commands::Session { action } => match action {
            SessionCommands::Show => handle_session_show(&ctx),
            SessionCommands::Save {
                token,
                username,
                user_id,
                email,
                admin,
            } => {
                let user = SessionUser {
                    id: user_id,
                    username,
                    email,
                    is_admin: Some(admin),
                };
                handle_session_save(&mut ctx, AdminSession::new(token, user))
            }
            SessionCommands::Clear => handle_session_clear(&mut ctx),
        },
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

// 0 = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ = trace. RUST_LOG wins if set.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .try_init();
}

fn init_context() -> Result<AppContext> {
    let paths = AdminPaths::discover()?;
    log::debug!(
        "config dir {}, data dir {}",
        paths.config_dir.display(),
        paths.data_dir.display()
    );
    let sessions = FileSessionStore::new(paths.data_dir.clone());
    Ok(AppContext { paths, sessions })
}

fn handle_fields() -> Result<()> {
    print_fields(list_fields());
    Ok(())
}

fn handle_filter(specs: &[String], as_json: bool) -> Result<()> {
    let mut filters = FilterSet::new();

    for spec in specs {
        let Some((key, raw)) = spec.split_once('=') else {
            print_rejected(spec, "expected KEY=VALUE");
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            print_rejected(spec, "filter key is required");
            continue;
        }
        if resolve(key).is_none() {
            log::info!("{} is not a catalog field, treating it as text", key);
        }
        if let Err(e) = filters.apply(key, raw) {
            print_rejected(key, &e.to_string());
        }
    }

    print_display_list(&filters.to_display_list());

    if as_json {
        let body = json!({ "filters": Value::Object(encode_json_object(&filters)) });
        print_json(&serde_json::to_string_pretty(&body)?);
    } else {
        print_query(&encode_query_params(&filters));
    }
    Ok(())
}

fn handle_recipients(input: Option<String>) -> Result<()> {
    let text = match input {
        Some(text) => text,
        None => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err(LumoreError::Validation(
                    "Pass a recipient list or pipe one on stdin.".to_string(),
                ));
            }
            let mut buffer = String::new();
            stdin.read_to_string(&mut buffer)?;
            buffer
        }
    };

    print_recipients(&Recipients::parse(&text));
    Ok(())
}

fn handle_session_show(ctx: &AppContext) -> Result<()> {
    let session = ctx.sessions.load()?;
    print_session(session.as_ref());
    Ok(())
}

fn handle_session_save(ctx: &mut AppContext, session: AdminSession) -> Result<()> {
    ctx.sessions.save(&session)?;
    print_success(&format!("Session saved for {}.", session.user.username));
    if !session.is_admin() {
        print_info("This user is not marked as admin; admin endpoints will refuse it.");
    }
    Ok(())
}

fn handle_session_clear(ctx: &mut AppContext) -> Result<()> {
    ctx.sessions.clear()?;
    print_success("Session cleared.");
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let config_dir = &ctx.paths.config_dir;

    match (key, value) {
        (None, _) => {
            let config = AdminConfig::load(config_dir)?.with_env_overrides();
            print_config(&config.entries());
        }
        (Some(key), None) => {
            let config = AdminConfig::load(config_dir)?.with_env_overrides();
            println!("{}", config.get(&key)?);
        }
        (Some(key), Some(value)) => {
            let mut config = AdminConfig::load(config_dir)?;
            config.set(&key, &value)?;
            config.save(config_dir)?;
            print_success(&format!("{} = {}", key, config.get(&key)?));
        }
    }
    Ok(())
}
