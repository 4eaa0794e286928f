mod roster;
mod ui;

use clap::Parser;

use crate::roster::{ManagerApp, UserStore};
use crate::ui::prelude::*;

/// Roster main parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Activate debug mode
    #[arg(short, long)]
    debug: bool,

    /// Emit events as JSON instead of colored text
    #[arg(long)]
    json: bool,

    /// Start with an empty roster instead of the demo users
    #[arg(long)]
    no_seed: bool,
}

fn main() {
    let cli = Cli::parse();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    ui::init(format, !cli.json);
    ui::set_debug_mode(cli.debug);

    let store = if cli.no_seed {
        UserStore::new()
    } else {
        UserStore::with_seed_users()
    };

    if ui::is_debug_enabled() {
        emit(
            Level::Debug,
            "roster.start",
            &format!("starting with {} users", store.users().len()),
            None,
        );
    }

    match run_manager(store) {
        Ok((store, dirty)) => {
            let total = store.users().len();
            let active = store.active_count();
            if store.users().is_empty() {
                emit(Level::Warn, "roster.empty", "Roster is empty.", None);
            }

            let (level, code, message) = if dirty {
                (
                    Level::Success,
                    "roster.updated",
                    format!(
                        "{} Roster updated: {} users, {} active.",
                        char::from(NerdFont::Check),
                        total,
                        active
                    ),
                )
            } else {
                (
                    Level::Info,
                    "roster.noop",
                    "No changes made to the roster.".to_string(),
                )
            };
            emit(
                level,
                code,
                &message,
                Some(serde_json::json!({
                    "total": total,
                    "active": active,
                    "users": store.users(),
                })),
            );
        }
        Err(err) => {
            emit(
                Level::Error,
                "roster.error",
                &format!("{} Manager failed: {err:#}", char::from(NerdFont::Warning)),
                None,
            );
            std::process::exit(1);
        }
    }
}

fn run_manager(store: UserStore) -> anyhow::Result<(UserStore, bool)> {
    ManagerApp::new(store)?.run()
}
