//! FlexPrice dashboard - command-line entry point
//!
//! ```text
//! flexprice-dash status
//! flexprice-dash login <token>
//! flexprice-dash login <email> <password>
//! flexprice-dash logout
//! flexprice-dash fire [customer]
//! flexprice-dash events [customer] [pages]
//! flexprice-dash usage [customer]
//! flexprice-dash customer <customer-id>
//! ```

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use flexprice_domain::constants::DEMO_CUSTOMER_ID;
use flexprice_lib::utils::logging::init_logging;
use flexprice_lib::{commands, AppContext, ConsoleNavigator};
use serde::Serialize;

const USAGE: &str = "\
usage: flexprice-dash <command> [args]

commands:
  status                         show session and configuration state
  login <token>                  store a dashboard token
  login <email> <password>       sign in with credentials
  logout                         forget the stored token
  fire [customer]                send a demo llm_usage event
  events [customer] [pages]      list events from the last 7 days
  usage [customer]               daily llm_usage totals for the last 7 days
  customer <customer-id>         usage summary per feature
  help                           show this message";

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        // A missing .env is normal outside development
        eprintln!("note: no .env loaded ({e})");
    }
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        println!("{USAGE}");
        return Ok(());
    };
    if matches!(command, "help" | "-h" | "--help") {
        println!("{USAGE}");
        return Ok(());
    }

    let navigator = Arc::new(ConsoleNavigator::default());
    let context = AppContext::new(navigator.clone()).context("failed to initialize dashboard")?;
    let customer = args.get(1).map_or(DEMO_CUSTOMER_ID, String::as_str);

    let outcome = run(&context, command, &args[1..], customer).await;

    if let Some(path) = navigator.take_redirect() {
        eprintln!("Session expired or invalid. Sign in again ({path}): flexprice-dash login <token>");
    }
    outcome
}

async fn run(context: &AppContext, command: &str, args: &[String], customer: &str) -> Result<()> {
    match command {
        "status" => print_json(&commands::status(context).await),
        "login" => match args {
            [token] => {
                commands::sign_in_with_token(context, token).await?;
                println!("Signed in.");
                Ok(())
            }
            [email, password] => {
                commands::sign_in_with_password(context, email, password)
                    .await
                    .map_err(|e| anyhow::anyhow!(e.message()))?;
                println!("Signed in as {email}.");
                Ok(())
            }
            _ => bail!("login expects <token> or <email> <password>"),
        },
        "logout" => {
            commands::sign_out(context).await?;
            println!("Signed out.");
            Ok(())
        }
        "fire" => {
            let receipt = commands::fire_usage_event(context, customer)
                .await
                .map_err(|e| anyhow::anyhow!(e.message()))?;
            print_json(&receipt)
        }
        "events" => {
            let pages: usize = match args.get(1) {
                Some(raw) => raw.parse().with_context(|| format!("invalid page count: {raw}"))?,
                None => 1,
            };
            let mut cursor = commands::recent_events_cursor(customer, Utc::now());
            let mut events = Vec::new();
            for _ in 0..pages {
                match commands::recent_events(context, &mut cursor)
                    .await
                    .map_err(|e| anyhow::anyhow!(e.message()))?
                {
                    Some(page) => events.extend(page.events),
                    None => break,
                }
            }
            print_json(&events)
        }
        "usage" => {
            let usage = commands::usage_summary(context, customer, Utc::now())
                .await
                .map_err(|e| anyhow::anyhow!(e.message()))?;
            print_json(&usage)
        }
        "customer" => {
            let Some(id) = args.first() else { bail!("customer expects <customer-id>") };
            let summary = commands::customer_usage(context, id)
                .await
                .map_err(|e| anyhow::anyhow!(e.message()))?;
            print_json(&summary)
        }
        other => bail!("unknown command `{other}`\n\n{USAGE}"),
    }
}
