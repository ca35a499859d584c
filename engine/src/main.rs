//! Offline duplicate report
//!
//! Reads a JSON array of leads and prints the duplicate groups the CRM would
//! show for them, in the same order.

use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use shared::{crm_info, logging, Lead, ServiceId};

use engine::find_duplicates;

/// Report duplicate leads in an exported lead list
#[derive(Parser, Debug)]
#[command(name = "crm-dedupe")]
#[command(about = "Groups likely duplicate leads from a JSON export")]
struct Args {
    /// JSON file holding an array of leads
    #[arg(long, env = "CRM_DEDUPE_INPUT")]
    input: PathBuf,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CRM_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    ServiceId::init_cli();
    logging::init_tracing(ServiceId::current(), Some(&args.log_level));

    let text = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("reading {}", args.input.display()))?;
    let mut leads: Vec<Lead> = serde_json::from_str(&text)
        .with_context(|| format!("parsing leads from {}", args.input.display()))?;

    // Grouping order is ascending id, same as the live service
    leads.sort_by_key(|lead| lead.id);

    let groups = find_duplicates(&leads);
    crm_info!(ServiceId::current(), "🔍 {} duplicate groups in {} leads", groups.len(), leads.len());

    let report = if args.pretty {
        serde_json::to_string_pretty(&groups)?
    } else {
        serde_json::to_string(&groups)?
    };
    println!("{report}");

    Ok(())
}
