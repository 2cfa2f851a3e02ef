//! CampusGuard — content moderation scanning service.

use std::path::PathBuf;
use std::sync::Arc;

use campusguard_core::GuardConfig;
use campusguard_scan::{ModerationPolicy, Moderator};
use campusguard_server::routes::{self, scan};
use campusguard_server::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!("CampusGuard — confession board content moderation");
    println!();
    println!("Usage: campusguard [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Start the server");
    println!("  scan <text> [--comment]       Moderate text and print the result");
    println!("  validate-policy <file>        Check a moderation policy file");
    println!("  help                          Show this help message");
    println!();
    println!("Environment: PORT, HOST, CAMPUSGUARD_POLICY, RUST_LOG");
}

fn run_scan(config: &GuardConfig, args: &[String]) -> anyhow::Result<i32> {
    let comment = args.iter().any(|a| a == "--comment");
    let text: Vec<&str> = args
        .iter()
        .filter(|a| a.as_str() != "--comment")
        .map(|a| a.as_str())
        .collect();
    if text.is_empty() {
        eprintln!("Usage: campusguard scan <text> [--comment]");
        return Ok(1);
    }

    let policy = ModerationPolicy::load_or_default(config.policy_file.as_deref())?;
    let moderator = Moderator::new(policy);
    let body = serde_json::json!({
        "content": text.join(" "),
        "type": if comment { "comment" } else { "post" },
    });

    match scan::scan_body(&moderator, body.to_string().as_bytes()) {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(0)
        }
        Err(err) => {
            println!("{}", serde_json::to_string_pretty(&err.body())?);
            Ok(1)
        }
    }
}

fn run_validate(path: &str) -> anyhow::Result<i32> {
    match ModerationPolicy::load(&PathBuf::from(path)) {
        Ok(policy) => {
            println!("{}", serde_json::to_string_pretty(&policy.summary())?);
            Ok(0)
        }
        Err(e) => {
            eprintln!("Invalid policy {}: {}", path, e);
            Ok(1)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = GuardConfig::from_env();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "scan" => {
                let code = run_scan(&config, &args[2..])?;
                std::process::exit(code);
            }
            "validate-policy" => {
                if args.len() < 3 {
                    eprintln!("Usage: campusguard validate-policy <file>");
                    std::process::exit(1);
                }
                let code = run_validate(&args[2])?;
                std::process::exit(code);
            }
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'campusguard help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let state = Arc::new(AppState::from_config(config)?);
    let addr = state.config.bind_addr();

    let app = routes::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("CampusGuard listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
