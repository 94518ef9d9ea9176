//! Tunnel Warden CLI - command-line interface for the entropy-based detector

use std::io::BufRead;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use warden_analyzer::{analyze_query, DEFAULT_ENTROPY_THRESHOLD};
use warden_core::{QueryInterceptor, WardenConfig};
use warden_ledger::Ledger;
use warden_oracle::OracleClient;

#[derive(Parser)]
#[command(name = "warden")]
#[command(about = "Tunnel Warden - entropy-based detection of DNS tunneling")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Score a single query without recording anything
    Analyze {
        /// The query string to analyze
        query: String,
        /// Entropy threshold in bits per character
        #[arg(short, long, default_value_t = DEFAULT_ENTROPY_THRESHOLD)]
        threshold: f64,
    },
    /// Read queries line by line from stdin and intercept each one
    Intercept {
        /// Entropy threshold in bits per character
        #[arg(short, long, default_value_t = DEFAULT_ENTROPY_THRESHOLD)]
        threshold: f64,
        /// Ledger database path
        #[arg(long, default_value = "./warden_ledger.db")]
        ledger: PathBuf,
        /// Block suspicious queries instead of only flagging them
        #[arg(long)]
        block: bool,
    },
    /// List flagged queries from the ledger
    Flagged {
        /// Ledger database path
        #[arg(long, default_value = "./warden_ledger.db")]
        ledger: PathBuf,
        /// Print entries as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Ask the remote oracle for a second opinion on a query
    Recheck {
        /// The query string to recheck
        query: String,
        /// Classification endpoint
        #[arg(short, long, default_value = "http://127.0.0.1:5000/predict")]
        endpoint: String,
        /// Request timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout: u64,
        /// DNS record type to report
        #[arg(long, default_value = "A")]
        record_type: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::init();

    match cli.command {
        Some(Commands::Analyze { query, threshold }) => {
            let (verdict, score) = analyze_query(&query, threshold);
            println!("{:.4} bits/char  {}  {}", score, verdict, query);
        }
        Some(Commands::Intercept {
            threshold,
            ledger,
            block,
        }) => {
            let mut config = WardenConfig::default();
            config.threshold = threshold;
            config.block_suspicious = block;
            config.ledger.db_path = ledger;
            let interceptor = QueryInterceptor::from_config(config)?;

            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let query = line?;
                let outcome = interceptor.on_query(&query);
                if let Some(e) = &outcome.ledger_error {
                    eprintln!("warning: flag not recorded: {}", e);
                }
                println!("{}  {:.4}  {}", outcome.decision, outcome.score, query);
            }

            interceptor.ledger().flush()?;
        }
        Some(Commands::Flagged { ledger, json }) => {
            let ledger = Ledger::open(&ledger)?;
            for entry in ledger.list_all()? {
                if json {
                    println!("{}", serde_json::to_string(&entry)?);
                } else {
                    println!(
                        "{}  {:.4}  {}",
                        entry.observed_at.to_rfc3339(),
                        entry.score,
                        entry.query
                    );
                }
            }
        }
        Some(Commands::Recheck {
            query,
            endpoint,
            timeout,
            record_type,
        }) => {
            let client = OracleClient::with_timeout(endpoint, Duration::from_secs(timeout))?
                .with_record_type(record_type);

            match client.classify(&query).await {
                Ok(verdict) => println!("oracle verdict: {}", verdict),
                Err(e) => {
                    eprintln!("unable to determine: {}", e);
                    std::process::exit(2);
                }
            }
        }
        None => {
            println!("Tunnel Warden v0.1.0 - Use --help for commands");
        }
    }

    Ok(())
}
