//! AI Crypto Agent CLI
//!
//! Ask questions about cryptocurrencies and look at simulated price trends.
//!
//! # Usage
//!
//! ```bash
//! export GEMINI_API_KEY="..."
//!
//! # Interactive shell
//! cargo run --bin crypto-agent
//!
//! # One-shot
//! cargo run --bin crypto-agent -- ask What is a stablecoin?
//! cargo run --bin crypto-agent -- trend BTC --vega
//! ```

use agent_crypto::config::CryptoConfig;
use agent_crypto::prompts::AGENT_NAME;
use agent_crypto::{Command, CryptoAgentApp, QueryHandler, TerminalOptions, TerminalSurface};
use agent_llm::providers::OpenAIProvider;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "crypto-agent", version, about = "AI crypto agent")]
struct Args {
    /// Chat model to use instead of the configured one
    #[arg(long, global = true)]
    model: Option<String>,

    /// Chat-completion base URL to use instead of the configured one
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Ask one question and exit
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show simulated price trends for a symbol and exit
    Trend {
        /// Cryptocurrency symbol, e.g. BTC
        symbol: String,

        /// Also print the chart as Vega-Lite JSON
        #[arg(long)]
        vega: bool,
    },
}

fn print_banner() {
    println!(
        r"
╔══════════════════════════════════════════════════════════════╗
║                      AI Crypto Agent                         ║
║                                                              ║
║  Ask about cryptocurrencies, blockchain and market trends,   ║
║  or type /trend <symbol> for a simulated price chart.        ║
║  /help for commands, /exit to quit.                          ║
╚══════════════════════════════════════════════════════════════╝
"
    );
}

fn load_config(args: &Args) -> anyhow::Result<CryptoConfig> {
    let mut config = CryptoConfig::from_env()?;

    if let Some(model) = &args.model {
        config.model.clone_from(model);
    }
    if let Some(base) = &args.api_base {
        config.api_base.clone_from(base);
    }
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}

async fn run_repl(app: &mut CryptoAgentApp<TerminalSurface<io::Stdout>>) -> anyhow::Result<()> {
    print_banner();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!(">>> ");
        stdout.flush()?;

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => {
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                continue;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        match app.process_input(input).await {
            Ok(ControlFlow::Continue(())) => {}
            Ok(ControlFlow::Break(())) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => eprintln!("Error: {e}\n"),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agent_utils::init_tracing_with_default("warn,agent_crypto=info");

    let args = Args::parse();

    let config = Arc::new(load_config(&args)?);
    tracing::info!(agent = AGENT_NAME, model = %config.model, "Starting");

    let provider = Arc::new(OpenAIProvider::with_config(config.provider_config())?);
    let queries = QueryHandler::new(provider, Arc::clone(&config));

    let options = TerminalOptions {
        vega: matches!(args.command, Some(Cmd::Trend { vega: true, .. })),
        ..TerminalOptions::default()
    };
    let mut app = CryptoAgentApp::new(queries, TerminalSurface::stdout(options));

    match args.command {
        Some(Cmd::Ask { text }) => {
            app.execute(Command::Query {
                text: text.join(" "),
            })
            .await?;
        }
        Some(Cmd::Trend { symbol, .. }) => {
            app.execute(Command::Trend { symbol }).await?;
        }
        None => run_repl(&mut app).await?,
    }

    Ok(())
}
