mod display;

use std::io::Read;
use std::time::Duration;

use clap::{Parser, Subcommand};
use regstat_core::colors::Palette;
use regstat_core::output::{get_formatter, OutputFormat};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::display::Spinner;

#[derive(Parser)]
#[command(name = "regstat")]
#[command(about = "Registration status and dates from registry WHOIS")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (human or json)
    #[arg(short, long, default_value = "human", global = true)]
    format: String,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the registry and report the domain's status
    Lookup {
        /// Domain name to look up
        domain: String,
        /// Include the registry's reply in the output
        #[arg(long)]
        raw: bool,
        /// Seconds to wait on the WHOIS server
        #[arg(short, long, default_value_t = 10)]
        timeout: u64,
        /// WHOIS server to query instead of the registry's own
        #[arg(short, long)]
        server: Option<String>,
    },
    /// Parse a saved registry reply without querying
    Parse {
        /// TLD whose reply format to use (be, ca, com, io, net, org, se, uk, us)
        tld: String,
        /// File holding the reply; reads stdin when omitted
        file: Option<String>,
        /// Include the reply in the output
        #[arg(long)]
        raw: bool,
    },
    /// List the supported TLDs
    Tlds,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let output_format: OutputFormat = cli.format.parse().unwrap_or_default();
    execute_command(cli.command, output_format).await
}

async fn execute_command(command: Commands, output_format: OutputFormat) -> anyhow::Result<()> {
    let formatter = get_formatter(output_format);

    match command {
        Commands::Lookup {
            domain,
            raw,
            timeout,
            server,
        } => {
            let mut client =
                regstat_core::WhoisClient::new().with_timeout(Duration::from_secs(timeout));
            if let Some(server) = server {
                client = client.with_server_override(server);
            }

            let spinner = match output_format {
                OutputFormat::Human => Spinner::new(&format!("Querying WHOIS for {}", domain)),
                OutputFormat::Json => Spinner::hidden(),
            };
            let result = client.lookup(&domain, raw).await;
            spinner.finish();

            match result {
                Ok(result) => {
                    println!("{}", formatter.format_lookup(&result));
                }
                Err(e) => exit_with_error(e),
            }
        }
        Commands::Parse { tld, file, raw } => {
            let text = match &file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut text = String::new();
                    std::io::stdin().read_to_string(&mut text)?;
                    text
                }
            };

            let response = regstat_core::RawResponse::from_text(&text);
            debug!(lines = response.len(), source = file.as_deref().unwrap_or("stdin"), "Read saved reply");

            match regstat_core::parse_response(&response, &tld, raw) {
                Ok(record) => {
                    println!("{}", formatter.format_record(&record));
                }
                Err(e) => exit_with_error(e),
            }
        }
        Commands::Tlds => {
            println!("{}", formatter.format_tlds(&regstat_core::supported_tlds()));
        }
    }

    Ok(())
}

fn exit_with_error(error: regstat_core::RegstatError) -> ! {
    eprintln!("{} {}", "Error:".danger(), error);
    std::process::exit(1);
}
