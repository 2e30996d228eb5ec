use clap::{ArgAction, Parser, Subcommand};
use merchant_qr::application::resolver::{Resolution, Resolver};
use merchant_qr::domain::network::Network;
use merchant_qr::domain::ports::RegistrySourceBox;
use merchant_qr::infrastructure::builtin::BuiltinRegistry;
use merchant_qr::infrastructure::json_file::JsonFileRegistry;
use merchant_qr::interfaces::csv::address_writer::{AddressRecord, AddressWriter};
use merchant_qr::interfaces::csv::payload_reader::PayloadReader;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON registry file to use instead of the built-in merchant table
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    /// Network used to pick each merchant's routing domain
    #[arg(long, value_enum, default_value_t = Network::Mainnet, global = true)]
    network: Network,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one or more QR payloads, printing one address per line
    Resolve {
        #[arg(required = true)]
        payloads: Vec<String>,

        /// Currency used to pick between merchants matching the same payload
        #[arg(long)]
        currency: Option<String>,

        /// Print the full resolution outcome as JSON
        #[arg(long)]
        explain: bool,
    },
    /// Resolve every row of a CSV file with `payload[,currency]` columns
    Batch {
        /// Input CSV file
        input: PathBuf,
    },
    /// List the merchants in the registry
    Merchants,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source: RegistrySourceBox = match &cli.registry {
        Some(path) => Box::new(JsonFileRegistry::new(path)),
        None => Box::new(BuiltinRegistry::new()),
    };
    let resolver = Resolver::from_source(&*source)
        .into_diagnostic()
        .wrap_err("failed to load merchant registry")?;

    match cli.command {
        Command::Resolve {
            payloads,
            currency,
            explain,
        } => resolve(&resolver, cli.network, &payloads, currency.as_deref(), explain),
        Command::Batch { input } => batch(&resolver, cli.network, input),
        Command::Merchants => merchants(&resolver, cli.network),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn resolve(
    resolver: &Resolver,
    network: Network,
    payloads: &[String],
    currency: Option<&str>,
    explain: bool,
) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut unresolved = 0usize;

    for payload in payloads {
        let resolution = resolver.resolve_detailed(payload, network, currency);
        if !resolution.is_resolved() {
            unresolved += 1;
        }

        if explain {
            let json = serde_json::to_string(&resolution).into_diagnostic()?;
            writeln!(out, "{json}").into_diagnostic()?;
            continue;
        }

        match resolution {
            Resolution::Resolved { address, .. } => {
                writeln!(out, "{address}").into_diagnostic()?;
            }
            other => eprintln!("Unresolved payload {payload:?}: {}", describe(&other)),
        }
    }

    Ok(if unresolved == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn batch(resolver: &Resolver, network: Network, input: PathBuf) -> Result<ExitCode> {
    let file = File::open(&input)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot open {}", input.display()))?;
    let reader = PayloadReader::new(file);

    let stdout = io::stdout();
    let mut writer = AddressWriter::new(stdout.lock());

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                eprintln!("Error reading payload: {}", e);
                continue;
            }
        };

        let resolution =
            resolver.resolve_detailed(&record.payload, network, record.currency.as_deref());
        let (merchant, address) = match &resolution {
            Resolution::Resolved {
                merchant_id,
                address,
            } => (Some(merchant_id.to_string()), Some(address.to_string())),
            _ => (None, None),
        };

        writer
            .write_record(&AddressRecord {
                payload: record.payload,
                merchant,
                address,
            })
            .into_diagnostic()?;
    }

    writer.flush().into_diagnostic()?;
    Ok(ExitCode::SUCCESS)
}

fn merchants(resolver: &Resolver, network: Network) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for merchant in resolver.registry() {
        writeln!(
            out,
            "{}\t{}\t{}",
            merchant.id(),
            merchant.display_currency().unwrap_or("-"),
            merchant.domain_for(network)
        )
        .into_diagnostic()?;
    }

    Ok(ExitCode::SUCCESS)
}

fn describe(resolution: &Resolution<'_>) -> String {
    match resolution {
        Resolution::Resolved { merchant_id, .. } => format!("resolved by {merchant_id}"),
        Resolution::EmptyPayload => "empty payload".to_string(),
        Resolution::NoMatch => "no merchant recognizes it".to_string(),
        Resolution::Ambiguous { candidates } => format!(
            "matches {} merchants, pass --currency to choose",
            candidates.len()
        ),
        Resolution::CurrencyMismatch { hint, candidates } => format!(
            "none of the {} matching merchants uses {hint}",
            candidates.len()
        ),
    }
}
