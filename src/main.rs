use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use transfer_consent::application::orchestrator::{Settlement, TransferConsentOrchestrator};
use transfer_consent::config::AppConfig;
use transfer_consent::domain::payment::InitiateCreditTransfersData;
use transfer_consent::domain::transfer::TransferDraft;
use transfer_consent::error::ErrorKind;
use transfer_consent::infrastructure::console::{ConsoleNavigator, ConsoleNotifier};
use transfer_consent::infrastructure::i18n::MessageTranslator;
use transfer_consent::infrastructure::in_memory::ScriptedMutation;
use transfer_consent::interfaces::json::response_reader::ResponseReader;
use transfer_consent::logging::init_logging;

#[derive(Clone, Copy, ValueEnum)]
enum SimulatedError {
    Timeout,
    Network,
    BadStatus,
}

impl From<SimulatedError> for ErrorKind {
    fn from(kind: SimulatedError) -> Self {
        match kind {
            SimulatedError::Timeout => ErrorKind::NetworkTimeout,
            SimulatedError::Network => ErrorKind::Network("connection reset".to_string()),
            SimulatedError::BadStatus => ErrorKind::BadStatus(502),
        }
    }
}

/// Replays one transfer submission against a recorded mutation response and
/// prints the resulting effects.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Mutation response as a GraphQL JSON envelope
    #[arg(long, required_unless_present = "simulate_error")]
    response: Option<PathBuf>,

    /// Settle the mutation with a transport error instead of a response
    #[arg(long, value_enum, conflicts_with = "response")]
    simulate_error: Option<SimulatedError>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dashboard origin, overrides the configured one
    #[arg(long)]
    origin: Option<String>,

    #[arg(long)]
    account_id: String,

    #[arg(long)]
    account_membership_id: String,

    #[arg(long)]
    amount: Decimal,

    #[arg(long, default_value = "EUR")]
    currency: String,

    #[arg(long)]
    beneficiary_name: String,

    #[arg(long)]
    iban: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path).into_diagnostic()?,
        None => AppConfig::default(),
    };
    if let Some(origin) = cli.origin {
        config.origin = origin;
        config.validate().into_diagnostic()?;
    }
    init_logging(&config);

    let response: std::result::Result<InitiateCreditTransfersData, ErrorKind> =
        match (cli.simulate_error, cli.response) {
            (Some(kind), _) => Err(kind.into()),
            (None, Some(path)) => {
                let file = File::open(path).into_diagnostic()?;
                ResponseReader::new(file).read().into_diagnostic()?
            }
            (None, None) => miette::bail!("either --response or --simulate-error is required"),
        };

    let mutation = ScriptedMutation::new();
    mutation.push(response);

    let orchestrator = TransferConsentOrchestrator::new(
        Arc::new(mutation),
        Arc::new(ConsoleNavigator::new(config.origin.clone())),
        Arc::new(ConsoleNotifier),
        Arc::new(MessageTranslator::new(config.messages.clone())),
        config.messages.clone(),
    );

    let settlement = orchestrator
        .submit(TransferDraft {
            account_id: cli.account_id,
            account_membership_id: cli.account_membership_id,
            amount: cli.amount,
            currency: cli.currency,
            beneficiary_name: cli.beneficiary_name,
            iban: cli.iban,
        })
        .await;

    match settlement {
        Settlement::Initiated { payment_id } => println!("settlement: initiated {payment_id}"),
        Settlement::Rejected { payment_id, .. } => println!("settlement: rejected {payment_id}"),
        Settlement::ConsentHandoff { payment_id, .. } => {
            println!("settlement: consent-handoff {payment_id}")
        }
        Settlement::Failed(err) => println!("settlement: failed {}", err.code()),
    }

    Ok(())
}
