//! CLI front-end for the invoice dashboard and the claim list.
//!
//! Usage:
//!   claims-desk upload --token <jwt> <invoices.csv>
//!   claims-desk claims [--notify-on-error]
//!   claims-desk login --username <user> --password <pass>
//!   claims-desk whoami --token <jwt>
//!
//! Backends default to the local development hosts; override them with
//! `--invoice-api` / `--claims-api` or the matching `CLAIMS_DESK_*`
//! environment variables. Notices go to stderr with exit status 1.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use claims_desk::config::{DEFAULT_CLAIMS_API, DEFAULT_INVOICE_API};
use claims_desk::render::{
    CLAIM_HEADERS, CLASSIFICATION_HEADERS, CLAIMS_TITLE, RESULTS_TITLE, claim_rows,
    classification_rows, shows_results, status_line, text_table,
};
use claims_desk::{
    BearerToken, CancellationToken, ClaimsState, ClientConfig, Credentials, Endpoints,
    FailurePolicy, HttpClient, Notice, SelectedFile, Tone, UploadState, sign_in, whoami,
};

/// Invoice fraud dashboard and claims list
#[derive(Parser, Debug)]
#[command(name = "claims-desk", version)]
#[command(about = "Upload invoice CSVs for fraud classification and list processed claims")]
struct Args {
    /// Base URL of the invoice service (upload, token, identity)
    #[arg(long, env = "CLAIMS_DESK_INVOICE_API", default_value = DEFAULT_INVOICE_API)]
    invoice_api: String,

    /// Base URL of the claims service
    #[arg(long, env = "CLAIMS_DESK_CLAIMS_API", default_value = DEFAULT_CLAIMS_API)]
    claims_api: String,

    /// Log filter, e.g. "debug" or "claims_desk=trace" (RUST_LOG wins when set)
    #[arg(long, default_value = "claims_desk=info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload a CSV of invoices and print the classification table
    Upload {
        /// Bearer token from `login`
        #[arg(long, short = 't', env = "CLAIMS_DESK_TOKEN", default_value = "", hide_env_values = true)]
        token: String,

        /// CSV file to classify
        file: Option<PathBuf>,
    },
    /// Fetch and print the processed claims
    Claims {
        /// Report a failed fetch instead of printing an empty table
        #[arg(long)]
        notify_on_error: bool,
    },
    /// Exchange a username and password for a bearer token
    Login {
        #[arg(long, short = 'u')]
        username: String,

        #[arg(long, short = 'p')]
        password: String,
    },
    /// Show which user a bearer token belongs to
    Whoami {
        #[arg(long, short = 't', env = "CLAIMS_DESK_TOKEN", default_value = "", hide_env_values = true)]
        token: String,
    },
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let policy = match &args.command {
        Command::Claims { notify_on_error } => FailurePolicy::from_notify(*notify_on_error),
        _ => FailurePolicy::Silent,
    };
    let config = ClientConfig::new(Endpoints::from_bases(&args.invoice_api, &args.claims_api))
        .with_claims_failure(policy);

    let client = match HttpClient::new(config.endpoints.clone()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = match args.command {
        Command::Upload { token, file } => run_upload(&client, token, file).await,
        Command::Claims { .. } => run_claims(&client, config.claims_failure).await,
        Command::Login { username, password } => {
            run_login(&client, Credentials::new(username, password)).await
        }
        Command::Whoami { token } => run_whoami(&client, BearerToken::new(token)).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(notice) => {
            eprintln!("{} {}", "error:".red().bold(), notice);
            ExitCode::FAILURE
        }
    }
}

async fn run_upload(
    client: &HttpClient,
    token: String,
    file: Option<PathBuf>,
) -> Result<(), Notice> {
    let mut state = UploadState::new();
    state.set_token(token);

    // An unreadable path counts as no file selected
    let selected = file.and_then(|path| {
        SelectedFile::from_path(&path)
            .inspect_err(|e| tracing::error!(error = %e, "cannot use input file"))
            .ok()
    });
    state.select_file(selected);

    state.submit(client, &CancellationToken::new()).await?;

    if let Some(message) = status_line(&state) {
        println!("{}", message.green());
    }
    if shows_results(&state) {
        let rows = classification_rows(&state);
        let cells: Vec<Vec<String>> = rows.iter().map(|r| r.cells()).collect();
        let lines = text_table(&CLASSIFICATION_HEADERS, &cells);

        println!();
        println!("{}", RESULTS_TITLE.bold());
        println!("{}", lines[0].bold());
        println!("{}", lines[1]);
        for (line, row) in lines[2..].iter().zip(&rows) {
            match row.tone {
                Tone::Alert => println!("{}", line.red().bold()),
                Tone::Normal => println!("{}", line.green().bold()),
            }
        }
    }
    Ok(())
}

async fn run_claims(client: &HttpClient, policy: FailurePolicy) -> Result<(), Notice> {
    let mut state = ClaimsState::new();
    state
        .load(client, &CancellationToken::new(), policy)
        .await?;

    let rows = claim_rows(state.claims());
    let cells: Vec<Vec<&str>> = rows.iter().map(|r| r.cells().to_vec()).collect();
    let lines = text_table(&CLAIM_HEADERS, &cells);

    println!("{}", CLAIMS_TITLE.bold());
    println!("{}", lines[0].bold());
    for line in &lines[1..] {
        println!("{line}");
    }
    Ok(())
}

async fn run_login(client: &HttpClient, credentials: Credentials) -> Result<(), Notice> {
    let token = sign_in(client, &credentials).await?;
    println!("{}", token.as_str());
    Ok(())
}

async fn run_whoami(client: &HttpClient, token: BearerToken) -> Result<(), Notice> {
    let user = whoami(client, &token).await?;
    println!("{}", user.username);
    Ok(())
}
