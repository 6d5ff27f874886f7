//! `send_sms <to_number> <message> [config_json]`
//!
//! Prints exactly one JSON object to stdout. Exits non-zero only when the
//! arguments themselves are unusable; a failed send is reported in the payload.

use std::ffi::OsString;
use std::iter;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};
use twilio_sms::{
    CredentialsConfig, EnvSource, MessageProvider, ProcessEnv, SendOutcome, SmsSender,
    TwilioProvider,
};

const USAGE: &str = "Usage: send_sms <to_number> <message> [config_json]";
const INVALID_CONFIG: &str = "Invalid JSON configuration";

/// Send one SMS through Twilio.
#[derive(Parser, Debug)]
#[command(
    name = "send_sms",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Recipient phone number.
    to_number: Option<String>,

    /// Message text.
    message: Option<String>,

    /// `{"accountSid": ..., "authToken": ..., "phoneNumber": ...}`; the TWILIO_*
    /// environment variables are used when omitted.
    config_json: Option<String>,

    #[arg(hide = true)]
    rest: Vec<String>,
}

/// Parse `argv` with every user argument taken literally.
///
/// A leading `--` is inserted after the program name, so clap never treats a
/// later `-x` or `--` as a flag or an escape.
fn parse_cli<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args.next().unwrap_or_else(|| OsString::from("send_sms"));
    Cli::try_parse_from(
        iter::once(program)
            .chain(iter::once(OsString::from("--")))
            .chain(args),
    )
}

#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    outcome: SendOutcome,
    exit_code: u8,
}

impl Invocation {
    fn sent(outcome: SendOutcome) -> Self {
        Self {
            outcome,
            exit_code: 0,
        }
    }

    fn rejected(error: &str) -> Self {
        Self {
            outcome: SendOutcome::failure(error),
            exit_code: 1,
        }
    }
}

async fn run<P, E>(cli: Cli, sender: &SmsSender<P, E>) -> Invocation
where
    P: MessageProvider,
    E: EnvSource,
{
    let (Some(to_number), Some(message)) = (cli.to_number, cli.message) else {
        return Invocation::rejected(USAGE);
    };

    let config = match cli.config_json.as_deref().map(CredentialsConfig::from_json) {
        None => None,
        Some(Ok(config)) => Some(config),
        Some(Err(err)) => {
            debug!(error = %err, "rejecting configuration argument");
            return Invocation::rejected(INVALID_CONFIG);
        }
    };

    if !cli.rest.is_empty() {
        debug!(ignored = cli.rest.len(), "ignoring extra arguments");
    }

    Invocation::sent(sender.send(&to_number, &message, config.as_ref()).await)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let invocation = match parse_cli(std::env::args_os()) {
        Ok(cli) => {
            let sender = SmsSender::with_parts(TwilioProvider::new(), ProcessEnv);
            run(cli, &sender).await
        }
        Err(err) => {
            debug!(error = %err, "argument parsing failed");
            Invocation::rejected(USAGE)
        }
    };

    println!("{}", serde_json::to_string(&invocation.outcome)?);
    Ok(ExitCode::from(invocation.exit_code))
}
