//! Command-line wrapper around [`signet::Signer`].
//!
//! The secret key is read from the environment variable named in the
//! configuration (`SIGNET_SECRET_KEY` by default), never from arguments.
//!
//! ```text
//! signet keygen
//! signet sign '{"user":42}'
//! signet verify <token> --max-age-ms 60000
//! ```

use clap::{Parser, Subcommand};
use signet::encoding::encode_field;
use signet::key::DEFAULT_KEY_LEN;
use signet::{Error, SecretKey, SignerConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "signet", version, about = "Sign and verify time-limited tokens")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a fresh random key, base64-encoded.
    Keygen {
        /// Key length in bytes.
        #[arg(long, default_value_t = DEFAULT_KEY_LEN)]
        len: usize,
    },
    /// Sign a JSON value and print the token.
    Sign {
        /// Payload as JSON text.
        payload: String,
    },
    /// Verify a token and print its payload as JSON.
    Verify {
        /// Token to verify.
        token: String,
        /// Maximum age in milliseconds; overrides the configuration. 0 disables expiry.
        #[arg(long)]
        max_age_ms: Option<u64>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<&PathBuf>) -> Result<SignerConfig, Error> {
    match path {
        Some(path) => SignerConfig::from_toml_file(path),
        None => Ok(SignerConfig::default()),
    }
}

fn run(cli: Cli) -> Result<String, Error> {
    let config = load_config(cli.config.as_ref())?;
    match cli.command {
        Command::Keygen { len } => {
            let key = SecretKey::generate(len)?;
            Ok(encode_field(key.as_bytes()))
        }
        Command::Sign { payload } => {
            let value: serde_json::Value = serde_json::from_str(&payload)
                .map_err(|e| Error::Config(format!("payload is not JSON: {e}")))?;
            let signer = config.build_signer(config.load_key()?)?;
            Ok(signer.sign(&value)?.into_string())
        }
        Command::Verify { token, max_age_ms } => {
            let max_age = max_age_ms.map_or_else(|| config.max_age(), Duration::from_millis);
            let signer = config.build_signer(config.load_key()?)?;
            let value: serde_json::Value = signer.verify(&token, max_age)?;
            Ok(value.to_string())
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("signet: {err}");
            match err {
                Error::BadSignature | Error::SignatureExpired { .. } => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
