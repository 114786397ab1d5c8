use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{Level, info};

use crate::config::{APP_NAME, KEY_MIN_LENGTH};
use crate::file::{Destination, File};
use crate::processor::Processor;
use crate::secret::SecretBytes;
use crate::types::Processing;
use crate::ui::display::show_success;
use crate::ui::prompt::Prompt;

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a file into a container
    Encrypt(FileArgs),

    /// Decrypt a container and verify its tag
    Decrypt(FileArgs),
}

#[derive(Args)]
pub struct FileArgs {
    /// Input file; its path is bound into the IV as typed
    input: PathBuf,

    /// Output file [default: stdout]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Key; prompted for when omitted
    #[arg(short, long)]
    key: Option<String>,
}

#[derive(Parser)]
#[command(name = APP_NAME, version, about = "Encrypt files using AES-256 with SHA-256 key stretching and an HMAC-SHA-256 trailer.")]
pub struct App {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl App {
    pub fn init() -> Result<Self> {
        let app = Self::parse();

        let subscriber = tracing_subscriber::fmt().with_file(true).with_line_number(true).with_writer(std::io::stderr).with_max_level(app.level()).finish();
        tracing::subscriber::set_global_default(subscriber)?;

        Ok(app)
    }

    pub fn execute(self) -> Result<()> {
        let (processing, args) = match self.command {
            Commands::Encrypt(args) => (Processing::Encryption, args),
            Commands::Decrypt(args) => (Processing::Decryption, args),
        };

        let mut input = File::new(args.input);
        input.validate()?;

        let destination = Destination::new(args.output);
        ensure!(!destination.conflicts_with(&input), "output would overwrite the input: {}", input.path().display());

        let secret = match args.key {
            Some(key) => SecretBytes::from_string(key),
            None => Prompt::new(KEY_MIN_LENGTH).key(processing)?,
        };
        ensure!(!secret.is_empty(), "key cannot be empty");

        info!(%processing, input = %input.path().display(), output = %destination, "starting");

        let processor = Processor::new(secret);
        let written = match processing {
            Processing::Encryption => processor.encrypt(&mut input, &destination),
            Processing::Decryption => processor.decrypt(&mut input, &destination),
        }
        .with_context(|| format!("{} failed: {}", processing, input.path().display()))?;

        show_success(processing, &destination, written)
    }

    fn level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        App::command().debug_assert();
    }

    #[test]
    fn test_parse_encrypt() {
        let app = App::try_parse_from(["aescrypt2", "encrypt", "a.txt", "-o", "a.aes", "-k", "secret", "-vv"]).unwrap();
        assert_eq!(app.level(), Level::DEBUG);

        let Commands::Encrypt(args) = app.command else { panic!("expected encrypt") };
        assert_eq!(args.input, PathBuf::from("a.txt"));
        assert_eq!(args.output, Some(PathBuf::from("a.aes")));
        assert_eq!(args.key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_parse_decrypt_defaults() {
        let app = App::try_parse_from(["aescrypt2", "decrypt", "a.aes"]).unwrap();
        assert_eq!(app.level(), Level::WARN);

        let Commands::Decrypt(args) = app.command else { panic!("expected decrypt") };
        assert!(args.output.is_none());
        assert!(args.key.is_none());
    }

    #[test]
    fn test_input_is_required() {
        assert!(App::try_parse_from(["aescrypt2", "encrypt"]).is_err());
        assert!(App::try_parse_from(["aescrypt2"]).is_err());
    }
}
