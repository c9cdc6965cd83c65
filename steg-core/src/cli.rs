use std::path::PathBuf;

pub use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(version, about, long_about)]
/// The command-line interface for the adaptive LSB steganography tool.
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Embed a secret into a cover image.
    Embed {
        /// The cover image file.
        container: PathBuf,

        /// The output file for the stego image.
        #[arg(short, long, default_value = "embedded.png")]
        output: PathBuf,

        /// The passphrase used to derive the encryption key and pixel order.
        #[arg(short, long)]
        passphrase: String,

        /// A file to embed as the secret. Mutually exclusive with `--text`.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Literal text to embed as the secret. Mutually exclusive with `--file`.
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
    },

    /// Extract a secret from a stego image.
    Extract {
        /// The stego image file.
        container: PathBuf,

        /// The passphrase used to derive the encryption key and pixel order.
        #[arg(short, long)]
        passphrase: String,

        /// The output file for the extracted secret. Defaults to the
        /// filename recorded in the image at embed time.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score an image for LSB-plane statistical anomalies.
    Detect {
        /// The image file to analyze.
        container: PathBuf,
    },

    /// Generate shell completions for the CLI.
    Completion {
        /// The shell to generate completions for.
        shell: Shell,
    },
}
