mod cli;

use clap::CommandFactory;
use clap_complete::generate;
use cli::*;
use std::{error::Error, fs, io, path::PathBuf};
use steg_core::{detect, embed, error::StegError, extract, Secret};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Embed {
            container,
            output,
            passphrase,
            file,
            text,
        } => {
            let cover =
                fs::read(&container).map_err(|e| format!("Failed to read container: {}", e))?;

            let secret = match (file, text) {
                (Some(path), None) => {
                    let bytes = fs::read(&path)
                        .map_err(|e| format!("Failed to read secret file: {}", e))?;
                    let filename = path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("secret.bin")
                        .to_string();
                    Secret::File(bytes, filename)
                }
                (None, Some(text)) => Secret::Text(text),
                _ => return Err(StegError::InputMissing.into()),
            };

            let (embedded, metrics) = embed(&cover, &passphrase, secret)?;

            fs::write(&output, embedded).map_err(|e| format!("Failed to write output: {}", e))?;
            log::info!(
                "embedded {} of {} available bytes (psnr {:.2} dB)",
                metrics.used_bytes,
                metrics.capacity_bytes,
                metrics.psnr
            );
        }
        Commands::Extract {
            container,
            passphrase,
            output,
        } => {
            let container =
                fs::read(container).map_err(|e| format!("Failed to read container: {}", e))?;

            let (data, filename, verified, hash) = extract(&container, &passphrase)?;
            if !verified {
                log::warn!("checksum mismatch: recovered data does not match hash {}", hash);
            }

            let output = output.unwrap_or_else(|| PathBuf::from(filename));
            fs::write(&output, data).map_err(|e| format!("Failed to write output: {}", e))?;
        }
        Commands::Detect { container } => {
            let bytes = fs::read(container).map_err(|e| format!("Failed to read image: {}", e))?;
            let (score, label) = detect(&bytes)?;
            println!("{:.4}\t{}", score, label);
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();

            generate(shell, &mut cmd, bin_name, &mut io::stdout());
        }
    }

    Ok(())
}
