//! Thin CLI shell around the Playfair cipher engine.
//!
//! All cipher logic lives in the library; this binary only parses arguments,
//! reads input from a flag or a file, calls the core operations, and prints
//! or writes the result. Core errors surface here as messages and a non-zero
//! exit code.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;

use playfair::{
    decrypt_with_trace, encrypt_with_trace, heuristic_clean, KeyMatrix, DEFAULT_PAD,
};

#[derive(Parser, Debug)]
#[command(name = "playfair", version, about = "Playfair cipher CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encrypt plaintext
    Encrypt {
        #[command(flatten)]
        io: IoArgs,
        /// Pad letter inserted for odd length and doubled letters
        #[arg(long, default_value_t = DEFAULT_PAD)]
        pad: char,
    },
    /// Decrypt ciphertext
    Decrypt {
        #[command(flatten)]
        io: IoArgs,
        /// Also show a heuristic de-padded rendering (best effort, may
        /// corrupt legitimate repeated letters)
        #[arg(long)]
        clean: bool,
    },
}

/// Input/output flags shared by both subcommands.
#[derive(Args, Debug)]
struct IoArgs {
    /// Keyword for the key matrix
    #[arg(long, short)]
    key: String,
    /// Text to process (mutually exclusive with --infile)
    #[arg(long, short, conflicts_with = "infile")]
    text: Option<String>,
    /// Read input from a file
    #[arg(long, short)]
    infile: Option<PathBuf>,
    /// Write the result to a file instead of stdout
    #[arg(long, short)]
    outfile: Option<PathBuf>,
    /// Display the generated key matrix
    #[arg(long)]
    show_matrix: bool,
    /// Print one trace line per digraph transformation
    #[arg(long)]
    trace: bool,
}

impl IoArgs {
    fn read_input(&self) -> Result<String> {
        if let Some(path) = &self.infile {
            return fs::read_to_string(path)
                .with_context(|| format!("Failed to read input from {}", path.display()));
        }
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => bail!("Provide input via --text or --infile"),
        }
    }

    fn show_matrix_if_requested(&self) {
        if self.show_matrix {
            println!("Key matrix:");
            println!("{}\n", KeyMatrix::from_keyword(&self.key));
        }
    }

    fn emit(&self, label: &str, result: &str) -> Result<()> {
        match &self.outfile {
            Some(path) => {
                fs::write(path, result)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                println!("{} written to {}", label, path.display());
            }
            None => {
                println!("{}:", label);
                println!("{}", result);
            }
        }
        Ok(())
    }
}

fn print_trace(lines: &[playfair::TraceLine]) {
    for line in lines {
        println!("{}", line);
    }
    println!();
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt { io, pad } => {
            let plaintext = io.read_input()?;
            io.show_matrix_if_requested();
            let (ciphertext, trace) = encrypt_with_trace(&io.key, &plaintext, pad)
                .context("Encryption failed")?;
            debug!("encrypted {} digraphs", trace.len());
            if io.trace {
                print_trace(&trace);
            }
            io.emit("Ciphertext", &ciphertext)?;
        }
        Commands::Decrypt { io, clean } => {
            let ciphertext = io.read_input()?;
            io.show_matrix_if_requested();
            let (raw, trace) =
                decrypt_with_trace(&io.key, &ciphertext).context("Decryption failed")?;
            debug!("decrypted {} digraphs", trace.len());
            if io.trace {
                print_trace(&trace);
            }
            io.emit("Decrypted (raw, includes pads)", &raw)?;
            if clean {
                println!("Heuristic cleaned:");
                println!("{}", heuristic_clean(&raw));
            }
        }
    }
    Ok(())
}
