use clap::{Parser, Subcommand};

use skk_cli::commands::{config_ops, jisyo_ops};

#[derive(Parser)]
#[command(name = "jisyotool", about = "SKK dictionary maintenance tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a dictionary to stdout (re-encoded)
    Dump {
        /// Dictionary file (UTF-8 or EUC-JP, auto-detected)
        file: String,
        /// Write legacy EUC-JP without the coding pragma
        #[arg(long)]
        euc: bool,
    },
    /// Re-encode a dictionary file
    Convert {
        /// Input dictionary
        input: String,
        /// Output file
        output: String,
        /// Write legacy EUC-JP without the coding pragma
        #[arg(long)]
        euc: bool,
    },
    /// Look up a headword (exact match)
    Lookup {
        /// Dictionary file
        file: String,
        /// Headword (kana reading, with the okuri consonant if any)
        headword: String,
        /// Search the okuri-ari partition
        #[arg(long)]
        okuri: bool,
    },
    /// Verify that a dictionary survives a serialize/parse round-trip
    Check {
        /// Dictionary file
        file: String,
    },
    /// Export the default engine configuration as TOML
    ConfigExport,
    /// Validate a custom engine configuration file
    ConfigValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Parse a `user=PATH;SYSTEM;...` dictionary spec
    SpecShow {
        /// Spec string
        spec: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Dump { file, euc } => jisyo_ops::dump(&file, euc),
        Command::Convert { input, output, euc } => jisyo_ops::convert(&input, &output, euc),
        Command::Lookup {
            file,
            headword,
            okuri,
        } => jisyo_ops::lookup(&file, &headword, okuri),
        Command::Check { file } => jisyo_ops::check(&file),
        Command::ConfigExport => config_ops::config_export(),
        Command::ConfigValidate { file } => config_ops::config_validate(&file),
        Command::SpecShow { spec } => config_ops::spec_show(&spec),
    }
}
