use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use log::debug;

use cyrillic_caesar::{analyze_files, cipher_file, report, Mode, Result, ShiftKey};

/// Command-line arguments for the Cyrillic Caesar cipher program.
#[derive(Parser, Debug)]
#[command(
    name = "cyrillic_caesar",
    version,
    about = "Caesar's cipher and frequency analysis for the 33-letter Cyrillic alphabet",
    group(ArgGroup::new("operation").required(true).args(["encode", "decode", "frequency"]))
)]
struct Cli {
    /// Encode the file; the result is written to "encoded_<file>"
    #[arg(short, long, value_name = "FILE")]
    encode: Option<PathBuf>,

    /// Decode the file; the result is written to "decoded_<file>"
    #[arg(short, long, value_name = "FILE")]
    decode: Option<PathBuf>,

    /// Compare letter frequencies of an encoded file and a reference file
    #[arg(short, long, num_args = 2, value_names = ["ENCODED_FILE", "REFERENCE_FILE"])]
    frequency: Option<Vec<PathBuf>>,

    /// Shift key, an integer in [-32; 32]
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        value_parser = parse_key,
        required_unless_present = "frequency",
        conflicts_with = "frequency"
    )]
    key: Option<ShiftKey>,

    /// Write the result here instead of next to the input file
    #[arg(short, long, value_name = "OUTPUT", conflicts_with = "frequency")]
    output: Option<PathBuf>,

    /// Also print the key that lines up the two most frequent letters
    #[arg(long, requires = "frequency")]
    suggest_key: bool,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// What a single run does, decoded from the flags.
enum Operation<'a> {
    Cipher {
        input: &'a Path,
        key: ShiftKey,
        mode: Mode,
    },
    Analyze {
        encoded: &'a Path,
        reference: &'a Path,
    },
}

impl Cli {
    fn operation(&self) -> Option<Operation<'_>> {
        if let Some(paths) = &self.frequency {
            return match paths.as_slice() {
                [encoded, reference] => Some(Operation::Analyze { encoded, reference }),
                _ => None,
            };
        }
        let (input, mode) = match (&self.encode, &self.decode) {
            (Some(input), None) => (input, Mode::Encode),
            (None, Some(input)) => (input, Mode::Decode),
            _ => return None,
        };
        Some(Operation::Cipher {
            input,
            key: self.key?,
            mode,
        })
    }
}

fn parse_key(token: &str) -> std::result::Result<ShiftKey, String> {
    token.parse::<ShiftKey>().map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Main entry point for the Cyrillic Caesar program.
fn main() {
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(operation) = cli.operation() else {
        Cli::command()
            .error(ErrorKind::MissingRequiredArgument, "expected one of -e, -d or -f")
            .exit()
    };

    if let Err(e) = run(operation, cli.output.as_deref(), cli.suggest_key) {
        eprintln!("{}", report::error(&e.to_string()));
        std::process::exit(1);
    }
}

fn run(operation: Operation<'_>, output: Option<&Path>, suggest_key: bool) -> Result<()> {
    match operation {
        Operation::Cipher { input, key, mode } => {
            debug!("Running {} on {}", mode, input.display());
            let outcome = cipher_file(input, key, mode, output, |warning| {
                eprintln!("{}", report::warning(&warning))
            })?;
            println!("{}", report::success(&outcome.output));
        }
        Operation::Analyze { encoded, reference } => {
            let comparison = analyze_files(encoded, reference)?;
            print!("{}", report::frequency_table(&comparison));
            if suggest_key {
                println!("{}", report::suggested_key(&comparison));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("cyrillic_caesar").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_encode_with_negative_key() {
        let cli = parse(&["-e", "text.txt", "-k", "-3"]).unwrap();
        match cli.operation() {
            Some(Operation::Cipher { input, key, mode }) => {
                assert_eq!(input, Path::new("text.txt"));
                assert_eq!(key.value(), -3);
                assert_eq!(mode, Mode::Encode);
            }
            _ => panic!("expected a cipher run"),
        }
    }

    #[test]
    fn test_frequency_takes_two_files() {
        let cli = parse(&["-f", "enc.txt", "ref.txt", "--suggest-key"]).unwrap();
        assert!(cli.suggest_key);
        assert!(matches!(cli.operation(), Some(Operation::Analyze { .. })));

        assert!(parse(&["-f", "enc.txt"]).is_err());
    }

    #[test]
    fn test_rejects_bad_invocations() {
        // out of range, not a number, missing key, two operations, key with -f
        assert!(parse(&["-d", "text.txt", "-k", "33"]).is_err());
        assert!(parse(&["-d", "text.txt", "-k", "three"]).is_err());
        assert!(parse(&["-e", "text.txt"]).is_err());
        assert!(parse(&["-e", "a.txt", "-d", "b.txt", "-k", "1"]).is_err());
        assert!(parse(&["-f", "a.txt", "b.txt", "-k", "1"]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_bad_key_is_echoed() {
        let err = parse(&["-e", "text.txt", "-k", "40"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("40"));
    }
}
