use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::info;

use rs_markov_core::model::options::DEFAULT_SEED;
use rs_markov_core::{LanguageModel, ModelOptions};

/// Trains a character n-gram model on a corpus file and prints generated text.
#[derive(Parser, Debug)]
#[command(name = "rs-markov", version, about, long_about = None)]
struct Cli {
	/// Number of characters in each context.
	window_length: usize,

	/// Text generation starts from (must be at least `window_length` chars to grow).
	seed_text: String,

	/// Length of the generated text, in characters, seed included.
	target_length: usize,

	/// `random` for a different text on every run, anything else for a fixed seed.
	mode: String,

	/// Corpus to learn from.
	corpus_file: PathBuf,

	/// Random seed used when mode is not `random`.
	#[arg(long, default_value_t = DEFAULT_SEED)]
	seed: u64,

	/// Print the learned table to stderr before generating.
	#[arg(long)]
	dump: bool,

	/// Increase log verbosity (-v, -vv).
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

impl Cli {
	/// Model options selected by the command line.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	fn model_options(&self) -> rs_markov_core::Result<ModelOptions> {
		let options = ModelOptions::new(self.window_length)?;
		if self.mode == "random" {
			Ok(options)
		} else {
			Ok(options.with_seed(self.seed))
		}
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let cli = Cli::parse();

	let level = match cli.verbose {
		0 => "warn",
		1 => "debug",
		_ => "trace",
	};
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

	let mut model = LanguageModel::from_options(cli.model_options()?);
	model.train_file(&cli.corpus_file)?;
	info!("{} contexts learned", model.table().len());

	if cli.dump {
		eprint!("{}", model);
	}

	println!("{}", model.generate(&cli.seed_text, cli.target_length));
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> Cli {
		Cli::try_parse_from(std::iter::once("rs-markov").chain(args.iter().copied())).unwrap()
	}

	#[test]
	fn positional_arguments_in_order() {
		let cli = parse(&["3", "the", "100", "fixed", "corpus.txt"]);
		assert_eq!(cli.window_length, 3);
		assert_eq!(cli.seed_text, "the");
		assert_eq!(cli.target_length, 100);
		assert_eq!(cli.corpus_file, PathBuf::from("corpus.txt"));
		assert!(!cli.dump);
	}

	#[test]
	fn random_mode_is_unseeded() {
		let cli = parse(&["3", "the", "100", "random", "corpus.txt"]);
		assert_eq!(cli.model_options().unwrap().seed, None);
	}

	#[test]
	fn other_modes_use_the_fixed_seed() {
		let cli = parse(&["3", "the", "100", "anything", "corpus.txt"]);
		assert_eq!(cli.model_options().unwrap().seed, Some(DEFAULT_SEED));

		let cli = parse(&["3", "the", "100", "fixed", "corpus.txt", "--seed", "7"]);
		assert_eq!(cli.model_options().unwrap().seed, Some(7));
	}

	#[test]
	fn zero_window_is_rejected() {
		let cli = parse(&["0", "the", "100", "fixed", "corpus.txt"]);
		assert!(cli.model_options().is_err());
	}

	#[test]
	fn missing_arguments_fail_to_parse() {
		assert!(Cli::try_parse_from(["rs-markov", "3", "the"]).is_err());
		assert!(Cli::try_parse_from(["rs-markov", "x", "the", "10", "random", "c.txt"]).is_err());
	}
}
