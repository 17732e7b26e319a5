use std::path::PathBuf;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{info, warn};
use serde::Deserialize;

use rs_markov_core::io::list_files;
use rs_markov_core::{LanguageModel, ModelOptions};

/// Default number of characters produced by `/v1/generate`.
const DEFAULT_LENGTH: usize = 100;

/// HTTP server generating text from a character n-gram model.
#[derive(Parser, Debug)]
#[command(name = "rs-markov-server", version, about, long_about = None)]
struct Cli {
	/// Address to bind.
	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	/// Port to bind.
	#[arg(long, default_value_t = 5000)]
	port: u16,

	/// Directory holding `.txt` corpora.
	#[arg(long, default_value = "./data")]
	data_dir: PathBuf,

	/// Number of characters in each context.
	#[arg(long, default_value_t = 4)]
	window_length: usize,

	/// Random seed; omit for a different output on every request.
	#[arg(long)]
	seed: Option<u64>,

	/// Corpora to train on at startup (comma separated, without extension).
	#[arg(long, value_delimiter = ',')]
	corpora: Vec<String>,
}

/// Settings shared by every model the server builds.
struct AppConfig {
	data_dir: PathBuf,
	options: ModelOptions,
}

/// Query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	seed: Option<String>,
	length: Option<usize>,
}

#[derive(Deserialize)]
struct CorpusQuery {
	names: Option<String>,
}

struct SharedData {
	model: LanguageModel,
	corpora: Vec<String>,
}

/// Corpus names map to files directly under the data directory.
fn is_valid_corpus_name(name: &str) -> bool {
	!name.contains(['/', '\\']) && !name.contains("..")
}

impl AppConfig {
	/// Builds a fresh model and trains it on every named corpus, in order.
	fn build_model(&self, names: &[&str]) -> Result<LanguageModel, String> {
		let mut model = LanguageModel::from_options(self.options.clone());
		for name in names {
			if !is_valid_corpus_name(name) {
				return Err(format!("Invalid corpus name: {name}"));
			}
			let path = self.data_dir.join(format!("{name}.txt"));
			model.train_file(&path).map_err(|e| format!("Failed to load corpus {name}: {e}"))?;
		}
		Ok(model)
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Extends `seed` up to `length` characters with the current model.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let seed = match &query.seed {
		Some(s) => s.as_str(),
		None => return HttpResponse::BadRequest().body("Missing seed"),
	};
	let length = query.length.unwrap_or(DEFAULT_LENGTH);

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	HttpResponse::Ok().body(shared_data.model.generate(seed, length))
}

#[get("/v1/corpora")]
async fn get_corpora(config: web::Data<AppConfig>) -> impl Responder {
	match list_files(&config.data_dir, "txt") {
		Ok(files) => {
			let names: Vec<&str> = files.iter().map(|f| f.strip_suffix(".txt").unwrap_or(f)).collect();
			HttpResponse::Ok().body(names.join("\n"))
		}
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora"),
	}
}

#[get("/v1/loaded_corpora")]
async fn get_loaded_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().body(shared_data.corpora.join("\n"))
}

#[get("/v1/model")]
async fn get_model(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().body(shared_data.model.to_string())
}

/// Frequency list of one context, as JSON.
#[get("/v1/contexts/{context}")]
async fn get_context(data: web::Data<Mutex<SharedData>>, path: web::Path<String>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	match shared_data.model.lookup(&path) {
		Some(list) => HttpResponse::Ok().json(list),
		None => HttpResponse::NotFound().body("Unknown context"),
	}
}

#[put("/v1/load_corpora")]
async fn put_corpora(
	data: web::Data<Mutex<SharedData>>,
	config: web::Data<AppConfig>,
	query: web::Query<CorpusQuery>,
) -> impl Responder {
	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};

	let names: Vec<&str> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.collect();

	if let Some(name) = names.iter().find(|name| !is_valid_corpus_name(name)) {
		return HttpResponse::BadRequest().body(format!("Invalid corpus name: {name}"));
	}

	// Train outside the lock, then swap
	let model = match config.build_model(&names) {
		Ok(m) => m,
		Err(e) => {
			warn!("{e}");
			return HttpResponse::InternalServerError().body(e);
		}
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	shared_data.model = model;
	shared_data.corpora = names.iter().map(|s| (*s).to_owned()).collect();
	info!("loaded corpora: {}", shared_data.corpora.join(", "));

	HttpResponse::Ok().body("Corpora loaded successfully")
}

/// Main entry point for the server.
///
/// Builds the initial model from `--corpora`, wraps it in a `Mutex`,
/// and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let cli = Cli::parse();

	let options = ModelOptions::new(cli.window_length)?;
	let options = match cli.seed {
		Some(seed) => options.with_seed(seed),
		None => options,
	};
	let config = AppConfig { data_dir: cli.data_dir, options };

	let names: Vec<&str> = cli.corpora.iter().map(String::as_str).collect();
	let model = config.build_model(&names)?;
	let shared_model = web::Data::new(Mutex::new(SharedData { model, corpora: cli.corpora.clone() }));
	let config = web::Data::new(config);

	info!("listening on {}:{}", cli.host, cli.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_model.clone())
			.app_data(config.clone())
			.service(get_generated)
			.service(get_corpora)
			.service(get_loaded_corpora)
			.service(get_model)
			.service(get_context)
			.service(put_corpora)
	})
		.bind((cli.host.as_str(), cli.port))?
		.run()
		.await?;

	Ok(())
}
