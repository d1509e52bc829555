mod archive;

use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, delete, get, middleware, post, put, web};

use serde::{Deserialize, Serialize};

use ejp_gen_core::engine::generator::Generator;
use ejp_gen_core::engine::prediction_input::{Method, PredictionInput};

use crate::archive::{
	Archive, BulkPayload, DEFAULT_HISTORY_LIMIT, DrawPayload, MatchBreakdown,
	PredictionPayload, match_breakdown,
};

/// Where the archive is persisted between runs.
const ARCHIVE_PATH: &str = "./data/archive.bin";

/// Upper bound on sets per generation request.
const MAX_SETS: usize = 20;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	method: Option<String>, // statistical (default), ml_ensemble, quantum, neural or consensus
	sets: Option<usize>,
	seed: Option<String>,
}

#[derive(Deserialize)]
struct HistoryQuery {
	limit: Option<usize>,
}

struct SharedData {
	archive: Archive,
	generator: Generator,
}

/// Hit counts of one prediction against the latest archived draw.
#[derive(Serialize)]
struct PredictionScore {
	latest_match: MatchBreakdown,
}

/// One stored prediction scored against the latest archived draw.
#[derive(Serialize)]
struct PredictionView {
	id: u64,
	main: Vec<u8>,
	euro: Vec<u8>,
	seed: Option<String>,
	method: String,
	created_at: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	matched: Option<PredictionScore>,
}

#[derive(Serialize)]
struct MatchedPrediction {
	id: u64,
	matches: MatchBreakdown,
}

#[derive(Serialize)]
struct LatestInsights {
	has_latest: bool,
	latest_date: Option<String>,
	matched_predictions: Vec<MatchedPrediction>,
}

/// Writes the archive to disk after a mutation.
fn persist(shared_data: &SharedData) -> Result<(), HttpResponse> {
	if let Err(e) = shared_data.archive.save(ARCHIVE_PATH) {
		log::error!("Failed to persist archive to {ARCHIVE_PATH}: {e}");
		return Err(HttpResponse::InternalServerError().body("Failed to persist archive"));
	}
	Ok(())
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates prediction sets from query parameters and returns them as a
/// JSON array of `{main, euro}` objects in emission order. Requests with
/// a seed are reproducible; requests without one are not.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let method: Method = match query.method.as_deref().unwrap_or("statistical").parse() {
		Ok(method) => method,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let sets = query.sets.unwrap_or(1);
	if sets == 0 || sets > MAX_SETS {
		return HttpResponse::BadRequest().body(format!("Sets must be between 1 and {MAX_SETS}"));
	}

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Archive lock failed"),
	};

	let input = PredictionInput { method, sets, seed: query.seed.clone() };
	match shared_data.generator.predict(&input) {
		Ok(result) => HttpResponse::Ok().json(result),
		Err(e) => HttpResponse::BadRequest().body(e),
	}
}

/// HTTP GET endpoint `/v1/draws`
///
/// Returns archived draws newest-first, capped at `limit` (default 300).
#[get("/v1/draws")]
async fn get_draws(data: web::Data<Mutex<SharedData>>, query: web::Query<HistoryQuery>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Archive lock failed"),
	};

	let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
	HttpResponse::Ok().json(shared_data.archive.history(limit))
}

#[post("/v1/draws")]
async fn post_draw(data: web::Data<Mutex<SharedData>>, payload: web::Json<DrawPayload>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Archive lock failed"),
	};

	let draw = match shared_data.archive.add_draw(&payload) {
		Ok(draw) => draw,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	if let Err(response) = persist(&shared_data) {
		return response;
	}

	log::info!("Archived draw {} ({})", draw.id, draw.date);
	HttpResponse::Ok().json(draw)
}

/// HTTP POST endpoint `/v1/draws/bulk`
///
/// Imports draws from one of three formats (`csv`, `json` or `text`) and
/// reports how many rows were imported and how many were skipped.
#[post("/v1/draws/bulk")]
async fn post_draws_bulk(data: web::Data<Mutex<SharedData>>, payload: web::Json<BulkPayload>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Archive lock failed"),
	};

	let report = match shared_data.archive.import_bulk(&payload) {
		Ok(report) => report,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	if let Err(response) = persist(&shared_data) {
		return response;
	}

	log::info!("Bulk import: {} rows imported, {} skipped", report.imported, report.skipped);
	HttpResponse::Ok().json(report)
}

#[put("/v1/draws/{id}")]
async fn put_draw(
	data: web::Data<Mutex<SharedData>>,
	path: web::Path<u64>,
	payload: web::Json<DrawPayload>,
) -> impl Responder {
	let id = path.into_inner();
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Archive lock failed"),
	};

	if !shared_data.archive.draws().iter().any(|d| d.id == id) {
		return HttpResponse::NotFound().body(format!("Draw {id} not found"));
	}
	let draw = match shared_data.archive.update_draw(id, &payload) {
		Ok(draw) => draw,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	if let Err(response) = persist(&shared_data) {
		return response;
	}

	HttpResponse::Ok().json(draw)
}

#[delete("/v1/draws/{id}")]
async fn delete_draw(data: web::Data<Mutex<SharedData>>, path: web::Path<u64>) -> impl Responder {
	let id = path.into_inner();
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Archive lock failed"),
	};

	if let Err(e) = shared_data.archive.remove_draw(id) {
		return HttpResponse::NotFound().body(e);
	}
	if let Err(response) = persist(&shared_data) {
		return response;
	}

	HttpResponse::Ok().body("Draw deleted")
}

#[delete("/v1/draws")]
async fn delete_draws(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Archive lock failed"),
	};

	let removed = shared_data.archive.clear_draws();
	if let Err(response) = persist(&shared_data) {
		return response;
	}

	log::info!("Cleared {removed} archived draws");
	HttpResponse::Ok().body(format!("Removed {removed} draws"))
}

/// HTTP GET endpoint `/v1/predictions`
///
/// Returns every stored prediction as a JSON array, each scored against
/// the latest archived draw (`matched` is left out while the archive is
/// empty).
#[get("/v1/predictions")]
async fn get_predictions(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Archive lock failed"),
	};

	let latest_draw = shared_data.archive.latest_draw().cloned();
	let predictions: Vec<PredictionView> = shared_data
		.archive
		.predictions()
		.iter()
		.map(|p| PredictionView {
			id: p.id,
			main: p.main.clone(),
			euro: p.euro.clone(),
			seed: p.seed.clone(),
			method: p.method.clone(),
			created_at: p.created_at.clone(),
			matched: latest_draw
				.as_ref()
				.map(|draw| PredictionScore { latest_match: match_breakdown(&p.main, &p.euro, draw) }),
		})
		.collect();

	HttpResponse::Ok().json(predictions)
}

#[post("/v1/predictions")]
async fn post_prediction(data: web::Data<Mutex<SharedData>>, payload: web::Json<PredictionPayload>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Archive lock failed"),
	};

	let created_at = chrono::Utc::now().to_rfc3339();
	let prediction = match shared_data.archive.add_prediction(&payload, created_at) {
		Ok(prediction) => prediction,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	if let Err(response) = persist(&shared_data) {
		return response;
	}

	log::info!("Stored prediction {} ({})", prediction.id, prediction.method);
	HttpResponse::Ok().json(prediction)
}

#[delete("/v1/predictions")]
async fn delete_predictions(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Archive lock failed"),
	};

	let removed = shared_data.archive.clear_predictions();
	if let Err(response) = persist(&shared_data) {
		return response;
	}

	HttpResponse::Ok().body(format!("Removed {removed} stored predictions"))
}

/// HTTP GET endpoint `/v1/insights/latest`
///
/// Summarizes the latest archived draw and lists the stored predictions
/// sharing at least one number with it.
#[get("/v1/insights/latest")]
async fn get_latest_insights(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Archive lock failed"),
	};

	let response = match shared_data.archive.latest_draw() {
		Some(draw) => LatestInsights {
			has_latest: true,
			latest_date: Some(draw.date.clone()),
			matched_predictions: shared_data
				.archive
				.matched_predictions(draw)
				.into_iter()
				.map(|(id, matches)| MatchedPrediction { id, matches })
				.collect(),
		},
		None => LatestInsights { has_latest: false, latest_date: None, matched_predictions: Vec::new() },
	};
	HttpResponse::Ok().json(response)
}

/// Main entry point for the server.
///
/// Loads the persisted archive, wraps it (together with the prediction
/// generator) in a `Mutex` for thread safety, and starts an Actix-web
/// HTTP server with the generation, archive and insight endpoints.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - A missing or unreadable archive file starts the server empty.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let archive = match Archive::load(ARCHIVE_PATH) {
		Ok(archive) => archive,
		Err(e) => {
			log::warn!("Could not load archive from {ARCHIVE_PATH}: {e}; starting empty");
			Archive::default()
		}
	};
	log::info!(
		"Archive ready: {} draws, {} stored predictions",
		archive.draws().len(),
		archive.predictions().len()
	);

	let shared_data = SharedData { archive, generator: Generator::new() };
	let shared_archive = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.app_data(shared_archive.clone())
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.service(get_generated)
			.service(get_draws)
			.service(post_draw)
			.service(post_draws_bulk)
			.service(put_draw)
			.service(delete_draw)
			.service(delete_draws)
			.service(get_predictions)
			.service(post_prediction)
			.service(delete_predictions)
			.service(get_latest_insights)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn prediction_views_carry_matched_only_when_scored() {
		let view = PredictionView {
			id: 1,
			main: vec![3, 8, 17, 29, 50],
			euro: vec![4, 12],
			seed: None,
			method: "statistical".to_owned(),
			created_at: "2026-01-03T10:00:00+00:00".to_owned(),
			matched: None,
		};
		let body = serde_json::to_string(&view).unwrap();
		assert!(!body.contains("\"matched\""));

		let scored = PredictionView {
			matched: Some(PredictionScore {
				latest_match: MatchBreakdown { main: 2, euro: 1, total: 3 },
			}),
			..view
		};
		let body = serde_json::to_string(&scored).unwrap();
		assert!(body.contains("\"matched\":{\"latest_match\":{\"main\":2,\"euro\":1,\"total\":3}}"));
	}
}
