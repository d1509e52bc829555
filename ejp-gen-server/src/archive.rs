use std::path::Path;
use std::sync::mpsc;
use std::thread;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ejp_gen_core::engine::result_set::{EURO_PICKS, EURO_POOL, MAIN_PICKS, MAIN_POOL};

/// How many draws `history` returns when the caller gives no limit.
pub(crate) const DEFAULT_HISTORY_LIMIT: usize = 300;

/// One archived draw.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Draw {
	pub(crate) id: u64,
	/// ISO date (`YYYY-MM-DD`); zero-padded, so string order is date order.
	pub(crate) date: String,
	/// 5 distinct main numbers, stored ascending.
	pub(crate) main: Vec<u8>,
	/// 2 distinct euro numbers, stored ascending.
	pub(crate) euro: Vec<u8>,
}

/// One stored prediction together with its generation context.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct StoredPrediction {
	pub(crate) id: u64,
	pub(crate) main: Vec<u8>,
	pub(crate) euro: Vec<u8>,
	pub(crate) seed: Option<String>,
	pub(crate) method: String,
	pub(crate) created_at: String,
}

/// Hit counts of one prediction against one draw.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MatchBreakdown {
	pub(crate) main: usize,
	pub(crate) euro: usize,
	pub(crate) total: usize,
}

/// Payload for creating or updating one draw.
#[derive(Deserialize, Clone, Debug)]
pub(crate) struct DrawPayload {
	pub(crate) date: String,
	pub(crate) main: Vec<u8>,
	pub(crate) euro: Vec<u8>,
}

/// Payload for storing one prediction.
#[derive(Deserialize)]
pub(crate) struct PredictionPayload {
	pub(crate) main: Vec<u8>,
	pub(crate) euro: Vec<u8>,
	pub(crate) seed: Option<String>,
	pub(crate) method: String,
}

/// Bulk import payload; every provided format contributes rows.
///
/// - `csv`: lines of `date, m1, m2, m3, m4, m5, e1, e2` (header allowed)
/// - `json`: an array of `{date, main, euro}` objects
/// - `text`: lines of `YYYY-MM-DD; m1 m2 m3 m4 m5; e1 e2`
#[derive(Deserialize)]
pub(crate) struct BulkPayload {
	pub(crate) csv: Option<String>,
	pub(crate) json: Option<Vec<DrawPayload>>,
	pub(crate) text: Option<String>,
}

/// Outcome of one bulk import: accepted rows and rejected rows.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub(crate) struct BulkReport {
	pub(crate) imported: usize,
	pub(crate) skipped: usize,
}

/// Counts one prediction's hits against one draw.
pub(crate) fn match_breakdown(main: &[u8], euro: &[u8], draw: &Draw) -> MatchBreakdown {
	let main = main.iter().filter(|n| draw.main.contains(n)).count();
	let euro = euro.iter().filter(|n| draw.euro.contains(n)).count();
	MatchBreakdown { main, euro, total: main + euro }
}

/// Checks count, range and distinctness of one pick list; returns the
/// picks sorted ascending.
fn normalize_picks(values: &[u8], expected: usize, pool: usize, label: &str) -> Result<Vec<u8>, String> {
	if values.len() != expected {
		return Err(format!("Expected {expected} {label} numbers, got {}", values.len()));
	}

	let mut sorted = values.to_vec();
	sorted.sort_unstable();
	sorted.dedup();
	if sorted.len() != expected {
		return Err(format!("Duplicate {label} numbers"));
	}
	if let Some(bad) = sorted.iter().find(|n| !(1..=pool as u8).contains(*n)) {
		return Err(format!("{label} number {bad} out of range 1..={pool}"));
	}

	Ok(sorted)
}

/// Validates one draw payload and returns its normalized parts.
///
/// The date must be zero-padded `YYYY-MM-DD`: chrono also parses
/// unpadded fields and signed years, so the parsed date is rendered
/// back and compared against the input. Duplicate detection and
/// newest-first ordering compare dates as strings.
fn validate_draw(payload: &DrawPayload) -> Result<(String, Vec<u8>, Vec<u8>), String> {
	let date = payload.date.trim();
	let canonical = NaiveDate::parse_from_str(date, "%Y-%m-%d")
		.map(|parsed| parsed.format("%Y-%m-%d").to_string())
		.ok();
	if canonical.as_deref() != Some(date) {
		return Err(format!("Invalid date '{}', expected YYYY-MM-DD", payload.date));
	}
	let main = normalize_picks(&payload.main, MAIN_PICKS, MAIN_POOL, "main")?;
	let euro = normalize_picks(&payload.euro, EURO_PICKS, EURO_POOL, "euro")?;
	Ok((date.to_owned(), main, euro))
}

/// Parses one `date, m1, m2, m3, m4, m5, e1, e2` line.
fn parse_csv_line(line: &str) -> Option<DrawPayload> {
	let fields: Vec<&str> = line.split(',').map(str::trim).collect();
	if fields.len() != 8 {
		return None;
	}
	let main: Vec<u8> = fields[1..6].iter().filter_map(|f| f.parse().ok()).collect();
	let euro: Vec<u8> = fields[6..8].iter().filter_map(|f| f.parse().ok()).collect();
	if main.len() != MAIN_PICKS || euro.len() != EURO_PICKS {
		return None;
	}
	Some(DrawPayload { date: fields[0].to_owned(), main, euro })
}

/// Parses one `YYYY-MM-DD; m1 m2 m3 m4 m5; e1 e2` line.
fn parse_text_line(line: &str) -> Option<DrawPayload> {
	let parts: Vec<&str> = line.split(';').map(str::trim).collect();
	if parts.len() != 3 {
		return None;
	}
	let main: Vec<u8> = parts[1].split_whitespace().filter_map(|f| f.parse().ok()).collect();
	let euro: Vec<u8> = parts[2].split_whitespace().filter_map(|f| f.parse().ok()).collect();
	if main.len() != MAIN_PICKS || euro.len() != EURO_PICKS {
		return None;
	}
	Some(DrawPayload { date: parts[0].to_owned(), main, euro })
}

/// Parses line-oriented bulk input on worker threads.
///
/// # Behavior
/// - Splits the lines into chunks (CPU cores * factor) and parses each
///   chunk on its own thread
/// - Chunks come back over an MPSC channel tagged with their index and
///   are reassembled in input order, so import order and row numbering
///   never depend on thread scheduling
/// - Unparsable lines come back as `None` so the caller can count them
fn parse_lines(lines: Vec<String>, parse: fn(&str) -> Option<DrawPayload>) -> Vec<Option<DrawPayload>> {
	if lines.is_empty() {
		return Vec::new();
	}

	let cpus = num_cpus::get();
	let factor = 8;
	let chunks = cpus * factor;
	let chunk_size = (lines.len() + chunks - 1) / chunks;

	let (tx, rx) = mpsc::channel();
	for (index, chunk) in lines.chunks(chunk_size).enumerate() {
		let tx = tx.clone();
		let chunk: Vec<String> = chunk.to_vec();

		thread::spawn(move || {
			let parsed: Vec<Option<DrawPayload>> = chunk.iter().map(|line| parse(line)).collect();
			tx.send((index, parsed)).expect("Failed to send from thread");
		});
	}
	drop(tx);

	let mut tagged: Vec<(usize, Vec<Option<DrawPayload>>)> = rx.iter().collect();
	tagged.sort_by_key(|(index, _)| *index);
	tagged.into_iter().flat_map(|(_, parsed)| parsed).collect()
}

/// The persistent draw and prediction store behind the HTTP endpoints.
///
/// # Responsibilities
/// - Validate and hold archived draws (unique per date) and stored
///   predictions
/// - Import draws in bulk from CSV, JSON or semicolon text
/// - Serialize the whole store to disk with `postcard`
///
/// # Invariants
/// - Every held draw and prediction passed `validate_draw` /
///   `normalize_picks`; pick lists are stored ascending
/// - At most one draw per date
#[derive(Serialize, Deserialize, Default)]
pub(crate) struct Archive {
	draws: Vec<Draw>,
	predictions: Vec<StoredPrediction>,
}

impl Archive {
	/// Loads an archive from `path`, or returns an empty one if the file
	/// does not exist yet.
	pub(crate) fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
		let path = path.as_ref();
		if !path.exists() {
			return Ok(Self::default());
		}
		let bytes = std::fs::read(path)?;
		Ok(postcard::from_bytes(&bytes)?)
	}

	/// Serializes the archive to `path`, creating parent directories as
	/// needed.
	pub(crate) fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
		let path = path.as_ref();
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		let bytes = postcard::to_stdvec(self)?;
		std::fs::write(path, bytes)?;
		Ok(())
	}

	pub(crate) fn draws(&self) -> &[Draw] {
		&self.draws
	}

	pub(crate) fn predictions(&self) -> &[StoredPrediction] {
		&self.predictions
	}

	/// Draws sorted newest-first (date, then id), capped at `limit`.
	pub(crate) fn history(&self, limit: usize) -> Vec<Draw> {
		let mut sorted = self.draws.clone();
		sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
		sorted.truncate(limit);
		sorted
	}

	/// The most recent draw (latest date, highest id on equal dates).
	pub(crate) fn latest_draw(&self) -> Option<&Draw> {
		self.draws.iter().max_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)))
	}

	/// Ids and hit counts of stored predictions sharing at least one
	/// number with `draw`, in storage order.
	pub(crate) fn matched_predictions(&self, draw: &Draw) -> Vec<(u64, MatchBreakdown)> {
		self.predictions
			.iter()
			.map(|p| (p.id, match_breakdown(&p.main, &p.euro, draw)))
			.filter(|(_, breakdown)| breakdown.total > 0)
			.collect()
	}

	fn next_draw_id(&self) -> u64 {
		self.draws.iter().map(|d| d.id).max().unwrap_or(0) + 1
	}

	fn next_prediction_id(&self) -> u64 {
		self.predictions.iter().map(|p| p.id).max().unwrap_or(0) + 1
	}

	/// Validates and inserts one draw.
	///
	/// # Errors
	/// Returns an error on malformed payloads and on dates that are
	/// already archived.
	pub(crate) fn add_draw(&mut self, payload: &DrawPayload) -> Result<Draw, String> {
		let (date, main, euro) = validate_draw(payload)?;
		if self.draws.iter().any(|d| d.date == date) {
			return Err(format!("A draw for {date} already exists"));
		}

		let draw = Draw { id: self.next_draw_id(), date, main, euro };
		self.draws.push(draw.clone());
		Ok(draw)
	}

	/// Validates and replaces the draw with `id`.
	///
	/// # Errors
	/// Returns an error on malformed payloads, unknown ids, and dates
	/// already taken by another draw.
	pub(crate) fn update_draw(&mut self, id: u64, payload: &DrawPayload) -> Result<Draw, String> {
		let (date, main, euro) = validate_draw(payload)?;
		if self.draws.iter().any(|d| d.date == date && d.id != id) {
			return Err(format!("A draw for {date} already exists"));
		}

		match self.draws.iter_mut().find(|d| d.id == id) {
			Some(draw) => {
				draw.date = date;
				draw.main = main;
				draw.euro = euro;
				Ok(draw.clone())
			}
			None => Err(format!("Draw {id} not found")),
		}
	}

	/// Removes the draw with `id`.
	pub(crate) fn remove_draw(&mut self, id: u64) -> Result<(), String> {
		let before = self.draws.len();
		self.draws.retain(|d| d.id != id);
		if self.draws.len() == before {
			return Err(format!("Draw {id} not found"));
		}
		Ok(())
	}

	/// Removes every draw; stored predictions stay.
	pub(crate) fn clear_draws(&mut self) -> usize {
		let removed = self.draws.len();
		self.draws.clear();
		removed
	}

	/// Imports draws from one bulk payload.
	///
	/// # Behavior
	/// - Every provided format contributes rows: csv first, then json,
	///   then text
	/// - Rows are processed in input order; every row that fails to
	///   parse, fails validation or collides with an archived date is
	///   counted as skipped, the rest import
	///
	/// # Errors
	/// Returns an error when no format is provided.
	pub(crate) fn import_bulk(&mut self, payload: &BulkPayload) -> Result<BulkReport, String> {
		if payload.csv.is_none() && payload.json.is_none() && payload.text.is_none() {
			return Err("Provide at least one of csv, json or text".to_owned());
		}

		let mut rows: Vec<Option<DrawPayload>> = Vec::new();
		if let Some(csv) = &payload.csv {
			let lines: Vec<String> = csv
				.lines()
				.map(str::trim)
				.filter(|line| !line.is_empty() && !line.to_lowercase().starts_with("date"))
				.map(str::to_owned)
				.collect();
			rows.extend(parse_lines(lines, parse_csv_line));
		}
		if let Some(json) = &payload.json {
			rows.extend(json.iter().cloned().map(Some));
		}
		if let Some(text) = &payload.text {
			let lines: Vec<String> = text
				.lines()
				.map(str::trim)
				.filter(|line| !line.is_empty())
				.map(str::to_owned)
				.collect();
			rows.extend(parse_lines(lines, parse_text_line));
		}

		let mut report = BulkReport { imported: 0, skipped: 0 };
		for row in rows {
			let accepted = match row {
				Some(draw) => self.add_draw(&draw).is_ok(),
				None => false,
			};
			if accepted {
				report.imported += 1;
			} else {
				report.skipped += 1;
			}
		}
		Ok(report)
	}

	/// Validates and stores one prediction.
	pub(crate) fn add_prediction(
		&mut self,
		payload: &PredictionPayload,
		created_at: String,
	) -> Result<StoredPrediction, String> {
		use std::str::FromStr;
		ejp_gen_core::engine::prediction_input::Method::from_str(&payload.method)?;

		let main = normalize_picks(&payload.main, MAIN_PICKS, MAIN_POOL, "main")?;
		let euro = normalize_picks(&payload.euro, EURO_PICKS, EURO_POOL, "euro")?;
		let seed = payload.seed.as_deref().filter(|s| !s.is_empty()).map(str::to_owned);

		let prediction = StoredPrediction {
			id: self.next_prediction_id(),
			main,
			euro,
			seed,
			method: payload.method.clone(),
			created_at,
		};
		self.predictions.push(prediction.clone());
		Ok(prediction)
	}

	/// Removes every stored prediction.
	pub(crate) fn clear_predictions(&mut self) -> usize {
		let removed = self.predictions.len();
		self.predictions.clear();
		removed
	}
}
