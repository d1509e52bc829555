use std::time::Duration;

use eframe::{Frame, egui};
use egui::Context;

use reqwest::Result;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// How many archived draws the history panel shows.
const RECENT_DRAWS: usize = 10;

/// Generation method selection on the UI side.
/// Serialized manually to the server's wire keys.
#[derive(Debug, PartialEq, Clone, Copy)]
enum MethodChoice {
    Statistical,
    MlEnsemble,
    Quantum,
    Neural,
    Consensus,
}

impl MethodChoice {
    /// Wire key sent to the server.
    fn key(&self) -> &'static str {
        match self {
            MethodChoice::Statistical => "statistical",
            MethodChoice::MlEnsemble => "ml_ensemble",
            MethodChoice::Quantum => "quantum",
            MethodChoice::Neural => "neural",
            MethodChoice::Consensus => "consensus",
        }
    }

    /// Human-readable label for the radio buttons.
    fn label(&self) -> &'static str {
        match self {
            MethodChoice::Statistical => "Statistical",
            MethodChoice::MlEnsemble => "ML ensemble",
            MethodChoice::Quantum => "Quantum",
            MethodChoice::Neural => "Neural",
            MethodChoice::Consensus => "Consensus",
        }
    }

    const ALL: [MethodChoice; 5] = [
        MethodChoice::Statistical,
        MethodChoice::MlEnsemble,
        MethodChoice::Quantum,
        MethodChoice::Neural,
        MethodChoice::Consensus,
    ];
}

/// Paste format selection for the bulk import box.
#[derive(Debug, PartialEq, Clone, Copy)]
enum BulkFormat {
    Csv,
    Json,
    Text,
}

impl BulkFormat {
    fn label(&self) -> &'static str {
        match self {
            BulkFormat::Csv => "CSV",
            BulkFormat::Json => "JSON",
            BulkFormat::Text => "Text",
        }
    }

    /// Example line shown above the paste box.
    fn hint(&self) -> &'static str {
        match self {
            BulkFormat::Csv => "date, m1, m2, m3, m4, m5, e1, e2",
            BulkFormat::Json => r#"[{"date": "2026-01-02", "main": [1, 2, 3, 4, 5], "euro": [1, 2]}]"#,
            BulkFormat::Text => "YYYY-MM-DD; m1 m2 m3 m4 m5; e1 e2",
        }
    }

    const ALL: [BulkFormat; 3] = [BulkFormat::Csv, BulkFormat::Json, BulkFormat::Text];
}

/// Destructive action armed by a first click; the second click runs it.
#[derive(Debug, PartialEq, Clone, Copy)]
enum PendingAction {
    DeleteDraw(u64),
    ClearDraws,
    ClearPredictions,
}

impl PendingAction {
    /// Two-click guard for destructive buttons.
    ///
    /// The first click arms `action` (replacing whatever was armed) and
    /// returns false; clicking the armed action again disarms it and
    /// returns true.
    fn confirm(pending: &mut Option<PendingAction>, action: PendingAction) -> bool {
        if *pending == Some(action) {
            *pending = None;
            true
        } else {
            *pending = Some(action);
            false
        }
    }
}

/// One generated set as returned by `/v1/generate`.
#[derive(Deserialize, Clone)]
struct GeneratedSet {
    main: Vec<u8>,
    euro: Vec<u8>,
}

impl GeneratedSet {
    fn sorted_main(&self) -> Vec<u8> {
        let mut sorted = self.main.clone();
        sorted.sort_unstable();
        sorted
    }

    fn sorted_euro(&self) -> Vec<u8> {
        let mut sorted = self.euro.clone();
        sorted.sort_unstable();
        sorted
    }
}

/// One archived draw as returned by `/v1/draws`.
#[derive(Deserialize, Clone)]
struct DrawRow {
    id: u64,
    date: String,
    main: Vec<u8>,
    euro: Vec<u8>,
}

/// Hit counts of one stored prediction against the latest draw.
#[derive(Deserialize, Clone, Copy)]
struct HitCounts {
    main: usize,
    euro: usize,
    total: usize,
}

/// The `matched` object on one stored prediction.
#[derive(Deserialize, Clone, Copy)]
struct MatchedRow {
    latest_match: HitCounts,
}

/// One stored prediction as returned by `/v1/predictions`.
#[derive(Deserialize, Clone)]
struct PredictionRow {
    id: u64,
    main: Vec<u8>,
    euro: Vec<u8>,
    method: String,
    created_at: String,
    matched: Option<MatchedRow>,
}

/// One prediction's hits as listed by `/v1/insights/latest`.
#[derive(Deserialize, Clone, Copy)]
struct InsightHit {
    id: u64,
    matches: HitCounts,
}

/// Summary returned by `/v1/insights/latest`.
#[derive(Deserialize, Clone)]
struct LatestInsights {
    has_latest: bool,
    latest_date: Option<String>,
    matched_predictions: Vec<InsightHit>,
}

#[derive(Serialize, Deserialize)]
struct DrawUpload {
    date: String,
    main: Vec<u8>,
    euro: Vec<u8>,
}

/// Bulk upload body; only the field for the chosen format is set.
#[derive(Serialize)]
struct BulkUpload {
    csv: Option<String>,
    json: Option<Vec<DrawUpload>>,
    text: Option<String>,
}

#[derive(Serialize)]
struct PredictionUpload {
    main: Vec<u8>,
    euro: Vec<u8>,
    seed: Option<String>,
    method: String,
}

/// Import outcome returned by `/v1/draws/bulk`.
#[derive(Deserialize)]
struct BulkOutcome {
    imported: usize,
    skipped: usize,
}

/// Joins numbers for display ("3 · 8 · 17" or "3-8-17").
fn join_numbers(numbers: &[u8], separator: &str) -> String {
    numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(separator)
}

/// Parses a `YYYY-MM-DD; m1 m2 m3 m4 m5; e1 e2` line into an upload.
/// Full validation happens on the server.
fn parse_draw_line(line: &str) -> Option<DrawUpload> {
    let parts: Vec<&str> = line.split(';').map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }
    let main: Vec<u8> = parts[1].split_whitespace().filter_map(|f| f.parse().ok()).collect();
    let euro: Vec<u8> = parts[2].split_whitespace().filter_map(|f| f.parse().ok()).collect();
    if main.len() != 5 || euro.len() != 2 {
        return None;
    }
    Some(DrawUpload { date: parts[0].to_owned(), main, euro })
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        Ok(Self { client })
    }

    /// Turns a response into a status line, keeping the server's own
    /// message when the call was rejected.
    fn text_outcome(response: reqwest::blocking::Response, success: &str) -> Result<String> {
        let status = response.status();
        let body = response.text()?;
        if status.is_success() {
            Ok(success.to_owned())
        } else {
            Ok(format!("{status}: {body}"))
        }
    }

    /// Sends a GET request to `/v1/generate` with query parameters.
    fn get_generated(&self, params: &[(String, String)]) -> Result<Vec<GeneratedSet>> {
        let response = self.client
            .get("http://127.0.0.1:5000/v1/generate")
            .query(params)
            .send()?
            .error_for_status()?;

        response.json()
    }

    /// Sends a GET request to `/v1/draws`.
    fn get_draws(&self, limit: usize) -> Result<Vec<DrawRow>> {
        let response = self.client
            .get("http://127.0.0.1:5000/v1/draws")
            .query(&[("limit", limit.to_string())])
            .send()?
            .error_for_status()?;

        response.json()
    }

    /// Sends a GET request to `/v1/predictions`.
    fn get_predictions(&self) -> Result<Vec<PredictionRow>> {
        let response = self.client
            .get("http://127.0.0.1:5000/v1/predictions")
            .send()?
            .error_for_status()?;

        response.json()
    }

    /// Sends a GET request to `/v1/insights/latest`.
    fn get_insights(&self) -> Result<LatestInsights> {
        let response = self.client
            .get("http://127.0.0.1:5000/v1/insights/latest")
            .send()?
            .error_for_status()?;

        response.json()
    }

    /// Sends a POST request to `/v1/draws`.
    fn post_draw(&self, upload: &DrawUpload) -> Result<String> {
        let response = self.client
            .post("http://127.0.0.1:5000/v1/draws")
            .json(upload)
            .send()?;

        Self::text_outcome(response, "Draw archived")
    }

    /// Sends a POST request to `/v1/draws/bulk`.
    fn post_bulk(&self, upload: &BulkUpload) -> Result<String> {
        let response = self.client
            .post("http://127.0.0.1:5000/v1/draws/bulk")
            .json(upload)
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            return Ok(format!("{status}: {}", response.text()?));
        }
        let outcome: BulkOutcome = response.json()?;
        Ok(format!("Imported {} draws, skipped {}", outcome.imported, outcome.skipped))
    }

    /// Sends a POST request to `/v1/predictions`.
    fn post_prediction(&self, upload: &PredictionUpload) -> Result<String> {
        let response = self.client
            .post("http://127.0.0.1:5000/v1/predictions")
            .json(upload)
            .send()?;

        Self::text_outcome(response, "Prediction stored")
    }

    /// Sends a DELETE request to `/v1/draws/{id}`.
    fn delete_draw(&self, id: u64) -> Result<String> {
        let response = self.client
            .delete(format!("http://127.0.0.1:5000/v1/draws/{id}"))
            .send()?;

        Self::text_outcome(response, "Draw deleted")
    }

    /// Sends a DELETE request to `/v1/draws`.
    fn delete_draws(&self) -> Result<String> {
        let response = self.client
            .delete("http://127.0.0.1:5000/v1/draws")
            .send()?;

        Self::text_outcome(response, "Archive cleared")
    }

    /// Sends a DELETE request to `/v1/predictions`.
    fn delete_predictions(&self) -> Result<String> {
        let response = self.client
            .delete("http://127.0.0.1:5000/v1/predictions")
            .send()?;

        Self::text_outcome(response, "Stored predictions cleared")
    }
}

/// Global UI state (MUST persist between frames in egui).
struct GeneratorUI {
    rest: RESTContext,
    status: Option<String>,
    // Destructive buttons arm here and run on the second click.
    pending_action: Option<PendingAction>,

    method: MethodChoice,
    sets: usize,
    seed: String, // empty = not reproducible

    results: Vec<GeneratedSet>,
    // Method and seed the current results were generated with; saving
    // and exporting use these, not the live form fields.
    last_method: MethodChoice,
    last_seed: String,

    draws: Vec<DrawRow>,
    new_draw_line: String,
    bulk_format: BulkFormat,
    bulk_text: String,

    predictions: Vec<PredictionRow>,
    insights: Option<LatestInsights>,
}

impl GeneratorUI {
    /// Initializes the UI with sane defaults and a first archive fetch.
    fn new() -> Result<Self> {
        let mut generator = Self {
            rest: RESTContext::new()?,
            status: None,
            pending_action: None,

            method: MethodChoice::Statistical,
            sets: 1,
            seed: String::new(),

            results: Vec::new(),
            last_method: MethodChoice::Statistical,
            last_seed: String::new(),

            draws: Vec::new(),
            new_draw_line: String::new(),
            bulk_format: BulkFormat::Csv,
            bulk_text: String::new(),

            predictions: Vec::new(),
            insights: None,
        };
        generator.refresh_archive();
        Ok(generator)
    }

    /// Builds the query parameters for the API.
    ///
    /// An empty seed field is not sent at all; the server treats both
    /// the same way, this just keeps URLs clean.
    fn build_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        params.push(("method".into(), self.method.key().to_owned()));
        params.push(("sets".into(), self.sets.to_string()));

        if !self.seed.is_empty() {
            params.push(("seed".into(), self.seed.clone()));
        }

        params
    }

    /// Performs the generation request.
    fn get_generated(&mut self) {
        let params = self.build_query();
        match self.rest.get_generated(&params) {
            Ok(results) => {
                self.status = Some(format!("Generated {} set(s)", results.len()));
                self.results = results;
                self.last_method = self.method;
                self.last_seed = self.seed.clone();
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Refetches draws, stored predictions and the latest-draw summary.
    fn refresh_archive(&mut self) {
        match self.rest.get_draws(RECENT_DRAWS) {
            Ok(draws) => self.draws = draws,
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
        match self.rest.get_predictions() {
            Ok(predictions) => self.predictions = predictions,
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
        match self.rest.get_insights() {
            Ok(insights) => self.insights = Some(insights),
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Archives the draw typed into the single-line field.
    fn add_draw(&mut self) {
        let upload = match parse_draw_line(&self.new_draw_line) {
            Some(upload) => upload,
            None => {
                self.status = Some("Draw line must look like: 2026-01-02; 1 2 3 4 5; 1 2".to_owned());
                return;
            }
        };

        match self.rest.post_draw(&upload) {
            Ok(message) => {
                self.status = Some(message);
                self.new_draw_line.clear();
                self.refresh_archive();
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Imports the paste box through the bulk endpoint, in the selected
    /// format. JSON pastes are parsed into draw rows before upload.
    fn import_bulk(&mut self) {
        let pasted = self.bulk_text.trim();
        if pasted.is_empty() {
            self.status = Some("Nothing to import".to_owned());
            return;
        }

        let upload = match self.bulk_format {
            BulkFormat::Csv => BulkUpload { csv: Some(pasted.to_owned()), json: None, text: None },
            BulkFormat::Json => match serde_json::from_str::<Vec<DrawUpload>>(pasted) {
                Ok(rows) => BulkUpload { csv: None, json: Some(rows), text: None },
                Err(e) => {
                    self.status = Some(format!("Bulk JSON must be an array of draws: {e}"));
                    return;
                }
            },
            BulkFormat::Text => BulkUpload { csv: None, json: None, text: Some(pasted.to_owned()) },
        };

        match self.rest.post_bulk(&upload) {
            Ok(message) => {
                self.status = Some(message);
                self.bulk_text.clear();
                self.refresh_archive();
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Deletes one archived draw.
    fn delete_draw(&mut self, id: u64) {
        match self.rest.delete_draw(id) {
            Ok(message) => {
                self.status = Some(message);
                self.refresh_archive();
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Deletes every archived draw.
    fn clear_draws(&mut self) {
        match self.rest.delete_draws() {
            Ok(message) => {
                self.status = Some(message);
                self.refresh_archive();
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Stores one generated set on the server.
    fn save_prediction(&mut self, index: usize) {
        let set = match self.results.get(index) {
            Some(set) => set.clone(),
            None => return,
        };

        let upload = PredictionUpload {
            main: set.sorted_main(),
            euro: set.sorted_euro(),
            seed: if self.last_seed.is_empty() { None } else { Some(self.last_seed.clone()) },
            method: self.last_method.key().to_owned(),
        };
        match self.rest.post_prediction(&upload) {
            Ok(message) => {
                self.status = Some(message);
                self.refresh_archive();
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Deletes every stored prediction.
    fn clear_predictions(&mut self) {
        match self.rest.delete_predictions() {
            Ok(message) => {
                self.status = Some(message);
                self.refresh_archive();
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Writes the current results as a CSV file next to the binary.
    ///
    /// Filename: `eurojackpot_{method}.csv`, with `_seed-{seed}` appended
    /// for reproducible runs.
    fn export_csv(&mut self) {
        if self.results.is_empty() {
            self.status = Some("Nothing to export".to_owned());
            return;
        }

        let mut csv = String::from("main1-main2-main3-main4-main5;euro1-euro2\n");
        for set in &self.results {
            csv.push_str(&format!(
                "{};{}\n",
                join_numbers(&set.sorted_main(), "-"),
                join_numbers(&set.sorted_euro(), "-")
            ));
        }

        let filename = if self.last_seed.is_empty() {
            format!("eurojackpot_{}.csv", self.last_method.key())
        } else {
            format!("eurojackpot_{}_seed-{}.csv", self.last_method.key(), self.last_seed)
        };
        match std::fs::write(&filename, csv) {
            Ok(()) => self.status = Some(format!("Exported {filename}")),
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }
}

impl eframe::App for GeneratorUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Generation");

                egui::Grid::new("generation_grid")
                    .num_columns(2)
                    .spacing([20.0, 6.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.label("Method");
                        ui.vertical(|ui| {
                            for method in MethodChoice::ALL {
                                ui.radio_value(&mut self.method, method, method.label());
                            }
                        });
                        ui.end_row();

                        ui.label("Sets");
                        ui.add(
                            egui::DragValue::new(&mut self.sets)
                                .range(1..=20)
                                .speed(1),
                        );
                        ui.end_row();

                        ui.label("Seed (empty = not reproducible)");
                        ui.text_edit_singleline(&mut self.seed);
                        ui.end_row();
                    });

                ui.horizontal(|ui| {
                    if ui
                        .add_sized([160.0, 32.0], egui::Button::new("Generate"))
                        .clicked()
                    {
                        self.get_generated();
                    }
                    if ui.button("Export CSV").clicked() {
                        self.export_csv();
                    }
                });

                // Results stay borrowed while the cards render; the save
                // request runs after the loop.
                let mut save_index = None;
                for (index, set) in self.results.iter().enumerate() {
                    ui.group(|ui| {
                        ui.label(format!("Set {}", index + 1));
                        ui.label(format!("Main: {}", join_numbers(&set.sorted_main(), " · ")));
                        ui.label(format!("Euro: {}", join_numbers(&set.sorted_euro(), " · ")));
                        if ui.small_button("Save to server").clicked() {
                            save_index = Some(index);
                        }
                    });
                }
                if let Some(index) = save_index {
                    self.save_prediction(index);
                }
                if !self.last_seed.is_empty() {
                    ui.label(format!("Seed used: {}", self.last_seed));
                }

                ui.separator();
                ui.heading("Archived draws");

                let mut delete_clicked = None;
                for draw in &self.draws {
                    ui.horizontal(|ui| {
                        ui.label(format!(
                            "{}: {} | {}",
                            draw.date,
                            join_numbers(&draw.main, "-"),
                            join_numbers(&draw.euro, "-")
                        ));
                        let armed = self.pending_action == Some(PendingAction::DeleteDraw(draw.id));
                        let label = if armed { "Delete this draw?" } else { "Delete" };
                        if ui.small_button(label).clicked() {
                            delete_clicked = Some(draw.id);
                        }
                    });
                }
                if let Some(id) = delete_clicked {
                    if PendingAction::confirm(&mut self.pending_action, PendingAction::DeleteDraw(id)) {
                        self.delete_draw(id);
                    }
                }

                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut self.new_draw_line);
                    if ui.button("Add draw").clicked() {
                        self.add_draw();
                    }
                });

                ui.horizontal(|ui| {
                    ui.label("Bulk import");
                    for format in BulkFormat::ALL {
                        ui.radio_value(&mut self.bulk_format, format, format.label());
                    }
                });
                ui.label(self.bulk_format.hint());
                ui.text_edit_multiline(&mut self.bulk_text);
                ui.horizontal(|ui| {
                    if ui.button("Import").clicked() {
                        self.import_bulk();
                    }
                    if ui.button("Refresh").clicked() {
                        self.refresh_archive();
                    }
                    let armed = self.pending_action == Some(PendingAction::ClearDraws);
                    let label = if armed { "Delete all draws?" } else { "Clear archive" };
                    if ui.button(label).clicked()
                        && PendingAction::confirm(&mut self.pending_action, PendingAction::ClearDraws)
                    {
                        self.clear_draws();
                    }
                });

                ui.separator();
                ui.heading("Stored predictions");

                for prediction in &self.predictions {
                    let matched = match prediction.matched.map(|m| m.latest_match) {
                        Some(hits) if hits.total > 0 => {
                            format!(" (hits: {} main, {} euro)", hits.main, hits.euro)
                        }
                        _ => String::new(),
                    };
                    ui.horizontal(|ui| {
                        ui.label(format!(
                            "#{} {}: {} | {}{}",
                            prediction.id,
                            prediction.method,
                            join_numbers(&prediction.main, "-"),
                            join_numbers(&prediction.euro, "-"),
                            matched
                        ));
                        ui.weak(prediction.created_at.as_str());
                    });
                }
                if !self.predictions.is_empty() {
                    let armed = self.pending_action == Some(PendingAction::ClearPredictions);
                    let label = if armed { "Delete all predictions?" } else { "Clear predictions" };
                    if ui.button(label).clicked()
                        && PendingAction::confirm(&mut self.pending_action, PendingAction::ClearPredictions)
                    {
                        self.clear_predictions();
                    }
                }

                ui.separator();
                match &self.insights {
                    Some(insights) if insights.has_latest => {
                        let date = insights.latest_date.as_deref().unwrap_or("?");
                        if insights.matched_predictions.is_empty() {
                            ui.label(format!("Latest draw {date}: no stored prediction hit it"));
                        } else {
                            ui.label(format!("Latest draw {date}:"));
                            for hit in &insights.matched_predictions {
                                ui.label(format!(
                                    "Prediction #{} hit {} number(s) ({} main, {} euro)",
                                    hit.id, hit.matches.total, hit.matches.main, hit.matches.euro
                                ));
                            }
                        }
                    }
                    _ => {
                        ui.label("No draws archived yet");
                    }
                }

                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 760.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "ejp-generator",
        options,
        Box::new(|_| Ok(Box::new(GeneratorUI::new()?))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_rows_parse_the_server_fields() {
        let body = r#"[{
            "id": 3,
            "main": [3, 8, 17, 29, 50],
            "euro": [4, 12],
            "seed": "lucky",
            "method": "quantum",
            "created_at": "2026-01-03T10:00:00+00:00",
            "matched": {"latest_match": {"main": 2, "euro": 1, "total": 3}}
        }]"#;
        let rows: Vec<PredictionRow> = serde_json::from_str(body).unwrap();
        assert_eq!(rows[0].created_at, "2026-01-03T10:00:00+00:00");
        assert_eq!(rows[0].matched.unwrap().latest_match.total, 3);

        // `matched` is absent while no draw is archived.
        let bare = r#"[{"id": 1, "main": [1, 2, 3, 4, 5], "euro": [1, 2], "method": "neural", "created_at": "2026-01-03T10:00:00+00:00"}]"#;
        let rows: Vec<PredictionRow> = serde_json::from_str(bare).unwrap();
        assert!(rows[0].matched.is_none());
    }

    #[test]
    fn destructive_buttons_fire_on_the_second_click() {
        let mut pending = None;
        assert!(!PendingAction::confirm(&mut pending, PendingAction::ClearDraws));
        assert_eq!(pending, Some(PendingAction::ClearDraws));
        assert!(PendingAction::confirm(&mut pending, PendingAction::ClearDraws));
        assert_eq!(pending, None);

        // Arming a different action replaces the first.
        assert!(!PendingAction::confirm(&mut pending, PendingAction::DeleteDraw(4)));
        assert!(!PendingAction::confirm(&mut pending, PendingAction::ClearPredictions));
        assert!(PendingAction::confirm(&mut pending, PendingAction::ClearPredictions));
        assert_eq!(pending, None);
    }
}
