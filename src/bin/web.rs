//! Single binary web server: JSON API over one in-memory padel tournament.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use padel_tournament_web::{
    finish_match, get_current_standings, next_round, reset_match, set_match_score,
    standings_to_csv, start_tournament, MatchId, Team, Tournament, TournamentSettings,
};
use serde::Deserialize;
use std::sync::RwLock;

/// In-memory state: the one tournament being run (none until created). Lost on restart.
type AppState = Data<RwLock<Option<Tournament>>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct SetScoreBody {
    team: Team,
    score: u32,
}

/// Path segment: player name (e.g. /api/tournament/players/{name})
#[derive(Deserialize)]
struct PlayerPath {
    name: String,
}

/// Path segment: match id (e.g. /api/tournament/matches/{match_id}/score)
#[derive(Deserialize)]
struct MatchPath {
    match_id: MatchId,
}

fn no_tournament() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "padel-tournament-web",
    })
}

/// Create a new tournament, replacing any current one.
#[post("/api/tournament")]
async fn api_create_tournament(state: AppState, body: Option<Json<TournamentSettings>>) -> HttpResponse {
    let settings = body.map(|b| b.into_inner()).unwrap_or_default();
    let tournament = match Tournament::new(settings) {
        Ok(t) => t,
        Err(e) => return bad_request(e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    log::info!("Created tournament '{}'", tournament.settings.name);
    HttpResponse::Ok().json(g.insert(tournament))
}

/// Get the current tournament (404 if none).
#[get("/api/tournament")]
async fn api_get_tournament(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.as_ref() {
        Some(t) => HttpResponse::Ok().json(t),
        None => no_tournament(),
    }
}

/// Replace the settings (Setup only).
#[put("/api/tournament/settings")]
async fn api_update_settings(state: AppState, body: Json<TournamentSettings>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let t = match g.as_mut() {
        Some(t) => t,
        None => return no_tournament(),
    };
    match t.update_settings(body.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Add a player (Setup only).
#[post("/api/tournament/players")]
async fn api_add_player(state: AppState, body: Json<AddPlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let t = match g.as_mut() {
        Some(t) => t,
        None => return no_tournament(),
    };
    match t.add_player(body.name.trim()) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Remove a player by name (Setup only).
#[delete("/api/tournament/players/{name}")]
async fn api_remove_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let t = match g.as_mut() {
        Some(t) => t,
        None => return no_tournament(),
    };
    match t.remove_player(&path.name) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Start the tournament and pair round 1.
#[post("/api/tournament/start")]
async fn api_start_tournament(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let t = match g.as_mut() {
        Some(t) => t,
        None => return no_tournament(),
    };
    match start_tournament(t) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Enter one team's score for a match.
#[put("/api/tournament/matches/{match_id}/score")]
async fn api_set_score(state: AppState, path: Path<MatchPath>, body: Json<SetScoreBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let t = match g.as_mut() {
        Some(t) => t,
        None => return no_tournament(),
    };
    match set_match_score(t, path.match_id, body.team, body.score) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Finish a match and fold its result into the stats.
#[post("/api/tournament/matches/{match_id}/finish")]
async fn api_finish_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let t = match g.as_mut() {
        Some(t) => t,
        None => return no_tournament(),
    };
    match finish_match(t, path.match_id) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Reset a match to 0-0 / waiting.
#[post("/api/tournament/matches/{match_id}/reset")]
async fn api_reset_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let t = match g.as_mut() {
        Some(t) => t,
        None => return no_tournament(),
    };
    match reset_match(t, path.match_id) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Close the current round and pair the next one.
#[post("/api/tournament/rounds/next")]
async fn api_next_round(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let t = match g.as_mut() {
        Some(t) => t,
        None => return no_tournament(),
    };
    match next_round(t) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

/// Current standings as JSON.
#[get("/api/tournament/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.as_ref() {
        Some(t) => HttpResponse::Ok().json(get_current_standings(&t.player_stats, &t.players)),
        None => no_tournament(),
    }
}

/// Current standings as CSV.
#[get("/api/tournament/standings.csv")]
async fn api_standings_csv(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let t = match g.as_ref() {
        Some(t) => t,
        None => return no_tournament(),
    };
    let standings = get_current_standings(&t.player_stats, &t.players);
    match standings_to_csv(&standings, &t.players) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to export standings: {}", e);
            HttpResponse::InternalServerError().body("export error")
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state: AppState = Data::new(RwLock::new(None));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_update_settings)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_start_tournament)
            .service(api_set_score)
            .service(api_finish_match)
            .service(api_reset_match)
            .service(api_next_round)
            .service(api_standings_csv)
            .service(api_standings)
    })
    .bind(bind)?
    .run()
    .await
}
