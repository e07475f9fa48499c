//! JSON REST API over the tournament service.

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, ServiceConfig},
    HttpResponse, Responder,
};
use serde::Deserialize;

use crate::logic::standings_csv;
use crate::models::{MatchId, PlayerId, TournamentError, TournamentId};
use crate::service::{MatchReport, NewTournament, TournamentService};

type AppState = Data<TournamentService>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct RenameHostBody {
    name: String,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and player id (e.g. /api/tournaments/{id}/players/{player_id}/drop)
#[derive(Deserialize)]
struct TournamentPlayerPath {
    id: TournamentId,
    player_id: PlayerId,
}

/// Path segments: tournament id and match id (e.g. /api/tournaments/{id}/matches/{match_id}/result)
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

/// Map a service error to a JSON error response.
///
/// Unknown ids are 404, store failures 500, every other rejected intent 400.
pub fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::NotFound(_)
        | TournamentError::MatchNotFound(_)
        | TournamentError::PlayerNotFound(_)
        | TournamentError::NoHost => HttpResponse::NotFound().json(body),
        TournamentError::Store(inner) => {
            log::error!("Store failure: {}", inner);
            HttpResponse::InternalServerError().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn respond<T: serde::Serialize>(result: Result<T, TournamentError>) -> HttpResponse {
    match result {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => error_response(&e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament-web",
    })
}

/// Current host profile (created with a random name on first call).
#[get("/api/host")]
async fn api_get_host(state: AppState) -> HttpResponse {
    respond(state.current_host())
}

#[put("/api/host")]
async fn api_rename_host(state: AppState, body: Json<RenameHostBody>) -> HttpResponse {
    respond(state.rename_host(&body.name))
}

/// All tournaments of the current host.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    respond(state.tournaments_for_host())
}

/// Create a tournament from a name, player names and optional scoring.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<NewTournament>) -> HttpResponse {
    respond(state.create_tournament(body.into_inner()))
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    respond(state.tournament(path.id))
}

#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.delete_tournament(path.id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

/// Start the tournament and pair round 1.
#[post("/api/tournaments/{id}/start")]
async fn api_start_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    respond(state.start_tournament(path.id))
}

/// Pair the next round (all current matches must have results).
#[post("/api/tournaments/{id}/rounds/next")]
async fn api_next_round(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    respond(state.advance_round(path.id))
}

/// Report the result of one match.
#[put("/api/tournaments/{id}/matches/{match_id}/result")]
async fn api_submit_result(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<MatchReport>,
) -> HttpResponse {
    respond(state.submit_result(path.id, path.match_id, body.into_inner()))
}

/// Withdraw a player from future rounds.
#[post("/api/tournaments/{id}/players/{player_id}/drop")]
async fn api_drop_player(state: AppState, path: Path<TournamentPlayerPath>) -> HttpResponse {
    respond(state.drop_player(path.id, path.player_id))
}

#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    respond(state.standings(path.id))
}

/// Standings as a CSV download.
#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let tournament = match state.tournament(path.id) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    match standings_csv(&tournament) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Register every API route. Expects the service as `Data<TournamentService>` app data.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(api_health)
        .service(api_get_host)
        .service(api_rename_host)
        .service(api_list_tournaments)
        .service(api_create_tournament)
        .service(api_standings_csv)
        .service(api_standings)
        .service(api_get_tournament)
        .service(api_delete_tournament)
        .service(api_start_tournament)
        .service(api_next_round)
        .service(api_submit_result)
        .service(api_drop_player);
}
