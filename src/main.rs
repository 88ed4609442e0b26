mod api;
mod config;
pub mod health;
pub mod modules;
pub mod shared;

use actix_web::{web, App, HttpServer};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::config::{load_env_files, AppConfig};
use crate::modules::candidate::adapter::outgoing::{
    CandidateQueryPostgres, CandidateStageRepositoryPostgres,
};
use crate::modules::candidate::application::candidate_use_cases::CandidateUseCases;
use crate::modules::candidate::application::services::{
    GetCandidateService, UpdateCandidateStageService,
};
use crate::modules::position::adapter::outgoing::PositionQueryPostgres;
use crate::modules::position::application::position_use_cases::PositionUseCases;
use crate::modules::position::application::services::GetPositionCandidatesService;
use crate::shared::api::custom_json_config;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub position: PositionUseCases,
    pub candidate: CandidateUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    // .env.{RUST_ENV} first so that RUST_LOG can come from it
    load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let conn = Database::connect(config.connect_options())
        .await
        .map_err(std::io::Error::other)?;
    let db_arc = Arc::new(conn);

    let state = build_app_state(&db_arc);

    let server_url = config.server_addr();
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn build_app_state(db: &Arc<DatabaseConnection>) -> AppState {
    let position_query = PositionQueryPostgres::new(Arc::clone(db));
    let candidate_query = CandidateQueryPostgres::new(Arc::clone(db));
    let stage_repository = CandidateStageRepositoryPostgres::new(Arc::clone(db));

    AppState {
        position: PositionUseCases {
            get_candidates: Arc::new(GetPositionCandidatesService::new(position_query)),
        },
        candidate: CandidateUseCases {
            get_single: Arc::new(GetCandidateService::new(candidate_query.clone())),
            update_stage: Arc::new(UpdateCandidateStageService::new(
                candidate_query,
                stage_repository,
            )),
        },
    }
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Positions
    cfg.service(
        crate::modules::position::adapter::incoming::web::routes::get_position_candidates_handler,
    );
    // Candidates
    cfg.service(crate::modules::candidate::adapter::incoming::web::routes::get_candidate_handler);
    cfg.service(
        crate::modules::candidate::adapter::incoming::web::routes::update_candidate_stage_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
