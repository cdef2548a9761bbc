use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use coursematch_core::Error;
use coursematch_engine::{RecommenderEngine, DEFAULT_TOP_K};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Deserialize)]
struct TopKQuery {
    top_k: Option<usize>,
}

impl TopKQuery {
    fn top_k(&self) -> usize {
        self.top_k.unwrap_or(DEFAULT_TOP_K)
    }
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        engine: Arc<RecommenderEngine>,
        host: &str,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(engine.clone()))
                .configure(Self::configure)
        })
        .bind((host, port))?
        .run()
        .await
    }

    /// Register the read-only routes. Expects `web::Data<Arc<RecommenderEngine>>`.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.route("/health", web::get().to(health))
            .route("/recommend/trainee/{trainee_id}", web::get().to(recommend_trainee))
            .route("/recommend/course/{course_id}", web::get().to(recommend_course));
    }
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok"
    })))
}

async fn recommend_trainee(
    engine: web::Data<Arc<RecommenderEngine>>,
    path: web::Path<String>,
    query: web::Query<TopKQuery>,
) -> ActixResult<HttpResponse> {
    let trainee_id = path.into_inner();
    debug!(%trainee_id, top_k = query.top_k(), "recommend for trainee");

    match engine.recommend_for_trainee(&trainee_id, query.top_k()) {
        Ok(results) => Ok(HttpResponse::Ok().json(results)),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn recommend_course(
    engine: web::Data<Arc<RecommenderEngine>>,
    path: web::Path<String>,
    query: web::Query<TopKQuery>,
) -> ActixResult<HttpResponse> {
    let course_id = path.into_inner();
    debug!(%course_id, top_k = query.top_k(), "recommend for course");

    match engine.recommend_for_course(&course_id, query.top_k()) {
        Ok(results) => Ok(HttpResponse::Ok().json(results)),
        Err(e) => Ok(error_response(&e)),
    }
}

fn error_response(e: &Error) -> HttpResponse {
    let body = serde_json::json!({
        "error": e.to_string()
    });

    match e {
        Error::TraineeNotFound(_) | Error::CourseNotFound(_) => HttpResponse::NotFound().json(body),
        Error::InvalidIdentifier(_) => HttpResponse::BadRequest().json(body),
        _ => {
            warn!("request failed: {}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}
