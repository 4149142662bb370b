use actix_web::{error, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use crate::basis_result::*;
use crate::engine::*;
use crate::error::*;
use crate::formatter::*;
use crate::vector_set::*;

///The engine shared (read-only) by every worker.
pub type SharedEngine = GramSchmidtEngine<SymbolicFormatter>;

///Value of `result` when the submitted vectors are dependent.
pub const DEPENDENT_FLAG : u8 = 0;

const INDEX_PAGE : &str = include_str!("../static/index.html");

///`POST /Group2` body: vectors packed as the rows of `matrix`.
#[derive(Debug, Deserialize)]
pub struct BasisRequest {
    pub matrix : Vec<Vec<f64>>
}

///Either the dependent flag or a grid of display strings. Callers tell
///the two apart by the JSON type of `result`.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ResultPayload {
    Flag(u8),
    Basis(DisplayMatrix)
}

#[derive(Debug, Serialize)]
pub struct BasisResponse {
    pub result : ResultPayload
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error : String
}

impl From<DisplayResult> for BasisResponse {
    fn from(display : DisplayResult) -> BasisResponse {
        let result = match display {
            DisplayResult::Dependent => ResultPayload::Flag(DEPENDENT_FLAG),
            DisplayResult::Basis(matrix) => ResultPayload::Basis(matrix)
        };
        BasisResponse {
            result
        }
    }
}

/// GET / - Static front page
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_PAGE)
}

/// POST /Group2 - Orthonormal basis of the submitted vectors
pub async fn orthonormal_basis(
    engine : web::Data<SharedEngine>,
    req : web::Json<BasisRequest>,
) -> HttpResponse {
    let vectors = match VectorSet::from_rows(req.into_inner().matrix) {
        Ok(vectors) => vectors,
        Err(e) => return error_response(&e)
    };
    match engine.compute(&vectors) {
        Ok(display) => HttpResponse::Ok().json(BasisResponse::from(display)),
        Err(e) => error_response(&e)
    }
}

fn error_response(e : &BasisError) -> HttpResponse {
    let body = ErrorResponse {
        error : e.to_string()
    };
    if (e.is_caller_error()) {
        warn!("Rejected request: {}", e);
        HttpResponse::BadRequest().json(body)
    } else {
        error!("Failed to compute basis: {}", e);
        HttpResponse::InternalServerError().json(body)
    }
}

///JSON extractor settings: undecodable bodies (bad JSON, non-numeric entries,
///wrong content type, too large) become a 400 with an `error` message.
pub fn json_config(max_json_bytes : usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_json_bytes)
        .error_handler(|err, _req| {
            warn!("Rejected request body: {}", err);
            let response = HttpResponse::BadRequest().json(ErrorResponse {
                error : err.to_string()
            });
            error::InternalError::from_response(err, response).into()
        })
}

///Registers the routes and shared state. Used by both the server binary and the tests.
pub fn configure(engine : web::Data<SharedEngine>, max_json_bytes : usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg : &mut web::ServiceConfig| {
        cfg.app_data(engine)
           .app_data(json_config(max_json_bytes))
           .route("/", web::get().to(index))
           .route("/Group2", web::post().to(orthonormal_basis));
    }
}
