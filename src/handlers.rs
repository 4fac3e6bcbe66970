use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::web::{Data, Json};
use actix_web::{HttpRequest, HttpResponse};

use crate::consts;
use crate::errors::RelayError;
use crate::models::request::ChatRequest;
use crate::models::response::ErrorBody;
use crate::service::RelayService;
use crate::supervisor;

pub async fn chat(service: Data<RelayService>, request: Json<ChatRequest>) -> HttpResponse {
    let service = service.into_inner();
    let result =
        supervisor::supervise(async move { service.relay(request.into_inner()).await }).await;

    match result {
        Ok(reply) => HttpResponse::Ok().json(reply),
        Err(e) => error_response(&e),
    }
}

pub fn error_response(e: &RelayError) -> HttpResponse {
    match e {
        RelayError::ValidationError(msg) => {
            log::info!("rejected chat request: {}", msg);
            HttpResponse::BadRequest().json(ErrorBody::new(msg))
        }
        RelayError::ConfigError(_)
        | RelayError::NetworkError(_)
        | RelayError::ApiError(_)
        | RelayError::ParseError(_)
        | RelayError::Internal(_) => {
            log::error!("chat relay error: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ErrorBody::with_details(consts::UPSTREAM_FAILURE, e.message()))
        }
    }
}

/// Shapes body extraction failures like the route's own validation errors.
/// A body that is not JSON-typed, or is empty, counts as a missing message;
/// a body over the size limit is 413.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = match &err {
        JsonPayloadError::ContentType => {
            HttpResponse::BadRequest().json(ErrorBody::new(consts::MESSAGE_REQUIRED))
        }
        JsonPayloadError::Deserialize(e) if e.is_eof() && e.line() == 1 && e.column() == 0 => {
            HttpResponse::BadRequest().json(ErrorBody::new(consts::MESSAGE_REQUIRED))
        }
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            HttpResponse::PayloadTooLarge().json(ErrorBody::with_details(
                consts::PAYLOAD_TOO_LARGE,
                &err.to_string(),
            ))
        }
        _ => HttpResponse::BadRequest().json(ErrorBody::with_details(
            consts::INVALID_JSON_BODY,
            &err.to_string(),
        )),
    };
    log::info!("rejected chat body: {}", err);

    InternalError::from_response(err, response).into()
}
