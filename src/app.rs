use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::{consts, handlers, service};

/// Any origin may call the relay, matching a browser frontend served from
/// anywhere.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

pub fn create_app(
    relay_service: Arc<service::RelayService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(cors())
        .wrap(Logger::default())
        .app_data(Data::from(relay_service))
        .app_data(
            web::JsonConfig::default()
                .limit(consts::JSON_BODY_LIMIT)
                .error_handler(handlers::json_error_handler),
        )
        .service(web::scope("/api").route("/chat", web::post().to(handlers::chat)))
}
