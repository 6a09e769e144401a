use crate::types::error::AppError;
use crate::utils::webutils::{authenticate_if_present, validate_token};
use actix_web::{guard, middleware::from_fn, web};

pub mod health;
pub mod login;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_token);

    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );

    cfg.service(
        web::scope("/health").service(health::health),
    );
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/login")
                    .service(login::login),
            )
            .service(
                web::scope("/users")
                    // anonymous callers are fine, a presented token must be valid
                    .wrap(from_fn(authenticate_if_present))
                    // updates additionally require a token
                    .service(
                        web::scope("/{id}")
                            .guard(guard::Any(guard::Put()).or(guard::Patch()))
                            .wrap(user_auth)
                            .service(user::update::update)
                            .service(user::update::partial_update),
                    )
                    .service(user::create::create)
                    .service(user::read::list)
                    .service(user::read::retrieve),
            ),
    );
}
