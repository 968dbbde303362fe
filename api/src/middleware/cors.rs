//! CORS middleware configuration for cross-origin requests.
//!
//! Development is permissive so the frontend can run from any local origin.
//! Production only admits the configured public URL.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use hp_shared::config::{Environment, ServerConfig};

/// Creates a CORS middleware instance configured for the given environment.
pub fn create_cors(environment: Environment, server: &ServerConfig) -> Cors {
    match environment {
        Environment::Development => create_development_cors(),
        Environment::Production => create_production_cors(server),
    }
}

fn allowed_methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ]
}

fn create_development_cors() -> Cors {
    tracing::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(3600)
}

fn create_production_cors(server: &ServerConfig) -> Cors {
    let origin = server.public_base_url();
    tracing::info!(origin = %origin, "Configuring CORS for production environment");

    Cors::default()
        .allowed_origin(&origin)
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cors_for_each_environment() {
        let server = ServerConfig::new("127.0.0.1", 8080);
        let _dev = create_cors(Environment::Development, &server);
        let _prod = create_cors(Environment::Production, &server);
    }
}
