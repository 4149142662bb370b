#![allow(unused_parens)]

extern crate pretty_env_logger;
#[macro_use] extern crate log;

use actix_web::{middleware, web, App, HttpServer};
use orthobasis::config::*;
use orthobasis::engine::*;
use orthobasis::formatter::*;
use orthobasis::independence_checker::*;
use orthobasis::service;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if (std::env::var("RUST_LOG").is_err()) {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let config = ServerConfig::from_env();
    info!("Starting with config: {:?}", config);

    let checker = IndependenceChecker::new(config.determinant_policy);
    let engine = web::Data::new(GramSchmidtEngine::new(checker, SymbolicFormatter::default()));
    let max_json_bytes = config.max_json_bytes;

    let listen_addr = config.listen_addr();
    info!("Listening on {}", listen_addr);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(service::configure(engine.clone(), max_json_bytes))
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }
    server.bind(&listen_addr)?
          .run()
          .await
}
