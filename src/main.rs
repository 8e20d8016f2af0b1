mod api;
mod db;
mod helper_model;
mod methods;
mod model;
mod schema;

use std::env;
use warp::Filter;

lazy_static::lazy_static! {
    pub static ref POOL: db::PgPool = db::get_connection_pool();
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    // routing for the server
    let httpd = api::api().and(warp::path::end());
    log::info!("rentwheels httpd listening on port {}", port);
    // TODO: tls
    warp::serve(httpd).run(([0, 0, 0, 0], port)).await;
}
