use std::sync::Arc;

use axum::serve;
use tokio::net::TcpListener;
use tracing::info;

use newspulse::routes::{init_tracing, make_app};
use newspulse::utils::{config::Config, state::AppState};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    let config = Config::init();
    info!("Configuration loaded successfully");

    let addr = format!("127.0.0.1:{}", config.port);
    let state = Arc::new(AppState::new(config));
    let app = make_app(state);

    let listener = TcpListener::bind(&addr).await;

    match listener {
        Ok(res) => {
            info!("Backend proxy server running on http://{}", addr);
            serve(res, app).await.unwrap()
        }
        Err(err) => panic!("{}", err),
    }
}
