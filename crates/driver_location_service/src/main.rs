/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use actix_web::{web, App, HttpServer};
use driver_location_service::{
    domain::api,
    environment::{AppConfig, AppState},
    middleware::*,
    sweeper::run_sweeper,
    tools::{logger::*, prometheus::prometheus_metrics},
};
use std::{
    env::var,
    sync::atomic::{AtomicBool, Ordering},
};
use std::{sync::Arc, time::Duration};
use tokio::signal::unix::{signal, SignalKind};
use tracing_actix_web::TracingLogger;

pub fn read_dhall_config(config_path: &str) -> Result<AppConfig, String> {
    serde_dhall::from_file(config_path)
        .parse::<AppConfig>()
        .map_err(|e| format!("Error reading config: {}", e))
}

#[actix_web::main]
async fn start_server() -> std::io::Result<()> {
    let dhall_config_path = var("DHALL_CONFIG")
        .unwrap_or_else(|_| "./dhall_config/driver_location_service.dhall".to_string());
    let app_config = read_dhall_config(&dhall_config_path).unwrap_or_else(|err| {
        println!("Dhall Config Reading Error : {}", err);
        std::process::exit(1);
    });

    let _guard = setup_tracing(app_config.logger_cfg);

    let port = app_config.port;
    let workers = app_config.workers;

    let app_state = AppState::new(app_config);

    info!(
        tag = "[Starting Driver Location Service]",
        port = port,
        workers = workers,
        driver_location_ttl = app_state.location_service.ttl().num_seconds(),
        background_sweep_interval = ?app_state.background_sweep_interval
    );

    let graceful_termination_requested = Arc::new(AtomicBool::new(false));
    for kind in [SignalKind::terminate(), SignalKind::interrupt()] {
        let mut listener = signal(kind)?;
        let graceful_termination_requested = graceful_termination_requested.to_owned();
        tokio::spawn(async move {
            listener.recv().await;
            graceful_termination_requested.store(true, Ordering::Relaxed);
        });
    }

    let sweeper_thread = app_state.background_sweep_interval.map(|sweep_interval| {
        tokio::spawn(run_sweeper(
            app_state.location_service.to_owned(),
            Duration::from_secs(sweep_interval),
            graceful_termination_requested.to_owned(),
        ))
    });

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(CheckContentLength)
            .wrap(RequestTimeout)
            .wrap(IncomingRequestMetrics)
            .wrap(TracingLogger::<DomainRootSpanBuilder>::new())
            .wrap(prometheus_metrics())
            .configure(api::handler)
    })
    .workers(workers)
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    graceful_termination_requested.store(true, Ordering::Relaxed);
    if let Some(sweeper_thread) = sweeper_thread {
        sweeper_thread.abort();
    }

    Ok(())
}

fn main() {
    start_server().expect("Failed to start the server");
}
