use {
    clap::Parser,
    metro_cache::{
        TransitService,
        axum::{Assets, DEFAULT_LINES_GEOJSON, DEFAULT_STATIONS_GEOJSON, router},
        cache::CacheConfiguration,
        upstream::{CapturedError, DEFAULT_PREDICTIONS_URL, DEFAULT_RAIL_URL, Endpoints, HttpFetch, Upstream},
    },
    std::{net::SocketAddr, path::PathBuf, result::Result, time::Duration},
    tokio::net::TcpListener,
    tracing_subscriber::{EnvFilter, fmt::time::LocalTime},
};

/// Caching proxy for the WMATA rail API.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Arguments {
    /// WMATA API key.
    #[arg(long, env = "WMATA_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Address to listen on.
    #[arg(long, env = "METRO_LISTEN", default_value = "0.0.0.0:8080")]
    listen: SocketAddr,

    /// Static data refresh interval.
    #[arg(long, env = "METRO_STATIC_INTERVAL", default_value = "24h", value_parser = parse_duration)]
    static_interval: Duration,

    /// Prediction refresh interval.
    #[arg(long, env = "METRO_PREDICTION_INTERVAL", default_value = "20s", value_parser = parse_duration)]
    prediction_interval: Duration,

    /// Upstream request timeout.
    #[arg(long, env = "METRO_TIMEOUT", default_value = "30s", value_parser = parse_duration)]
    timeout: Duration,

    /// Rail API base URL.
    #[arg(long, env = "METRO_RAIL_URL", default_value = DEFAULT_RAIL_URL)]
    rail_url: String,

    /// All-stations prediction URL.
    #[arg(long, env = "METRO_PREDICTIONS_URL", default_value = DEFAULT_PREDICTIONS_URL)]
    predictions_url: String,

    /// Station GeoJSON file.
    #[arg(long, default_value = DEFAULT_STATIONS_GEOJSON)]
    stations_geojson: PathBuf,

    /// Line GeoJSON file.
    #[arg(long, default_value = DEFAULT_LINES_GEOJSON)]
    lines_geojson: PathBuf,

    /// Directory of front end assets to serve.
    #[arg(long)]
    assets: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), CapturedError> {
    // A missing .env is fine; the key may come from the environment or the command line
    _ = dotenvy::dotenv();

    init_tracing();

    let arguments = Arguments::parse();

    let upstream = Upstream::new(
        HttpFetch::new_with_timeout(arguments.timeout)?,
        arguments.api_key,
        Endpoints::new(arguments.rail_url, arguments.predictions_url),
    );

    let configuration = CacheConfiguration::default()
        .static_interval(arguments.static_interval)
        .prediction_interval(arguments.prediction_interval);

    let service = TransitService::new(upstream, configuration);

    // Pre-warm before accepting requests
    let (static_data, predictions) = service.start_background_refresh().await;

    let assets = Assets {
        stations_geojson: arguments.stations_geojson,
        lines_geojson: arguments.lines_geojson,
        directory: arguments.assets,
    };

    let listener = TcpListener::bind(arguments.listen).await?;
    tracing::info!("bound to: {:?}", listener.local_addr());

    ::axum::serve(listener, router(service, &assets))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    static_data.shutdown().await;
    predictions.shutdown().await;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::rfc_3339())
        .init();
}

fn parse_duration(duration: &str) -> Result<Duration, String> {
    duration_str::parse(duration).map_err(|error| error.to_string())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutting down"),
        Err(error) => {
            tracing::error!("could not listen for shutdown signal: {}", error);
            std::future::pending::<()>().await
        }
    }
}
