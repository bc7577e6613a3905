use super::{
    super::{service::*, upstream::*},
    handlers::*,
};

use {
    ::axum::{
        Router,
        http::{Method, header::CONTENT_TYPE},
        routing::*,
    },
    std::path::*,
    tower::ServiceBuilder,
    tower_http::{
        cors::{Any, CorsLayer},
        services::{ServeDir, ServeFile},
        trace::TraceLayer,
    },
};

/// Default station GeoJSON file.
pub const DEFAULT_STATIONS_GEOJSON: &str = "Metro_Rail_Stations.geojson";

/// Default line GeoJSON file.
pub const DEFAULT_LINES_GEOJSON: &str = "Metro_Rail_Lines.geojson";

//
// Assets
//

/// Static files served alongside the API.
#[derive(Clone, Debug)]
pub struct Assets {
    /// Station GeoJSON file.
    pub stations_geojson: PathBuf,

    /// Line GeoJSON file.
    pub lines_geojson: PathBuf,

    /// Directory served for all other paths (the dashboard front end).
    pub directory: Option<PathBuf>,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            stations_geojson: DEFAULT_STATIONS_GEOJSON.into(),
            lines_geojson: DEFAULT_LINES_GEOJSON.into(),
            directory: None,
        }
    }
}

/// Router for the API and assets.
///
/// Routes:
///
/// * `/stations`
/// * `/entrances?code=`
/// * `/nexttrains[?code=]`
/// * `/lines`
/// * `/parking[?code=]`
/// * `/geojson/stations`
/// * `/geojson/lines`
///
/// Everything else falls back to the assets directory, if configured.
pub fn router<FetchT>(service: TransitService<FetchT>, assets: &Assets) -> Router
where
    FetchT: Fetch,
{
    let mut router = Router::new()
        .route("/stations", get(stations_handler::<FetchT>))
        .route("/entrances", get(entrances_handler::<FetchT>))
        .route("/nexttrains", get(predictions_handler::<FetchT>))
        .route("/lines", get(lines_handler::<FetchT>))
        .route("/parking", get(parking_handler::<FetchT>))
        .route_service("/geojson/stations", ServeFile::new(&assets.stations_geojson))
        .route_service("/geojson/lines", ServeFile::new(&assets.lines_geojson));

    if let Some(directory) = &assets.directory {
        router = router.fallback_service(ServeDir::new(directory));
    }

    router.with_state(service).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors()),
    )
}

/// CORS layer allowing any origin to `GET`.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}
