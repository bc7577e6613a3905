use super::{
    super::{error::*, model::*, service::*, upstream::*},
    response::*,
};

use {
    ::axum::{
        Json,
        extract::*,
        response::{IntoResponse, Response},
    },
    serde::Deserialize,
    std::result::Result,
};

//
// CodeQuery
//

/// Query with an optional `code` parameter.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CodeQuery {
    /// Station code.
    pub code: Option<String>,
}

impl CodeQuery {
    /// Non-empty code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|code| !code.is_empty())
    }
}

/// Axum request handler for all station details.
pub async fn stations_handler<FetchT>(
    State(service): State<TransitService<FetchT>>,
) -> Result<Json<Vec<StationDetail>>, Error>
where
    FetchT: Fetch,
{
    Ok(Json(service.get_stations().await?))
}

/// Axum request handler for one station's entrances.
///
/// Requires the `code` query parameter.
pub async fn entrances_handler<FetchT>(
    State(service): State<TransitService<FetchT>>,
    Query(query): Query<CodeQuery>,
) -> Response
where
    FetchT: Fetch,
{
    match query.code() {
        Some(code) => service.get_entrances(code).await.map(Json).into_response(),
        None => bad_request("Missing station code"),
    }
}

/// Axum request handler for all lines.
pub async fn lines_handler<FetchT>(State(service): State<TransitService<FetchT>>) -> Result<Json<Vec<LineInfo>>, Error>
where
    FetchT: Fetch,
{
    Ok(Json(service.get_lines().await?))
}

/// Axum request handler for parking.
///
/// With the `code` query parameter returns that station's parking, otherwise all parking.
pub async fn parking_handler<FetchT>(
    State(service): State<TransitService<FetchT>>,
    Query(query): Query<CodeQuery>,
) -> Result<Json<ParkingSelection>, Error>
where
    FetchT: Fetch,
{
    Ok(Json(service.get_parking(query.code()).await?))
}

/// Axum request handler for train predictions.
///
/// With the `code` query parameter returns that platform's predictions, soonest first. Otherwise
/// returns all predictions in upstream order.
pub async fn predictions_handler<FetchT>(
    State(service): State<TransitService<FetchT>>,
    Query(query): Query<CodeQuery>,
) -> Result<Json<Vec<TrainPrediction>>, Error>
where
    FetchT: Fetch,
{
    let predictions = service.get_predictions().await?;
    Ok(Json(match query.code() {
        Some(code) => {
            let mut predictions = predictions_for(&predictions, code);
            sort_by_arrival(&mut predictions);
            predictions
        }

        None => predictions,
    }))
}
