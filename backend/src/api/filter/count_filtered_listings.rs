use axum::{Json, extract::{Query, State}, http::StatusCode, response::{IntoResponse, Response}};
use common::{filter_criteria::FilterCriteria, filter_response::FilterCountResponse, listing_filter::count_listings};
use tracing::debug;

use crate::server::AppState;

async fn _count_filtered_listings(state: AppState, params: Vec<(String, String)>) -> anyhow::Result<u64> {
    let criteria = FilterCriteria::from_query_params(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    debug!("Counting listings for {:?}", criteria);

    let listings = state.listings.read_all().await?;
    let count = count_listings(&criteria, &listings);
    debug!("{} of {} listings match", count, listings.len());
    Ok(count)
}

pub async fn count_filtered_listings(State(state): State<AppState>, Query(params): Query<Vec<(String, String)>>) -> Response {
    match _count_filtered_listings(state, params).await {
        Ok(count) => Json(FilterCountResponse { count }).into_response(),
        Err(e) => {
            tracing::error!("count_filtered_listings: request failed: {:#?}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e)).into_response();
        }
    }
}
