use axum::{Json, extract::State, http::StatusCode, response::{IntoResponse, Response}};
use common::{filter_response::InsertListingResponse, listing::Listing};

use crate::{db_utils::listings_file::InsertOutcome, server::AppState};

/// Rejects values the JSON shape alone cannot rule out.
pub fn validate_listing(listing: &Listing) -> Result<(), String> {
    if !listing.price_per_day.is_finite() || listing.price_per_day < 0.0 {
        return Err(format!("pricePerDay must be a non-negative number, got {}", listing.price_per_day));
    }
    Ok(())
}

pub async fn insert_listing(State(state): State<AppState>, Json(listing): Json<Listing>) -> Response {
    if let Err(message) = validate_listing(&listing) {
        tracing::warn!("insert_listing: rejected listing {}: {}", listing.id, message);
        return (StatusCode::UNPROCESSABLE_ENTITY, message).into_response();
    }
    match state.listings.insert(listing).await {
        Ok(InsertOutcome::Inserted { total }) => {
            tracing::info!("insert_listing: collection now holds {} listings", total);
            Json(InsertListingResponse::success()).into_response()
        }
        Ok(InsertOutcome::DuplicateId(id)) => {
            tracing::warn!("insert_listing: id {} already exists", id);
            (StatusCode::CONFLICT, format!("listing id {} already exists", id)).into_response()
        }
        Err(e) => {
            tracing::error!("insert_listing: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e)).into_response()
        }
    }
}
