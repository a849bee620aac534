//! JSON REST handlers for reviews.

use axum::extract::{Path, State};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::model::resolve_id;
use hbnb_domain::review::Review;

use super::response::{DeleteResponse, GetResponse};
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// `GET /api/v1/reviews/{id}`
pub async fn get<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<GetResponse<Review>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let review_id = resolve_id::<Review>(&id)?;
    let review = state.review_service.get_review(review_id).await?;
    Ok(GetResponse::ok(review))
}

/// `PUT /api/v1/reviews/{id}`
pub async fn update<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<GetResponse<Review>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let review_id = resolve_id::<Review>(&id)?;
    let updated = state.review_service.update_review(review_id, body).await?;
    Ok(GetResponse::ok(updated))
}

/// `DELETE /api/v1/reviews/{id}`
pub async fn delete<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let review_id = resolve_id::<Review>(&id)?;
    state.review_service.delete_review(review_id).await?;
    Ok(DeleteResponse::Deleted)
}
