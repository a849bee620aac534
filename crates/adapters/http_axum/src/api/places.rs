//! JSON REST handlers for places and their reviews.

use axum::extract::{Path, State};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, ReviewRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::model::resolve_id;
use hbnb_domain::place::Place;
use hbnb_domain::review::Review;

use super::response::{CreateResponse, DeleteResponse, GetResponse, ListResponse};
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// `GET /api/v1/places/{id}`
pub async fn get<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<GetResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let place_id = resolve_id::<Place>(&id)?;
    let place = state.place_service.get_place(place_id).await?;
    Ok(GetResponse::ok(place))
}

/// `PUT /api/v1/places/{id}`
pub async fn update<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<GetResponse<Place>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let place_id = resolve_id::<Place>(&id)?;
    let updated = state.place_service.update_place(place_id, body).await?;
    Ok(GetResponse::ok(updated))
}

/// `DELETE /api/v1/places/{id}`
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
    let place_id = resolve_id::<Place>(&id)?;
    state.place_service.delete_place(place_id).await?;
    Ok(DeleteResponse::Deleted)
}

/// `GET /api/v1/places/{id}/reviews`
pub async fn list_reviews<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<ListResponse<Review>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let parent_id = resolve_id::<Place>(&id)?;
    let reviews = state.review_service.list_reviews_of_place(parent_id).await?;
    Ok(ListResponse::ok(reviews))
}

/// `POST /api/v1/places/{id}/reviews`
pub async fn create_review<SR, CR, AR, UR, PR, RR>(
    State(state): State<AppState<SR, CR, AR, UR, PR, RR>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<CreateResponse<Review>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let parent_id = resolve_id::<Place>(&id)?;
    let created = state.review_service.create_review(parent_id, body).await?;
    Ok(CreateResponse::created(created))
}
