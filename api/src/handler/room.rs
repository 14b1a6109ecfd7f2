use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::room::{CreateRoomRequest, RoomCreatedResponse, RoomListingResponse};

pub async fn register_room(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRoomRequest>,
) -> AppResult<(StatusCode, Json<RoomCreatedResponse>)> {
    req.validate(&())?;

    registry
        .room_repository()
        .create(req.into())
        .await
        .map(|room| (StatusCode::CREATED, Json(room.into())))
}

pub async fn show_room_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<RoomListingResponse>>> {
    registry
        .room_repository()
        .find_all()
        .await
        .map(|listings| {
            listings
                .into_iter()
                .map(RoomListingResponse::from)
                .collect()
        })
        .map(Json)
}
