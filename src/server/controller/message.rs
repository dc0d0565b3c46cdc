use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::role_permission::Area;

use crate::{
    model::message::{CreateMessageDto, MessageListQuery, UpdateMessageStatusDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidJson},
        model::{
            auth::{CurrentUser, Permission},
            message::{CreateMessageParams, MessageFilter},
        },
        service::message::MessageService,
        state::AppState,
    },
};

/// POST /api/messages - Queue a message to a member
///
/// The message is stored PENDING; delivery is reported back through the
/// status endpoint.
///
/// # Authentication
/// Requires CREATE on MESSAGE
///
/// # Returns
/// - `201 Created`: JSON MessageDto
/// - `400 Bad Request`: Unknown member or no recipient phone
pub async fn create_message(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidJson(payload): ValidJson<CreateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::create(Area::Message)])
        .await?;

    let message = MessageService::new(&state.db)
        .create(CreateMessageParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// GET /api/messages - List messages, newest first
///
/// # Authentication
/// Requires VIEW on MESSAGE
pub async fn list_messages(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(query): Query<MessageListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Message)])
        .await?;

    let messages = MessageService::new(&state.db)
        .list(MessageFilter::from_query(query))
        .await?;
    let messages_dto: Vec<_> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(messages_dto)))
}

/// GET /api/messages/{id} - Get one message
///
/// # Authentication
/// Requires VIEW on MESSAGE
pub async fn get_message(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Message)])
        .await?;

    let message = MessageService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

/// PUT /api/messages/{id}/status - Mark a PENDING message SENT or FAILED
///
/// # Authentication
/// Requires EDIT on MESSAGE
///
/// # Returns
/// - `200 OK`: JSON MessageDto
/// - `400 Bad Request`: Message already settled or target status PENDING
pub async fn update_message_status(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMessageStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Message)])
        .await?;

    let message = MessageService::new(&state.db)
        .mark(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

/// DELETE /api/messages/{id} - Delete a message
///
/// # Authentication
/// Requires DELETE on MESSAGE
pub async fn delete_message(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::delete(Area::Message)])
        .await?;

    MessageService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
