use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::role_permission::Area;

use crate::{
    model::facility::{
        AvailabilityDto, AvailabilityQuery, CreateFacilityDto, SlotInputDto, UpdateFacilityDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::ValidJson},
        model::{
            auth::{CurrentUser, Permission},
            facility::{CreateFacilityParams, Slot, UpdateFacilityParams},
        },
        service::facility::FacilityService,
        state::AppState,
    },
};

/// POST /api/facilities - Create a facility
///
/// # Authentication
/// Requires CREATE on FACILITY
///
/// # Returns
/// - `201 Created`: JSON FacilityDto
pub async fn create_facility(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidJson(payload): ValidJson<CreateFacilityDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::create(Area::Facility)])
        .await?;

    let facility = FacilityService::new(&state.db)
        .create(CreateFacilityParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(facility.into_dto())))
}

/// GET /api/facilities - List facilities
///
/// # Authentication
/// Requires VIEW on FACILITY
///
/// # Returns
/// - `200 OK`: JSON array of FacilityDto
pub async fn list_facilities(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Facility)])
        .await?;

    let facilities = FacilityService::new(&state.db).list().await?;
    let facilities_dto: Vec<_> = facilities.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(facilities_dto)))
}

/// GET /api/facilities/{id} - Get one facility
///
/// # Authentication
/// Requires VIEW on FACILITY
///
/// # Returns
/// - `200 OK`: JSON FacilityDto
/// - `400 Bad Request`: Facility not found
pub async fn get_facility(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Facility)])
        .await?;

    let facility = FacilityService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(facility.into_dto())))
}

/// PUT /api/facilities/{id} - Update a facility
///
/// # Authentication
/// Requires EDIT on FACILITY
///
/// # Returns
/// - `200 OK`: JSON FacilityDto after the update
/// - `400 Bad Request`: Validation failure or facility not found
pub async fn update_facility(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateFacilityDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Facility)])
        .await?;

    let facility = FacilityService::new(&state.db)
        .update(id, UpdateFacilityParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(facility.into_dto())))
}

/// DELETE /api/facilities/{id} - Delete a facility without bookings
///
/// # Authentication
/// Requires DELETE on FACILITY
///
/// # Returns
/// - `204 No Content`: Facility and its slots deleted
/// - `400 Bad Request`: Facility not found or still has bookings
pub async fn delete_facility(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::delete(Area::Facility)])
        .await?;

    FacilityService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/facilities/{id}/slots - Get weekly opening hours
///
/// # Authentication
/// Requires VIEW on FACILITY
///
/// # Returns
/// - `200 OK`: JSON array of SlotDto ordered by weekday
pub async fn get_slots(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Facility)])
        .await?;

    let slots = FacilityService::new(&state.db).slots(id).await?;
    let slots_dto: Vec<_> = slots.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(slots_dto)))
}

/// PUT /api/facilities/{id}/slots - Replace weekly opening hours
///
/// `day_of_week` accepts 1-7, `"1"`-`"7"` or an English day name. Weekdays
/// left out are unrestricted.
///
/// # Authentication
/// Requires EDIT on FACILITY
///
/// # Returns
/// - `200 OK`: JSON array of the stored SlotDto
/// - `400 Bad Request`: Unknown weekday, duplicate weekday or open not before close
pub async fn set_slots(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    Json(payload): Json<Vec<SlotInputDto>>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::edit(Area::Facility)])
        .await?;

    let slots = payload
        .into_iter()
        .map(|input| {
            let raw = input.day_of_week.clone();
            Slot::from_input(input)
                .ok_or_else(|| AppError::BadRequest(format!("Invalid day of week: {}", raw)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let stored = FacilityService::new(&state.db).set_slots(id, slots).await?;
    let stored_dto: Vec<_> = stored.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(stored_dto)))
}

/// GET /api/facilities/{id}/availability - Check a time range
///
/// # Authentication
/// Requires VIEW on FACILITY
///
/// # Query Parameters
/// - `date`, `start`, `end`: The range to check
///
/// # Returns
/// - `200 OK`: JSON AvailabilityDto
/// - `400 Bad Request`: Facility not found or start not before end
pub async fn get_availability(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i32>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &current)
        .require(&[Permission::view(Area::Facility)])
        .await?;

    let (within_hours, free) = FacilityService::new(&state.db)
        .availability(id, query.date, query.start, query.end)
        .await?;

    Ok((StatusCode::OK, Json(AvailabilityDto { within_hours, free })))
}
