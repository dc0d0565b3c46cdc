//! Facilities and their weekly opening hours.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        booking::BookingRepository,
        facility::{FacilityRepository, FacilitySlotRepository},
    },
    error::AppError,
    model::facility::{CreateFacilityParams, Facility, Slot, UpdateFacilityParams},
    util::day_of_week::day_of,
};

/// Whether `[start, end]` on `date` is inside the facility's hours.
///
/// A weekday without a slot row is unrestricted; otherwise the slot must be
/// open and contain the whole range.
pub async fn within_hours<C: ConnectionTrait>(
    db: &C,
    facility_id: i32,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<bool, DbErr> {
    let slot = FacilitySlotRepository::new(db)
        .find_for_day(facility_id, day_of(date))
        .await?;

    Ok(slot.map_or(true, |slot| slot.contains(start, end)))
}

pub struct FacilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FacilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateFacilityParams) -> Result<Facility, AppError> {
        let facility = FacilityRepository::new(self.db).create(param).await?;

        tracing::info!(facility_id = facility.id, "Facility created");

        Ok(facility)
    }

    pub async fn get(&self, id: i32) -> Result<Facility, AppError> {
        FacilityRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Facility", id))
    }

    pub async fn list(&self) -> Result<Vec<Facility>, AppError> {
        Ok(FacilityRepository::new(self.db).get_all().await?)
    }

    pub async fn update(&self, id: i32, param: UpdateFacilityParams) -> Result<Facility, AppError> {
        FacilityRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::not_found("Facility", id))
    }

    /// Deletes a facility that has never been booked, with its slots.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.get(id).await?;

        if BookingRepository::new(self.db).exists_for_facility(id).await? {
            return Err(AppError::BadRequest(format!(
                "Facility {} has bookings; deactivate it instead",
                id
            )));
        }

        FacilitySlotRepository::new(self.db)
            .delete_by_facility(id)
            .await?;
        FacilityRepository::new(self.db).delete(id).await?;

        tracing::info!(facility_id = id, "Facility deleted");

        Ok(())
    }

    /// Replaces the weekly slots of a facility.
    ///
    /// # Returns
    /// - `Ok(Vec<Slot>)` - Stored slots ordered by weekday
    /// - `Err(AppError::BadRequest)` - A weekday appears twice or opens after it closes
    /// - `Err(AppError::NotFound)` - Facility does not exist
    pub async fn set_slots(&self, facility_id: i32, slots: Vec<Slot>) -> Result<Vec<Slot>, AppError> {
        self.get(facility_id).await?;

        let mut seen = [false; 8];
        for slot in &slots {
            let day = usize::from(slot.day_of_week);
            if !(1..=7).contains(&day) {
                return Err(AppError::BadRequest(format!(
                    "Invalid day of week: {}",
                    slot.day_of_week
                )));
            }
            if seen[day] {
                return Err(AppError::BadRequest(format!(
                    "Day {} appears more than once",
                    day
                )));
            }
            seen[day] = true;

            if slot.open_time >= slot.close_time {
                return Err(AppError::BadRequest(format!(
                    "Opening time must be before closing time on day {}",
                    day
                )));
            }
        }

        let txn = self.db.begin().await?;
        let slot_repo = FacilitySlotRepository::new(&txn);
        slot_repo.replace(facility_id, &slots).await?;
        let stored = slot_repo.find_by_facility(facility_id).await?;
        txn.commit().await?;

        tracing::info!(facility_id, days = stored.len(), "Facility hours replaced");

        Ok(stored)
    }

    pub async fn slots(&self, facility_id: i32) -> Result<Vec<Slot>, AppError> {
        self.get(facility_id).await?;

        Ok(FacilitySlotRepository::new(self.db)
            .find_by_facility(facility_id)
            .await?)
    }

    pub async fn is_within_hours(
        &self,
        facility_id: i32,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<bool, AppError> {
        self.get(facility_id).await?;

        Ok(within_hours(self.db, facility_id, date, start, end).await?)
    }

    /// Whether a range is inside opening hours and free of active bookings.
    ///
    /// # Returns
    /// - `Ok((within_hours, free))`
    pub async fn availability(
        &self,
        facility_id: i32,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<(bool, bool), AppError> {
        if start >= end {
            return Err(AppError::BadRequest(
                "Start time must be before end time".to_string(),
            ));
        }

        let within = self.is_within_hours(facility_id, date, start, end).await?;
        let overlaps = BookingRepository::new(self.db)
            .has_overlap(facility_id, date, start, end, None)
            .await?;

        Ok((within, !overlaps))
    }
}
