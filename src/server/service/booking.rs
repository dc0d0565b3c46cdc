//! Facility bookings and their lifecycle.
//!
//! PENDING → CONFIRMED | CANCELLED, CONFIRMED → COMPLETED | CANCELLED | NO_SHOW.
//! Confirming a booking linked to a pass deducts one session exactly once;
//! cancelling gives it back. A no-show keeps the deduction.

use chrono::{NaiveDate, NaiveTime, Utc};
use entity::{booking::BookingStatus, member_product::MemberProductStatus};
use sea_orm::{ActiveEnum, ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        attendance::AttendanceRepository, booking::BookingRepository, coach::CoachRepository,
        facility::FacilityRepository, member::MemberRepository,
        member_product::MemberProductRepository,
    },
    error::AppError,
    model::{
        booking::{Booking, BookingFilter, CreateBookingParams, UpdateBookingParams},
        member_product::{LedgerChange, LedgerLinks},
    },
    service::{
        facility::within_hours,
        member_product::{expire_if_overdue, ledger::Ledger},
    },
};

/// Confirms a PENDING booking on the caller's connection.
///
/// Deducts one session from the linked pass unless that already happened.
pub async fn confirm_booking<C: ConnectionTrait>(
    db: &C,
    booking: Booking,
    created_by: Option<String>,
    today: NaiveDate,
) -> Result<Booking, AppError> {
    ensure_transition(&booking, BookingStatus::Confirmed)?;

    let mut deducted = booking.product_deducted;
    if let (Some(pass_id), false) = (booking.member_product_id, deducted) {
        Ledger::new(db)
            .deduct(
                pass_id,
                LedgerChange::new(1)
                    .links(LedgerLinks::booking(booking.id))
                    .description(format!("Booking {} confirmed", booking.id))
                    .created_by(created_by),
                today,
            )
            .await?;
        deducted = true;
    }

    BookingRepository::new(db)
        .set_state(booking.id, BookingStatus::Confirmed, deducted)
        .await?
        .ok_or_else(|| AppError::not_found("Booking", booking.id))
}

fn ensure_transition(booking: &Booking, next: BookingStatus) -> Result<(), AppError> {
    if booking.status.can_transition_to(next) {
        return Ok(());
    }

    Err(AppError::BadRequest(format!(
        "Booking {} cannot move from {} to {}",
        booking.id,
        booking.status.to_value(),
        next.to_value()
    )))
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a PENDING booking after validating every reference and the slot.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The new booking
    /// - `Err(AppError::NotFound)` - Facility, member, coach or pass does not exist
    /// - `Err(AppError::BadRequest)` - Inactive facility, unusable pass, bad time
    ///   range, outside opening hours or overlapping another booking
    pub async fn create(&self, param: CreateBookingParams) -> Result<Booking, AppError> {
        ensure_range(param.start_time, param.end_time)?;

        let facility = FacilityRepository::new(self.db)
            .find_by_id(param.facility_id)
            .await?
            .ok_or_else(|| AppError::not_found("Facility", param.facility_id))?;
        if !facility.active {
            return Err(AppError::BadRequest(format!(
                "Facility {} is not active",
                facility.id
            )));
        }

        let txn = self.db.begin().await?;

        if let Some(member_id) = param.member_id {
            MemberRepository::new(&txn)
                .find_by_id(member_id)
                .await?
                .ok_or_else(|| AppError::not_found("Member", member_id))?;
        }
        if let Some(coach_id) = param.coach_id {
            CoachRepository::new(&txn)
                .find_by_id(coach_id)
                .await?
                .ok_or_else(|| AppError::not_found("Coach", coach_id))?;
        }
        if let Some(pass_id) = param.member_product_id {
            let pass = MemberProductRepository::new(&txn)
                .find_by_id(pass_id)
                .await?
                .ok_or_else(|| AppError::not_found("Pass", pass_id))?;
            if Some(pass.member_id) != param.member_id {
                return Err(AppError::BadRequest(format!(
                    "Pass {} does not belong to the booked member",
                    pass_id
                )));
            }
            if pass.status != MemberProductStatus::Active {
                return Err(AppError::BadRequest(format!(
                    "Pass {} is {}",
                    pass_id,
                    pass.status.to_value()
                )));
            }
        }

        ensure_slot_free(
            &txn,
            param.facility_id,
            param.booking_date,
            param.start_time,
            param.end_time,
            None,
        )
        .await?;

        let booking = BookingRepository::new(&txn).create(param).await?;
        txn.commit().await?;

        tracing::info!(
            booking_id = booking.id,
            facility_id = booking.facility_id,
            date = %booking.booking_date,
            "Booking created"
        );

        Ok(booking)
    }

    /// Reschedules or edits a PENDING or CONFIRMED booking.
    pub async fn update(&self, id: i32, param: UpdateBookingParams) -> Result<Booking, AppError> {
        let txn = self.db.begin().await?;
        let booking_repo = BookingRepository::new(&txn);

        let booking = booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking", id))?;
        if !booking.status.is_occupying() {
            return Err(AppError::BadRequest(format!(
                "Booking {} is {} and can no longer be changed",
                id,
                booking.status.to_value()
            )));
        }

        if let Some(Some(coach_id)) = param.coach_id {
            CoachRepository::new(&txn)
                .find_by_id(coach_id)
                .await?
                .ok_or_else(|| AppError::not_found("Coach", coach_id))?;
        }

        let date = param.booking_date.unwrap_or(booking.booking_date);
        let start = param.start_time.unwrap_or(booking.start_time);
        let end = param.end_time.unwrap_or(booking.end_time);
        let rescheduled =
            date != booking.booking_date || start != booking.start_time || end != booking.end_time;
        if rescheduled {
            ensure_range(start, end)?;
            ensure_slot_free(&txn, booking.facility_id, date, start, end, Some(id))
                .await?;
        }

        let booking = booking_repo
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::not_found("Booking", id))?;
        txn.commit().await?;

        Ok(booking)
    }

    /// PENDING → CONFIRMED, deducting one session from the linked pass.
    pub async fn confirm(&self, id: i32, created_by: Option<String>) -> Result<Booking, AppError> {
        let today = Utc::now().date_naive();
        let booking = self.get(id).await?;
        if let Some(pass_id) = booking.member_product_id {
            expire_if_overdue(self.db, pass_id, today).await?;
        }

        let txn = self.db.begin().await?;
        let booking = BookingRepository::new(&txn)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking", id))?;
        let booking = confirm_booking(&txn, booking, created_by, today).await?;
        txn.commit().await?;

        tracing::info!(booking_id = id, deducted = booking.product_deducted, "Booking confirmed");

        Ok(booking)
    }

    /// Cancels a booking and returns a deducted session to its pass.
    ///
    /// A checked-in booking cannot be cancelled while its attendance exists.
    pub async fn cancel(&self, id: i32, created_by: Option<String>) -> Result<Booking, AppError> {
        let txn = self.db.begin().await?;
        let booking_repo = BookingRepository::new(&txn);

        let booking = booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking", id))?;
        ensure_transition(&booking, BookingStatus::Cancelled)?;
        if AttendanceRepository::new(&txn)
            .find_by_booking(id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(format!(
                "Booking {} is checked in; delete the attendance first",
                id
            )));
        }

        if let (Some(pass_id), true) = (booking.member_product_id, booking.product_deducted) {
            Ledger::new(&txn)
                .credit(
                    pass_id,
                    LedgerChange::new(1)
                        .links(LedgerLinks::booking(id))
                        .description(format!("Booking {} cancelled", id))
                        .created_by(created_by),
                )
                .await?;
        }

        let booking = booking_repo
            .set_state(id, BookingStatus::Cancelled, false)
            .await?
            .ok_or_else(|| AppError::not_found("Booking", id))?;
        txn.commit().await?;

        tracing::info!(booking_id = id, "Booking cancelled");

        Ok(booking)
    }

    /// CONFIRMED → NO_SHOW; the deducted session is kept.
    pub async fn no_show(&self, id: i32) -> Result<Booking, AppError> {
        self.finish(id, BookingStatus::NoShow).await
    }

    /// CONFIRMED → COMPLETED.
    pub async fn complete(&self, id: i32) -> Result<Booking, AppError> {
        self.finish(id, BookingStatus::Completed).await
    }

    pub async fn get(&self, id: i32) -> Result<Booking, AppError> {
        BookingRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking", id))
    }

    pub async fn list(&self, filter: BookingFilter) -> Result<Vec<Booking>, AppError> {
        Ok(BookingRepository::new(self.db).list(&filter).await?)
    }

    /// Deletes a PENDING or CANCELLED booking.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let booking = self.get(id).await?;
        if !matches!(
            booking.status,
            BookingStatus::Pending | BookingStatus::Cancelled
        ) {
            return Err(AppError::BadRequest(format!(
                "Booking {} is {}; only pending or cancelled bookings can be deleted",
                id,
                booking.status.to_value()
            )));
        }

        BookingRepository::new(self.db).delete(id).await?;

        tracing::info!(booking_id = id, "Booking deleted");

        Ok(())
    }

    async fn finish(&self, id: i32, next: BookingStatus) -> Result<Booking, AppError> {
        let booking = self.get(id).await?;
        ensure_transition(&booking, next)?;

        let booking = BookingRepository::new(self.db)
            .set_state(id, next, booking.product_deducted)
            .await?
            .ok_or_else(|| AppError::not_found("Booking", id))?;

        tracing::info!(booking_id = id, status = %next.to_value(), "Booking closed");

        Ok(booking)
    }
}

fn ensure_range(start: NaiveTime, end: NaiveTime) -> Result<(), AppError> {
    if start >= end {
        return Err(AppError::BadRequest(
            "Start time must be before end time".to_string(),
        ));
    }

    Ok(())
}

async fn ensure_slot_free<C: ConnectionTrait>(
    db: &C,
    facility_id: i32,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    if !within_hours(db, facility_id, date, start, end).await? {
        return Err(AppError::BadRequest(format!(
            "{} {}-{} is outside the facility's opening hours",
            date, start, end
        )));
    }

    if BookingRepository::new(db)
        .has_overlap(facility_id, date, start, end, exclude_id)
        .await?
    {
        return Err(AppError::BadRequest(format!(
            "{} {}-{} overlaps another booking",
            date, start, end
        )));
    }

    Ok(())
}
