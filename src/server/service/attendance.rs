//! Check-in and check-out.
//!
//! A check-in consumes one session from the member's pass unless the linked
//! booking already did when it was confirmed. Deleting an attendance gives
//! back whatever its ledger entries took.

use chrono::Utc;
use entity::{booking::BookingStatus, member::MemberStatus};
use sea_orm::{ActiveEnum, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        attendance::AttendanceRepository, booking::BookingRepository, member::MemberRepository,
        member_product::MemberProductRepository,
        member_product_history::MemberProductHistoryRepository,
    },
    error::AppError,
    model::{
        attendance::{Attendance, AttendanceFilter, CheckInParams, NewAttendance},
        member_product::{LedgerChange, LedgerLinks},
    },
    service::{
        booking::confirm_booking,
        member_product::{expire_if_overdue, ledger::Ledger},
    },
};

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a check-in.
    ///
    /// A PENDING booking is confirmed first. One session is deducted from the
    /// given pass (or the booking's pass) unless the booking already deducted.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - The new attendance
    /// - `Err(AppError::NotFound)` - Member, booking or pass does not exist
    /// - `Err(AppError::BadRequest)` - Booking of another member, not bookable
    ///   state, already checked in, or an unusable pass
    pub async fn check_in(&self, param: CheckInParams) -> Result<Attendance, AppError> {
        let now = Utc::now();
        let today = now.date_naive();

        let pass_hint = match param.booking_id {
            Some(booking_id) => BookingRepository::new(self.db)
                .find_by_id(booking_id)
                .await?
                .and_then(|booking| booking.member_product_id),
            None => None,
        };
        if let Some(pass_id) = param.member_product_id.or(pass_hint) {
            expire_if_overdue(self.db, pass_id, today).await?;
        }

        let txn = self.db.begin().await?;

        let member = MemberRepository::new(&txn)
            .find_by_id(param.member_id)
            .await?
            .ok_or_else(|| AppError::not_found("Member", param.member_id))?;
        if member.status == MemberStatus::Withdrawn {
            return Err(AppError::BadRequest(format!(
                "Member {} has withdrawn",
                member.id
            )));
        }

        let mut booking = None;
        if let Some(booking_id) = param.booking_id {
            let found = BookingRepository::new(&txn)
                .find_by_id(booking_id)
                .await?
                .ok_or_else(|| AppError::not_found("Booking", booking_id))?;
            if found.member_id != Some(member.id) {
                return Err(AppError::BadRequest(format!(
                    "Booking {} belongs to another member",
                    booking_id
                )));
            }
            if let (Some(requested), Some(booked)) =
                (param.member_product_id, found.member_product_id)
            {
                if requested != booked {
                    return Err(AppError::BadRequest(format!(
                        "Booking {} is charged to pass {}, not pass {}",
                        booking_id, booked, requested
                    )));
                }
            }
            if AttendanceRepository::new(&txn)
                .find_by_booking(booking_id)
                .await?
                .is_some()
            {
                return Err(AppError::BadRequest(format!(
                    "Booking {} is already checked in",
                    booking_id
                )));
            }

            let found = match found.status {
                BookingStatus::Pending => {
                    confirm_booking(&txn, found, param.created_by.clone(), today).await?
                }
                BookingStatus::Confirmed => found,
                status => {
                    return Err(AppError::BadRequest(format!(
                        "Booking {} is {}",
                        booking_id,
                        status.to_value()
                    )))
                }
            };
            booking = Some(found);
        }

        let pass_id = param
            .member_product_id
            .or(booking.as_ref().and_then(|b| b.member_product_id));
        if let Some(pass_id) = pass_id {
            let pass = MemberProductRepository::new(&txn)
                .find_by_id(pass_id)
                .await?
                .ok_or_else(|| AppError::not_found("Pass", pass_id))?;
            if pass.member_id != member.id {
                return Err(AppError::BadRequest(format!(
                    "Pass {} belongs to another member",
                    pass_id
                )));
            }
        }

        let attendance = AttendanceRepository::new(&txn)
            .create(NewAttendance {
                member_id: member.id,
                booking_id: param.booking_id,
                member_product_id: pass_id,
                attendance_date: today,
                check_in_at: now,
                memo: param.memo,
            })
            .await?;

        let already_deducted = booking.as_ref().is_some_and(|b| b.product_deducted);
        if let (Some(pass_id), false) = (pass_id, already_deducted) {
            Ledger::new(&txn)
                .deduct(
                    pass_id,
                    LedgerChange::new(1)
                        .links(LedgerLinks {
                            attendance_id: Some(attendance.id),
                            booking_id: param.booking_id,
                            payment_id: None,
                        })
                        .description(format!("Check-in {}", attendance.id))
                        .created_by(param.created_by),
                    today,
                )
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            attendance_id = attendance.id,
            member_id = attendance.member_id,
            booking_id = ?attendance.booking_id,
            "Member checked in"
        );

        Ok(attendance)
    }

    /// Records the check-out time; a CONFIRMED booking becomes COMPLETED.
    pub async fn check_out(&self, id: i32) -> Result<Attendance, AppError> {
        let txn = self.db.begin().await?;
        let attendance_repo = AttendanceRepository::new(&txn);

        let attendance = attendance_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Attendance", id))?;
        if attendance.check_out_at.is_some() {
            return Err(AppError::BadRequest(format!(
                "Attendance {} is already checked out",
                id
            )));
        }

        let attendance = attendance_repo
            .set_check_out(id, Utc::now())
            .await?
            .ok_or_else(|| AppError::not_found("Attendance", id))?;

        if let Some(booking_id) = attendance.booking_id {
            let booking_repo = BookingRepository::new(&txn);
            if let Some(booking) = booking_repo.find_by_id(booking_id).await? {
                if booking.status == BookingStatus::Confirmed {
                    booking_repo
                        .set_state(booking_id, BookingStatus::Completed, booking.product_deducted)
                        .await?;
                }
            }
        }

        txn.commit().await?;

        Ok(attendance)
    }

    pub async fn get(&self, id: i32) -> Result<Attendance, AppError> {
        AttendanceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Attendance", id))
    }

    pub async fn list(&self, filter: AttendanceFilter) -> Result<Vec<Attendance>, AppError> {
        Ok(AttendanceRepository::new(self.db).list(&filter).await?)
    }

    /// Deletes an attendance, crediting back the sessions its entries took.
    ///
    /// The ledger entries stay but lose their link to the attendance.
    pub async fn delete(&self, id: i32, created_by: Option<String>) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        AttendanceRepository::new(&txn)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Attendance", id))?;

        let history_repo = MemberProductHistoryRepository::new(&txn);
        let ledger = Ledger::new(&txn);
        for (pass_id, net) in history_repo.net_change_by_attendance(id).await? {
            if net >= 0 {
                continue;
            }
            let amount = i32::try_from(-net)
                .map_err(|_| AppError::InternalError(format!("Net change overflow: {}", net)))?;

            ledger
                .credit(
                    pass_id,
                    LedgerChange::new(amount)
                        .description(format!("Attendance {} deleted", id))
                        .created_by(created_by.clone()),
                )
                .await?;
        }

        history_repo.unlink_attendance(id).await?;
        AttendanceRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!(attendance_id = id, "Attendance deleted");

        Ok(())
    }
}
