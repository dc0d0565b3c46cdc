//! Booking repository.

use chrono::{NaiveDate, NaiveTime, Utc};
use entity::booking::BookingStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::booking::{
    Booking, BookingFilter, CreateBookingParams, UpdateBookingParams,
};

/// Repository providing database operations for facility bookings.
pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a PENDING booking.
    pub async fn create(&self, param: CreateBookingParams) -> Result<Booking, DbErr> {
        let now = Utc::now();
        let entity = entity::booking::ActiveModel {
            facility_id: ActiveValue::Set(param.facility_id),
            member_id: ActiveValue::Set(param.member_id),
            coach_id: ActiveValue::Set(param.coach_id),
            member_product_id: ActiveValue::Set(param.member_product_id),
            purpose: ActiveValue::Set(param.purpose),
            status: ActiveValue::Set(BookingStatus::Pending),
            booking_date: ActiveValue::Set(param.booking_date),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            participants: ActiveValue::Set(param.participants),
            product_deducted: ActiveValue::Set(false),
            memo: ActiveValue::Set(param.memo),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Gets bookings matching every provided filter, ordered by date and start time.
    pub async fn list(&self, filter: &BookingFilter) -> Result<Vec<Booking>, DbErr> {
        let mut query = entity::prelude::Booking::find();

        if let Some(from) = filter.from {
            query = query.filter(entity::booking::Column::BookingDate.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(entity::booking::Column::BookingDate.lte(to));
        }
        if let Some(facility_id) = filter.facility_id {
            query = query.filter(entity::booking::Column::FacilityId.eq(facility_id));
        }
        if let Some(member_id) = filter.member_id {
            query = query.filter(entity::booking::Column::MemberId.eq(member_id));
        }
        if let Some(coach_id) = filter.coach_id {
            query = query.filter(entity::booking::Column::CoachId.eq(coach_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::booking::Column::Status.eq(status));
        }

        let entities = query
            .order_by_asc(entity::booking::Column::BookingDate)
            .order_by_asc(entity::booking::Column::StartTime)
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Checks for a PENDING or CONFIRMED booking of the facility overlapping `[start, end)`.
    ///
    /// Bookings that only touch at an endpoint do not overlap.
    ///
    /// # Arguments
    /// - `facility_id` - Facility being booked
    /// - `date` - Booking date
    /// - `start` / `end` - Requested time range
    /// - `exclude_id` - Booking to ignore, used when moving that booking
    pub async fn has_overlap(
        &self,
        facility_id: i32,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::FacilityId.eq(facility_id))
            .filter(entity::booking::Column::BookingDate.eq(date))
            .filter(
                entity::booking::Column::Status
                    .is_in([BookingStatus::Pending, BookingStatus::Confirmed]),
            )
            .filter(entity::booking::Column::StartTime.lt(end))
            .filter(entity::booking::Column::EndTime.gt(start));
        if let Some(id) = exclude_id {
            query = query.filter(entity::booking::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies the provided schedule fields, coach, participants and memo.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateBookingParams,
    ) -> Result<Option<Booking>, DbErr> {
        let Some(entity) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::booking::ActiveModel = entity.into();
        if let Some(booking_date) = param.booking_date {
            active_model.booking_date = ActiveValue::Set(booking_date);
        }
        if let Some(start_time) = param.start_time {
            active_model.start_time = ActiveValue::Set(start_time);
        }
        if let Some(end_time) = param.end_time {
            active_model.end_time = ActiveValue::Set(end_time);
        }
        if let Some(coach_id) = param.coach_id {
            active_model.coach_id = ActiveValue::Set(coach_id);
        }
        if let Some(participants) = param.participants {
            active_model.participants = ActiveValue::Set(participants);
        }
        if let Some(memo) = param.memo {
            active_model.memo = ActiveValue::Set(Some(memo));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Booking::from_entity(entity)))
    }

    /// Writes a new status and deduction flag.
    pub async fn set_state(
        &self,
        id: i32,
        status: BookingStatus,
        product_deducted: bool,
    ) -> Result<Option<Booking>, DbErr> {
        let Some(entity) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::booking::ActiveModel = entity.into();
        active_model.status = ActiveValue::Set(status);
        active_model.product_deducted = ActiveValue::Set(product_deducted);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Booking::from_entity(entity)))
    }

    pub async fn exists_for_facility(&self, facility_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::FacilityId.eq(facility_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Members of bookings run by a coach. May contain duplicates.
    pub async fn member_ids_by_coach(&self, coach_id: i32) -> Result<Vec<i32>, DbErr> {
        let ids = entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::MemberId)
            .filter(entity::booking::Column::CoachId.eq(coach_id))
            .filter(entity::booking::Column::MemberId.is_not_null())
            .into_tuple::<Option<i32>>()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().flatten().collect())
    }

    pub async fn clear_coach(&self, coach_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .filter(entity::booking::Column::CoachId.eq(coach_id))
            .col_expr(entity::booking::Column::CoachId, Expr::value(Option::<i32>::None))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
