use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::attendance::{Attendance, AttendanceFilter, NewAttendance};

/// Repository providing database operations for attendance records.
pub struct AttendanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttendanceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: NewAttendance) -> Result<Attendance, DbErr> {
        let entity = entity::attendance::ActiveModel {
            member_id: ActiveValue::Set(param.member_id),
            booking_id: ActiveValue::Set(param.booking_id),
            member_product_id: ActiveValue::Set(param.member_product_id),
            attendance_date: ActiveValue::Set(param.attendance_date),
            check_in_at: ActiveValue::Set(param.check_in_at),
            check_out_at: ActiveValue::Set(None),
            memo: ActiveValue::Set(param.memo),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Attendance::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Attendance>, DbErr> {
        let entity = entity::prelude::Attendance::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Attendance::from_entity))
    }

    pub async fn find_by_booking(&self, booking_id: i32) -> Result<Option<Attendance>, DbErr> {
        let entity = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::BookingId.eq(booking_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Attendance::from_entity))
    }

    /// Gets attendance records, newest check-in first.
    pub async fn list(&self, filter: &AttendanceFilter) -> Result<Vec<Attendance>, DbErr> {
        let mut query = entity::prelude::Attendance::find();

        if let Some(member_id) = filter.member_id {
            query = query.filter(entity::attendance::Column::MemberId.eq(member_id));
        }
        if let Some(from) = filter.from {
            query = query.filter(entity::attendance::Column::AttendanceDate.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(entity::attendance::Column::AttendanceDate.lte(to));
        }

        let entities = query
            .order_by_desc(entity::attendance::Column::CheckInAt)
            .order_by_desc(entity::attendance::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Attendance::from_entity).collect())
    }

    pub async fn set_check_out(
        &self,
        id: i32,
        at: DateTime<Utc>,
    ) -> Result<Option<Attendance>, DbErr> {
        let Some(entity) = entity::prelude::Attendance::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::attendance::ActiveModel = entity.into();
        active_model.check_out_at = ActiveValue::Set(Some(at));

        let entity = active_model.update(self.db).await?;

        Ok(Some(Attendance::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Attendance::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
