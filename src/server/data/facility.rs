//! Facility and weekly opening hours repositories.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::facility::{CreateFacilityParams, Facility, Slot, UpdateFacilityParams},
    util::day_of_week::normalize_day,
};

pub struct FacilityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FacilityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateFacilityParams) -> Result<Facility, DbErr> {
        let entity = entity::facility::ActiveModel {
            name: ActiveValue::Set(param.name),
            kind: ActiveValue::Set(param.kind),
            capacity: ActiveValue::Set(param.capacity),
            hourly_rate: ActiveValue::Set(param.hourly_rate),
            active: ActiveValue::Set(param.active),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Facility::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Facility>, DbErr> {
        let entity = entity::prelude::Facility::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Facility::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Facility>, DbErr> {
        let entities = entity::prelude::Facility::find()
            .order_by_asc(entity::facility::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Facility::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateFacilityParams,
    ) -> Result<Option<Facility>, DbErr> {
        let Some(entity) = entity::prelude::Facility::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::facility::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(kind) = param.kind {
            active_model.kind = ActiveValue::Set(kind);
        }
        if let Some(capacity) = param.capacity {
            active_model.capacity = ActiveValue::Set(capacity);
        }
        if let Some(hourly_rate) = param.hourly_rate {
            active_model.hourly_rate = ActiveValue::Set(hourly_rate);
        }
        if let Some(active) = param.active {
            active_model.active = ActiveValue::Set(active);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Facility::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Facility::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Repository for the weekly opening hours of facilities.
///
/// Day values are written as "1".."7". Rows written by older versions may hold
/// English day names; reads accept both.
pub struct FacilitySlotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FacilitySlotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replaces every slot of a facility.
    ///
    /// Run inside a transaction so the facility never ends up with a partial
    /// week.
    ///
    /// # Arguments
    /// - `facility_id` - Facility whose slots are replaced
    /// - `slots` - Validated slots, at most one per weekday
    pub async fn replace(&self, facility_id: i32, slots: &[Slot]) -> Result<(), DbErr> {
        entity::prelude::FacilitySlot::delete_many()
            .filter(entity::facility_slot::Column::FacilityId.eq(facility_id))
            .exec(self.db)
            .await?;

        for slot in slots {
            entity::facility_slot::ActiveModel {
                facility_id: ActiveValue::Set(facility_id),
                day_of_week: ActiveValue::Set(slot.day_of_week.to_string()),
                open_time: ActiveValue::Set(slot.open_time),
                close_time: ActiveValue::Set(slot.close_time),
                is_open: ActiveValue::Set(slot.is_open),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Gets the slots of a facility ordered by weekday.
    ///
    /// Rows with an unreadable day value are skipped with a warning.
    pub async fn find_by_facility(&self, facility_id: i32) -> Result<Vec<Slot>, DbErr> {
        let entities = entity::prelude::FacilitySlot::find()
            .filter(entity::facility_slot::Column::FacilityId.eq(facility_id))
            .all(self.db)
            .await?;

        let mut slots: Vec<Slot> = entities
            .into_iter()
            .filter_map(|entity| {
                let id = entity.id;
                let slot = Slot::from_entity(entity);
                if slot.is_none() {
                    tracing::warn!("Skipping facility slot {} with unreadable day_of_week", id);
                }
                slot
            })
            .collect();
        slots.sort_by_key(|slot| slot.day_of_week);

        Ok(slots)
    }

    pub async fn find_for_day(&self, facility_id: i32, day: u8) -> Result<Option<Slot>, DbErr> {
        let slots = self.find_by_facility(facility_id).await?;

        Ok(slots.into_iter().find(|slot| slot.day_of_week == day))
    }

    pub async fn delete_by_facility(&self, facility_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::FacilitySlot::delete_many()
            .filter(entity::facility_slot::Column::FacilityId.eq(facility_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Rewrites legacy day names as "1".."7". Returns the number of rows changed.
    pub async fn normalize_legacy_days(&self) -> Result<u64, DbErr> {
        let entities = entity::prelude::FacilitySlot::find().all(self.db).await?;

        let mut changed = 0;
        for entity in entities {
            let Some(normalized) = normalize_day(&entity.day_of_week) else {
                continue;
            };
            if normalized == entity.day_of_week {
                continue;
            }

            entity::prelude::FacilitySlot::update_many()
                .filter(entity::facility_slot::Column::Id.eq(entity.id))
                .col_expr(
                    entity::facility_slot::Column::DayOfWeek,
                    Expr::value(normalized),
                )
                .exec(self.db)
                .await?;
            changed += 1;
        }

        Ok(changed)
    }
}
