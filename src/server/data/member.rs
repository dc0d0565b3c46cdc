//! Member repository.
//!
//! Numbering (`registration_seq` and `member_number`) is computed by the
//! member service; this repository only stores what it is given.

use chrono::Utc;
use entity::member::MemberStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::member::{Member, MemberSearchParams, NewMember, UpdateMemberParams};

/// Repository providing database operations for members.
pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a member with an already assigned number.
    ///
    /// # Arguments
    /// - `param` - Member values including `registration_seq` and `member_number`
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member
    /// - `Err(DbErr)` - Database error, including unique violations on phone,
    ///   sequence or member number
    pub async fn create(&self, param: NewMember) -> Result<Member, DbErr> {
        let now = Utc::now();
        let entity = entity::member::ActiveModel {
            member_number: ActiveValue::Set(param.member_number),
            registration_seq: ActiveValue::Set(param.registration_seq),
            name: ActiveValue::Set(param.name),
            phone: ActiveValue::Set(param.phone),
            birth_date: ActiveValue::Set(param.profile.birth_date),
            gender: ActiveValue::Set(param.profile.gender),
            height_cm: ActiveValue::Set(param.profile.height_cm),
            weight_kg: ActiveValue::Set(param.profile.weight_kg),
            batting_hand: ActiveValue::Set(param.profile.batting_hand),
            throwing_hand: ActiveValue::Set(param.profile.throwing_hand),
            position: ActiveValue::Set(param.profile.position),
            school: ActiveValue::Set(param.profile.school),
            guardian_phone: ActiveValue::Set(param.profile.guardian_phone),
            grade: ActiveValue::Set(param.grade),
            status: ActiveValue::Set(MemberStatus::Active),
            coach_id: ActiveValue::Set(param.coach_id),
            memo: ActiveValue::Set(param.profile.memo),
            joined_on: ActiveValue::Set(param.joined_on),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Member::from_entity))
    }

    pub async fn find_by_member_number(&self, member_number: &str) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::MemberNumber.eq(member_number))
            .one(self.db)
            .await?;

        Ok(entity.map(Member::from_entity))
    }

    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Member>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Member::find()
            .filter(entity::member::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }

    /// Checks whether a normalized phone number belongs to another member.
    ///
    /// # Arguments
    /// - `phone` - Digits-only phone number
    /// - `exclude_id` - Member to ignore, used when updating that member
    pub async fn phone_taken(&self, phone: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Member::find()
            .filter(entity::member::Column::Phone.eq(phone));
        if let Some(id) = exclude_id {
            query = query.filter(entity::member::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Highest registration sequence assigned so far, 0 when no member exists.
    pub async fn max_registration_seq(&self) -> Result<i32, DbErr> {
        let entity = entity::prelude::Member::find()
            .order_by_desc(entity::member::Column::RegistrationSeq)
            .one(self.db)
            .await?;

        Ok(entity.map(|e| e.registration_seq).unwrap_or(0))
    }

    /// Searches members by text, grade, status and coach.
    ///
    /// The text query matches a substring of the name, phone or member number.
    ///
    /// # Returns
    /// - `Ok((members, total))` - Members of the requested page ordered by
    ///   registration sequence and the total match count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn search(&self, param: &MemberSearchParams) -> Result<(Vec<Member>, u64), DbErr> {
        let mut query = entity::prelude::Member::find();

        if let Some(q) = &param.query {
            query = query.filter(
                Condition::any()
                    .add(entity::member::Column::Name.contains(q))
                    .add(entity::member::Column::Phone.contains(q))
                    .add(entity::member::Column::MemberNumber.contains(q)),
            );
        }
        if let Some(grade) = param.grade {
            query = query.filter(entity::member::Column::Grade.eq(grade));
        }
        if let Some(status) = param.status {
            query = query.filter(entity::member::Column::Status.eq(status));
        }
        if let Some(coach_id) = param.coach_id {
            query = query.filter(entity::member::Column::CoachId.eq(coach_id));
        }

        let paginator = query
            .order_by_asc(entity::member::Column::RegistrationSeq)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page).await?;

        Ok((entities.into_iter().map(Member::from_entity).collect(), total))
    }

    /// Members assigned to a coach through `member.coach_id`.
    pub async fn find_by_coach(&self, coach_id: i32) -> Result<Vec<Member>, DbErr> {
        let entities = entity::prelude::Member::find()
            .filter(entity::member::Column::CoachId.eq(coach_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }

    /// Applies the provided fields of `param` to a member.
    ///
    /// `phone` must already be normalized. `member_number` is written only when
    /// given; `backdate_only` is not interpreted here.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Updated member
    /// - `Ok(None)` - No member with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateMemberParams,
        member_number: Option<String>,
    ) -> Result<Option<Member>, DbErr> {
        let Some(entity) = entity::prelude::Member::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::member::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(phone) = param.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(member_number) = member_number {
            active_model.member_number = ActiveValue::Set(member_number);
        }

        let profile = param.profile;
        if let Some(birth_date) = profile.birth_date {
            active_model.birth_date = ActiveValue::Set(Some(birth_date));
        }
        if let Some(gender) = profile.gender {
            active_model.gender = ActiveValue::Set(Some(gender));
        }
        if let Some(height_cm) = profile.height_cm {
            active_model.height_cm = ActiveValue::Set(Some(height_cm));
        }
        if let Some(weight_kg) = profile.weight_kg {
            active_model.weight_kg = ActiveValue::Set(Some(weight_kg));
        }
        if let Some(batting_hand) = profile.batting_hand {
            active_model.batting_hand = ActiveValue::Set(Some(batting_hand));
        }
        if let Some(throwing_hand) = profile.throwing_hand {
            active_model.throwing_hand = ActiveValue::Set(Some(throwing_hand));
        }
        if let Some(position) = profile.position {
            active_model.position = ActiveValue::Set(Some(position));
        }
        if let Some(school) = profile.school {
            active_model.school = ActiveValue::Set(Some(school));
        }
        if let Some(guardian_phone) = profile.guardian_phone {
            active_model.guardian_phone = ActiveValue::Set(Some(guardian_phone));
        }
        if let Some(memo) = profile.memo {
            active_model.memo = ActiveValue::Set(Some(memo));
        }

        if let Some(grade) = param.grade {
            active_model.grade = ActiveValue::Set(grade);
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status);
        }
        if let Some(coach_id) = param.coach_id {
            active_model.coach_id = ActiveValue::Set(coach_id);
        }
        if let Some(joined_on) = param.joined_on {
            active_model.joined_on = ActiveValue::Set(joined_on);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Member::from_entity(entity)))
    }

    /// Unassigns every member from a coach being deleted.
    pub async fn clear_coach(&self, coach_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Member::update_many()
            .filter(entity::member::Column::CoachId.eq(coach_id))
            .col_expr(entity::member::Column::CoachId, Expr::value(Option::<i32>::None))
            .col_expr(entity::member::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
