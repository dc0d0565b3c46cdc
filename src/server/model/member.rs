//! Member domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::member::{Grade, MemberStatus};

use crate::{
    model::member::{CreateMemberDto, MemberDto, MemberSearchQuery, UpdateMemberDto},
    server::model::member_product::MemberProduct,
};

/// A registered member.
///
/// `registration_seq` never changes after creation; `member_number` is derived
/// from it and the phone number.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub member_number: String,
    pub registration_seq: i32,
    pub name: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub batting_hand: Option<String>,
    pub throwing_hand: Option<String>,
    pub position: Option<String>,
    pub school: Option<String>,
    pub guardian_phone: Option<String>,
    pub grade: Grade,
    pub status: MemberStatus,
    pub coach_id: Option<i32>,
    pub memo: Option<String>,
    pub joined_on: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            member_number: entity.member_number,
            registration_seq: entity.registration_seq,
            name: entity.name,
            phone: entity.phone,
            birth_date: entity.birth_date,
            gender: entity.gender,
            height_cm: entity.height_cm,
            weight_kg: entity.weight_kg,
            batting_hand: entity.batting_hand,
            throwing_hand: entity.throwing_hand,
            position: entity.position,
            school: entity.school,
            guardian_phone: entity.guardian_phone,
            grade: entity.grade,
            status: entity.status,
            coach_id: entity.coach_id,
            memo: entity.memo,
            joined_on: entity.joined_on,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            member_number: self.member_number,
            registration_seq: self.registration_seq,
            name: self.name,
            phone: self.phone,
            birth_date: self.birth_date,
            gender: self.gender,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            batting_hand: self.batting_hand,
            throwing_hand: self.throwing_hand,
            position: self.position,
            school: self.school,
            guardian_phone: self.guardian_phone,
            grade: self.grade,
            status: self.status,
            coach_id: self.coach_id,
            memo: self.memo,
            joined_on: self.joined_on,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Profile fields shared by create and update.
#[derive(Debug, Clone, Default)]
pub struct MemberProfile {
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub batting_hand: Option<String>,
    pub throwing_hand: Option<String>,
    pub position: Option<String>,
    pub school: Option<String>,
    pub guardian_phone: Option<String>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateMemberParams {
    pub name: String,
    /// Raw phone input; normalized by the service.
    pub phone: String,
    pub profile: MemberProfile,
    pub grade: Grade,
    pub coach_id: Option<i32>,
    /// Defaults to today.
    pub joined_on: Option<NaiveDate>,
}

impl CreateMemberParams {
    pub fn from_dto(dto: CreateMemberDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            profile: MemberProfile {
                birth_date: dto.birth_date,
                gender: dto.gender,
                height_cm: dto.height_cm,
                weight_kg: dto.weight_kg,
                batting_hand: dto.batting_hand,
                throwing_hand: dto.throwing_hand,
                position: dto.position,
                school: dto.school,
                guardian_phone: dto.guardian_phone,
                memo: dto.memo,
            },
            grade: dto.grade.unwrap_or(Grade::Regular),
            coach_id: dto.coach_id,
            joined_on: dto.joined_on,
        }
    }
}

/// Insert values for a member row after numbering has been assigned.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub member_number: String,
    pub registration_seq: i32,
    pub name: String,
    pub phone: String,
    pub profile: MemberProfile,
    pub grade: Grade,
    pub coach_id: Option<i32>,
    pub joined_on: NaiveDate,
}

/// Partial member update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateMemberParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub profile: MemberProfile,
    pub grade: Option<Grade>,
    pub status: Option<MemberStatus>,
    pub coach_id: Option<Option<i32>>,
    pub joined_on: Option<NaiveDate>,
    /// Apply only `joined_on` and ignore every other field.
    pub backdate_only: bool,
}

impl UpdateMemberParams {
    pub fn from_dto(dto: UpdateMemberDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            profile: MemberProfile {
                birth_date: dto.birth_date,
                gender: dto.gender,
                height_cm: dto.height_cm,
                weight_kg: dto.weight_kg,
                batting_hand: dto.batting_hand,
                throwing_hand: dto.throwing_hand,
                position: dto.position,
                school: dto.school,
                guardian_phone: dto.guardian_phone,
                memo: dto.memo,
            },
            grade: dto.grade,
            status: dto.status,
            coach_id: dto.coach_id,
            joined_on: dto.joined_on,
            backdate_only: dto.backdate_only,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemberSearchParams {
    pub query: Option<String>,
    pub grade: Option<Grade>,
    pub status: Option<MemberStatus>,
    pub coach_id: Option<i32>,
    pub page: u64,
    pub per_page: u64,
}

impl MemberSearchParams {
    pub fn from_query(query: MemberSearchQuery) -> Self {
        Self {
            query: query
                .q
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
            grade: query.grade,
            status: query.status,
            coach_id: query.coach_id,
            page: query.page,
            per_page: query.entries,
        }
    }
}

/// A member with the passes that can still be used.
#[derive(Debug, Clone)]
pub struct MemberSummary {
    pub member: Member,
    pub active_passes: Vec<MemberProduct>,
}

impl MemberSummary {
    pub fn into_dto(self) -> crate::model::member::MemberSummaryDto {
        let total_remaining = self
            .active_passes
            .iter()
            .filter_map(|p| p.remaining_count)
            .sum();

        crate::model::member::MemberSummaryDto {
            member: self.member.into_dto(),
            active_passes: self
                .active_passes
                .into_iter()
                .map(MemberProduct::into_dto)
                .collect(),
            total_remaining,
        }
    }
}
