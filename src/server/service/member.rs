//! Member registration and profile management.
//!
//! Members are numbered `M<registration_seq><phone suffix>`. The sequence is
//! assigned once at registration; the number is re-derived only when the phone
//! number changes, and a backdate edit never touches it.

use chrono::Utc;
use entity::{member::MemberStatus, member_product::MemberProductStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{coach::CoachRepository, member::MemberRepository, member_product::MemberProductRepository},
    error::AppError,
    model::{
        member::{
            CreateMemberParams, Member, MemberSearchParams, MemberSummary, NewMember,
            UpdateMemberParams,
        },
        page::Paginated,
    },
    util::phone::{member_number, normalize_phone},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a member with the next registration sequence.
    ///
    /// # Returns
    /// - `Ok(Member)` - The new member with its member number
    /// - `Err(AppError::BadRequest)` - Phone missing or already registered
    /// - `Err(AppError::NotFound)` - Assigned coach does not exist
    pub async fn create(&self, param: CreateMemberParams) -> Result<Member, AppError> {
        let phone = normalized_phone(&param.phone)?;
        let txn = self.db.begin().await?;
        let member_repo = MemberRepository::new(&txn);

        if member_repo.phone_taken(&phone, None).await? {
            return Err(phone_taken(&phone));
        }
        if let Some(coach_id) = param.coach_id {
            CoachRepository::new(&txn)
                .find_by_id(coach_id)
                .await?
                .ok_or_else(|| AppError::not_found("Coach", coach_id))?;
        }

        let registration_seq = member_repo.max_registration_seq().await? + 1;
        let member = member_repo
            .create(NewMember {
                member_number: member_number(registration_seq, &phone),
                registration_seq,
                name: param.name.trim().to_string(),
                phone,
                profile: param.profile,
                grade: param.grade,
                coach_id: param.coach_id,
                joined_on: param.joined_on.unwrap_or_else(|| Utc::now().date_naive()),
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            member_id = member.id,
            member_number = %member.member_number,
            "Member registered"
        );

        Ok(member)
    }

    pub async fn get(&self, id: i32) -> Result<Member, AppError> {
        MemberRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Member", id))
    }

    pub async fn get_by_member_number(&self, member_number: &str) -> Result<Member, AppError> {
        MemberRepository::new(self.db)
            .find_by_member_number(member_number.trim())
            .await?
            .ok_or_else(|| AppError::not_found("Member", member_number))
    }

    /// Substring search over name, phone and member number with filters.
    pub async fn search(&self, param: MemberSearchParams) -> Result<Paginated<Member>, AppError> {
        let (members, total) = MemberRepository::new(self.db).search(&param).await?;

        Ok(Paginated {
            items: members,
            total,
            page: param.page,
            per_page: param.per_page,
        })
    }

    /// Applies the provided fields to a member.
    ///
    /// A phone change re-checks uniqueness and regenerates the member number
    /// with the existing sequence. With `backdate_only` only `joined_on` is
    /// applied.
    ///
    /// # Returns
    /// - `Ok(Member)` - Updated member
    /// - `Err(AppError::NotFound)` - Member or coach does not exist
    /// - `Err(AppError::BadRequest)` - Phone taken, or backdate edit without a date
    pub async fn update(&self, id: i32, mut param: UpdateMemberParams) -> Result<Member, AppError> {
        if param.backdate_only {
            return self.backdate(id, param).await;
        }

        let txn = self.db.begin().await?;
        let member_repo = MemberRepository::new(&txn);

        let existing = member_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Member", id))?;

        if let Some(Some(coach_id)) = param.coach_id {
            CoachRepository::new(&txn)
                .find_by_id(coach_id)
                .await?
                .ok_or_else(|| AppError::not_found("Coach", coach_id))?;
        }

        let mut new_number = None;
        if let Some(raw) = param.phone.take() {
            let phone = normalized_phone(&raw)?;
            if phone != existing.phone {
                if member_repo.phone_taken(&phone, Some(id)).await? {
                    return Err(phone_taken(&phone));
                }
                new_number = Some(member_number(existing.registration_seq, &phone));
                param.phone = Some(phone);
            }
        }
        if let Some(name) = param.name.as_mut() {
            *name = name.trim().to_string();
        }

        let member = member_repo
            .update(id, param, new_number.clone())
            .await?
            .ok_or_else(|| AppError::not_found("Member", id))?;

        txn.commit().await?;

        if let Some(number) = new_number {
            tracing::info!(
                member_id = id,
                old = %existing.member_number,
                new = %number,
                "Member number regenerated after phone change"
            );
        }

        Ok(member)
    }

    /// Soft delete: the member becomes WITHDRAWN.
    pub async fn delete(&self, id: i32) -> Result<Member, AppError> {
        let member = MemberRepository::new(self.db)
            .update(
                id,
                UpdateMemberParams {
                    status: Some(MemberStatus::Withdrawn),
                    ..Default::default()
                },
                None,
            )
            .await?
            .ok_or_else(|| AppError::not_found("Member", id))?;

        tracing::info!(member_id = id, "Member withdrawn");

        Ok(member)
    }

    /// The member with the passes that are still ACTIVE.
    pub async fn summary(&self, id: i32) -> Result<MemberSummary, AppError> {
        let member = self.get(id).await?;
        let active_passes = MemberProductRepository::new(self.db)
            .find_by_member(id, Some(MemberProductStatus::Active))
            .await?;

        Ok(MemberSummary {
            member,
            active_passes,
        })
    }

    async fn backdate(&self, id: i32, param: UpdateMemberParams) -> Result<Member, AppError> {
        let Some(joined_on) = param.joined_on else {
            return Err(AppError::BadRequest(
                "joined_on is required for a backdate edit".to_string(),
            ));
        };

        let member = MemberRepository::new(self.db)
            .update(
                id,
                UpdateMemberParams {
                    joined_on: Some(joined_on),
                    backdate_only: true,
                    ..Default::default()
                },
                None,
            )
            .await?
            .ok_or_else(|| AppError::not_found("Member", id))?;

        tracing::info!(member_id = id, %joined_on, "Member join date backdated");

        Ok(member)
    }
}

fn normalized_phone(raw: &str) -> Result<String, AppError> {
    let phone = normalize_phone(raw);
    if phone.is_empty() {
        return Err(AppError::BadRequest("Phone number is required".to_string()));
    }

    Ok(phone)
}

fn phone_taken(phone: &str) -> AppError {
    AppError::BadRequest(format!("Phone number already registered: {}", phone))
}
