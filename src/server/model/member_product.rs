//! Passes issued to members and their ledger entries.

use chrono::{DateTime, Days, NaiveDate, Utc};
use entity::{
    member_product::MemberProductStatus, member_product_history::LedgerKind,
    product::ProductType,
};

use crate::model::member_product::{
    AdjustDto, CreditDto, DeductDto, HistoryDto, LedgerCheckDto, LedgerWriteDto, MemberProductDto,
    PurchaseDto, UpdateMemberProductDto,
};

/// Validity of a MONTHLY_PASS product without `valid_days`.
pub const MONTHLY_PASS_DAYS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct MemberProduct {
    pub id: i32,
    pub member_id: i32,
    pub product_id: i32,
    pub coach_id: Option<i32>,
    pub total_count: Option<i32>,
    pub remaining_count: Option<i32>,
    pub purchased_at: DateTime<Utc>,
    pub starts_on: NaiveDate,
    pub expires_on: Option<NaiveDate>,
    pub status: MemberProductStatus,
}

impl MemberProduct {
    pub fn from_entity(entity: entity::member_product::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            product_id: entity.product_id,
            coach_id: entity.coach_id,
            total_count: entity.total_count,
            remaining_count: entity.remaining_count,
            purchased_at: entity.purchased_at,
            starts_on: entity.starts_on,
            expires_on: entity.expires_on,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> MemberProductDto {
        MemberProductDto {
            id: self.id,
            member_id: self.member_id,
            product_id: self.product_id,
            coach_id: self.coach_id,
            total_count: self.total_count,
            remaining_count: self.remaining_count,
            purchased_at: self.purchased_at,
            starts_on: self.starts_on,
            expires_on: self.expires_on,
            status: self.status,
        }
    }
}

/// Whether a pass with this expiry date is overdue on `today`.
pub fn is_overdue(expires_on: Option<NaiveDate>, today: NaiveDate) -> bool {
    expires_on.is_some_and(|date| date < today)
}

/// Session count granted by a purchase, `None` for uncounted passes.
pub fn resolve_total_count(
    product_type: ProductType,
    count_override: Option<i32>,
    product_usage_count: Option<i32>,
    default_total_count: i32,
) -> Option<i32> {
    match product_type {
        ProductType::SingleUse => Some(1),
        ProductType::TimePass | ProductType::MonthlyPass => count_override.or(product_usage_count),
        ProductType::CountPass | ProductType::TeamPackage => Some(
            count_override
                .or(product_usage_count)
                .unwrap_or(default_total_count),
        ),
    }
}

/// Last valid day of a pass starting on `starts_on`.
pub fn resolve_expiry(
    product_type: ProductType,
    valid_days: Option<i32>,
    starts_on: NaiveDate,
) -> Option<NaiveDate> {
    let days = match (valid_days, product_type) {
        (Some(days), _) if days > 0 => days as u64,
        (_, ProductType::MonthlyPass) => MONTHLY_PASS_DAYS,
        _ => return None,
    };

    starts_on.checked_add_days(Days::new(days))
}

/// Optional references recorded on a ledger entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerLinks {
    pub attendance_id: Option<i32>,
    pub payment_id: Option<i32>,
    pub booking_id: Option<i32>,
}

impl LedgerLinks {
    pub fn attendance(attendance_id: i32) -> Self {
        Self {
            attendance_id: Some(attendance_id),
            ..Default::default()
        }
    }

    pub fn booking(booking_id: i32) -> Self {
        Self {
            booking_id: Some(booking_id),
            ..Default::default()
        }
    }

    pub fn payment(payment_id: i32) -> Self {
        Self {
            payment_id: Some(payment_id),
            ..Default::default()
        }
    }
}

/// One immutable ledger entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub id: i32,
    pub member_product_id: i32,
    pub member_id: i32,
    pub kind: LedgerKind,
    pub change_amount: i32,
    pub remaining_after: Option<i32>,
    pub links: LedgerLinks,
    pub description: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn from_entity(entity: entity::member_product_history::Model) -> Self {
        Self {
            id: entity.id,
            member_product_id: entity.member_product_id,
            member_id: entity.member_id,
            kind: entity.kind,
            change_amount: entity.change_amount,
            remaining_after: entity.remaining_after,
            links: LedgerLinks {
                attendance_id: entity.attendance_id,
                payment_id: entity.payment_id,
                booking_id: entity.booking_id,
            },
            description: entity.description,
            created_by: entity.created_by,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> HistoryDto {
        HistoryDto {
            id: self.id,
            member_product_id: self.member_product_id,
            member_id: self.member_id,
            kind: self.kind,
            change_amount: self.change_amount,
            remaining_after: self.remaining_after,
            attendance_id: self.links.attendance_id,
            payment_id: self.links.payment_id,
            booking_id: self.links.booking_id,
            description: self.description,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}

/// Values for a new ledger row.
#[derive(Debug, Clone)]
pub struct NewLedgerEntry {
    pub member_product_id: i32,
    pub member_id: i32,
    pub kind: LedgerKind,
    pub change_amount: i32,
    pub remaining_after: Option<i32>,
    pub links: LedgerLinks,
    pub description: Option<String>,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PurchaseParams {
    pub member_id: i32,
    pub product_id: i32,
    pub coach_id: Option<i32>,
    pub starts_on: Option<NaiveDate>,
    pub total_count: Option<i32>,
    pub payment_id: Option<i32>,
    pub created_by: Option<String>,
}

impl PurchaseParams {
    pub fn from_dto(dto: PurchaseDto, created_by: Option<String>) -> Self {
        Self {
            member_id: dto.member_id,
            product_id: dto.product_id,
            coach_id: dto.coach_id,
            starts_on: dto.starts_on,
            total_count: dto.total_count,
            payment_id: dto.payment_id,
            created_by,
        }
    }
}

/// Values for a new member_product row.
#[derive(Debug, Clone)]
pub struct NewMemberProduct {
    pub member_id: i32,
    pub product_id: i32,
    pub coach_id: Option<i32>,
    pub total_count: Option<i32>,
    pub starts_on: NaiveDate,
    pub expires_on: Option<NaiveDate>,
}

/// A balance change applied to a pass.
#[derive(Debug, Clone)]
pub struct LedgerChange {
    pub amount: i32,
    pub links: LedgerLinks,
    pub description: Option<String>,
    pub created_by: Option<String>,
}

impl LedgerChange {
    pub fn new(amount: i32) -> Self {
        Self {
            amount,
            links: LedgerLinks::default(),
            description: None,
            created_by: None,
        }
    }

    pub fn links(mut self, links: LedgerLinks) -> Self {
        self.links = links;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn created_by(mut self, created_by: Option<String>) -> Self {
        self.created_by = created_by;
        self
    }

    pub fn from_deduct_dto(dto: DeductDto, created_by: Option<String>) -> Self {
        Self {
            amount: dto.amount,
            links: LedgerLinks {
                attendance_id: dto.attendance_id,
                payment_id: None,
                booking_id: dto.booking_id,
            },
            description: dto.description,
            created_by,
        }
    }

    pub fn from_credit_dto(dto: CreditDto, created_by: Option<String>) -> Self {
        Self {
            amount: dto.amount,
            links: LedgerLinks {
                attendance_id: dto.attendance_id,
                payment_id: None,
                booking_id: dto.booking_id,
            },
            description: Some(dto.reason),
            created_by,
        }
    }

    /// The amount of an adjustment is derived from the new remaining count.
    pub fn from_adjust_dto(dto: &AdjustDto, created_by: Option<String>) -> Self {
        Self::new(0)
            .description(dto.reason.clone())
            .created_by(created_by)
    }
}

/// Converts a ledger write result into its wire form.
pub fn ledger_write_dto((pass, entry): (MemberProduct, LedgerEntry)) -> LedgerWriteDto {
    LedgerWriteDto {
        pass: pass.into_dto(),
        entry: entry.into_dto(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMemberProductParams {
    pub coach_id: Option<Option<i32>>,
    pub expires_on: Option<NaiveDate>,
}

impl UpdateMemberProductParams {
    pub fn from_dto(dto: UpdateMemberProductDto) -> Self {
        Self {
            coach_id: dto.coach_id,
            expires_on: dto.expires_on,
        }
    }
}

/// Ledger sum compared with the stored balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerCheck {
    pub member_product_id: i32,
    pub stored_remaining: Option<i32>,
    pub ledger_sum: i64,
}

impl LedgerCheck {
    /// Uncounted passes only record zero-amount deductions, so their sum must be 0.
    pub fn is_consistent(&self) -> bool {
        self.ledger_sum == i64::from(self.stored_remaining.unwrap_or(0))
    }

    pub fn into_dto(self) -> LedgerCheckDto {
        LedgerCheckDto {
            consistent: self.is_consistent(),
            member_product_id: self.member_product_id,
            stored_remaining: self.stored_remaining,
            ledger_sum: self.ledger_sum,
        }
    }
}
