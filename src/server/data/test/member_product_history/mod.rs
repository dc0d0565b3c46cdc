use crate::server::{
    data::member_product_history::MemberProductHistoryRepository,
    model::member_product::{LedgerLinks, NewLedgerEntry},
};
use entity::member_product_history::LedgerKind;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::helpers::create_member_with_pass};

mod find_by_member_product;
mod net_change_by_attendance;
mod sum_changes;

fn entry(
    member_product_id: i32,
    member_id: i32,
    kind: LedgerKind,
    change_amount: i32,
    remaining_after: i32,
    links: LedgerLinks,
) -> NewLedgerEntry {
    NewLedgerEntry {
        member_product_id,
        member_id,
        kind,
        change_amount,
        remaining_after: Some(remaining_after),
        links,
        description: None,
        created_by: None,
    }
}
