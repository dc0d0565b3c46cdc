use crate::server::{
    error::AppError,
    model::{
        message::CreateMessageParams,
        training::{BattingLine, CreateBaseballRecordParams, CreateTrainingLogParams},
    },
    service::{
        message::MessageService,
        training::{BaseballRecordService, TrainingLogService},
    },
};
use chrono::{NaiveDate, Utc};
use entity::{
    message::{MessageChannel, MessageStatus},
    prelude::{BaseballRecord, Message, TrainingLog},
};
use test_utils::{builder::TestBuilder, factory};

mod message;
mod record;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record_params(member_id: i32, record_date: NaiveDate, hits: i32) -> CreateBaseballRecordParams {
    CreateBaseballRecordParams {
        member_id,
        record_date,
        line: BattingLine {
            plate_appearances: 4,
            at_bats: 4,
            hits,
            ..Default::default()
        },
        memo: None,
    }
}
