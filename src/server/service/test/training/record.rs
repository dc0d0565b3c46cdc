use super::*;

/// Tests the season total over records spanning two years.
///
/// Expected: only the requested calendar year is summed
#[tokio::test]
async fn season_total_sums_one_year() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_table(BaseballRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let service = BaseballRecordService::new(db);
    service.create(record_params(member.id, date(2025, 12, 31), 4)).await?;
    service.create(record_params(member.id, date(2026, 1, 1), 1)).await?;
    service.create(record_params(member.id, date(2026, 12, 31), 2)).await?;

    let total = service.season_total(member.id, 2026).await?;

    assert_eq!(total.games, 2);
    assert_eq!(total.line.at_bats, 8);
    assert_eq!(total.line.hits, 3);
    assert_eq!(total.line.rates().batting_average, 0.375);

    Ok(())
}

/// Tests a line with more at-bats than plate appearances.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_inconsistent_line() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_table(BaseballRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let mut param = record_params(member.id, date(2026, 5, 1), 1);
    param.line.plate_appearances = 3;

    let result = BaseballRecordService::new(db).create(param).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a training log without a date.
///
/// Expected: dated today
#[tokio::test]
async fn training_log_defaults_to_today() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_table(TrainingLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let log = TrainingLogService::new(db)
        .create(CreateTrainingLogParams {
            member_id: member.id,
            coach_id: None,
            training_date: None,
            content: "Tee work, 50 swings".to_string(),
            duration_minutes: Some(60),
        })
        .await?;

    assert_eq!(log.training_date, Utc::now().date_naive());

    Ok(())
}
