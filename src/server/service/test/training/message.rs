use super::*;

/// Tests a message without an explicit recipient.
///
/// Expected: PENDING and addressed to the member's phone
#[tokio::test]
async fn defaults_recipient_to_member_phone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_table(Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let message = MessageService::new(db)
        .create(CreateMessageParams {
            member_id: Some(member.id),
            recipient_phone: None,
            channel: MessageChannel::Sms,
            content: "Your pass expires in 3 days".to_string(),
        })
        .await?;

    assert_eq!(message.recipient_phone, member.phone);
    assert_eq!(message.status, MessageStatus::Pending);

    Ok(())
}

/// Tests a message with neither member nor phone.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn requires_a_recipient() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_table(Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MessageService::new(db)
        .create(CreateMessageParams {
            member_id: None,
            recipient_phone: Some("-".to_string()),
            channel: MessageChannel::Sms,
            content: "Hello".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests reporting the delivery outcome.
///
/// Expected: SENT once, a second report refused
#[tokio::test]
async fn mark_is_final() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_table(Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MessageService::new(db);
    let message = service
        .create(CreateMessageParams {
            member_id: None,
            recipient_phone: Some("010-1234-5678".to_string()),
            channel: MessageChannel::Kakao,
            content: "Hello".to_string(),
        })
        .await?;
    assert_eq!(message.recipient_phone, "01012345678");

    let sent = service.mark(message.id, MessageStatus::Sent).await?;
    assert_eq!(sent.status, MessageStatus::Sent);

    let again = service.mark(message.id, MessageStatus::Failed).await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));

    Ok(())
}
