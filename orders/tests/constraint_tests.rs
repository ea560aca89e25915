mod test_utils;

use orders::{ConstraintKind, OrderError, OrderService};
use sea_orm::{ConnectionTrait, DbErr};
use test_utils::*;

#[tokio::test]
async fn test_create_order_fails_when_customer_is_missing() -> TestResult {
    let service = store().await?;
    // the zero id an unset integer field would carry
    let order = sample_order(0);

    let err = service.create(order).await.expect_err("insert must be rejected");

    assert!(err.is_constraint_violation(), "unexpected error: {err}");
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));
    assert!(service.get_all(1, 10).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_create_order_fails_for_unknown_customer() -> TestResult {
    let service = store().await?;

    let err = service.create(sample_order(999)).await.expect_err("insert must be rejected");

    assert!(matches!(
        err,
        OrderError::ConstraintViolation { kind: ConstraintKind::ForeignKey, .. }
    ));

    Ok(())
}

#[tokio::test]
async fn test_update_to_unknown_customer_is_rejected() -> TestResult {
    let service = seeded_store(3).await?;
    let before = service.get_by_id(1).await?;

    let err = service
        .update(1, sample_order(999))
        .await
        .expect_err("update must be rejected");

    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));
    assert_eq!(service.get_by_id(1).await?, before);

    Ok(())
}

#[tokio::test]
async fn test_store_error_is_kept_unchanged() -> TestResult {
    let service = store().await?;

    let err = service.create(sample_order(0)).await.expect_err("insert must be rejected");

    assert!(matches!(err.store_error(), DbErr::Exec(_) | DbErr::Query(_)));
    let source = std::error::Error::source(&err).expect("store error as source");
    assert_eq!(source.to_string(), err.store_error().to_string());

    Ok(())
}

#[tokio::test]
async fn test_duplicate_key_is_a_unique_violation() -> TestResult {
    let service = store().await?;

    let db_err = insert_customer(service.connection(), 1)
        .await
        .expect_err("customer 1 already exists");
    let db_err = db_err.downcast::<DbErr>().expect("store error");

    let err = OrderError::from(*db_err);
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::Unique));

    Ok(())
}

#[tokio::test]
async fn test_missing_required_column_is_a_not_null_violation() -> TestResult {
    let service = store().await?;

    let db_err = service
        .connection()
        .execute_unprepared("INSERT INTO orders (customer_id) VALUES (1)")
        .await
        .expect_err("required columns are missing");

    let err = OrderError::from(db_err);
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::NotNull));

    Ok(())
}

#[tokio::test]
async fn test_missing_row_is_not_an_error() -> TestResult {
    let service = seeded_store(3).await?;

    // absent rows surface as None and zero counts, never as OrderError
    assert!(service.get_by_id(42).await?.is_none());
    assert_eq!(service.update(42, sample_order(1)).await?, 0);
    assert_eq!(service.delete(42).await?, 0);

    Ok(())
}
