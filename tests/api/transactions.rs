use budgetwise::model::transaction::{Category, TransactionRequest, TransactionType};
use budgetwise_test_utils::fixtures::api::mockito::authorized;
use chrono::NaiveDate;
use mockito::Matcher;
use serde_json::json;

use super::*;

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn groceries() -> TransactionRequest {
    TransactionRequest {
        kind: TransactionType::Expense,
        amount: 50.0,
        category: Category::Food,
        date: date("2024-01-01"),
        description: None,
    }
}

/// Tests listing the signed-in user's transactions.
///
/// Expected: Ok with every transaction decoded, types and categories included
#[tokio::test]
async fn lists_transactions() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/api/transactions",
            200,
            json!([
                factory::transaction(1, "INCOME", 1200.0, "SALARY", "2024-01-01"),
                factory::transaction(2, "EXPENSE", 50.0, "FOOD", "2024-01-02"),
            ]),
            1,
        )
        .build()
        .await?;

    let result = test.authorized_api().list_transactions().await;

    assert!(result.is_ok());
    let transactions = result.unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].kind, TransactionType::Income);
    assert_eq!(transactions[0].category, Category::Salary);
    assert!(transactions[1].is_expense());
    assert_eq!(transactions[1].date, date("2024-01-02"));

    test.assert_mocks();

    Ok(())
}

/// Tests that a created transaction shows up in the next listing exactly once.
///
/// Verifies the add request body and that the list fetched afterwards holds a single
/// matching entry.
///
/// Expected: Ok with exactly one EXPENSE of 50 in FOOD on 2024-01-01
#[tokio::test]
async fn created_transaction_appears_once() -> Result<(), TestError> {
    let created = factory::transaction(7, "EXPENSE", 50.0, "FOOD", "2024-01-01");
    let mut test = TestBuilder::new().build().await?;
    let create = test.api().create_body_matching_endpoint(
        "POST",
        "/api/transactions",
        json!({
            "type": "EXPENSE",
            "amount": 50.0,
            "category": "FOOD",
            "date": "2024-01-01",
        }),
        200,
        &created,
    )?;
    let list = test
        .api()
        .create_endpoint("GET", "/api/transactions", 200, &json!([created]), 1)?;

    let api = test.authorized_api();
    let saved = api.create_transaction(&groceries()).await.unwrap();
    let listed = api.list_transactions().await.unwrap();

    assert_eq!(saved.id, 7);
    let matching: Vec<_> = listed
        .iter()
        .filter(|t| {
            t.kind == TransactionType::Expense
                && t.amount == 50.0
                && t.category == Category::Food
                && t.date == date("2024-01-01")
        })
        .collect();
    assert_eq!(matching.len(), 1);

    create.assert();
    list.assert();

    Ok(())
}

/// Tests updating an existing transaction.
///
/// Expected: Ok with the entity returned by the backend for PUT /api/transactions/7
#[tokio::test]
async fn updates_transaction() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let update = test.api().create_body_matching_endpoint(
        "PUT",
        "/api/transactions/7",
        json!({ "amount": 75.0, "description": "Dinner" }),
        200,
        &json!({
            "id": 7,
            "type": "EXPENSE",
            "amount": 75.0,
            "category": "FOOD",
            "date": "2024-01-01",
            "description": "Dinner",
        }),
    )?;

    let request = TransactionRequest {
        amount: 75.0,
        description: Some("Dinner".to_string()),
        ..groceries()
    };
    let result = test.authorized_api().update_transaction(7, &request).await;

    assert!(result.is_ok());
    let updated = result.unwrap();
    assert_eq!(updated.amount, 75.0);
    assert_eq!(updated.description.as_deref(), Some("Dinner"));

    update.assert();

    Ok(())
}

/// Tests deleting a transaction whose response carries no body.
///
/// Expected: Ok(()) after one DELETE request
#[tokio::test]
async fn deletes_transaction() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            authorized(server, "DELETE", "/api/transactions/7")
                .with_status(200)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = test.authorized_api().delete_transaction(7).await;

    assert_eq!(result, Ok(()));

    test.assert_mocks();

    Ok(())
}

/// Tests filtering transactions by an inclusive date range.
///
/// Expected: Ok with the filtered list, sent as startDate and endDate query parameters
#[tokio::test]
async fn filters_by_date_range() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            authorized(server, "GET", "/api/transactions/filter")
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("startDate".into(), "2024-01-01".into()),
                    Matcher::UrlEncoded("endDate".into(), "2024-01-31".into()),
                ]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(
                    json!([factory::transaction(
                        3,
                        "EXPENSE",
                        20.0,
                        "TRAVEL",
                        "2024-01-15"
                    )])
                    .to_string(),
                )
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = test
        .authorized_api()
        .filter_transactions(date("2024-01-01"), date("2024-01-31"))
        .await;

    assert!(result.is_ok());
    let transactions = result.unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].category, Category::Travel);

    test.assert_mocks();

    Ok(())
}

/// Tests a server failure while listing.
///
/// Expected: Err(FetchFailed) naming transactions and carrying the status
#[tokio::test]
async fn server_error_is_fetch_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/api/transactions",
            500,
            json!({ "message": "Database unavailable" }),
            1,
        )
        .build()
        .await?;

    let result = test.authorized_api().list_transactions().await;

    assert_eq!(
        result,
        Err(Error::FetchFailed {
            resource: "transactions",
            reason: "Request failed with status 500: Database unavailable".to_string(),
        })
    );

    test.assert_mocks();

    Ok(())
}

/// Tests that a client without a session never reaches the backend.
///
/// Expected: Err(NotAuthenticated) and zero requests to the endpoint
#[tokio::test]
async fn requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint("GET", "/api/transactions", 200, json!([]), 0)
        .build()
        .await?;

    let result = test.public_api().list_transactions().await;

    assert_eq!(result, Err(Error::NotAuthenticated));

    test.assert_mocks();

    Ok(())
}
