use budgetwise::model::{budget::BudgetRequest, transaction::Category};
use budgetwise_test_utils::fixtures::api::mockito::authorized;
use serde_json::json;

use super::*;

/// Tests listing monthly budgets.
///
/// Expected: Ok with each budget's category and limit decoded
#[tokio::test]
async fn lists_budgets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/api/budgets",
            200,
            json!([
                factory::budget(1, "FOOD", 5000.0),
                factory::budget(2, "RENT", 15000.0),
            ]),
            1,
        )
        .build()
        .await?;

    let result = test.authorized_api().list_budgets().await;

    assert!(result.is_ok());
    let budgets = result.unwrap();
    assert_eq!(budgets.len(), 2);
    assert_eq!(budgets[0].category, Category::Food);
    assert_eq!(budgets[1].monthly_limit, 15000.0);

    test.assert_mocks();

    Ok(())
}

/// Tests setting a category limit.
///
/// Verifies the request is sent as `{ category, limit }`.
///
/// Expected: Ok with the stored budget
#[tokio::test]
async fn sets_budget() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let set = test.api().create_body_matching_endpoint(
        "POST",
        "/api/budgets",
        json!({ "category": "TRAVEL", "limit": 2500.0 }),
        200,
        &factory::budget(3, "TRAVEL", 2500.0),
    )?;

    let result = test
        .authorized_api()
        .set_budget(&BudgetRequest {
            category: Category::Travel,
            limit: 2500.0,
        })
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, 3);

    set.assert();

    Ok(())
}

/// Tests deleting a budget.
///
/// Expected: Ok(()) after one DELETE request
#[tokio::test]
async fn deletes_budget() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            authorized(server, "DELETE", "/api/budgets/3")
                .with_status(200)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = test.authorized_api().delete_budget(3).await;

    assert_eq!(result, Ok(()));

    test.assert_mocks();

    Ok(())
}

/// Tests a rejected budget write.
///
/// Expected: Err(MutationFailed) naming the action
#[tokio::test]
async fn rejected_budget_is_mutation_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "POST",
            "/api/budgets",
            400,
            json!({ "message": "Limit must be positive" }),
            1,
        )
        .build()
        .await?;

    let result = test
        .authorized_api()
        .set_budget(&BudgetRequest {
            category: Category::Food,
            limit: 100.0,
        })
        .await;

    assert_eq!(
        result,
        Err(Error::MutationFailed {
            action: "set budget",
            reason: "Request failed with status 400: Limit must be positive".to_string(),
        })
    );

    test.assert_mocks();

    Ok(())
}
