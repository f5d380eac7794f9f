use budgetwise::model::transaction::Category;
use serde_json::json;

use super::*;

/// Tests fetching spending per category.
///
/// Expected: Ok with one total per reported category
#[tokio::test]
async fn reads_category_spending() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/api/analytics/category",
            200,
            json!({ "FOOD": 4200.5, "RENT": 15000.0 }),
            1,
        )
        .build()
        .await?;

    let result = test.authorized_api().category_spending().await;

    assert!(result.is_ok());
    let spending = result.unwrap();
    assert_eq!(spending.len(), 2);
    assert_eq!(spending.get(&Category::Food), Some(&4200.5));
    assert_eq!(spending.get(&Category::Rent), Some(&15000.0));

    test.assert_mocks();

    Ok(())
}

/// Tests fetching monthly income and expense totals.
///
/// A month missing one side reports zero for it.
///
/// Expected: Ok with months keyed by upper-case month name
#[tokio::test]
async fn reads_monthly_analytics() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/api/analytics/monthly",
            200,
            json!({
                "JANUARY": { "INCOME": 60000.0, "EXPENSE": 32000.0 },
                "FEBRUARY": { "EXPENSE": 12000.0 },
            }),
            1,
        )
        .build()
        .await?;

    let result = test.authorized_api().monthly_analytics().await;

    assert!(result.is_ok());
    let monthly = result.unwrap();
    assert_eq!(monthly["JANUARY"].income, 60000.0);
    assert_eq!(monthly["FEBRUARY"].income, 0.0);
    assert_eq!(monthly["FEBRUARY"].expense, 12000.0);

    test.assert_mocks();

    Ok(())
}

/// Tests fetching personalized advice.
///
/// Expected: Ok with the tips in backend order
#[tokio::test]
async fn reads_advice() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/api/ai/advice",
            200,
            json!(["Cook at home more often", "Review subscriptions"]),
            1,
        )
        .build()
        .await?;

    let result = test.authorized_api().advice().await;

    assert_eq!(
        result,
        Ok(vec![
            "Cook at home more often".to_string(),
            "Review subscriptions".to_string(),
        ])
    );

    test.assert_mocks();

    Ok(())
}

/// Tests an advice outage.
///
/// Expected: Err(FetchFailed) for advice, which the dashboard replaces with fallback tips
#[tokio::test]
async fn advice_outage_is_fetch_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/api/ai/advice",
            503,
            json!({ "message": "Advice service unavailable" }),
            1,
        )
        .build()
        .await?;

    let result = test.authorized_api().advice().await;

    assert!(matches!(
        result,
        Err(Error::FetchFailed {
            resource: "advice",
            ..
        })
    ));

    test.assert_mocks();

    Ok(())
}
