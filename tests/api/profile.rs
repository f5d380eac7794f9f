use budgetwise::model::profile::Profile;
use budgetwise_test_utils::fixtures::api::mockito::authorized;
use serde_json::json;

use super::*;

/// Tests reading a saved profile.
///
/// Expected: Ok(Some) with all three amounts
#[tokio::test]
async fn reads_profile() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/api/profile",
            200,
            factory::profile(60000.0, 150000.0, 30000.0),
            1,
        )
        .build()
        .await?;

    let result = test.authorized_api().get_profile().await;

    assert_eq!(
        result,
        Ok(Some(Profile {
            monthly_income: Some(60000.0),
            current_savings: Some(150000.0),
            target_expense: Some(30000.0),
        }))
    );

    test.assert_mocks();

    Ok(())
}

/// Tests reading the profile of a user who never saved one.
///
/// The backend answers 200 with an empty body in that case.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_profile_is_none() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            authorized(server, "GET", "/api/profile")
                .with_status(200)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = test.authorized_api().get_profile().await;

    assert_eq!(result, Ok(None));

    test.assert_mocks();

    Ok(())
}

/// Tests saving a partially filled profile.
///
/// Expected: Ok(()) with the filled amounts sent in camelCase
#[tokio::test]
async fn saves_profile() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let save = test.api().create_body_matching_endpoint(
        "POST",
        "/api/profile",
        json!({ "monthlyIncome": 60000.0, "targetExpense": 30000.0 }),
        200,
        &factory::profile(60000.0, 0.0, 30000.0),
    )?;

    let result = test
        .authorized_api()
        .update_profile(&Profile {
            monthly_income: Some(60000.0),
            current_savings: None,
            target_expense: Some(30000.0),
        })
        .await;

    assert_eq!(result, Ok(()));

    save.assert();

    Ok(())
}
