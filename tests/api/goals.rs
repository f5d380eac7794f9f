use budgetwise::model::goal::GoalRequest;
use budgetwise_test_utils::fixtures::api::mockito::authorized;
use chrono::NaiveDate;
use serde_json::json;

use super::*;

fn deadline() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 12, 31)
}

/// Tests listing savings goals.
///
/// Expected: Ok with names, amounts and deadlines decoded
#[tokio::test]
async fn lists_goals() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/api/goals",
            200,
            json!([factory::goal(1, "Laptop", 80000.0, 20000.0)]),
            1,
        )
        .build()
        .await?;

    let result = test.authorized_api().list_goals().await;

    assert!(result.is_ok());
    let goals = result.unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].goal_name, "Laptop");
    assert_eq!(goals[0].current_saved, 20000.0);
    assert_eq!(goals[0].deadline, deadline());

    test.assert_mocks();

    Ok(())
}

/// Tests creating a goal.
///
/// Expected: Ok with the created goal, sent with camelCase field names
#[tokio::test]
async fn creates_goal() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let create = test.api().create_body_matching_endpoint(
        "POST",
        "/api/goals",
        json!({
            "goalName": "Trip",
            "targetAmount": 50000.0,
            "currentSaved": 0.0,
            "deadline": "2025-12-31",
        }),
        200,
        &factory::goal(2, "Trip", 50000.0, 0.0),
    )?;

    let result = test
        .authorized_api()
        .create_goal(&GoalRequest {
            goal_name: "Trip".to_string(),
            target_amount: 50000.0,
            current_saved: 0.0,
            deadline: deadline(),
        })
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, 2);

    create.assert();

    Ok(())
}

/// Tests adding funds to a goal through an update.
///
/// Verifies the PUT carries the new saved total.
///
/// Expected: Ok with the saved amount raised from 20000 to 25000
#[tokio::test]
async fn updates_goal_saved_amount() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let update = test.api().create_body_matching_endpoint(
        "PUT",
        "/api/goals/1",
        json!({ "goalName": "Laptop", "currentSaved": 25000.0 }),
        200,
        &factory::goal(1, "Laptop", 80000.0, 25000.0),
    )?;

    let result = test
        .authorized_api()
        .update_goal(
            1,
            &GoalRequest {
                goal_name: "Laptop".to_string(),
                target_amount: 80000.0,
                current_saved: 25000.0,
                deadline: deadline(),
            },
        )
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().current_saved, 25000.0);

    update.assert();

    Ok(())
}

/// Tests deleting a goal.
///
/// Expected: Ok(()) after one DELETE request
#[tokio::test]
async fn deletes_goal() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            authorized(server, "DELETE", "/api/goals/1")
                .with_status(200)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = test.authorized_api().delete_goal(1).await;

    assert_eq!(result, Ok(()));

    test.assert_mocks();

    Ok(())
}
