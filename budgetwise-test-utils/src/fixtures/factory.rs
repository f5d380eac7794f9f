//! JSON bodies shaped like the BudgetWise backend's responses.

use serde_json::{json, Value};

use crate::constant::{TEST_EMAIL, TEST_TOKEN, TEST_USERNAME, TEST_USER_ID};

/// Sign-in response for the test account
pub fn jwt_response(roles: &[&str]) -> Value {
    json!({
        "token": TEST_TOKEN,
        "type": "Bearer",
        "id": TEST_USER_ID,
        "username": TEST_USERNAME,
        "email": TEST_EMAIL,
        "roles": roles,
    })
}

pub fn transaction(id: i64, kind: &str, amount: f64, category: &str, date: &str) -> Value {
    json!({
        "id": id,
        "type": kind,
        "amount": amount,
        "category": category,
        "date": date,
        "description": null,
    })
}

pub fn budget(id: i64, category: &str, monthly_limit: f64) -> Value {
    json!({
        "id": id,
        "category": category,
        "monthlyLimit": monthly_limit,
    })
}

pub fn goal(id: i64, goal_name: &str, target_amount: f64, current_saved: f64) -> Value {
    json!({
        "id": id,
        "goalName": goal_name,
        "targetAmount": target_amount,
        "currentSaved": current_saved,
        "deadline": "2025-12-31",
    })
}

pub fn profile(monthly_income: f64, current_savings: f64, target_expense: f64) -> Value {
    json!({
        "id": 1,
        "monthlyIncome": monthly_income,
        "currentSavings": current_savings,
        "targetExpense": target_expense,
    })
}

pub fn forum_post(id: i64, title: &str, likes_count: u32, author: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": format!("Content of {}", title),
        "likesCount": likes_count,
        "createdAt": "2024-01-01T10:30:00",
        "user": { "id": 2, "username": author },
    })
}

pub fn forum_comment(id: i64, content: &str, author: &str) -> Value {
    json!({
        "id": id,
        "content": content,
        "createdAt": "2024-01-01T11:00:00",
        "user": { "id": 3, "username": author },
    })
}
