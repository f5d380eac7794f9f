use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Food,
    Rent,
    Travel,
    Bills,
    Investment,
    Entertainment,
    Salary,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Rent,
        Category::Travel,
        Category::Bills,
        Category::Investment,
        Category::Entertainment,
        Category::Salary,
        Category::Other,
    ];

    /// Categories a monthly spending limit can be set for
    pub const BUDGETABLE: [Category; 7] = [
        Category::Food,
        Category::Rent,
        Category::Travel,
        Category::Bills,
        Category::Investment,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "FOOD",
            Category::Rent => "RENT",
            Category::Travel => "TRAVEL",
            Category::Bills => "BILLS",
            Category::Investment => "INVESTMENT",
            Category::Entertainment => "ENTERTAINMENT",
            Category::Salary => "SALARY",
            Category::Other => "OTHER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::Travel => "Travel",
            Category::Bills => "Bills",
            Category::Investment => "Investment",
            Category::Entertainment => "Entertainment",
            Category::Salary => "Salary",
            Category::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

/// Body of `POST /api/transactions` and `PUT /api/transactions/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Transaction> for TransactionRequest {
    fn from(transaction: &Transaction) -> Self {
        Self {
            kind: transaction.kind,
            amount: transaction.amount,
            category: transaction.category,
            date: transaction.date,
            description: transaction.description.clone(),
        }
    }
}
