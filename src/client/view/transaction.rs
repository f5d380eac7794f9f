use chrono::NaiveDate;

use crate::client::{error::Error, view::parse_positive_amount};
use crate::model::transaction::{Category, Transaction, TransactionRequest, TransactionType};

/// Raw input of the add / edit transaction form
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionType,
    pub amount: String,
    pub category: Category,
    pub date: String,
    pub description: String,
}

impl TransactionDraft {
    /// A blank expense dated `today`
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            kind: TransactionType::Expense,
            amount: String::new(),
            category: Category::Food,
            date: today.format("%Y-%m-%d").to_string(),
            description: String::new(),
        }
    }

    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            kind: transaction.kind,
            amount: transaction.amount.to_string(),
            category: transaction.category,
            date: transaction.date.format("%Y-%m-%d").to_string(),
            description: transaction.description.clone().unwrap_or_default(),
        }
    }

    pub fn to_request(&self) -> Result<TransactionRequest, Error> {
        let amount = parse_positive_amount(&self.amount)
            .ok_or_else(|| Error::Validation("Amount must be a positive number".to_string()))?;
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| Error::Validation("Date must be a valid date".to_string()))?;
        let description = Some(self.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(TransactionRequest {
            kind: self.kind,
            amount,
            category: self.category,
            date,
            description,
        })
    }
}

/// The form plus which transaction, if any, it is editing
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionEditor {
    pub draft: TransactionDraft,
    editing: Option<i64>,
    today: NaiveDate,
}

impl TransactionEditor {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: TransactionDraft::blank(today),
            editing: None,
            today,
        }
    }

    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    pub fn title(&self) -> &'static str {
        match self.editing {
            Some(_) => "Edit Transaction",
            None => "Add New Transaction",
        }
    }

    pub fn edit(&mut self, transaction: &Transaction) {
        self.draft = TransactionDraft::from_transaction(transaction);
        self.editing = Some(transaction.id);
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.today);
    }
}

/// Amount with its direction, e.g. `+₹1200.00` for income and `-₹50.00` for an expense
pub fn signed_amount(transaction: &Transaction) -> String {
    let sign = match transaction.kind {
        TransactionType::Income => '+',
        TransactionType::Expense => '-',
    };

    format!("{}₹{:.2}", sign, transaction.amount)
}

/// Inclusive date range for the filter endpoint; both ends must be set and ordered
pub fn date_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), Error> {
    let parse = |raw: &str| {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| Error::Validation("Pick both a start and an end date".to_string()))
    };

    let (start, end) = (parse(start)?, parse(end)?);
    if start > end {
        return Err(Error::Validation(
            "Start date must not be after end date".to_string(),
        ));
    }

    Ok((start, end))
}
