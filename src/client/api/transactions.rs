use chrono::NaiveDate;

use crate::client::{
    api::{ApiClient, HttpTransport, Method},
    error::Error,
};
use crate::model::transaction::{Transaction, TransactionRequest};

impl<T: HttpTransport> ApiClient<T> {
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, Error> {
        self.fetch_json("transactions", "/api/transactions").await
    }

    /// Transactions dated within `start..=end`
    pub async fn filter_transactions(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, Error> {
        let path = format!(
            "/api/transactions/filter?startDate={}&endDate={}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );

        self.fetch_json("transactions", &path).await
    }

    pub async fn create_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<Transaction, Error> {
        self.mutate_json("add transaction", Method::Post, "/api/transactions", request)
            .await
    }

    pub async fn update_transaction(
        &self,
        id: i64,
        request: &TransactionRequest,
    ) -> Result<Transaction, Error> {
        let path = format!("/api/transactions/{}", id);

        self.mutate_json("update transaction", Method::Put, &path, request)
            .await
    }

    pub async fn delete_transaction(&self, id: i64) -> Result<(), Error> {
        let path = format!("/api/transactions/{}", id);

        self.mutate_discard::<()>("delete transaction", Method::Delete, &path, None)
            .await
    }
}
