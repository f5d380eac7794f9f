use crate::client::{
    api::{ApiClient, HttpTransport, Method},
    error::Error,
};
use crate::model::budget::{Budget, BudgetRequest};

impl<T: HttpTransport> ApiClient<T> {
    pub async fn list_budgets(&self) -> Result<Vec<Budget>, Error> {
        self.fetch_json("budgets", "/api/budgets").await
    }

    pub async fn set_budget(&self, request: &BudgetRequest) -> Result<Budget, Error> {
        self.mutate_json("set budget", Method::Post, "/api/budgets", request)
            .await
    }

    pub async fn delete_budget(&self, id: i64) -> Result<(), Error> {
        let path = format!("/api/budgets/{}", id);

        self.mutate_discard::<()>("delete budget", Method::Delete, &path, None)
            .await
    }
}
