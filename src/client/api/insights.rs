use crate::client::{
    api::{ApiClient, HttpTransport},
    error::Error,
};
use crate::model::analytics::{CategorySpending, MonthlyAnalytics};

impl<T: HttpTransport> ApiClient<T> {
    pub async fn category_spending(&self) -> Result<CategorySpending, Error> {
        self.fetch_json("category analytics", "/api/analytics/category")
            .await
    }

    pub async fn monthly_analytics(&self) -> Result<MonthlyAnalytics, Error> {
        self.fetch_json("monthly analytics", "/api/analytics/monthly")
            .await
    }

    /// Personalised saving tips
    pub async fn advice(&self) -> Result<Vec<String>, Error> {
        self.fetch_json("advice", "/api/ai/advice").await
    }
}
