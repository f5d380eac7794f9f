use crate::client::{
    api::{ApiClient, HttpTransport, Method},
    error::Error,
};
use crate::model::goal::{Goal, GoalRequest};

impl<T: HttpTransport> ApiClient<T> {
    pub async fn list_goals(&self) -> Result<Vec<Goal>, Error> {
        self.fetch_json("goals", "/api/goals").await
    }

    pub async fn create_goal(&self, request: &GoalRequest) -> Result<Goal, Error> {
        self.mutate_json("add goal", Method::Post, "/api/goals", request)
            .await
    }

    pub async fn update_goal(&self, id: i64, request: &GoalRequest) -> Result<Goal, Error> {
        let path = format!("/api/goals/{}", id);

        self.mutate_json("update goal", Method::Put, &path, request)
            .await
    }

    pub async fn delete_goal(&self, id: i64) -> Result<(), Error> {
        let path = format!("/api/goals/{}", id);

        self.mutate_discard::<()>("delete goal", Method::Delete, &path, None)
            .await
    }
}
