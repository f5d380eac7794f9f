use crate::client::{
    api::{ApiClient, HttpTransport, Method},
    error::Error,
};
use crate::model::profile::Profile;

impl<T: HttpTransport> ApiClient<T> {
    /// `None` until the user saves a profile for the first time
    pub async fn get_profile(&self) -> Result<Option<Profile>, Error> {
        self.fetch_optional_json("profile", "/api/profile").await
    }

    pub async fn update_profile(&self, profile: &Profile) -> Result<(), Error> {
        self.mutate_discard("update profile", Method::Post, "/api/profile", Some(profile))
            .await
    }
}
