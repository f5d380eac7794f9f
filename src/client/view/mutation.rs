//! Writes that are followed by a re-fetch of the list they changed.
//!
//! The re-fetch is issued only after the backend accepted the write, so the reloaded list
//! always reflects it. A rejected write leaves the loaded data untouched.

use std::future::Future;

use crate::client::{error::Error, view::ViewResource};

/// Somewhere a [`ViewResource`] lives, such as a signal owned by a view
pub trait ResourceSlot<T> {
    /// Runs `f` against the resource. None when the resource is no longer reachable.
    fn with_resource<R>(&mut self, f: impl FnOnce(&mut ViewResource<T>) -> R) -> Option<R>;
}

impl<T> ResourceSlot<T> for ViewResource<T> {
    fn with_resource<R>(&mut self, f: impl FnOnce(&mut ViewResource<T>) -> R) -> Option<R> {
        Some(f(self))
    }
}

/// Awaits `write`, then settles the result of `reload` into `slot`.
///
/// Returns the outcome of the write. A failed reload is recorded on the resource, not
/// returned, since the write itself went through.
pub async fn write_then_reload<T, S, V, W, F, R>(
    slot: &mut S,
    write: W,
    reload: F,
) -> Result<V, Error>
where
    S: ResourceSlot<T>,
    W: Future<Output = Result<V, Error>>,
    F: FnOnce() -> R,
    R: Future<Output = Result<T, Error>>,
{
    let written = write.await?;

    let Some(ticket) = slot.with_resource(ViewResource::begin) else {
        return Ok(written);
    };

    let result = reload().await;
    slot.with_resource(|resource| resource.settle(ticket, result));

    Ok(written)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::client::api::{testing::ScriptedTransport, ApiClient, Method};
    use crate::client::view::LoadPhase;
    use crate::model::{
        auth::{Role, Session},
        transaction::{Category, Transaction, TransactionRequest, TransactionType},
    };

    fn client(transport: &ScriptedTransport) -> ApiClient<ScriptedTransport> {
        let session =
            Session::new(Some(1), "alice", "alice@example.com", [Role::User], "tok").unwrap();

        ApiClient::new(transport.clone(), "http://api.test").authorized(&session)
    }

    fn transaction(id: i64, amount: f64) -> Transaction {
        Transaction {
            id,
            kind: TransactionType::Expense,
            amount,
            category: Category::Food,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            description: None,
        }
    }

    fn loaded(list: Vec<Transaction>) -> ViewResource<Vec<Transaction>> {
        let mut resource = ViewResource::new();
        let ticket = resource.begin();
        resource.settle(ticket, Ok(list));
        resource
    }

    fn request() -> TransactionRequest {
        TransactionRequest::from(&transaction(0, 75.0))
    }

    #[test]
    fn reload_follows_accepted_create() {
        let transport = ScriptedTransport::default();
        let created = transaction(2, 75.0);
        transport
            .respond(200, &json!(created).to_string())
            .respond(
                200,
                &json!([transaction(1, 10.0), created.clone()]).to_string(),
            );
        let api = client(&transport);
        let mut resource = loaded(vec![transaction(1, 10.0)]);

        let result = block_on(write_then_reload(
            &mut resource,
            api.create_transaction(&request()),
            || api.list_transactions(),
        ));

        assert_eq!(result, Ok(created.clone()));
        let requests = transport.requests.borrow();
        let calls: Vec<_> = requests.iter().map(|r| (r.method, r.url.as_str())).collect();
        assert_eq!(
            calls,
            [
                (Method::Post, "http://api.test/api/transactions"),
                (Method::Get, "http://api.test/api/transactions"),
            ]
        );
        let list = resource.data().unwrap();
        assert_eq!(list.iter().filter(|t| **t == created).count(), 1);
        assert_eq!(resource.phase(), LoadPhase::Ready);
    }

    #[test]
    fn rejected_write_skips_reload_and_keeps_data() {
        let transport = ScriptedTransport::default();
        transport.respond(400, r#"{"message":"Amount must be positive"}"#);
        let api = client(&transport);
        let mut resource = loaded(vec![transaction(1, 10.0)]);

        let result = block_on(write_then_reload(
            &mut resource,
            api.create_transaction(&request()),
            || api.list_transactions(),
        ));

        assert!(matches!(
            result,
            Err(Error::MutationFailed {
                action: "add transaction",
                ..
            })
        ));
        assert_eq!(transport.requests.borrow().len(), 1);
        assert_eq!(resource.data(), Some(&vec![transaction(1, 10.0)]));
        assert_eq!(resource.phase(), LoadPhase::Ready);
    }

    #[test]
    fn failed_reload_marks_resource_but_write_succeeds() {
        let transport = ScriptedTransport::default();
        transport
            .respond(200, "")
            .respond(503, r#"{"message":"Try again later"}"#);
        let api = client(&transport);
        let mut resource = loaded(vec![transaction(1, 10.0)]);

        let result = block_on(write_then_reload(
            &mut resource,
            api.delete_transaction(1),
            || api.list_transactions(),
        ));

        assert_eq!(result, Ok(()));
        assert_eq!(transport.requests.borrow()[0].method, Method::Delete);
        assert_eq!(resource.phase(), LoadPhase::Failed);
        assert_eq!(resource.data(), Some(&vec![transaction(1, 10.0)]));
    }

    #[test]
    fn detached_view_still_sees_write_result() {
        let transport = ScriptedTransport::default();
        transport
            .respond(200, &json!(transaction(2, 75.0)).to_string())
            .respond(200, "[]");
        let api = client(&transport);
        let mut resource = loaded(vec![transaction(1, 10.0)]);
        resource.detach();

        let result = block_on(write_then_reload(
            &mut resource,
            api.create_transaction(&request()),
            || api.list_transactions(),
        ));

        assert!(result.is_ok());
        assert_eq!(resource.data(), Some(&vec![transaction(1, 10.0)]));
    }
}
