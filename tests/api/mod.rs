//! Tests for the typed REST client.
//!
//! Each module drives one resource group of `ApiClient` against a mock backend, verifying
//! request shape (method, path, bearer token, body) and how responses and failures map onto
//! the client's error variants.

mod auth;
mod budgets;
mod export;
mod forum;
mod goals;
mod insights;
mod profile;
mod transactions;

use budgetwise::client::error::Error;
use budgetwise_test_utils::prelude::*;

use crate::util::TestContextExt;
