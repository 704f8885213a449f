//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an `AppState` over an in-memory database, and the
//! request-level behavior (routing, extraction, rejections) is exercised through the full
//! router.

mod favorite;
mod planet;
mod router;

use holocron_test_utils::prelude::*;

use crate::util::{get, json_body, json_request, raw_json_request, TestContextExt};
