/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Shareable meeting links.

/// Build the link participants open to join `call_id`: `<base>/meeting/<id>`.
pub fn meeting_link(base_url: &str, call_id: &str) -> String {
    format!("{}/meeting/{call_id}", base_url.trim_end_matches('/'))
}
