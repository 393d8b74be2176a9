// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Listing row for an archived event, without the match payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedEventSummary {
    pub event_id: String,
    /// Completion time, milliseconds since the Unix epoch.
    pub recorded_at: i64,
    pub champion: String,
    pub player_count: i32,
}
