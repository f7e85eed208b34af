//! Assignment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An edge in the assignment ledger: "document D is visible to employee E".
///
/// The `(document_id, employee_id)` pair is the table's primary key, so
/// duplicate edges cannot exist. Edges are cascade-deleted with either
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Assignment {
    /// The assigned document.
    pub document_id: Uuid,
    /// The employee the document is visible to.
    pub employee_id: Uuid,
    /// The admin who wrote this edge.
    pub assigned_by: Uuid,
    /// When the edge was written.
    pub assigned_at: DateTime<Utc>,
}
