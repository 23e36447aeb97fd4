use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

use crate::constants::UNKNOWN_CONTENT_TYPE;

/// Persisted metadata for one uploaded file.
///
/// The record is a view over metadata only; the bytes live under the configured
/// storage root at `localname` and may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct FileRecord {
    pub id: Uuid,
    /// Name on disk, relative to the storage root. Never empty once persisted.
    pub localname: String,
    /// Filename supplied by the uploader.
    pub clientname: Option<String>,
    /// Display name, may differ from both of the above.
    pub filename: Option<String>,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "type"))]
    pub content_type: String,
    pub size: i64,
    /// Thumbnail name relative to the thumbnails folder.
    pub thumbnail: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl FileRecord {
    pub fn new(localname: impl Into<String>, content_type: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            localname: localname.into(),
            clientname: None,
            filename: None,
            content_type: content_type.into(),
            size: 0,
            thumbnail: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// False for the generic binary stream type, which uploads fall back to when
    /// nothing better was known.
    pub fn has_trusted_type(&self) -> bool {
        !self
            .content_type
            .trim()
            .eq_ignore_ascii_case(UNKNOWN_CONTENT_TYPE)
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Soft-delete: the record stays, only `deleted_at` is set.
    pub fn mark_deleted(&mut self) {
        let now = Utc::now();
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Best human-facing name: `filename`, then `clientname`, then `localname`.
    pub fn display_name(&self) -> &str {
        [self.filename.as_deref(), self.clientname.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .unwrap_or(self.localname.as_str())
    }

    pub fn thumbnail_name(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or("")
    }
}
