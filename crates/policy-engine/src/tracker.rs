//! Version-drift tracking, update history, and notification routing

use std::sync::Mutex;

use chrono::{Duration, Utc};
use policy_types::{
    Change, ChangeType, Notification, NotificationType, Priority, Recipient, SimilarUpdate,
    TrackedUpdate, UpdateRecord,
};

use crate::patterns::is_critical_section;
use crate::similarity::SimilarityModel;

/// Changes below this similarity count as significant
const SIGNIFICANT_CHANGE_THRESHOLD: f64 = 0.7;

/// Overall similarity below this marks a major update
const MAJOR_CHANGE_THRESHOLD: f64 = 0.5;

/// Modified-section similarity below this triggers an alert
const SIGNIFICANT_MODIFICATION_THRESHOLD: f64 = 0.3;

/// More changes than this in one update triggers a volume alert
const MULTIPLE_CHANGES_THRESHOLD: usize = 10;

/// History window callers use when they have no better answer
pub const DEFAULT_HISTORY_WINDOW_DAYS: i64 = 30;

/// Tracks policy revisions and keeps an append-only in-memory history.
///
/// History lives for the life of the tracker; there is no eviction and no
/// durable store. Concurrent calls serialize on one lock around the
/// append-and-read path.
pub struct UpdateTracker {
    similarity: SimilarityModel,
    history: Mutex<Vec<UpdateRecord>>,
}

impl UpdateTracker {
    pub fn new() -> Self {
        Self {
            similarity: SimilarityModel::new(),
            history: Mutex::new(Vec::new()),
        }
    }

    /// Compare two policy versions, append the resulting record to history,
    /// and derive notifications from it.
    pub fn track_policy_update(
        &self,
        old_policy: &str,
        new_policy: &str,
        policy_id: Option<&str>,
        version: Option<u32>,
    ) -> TrackedUpdate {
        let changes = self.similarity.detect_changes(old_policy, new_policy);
        let similarity_score = self
            .similarity
            .calculate_overall_similarity(old_policy, new_policy);

        let record = UpdateRecord {
            policy_id: policy_id.map(str::to_string),
            old_version: version.map(|v| v.saturating_sub(1)),
            new_version: version,
            timestamp: Utc::now(),
            similarity_score,
            total_changes: changes.len(),
            significant_changes: changes
                .iter()
                .filter(|c| c.similarity < SIGNIFICANT_CHANGE_THRESHOLD)
                .count(),
            changes_detail: changes,
        };

        {
            let mut history = self.history.lock().expect("history lock poisoned");
            history.push(record.clone());
        }

        let notifications = generate_notifications(&record);
        tracing::info!(
            policy_id = record.policy_id.as_deref().unwrap_or("-"),
            total_changes = record.total_changes,
            notifications = notifications.len(),
            "tracked policy update"
        );

        TrackedUpdate {
            update_summary: record,
            notifications,
        }
    }

    /// Recent history, optionally filtered by policy id, newest first.
    ///
    /// Records older than `days_back` days relative to the call time are
    /// excluded.
    pub fn get_update_history(
        &self,
        policy_id: Option<&str>,
        days_back: i64,
    ) -> Vec<UpdateRecord> {
        let cutoff = Utc::now() - Duration::days(days_back);
        let history = self.history.lock().expect("history lock poisoned");

        let mut recent: Vec<UpdateRecord> = history
            .iter()
            .filter(|record| match policy_id {
                Some(id) => record.policy_id.as_deref() == Some(id),
                None => true,
            })
            .filter(|record| record.timestamp >= cutoff)
            .cloned()
            .collect();

        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        recent
    }

    /// Historical updates from *other* policies whose change sets resemble
    /// the given record's, scored by lexical similarity of the serialized
    /// change details, best match first.
    pub fn find_similar_updates(
        &self,
        current: &UpdateRecord,
        similarity_threshold: f64,
    ) -> Vec<SimilarUpdate> {
        let current_detail = serialize_changes(&current.changes_detail);
        let history = self.history.lock().expect("history lock poisoned");

        let mut similar: Vec<SimilarUpdate> = history
            .iter()
            .filter(|record| record.policy_id != current.policy_id)
            .filter_map(|record| {
                let detail = serialize_changes(&record.changes_detail);
                let score = self
                    .similarity
                    .calculate_overall_similarity(&detail, &current_detail);
                (score >= similarity_threshold).then(|| SimilarUpdate {
                    record: record.clone(),
                    similarity_score: score,
                })
            })
            .collect();

        similar.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        similar
    }
}

impl Default for UpdateTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn serialize_changes(changes: &[Change]) -> String {
    serde_json::to_string(changes).unwrap_or_default()
}

/// Derive notifications from one update record. No deduplication: an update
/// can legitimately fire several alerts at once.
fn generate_notifications(record: &UpdateRecord) -> Vec<Notification> {
    let mut notifications = Vec::new();

    if record.similarity_score < MAJOR_CHANGE_THRESHOLD {
        notifications.push(Notification {
            kind: NotificationType::MajorChange,
            message: "Major policy update detected".to_string(),
            priority: Priority::High,
            recipients: vec![
                Recipient::ComplianceOfficer,
                Recipient::LegalTeam,
                Recipient::Management,
            ],
        });
    }

    for change in &record.changes_detail {
        if change.change_type == ChangeType::Removed && is_critical_section(&change.section) {
            notifications.push(Notification {
                kind: NotificationType::CriticalRemoval,
                message: format!("Critical section '{}' was removed", change.section),
                priority: Priority::Critical,
                recipients: vec![Recipient::ComplianceOfficer, Recipient::LegalTeam],
            });
        }

        if change.change_type == ChangeType::Modified
            && change.similarity < SIGNIFICANT_MODIFICATION_THRESHOLD
        {
            notifications.push(Notification {
                kind: NotificationType::SignificantModification,
                message: format!("Section '{}' was significantly modified", change.section),
                priority: Priority::Medium,
                recipients: vec![Recipient::ComplianceOfficer],
            });
        }
    }

    if record.total_changes > MULTIPLE_CHANGES_THRESHOLD {
        notifications.push(Notification {
            kind: NotificationType::MultipleChanges,
            message: format!("Policy has {} changes", record.total_changes),
            priority: Priority::Medium,
            recipients: vec![Recipient::ComplianceOfficer],
        });
    }

    notifications
}
