//! Headline rows of the metadata popover, derived from [`InstanceMetadata`].

use serde::Serialize;
use time::OffsetDateTime;

use crate::aggregate::InstanceMetadata;
use crate::duration::execution_duration;

pub const DEFAULT_RUNNING_SUFFIX: &str = " (running)";

/// Knobs for summary rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Appended to the duration of elements that have not ended.
    pub running_suffix: String,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            running_suffix: DEFAULT_RUNNING_SUFFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataSummary {
    pub element_instance_key: String,
    pub execution_duration: Option<String>,
    /// `"<definition name> - <instance key>"`.
    pub called_process_instance: Option<String>,
    /// `"<definition name> - <instance key>"`.
    pub called_decision_instance: Option<String>,
    /// The called decision, repeated when the element has an incident.
    pub root_cause_decision_instance: Option<String>,
    pub has_incident: bool,
}

impl MetadataSummary {
    pub fn from_metadata(
        metadata: &InstanceMetadata,
        now: OffsetDateTime,
        options: &SummaryOptions,
    ) -> Self {
        let execution_duration = match execution_duration(
            &metadata.start_date,
            metadata.end_date.as_deref(),
            now,
            &options.running_suffix,
        ) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(
                    element_instance_key = %metadata.element_instance_key,
                    error = %e,
                    "skipping execution duration"
                );
                None
            }
        };

        let called_decision_instance = link_label(
            metadata.called_decision_definition_name.as_deref(),
            metadata.called_decision_instance_id.as_deref(),
            "Decision",
        );
        let root_cause_decision_instance = called_decision_instance
            .clone()
            .filter(|_| metadata.has_incident);

        Self {
            element_instance_key: metadata.element_instance_key.clone(),
            execution_duration,
            called_process_instance: link_label(
                metadata.called_process_definition_name.as_deref(),
                metadata.called_process_instance_id.as_deref(),
                "Process",
            ),
            called_decision_instance,
            root_cause_decision_instance,
            has_incident: metadata.has_incident,
        }
    }

    /// Label/value pairs in popover order. Absent links are left out.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![(
            "Element Instance Key",
            self.element_instance_key.clone(),
        )];
        if let Some(duration) = &self.execution_duration {
            rows.push(("Execution Duration", duration.clone()));
        }
        if let Some(called) = &self.called_process_instance {
            rows.push(("Called Process Instance", called.clone()));
        }
        if let Some(called) = &self.called_decision_instance {
            rows.push(("Called Decision Instance", called.clone()));
        }
        if self.has_incident {
            rows.push(("Incident", "yes".to_string()));
        }
        if let Some(root_cause) = &self.root_cause_decision_instance {
            rows.push(("Root Cause Decision Instance", root_cause.clone()));
        }
        rows
    }
}

/// `"<name> - <key>"`; just the name when the key is empty (a decision
/// that was never evaluated), `None` when there is no link at all.
fn link_label(name: Option<&str>, key: Option<&str>, fallback: &str) -> Option<String> {
    let key = key?;
    let name = name.filter(|n| !n.is_empty()).unwrap_or(fallback);
    if key.is_empty() {
        return Some(name.to_string());
    }
    Some(format!("{} - {}", name, key))
}
