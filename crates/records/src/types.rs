//! Typed structs for the process-engine records the metadata popover reads.
//!
//! Field names follow the REST API's camelCase JSON. Unrecognized fields are
//! ignored on deserialization so newer API versions keep parsing. Optional
//! fields that are absent are omitted again on serialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{
    DecisionInstanceState, ElementInstanceState, ElementInstanceType, ProcessInstanceState,
    UserTaskState,
};

// ── Element instance ────────────────────────────────────────────────

/// One runtime execution of a node in a process diagram.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ElementInstance {
    pub element_instance_key: String,
    pub element_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_name: Option<String>,
    #[serde(rename = "type")]
    pub element_type: ElementInstanceType,
    pub state: ElementInstanceState,
    /// May be empty when the element has not started yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_definition_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_instance_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_definition_key: Option<String>,
    #[serde(default)]
    pub has_incident: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

// ── Job ─────────────────────────────────────────────────────────────

/// The unit of work backing a service-like task.
///
/// Every field is optional: a partial job record still contributes whatever
/// it carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_key: Option<String>,
    #[serde(default)]
    pub retries: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_headers: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_instance_key: Option<String>,
}

// ── Process instance ────────────────────────────────────────────────

/// A process instance. Used here as the child instance a call activity
/// started.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInstance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_instance_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_definition_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_definition_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_definition_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_element_instance_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ProcessInstanceState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

// ── Decision instance ───────────────────────────────────────────────

/// One evaluation of a decision definition triggered by a business rule task.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecisionInstance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_evaluation_instance_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_evaluation_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_definition_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_definition_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_instance_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<DecisionInstanceState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_failure: Option<String>,
}

// ── User task ───────────────────────────────────────────────────────

/// The user-task fields the metadata view shows. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserTaskSubset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_task_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_groups: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_users: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<UserTaskState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_form_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_headers: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

/// A full user-task record as returned by a user-task search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_instance_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_instance_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(flatten)]
    pub fields: UserTaskSubset,
}

impl UserTask {
    /// The part of the task the metadata view consumes.
    pub fn subset(&self) -> UserTaskSubset {
        self.fields.clone()
    }
}

// ── Search results ──────────────────────────────────────────────────

/// Paging information attached to a search response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub total_items: u64,
}

/// One page of search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchPage<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub page: PageInfo,
}

impl<T> Default for SearchPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: PageInfo::default(),
        }
    }
}

impl<T> SearchPage<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ── Bundles ─────────────────────────────────────────────────────────

/// The already-fetched records describing one element execution.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataSources {
    pub element_instance: ElementInstance,
    pub job: Option<Job>,
    pub called_process_instance: Option<ProcessInstance>,
    pub decision_instance: Option<DecisionInstance>,
    pub user_task: Option<UserTaskSubset>,
}

impl MetadataSources {
    /// Sources with only the element instance present.
    pub fn new(element_instance: ElementInstance) -> Self {
        Self {
            element_instance,
            job: None,
            called_process_instance: None,
            decision_instance: None,
            user_task: None,
        }
    }
}

/// An element instance plus the raw search pages its linked records may be
/// found in.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedPages {
    pub element_instance: ElementInstance,
    pub jobs: SearchPage<Job>,
    pub process_instances: SearchPage<ProcessInstance>,
    pub decision_instances: SearchPage<DecisionInstance>,
    pub user_tasks: SearchPage<UserTask>,
}
