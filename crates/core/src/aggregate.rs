//! Aggregation of an element instance and its linked records into the flat
//! view model the metadata popover binds to.

use std::collections::BTreeMap;
use std::fmt;

use flowmeta_records::{
    DecisionInstance, ElementInstance, ElementInstanceState, ElementInstanceType, Job,
    MetadataSources, ProcessInstance, UserTaskState, UserTaskSubset,
};
use serde::Serialize;

/// The state shown for an element: user tasks report their own, more
/// granular lifecycle instead of the generic element state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetadataState {
    Element(ElementInstanceState),
    UserTask(UserTaskState),
}

impl MetadataState {
    pub fn as_str(&self) -> &str {
        match self {
            MetadataState::Element(state) => state.as_str(),
            MetadataState::UserTask(state) => state.as_str(),
        }
    }
}

impl fmt::Display for MetadataState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Denormalized metadata for one element instance.
///
/// Linkage and job fields serialize as `null` when the element has no such
/// link. Pass-through fields that were never supplied are left out of the
/// JSON object entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceMetadata {
    pub called_process_instance_id: Option<String>,
    pub called_process_definition_name: Option<String>,
    pub called_decision_instance_id: Option<String>,
    pub called_decision_definition_name: Option<String>,
    pub job_retries: Option<i64>,
    pub job_deadline: Option<String>,
    pub job_key: Option<String>,
    pub job_type: Option<String>,
    pub job_worker: Option<String>,
    pub job_custom_headers: Option<BTreeMap<String, serde_json::Value>>,

    pub element_instance_key: String,
    pub element_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_name: Option<String>,
    #[serde(rename = "type")]
    pub element_type: ElementInstanceType,
    pub state: MetadataState,
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_instance_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_key: Option<String>,
    pub has_incident: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_headers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_task_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_users: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_form_reference: Option<String>,
}

/// Collects the five metadata sources by name and builds an
/// [`InstanceMetadata`] from them.
#[derive(Debug, Clone, Copy)]
pub struct InstanceMetadataBuilder<'a> {
    element_instance: &'a ElementInstance,
    job: Option<&'a Job>,
    called_process: Option<&'a ProcessInstance>,
    decision_instance: Option<&'a DecisionInstance>,
    user_task: Option<&'a UserTaskSubset>,
}

impl<'a> InstanceMetadataBuilder<'a> {
    pub fn new(element_instance: &'a ElementInstance) -> Self {
        Self {
            element_instance,
            job: None,
            called_process: None,
            decision_instance: None,
            user_task: None,
        }
    }

    pub fn job(mut self, job: Option<&'a Job>) -> Self {
        self.job = job;
        self
    }

    pub fn called_process(mut self, called_process: Option<&'a ProcessInstance>) -> Self {
        self.called_process = called_process;
        self
    }

    pub fn decision_instance(mut self, decision_instance: Option<&'a DecisionInstance>) -> Self {
        self.decision_instance = decision_instance;
        self
    }

    pub fn user_task(mut self, user_task: Option<&'a UserTaskSubset>) -> Self {
        self.user_task = user_task;
        self
    }

    pub fn build(self) -> InstanceMetadata {
        let element = self.element_instance;
        let job = self.job;
        let called = self.called_process;
        let decision = self.decision_instance;

        if job.is_some() && self.user_task.is_some() {
            tracing::warn!(
                element_instance_key = %element.element_instance_key,
                "both job and user task fields supplied; passing both through unmerged"
            );
        }

        let empty = UserTaskSubset::default();
        let task = self.user_task.unwrap_or(&empty);

        let state = match &task.state {
            Some(task_state) => MetadataState::UserTask(task_state.clone()),
            None => MetadataState::Element(element.state.clone()),
        };

        InstanceMetadata {
            called_process_instance_id: linked_field(called, |p| p.process_instance_key.clone()),
            called_process_definition_name: linked_field(called, |p| {
                p.process_definition_name.clone()
            }),
            called_decision_instance_id: linked_field(decision, |d| {
                d.decision_evaluation_instance_key.clone()
            }),
            called_decision_definition_name: linked_field(decision, |d| {
                d.decision_definition_name.clone()
            }),
            job_retries: linked_field(job, |j| j.retries),
            job_deadline: linked_field(job, |j| j.deadline.clone()),
            job_key: linked_field(job, |j| j.job_key.clone()),
            job_type: linked_field(job, |j| j.job_type.clone()),
            job_worker: linked_field(job, |j| j.worker.clone()),
            job_custom_headers: linked_field(job, |j| j.custom_headers.clone()),

            element_instance_key: element.element_instance_key.clone(),
            element_id: element.element_id.clone(),
            element_name: element.element_name.clone(),
            element_type: element.element_type.clone(),
            state,
            start_date: non_empty_date(element.start_date.as_deref()).unwrap_or_default(),
            end_date: non_empty_date(element.end_date.as_deref()),
            process_definition_id: element.process_definition_id.clone(),
            process_instance_key: element.process_instance_key.clone(),
            process_definition_key: element.process_definition_key.clone(),
            has_incident: element.has_incident,
            incident_key: element.incident_key.clone(),
            tenant_id: element.tenant_id.clone(),

            creation_date: task.creation_date.clone(),
            completion_date: task.completion_date.clone(),
            custom_headers: task.custom_headers.clone(),
            priority: task.priority,
            user_task_key: task.user_task_key.clone(),
            due_date: task.due_date.clone(),
            follow_up_date: task.follow_up_date.clone(),
            form_key: task.form_key.clone(),
            assignee: task.assignee.clone(),
            candidate_groups: task.candidate_groups.clone(),
            candidate_users: task.candidate_users.clone(),
            external_form_reference: task.external_form_reference.clone(),
        }
    }
}

/// Build the metadata for one element instance from its linked records.
pub fn build_instance_metadata(
    element_instance: &ElementInstance,
    job: Option<&Job>,
    called_process: Option<&ProcessInstance>,
    decision_instance: Option<&DecisionInstance>,
    user_task: Option<&UserTaskSubset>,
) -> InstanceMetadata {
    InstanceMetadataBuilder::new(element_instance)
        .job(job)
        .called_process(called_process)
        .decision_instance(decision_instance)
        .user_task(user_task)
        .build()
}

/// Build the metadata from a sources bundle.
pub fn build_from_sources(sources: &MetadataSources) -> InstanceMetadata {
    build_instance_metadata(
        &sources.element_instance,
        sources.job.as_ref(),
        sources.called_process_instance.as_ref(),
        sources.decision_instance.as_ref(),
        sources.user_task.as_ref(),
    )
}

/// A field read from a linked record. Only a missing record or a missing
/// field yields `None`; `0` and `""` are kept.
fn linked_field<S, T>(source: Option<&S>, field: impl FnOnce(&S) -> Option<T>) -> Option<T> {
    source.and_then(field)
}

/// An engine timestamp, where the empty string also means "not set".
fn non_empty_date(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
