//! Picking an element's linked records out of already-fetched search pages.
//!
//! Only the link that applies to the element's type is looked up: a called
//! process for call activities, a decision instance for business rule tasks,
//! user-task fields for user tasks. Jobs are matched for every type.

use flowmeta_records::{ElementInstanceType, LinkedPages, MetadataSources};

/// Whether an element of this type can start a child process instance.
pub fn links_called_process(element_type: &ElementInstanceType) -> bool {
    matches!(element_type, ElementInstanceType::CallActivity)
}

/// Whether an element of this type evaluates a decision.
pub fn links_decision_instance(element_type: &ElementInstanceType) -> bool {
    matches!(element_type, ElementInstanceType::BusinessRuleTask)
}

/// Whether an element of this type carries user-task fields.
pub fn links_user_task(element_type: &ElementInstanceType) -> bool {
    matches!(element_type, ElementInstanceType::UserTask)
}

/// Select the records linked to `pages.element_instance`.
pub fn resolve_linked_records(pages: &LinkedPages) -> MetadataSources {
    let element = &pages.element_instance;
    let key = element.element_instance_key.as_str();
    let element_type = &element.element_type;

    let job = first_linked(&pages.jobs.items, "job", key, |j| {
        j.element_instance_key.as_deref()
    })
    .cloned();

    let called_process_instance = if links_called_process(element_type) {
        first_linked(&pages.process_instances.items, "process instance", key, |p| {
            p.parent_element_instance_key.as_deref()
        })
        .cloned()
    } else {
        None
    };

    let decision_instance = if links_decision_instance(element_type) {
        first_linked(&pages.decision_instances.items, "decision instance", key, |d| {
            d.element_instance_key.as_deref()
        })
        .cloned()
    } else {
        None
    };

    let user_task = if links_user_task(element_type) {
        first_linked(&pages.user_tasks.items, "user task", key, |t| {
            t.element_instance_key.as_deref()
        })
        .map(|t| t.subset())
    } else {
        None
    };

    MetadataSources {
        element_instance: element.clone(),
        job,
        called_process_instance,
        decision_instance,
        user_task,
    }
}

/// First item whose link key equals `element_instance_key`.
fn first_linked<'a, T>(
    items: &'a [T],
    kind: &str,
    element_instance_key: &str,
    link_key: impl Fn(&T) -> Option<&str>,
) -> Option<&'a T> {
    let mut matches = items
        .iter()
        .filter(|item| link_key(item) == Some(element_instance_key));
    let first = matches.next();
    let extra = matches.count();
    if extra > 0 {
        tracing::debug!(
            kind,
            element_instance_key,
            ignored = extra,
            "several linked records match; using the first"
        );
    }
    first
}
