//! String-valued enumerations carried by process-engine records.
//!
//! Every enumeration keeps an `Other` variant holding the raw wire string,
//! so a value introduced by a newer engine parses and serializes back
//! unchanged instead of failing the whole record.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this version does not know about, kept verbatim.
            Other(String),
        }

        impl $name {
            /// The wire representation of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Other(raw) => raw.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                match raw {
                    $( $wire => $name::$variant, )+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                $name::from(raw.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Kind of diagram node an element instance executes.
    ElementInstanceType {
        Unspecified => "UNSPECIFIED",
        Process => "PROCESS",
        SubProcess => "SUB_PROCESS",
        EventSubProcess => "EVENT_SUB_PROCESS",
        AdHocSubProcess => "AD_HOC_SUB_PROCESS",
        AdHocSubProcessInnerInstance => "AD_HOC_SUB_PROCESS_INNER_INSTANCE",
        StartEvent => "START_EVENT",
        IntermediateCatchEvent => "INTERMEDIATE_CATCH_EVENT",
        IntermediateThrowEvent => "INTERMEDIATE_THROW_EVENT",
        BoundaryEvent => "BOUNDARY_EVENT",
        EndEvent => "END_EVENT",
        ServiceTask => "SERVICE_TASK",
        ReceiveTask => "RECEIVE_TASK",
        UserTask => "USER_TASK",
        ManualTask => "MANUAL_TASK",
        Task => "TASK",
        ExclusiveGateway => "EXCLUSIVE_GATEWAY",
        InclusiveGateway => "INCLUSIVE_GATEWAY",
        ParallelGateway => "PARALLEL_GATEWAY",
        EventBasedGateway => "EVENT_BASED_GATEWAY",
        SequenceFlow => "SEQUENCE_FLOW",
        MultiInstanceBody => "MULTI_INSTANCE_BODY",
        CallActivity => "CALL_ACTIVITY",
        BusinessRuleTask => "BUSINESS_RULE_TASK",
        ScriptTask => "SCRIPT_TASK",
        SendTask => "SEND_TASK",
        Unknown => "UNKNOWN",
    }
}

wire_enum! {
    /// Lifecycle status of a generic element instance.
    ElementInstanceState {
        Active => "ACTIVE",
        Completed => "COMPLETED",
        Terminated => "TERMINATED",
    }
}

wire_enum! {
    /// Lifecycle status of a user task. More granular than
    /// [`ElementInstanceState`].
    UserTaskState {
        Creating => "CREATING",
        Created => "CREATED",
        Assigning => "ASSIGNING",
        Updating => "UPDATING",
        Completing => "COMPLETING",
        Completed => "COMPLETED",
        Canceling => "CANCELING",
        Canceled => "CANCELED",
        Failed => "FAILED",
    }
}

wire_enum! {
    /// Outcome of a decision evaluation.
    DecisionInstanceState {
        Evaluated => "EVALUATED",
        Failed => "FAILED",
        Unspecified => "UNSPECIFIED",
        Unknown => "UNKNOWN",
    }
}

wire_enum! {
    /// Lifecycle status of a process instance.
    ProcessInstanceState {
        Active => "ACTIVE",
        Completed => "COMPLETED",
        Terminated => "TERMINATED",
    }
}
