/*!
    flattened views of the decoded words, for rendering layers expecting one boolean per badge and one label per field

    Every field is always present. Serialized field names are camelCase, like `rawValue` or `oToTFixed`.
*/

use serde::Serialize;
use crate::{
    params::ConnectionParams,
    trigger::TriggerTransport,
    words::{ConnectionType, Priority, Way},
};

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerTransportView {
    pub raw_value: String,
    pub transport_classes: TransportClassesView,
    pub triggers: TriggersView,
    pub application_types: ApplicationTypesView,
    pub direction: DirectionView,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportClassesView {
    pub description: String,
    pub hex: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggersView {
    pub description: String,
    pub cyclic: bool,
    pub change_of_state: bool,
    pub application: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationTypesView {
    pub description: String,
    pub listen_only: bool,
    pub input_only: bool,
    pub exclusive_owner: bool,
    pub redundant_owner: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionView {
    pub description: String,
    pub is_server: bool,
}

impl From<&TriggerTransport> for TriggerTransportView {
    fn from(decoded: &TriggerTransport) -> Self {
        Self {
            raw_value: decoded.raw_value(),
            transport_classes: TransportClassesView {
                description: decoded.transport_class_description(),
                hex: decoded.transport_class_hex(),
            },
            triggers: TriggersView {
                description: decoded.trigger_description(),
                cyclic: decoded.cyclic(),
                change_of_state: decoded.change_of_state(),
                application: decoded.application_triggered(),
            },
            application_types: ApplicationTypesView {
                description: decoded.application_description(),
                listen_only: decoded.listen_only(),
                input_only: decoded.input_only(),
                exclusive_owner: decoded.exclusive_owner(),
                redundant_owner: decoded.redundant_owner(),
            },
            direction: DirectionView {
                description: decoded.direction_description(),
                is_server: decoded.is_server(),
            },
        }
    }
}


#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionParamsView {
    pub raw_value: String,
    pub size_support: SizeSupportView,
    pub real_time_format: RealTimeFormatView,
    pub connection_types: ConnectionTypesView,
    pub priority: PriorityView,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeSupportView {
    pub description: String,
    pub o_to_t_fixed: bool,
    pub o_to_t_variable: bool,
    pub t_to_o_fixed: bool,
    pub t_to_o_variable: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealTimeFormatView {
    pub description: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionTypesView {
    pub description: String,
    pub o_to_t: ConnectionTypeFlags,
    pub t_to_o: ConnectionTypeFlags,
}

/// connection type of one direction, both false for a reserved code
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionTypeFlags {
    pub multicast: bool,
    pub point_to_point: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityView {
    pub description: String,
    pub o_to_t: PriorityFlags,
    pub t_to_o: PriorityFlags,
}

/// priority of one direction, all false for a reserved code
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityFlags {
    pub low: bool,
    pub high: bool,
    pub scheduled: bool,
}

impl From<&ConnectionParams> for ConnectionParamsView {
    fn from(decoded: &ConnectionParams) -> Self {
        let size = decoded.size_support;
        let types = decoded.connection_type.map(|code| ConnectionTypeFlags {
            multicast: code.is(ConnectionType::Multicast),
            point_to_point: code.is(ConnectionType::PointToPoint),
        });
        let priorities = decoded.priority.map(|code| PriorityFlags {
            low: code.is(Priority::Low),
            high: code.is(Priority::High),
            scheduled: code.is(Priority::Scheduled),
        });
        Self {
            raw_value: decoded.raw_value(),
            size_support: SizeSupportView {
                description: decoded.size_support_description(),
                o_to_t_fixed: size.o_to_t_fixed(),
                o_to_t_variable: size.o_to_t_variable(),
                t_to_o_fixed: size.t_to_o_fixed(),
                t_to_o_variable: size.t_to_o_variable(),
            },
            real_time_format: RealTimeFormatView {
                description: decoded.real_time_format_description(),
            },
            connection_types: ConnectionTypesView {
                description: decoded.connection_types_description(),
                o_to_t: *types.get(Way::OriginatorToTarget),
                t_to_o: *types.get(Way::TargetToOriginator),
            },
            priority: PriorityView {
                description: decoded.priority_description(),
                o_to_t: *priorities.get(Way::OriginatorToTarget),
                t_to_o: *priorities.get(Way::TargetToOriginator),
            },
        }
    }
}
