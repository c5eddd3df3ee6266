//! Typed conductor requests and their JSON-RPC method/params mapping.

use std::fmt;

use serde::Serialize;
use serde_json::{Value, json};

use crate::types::ContentHash;

/// Admin resource namespaces exposed under `admin/<resource>/<action>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminResource {
    Dna,
    Agent,
    Interface,
    Instance,
}

impl AdminResource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dna => "dna",
            Self::Agent => "agent",
            Self::Interface => "interface",
            Self::Instance => "instance",
        }
    }
}

impl fmt::Display for AdminResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One remote operation against the conductor.
#[derive(Debug, Clone, PartialEq)]
pub enum ConductorRequest {
    /// `admin/dna/list`
    ListDnas,
    /// `admin/instance/list`
    ListInstances,
    /// Any other parameterless admin endpoint, e.g. `admin/agent/list`.
    Admin {
        resource: AdminResource,
        action: String,
    },
    InstallDna {
        id: ContentHash,
        path: String,
        expected_hash: ContentHash,
    },
    UninstallDna {
        id: ContentHash,
    },
    AddInstance {
        id: String,
        agent_id: String,
        dna_id: ContentHash,
    },
    AddInstanceToInterface {
        interface_id: String,
        instance_id: String,
    },
    StartInstance {
        id: String,
    },
    /// Zome function call on a running instance.
    ZomeCall {
        instance_id: String,
        zome: String,
        function: String,
        args: Value,
    },
}

/// Wire form of a request: JSON-RPC method name plus params object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcCall {
    pub method: String,
    pub params: Value,
}

impl ConductorRequest {
    /// Build a zome call with an object payload.
    #[must_use]
    pub fn zome(instance_id: &str, zome: &str, function: &str, args: Value) -> Self {
        Self::ZomeCall {
            instance_id: instance_id.to_string(),
            zome: zome.to_string(),
            function: function.to_string(),
            args,
        }
    }

    /// `true` for requests that change conductor state.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::InstallDna { .. }
                | Self::UninstallDna { .. }
                | Self::AddInstance { .. }
                | Self::AddInstanceToInterface { .. }
                | Self::StartInstance { .. }
        )
    }

    #[must_use]
    pub fn rpc(&self) -> RpcCall {
        let (method, params) = match self {
            Self::ListDnas => ("admin/dna/list".to_string(), json!({})),
            Self::ListInstances => ("admin/instance/list".to_string(), json!({})),
            Self::Admin { resource, action } => (format!("admin/{resource}/{action}"), json!({})),
            Self::InstallDna {
                id,
                path,
                expected_hash,
            } => (
                "admin/dna/install_from_file".to_string(),
                json!({ "id": id, "path": path, "expected_hash": expected_hash }),
            ),
            Self::UninstallDna { id } => ("admin/dna/uninstall".to_string(), json!({ "id": id })),
            Self::AddInstance {
                id,
                agent_id,
                dna_id,
            } => (
                "admin/instance/add".to_string(),
                json!({ "id": id, "agent_id": agent_id, "dna_id": dna_id }),
            ),
            Self::AddInstanceToInterface {
                interface_id,
                instance_id,
            } => (
                "admin/interface/add_instance".to_string(),
                json!({ "interface_id": interface_id, "instance_id": instance_id }),
            ),
            Self::StartInstance { id } => ("admin/instance/start".to_string(), json!({ "id": id })),
            Self::ZomeCall {
                instance_id,
                zome,
                function,
                args,
            } => (
                "call".to_string(),
                json!({
                    "instance_id": instance_id,
                    "zome": zome,
                    "function": function,
                    "args": args,
                }),
            ),
        };
        RpcCall { method, params }
    }
}

impl fmt::Display for ConductorRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZomeCall {
                instance_id,
                zome,
                function,
                ..
            } => write!(f, "{instance_id}/{zome}/{function}"),
            other => f.write_str(&other.rpc().method),
        }
    }
}
