// ABOUTME: Response models decoded from the panel's `data` payloads.
// ABOUTME: Field names follow the backend, which relays Docker Engine API types.

use crate::dispatch::Reply;
use crate::types::{ContainerId, ImageId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of the container listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerSummary {
    pub id: ContainerId,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default, rename = "ImageID")]
    pub image_id: String,
    #[serde(default)]
    pub command: String,
    /// Unix timestamp, seconds.
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub ports: Vec<PortMapping>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub status: String,
}

impl ContainerSummary {
    /// Primary name without Docker's leading slash.
    pub fn name(&self) -> &str {
        self.names
            .first()
            .map(|n| n.trim_start_matches('/'))
            .unwrap_or_default()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }

    pub fn is_running(&self) -> bool {
        self.state == "running"
    }
}

/// A published or exposed port on a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    #[serde(default, rename = "IP")]
    pub ip: String,
    #[serde(rename = "PrivatePort")]
    pub private_port: u16,
    #[serde(default, rename = "PublicPort")]
    pub public_port: Option<u16>,
    #[serde(default, rename = "Type")]
    pub protocol: String,
}

impl std::fmt::Display for PortMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.public_port {
            Some(public) if self.ip.is_empty() => {
                write!(f, "{}->{}/{}", public, self.private_port, self.protocol)
            }
            Some(public) => write!(
                f,
                "{}:{}->{}/{}",
                self.ip, public, self.private_port, self.protocol
            ),
            None => write!(f, "{}/{}", self.private_port, self.protocol),
        }
    }
}

/// One entry of the image listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageSummary {
    pub id: ImageId,
    #[serde(default)]
    pub parent_id: String,
    #[serde(default)]
    pub repo_tags: Option<Vec<String>>,
    #[serde(default)]
    pub repo_digests: Option<Vec<String>>,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub size: i64,
    /// -1 when the backend did not count.
    #[serde(default)]
    pub containers: i64,
    #[serde(default)]
    pub labels: Option<HashMap<String, String>>,
}

impl ImageSummary {
    pub fn tags(&self) -> &[String] {
        self.repo_tags.as_deref().unwrap_or_default()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }
}

/// Point-in-time resource usage of one container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerStats {
    #[serde(rename = "Id")]
    pub id: ContainerId,
    /// Percent of host CPU, already scaled by core count.
    #[serde(default, rename = "CPUUsage")]
    pub cpu_usage: f64,
    /// Bytes.
    #[serde(default, rename = "MemoryUsage")]
    pub memory_usage: u64,
    /// Bytes; zero when unlimited or unknown.
    #[serde(default, rename = "MemoryLimit")]
    pub memory_limit: u64,
}

impl ContainerStats {
    pub fn memory_percent(&self) -> f64 {
        if self.memory_limit == 0 {
            return 0.0;
        }
        self.memory_usage as f64 / self.memory_limit as f64 * 100.0
    }
}

/// Acknowledgement for operations whose `data` carries nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub message: String,
}

impl From<Reply> for Ack {
    fn from(reply: Reply) -> Self {
        Ack {
            message: reply.message,
        }
    }
}

/// Host ports for a new Anaconda container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnacondaPorts {
    /// Host port mapped to Jupyter (8888 inside the container).
    pub jupyter_port: u16,
    /// Host port mapped to sshd (22 inside the container).
    pub ssh_port: u16,
}

impl AnacondaPorts {
    pub fn new(jupyter_port: u16, ssh_port: u16) -> Self {
        Self {
            jupyter_port,
            ssh_port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn container_summary_from_engine_json() {
        let value = json!({
            "Id": "4f2a9c0e11d7aa",
            "Names": ["/jupyter"],
            "Image": "yanfei/anaconda3:latest",
            "ImageID": "sha256:beef",
            "Command": "/bin/bash -c ...",
            "Created": 1700000000,
            "Ports": [
                {"IP": "0.0.0.0", "PrivatePort": 8888, "PublicPort": 18888, "Type": "tcp"},
                {"PrivatePort": 22, "Type": "tcp"}
            ],
            "Labels": {},
            "State": "running",
            "Status": "Up 2 hours"
        });
        let summary: ContainerSummary = serde_json::from_value(value).unwrap();
        assert_eq!(summary.name(), "jupyter");
        assert!(summary.is_running());
        assert_eq!(summary.ports[0].to_string(), "0.0.0.0:18888->8888/tcp");
        assert_eq!(summary.ports[1].to_string(), "22/tcp");
        assert_eq!(
            summary.created_at().unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );
    }

    #[test]
    fn image_summary_tolerates_null_tags() {
        let value = json!({"Id": "sha256:abc", "RepoTags": null, "Size": 1024});
        let image: ImageSummary = serde_json::from_value(value).unwrap();
        assert!(image.tags().is_empty());
        assert_eq!(image.size, 1024);
    }

    #[test]
    fn stats_use_backend_field_names() {
        let value = json!({
            "Id": "abc",
            "CPUUsage": 12.5,
            "MemoryUsage": 256,
            "MemoryLimit": 1024
        });
        let stats: ContainerStats = serde_json::from_value(value).unwrap();
        assert_eq!(stats.cpu_usage, 12.5);
        assert_eq!(stats.memory_percent(), 25.0);
    }

    #[test]
    fn memory_percent_without_limit_is_zero() {
        let stats = ContainerStats {
            id: ContainerId::new("abc"),
            cpu_usage: 0.0,
            memory_usage: 500,
            memory_limit: 0,
        };
        assert_eq!(stats.memory_percent(), 0.0);
    }
}
