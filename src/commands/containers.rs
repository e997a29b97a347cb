// ABOUTME: Container commands: list, stats, start, stop, remove, create.
// ABOUTME: Thin wrappers that call ContainerApi and render the result.

use futures::future::join_all;
use snafu::ResultExt;

use super::error::{ApiSnafu, CommandError};
use super::format::{format_age, format_size};
use crate::api::{Ack, AnacondaPorts, ContainerApi, ContainerStats, ContainerSummary};
use crate::dispatch::Dispatcher;
use crate::output::Output;
use crate::types::ContainerId;

pub async fn list_containers<D: Dispatcher>(
    api: &ContainerApi<D>,
    output: &Output,
) -> Result<(), CommandError> {
    let containers = api.list_containers().await.context(ApiSnafu {
        operation: "list containers",
    })?;

    output.list(
        &["CONTAINER ID", "IMAGE", "CREATED", "STATUS", "PORTS", "NAMES"],
        &containers,
        container_row,
    );
    Ok(())
}

/// Fetch stats for every ID at once; one request per container.
pub async fn container_stats<D: Dispatcher>(
    api: &ContainerApi<D>,
    ids: &[ContainerId],
    output: &Output,
) -> Result<(), CommandError> {
    let results = join_all(ids.iter().map(|id| api.container_stats(id))).await;

    let mut stats = Vec::with_capacity(results.len());
    let mut failed = 0;
    for (id, result) in ids.iter().zip(results) {
        match result {
            Ok(s) => stats.push(s),
            Err(e) => {
                failed += 1;
                output.error(&format!("{id}: {e}"));
            }
        }
    }

    output.list(
        &["CONTAINER ID", "CPU %", "MEM USAGE / LIMIT", "MEM %"],
        &stats,
        stats_row,
    );

    if failed > 0 {
        return Err(CommandError::PartialStats {
            failed,
            total: ids.len(),
        });
    }
    Ok(())
}

pub async fn start_container<D: Dispatcher>(
    api: &ContainerApi<D>,
    id: &ContainerId,
    output: &Output,
) -> Result<(), CommandError> {
    output.progress(&format!("  → Starting {}...", id));
    let ack = api.start_container(id).await.context(ApiSnafu {
        operation: "start container",
    })?;
    report(output, ack, id, "started");
    Ok(())
}

pub async fn stop_container<D: Dispatcher>(
    api: &ContainerApi<D>,
    id: &ContainerId,
    output: &Output,
) -> Result<(), CommandError> {
    output.progress(&format!("  → Stopping {}...", id));
    let ack = api.stop_container(id).await.context(ApiSnafu {
        operation: "stop container",
    })?;
    report(output, ack, id, "stopped");
    Ok(())
}

pub async fn remove_container<D: Dispatcher>(
    api: &ContainerApi<D>,
    id: &ContainerId,
    output: &Output,
) -> Result<(), CommandError> {
    output.progress(&format!("  → Removing {}...", id));
    let ack = api.remove_container(id).await.context(ApiSnafu {
        operation: "remove container",
    })?;
    report(output, ack, id, "removed");
    Ok(())
}

pub async fn create_anaconda_container<D: Dispatcher>(
    api: &ContainerApi<D>,
    ports: AnacondaPorts,
    output: &mut Output,
) -> Result<(), CommandError> {
    output.start_timer();
    output.progress(&format!(
        "  → Creating Anaconda container (jupyter :{}, ssh :{})...",
        ports.jupyter_port, ports.ssh_port
    ));
    let ack = api
        .create_anaconda_container(ports)
        .await
        .context(ApiSnafu {
            operation: "create anaconda container",
        })?;

    let message = if ack.message.is_empty() {
        "Anaconda container created".to_string()
    } else {
        ack.message
    };
    output.success(&format!("  ✓ {message}"));
    Ok(())
}

fn report(output: &Output, ack: Ack, id: &ContainerId, verb: &str) {
    if ack.message.is_empty() {
        output.success(&format!("  ✓ Container {} {}", id, verb));
    } else {
        output.success(&format!("  ✓ {}: {}", ack.message, id));
    }
}

fn container_row(c: &ContainerSummary) -> Vec<String> {
    vec![
        c.id.short().to_string(),
        c.image.clone(),
        format_age(c.created_at()),
        c.status.clone(),
        c.ports
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        c.name().to_string(),
    ]
}

fn stats_row(s: &ContainerStats) -> Vec<String> {
    vec![
        s.id.short().to_string(),
        format!("{:.2}%", s.cpu_usage),
        format!(
            "{} / {}",
            format_size(s.memory_usage),
            format_size(s.memory_limit)
        ),
        format!("{:.2}%", s.memory_percent()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_row_formats_usage() {
        let stats = ContainerStats {
            id: ContainerId::new("0123456789abcdef"),
            cpu_usage: 3.14159,
            memory_usage: 250_000_000,
            memory_limit: 1_000_000_000,
        };
        assert_eq!(
            stats_row(&stats),
            vec!["0123456789ab", "3.14%", "250.0MB / 1.0GB", "25.00%"]
        );
    }
}
