// ABOUTME: Image listing command.
// ABOUTME: Renders the backend's image list as a table, IDs, or JSON lines.

use snafu::ResultExt;

use super::error::{ApiSnafu, CommandError};
use super::format::{format_age, format_size};
use crate::api::{ContainerApi, ImageSummary};
use crate::dispatch::Dispatcher;
use crate::output::Output;

pub async fn list_images<D: Dispatcher>(
    api: &ContainerApi<D>,
    output: &Output,
) -> Result<(), CommandError> {
    let images = api.list_images().await.context(ApiSnafu {
        operation: "list images",
    })?;

    output.list(
        &["IMAGE ID", "REPOSITORY:TAG", "CREATED", "SIZE"],
        &images,
        image_row,
    );
    Ok(())
}

fn image_row(image: &ImageSummary) -> Vec<String> {
    let id = image.id.as_str().trim_start_matches("sha256:");
    let tags = match image.tags() {
        [] => "<none>:<none>".to_string(),
        tags => tags.join(", "),
    };
    vec![
        id.chars().take(12).collect(),
        tags,
        format_age(image.created_at()),
        format_size(image.size.max(0) as u64),
    ]
}
