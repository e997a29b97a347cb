// ABOUTME: Command handlers for the dockmate CLI.
// ABOUTME: Each handler drives one ContainerApi operation and renders output.

mod containers;
mod error;
mod format;
mod images;

pub use containers::{
    container_stats, create_anaconda_container, list_containers, remove_container,
    start_container, stop_container,
};
pub use error::{CommandError, CommandErrorKind};
pub use images::list_images;
