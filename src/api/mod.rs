// ABOUTME: Typed client for the panel's container endpoints.
// ABOUTME: Each operation builds one request and hands it to the dispatcher.

mod models;

pub use models::{
    Ack, AnacondaPorts, ContainerStats, ContainerSummary, ImageSummary, PortMapping,
};

use crate::dispatch::{Body, DispatchError, Dispatcher, Request};
use crate::types::ContainerId;

pub const CONTAINERS_PATH: &str = "/docker/containers";
pub const IMAGES_PATH: &str = "/docker/images";
pub const CREATE_ANACONDA_PATH: &str = "/docker/containers/create_anaconda_container";

/// Container operations against the panel backend.
///
/// Every method issues exactly one request through the dispatcher and returns
/// its error unchanged. IDs are placed into the path verbatim; the backend is
/// the one that rejects bad ones.
#[derive(Debug, Clone)]
pub struct ContainerApi<D> {
    dispatcher: D,
}

impl<D: Dispatcher> ContainerApi<D> {
    pub fn new(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// `POST /docker/containers`
    pub async fn list_containers(&self) -> Result<Vec<ContainerSummary>, DispatchError> {
        let reply = self.dispatcher.dispatch(Request::post(CONTAINERS_PATH)).await?;
        // The backend sends `null` for an empty list.
        Ok(reply.decode::<Option<Vec<_>>>()?.unwrap_or_default())
    }

    /// `POST /docker/images`
    pub async fn list_images(&self) -> Result<Vec<ImageSummary>, DispatchError> {
        let reply = self.dispatcher.dispatch(Request::post(IMAGES_PATH)).await?;
        Ok(reply.decode::<Option<Vec<_>>>()?.unwrap_or_default())
    }

    /// `POST /docker/containers/{id}/stats`
    pub async fn container_stats(&self, id: &ContainerId) -> Result<ContainerStats, DispatchError> {
        let reply = self
            .dispatcher
            .dispatch(Request::post(container_path(id, "stats")))
            .await?;
        reply.decode()
    }

    /// `POST /docker/containers/{id}/start`
    pub async fn start_container(&self, id: &ContainerId) -> Result<Ack, DispatchError> {
        self.container_action(id, "start").await
    }

    /// `POST /docker/containers/{id}/stop`
    pub async fn stop_container(&self, id: &ContainerId) -> Result<Ack, DispatchError> {
        self.container_action(id, "stop").await
    }

    /// `POST /docker/containers/{id}/remove`
    ///
    /// The backend force-removes the container along with its anonymous volumes.
    pub async fn remove_container(&self, id: &ContainerId) -> Result<Ack, DispatchError> {
        self.container_action(id, "remove").await
    }

    /// `POST /docker/containers/create_anaconda_container`
    ///
    /// Asks the backend to create and start a GPU Anaconda container with
    /// Jupyter and sshd published on the given host ports.
    pub async fn create_anaconda_container(
        &self,
        ports: AnacondaPorts,
    ) -> Result<Ack, DispatchError> {
        let request = Request::post(CREATE_ANACONDA_PATH).with_body(Body::form([
            ("jupyter_port", ports.jupyter_port),
            ("ssh_port", ports.ssh_port),
        ]));
        let reply = self.dispatcher.dispatch(request).await?;
        Ok(Ack::from(reply))
    }

    async fn container_action(&self, id: &ContainerId, action: &str) -> Result<Ack, DispatchError> {
        let reply = self
            .dispatcher
            .dispatch(Request::post(container_path(id, action)))
            .await?;
        Ok(Ack::from(reply))
    }
}

/// Path of the interactive console websocket (`GET`) for a container.
pub fn console_path(id: &ContainerId) -> String {
    container_path(id, "console")
}

fn container_path(id: &ContainerId, action: &str) -> String {
    format!("{CONTAINERS_PATH}/{id}/{action}")
}
