//! Machines service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::Machine;
use crate::Result;

/// Service for listing cluster machines.
pub struct MachinesService {
    inner: Arc<ClientInner>,
}

impl MachinesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all machines, across every page.
    pub async fn list(&self) -> Result<Vec<Machine>> {
        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            machines: Vec<Machine>,
        }

        let response: Response = self.inner.read_as("machines", &()).await?;
        Ok(response.machines)
    }
}
