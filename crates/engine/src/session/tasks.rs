//! Reward task completion

use super::{ensure_ok, Session};
use matchfarm_core::{Result, TaskList, TaskRequest, TASK_CLAIM_SUCCESS};
use matchfarm_networking::Endpoint;
use tracing::{debug, info, warn};

impl Session<'_> {
    /// Complete and claim every pending task; failures only skip that task
    pub(super) async fn complete_tasks(&mut self) {
        let names = match self.pending_tasks().await {
            Ok(names) => names,
            Err(e) => {
                warn!("Error fetching task list: {}", e);
                return;
            }
        };

        debug!("{} pending tasks", names.len());

        for name in names {
            if self.complete_task(&name).await {
                self.report.tasks_claimed += 1;
            }
        }
    }

    async fn pending_tasks(&self) -> Result<Vec<String>> {
        let response = self.post(Endpoint::TaskList, &self.uid_body()).await?;
        ensure_ok(Endpoint::TaskList, &response)?;
        let list: TaskList = response.data(Endpoint::TaskList)?;
        Ok(list.pending_names())
    }

    async fn complete_task(&self, name: &str) -> bool {
        let body = TaskRequest {
            uid: self.credential.uid(),
            task_type: name,
        };

        match self.post(Endpoint::TaskComplete, &body).await {
            Ok(response) if response.is_ok() => {}
            Ok(response) => {
                warn!("Error completing task {}! Status: {}", name, response.status);
                debug!("Response: {:?}", response.body);
                return false;
            }
            Err(e) => {
                warn!("Error completing task {}: {}", name, e);
                return false;
            }
        }

        let response = match self.post(Endpoint::TaskClaim, &body).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Error claiming task reward {}: {}", name, e);
                return false;
            }
        };

        let claimed = response.is_ok()
            && response.code() == Some(200)
            && response.raw_data().and_then(|data| data.as_str()) == Some(TASK_CLAIM_SUCCESS);

        if claimed {
            info!("Task {} ... Status: Completed", name);
        } else {
            warn!("Task {} ... Status: Failed (HTTP {})", name, response.status);
            debug!("Response: {:?}", response.body);
        }
        claimed
    }
}
