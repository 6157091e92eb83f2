use easytv_domain::codes::{ClientError, ErrorCode};
use easytv_domain::dates::parse_picker_date;
use easytv_domain::dialog::{ButtonSet, ModalData, Template};
use easytv_domain::entities::{Service, ServiceTask};
use easytv_domain::job_draft::JobDraft;
use serde_json::Value;
use tracing::info;

use crate::state::UiState;
use crate::view_state::ViewState;

/// The create-job form: two dates and an ordered list of tasks.
pub struct CreateJobController {
    state: UiState,
    services: ViewState<Vec<Service>>,
    draft: JobDraft,
}

impl CreateJobController {
    pub fn new(state: UiState) -> Self {
        Self {
            state,
            services: ViewState::Idle,
            draft: JobDraft::new(),
        }
    }

    pub fn draft(&self) -> &JobDraft {
        &self.draft
    }

    pub fn services(&self) -> &ViewState<Vec<Service>> {
        &self.services
    }

    pub async fn load_services(&mut self) -> bool {
        self.services = ViewState::Loading;
        match self.state.dashboard_service().get_services().await {
            Ok(services) => {
                self.services = ViewState::Ready(services);
                true
            }
            Err(error) => {
                let code = self.state.errors.handle(&error).await;
                self.services = ViewState::Failed(code);
                false
            }
        }
    }

    /// Every task offered by the loaded services, in listing order.
    pub fn available_tasks(&self) -> Vec<ServiceTask> {
        self.services
            .data()
            .map(|services| {
                services
                    .iter()
                    .flat_map(|s| s.tasks.iter().cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Refresh the services, let the user pick a task and append it.
    /// Returns the index of the new step.
    pub async fn add_task(&mut self) -> Option<usize> {
        self.load_services().await;
        let tasks = self.available_tasks();
        let data = ModalData::new("add_task", ButtonSet::OkCancel);
        let task = self.state.dispatcher.open_task_list(&data, &tasks).await?;
        info!("添加步骤 {} ({})", task.name, task.id);
        Some(self.draft.add_task(task))
    }

    pub async fn remove_task(&mut self, index: usize) -> bool {
        let data = ModalData::new("delete_task_confirmation", ButtonSet::YesNo);
        let outcome = self
            .state
            .dispatcher
            .open_dialog(Template::Dialog, &data)
            .await;
        outcome.is_confirmed() && self.draft.remove_task(index).is_some()
    }

    pub fn set_input(&mut self, task_index: usize, key: &str, value: Value) -> bool {
        match self.draft.task_mut(task_index) {
            Some(task) => {
                task.set_input(key, value);
                true
            }
            None => false,
        }
    }

    pub fn link_input(&mut self, task_index: usize, key: &str, upstream_output: &str) -> bool {
        match self.draft.task_mut(task_index) {
            Some(task) => {
                task.link_input(key, upstream_output);
                true
            }
            None => false,
        }
    }

    /// The "linked" checkbox of an input changed.
    pub fn clear_linked_input(&mut self, task_index: usize, key: &str, linked: bool) {
        if let Some(task) = self.draft.task_mut(task_index) {
            task.set_linked(key, linked);
        }
    }

    pub async fn set_publication_date(&mut self, picker_value: &str) -> bool {
        match self.parse_date(picker_value).await {
            Some(date) => {
                self.draft.publication_date = date;
                true
            }
            None => false,
        }
    }

    pub async fn set_expiration_date(&mut self, picker_value: &str) -> bool {
        match self.parse_date(picker_value).await {
            Some(date) => {
                self.draft.expiration_date = date;
                true
            }
            None => false,
        }
    }

    /// `Some(None)` clears the field; `None` means the value was rejected.
    async fn parse_date(&self, picker_value: &str) -> Option<Option<i64>> {
        if picker_value.trim().is_empty() {
            return Some(None);
        }
        match parse_picker_date(picker_value) {
            Some(epoch) => Some(Some(epoch)),
            None => {
                self.state
                    .errors
                    .handle_code(&ErrorCode::Client(ClientError::InvalidDate))
                    .await;
                None
            }
        }
    }

    /// Submit the draft; on success the form is emptied.
    pub async fn post_job(&mut self) -> Option<i64> {
        match self.state.dashboard_service().create_job(&self.draft).await {
            Ok(created) => {
                self.draft.reset();
                self.state
                    .dispatcher
                    .open_popup(
                        Template::Popup,
                        &ModalData::success().with_message("job_created"),
                        None,
                    )
                    .await;
                Some(created.job_id.unwrap_or_default())
            }
            Err(error) => {
                self.state.errors.handle(&error).await;
                None
            }
        }
    }
}
