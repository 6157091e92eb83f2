use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use easytv_domain::api::{ServiceError, ServiceResult};
use easytv_domain::dates::format_epoch_date;
use easytv_domain::dialog::{ButtonSet, ModalData, Template};
use easytv_domain::entities::{Job, JobLifecycle, JobsPage};
use serde_json::{Map, Value};
use tracing::debug;

use crate::state::UiState;
use crate::view_state::ViewState;

/// A job as the list shows it, dates already rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRow {
    pub id: i64,
    pub publication_date: String,
    pub expiration_date: String,
    pub creation_date: Option<String>,
    pub completion_date: Option<String>,
    pub status: String,
    pub lifecycle: JobLifecycle,
    pub tasks: Vec<String>,
    pub output: Option<Map<String, Value>>,
}

impl JobRow {
    pub fn from_job(job: &Job) -> Self {
        Self::render(job, format_epoch_date)
    }

    /// Build a row with a custom date renderer.
    pub fn render(job: &Job, format: impl Fn(i64) -> String) -> Self {
        Self {
            id: job.id,
            publication_date: format(job.publication_date),
            expiration_date: format(job.expiration_date),
            creation_date: job.creation_date.map(&format),
            completion_date: job.completion_date.map(&format),
            status: job.status.clone(),
            lifecycle: job.lifecycle(),
            tasks: job.tasks.iter().map(|t| t.task_name.clone()).collect(),
            output: job.output.clone(),
        }
    }

    pub fn is_cancellable(&self) -> bool {
        self.lifecycle == JobLifecycle::Running
    }
}

#[derive(Debug, Default)]
struct JobsView {
    jobs: ViewState<Vec<JobRow>>,
    next: Option<String>,
}

/// The job list.
///
/// Loads may overlap; each response is tagged with the request that
/// produced it and only the latest one is applied.
#[derive(Clone)]
pub struct AllJobsController {
    state: UiState,
    view: Arc<Mutex<JobsView>>,
    latest: Arc<AtomicU64>,
}

impl AllJobsController {
    pub fn new(state: UiState) -> Self {
        Self {
            state,
            view: Arc::new(Mutex::new(JobsView::default())),
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn jobs(&self) -> ViewState<Vec<JobRow>> {
        self.with_view(|view| view.jobs.clone())
    }

    pub fn has_more(&self) -> bool {
        self.with_view(|view| view.next.is_some())
    }

    /// Reload the first page. Returns `false` when the response was stale
    /// or failed.
    pub async fn load(&self) -> bool {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.with_view(|view| view.jobs = ViewState::Loading);

        let result = self.state.dashboard_service().get_jobs().await;
        self.apply(ticket, result, false).await
    }

    /// Append the next page, if the server announced one.
    pub async fn load_more(&self) -> bool {
        let Some(next) = self.with_view(|view| view.next.clone()) else {
            return false;
        };
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.state.dashboard_service().get_jobs_at(&next).await;
        self.apply(ticket, result, true).await
    }

    async fn apply(&self, ticket: u64, result: ServiceResult<JobsPage>, append: bool) -> bool {
        if self.latest.load(Ordering::SeqCst) != ticket {
            debug!("丢弃过期的任务列表响应 #{}", ticket);
            // a dead session still has to end, however late the news
            if let Err(error) = &result {
                if error.code().invalidates_session() {
                    self.state.errors.handle(error).await;
                }
            }
            return false;
        }

        match result {
            Ok(page) => {
                let rows: Vec<JobRow> = page.jobs.iter().map(JobRow::from_job).collect();
                self.with_view(|view| {
                    match (&mut view.jobs, append) {
                        (ViewState::Ready(existing), true) => existing.extend(rows),
                        (jobs, _) => *jobs = ViewState::Ready(rows),
                    }
                    view.next = page.next;
                });
                true
            }
            Err(error) => {
                let code = self.state.errors.handle(&error).await;
                self.with_view(|view| view.jobs = ViewState::Failed(code));
                false
            }
        }
    }

    /// Ask, then cancel and reload. Returns whether the job was canceled.
    pub async fn cancel_job(&self, id: i64) -> bool {
        let data = ModalData::new("cancel_job_title", ButtonSet::YesNo)
            .with_message("cancel_job_message")
            .with_param(id.to_string());
        let outcome = self
            .state
            .dispatcher
            .open_dialog(Template::Dialog, &data)
            .await;
        if !outcome.is_confirmed() {
            return false;
        }

        match self.state.dashboard_service().cancel_job(id).await {
            Ok(_) => {
                self.load().await;
                true
            }
            Err(error) => {
                self.report(&error).await;
                false
            }
        }
    }

    pub async fn show_output(&self, id: i64) -> bool {
        let output = self.with_view(|view| {
            view.jobs
                .data()
                .and_then(|rows| rows.iter().find(|r| r.id == id))
                .map(|row| row.output.clone().unwrap_or_default())
        });
        let Some(output) = output else {
            return false;
        };

        let data = ModalData::new("output", ButtonSet::Ok).with_payload(Value::Object(output));
        self.state
            .dispatcher
            .open_popup(Template::Output, &data, None)
            .await;
        true
    }

    async fn report(&self, error: &ServiceError) {
        self.state.errors.handle(error).await;
    }

    fn with_view<T>(&self, f: impl FnOnce(&mut JobsView) -> T) -> T {
        let mut guard = self.view.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
