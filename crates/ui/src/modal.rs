use std::sync::Arc;

use easytv_domain::classifier::classify;
use easytv_domain::codes::{ClientError, ErrorCode};
use easytv_domain::dialog::{DialogOutcome, ModalData, Template};
use easytv_domain::entities::ServiceTask;
use easytv_domain::ports::ModalPresenter;
use tracing::debug;

/// Popup contents for an error code, as the classifier describes it.
pub fn error_modal(code: &ErrorCode) -> ModalData {
    let classification = classify(code);
    ModalData::new(classification.title_key, classification.buttons)
        .with_message(classification.message_key)
}

/// 对话框调度器
#[derive(Clone)]
pub struct ModalDispatcher {
    presenter: Arc<dyn ModalPresenter>,
}

impl ModalDispatcher {
    pub fn new(presenter: Arc<dyn ModalPresenter>) -> Self {
        Self { presenter }
    }

    pub async fn open_popup(&self, template: Template, data: &ModalData, width: Option<u32>) {
        debug!("弹出 {} ({})", template.name(), data.title);
        self.presenter.show_popup(template, data, width).await;
    }

    pub async fn open_dialog(&self, template: Template, data: &ModalData) -> DialogOutcome {
        let outcome = self.presenter.present_dialog(template, data).await;
        debug!("对话框 {} -> {:?}", data.title, outcome);
        outcome
    }

    pub async fn popup_error(&self, code: &ErrorCode) {
        self.open_popup(Template::Popup, &error_modal(code), None)
            .await;
    }

    /// Offer `tasks` in the task-list dialog; `Some` only when the user
    /// confirmed with a task highlighted.
    pub async fn open_task_list(&self, data: &ModalData, tasks: &[ServiceTask]) -> Option<ServiceTask> {
        let options: Vec<String> = tasks.iter().map(|t| t.name.clone()).collect();
        let reply = self.presenter.present_selection(data, &options).await;

        let mut modal = ModalController::new();
        if let Some(index) = reply.selected.filter(|i| *i < tasks.len()) {
            modal.select(index);
        }
        if modal.close_dialog(reply.choice, self).await.is_confirmed() {
            modal.selected().and_then(|i| tasks.get(i)).cloned()
        } else {
            None
        }
    }
}

/// State of an open list dialog: which row is highlighted.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    selected: Option<usize>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Confirming without a highlighted row is refused with `client-102`
    /// and the dialog closes declined. Anything but confirm declines.
    pub async fn close_dialog(&mut self, choice: i64, dispatcher: &ModalDispatcher) -> DialogOutcome {
        match DialogOutcome::from_return(choice) {
            DialogOutcome::Confirm if self.selected.is_some() => DialogOutcome::Confirm,
            DialogOutcome::Confirm => {
                dispatcher
                    .popup_error(&ErrorCode::Client(ClientError::NoTaskSelected))
                    .await;
                DialogOutcome::Decline
            }
            _ => {
                self.selected = None;
                DialogOutcome::Decline
            }
        }
    }
}
