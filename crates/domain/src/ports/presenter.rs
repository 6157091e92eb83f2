use async_trait::async_trait;

use crate::dialog::{DialogOutcome, ModalData, SelectionReply, Template};

/// Surface that renders popups and dialogs.
#[async_trait]
pub trait ModalPresenter: Send + Sync {
    /// Informational popup; nothing is awaited.
    async fn show_popup(&self, template: Template, data: &ModalData, width: Option<u32>);

    /// Blocks the flow until the user answers or dismisses the dialog.
    async fn present_dialog(&self, template: Template, data: &ModalData) -> DialogOutcome;

    /// List dialog (`task_list`): the user highlights one of `options` and
    /// closes with a button.
    async fn present_selection(&self, data: &ModalData, options: &[String]) -> SelectionReply;
}
