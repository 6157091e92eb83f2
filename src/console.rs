use std::collections::VecDeque;
use std::sync::Mutex as StdMutex;

use async_trait::async_trait;
use easytv_application::SessionContext;
use easytv_domain::dialog::{DialogOutcome, ModalData, SelectionReply, Template};
use easytv_domain::entities::Language;
use easytv_domain::i18n::translate;
use easytv_domain::ports::ModalPresenter;
use tokio::io::{stdin, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::debug;

/// Modal presenter for a terminal.
///
/// Popups are printed to stdout; dialogs are answered on stdin by typing a
/// button label. End of input dismisses.
pub struct ConsolePresenter {
    session: SessionContext,
    assume_yes: bool,
    preset_selections: StdMutex<VecDeque<String>>,
    input: Mutex<Lines<BufReader<Stdin>>>,
}

impl ConsolePresenter {
    pub fn new(session: SessionContext, assume_yes: bool) -> Self {
        Self {
            session,
            assume_yes,
            preset_selections: StdMutex::new(VecDeque::new()),
            input: Mutex::new(BufReader::new(stdin()).lines()),
        }
    }

    /// Answer upcoming list dialogs with these option names, in order,
    /// instead of prompting.
    pub fn preselect(&self, names: impl IntoIterator<Item = String>) {
        self.preset_selections
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .extend(names);
    }

    fn next_preset(&self) -> Option<String> {
        self.preset_selections
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front()
    }

    async fn read_answer(&self, prompt: &str) -> Option<String> {
        print!("{prompt} ");
        flush_stdout();
        let mut input = self.input.lock().await;
        match input.next_line().await {
            Ok(Some(line)) => Some(line.trim().to_string()),
            Ok(None) => None,
            Err(e) => {
                debug!("读取输入失败: {}", e);
                None
            }
        }
    }
}

/// Render a modal as plain text in `language`.
pub fn render_modal(language: Language, template: Template, data: &ModalData) -> String {
    let mut text = format!("[{}]", translate(language, &data.title));
    if let Some(message) = &data.message {
        text.push(' ');
        text.push_str(&translate(language, message));
    }
    if let Some(param) = &data.param {
        text.push_str(param);
    }
    if let (Template::Output, Some(payload)) = (template, &data.payload) {
        let pretty = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
        text.push('\n');
        text.push_str(&pretty);
    }
    text
}

/// The button prompt, e.g. `(yes/no)`, with labels translated.
pub fn button_prompt(language: Language, data: &ModalData) -> String {
    let labels: Vec<String> = data
        .buttons
        .buttons()
        .iter()
        .map(|b| translate(language, b.name).into_owned())
        .collect();
    format!("({})", labels.join("/"))
}

/// Match a typed answer against the buttons, by key or translated label.
pub fn resolve_answer(language: Language, data: &ModalData, answer: &str) -> DialogOutcome {
    if let Some(outcome) = data.buttons.resolve(answer) {
        return outcome;
    }
    data.buttons
        .buttons()
        .iter()
        .find(|b| translate(language, b.name).eq_ignore_ascii_case(answer.trim()))
        .map(|b| b.outcome)
        .unwrap_or(DialogOutcome::Dismissed)
}

fn flush_stdout() {
    use std::io::Write;
    if let Err(e) = std::io::stdout().flush() {
        debug!("刷新标准输出失败: {}", e);
    }
}

#[async_trait]
impl ModalPresenter for ConsolePresenter {
    async fn show_popup(&self, template: Template, data: &ModalData, _width: Option<u32>) {
        println!("{}", render_modal(self.session.language(), template, data));
    }

    async fn present_dialog(&self, template: Template, data: &ModalData) -> DialogOutcome {
        let language = self.session.language();
        let text = render_modal(language, template, data);
        if self.assume_yes {
            println!("{text}");
            return DialogOutcome::Confirm;
        }

        let prompt = format!("{text} {}", button_prompt(language, data));
        match self.read_answer(&prompt).await {
            Some(answer) => resolve_answer(language, data, &answer),
            None => DialogOutcome::Dismissed,
        }
    }

    async fn present_selection(&self, data: &ModalData, options: &[String]) -> SelectionReply {
        if let Some(name) = self.next_preset() {
            let selected = options.iter().position(|o| *o == name);
            debug!("预选 {} -> {:?}", name, selected);
            return SelectionReply::new(1, selected);
        }

        let language = self.session.language();
        println!("{}", render_modal(language, Template::TaskList, data));
        for (index, option) in options.iter().enumerate() {
            println!("  {index}) {option}");
        }
        let Some(answer) = self.read_answer(&button_prompt(language, data)).await else {
            return SelectionReply::dismissed();
        };
        match answer.parse::<usize>() {
            Ok(index) => SelectionReply::new(1, Some(index)),
            Err(_) => {
                let outcome = resolve_answer(language, data, &answer);
                let choice = match outcome {
                    DialogOutcome::Confirm => 1,
                    DialogOutcome::Decline => 0,
                    DialogOutcome::Dismissed => -1,
                };
                SelectionReply::new(choice, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easytv_domain::dialog::ButtonSet;
    use serde_json::json;

    #[test]
    fn test_render_translates_and_appends_param() {
        let data = ModalData::success()
            .with_message("api_key")
            .with_param(": k-1");
        let text = render_modal(Language::En, Template::Popup, &data);
        assert!(text.starts_with("[Success]"));
        assert!(text.ends_with(": k-1"));
    }

    #[test]
    fn test_render_output_payload() {
        let data = ModalData::new("output", ButtonSet::Ok).with_payload(json!({"url": "x"}));
        let text = render_modal(Language::En, Template::Output, &data);
        assert!(text.contains("\"url\": \"x\""));
    }

    #[test]
    fn test_resolve_answer() {
        let data = ModalData::new("cancel_job_title", ButtonSet::YesNo);
        assert_eq!(resolve_answer(Language::En, &data, "YES"), DialogOutcome::Confirm);
        assert_eq!(resolve_answer(Language::En, &data, "no"), DialogOutcome::Decline);
        assert_eq!(resolve_answer(Language::En, &data, "maybe"), DialogOutcome::Dismissed);
    }

    #[test]
    fn test_unknown_key_renders_as_is() {
        let data = ModalData::new("error", ButtonSet::Ok).with_message("mystery-code");
        let text = render_modal(Language::En, Template::Popup, &data);
        assert!(text.contains("mystery-code"));
    }
}
