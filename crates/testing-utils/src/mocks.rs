//! Mock implementations of the gateway and presenter ports
//!
//! Both mocks are cheap to clone and share their state, so a test can keep
//! a handle while the code under test owns another.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use easytv_domain::api::{ApiRequest, Method, RawResponse};
use easytv_domain::dialog::{DialogOutcome, ModalData, SelectionReply, Template};
use easytv_domain::ports::{Gateway, ModalPresenter};
use serde_json::Value;

use crate::helpers::error_envelope;

#[derive(Debug, Clone)]
struct ScriptedResponse {
    response: RawResponse,
    delay: Option<Duration>,
}

/// Mock implementation of Gateway for testing
///
/// Responses are queued per `(method, path)`. The last queued response of a
/// route is repeated; unscripted routes answer `-404`.
#[derive(Debug, Clone, Default)]
pub struct MockGateway {
    routes: Arc<Mutex<HashMap<(Method, String), VecDeque<ScriptedResponse>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, method: Method, path: impl Into<String>, body: Value) -> &Self {
        self.push(method, path.into(), RawResponse::new(Some(200), body), None)
    }

    pub fn on_response(&self, method: Method, path: impl Into<String>, response: RawResponse) -> &Self {
        self.push(method, path.into(), response, None)
    }

    /// Answer only after `delay`, to make responses arrive out of order.
    pub fn on_delayed(
        &self,
        method: Method,
        path: impl Into<String>,
        body: Value,
        delay: Duration,
    ) -> &Self {
        self.push(
            method,
            path.into(),
            RawResponse::new(Some(200), body),
            Some(delay),
        )
    }

    fn push(
        &self,
        method: Method,
        path: String,
        response: RawResponse,
        delay: Option<Duration>,
    ) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path))
            .or_default()
            .push_back(ScriptedResponse { response, delay });
        self
    }

    fn next_response(&self, method: Method, path: &str) -> Option<ScriptedResponse> {
        let mut routes = self.routes.lock().unwrap();
        let queue = routes.get_mut(&(method, path.to_string()))?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn calls_to(&self, method: Method, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn request(&self, request: ApiRequest) -> RawResponse {
        let scripted = self.next_response(request.method, &request.path);
        self.requests.lock().unwrap().push(request);

        match scripted {
            Some(ScriptedResponse { response, delay }) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                response
            }
            None => error_envelope(-404, "no scripted response"),
        }
    }
}

/// A popup the presenter was asked to show
#[derive(Debug, Clone, PartialEq)]
pub struct ShownPopup {
    pub template: Template,
    pub data: ModalData,
    pub width: Option<u32>,
}

/// Mock implementation of ModalPresenter for testing
///
/// Dialogs are answered from a queue; an empty queue dismisses.
#[derive(Debug, Clone, Default)]
pub struct MockModalPresenter {
    answers: Arc<Mutex<VecDeque<DialogOutcome>>>,
    selections: Arc<Mutex<VecDeque<SelectionReply>>>,
    popups: Arc<Mutex<Vec<ShownPopup>>>,
    dialogs: Arc<Mutex<Vec<(Template, ModalData)>>>,
}

impl MockModalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(outcomes: impl IntoIterator<Item = DialogOutcome>) -> Self {
        let presenter = Self::new();
        presenter.answers.lock().unwrap().extend(outcomes);
        presenter
    }

    pub fn answer(&self, outcome: DialogOutcome) -> &Self {
        self.answers.lock().unwrap().push_back(outcome);
        self
    }

    pub fn select(&self, choice: i64, selected: Option<usize>) -> &Self {
        self.selections
            .lock()
            .unwrap()
            .push_back(SelectionReply::new(choice, selected));
        self
    }

    pub fn popups(&self) -> Vec<ShownPopup> {
        self.popups.lock().unwrap().clone()
    }

    pub fn last_popup(&self) -> Option<ShownPopup> {
        self.popups.lock().unwrap().last().cloned()
    }

    pub fn dialogs(&self) -> Vec<(Template, ModalData)> {
        self.dialogs.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModalPresenter for MockModalPresenter {
    async fn show_popup(&self, template: Template, data: &ModalData, width: Option<u32>) {
        self.popups.lock().unwrap().push(ShownPopup {
            template,
            data: data.clone(),
            width,
        });
    }

    async fn present_dialog(&self, template: Template, data: &ModalData) -> DialogOutcome {
        self.dialogs.lock().unwrap().push((template, data.clone()));
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(DialogOutcome::Dismissed)
    }

    async fn present_selection(&self, data: &ModalData, _options: &[String]) -> SelectionReply {
        self.dialogs
            .lock()
            .unwrap()
            .push((Template::TaskList, data.clone()));
        self.selections
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(SelectionReply::dismissed)
    }
}
