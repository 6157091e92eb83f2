use serde_json::Value;

/// How a dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirm,
    Decline,
    /// Closed without choosing a button (escape, click outside, ...).
    Dismissed,
}

impl DialogOutcome {
    /// Map the integer a dialog template returns: `1` confirms, `0` declines,
    /// anything else counts as dismissed.
    pub fn from_return(value: i64) -> Self {
        match value {
            1 => DialogOutcome::Confirm,
            0 => DialogOutcome::Decline,
            _ => DialogOutcome::Dismissed,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, DialogOutcome::Confirm)
    }
}

/// Raw answer of a list dialog: the button value and the highlighted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionReply {
    pub choice: i64,
    pub selected: Option<usize>,
}

impl SelectionReply {
    pub fn new(choice: i64, selected: Option<usize>) -> Self {
        Self { choice, selected }
    }

    pub fn dismissed() -> Self {
        Self::new(-1, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Dialog,
    Popup,
    TaskList,
    Output,
}

impl Template {
    pub fn name(&self) -> &'static str {
        match self {
            Template::Dialog => "dialog",
            Template::Popup => "popup",
            Template::TaskList => "task_list",
            Template::Output => "output",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub name: &'static str,
    pub style: &'static str,
    pub outcome: DialogOutcome,
}

/// Button presets offered by the dialog templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSet {
    Ok,
    OkCancel,
    YesNo,
    Cancel,
}

const OK_BUTTONS: [Button; 1] = [Button {
    name: "ok",
    style: "primary",
    outcome: DialogOutcome::Confirm,
}];
const OK_CANCEL_BUTTONS: [Button; 2] = [
    Button {
        name: "ok",
        style: "primary",
        outcome: DialogOutcome::Confirm,
    },
    Button {
        name: "cancel",
        style: "danger",
        outcome: DialogOutcome::Decline,
    },
];
const YES_NO_BUTTONS: [Button; 2] = [
    Button {
        name: "yes",
        style: "primary",
        outcome: DialogOutcome::Confirm,
    },
    Button {
        name: "no",
        style: "danger",
        outcome: DialogOutcome::Decline,
    },
];
const CANCEL_BUTTONS: [Button; 1] = [Button {
    name: "cancel",
    style: "danger",
    outcome: DialogOutcome::Decline,
}];

impl ButtonSet {
    pub fn name(&self) -> &'static str {
        match self {
            ButtonSet::Ok => "ok",
            ButtonSet::OkCancel => "ok/cancel",
            ButtonSet::YesNo => "yes/no",
            ButtonSet::Cancel => "cancel",
        }
    }

    pub fn buttons(&self) -> &'static [Button] {
        match self {
            ButtonSet::Ok => &OK_BUTTONS,
            ButtonSet::OkCancel => &OK_CANCEL_BUTTONS,
            ButtonSet::YesNo => &YES_NO_BUTTONS,
            ButtonSet::Cancel => &CANCEL_BUTTONS,
        }
    }

    /// Find the button whose label matches `answer`, ignoring case.
    pub fn resolve(&self, answer: &str) -> Option<DialogOutcome> {
        let answer = answer.trim();
        self.buttons()
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(answer))
            .map(|b| b.outcome)
    }
}

/// What a popup or dialog shows. `title` and `message` are i18n keys;
/// `param` is appended verbatim after the translated message.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalData {
    pub title: String,
    pub message: Option<String>,
    pub param: Option<String>,
    pub buttons: ButtonSet,
    pub payload: Option<Value>,
}

impl ModalData {
    pub fn new(title: impl Into<String>, buttons: ButtonSet) -> Self {
        Self {
            title: title.into(),
            message: None,
            param: None,
            buttons,
            payload: None,
        }
    }

    pub fn success() -> Self {
        Self::new("success", ButtonSet::Ok)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}
