use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// UI language. English is the fallback when nothing has been chosen yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    El,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::El];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::El => "el",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::El => "Greek",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "el" => Ok(Language::El),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    ContentOwner,
}

/// What survives between invocations: the token and the role flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub token: String,
    pub is_admin: bool,
}

/// An authenticated session as the screens see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub is_admin: bool,
    #[serde(default)]
    pub language: Language,
}

impl Session {
    pub fn new(token: impl Into<String>, is_admin: bool, language: Language) -> Self {
        Self {
            token: token.into(),
            is_admin,
            language,
        }
    }

    pub fn from_credentials(credentials: StoredCredentials, language: Language) -> Self {
        Self {
            token: credentials.token,
            is_admin: credentials.is_admin,
            language,
        }
    }

    pub fn credentials(&self) -> StoredCredentials {
        StoredCredentials {
            token: self.token.clone(),
            is_admin: self.is_admin,
        }
    }

    pub fn role(&self) -> Role {
        if self.is_admin {
            Role::Admin
        } else {
            Role::ContentOwner
        }
    }
}

/// Reference to a task inside a submitted job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTaskRef {
    pub task_id: i64,
    #[serde(default)]
    pub task_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobLifecycle {
    Running,
    Completed,
    Canceled,
}

/// A job as listed by `GET /api/job`. Dates are epoch seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub publication_date: i64,
    pub expiration_date: i64,
    #[serde(default)]
    pub creation_date: Option<i64>,
    #[serde(default)]
    pub completion_date: Option<i64>,
    #[serde(default)]
    pub tasks: Vec<JobTaskRef>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_canceled: bool,
    /// Step the job is currently on; opaque to the console.
    #[serde(default)]
    pub current_task: Option<serde_json::Value>,
    #[serde(default)]
    pub output: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Job {
    pub fn lifecycle(&self) -> JobLifecycle {
        if self.is_canceled {
            JobLifecycle::Canceled
        } else if self.is_completed {
            JobLifecycle::Completed
        } else {
            JobLifecycle::Running
        }
    }

    pub fn is_cancellable(&self) -> bool {
        self.lifecycle() == JobLifecycle::Running
    }
}

/// Parameter type of a task input or output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Int,
    String,
    Double,
    #[serde(other)]
    Unsupported,
}

/// A task a service offers; jobs are sequences of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceTask {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub input: BTreeMap<String, ParamType>,
    #[serde(default)]
    pub output: BTreeMap<String, ParamType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub tasks: Vec<ServiceTask>,
}

// Response payloads. The envelope's `code` and `description` are stripped
// by `RawResponse::into_result`; these only name the extra fields.

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginGrant {
    pub session_token: String,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobsPage {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobDetail {
    pub job: Job,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobCreated {
    #[serde(default)]
    pub job_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceList {
    #[serde(default)]
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceDetail {
    pub service: Service,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisteredUser {
    pub content_owner_password: String,
    // the server spells this key "contenet_owner_id"
    #[serde(default, rename = "contenet_owner_id", alias = "content_owner_id")]
    pub content_owner_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedService {
    pub api_key: String,
    #[serde(default)]
    pub service_id: Option<i64>,
}

/// Body of a successful call that carries nothing but the envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Acknowledged {
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_language_parsing() {
        assert_eq!("EL".parse::<Language>().unwrap(), Language::El);
        assert_eq!(" en ".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_job_lifecycle() {
        let mut job: Job = serde_json::from_value(json!({
            "id": 7,
            "publication_date": 1_700_000_000,
            "expiration_date": 1_700_086_400,
            "is_completed": false,
            "is_canceled": false
        }))
        .unwrap();
        assert_eq!(job.lifecycle(), JobLifecycle::Running);
        assert!(job.is_cancellable());

        job.is_completed = true;
        assert_eq!(job.lifecycle(), JobLifecycle::Completed);

        // canceled jobs are also flagged completed by the server
        job.is_canceled = true;
        assert_eq!(job.lifecycle(), JobLifecycle::Canceled);
        assert!(!job.is_cancellable());
    }

    #[test]
    fn test_service_task_param_types() {
        let task: ServiceTask = serde_json::from_value(json!({
            "id": 1,
            "name": "subtitles",
            "input": {"language_source": "string", "speed": "double", "blob": ""},
            "output": {"language": "string"}
        }))
        .unwrap();
        assert_eq!(task.input["speed"], ParamType::Double);
        assert_eq!(task.input["blob"], ParamType::Unsupported);
        assert!(!task.enabled);
    }

    #[test]
    fn test_registered_user_accepts_server_spelling() {
        let user: RegisteredUser = serde_json::from_value(json!({
            "content_owner_password": "s3cret",
            "contenet_owner_id": 12
        }))
        .unwrap();
        assert_eq!(user.content_owner_id, Some(12));
    }

    #[test]
    fn test_session_role() {
        let session = Session::new("abc", true, Language::El);
        assert_eq!(session.role(), Role::Admin);
        assert_eq!(
            session.credentials(),
            StoredCredentials {
                token: "abc".to_string(),
                is_admin: true
            }
        );
    }
}
