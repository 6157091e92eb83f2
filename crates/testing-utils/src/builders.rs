//! Test data builders for creating API entities
//!
//! Builders start from sensible defaults; `build_json` gives the shape the
//! server sends, for scripting `MockGateway`.

use std::collections::BTreeMap;

use easytv_domain::entities::{Job, JobTaskRef, ParamType, Service, ServiceTask};
use serde_json::Value;

/// Builder for creating test Job entities
pub struct JobBuilder {
    job: Job,
}

impl JobBuilder {
    pub fn new() -> Self {
        Self {
            job: Job {
                id: 1,
                publication_date: 1_709_596_800,
                expiration_date: 1_710_201_600,
                creation_date: Some(1_709_510_400),
                completion_date: None,
                tasks: vec![JobTaskRef {
                    task_id: 1,
                    task_name: "subtitles".to_string(),
                }],
                status: "running".to_string(),
                is_completed: false,
                is_canceled: false,
                current_task: None,
                output: None,
            },
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.job.id = id;
        self
    }

    pub fn with_dates(mut self, publication_date: i64, expiration_date: i64) -> Self {
        self.job.publication_date = publication_date;
        self.job.expiration_date = expiration_date;
        self
    }

    pub fn completed(mut self) -> Self {
        self.job.is_completed = true;
        self.job.status = "completed".to_string();
        self
    }

    pub fn canceled(mut self) -> Self {
        self.job.is_completed = true;
        self.job.is_canceled = true;
        self.job.status = "canceled".to_string();
        self
    }

    pub fn with_output(mut self, output: Value) -> Self {
        self.job.output = output.as_object().cloned();
        self
    }

    pub fn build(self) -> Job {
        self.job
    }

    pub fn build_json(self) -> Value {
        serde_json::to_value(self.job).unwrap()
    }
}

impl Default for JobBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test ServiceTask entities
pub struct ServiceTaskBuilder {
    task: ServiceTask,
}

impl ServiceTaskBuilder {
    pub fn new() -> Self {
        Self {
            task: ServiceTask {
                id: 1,
                name: "subtitles".to_string(),
                description: "subtitle generation".to_string(),
                enabled: true,
                input: BTreeMap::new(),
                output: BTreeMap::new(),
            },
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.task.id = id;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.task.name = name.to_string();
        self
    }

    pub fn with_input(mut self, name: &str, param: ParamType) -> Self {
        self.task.input.insert(name.to_string(), param);
        self
    }

    pub fn with_output(mut self, name: &str, param: ParamType) -> Self {
        self.task.output.insert(name.to_string(), param);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.task.enabled = false;
        self
    }

    pub fn build(self) -> ServiceTask {
        self.task
    }
}

impl Default for ServiceTaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test Service entities
pub struct ServiceBuilder {
    service: Service,
}

impl ServiceBuilder {
    pub fn new() -> Self {
        Self {
            service: Service {
                id: 1,
                name: "accessibility".to_string(),
                description: "accessibility services".to_string(),
                enabled: true,
                api_key: None,
                tasks: Vec::new(),
            },
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.service.id = id;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.service.name = name.to_string();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.service.enabled = enabled;
        self
    }

    pub fn with_task(mut self, task: ServiceTask) -> Self {
        self.service.tasks.push(task);
        self
    }

    pub fn build(self) -> Service {
        self.service
    }

    pub fn build_json(self) -> Value {
        serde_json::to_value(self.service).unwrap()
    }
}

impl Default for ServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
