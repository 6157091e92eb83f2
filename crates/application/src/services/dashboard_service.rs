use std::sync::Arc;

use easytv_domain::api::{endpoints, ApiRequest, ServiceResult};
use easytv_domain::entities::{
    Acknowledged, Job, JobCreated, JobDetail, JobsPage, Service, ServiceDetail, ServiceList,
};
use easytv_domain::job_draft::JobDraft;
use easytv_domain::ports::Gateway;
use tracing::info;

use super::dispatch;
use crate::session::SessionContext;

/// Content-owner operations: browse services, manage jobs.
pub struct DashboardService {
    gateway: Arc<dyn Gateway>,
    session: SessionContext,
}

impl DashboardService {
    pub fn new(gateway: Arc<dyn Gateway>, session: SessionContext) -> Self {
        Self { gateway, session }
    }

    fn authorized(&self, request: ApiRequest) -> ApiRequest {
        request.with_token(self.session.token())
    }

    pub async fn get_services(&self) -> ServiceResult<Vec<Service>> {
        let list: ServiceList = dispatch(
            self.gateway.as_ref(),
            self.authorized(ApiRequest::get(endpoints::SERVICES)),
        )
        .await?;
        Ok(list.services)
    }

    /// A service together with its tasks.
    pub async fn get_service(&self, id: i64) -> ServiceResult<Service> {
        let detail: ServiceDetail = dispatch(
            self.gateway.as_ref(),
            self.authorized(ApiRequest::get(endpoints::service(id))),
        )
        .await?;
        Ok(detail.service)
    }

    pub async fn get_jobs(&self) -> ServiceResult<JobsPage> {
        self.get_jobs_at(endpoints::JOBS).await
    }

    /// Follow a `next` link from a previous page.
    pub async fn get_jobs_at(&self, path: &str) -> ServiceResult<JobsPage> {
        dispatch(
            self.gateway.as_ref(),
            self.authorized(ApiRequest::get(path)),
        )
        .await
    }

    pub async fn get_job(&self, id: i64) -> ServiceResult<Job> {
        let detail: JobDetail = dispatch(
            self.gateway.as_ref(),
            self.authorized(ApiRequest::get(endpoints::job(id))),
        )
        .await?;
        Ok(detail.job)
    }

    pub async fn create_job(&self, draft: &JobDraft) -> ServiceResult<JobCreated> {
        draft.validate()?;
        let created: JobCreated = dispatch(
            self.gateway.as_ref(),
            self.authorized(ApiRequest::post(endpoints::JOBS, draft.to_payload())),
        )
        .await?;
        info!("任务已创建: {:?}", created.job_id);
        Ok(created)
    }

    pub async fn cancel_job(&self, id: i64) -> ServiceResult<Acknowledged> {
        dispatch(
            self.gateway.as_ref(),
            self.authorized(ApiRequest::delete(endpoints::job(id))),
        )
        .await
    }
}
