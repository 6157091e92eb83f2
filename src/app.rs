use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use easytv_application::{PasswordChange, SessionContext};
use easytv_core::AppConfig;
use easytv_domain::entities::{Language, Service};
use easytv_domain::i18n::translate;
use easytv_domain::routes::{guard, Page};
use easytv_infrastructure::{FileSessionStore, ReqwestGateway};
use easytv_ui::{
    AccountController, AdminDashboardController, AllJobsController, CreateJobController,
    DashboardController, HeaderController, JobRow, LoginController, LoginState, UiState,
};
use tracing::{debug, info};

use crate::cli::{AdminActions, Assignment, Commands, JobsActions, ServicesActions};
use crate::console::ConsolePresenter;

/// 主应用程序
///
/// Wires the HTTP gateway, the on-disk session and the console presenter
/// into a `UiState`, then runs one command against it.
pub struct Application {
    state: UiState,
    presenter: Arc<ConsolePresenter>,
}

impl Application {
    pub fn new(config: &AppConfig, assume_yes: bool) -> Result<Self> {
        let store = Arc::new(FileSessionStore::new(&config.storage));
        let session = SessionContext::restore(store).context("恢复会话失败")?;
        let gateway = Arc::new(ReqwestGateway::new(&config.api).context("创建HTTP客户端失败")?);
        let presenter = Arc::new(ConsolePresenter::new(session.clone(), assume_yes));

        info!(
            "控制台已就绪: {} (已登录: {})",
            gateway.base_url(),
            session.is_authenticated()
        );
        let state = UiState::new(gateway, session, presenter.clone());
        Ok(Self { state, presenter })
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Run one command. `Ok(false)` means it ran but did not succeed; the
    /// reason has already been shown.
    pub async fn run(&self, command: Commands) -> Result<bool> {
        match command {
            Commands::Login { username, password } => self.login(&username, &password).await,
            Commands::Logout => {
                let route = AccountController::new(self.state.clone()).logout().await;
                println!("{}", route);
                Ok(true)
            }
            Commands::Status => {
                self.status();
                Ok(true)
            }
            Commands::Password { old, new, verify } => {
                self.enter_any()?;
                let change = PasswordChange::new(&old, &new, &verify);
                let mut account = AccountController::new(self.state.clone());
                account.request_change_password();
                Ok(account.change_password(&change).await)
            }
            Commands::Lang { language } => self.language(language.as_deref()),
            Commands::Jobs(jobs) => {
                self.enter(Page::Dashboard)?;
                self.jobs(jobs.action).await
            }
            Commands::Services(services) => {
                self.enter(Page::Dashboard)?;
                self.services(services.action).await
            }
            Commands::Admin(admin) => {
                self.enter(Page::Admin)?;
                self.admin(admin.action).await
            }
            Commands::Config(_) => Err(anyhow!("配置命令不需要会话")),
        }
    }

    fn enter(&self, page: Page) -> Result<()> {
        match guard(page, self.state.session.credentials().as_ref()) {
            Ok(()) => Ok(()),
            Err(redirect) => {
                debug!("{} 被重定向到 {}", page.file(), redirect);
                self.state.navigator.navigate(redirect.clone());
                Err(anyhow!("无权访问 {}，请改用 {}", page.file(), redirect))
            }
        }
    }

    fn enter_any(&self) -> Result<()> {
        if self.state.session.is_admin() {
            self.enter(Page::Admin)
        } else {
            self.enter(Page::Dashboard)
        }
    }

    fn t(&self, key: &str) -> String {
        translate(self.state.session.language(), key).into_owned()
    }

    async fn login(&self, username: &str, password: &str) -> Result<bool> {
        let mut login = LoginController::new(self.state.clone());
        match login.submit(username, password).await {
            LoginState::AuthenticatedAdmin | LoginState::AuthenticatedUser => {
                println!("{}", self.state.navigator.current());
                Ok(true)
            }
            LoginState::Anonymous | LoginState::Authenticating => Ok(false),
        }
    }

    fn status(&self) {
        let session = &self.state.session;
        match session.current() {
            Some(current) => println!(
                "{} ({:?}) -> {}",
                if current.is_admin { "admin" } else { "content owner" },
                current.role(),
                self.state.navigator.current()
            ),
            None => println!("anonymous -> {}", self.state.navigator.current()),
        }
        println!("{}: {}", self.t("language"), session.language().display_name());
    }

    fn language(&self, code: Option<&str>) -> Result<bool> {
        let header = HeaderController::new(self.state.clone());
        match code {
            Some(code) => {
                let language: Language = code.parse().map_err(|e: String| anyhow!(e))?;
                header.change_language(language)?;
                println!("{}", language.display_name());
            }
            None => {
                let current = header.language();
                for (name, code) in header.language_list() {
                    let marker = if current.code() == code { "*" } else { " " };
                    println!("{marker} {code}  {name}");
                }
            }
        }
        Ok(true)
    }

    async fn jobs(&self, action: JobsActions) -> Result<bool> {
        let mut dashboard = DashboardController::new(self.state.clone());
        match action {
            JobsActions::List { all } => {
                dashboard.open("all_jobs");
                let jobs = AllJobsController::new(self.state.clone());
                if !jobs.load().await {
                    return Ok(false);
                }
                while all && jobs.has_more() {
                    if !jobs.load_more().await {
                        return Ok(false);
                    }
                }
                for row in jobs.jobs().data().cloned().unwrap_or_default() {
                    self.print_job(&row);
                }
                if jobs.has_more() {
                    println!("... (--all)");
                }
                Ok(true)
            }
            JobsActions::Show { job_id } => {
                match self.state.dashboard_service().get_job(job_id).await {
                    Ok(job) => {
                        let row = JobRow::from_job(&job);
                        self.print_job(&row);
                        if let Some(output) = row.output {
                            println!("{}", serde_json::to_string_pretty(&output)?);
                        }
                        Ok(true)
                    }
                    Err(error) => {
                        self.state.errors.handle(&error).await;
                        Ok(false)
                    }
                }
            }
            JobsActions::Create {
                publication,
                expiration,
                tasks,
                pick,
                inputs,
                links,
            } => {
                dashboard.open("create_job");
                self.create_job(&publication, &expiration, tasks, pick, &inputs, &links)
                    .await
            }
            JobsActions::Cancel { job_id } => {
                let jobs = AllJobsController::new(self.state.clone());
                Ok(jobs.cancel_job(job_id).await)
            }
            JobsActions::Output { job_id } => {
                let jobs = AllJobsController::new(self.state.clone());
                if !jobs.load().await {
                    return Ok(false);
                }
                while !jobs.show_output(job_id).await {
                    if !jobs.has_more() || !jobs.load_more().await {
                        return Err(anyhow!("未找到作业 {}", job_id));
                    }
                }
                Ok(true)
            }
        }
    }

    async fn create_job(
        &self,
        publication: &str,
        expiration: &str,
        tasks: Vec<String>,
        pick: usize,
        inputs: &[Assignment],
        links: &[Assignment],
    ) -> Result<bool> {
        let mut form = CreateJobController::new(self.state.clone());
        if !form.set_publication_date(publication).await
            || !form.set_expiration_date(expiration).await
        {
            return Ok(false);
        }

        let count = if tasks.is_empty() { pick } else { tasks.len() };
        self.presenter.preselect(tasks);
        for _ in 0..count {
            if form.add_task().await.is_none() {
                return Ok(false);
            }
        }

        for input in inputs {
            if !form.set_input(input.step, &input.key, input.json_value()) {
                return Err(anyhow!("步骤 {} 不存在", input.step));
            }
        }
        for link in links {
            if !form.link_input(link.step, &link.key, &link.value) {
                return Err(anyhow!("步骤 {} 不存在", link.step));
            }
        }

        match form.post_job().await {
            Some(job_id) => {
                println!("{job_id}");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn services(&self, action: ServicesActions) -> Result<bool> {
        let service = self.state.dashboard_service();
        let result = match action {
            ServicesActions::List => service.get_services().await,
            ServicesActions::Show { service_id } => {
                service.get_service(service_id).await.map(|s| vec![s])
            }
        };
        match result {
            Ok(services) => {
                for s in &services {
                    self.print_service(s, true);
                }
                Ok(true)
            }
            Err(error) => {
                self.state.errors.handle(&error).await;
                Ok(false)
            }
        }
    }

    async fn admin(&self, action: AdminActions) -> Result<bool> {
        let mut admin = AdminDashboardController::new(self.state.clone());
        match action {
            AdminActions::Register {
                name,
                username,
                email,
            } => {
                admin.open("register_user");
                Ok(admin.register_user(&name, &username, &email).await.is_some())
            }
            AdminActions::CreateService { name, description } => {
                admin.open("create_service");
                Ok(admin.create_service(&name, &description).await.is_some())
            }
            AdminActions::Services => {
                admin.open("get_services");
                if !admin.load_services().await {
                    return Ok(false);
                }
                for s in admin.services().data().cloned().unwrap_or_default() {
                    self.print_service(&s, false);
                }
                Ok(true)
            }
            AdminActions::Service { service_id } => {
                match self.state.admin_service().get_service(service_id).await {
                    Ok(service) => {
                        self.print_service(&service, true);
                        Ok(true)
                    }
                    Err(error) => {
                        self.state.errors.handle(&error).await;
                        Ok(false)
                    }
                }
            }
            AdminActions::Enable { service_id } => {
                self.set_availability(&mut admin, service_id, true).await
            }
            AdminActions::Disable { service_id } => {
                self.set_availability(&mut admin, service_id, false).await
            }
        }
    }

    async fn set_availability(
        &self,
        admin: &mut AdminDashboardController,
        service_id: i64,
        enable: bool,
    ) -> Result<bool> {
        admin.open("get_services");
        if !admin.load_services().await {
            return Ok(false);
        }
        let index = admin
            .services()
            .data()
            .and_then(|services| services.iter().position(|s| s.id == service_id))
            .ok_or_else(|| anyhow!("未找到服务 {}", service_id))?;
        let current = admin
            .services()
            .data()
            .and_then(|services| services.get(index))
            .map(|s| s.enabled);
        if current == Some(enable) {
            println!("{}", enable);
            return Ok(true);
        }
        Ok(admin.toggle_service(index).await == Some(enable))
    }

    fn print_job(&self, row: &JobRow) {
        println!(
            "#{:<6} {:<10} {} -> {}  [{}]",
            row.id,
            self.t(&row.status),
            row.publication_date,
            row.expiration_date,
            row.tasks.join(" > ")
        );
    }

    fn print_service(&self, service: &Service, with_tasks: bool) {
        println!(
            "#{:<4} {:<24} {:<5} {}",
            service.id, service.name, service.enabled, service.description
        );
        if let Some(key) = &service.api_key {
            println!("      {}: {}", self.t("api_key"), key);
        }
        if with_tasks {
            for task in &service.tasks {
                let inputs: Vec<&str> = task.input.keys().map(String::as_str).collect();
                let outputs: Vec<&str> = task.output.keys().map(String::as_str).collect();
                println!(
                    "      - {} ({}) in: {} out: {}",
                    task.name,
                    task.id,
                    inputs.join(", "),
                    outputs.join(", ")
                );
            }
        }
    }
}
