use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

/// 命令行入口
#[derive(Parser, Debug)]
#[command(name = "easytv")]
#[command(version)]
#[command(about = "EasyTV 服务管理控制台")]
#[command(long_about = "内容所有者与管理员使用的 EasyTV 服务管理命令行客户端")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 配置文件路径
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// 日志级别 (覆盖配置文件)
    #[arg(short = 'l', long, global = true, value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: Option<String>,

    /// 日志格式 (覆盖配置文件)
    #[arg(long, global = true, value_parser = ["json", "pretty"])]
    pub log_format: Option<String>,

    /// 所有确认对话框自动回答"是"
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 登录
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// 注销
    Logout,
    /// 当前会话
    Status,
    /// 修改密码 (成功后自动注销)
    Password {
        #[arg(long)]
        old: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        verify: String,
    },
    /// 查看或切换界面语言
    Lang {
        /// 语言代码 (en, el)
        language: Option<String>,
    },
    /// 作业管理
    Jobs(JobsCommands),
    /// 服务浏览
    Services(ServicesCommands),
    /// 管理员操作
    Admin(AdminCommands),
    /// 配置管理
    Config(ConfigCommands),
}

#[derive(Args, Debug)]
pub struct JobsCommands {
    #[command(subcommand)]
    pub action: JobsActions,
}

#[derive(Subcommand, Debug)]
pub enum JobsActions {
    /// 列出作业
    List {
        /// 跟随分页链接取回全部作业
        #[arg(short, long)]
        all: bool,
    },
    /// 查看作业详情
    Show { job_id: i64 },
    /// 创建作业
    Create {
        /// 发布日期 (MM-DD-YYYY)
        #[arg(long)]
        publication: String,
        /// 过期日期 (MM-DD-YYYY)
        #[arg(long)]
        expiration: String,
        /// 按顺序添加的任务名称; 省略时交互式选择
        #[arg(short, long = "task")]
        tasks: Vec<String>,
        /// 交互式添加的任务数量 (未给出 --task 时)
        #[arg(long, default_value = "0")]
        pick: usize,
        /// 任务输入: STEP.KEY=VALUE, VALUE 可以是 JSON
        #[arg(short, long = "input")]
        inputs: Vec<Assignment>,
        /// 链接输入: STEP.KEY=OUTPUT, 取上一步骤的输出
        #[arg(long = "link")]
        links: Vec<Assignment>,
    },
    /// 取消作业
    Cancel { job_id: i64 },
    /// 查看作业输出
    Output { job_id: i64 },
}

#[derive(Args, Debug)]
pub struct ServicesCommands {
    #[command(subcommand)]
    pub action: ServicesActions,
}

#[derive(Subcommand, Debug)]
pub enum ServicesActions {
    /// 列出可用服务
    List,
    /// 查看服务及其任务
    Show { service_id: i64 },
}

#[derive(Args, Debug)]
pub struct AdminCommands {
    #[command(subcommand)]
    pub action: AdminActions,
}

#[derive(Subcommand, Debug)]
pub enum AdminActions {
    /// 注册内容所有者
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
    },
    /// 创建服务
    CreateService {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
    },
    /// 列出所有服务
    Services,
    /// 查看服务 (含API密钥)
    Service { service_id: i64 },
    /// 启用服务
    Enable { service_id: i64 },
    /// 禁用服务
    Disable { service_id: i64 },
}

#[derive(Args, Debug)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub action: ConfigActions,
}

#[derive(Subcommand, Debug)]
pub enum ConfigActions {
    /// 显示生效的配置
    Show,
    /// 验证配置
    Validate,
    /// 输出示例配置
    Example,
}

/// `STEP.KEY=VALUE`, addressing one input of one step of a job draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub step: usize,
    pub key: String,
    pub value: String,
}

impl FromStr for Assignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target, value) = s
            .split_once('=')
            .ok_or_else(|| format!("缺少 '=': {s}"))?;
        let (step, key) = target
            .split_once('.')
            .ok_or_else(|| format!("应为 STEP.KEY=VALUE: {s}"))?;
        let step = step
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("无效的步骤序号: {step}"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(format!("输入名称为空: {s}"));
        }
        Ok(Self {
            step,
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

impl Assignment {
    /// The value as JSON when it parses as such, otherwise as a string.
    pub fn json_value(&self) -> serde_json::Value {
        serde_json::from_str(&self.value)
            .unwrap_or_else(|_| serde_json::Value::String(self.value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_assignment() {
        let a: Assignment = "1.language=el".parse().unwrap();
        assert_eq!(a.step, 1);
        assert_eq!(a.key, "language");
        assert_eq!(a.json_value(), json!("el"));

        let n: Assignment = "0.speed=1.5".parse().unwrap();
        assert_eq!(n.json_value(), json!(1.5));
    }

    #[test]
    fn test_parse_assignment_errors() {
        assert!("language=el".parse::<Assignment>().is_err());
        assert!("x.language=el".parse::<Assignment>().is_err());
        assert!("0.=el".parse::<Assignment>().is_err());
        assert!("0.language".parse::<Assignment>().is_err());
    }

    #[test]
    fn test_cli_parses_job_creation() {
        let cli = Cli::try_parse_from([
            "easytv",
            "jobs",
            "create",
            "--publication",
            "03-05-2024",
            "--expiration",
            "03-12-2024",
            "--task",
            "subtitles",
            "--input",
            "0.text=hello",
            "-y",
        ])
        .unwrap();
        assert!(cli.yes);
        match cli.command {
            Commands::Jobs(JobsCommands {
                action: JobsActions::Create { tasks, inputs, .. },
            }) => {
                assert_eq!(tasks, vec!["subtitles".to_string()]);
                assert_eq!(inputs[0].key, "text");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_log_format() {
        assert!(Cli::try_parse_from(["easytv", "status", "--log-format", "xml"]).is_err());
    }
}
