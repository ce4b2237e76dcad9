//! 展示层 - 交互式积分计算器
//!
//! 只做两件事：读取用户动作触发 `submit` / `clear`，
//! 以及把只读的 `SubmissionState` 渲染成文字。
//! 不持有任何结果状态，不做任何业务判断。

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;

use crate::clients::{GraphClient, IntegralClient};
use crate::config::Config;
use crate::models::{SubmissionPhase, SubmissionState};
use crate::orchestrator::SubmissionOrchestrator;

/// 示例表达式快捷方式
///
/// 只是预填表达式输入的便捷入口，不属于提交契约的一部分。
pub const EXAMPLE_EXPRESSIONS: [&str; 11] = [
    "2x^2",
    "ln(x+1)",
    "1/x",
    "cos(x)",
    "tan(x)",
    "x^3 + x^2",
    "ln(x)",
    "x^2 + 2x + 1",
    "sin(x)",
    "cos(x)",
    "1/(x+1)",
];

/// 应用主结构
pub struct App {
    orchestrator: SubmissionOrchestrator<IntegralClient, GraphClient>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let integral = IntegralClient::new(&config)?;
        let graph = GraphClient::new(&config)?;

        Ok(Self {
            orchestrator: SubmissionOrchestrator::new(integral, graph),
        })
    }

    /// 运行交互循环
    pub async fn run(&mut self) -> Result<()> {
        print_examples();

        let stdin = io::stdin();
        loop {
            prompt("f(x) = ")?;
            let Some(line) = read_line(&stdin)? else {
                break;
            };
            let input = line.trim();

            match input {
                "q" | "quit" | "exit" => break,
                "clear" => {
                    self.orchestrator.clear();
                    continue;
                }
                "" => continue,
                _ => {}
            }

            // 数字输入选择示例表达式
            let expression = match input.parse::<usize>() {
                Ok(n) if (1..=EXAMPLE_EXPRESSIONS.len()).contains(&n) => {
                    EXAMPLE_EXPRESSIONS[n - 1].to_string()
                }
                _ => input.to_string(),
            };

            prompt("下限（可留空）= ")?;
            let Some(lower) = read_line(&stdin)? else {
                break;
            };
            prompt("上限（可留空）= ")?;
            let Some(upper) = read_line(&stdin)? else {
                break;
            };

            self.orchestrator
                .submit(&expression, lower.trim(), upper.trim())
                .await;
            render(self.orchestrator.state());
        }

        info!("👋 程序退出");
        Ok(())
    }
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 积分计算器启动");
    info!("🔗 服务地址: {}", config.api_base_url);
    info!(
        "🕐 启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

fn print_examples() {
    println!("示例表达式（输入编号即可选用）：");
    for (index, example) in EXAMPLE_EXPRESSIONS.iter().enumerate() {
        println!("  {:2}. {}", index + 1, example);
    }
    println!("命令: clear 清空 / q 退出\n");
}

fn prompt(text: &str) -> Result<()> {
    print!("{}", text);
    io::stdout().flush()?;
    Ok(())
}

/// 读取一行输入，EOF 时返回 None
fn read_line(stdin: &io::Stdin) -> Result<Option<String>> {
    let mut line = String::new();
    let read = stdin.lock().read_line(&mut line)?;
    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// 把当前提交状态渲染为文字
fn render(state: &SubmissionState) {
    println!();
    println!("发送的函数: {}", state.expression);

    if let Some(message) = &state.error {
        println!("⚠️  {}", message);
    }

    if !state.result.is_empty() {
        println!("不定积分结果: {}", state.result.indefinite);
        println!("定积分结果: {}", state.result.defined);
        println!("逐步求解:");
        for (index, step) in state.result.steps.iter().enumerate() {
            println!("  {}. {}", index + 1, step);
        }
    }

    match &state.graph {
        Some(graph) => println!("图像已就绪（{} 字节）", graph.len()),
        None if state.phase == SubmissionPhase::Ready => {}
        None => println!("暂无图像"),
    }
    println!();
}
