use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing_subscriber::EnvFilter;

use carenav_application::{ChatSession, ClientFactory, DialogueTurnOrchestrator, ReportDraftUsecase};
use carenav_infrastructure::ConfigService;

mod command;
mod view;

use command::{COMMANDS, Command};
use view::{TerminalChatView, TerminalReportView};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|cmd| cmd.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!("{}", "그냥 입력하면 센터 추천 대화가 진행돼요.".bright_black());
    println!("{}", "  /report <자치구> <시작연도> <종료연도>  보고서 초안 생성".bright_black());
    println!("{}", "  /refine <수정 요청>                    초안 수정".bright_black());
    println!("{}", "  /list                                  직전 추천 목록".bright_black());
    println!("{}", "  /geo                                   위치 상태".bright_black());
    println!("{}", "  /reset                                 대화 초기화".bright_black());
    println!("{}", "  quit                                   종료".bright_black());
}

async fn print_list(session: &ChatSession) {
    let items = session.list_snapshot().await;
    if items.is_empty() {
        println!("{}", "직전에 추천된 목록이 없어요.".yellow());
        return;
    }
    for (index, item) in items.iter().enumerate() {
        let name = item.center_name().unwrap_or("(이름 없음)");
        let distance = item
            .distance_km
            .map(|km| format!(" ({km:.1}km)"))
            .unwrap_or_default();
        println!("{}", format!("{}) {}{}", index + 1, name, distance).bright_blue());
    }
}

/// The carenav readline REPL.
///
/// Plain lines are chat turns; slash commands drive the report draft and
/// inspect session state. Turns run one at a time on the main task, so the
/// prompt returns only after the reply has been printed.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    // ===== Backend Initialization =====
    let config = ConfigService::new()?.load()?;
    let factory = ClientFactory::new(config);
    let session = factory.create_session()?;
    let chat: DialogueTurnOrchestrator =
        factory.create_chat(Arc::clone(&session), Arc::new(TerminalChatView))?;
    let report: ReportDraftUsecase = factory.create_report(Arc::new(TerminalReportView))?;

    // Location indicator
    let mut geo_status = session.geo().subscribe();
    let geo_watcher = tokio::spawn(async move {
        while geo_status.changed().await.is_ok() {
            let status = *geo_status.borrow_and_update();
            println!("{}", format!("[위치] {}", status.label()).bright_black());
        }
    });
    session.geo().prefetch();

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== carenav ===".bright_magenta().bold());
    println!(
        "{}",
        format!("서버: {}", factory.config().base_url).bright_black()
    );
    println!("{}", "Type '/help' for commands, or 'quit' to exit.".bright_black());
    report.reset().await;
    chat.reset();

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let Some(command) = Command::parse(&line) else {
                    continue;
                };
                let _ = rl.add_history_entry(line.trim());

                match command {
                    Command::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Command::Help => print_help(),
                    Command::Reset => {
                        report.reset().await;
                        chat.reset();
                    }
                    Command::List => print_list(&session).await,
                    Command::Geo => {
                        println!("{}", session.geo().status().label().bright_black());
                    }
                    Command::Report(form) => {
                        let _ = report.generate(&form).await;
                    }
                    Command::Refine(instruction) => {
                        let _ = report.refine(&instruction).await;
                    }
                    Command::Unknown(name) => {
                        println!("{}", format!("Unknown command: {}", name).bright_black());
                    }
                    Command::Chat(message) => {
                        chat.handle_turn(&message).await;
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    geo_watcher.abort();

    Ok(())
}
