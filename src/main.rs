mod audit;
mod cli;
mod config;
mod report;
mod store;
mod user;

use anyhow::Result;
use clap::Parser;
use std::cell::RefCell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cadastro", about = "In-memory user registry with plain-text reports")]
pub struct Args {
    #[arg(short = 'c', long, help = "Run a single command and exit")]
    pub command: Option<String>,

    #[arg(long, help = "Config file path")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "CADASTRO_AUDIT_DIR", help = "Audit log directory")]
    pub audit_dir: Option<PathBuf>,

    #[arg(long, help = "Disable the audit log")]
    pub no_audit: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from(config_path)?
    } else {
        config::Config::load().unwrap_or_default()
    };

    for problem in cfg.validate() {
        eprintln!("Warning: {}", problem);
    }

    let audit = if args.no_audit || !cfg.audit.enabled {
        None
    } else {
        let dir = args
            .audit_dir
            .clone()
            .or_else(|| cfg.audit.dir.clone())
            .unwrap_or_else(|| PathBuf::from(".cadastro").join("audit"));
        std::fs::create_dir_all(&dir)?;

        let session_id = uuid::Uuid::new_v4().to_string();
        let path = dir.join(format!("{}.jsonl", session_id));
        Some(audit::AuditLog::new(&path, &session_id)?)
    };

    let ctx = cli::Context {
        args,
        config: cfg,
        store: RefCell::new(store::UserStore::new()),
        audit: RefCell::new(audit),
    };

    if let Some(line) = ctx.args.command.clone() {
        cli::run_once(&ctx, &line)
    } else {
        cli::run_repl(ctx)
    }
}
