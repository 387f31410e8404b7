use crate::audit::AuditLog;
use crate::config::Config;
use crate::report;
use crate::store::UserStore;
use crate::Args;
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::cell::RefCell;

pub struct Context {
    pub args: Args,
    pub config: Config,
    pub store: RefCell<UserStore>,
    pub audit: RefCell<Option<AuditLog>>,
}

pub fn run_once(ctx: &Context, line: &str) -> Result<()> {
    handle_command(ctx, line);
    Ok(())
}

pub fn run_repl(ctx: Context) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("cadastro - type help for commands, exit to quit");
    if let Some(log) = ctx.audit.borrow().as_ref() {
        println!("Audit log: {}", log.path.display());
    }

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                if handle_command(&ctx, line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Execute one command line. Returns true when the loop should quit.
pub fn handle_command(ctx: &Context, line: &str) -> bool {
    let words = match shell_words::split(line) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            return false;
        }
    };
    let Some((cmd, rest)) = words.split_first() else {
        return false;
    };

    match cmd.as_str() {
        "exit" | "quit" => return true,
        "help" => {
            println!("Commands:");
            println!("  create <name> <email> <age> [--admin]  - register a user");
            println!("  show <id>                              - print one user as JSON");
            println!("  deactivate <id>                        - deactivate a user");
            println!("  report                                 - print the user report");
            println!("  count                                  - number of registered users");
            println!("  clear                                  - reset the registry");
            println!("  exit                                   - quit");
        }
        "create" => cmd_create(ctx, rest),
        "show" => cmd_show(ctx, rest),
        "deactivate" => cmd_deactivate(ctx, rest),
        "report" => {
            let store = ctx.store.borrow();
            println!("{}", report::render(store.users(), &ctx.config.report));
        }
        "count" => {
            let store = ctx.store.borrow();
            if store.is_empty() {
                println!("No users registered");
            } else {
                println!("{} user(s)", store.len());
            }
        }
        "clear" => {
            ctx.store.borrow_mut().clear();
            println!("Registry cleared");
            audit(ctx, |log| log.registry_cleared());
        }
        _ => eprintln!("Unknown command: {} (try help)", cmd),
    }

    false
}

fn cmd_create(ctx: &Context, args: &[String]) {
    let is_admin = args.iter().any(|a| a.as_str() == "--admin");
    let fields: Vec<&String> = args.iter().filter(|a| a.as_str() != "--admin").collect();

    if fields.len() != 3 {
        eprintln!("Usage: create <name> <email> <age> [--admin]");
        return;
    }
    let (name, email, age) = (fields[0], fields[1], fields[2]);
    let age: u32 = match age.parse() {
        Ok(age) => age,
        Err(_) => {
            eprintln!("Invalid age: {}", age);
            return;
        }
    };

    let result = ctx
        .store
        .borrow_mut()
        .create_user(name, email, age, is_admin);
    match result {
        Ok(user) => {
            println!("Created user {} ({})", user.id, user.name);
            audit(ctx, |log| log.user_created(&user));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            audit(ctx, |log| log.user_rejected(name, &e.to_string()));
        }
    }
}

fn cmd_show(ctx: &Context, args: &[String]) {
    let Some(id) = parse_id(args, "show") else {
        return;
    };

    let store = ctx.store.borrow();
    match store.get_user_by_id(id) {
        Some(user) => match serde_json::to_string_pretty(user) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: {}", e),
        },
        None => println!("No user with id {}", id),
    }
}

fn cmd_deactivate(ctx: &Context, args: &[String]) {
    let Some(id) = parse_id(args, "deactivate") else {
        return;
    };

    let applied = ctx.store.borrow_mut().deactivate_user(id);
    if applied {
        println!("User {} deactivated", id);
    } else {
        // A refused deactivation means the id is unknown or an admin.
        match ctx.store.borrow().get_user_by_id(id) {
            Some(_) => println!("User {} is an administrator and stays active", id),
            None => println!("No user with id {}", id),
        }
    }
    audit(ctx, |log| log.user_deactivated(id, applied));
}

fn parse_id(args: &[String], usage: &str) -> Option<u64> {
    let [id] = args else {
        eprintln!("Usage: {} <id>", usage);
        return None;
    };
    match id.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            eprintln!("Invalid id: {}", id);
            None
        }
    }
}

fn audit(ctx: &Context, write: impl FnOnce(&mut AuditLog) -> Result<()>) {
    if let Some(log) = ctx.audit.borrow_mut().as_mut() {
        if let Err(e) = write(log) {
            eprintln!("Warning: audit write failed: {}", e);
        }
    }
}
