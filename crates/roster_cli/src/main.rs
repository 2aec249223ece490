//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `roster_core` linkage and run each store operation once.
//! - Keep output deterministic apart from process-wide ids.

use log::error;
use roster_core::{default_log_level, init_logging, process_batch, UserService};
use serde_json::json;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Optional first argument: absolute directory for rolling log files.
    if let Some(log_dir) = std::env::args().nth(1) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("roster_cli logging disabled: {err}");
        }
    }

    println!("roster_core ping={}", roster_core::ping());
    println!("roster_core version={}", roster_core::core_version());

    let mut store = UserService::new();
    for (name, age) in [("ada", 36), ("grace", 85)] {
        match store.add_user(name, age) {
            Ok(user) => println!("added id={} name={} age={}", user.id, user.name, user.age),
            Err(err) => {
                error!("event=cli_add module=cli status=error reason=\"{err}\"");
                eprintln!("add failed: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    if let Err(err) = store.add_user("nobody", -1) {
        println!("rejected: {err}");
    }

    match store.find_user("grace") {
        Some(user) => println!("found id={} name={}", user.id, user.name),
        None => println!("not found"),
    }

    store.update_config("theme", json!("dark"));
    println!(
        "config theme={}",
        store.side_cache().get("theme").unwrap_or_default()
    );

    let doubled = process_batch(&[json!(1), json!(2), json!("three"), json!(4.5)]);
    println!("batch={}", json!(doubled));

    ExitCode::SUCCESS
}
