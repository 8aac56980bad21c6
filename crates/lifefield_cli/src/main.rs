//! Command-line front end for the Life Field core.
//!
//! # Responsibility
//! - Exercise every core operation from a terminal: show, set, add, remove,
//!   export, import.
//! - Keep argument handling flat and dependency-free; the core does the work.

use lifefield_core::db::open_db;
use lifefield_core::{schema, JournalService, SectionValue, SqliteSlotRepository, EXPORT_FILE_NAME};
use std::process::ExitCode;

const DEFAULT_DB_FILE: &str = "lifefield.db";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("LIFEFIELD_LOG_DIR") {
        if let Err(err) = lifefield_core::init_logging(lifefield_core::default_log_level(), log_dir)
        {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    let db_path =
        std::env::var("LIFEFIELD_DB").unwrap_or_else(|_| DEFAULT_DB_FILE.to_string());
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("error: could not open `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut service = JournalService::open(SqliteSlotRepository::new(&conn));

    match (command, &args[1..]) {
        ("show", []) => {
            show(&service);
            ExitCode::SUCCESS
        }
        ("set", [module, section, value]) => {
            if service.set_text(module, section, value) {
                ExitCode::SUCCESS
            } else {
                eprintln!("error: `{module}.{section}` is not a known text section");
                ExitCode::FAILURE
            }
        }
        ("add", [module, section, item]) => {
            service.set_draft(module, section, item);
            if service.add_list_item(module, section) {
                ExitCode::SUCCESS
            } else {
                eprintln!(
                    "error: nothing added; `{module}.{section}` must be a list section and the item non-empty"
                );
                ExitCode::FAILURE
            }
        }
        ("remove", [module, section, index]) => {
            let Ok(index) = index.parse::<usize>() else {
                eprintln!("error: index must be a non-negative integer");
                return ExitCode::FAILURE;
            };
            if service.remove_list_item(module, section, index) {
                ExitCode::SUCCESS
            } else {
                eprintln!("error: no list item at `{module}.{section}[{index}]`");
                ExitCode::FAILURE
            }
        }
        ("export", rest) => {
            let path = rest.first().map(String::as_str).unwrap_or(EXPORT_FILE_NAME);
            match service.export_to_file(path) {
                Ok(()) => {
                    println!("exported to {path}");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        ("import", [path]) => {
            let raw = match std::fs::read_to_string(path) {
                Ok(raw) => raw,
                Err(err) => {
                    eprintln!("error: could not read `{path}`: {err}");
                    return ExitCode::FAILURE;
                }
            };
            match service.import_text(&raw) {
                Ok(outcome) => {
                    if outcome.fell_back_to_defaults {
                        println!("imported, but the document held no usable data; reset to defaults");
                    } else {
                        println!("imported {path}");
                    }
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        ("version", []) => {
            println!("lifefield_core version={}", lifefield_core::core_version());
            ExitCode::SUCCESS
        }
        _ => {
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn show(service: &JournalService<SqliteSlotRepository<'_>>) {
    for module in schema::registry() {
        println!("{} ({})", module.title, module.key);
        println!("  {}", module.description);
        for section in module.sections {
            match service.value(module.key, section.id) {
                Some(SectionValue::Text(text)) => {
                    let shown = if text.is_empty() { "-" } else { text.as_str() };
                    println!("  {} ({}): {shown}", section.title, section.id);
                }
                Some(SectionValue::List(items)) => {
                    println!("  {} ({}):", section.title, section.id);
                    if items.is_empty() {
                        println!("    (no entries yet)");
                    }
                    for (index, item) in items.iter().enumerate() {
                        println!("    [{index}] {item}");
                    }
                }
                None => {}
            }
        }
        println!();
    }
}

fn print_usage() {
    eprintln!("usage: lifefield <command>");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  show                            print every module and section");
    eprintln!("  set <module> <section> <text>   overwrite a text section");
    eprintln!("  add <module> <section> <item>   append an item to a list section");
    eprintln!("  remove <module> <section> <i>   remove the list item at index i");
    eprintln!("  export [path]                   write the document as pretty JSON");
    eprintln!("  import <path>                   replace the store from a JSON file");
    eprintln!("  version                         print the core version");
    eprintln!();
    eprintln!("environment:");
    eprintln!("  LIFEFIELD_DB       database file (default: {DEFAULT_DB_FILE})");
    eprintln!("  LIFEFIELD_LOG_DIR  enable file logging into this directory");
}
