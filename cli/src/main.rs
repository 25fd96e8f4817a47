mod args;

use cli_table::{Cell, Style, Table, print_stdout};
use colored::Colorize;
use engine::command::parser::parse_command;
use engine::command::{Command, QueryResult};
use engine::config::Config;
use engine::engine::{MENU, Planner};
use log::LevelFilter;

use crate::args::Args;

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match Args::parse(&raw) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            eprintln!("{}", args::USAGE);
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{}", args::USAGE);
        return;
    }

    let mut planner = match build_planner(&args) {
        Ok(planner) => planner,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    };

    let mut rl = match rustyline::DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    };

    println!("Welcome to the course planner.");

    loop {
        println!("\n{}", MENU);
        let readline = rl.readline("What would you like to do? ");
        let line = match readline {
            Ok(line) => line,
            Err(_) => break,
        };
        let _ = rl.add_history_entry(line.as_str());

        // 1. Parse
        let command = match parse_command(&line) {
            Ok(Command::Describe { key: None }) => {
                match rl.readline("What course do you want to know about? ") {
                    Ok(key) => Command::Describe { key: Some(key) },
                    Err(_) => break,
                }
            }
            Ok(command) => command,
            Err(e) => {
                println!("{}", e.to_string().as_str().yellow());
                continue;
            }
        };

        // 2. Execute
        match planner.execute(command) {
            Ok(QueryResult::Exit) => {
                println!("Thank you for using the course planner!");
                break;
            }
            Ok(result) => print_result(result),
            Err(e) => println!("{} {}", "Error:".red(), e),
        }
    }
}

fn build_planner(args: &Args) -> engine::error::Result<Planner> {
    let mut config = Config::load_or_default(&args.config_path)?;
    if let Some(data_file) = &args.data_file {
        config.data_file = data_file.clone();
    }
    if let Some(buckets) = args.bucket_count {
        config.bucket_count = buckets;
    }
    Planner::new(config)
}

fn print_result(result: QueryResult) {
    match result {
        QueryResult::Message(msg) => println!("{}", msg),
        QueryResult::Data(resp) => {
            let table = resp
                .rows
                .iter()
                .map(|row| row.iter().map(|value| value.cell()).collect::<Vec<_>>())
                .collect::<Vec<_>>()
                .table()
                .title(
                    resp.columns
                        .iter()
                        .map(|col| col.cell().bold(true))
                        .collect::<Vec<_>>(),
                );

            if let Err(e) = print_stdout(table) {
                eprintln!("Failed to print table: {}", e);
            }
        }
        QueryResult::Exit => {}
    }
}
