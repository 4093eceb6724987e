//! Command-line front end for `employee_core`.
//!
//! # Responsibility
//! - Map subcommands onto `EmployeeService` operations over a SQLite file.
//! - Print results as JSON and failures as the service's message on stderr.

mod args;
mod error;

use args::{Cli, Command};
use clap::Parser;
use employee_core::db::open_db;
use employee_core::{Employee, EmployeeService, SqliteEmployeeRepository};
use error::CliError;
use log::{error, info};
use serde::Serialize;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        if let Err(err) = employee_core::init_logging(&cli.log_level, log_dir) {
            eprintln!("file logging disabled: {err}");
        }
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(
                "event=cli_command module=cli status=error exit_code={}",
                err.exit_code()
            );
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Command::Ping = cli.command {
        println!("employee_core ping={}", employee_core::ping());
        println!("employee_core version={}", employee_core::core_version());
        return Ok(());
    }

    let conn = open_db(&cli.db)?;
    let service = EmployeeService::new(SqliteEmployeeRepository::new(&conn));

    match cli.command {
        Command::Create(fields) => {
            print_json(&service.create_employee(&Employee::from(fields))?)?;
        }
        Command::Get { id } => print_json(&service.get_employee_by_id(id)?)?,
        Command::List => print_json(&service.get_all_employees()?)?,
        Command::Update { id, fields } => {
            print_json(&service.update_employee(id, Employee::from(fields))?)?;
        }
        Command::Delete { id } => {
            service.delete_employee(id)?;
            println!("deleted employee {id}");
        }
        Command::Ping => {}
    }

    info!("event=cli_command module=cli status=ok");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
