use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;

use roster::{
    load_config_or_default, local_today, logging, Database, Employee, EmployeeForm, EmployeeList,
    EndDatePreset, FormInput, Partitioned, Role, RosterService, StartDatePreset,
};

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Manage a local employee roster")]
struct Cli {
    /// Path to a JSON config file (defaults to ~/.roster/config.json if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the record store, overriding the config
    #[arg(long, env = "ROSTER_DB", global = true)]
    db: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Evaluate employment status as of this date instead of today
    #[arg(long, global = true, hide = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// List current and previous employees
    List,
    /// Show a single employee
    Show { id: i64 },
    /// Add an employee
    Add(EmployeeArgs),
    /// Edit an employee, replacing the stored record
    Edit {
        id: i64,
        #[command(flatten)]
        fields: EmployeeArgs,
        /// Remove the end date
        #[arg(long, conflicts_with_all = ["end", "end_preset"])]
        clear_end: bool,
    },
    /// Delete an employee
    Remove { id: i64 },
    /// Print the available roles
    Roles,
}

#[derive(Args, Debug)]
struct EmployeeArgs {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    role: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "start_preset")]
    start: Option<NaiveDate>,

    /// today | next-monday | next-tuesday | after-one-week
    #[arg(long)]
    start_preset: Option<StartDatePreset>,

    /// End date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "end_preset")]
    end: Option<NaiveDate>,

    /// today | no-date
    #[arg(long)]
    end_preset: Option<EndDatePreset>,
}

impl EmployeeArgs {
    fn into_input(self, clear_end: bool) -> FormInput {
        FormInput {
            name: self.name,
            role: self.role,
            start: self.start,
            start_preset: self.start_preset,
            end: self.end,
            end_preset: self.end_preset,
            clear_end,
        }
    }
}

type CliResult<T> = Result<T, Box<dyn Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = load_config_or_default(cli.config.as_deref())?;
    logging::init(&config.log_level, config.log_format);

    let db_path = cli
        .db
        .clone()
        .or_else(|| config.resolved_database_path())
        .ok_or("could not determine a location for the record store")?;
    let db = Database::open(&db_path)?;
    let list = EmployeeList::new();
    let service = RosterService::new(&db, &list);
    let today = cli.today.unwrap_or_else(local_today);

    match cli.cmd {
        Cmd::List => {
            let parts = service.load()?;
            if cli.json {
                print_json(&parts)?;
            } else {
                print_partitioned(&parts);
            }
        }
        Cmd::Show { id } => {
            let employee = service.find(id)?;
            if cli.json {
                print_json(&employee)?;
            } else {
                print_employee(&employee);
            }
        }
        Cmd::Add(fields) => {
            let mut form = EmployeeForm::new();
            fields.into_input(false).apply(&mut form, today)?;
            let saved = service.save(&form, None, today)?;
            info!("Added employee {}", saved.id);
            report_saved(&saved, cli.json)?;
        }
        Cmd::Edit {
            id,
            fields,
            clear_end,
        } => {
            let existing = service.require(id)?;
            let mut form = EmployeeForm::for_employee(&existing);
            fields.into_input(clear_end).apply(&mut form, today)?;
            let saved = service.save(&form, Some(id), today)?;
            report_saved(&saved, cli.json)?;
        }
        Cmd::Remove { id } => {
            let parts = service.delete(id)?;
            if cli.json {
                print_json(&parts)?;
            } else {
                println!("Removed employee #{}", id);
            }
        }
        Cmd::Roles => {
            let roles: Vec<&str> = Role::ALL.iter().map(Role::as_str).collect();
            if cli.json {
                print_json(&roles)?;
            } else {
                for role in roles {
                    println!("{}", role);
                }
            }
        }
    }

    Ok(())
}

fn report_saved(employee: &Employee, json: bool) -> CliResult<()> {
    if json {
        print_json(employee)?;
    } else {
        print_employee(employee);
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_employee(employee: &Employee) -> String {
    let period = match employee.end_date {
        Some(end) => format!("{} - {}", employee.start_date, end),
        None => format!("from {}", employee.start_date),
    };
    format!(
        "#{:<4} {:<24} {:<26} {}",
        employee.id, employee.name, employee.role, period
    )
}

fn print_employee(employee: &Employee) {
    let status = if employee.employment_status {
        "current"
    } else {
        "previous"
    };
    println!("{}  [{}]", format_employee(employee), status);
}

fn print_partitioned(parts: &Partitioned) {
    if parts.current.is_empty() && parts.previous.is_empty() {
        println!("No employee records found");
        return;
    }

    println!("Current employees");
    for employee in &parts.current {
        println!("  {}", format_employee(employee));
    }
    println!();
    println!("Previous employees");
    for employee in &parts.previous {
        println!("  {}", format_employee(employee));
    }
}
