//! Pension Estimator CLI
//!
//! Command-line front end for building, editing and evaluating contribution histories

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use pension_estimator::records::{copy_forward, export_records, import_records, index_of_year, update_record, write_records};
use pension_estimator::{
    Action, AppState, Assumptions, PensionProjector, ProjectionConfig, ProjectionResult, RecordEdit, UserInfoForm,
};

#[derive(Debug, Parser)]
#[command(name = "pension-estimator", version)]
#[command(about = "Estimate a monthly state pension from a contribution history")]
struct Cli {
    /// Directory with social_average_salary.csv and pension_months.csv
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the empty contribution record sheet for a career
    Template(TemplateArgs),
    /// Change one year of a record sheet
    Edit(EditArgs),
    /// Project the monthly pension from a record sheet
    Estimate(EstimateArgs),
}

#[derive(Debug, Args)]
struct ProfileArgs {
    /// male or female
    #[arg(long)]
    gender: String,
    /// Birth month, YYYY-MM
    #[arg(long)]
    birth: String,
    /// First month of work, YYYY-MM
    #[arg(long)]
    work_start: String,
}

impl ProfileArgs {
    fn form(&self) -> UserInfoForm {
        UserInfoForm::new(&self.gender, &self.birth, &self.work_start)
    }
}

#[derive(Debug, Args)]
struct TemplateArgs {
    #[command(flatten)]
    profile: ProfileArgs,
    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
#[group(required = false, multiple = false)]
struct EditChange {
    /// Contribution months (clamped to 0-24)
    #[arg(long, allow_negative_numbers = true)]
    months: Option<i64>,
    /// Monthly salary
    #[arg(long)]
    salary: Option<f64>,
    /// Yearly personal account payment
    #[arg(long)]
    payment: Option<f64>,
}

impl EditChange {
    fn edit(&self) -> Option<RecordEdit> {
        match (self.months, self.salary, self.payment) {
            (Some(m), _, _) => Some(RecordEdit::PaymentMonths(m)),
            (_, Some(s), _) => Some(RecordEdit::MonthlySalary(s)),
            (_, _, Some(p)) => Some(RecordEdit::YearlyPayment(p)),
            _ => None,
        }
    }
}

#[derive(Debug, Args)]
struct EditArgs {
    /// Record sheet to update in place
    #[arg(long)]
    records: PathBuf,
    /// Year of the row to change
    #[arg(long)]
    year: i32,
    #[command(flatten)]
    change: EditChange,
    /// Copy the row's months, salary and payment to every later year
    #[arg(long)]
    copy_forward: bool,
}

#[derive(Debug, Args)]
struct EstimateArgs {
    #[command(flatten)]
    profile: ProfileArgs,
    /// Record sheet to evaluate
    #[arg(long)]
    records: PathBuf,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// Also write the payout schedule to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Years in the payout schedule
    #[arg(long)]
    years: Option<u32>,
    /// Annual wage growth after retirement
    #[arg(long)]
    wage_growth: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let assumptions = load_assumptions(cli.tables.as_deref())?;

    match cli.command {
        Command::Template(args) => run_template(assumptions, args),
        Command::Edit(args) => run_edit(&assumptions, args),
        Command::Estimate(args) => run_estimate(assumptions, args),
    }
}

fn load_assumptions(tables: Option<&Path>) -> Result<Assumptions> {
    match tables {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("loading reference tables from {}", dir.display())),
        None => Ok(Assumptions::default_tables()),
    }
}

fn run_template(assumptions: Assumptions, args: TemplateArgs) -> Result<()> {
    let projector = PensionProjector::new(assumptions.clone(), ProjectionConfig::default());
    let state = AppState::new(projector).apply(Action::SubmitInfo(args.profile.form()))?;

    match args.output {
        Some(path) => {
            export_records(&path, state.records())
                .with_context(|| format!("writing {}", path.display()))?;
            let projected = state
                .records()
                .iter()
                .filter(|r| assumptions.salary.is_estimated(r.year))
                .count();
            println!(
                "Wrote {} records to {} ({} with projected social averages)",
                state.records().len(),
                path.display(),
                projected
            );
        }
        None => write_records(io::stdout().lock(), state.records())?,
    }
    Ok(())
}

fn run_edit(assumptions: &Assumptions, args: EditArgs) -> Result<()> {
    let path = &args.records;
    let records = import_records(path).with_context(|| format!("reading {}", path.display()))?;
    let index = index_of_year(&records, args.year)
        .ok_or_else(|| anyhow!("year {} not found in {}", args.year, path.display()))?;

    let edit = args.change.edit();
    if edit.is_none() && !args.copy_forward {
        bail!("nothing to do: pass --months, --salary, --payment or --copy-forward");
    }

    let records = match edit {
        Some(edit) => update_record(&records, index, edit)?,
        None => records,
    };
    let records = if args.copy_forward {
        copy_forward(&records, index)?
    } else {
        records
    };

    export_records(path, &records).with_context(|| format!("writing {}", path.display()))?;

    let row = &records[index];
    let marker = if assumptions.salary.is_estimated(row.year) {
        " (projected average)"
    } else {
        ""
    };
    println!(
        "{}: months={} salary={} payment={} index={:.2}{}",
        row.year, row.payment_months, row.monthly_salary, row.yearly_payment, row.payment_index, marker
    );
    Ok(())
}

fn run_estimate(assumptions: Assumptions, args: EstimateArgs) -> Result<()> {
    let defaults = ProjectionConfig::default();
    let config = ProjectionConfig {
        schedule_years: args.years.unwrap_or(defaults.schedule_years),
        wage_growth: args.wage_growth.unwrap_or(defaults.wage_growth),
    };

    let records = import_records(&args.records)
        .with_context(|| format!("reading {}", args.records.display()))?;

    let state = AppState::new(PensionProjector::new(assumptions, config))
        .apply(Action::SubmitInfo(args.profile.form()))?
        .apply(Action::ReplaceRecords(records))?
        .apply(Action::Calculate)?;
    let result = state
        .result()
        .ok_or_else(|| anyhow!("estimate unavailable on the {} screen", state.screen()))?;

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        result.write_schedule(file)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&state, &result);
    }
    Ok(())
}

fn print_result(state: &AppState, result: &ProjectionResult) {
    let info = state.user_info();
    let summary = &result.summary;

    println!("Pension Estimate");
    println!("================\n");
    println!("  Gender:                 {}", info.gender);
    println!("  Birth date:             {}", info.birth_date);
    println!("  Work start:             {}", info.work_start_date);
    println!("  Retirement date:        {}", summary.retirement_date);
    println!("  Contribution months:    {}", summary.total_months);
    println!("  Contribution years:     {:.1}", summary.payment_years);
    println!("  Basic pension total:    {:.2}", summary.basic_pension_total);
    println!("  Personal account total: {:.2}", summary.personal_pension_total);
    println!("  Average index:          {:.2}", summary.average_index);
    println!("  Pension payment months: {}", summary.pension_months);
    println!("  First-year pension:     {:.0} / month", result.first_monthly_pension());
    println!();

    println!("{:>6} {:>14} {:>12} {:>12} {:>12}", "Year", "AvgSalary", "Basic", "Personal", "Monthly");
    println!("{}", "-".repeat(60));
    for d in &result.schedule {
        println!(
            "{:>6} {:>14.0} {:>12.0} {:>12.0} {:>12.0}",
            d.year, d.social_average_salary, d.basic_pension, d.personal_account_pension, d.monthly_pension
        );
    }
}
