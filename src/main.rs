use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use roi_oracle::catalog::{UseCaseCatalog, UseCaseId};
use roi_oracle::config::{
    Config, ConfigOverrides, ProfileOverrides, SituationOverrides,
};
use roi_oracle::output::csv::{comparison_to_csv, recommendations_to_csv};
use roi_oracle::output::json::render_json;
use roi_oracle::output::table::{
    render_catalog_table, render_comparison_table, render_pain_table, render_profile_summary,
    render_projection_table, render_recommendations_table,
};
use roi_oracle::profile::{CompanySize, Industry};
use roi_oracle::roi::engine::calculate_roi;
use roi_oracle::roi::report::generate_comparison_report;
use roi_oracle::roi::Scenario;
use roi_oracle::scoring::pain::compute_pain_scores;
use roi_oracle::scoring::recommend::recommend_use_cases;
use roi_oracle::scoring::Recommendation;
use tracing::warn;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "roi-oracle", about = "AI use-case ROI projections and recommendations")]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    #[command(flatten)]
    company: CompanyArgs,
    #[command(flatten)]
    situation: SituationArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Args, Clone, Default)]
struct CompanyArgs {
    #[arg(long)]
    industry: Option<String>,
    #[arg(long = "company-size")]
    company_size: Option<String>,
    #[arg(long = "monthly-revenue")]
    monthly_revenue: Option<f64>,
    #[arg(long)]
    employees: Option<u32>,
    #[arg(long = "hourly-wage")]
    hourly_wage: Option<f64>,
}

#[derive(Debug, clap::Args, Clone, Default)]
struct SituationArgs {
    #[arg(long = "weekly-hours")]
    weekly_hours: Option<f64>,
    #[arg(long = "manual-work")]
    manual_work: Option<f64>,
    #[arg(long = "processing-time")]
    processing_time: Option<f64>,
    #[arg(long = "tasks-per-day")]
    tasks_per_day: Option<u32>,
    #[arg(long = "error-rate")]
    error_rate: Option<f64>,
    #[arg(long = "cost-per-error")]
    cost_per_error: Option<f64>,
    #[arg(long = "response-time")]
    response_time: Option<f64>,
    #[arg(long)]
    satisfaction: Option<f64>,
    #[arg(long)]
    tickets: Option<u32>,
    #[arg(long = "acquisition-cost")]
    acquisition_cost: Option<f64>,
    #[arg(long = "customer-value")]
    customer_value: Option<f64>,
    #[arg(long)]
    retention: Option<f64>,
}

impl From<SituationArgs> for SituationOverrides {
    fn from(value: SituationArgs) -> Self {
        Self {
            weekly_hours_per_employee: value.weekly_hours,
            manual_work_percentage: value.manual_work,
            processing_time_per_task: value.processing_time,
            tasks_per_day: value.tasks_per_day,
            error_rate: value.error_rate,
            cost_per_error: value.cost_per_error,
            avg_response_time: value.response_time,
            customer_satisfaction: value.satisfaction,
            support_tickets_per_month: value.tickets,
            customer_acquisition_cost: value.acquisition_cost,
            avg_customer_value: value.customer_value,
            customer_retention_rate: value.retention,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    Catalog,
    Pain,
    Recommend {
        #[arg(long)]
        top: Option<usize>,
    },
    Roi {
        #[arg(long = "use-case")]
        use_case: String,
        #[arg(long, default_value = "realistic")]
        scenario: String,
    },
    Compare {
        #[arg(long = "use-cases")]
        use_cases: Option<String>,
    },
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(&config_path))?;
    config.apply_overrides(ConfigOverrides {
        company: company_overrides(&cli.company)?,
        situation: cli.situation.clone().into(),
    });

    if let Commands::Config { init, show } = &cli.command {
        if *init {
            Config::write_template(&config_path)?;
            println!("Wrote config template to {}", config_path.display());
        }
        if *show || !*init {
            println!("{}", render_json(&config)?);
        }
        return Ok(());
    }

    let catalog = UseCaseCatalog::with_defaults();

    match &cli.command {
        Commands::Catalog => match cli.output {
            OutputFormat::Table => println!("{}", render_catalog_table(catalog.use_cases())),
            OutputFormat::Json => println!("{}", render_json(catalog.use_cases())?),
            OutputFormat::Csv => {
                warn!("CSV output for catalog not implemented, using JSON");
                println!("{}", render_json(catalog.use_cases())?);
            }
        },
        Commands::Pain => {
            let scores = compute_pain_scores(&config.situation);
            match cli.output {
                OutputFormat::Table => {
                    println!("{}", render_profile_summary(&config.company, &config.situation));
                    println!("{}", render_pain_table(&scores));
                }
                OutputFormat::Json => println!("{}", render_json(&scores)?),
                OutputFormat::Csv => {
                    warn!("CSV output for pain not implemented, using JSON");
                    println!("{}", render_json(&scores)?);
                }
            }
        }
        Commands::Recommend { top } => {
            let mut assumptions = config.analysis.clone();
            if let Some(top) = top {
                assumptions.recommendation_limit = *top;
            }
            let recommendations: Vec<Recommendation> = recommend_use_cases(
                &catalog,
                &config.company,
                &config.situation,
                &assumptions,
            );
            match cli.output {
                OutputFormat::Table => {
                    println!("{}", render_profile_summary(&config.company, &config.situation));
                    println!("{}", render_recommendations_table(&recommendations));
                }
                OutputFormat::Json => println!("{}", render_json(&recommendations)?),
                OutputFormat::Csv => println!("{}", recommendations_to_csv(&recommendations)?),
            }
        }
        Commands::Roi { use_case, scenario } => {
            let id = UseCaseId::from_str(use_case)?;
            let scenario = Scenario::from_str(scenario)?;
            let entry = catalog
                .by_id(id)
                .ok_or_else(|| anyhow!("use case not found in catalog: {id}"))?;
            let projection = calculate_roi(
                &config.company,
                &config.situation,
                entry,
                scenario,
                &config.analysis,
            );
            match cli.output {
                OutputFormat::Table => println!("{}", render_projection_table(&projection)),
                OutputFormat::Json => println!("{}", render_json(&projection)?),
                OutputFormat::Csv => {
                    warn!("CSV output for roi not implemented, using JSON");
                    println!("{}", render_json(&projection)?);
                }
            }
        }
        Commands::Compare { use_cases } => {
            let ids = match use_cases {
                Some(raw) => parse_use_case_list(raw)?,
                None => UseCaseId::ALL.to_vec(),
            };
            let report = generate_comparison_report(
                &catalog,
                &config.company,
                &config.situation,
                &ids,
                &config.analysis,
            );
            match cli.output {
                OutputFormat::Table => println!("{}", render_comparison_table(&report)),
                OutputFormat::Json => println!("{}", render_json(&report)?),
                OutputFormat::Csv => println!("{}", comparison_to_csv(&report)?),
            }
        }
        Commands::Config { .. } => {}
    }

    Ok(())
}

fn company_overrides(args: &CompanyArgs) -> Result<ProfileOverrides> {
    Ok(ProfileOverrides {
        industry: args
            .industry
            .as_deref()
            .map(Industry::from_str)
            .transpose()?,
        company_size: args
            .company_size
            .as_deref()
            .map(CompanySize::from_str)
            .transpose()?,
        monthly_revenue: args.monthly_revenue,
        employee_count: args.employees,
        avg_hourly_wage: args.hourly_wage,
    })
}

fn parse_use_case_list(raw: &str) -> Result<Vec<UseCaseId>> {
    let mut out = Vec::new();
    for piece in raw.split(',') {
        let trimmed = piece.trim();
        if trimmed.is_empty() {
            continue;
        }
        out.push(UseCaseId::from_str(trimmed)?);
    }
    if out.is_empty() {
        return Err(anyhow!("use case list is empty"));
    }
    Ok(out)
}
