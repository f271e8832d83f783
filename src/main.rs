mod cli;

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;
use wellness::report::{self, OutputFormat};
use wellness::types::config::WellnessConfig;
use wellness::{config, logging, sample, store};
use wellness::{Analyzer, FactorSchema, Formula, Location, Result, WellnessError};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const EMPTY: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

struct Session {
    config: WellnessConfig,
    schema: Arc<FactorSchema>,
    store_path: PathBuf,
}

impl Session {
    fn open(cli: &cli::Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = config::load_config(&cwd, cli.config.as_deref())?;
        let schema = Arc::new(config.factor_schema()?);
        let store_path = cli.data.clone().unwrap_or_else(|| config.store_path());
        Ok(Self {
            config,
            schema,
            store_path,
        })
    }

    fn load(&self) -> Result<Analyzer> {
        store::load(&self.store_path, Arc::clone(&self.schema))
    }

    fn format(&self, requested: Option<cli::ReportFormat>) -> OutputFormat {
        match requested {
            Some(cli::ReportFormat::Json) => OutputFormat::Json,
            Some(cli::ReportFormat::Md) => OutputFormat::Md,
            None => self.config.report_format().into(),
        }
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);
    let session = Session::open(&cli)?;

    match cli.command {
        cli::Commands::Factors(cmd) => {
            let categories = match cmd.category.as_deref() {
                Some(category) if session.schema.is_valid_category(category) => vec![category],
                Some(category) => {
                    return Err(WellnessError::UnknownCategory(category.to_string()));
                }
                None => session.schema.category_names().collect(),
            };
            let mut index = 1;
            for category in categories {
                println!("{category}");
                for factor in session.schema.factors_of(category)? {
                    println!("  {index}. {factor}");
                    index += 1;
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let formula = Formula::from(cmd.formula);
            let score = formula.evaluate([Some(cmd.a), Some(cmd.b), Some(cmd.c)]);
            println!("{}: {score:.1}/10", formula.factor());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Add(cmd) => {
            let mut analyzer = session.load()?;
            let location = build_location(&session.schema, &cmd)?;
            let name = location.name.clone();
            analyzer.add_location(location)?;
            store::save(&session.store_path, &analyzer)?;
            println!("location '{name}' saved to {}", session.store_path.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::List => {
            let analyzer = session.load()?;
            if analyzer.is_empty() {
                println!("no locations added yet");
                return Ok(exit_code::EMPTY);
            }
            for (rank, row) in analyzer.ranked().rows.iter().enumerate() {
                println!(
                    "{}. {}, {} ({})",
                    rank + 1,
                    row.location,
                    row.country,
                    row.location_type
                );
                println!("   Overall Score: {:.1}/10", row.value);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Show(cmd) => {
            let analyzer = session.load()?;
            let location = analyzer
                .get_location(&cmd.name)
                .ok_or_else(|| WellnessError::LocationNotFound(cmd.name.clone()))?;
            print_location(location)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Compare(cmd) => {
            let analyzer = session.load()?;
            let comparison =
                analyzer.compare_locations(cmd.factor.as_deref(), cmd.category.as_deref())?;
            let rendered = report::render_comparison(
                &comparison,
                session.format(cmd.format),
                session.config.precision(),
            )?;
            println!("{rendered}");
            if comparison.is_empty() {
                Ok(exit_code::EMPTY)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Profile(cmd) => {
            let analyzer = session.load()?;
            let names = cmd.names.iter().map(String::as_str).collect::<Vec<_>>();
            let profile = analyzer.factor_profile(&names, cmd.category.as_deref())?;
            let rendered = report::render_profile(
                &profile,
                session.format(cmd.format),
                session.config.precision(),
            )?;
            println!("{rendered}");
            if profile.is_empty() {
                Ok(exit_code::EMPTY)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Sample(cmd) => {
            if session.store_path.exists() && !cmd.force {
                return Err(WellnessError::InvalidArgument(format!(
                    "store already exists at {} (use --force to overwrite)",
                    session.store_path.display()
                )));
            }
            let analyzer = sample::sample_analyzer(Arc::clone(&session.schema));
            store::save(&session.store_path, &analyzer)?;
            println!(
                "wrote {} sample locations to {}",
                analyzer.len(),
                session.store_path.display()
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

/// Computes formula scores from whichever raw metrics were supplied, then
/// applies manual scores on top.
fn build_location(schema: &Arc<FactorSchema>, cmd: &cli::AddCommand) -> Result<Location> {
    if cmd.name.trim().is_empty() {
        return Err(WellnessError::EmptyName("location".to_string()));
    }
    let mut location = Location::new(
        Arc::clone(schema),
        cmd.name.clone(),
        cmd.country.clone(),
        cmd.location_type.clone(),
    );

    for formula in Formula::ALL {
        let inputs = cmd.metrics.inputs(formula);
        if inputs.iter().all(Option::is_none) {
            continue;
        }
        let score = formula.evaluate(inputs);
        let note = formula.note(inputs);
        match location.add_score(formula.factor(), score, Some(note.as_str())) {
            Ok(()) => println!("calculated {}: {score:.1}/10", formula.factor()),
            Err(e @ (WellnessError::InvalidScore { .. } | WellnessError::UnknownFactor(_))) => {
                warn!(formula = %formula, error = %e, "skipping computed score");
            }
            Err(e) => return Err(e),
        }
    }

    let scores = cmd
        .scores
        .iter()
        .map(|raw| {
            let (factor, value) = parse_assignment(raw)?;
            let score = value.trim().parse::<f64>().map_err(|_| {
                WellnessError::InvalidArgument(format!(
                    "score for '{factor}' is not a number: {value}"
                ))
            })?;
            Ok((factor, score))
        })
        .collect::<Result<Vec<_>>>()?;
    let notes = cmd
        .notes
        .iter()
        .map(|raw| parse_assignment(raw))
        .collect::<Result<Vec<_>>>()?;
    if let Some((factor, _)) = notes
        .iter()
        .find(|(noted, _)| !scores.iter().any(|(factor, _)| factor == noted))
    {
        return Err(WellnessError::InvalidArgument(format!(
            "--note for '{factor}' needs a matching --score"
        )));
    }

    for (factor, score) in scores {
        let note = notes
            .iter()
            .find(|(noted, _)| *noted == factor)
            .map(|(_, note)| *note);
        location.add_score(factor, score, note)?;
    }

    Ok(location)
}

/// Splits "Factor=value" at the first '='; factor names never contain one.
fn parse_assignment(raw: &str) -> Result<(&str, &str)> {
    raw.split_once('=')
        .map(|(factor, value)| (factor.trim(), value))
        .filter(|(factor, _)| !factor.is_empty())
        .ok_or_else(|| {
            WellnessError::InvalidArgument(format!("expected \"Factor=value\", got \"{raw}\""))
        })
}

fn print_location(location: &Location) -> Result<()> {
    println!("{location}");
    println!("Overall Score: {:.1}/10", location.get_overall_score());
    for category in location.schema().categories() {
        let average = location.get_category_average(&category.name)?;
        println!("\n{} (average {:.1})", category.name, average);
        for factor in &category.factors {
            match location.get_score(factor) {
                Some(score) => {
                    println!("  {factor}: {score:.1}");
                    if let Some(note) = location.get_note(factor) {
                        println!("    {note}");
                    }
                }
                None => println!("  {factor}: -"),
            }
        }
    }
    Ok(())
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
