use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wellness::Formula;

#[derive(Parser)]
#[command(
    name = "wellness",
    version,
    about = "Score and compare the wellness attributes of locations"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./wellness.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Location store (overrides store.path from config)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List categories and their factors
    Factors(FactorsCommand),
    /// Evaluate one formula from three raw measurements
    Score(ScoreCommand),
    /// Add or replace a location
    Add(AddCommand),
    /// List locations ranked by overall score
    List,
    /// Show one location in detail
    Show(ShowCommand),
    /// Compare all locations by factor, category or overall score
    Compare(CompareCommand),
    /// Factor-by-factor profile of selected locations
    Profile(ProfileCommand),
    /// Write the demonstration data set to the store
    Sample(SampleCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormulaArg {
    Healthcare,
    Climate,
    Food,
    Cost,
    Beach,
}

impl From<FormulaArg> for Formula {
    fn from(arg: FormulaArg) -> Self {
        match arg {
            FormulaArg::Healthcare => Formula::Healthcare,
            FormulaArg::Climate => Formula::Climate,
            FormulaArg::Food => Formula::FoodQuality,
            FormulaArg::Cost => Formula::CostOfLiving,
            FormulaArg::Beach => Formula::BeachAccess,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct FactorsCommand {
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct ScoreCommand {
    #[arg(value_enum)]
    pub formula: FormulaArg,
    #[arg(allow_negative_numbers = true)]
    pub a: f64,
    #[arg(allow_negative_numbers = true)]
    pub b: f64,
    #[arg(allow_negative_numbers = true)]
    pub c: f64,
}

#[derive(Args)]
pub struct AddCommand {
    pub name: String,
    #[arg(long)]
    pub country: String,
    #[arg(long = "type")]
    pub location_type: String,

    #[command(flatten)]
    pub metrics: RawMetrics,

    /// Manual score, as "Factor=7.5"
    #[arg(long = "score")]
    pub scores: Vec<String>,

    /// Note for a manually scored factor, as "Factor=text"
    #[arg(long = "note")]
    pub notes: Vec<String>,
}

#[derive(Args, Default)]
pub struct RawMetrics {
    /// Healthcare system rank (lower is better)
    #[arg(long)]
    pub rank: Option<f64>,
    /// Hospital beds per 1000 people
    #[arg(long)]
    pub beds: Option<f64>,
    /// Doctors per 1000 people
    #[arg(long)]
    pub doctors: Option<f64>,

    /// Sunny days per year
    #[arg(long)]
    pub sunny_days: Option<f64>,
    /// Average temperature (Celsius)
    #[arg(long, allow_negative_numbers = true)]
    pub avg_temp: Option<f64>,
    /// Annual rainfall (mm)
    #[arg(long)]
    pub rainfall: Option<f64>,

    /// Organic farms per 100,000 people
    #[arg(long)]
    pub organic_farms: Option<f64>,
    /// Traditional cuisine preservation (1-10)
    #[arg(long)]
    pub cuisine: Option<f64>,
    /// Food safety rating (1-10)
    #[arg(long)]
    pub food_safety: Option<f64>,

    /// Monthly costs for a single person (USD)
    #[arg(long)]
    pub monthly_cost: Option<f64>,
    /// Purchasing power relative to NYC (NYC=100)
    #[arg(long)]
    pub purchasing_power: Option<f64>,
    /// Housing price to income ratio
    #[arg(long)]
    pub housing_ratio: Option<f64>,

    /// Distance to the nearest beach (km)
    #[arg(long)]
    pub beach_distance: Option<f64>,
    /// Beach quality rating (1-10)
    #[arg(long)]
    pub beach_quality: Option<f64>,
    /// Beach facilities rating (1-10)
    #[arg(long)]
    pub beach_facilities: Option<f64>,
}

impl RawMetrics {
    pub fn inputs(&self, formula: Formula) -> [Option<f64>; 3] {
        match formula {
            Formula::Healthcare => [self.rank, self.beds, self.doctors],
            Formula::Climate => [self.sunny_days, self.avg_temp, self.rainfall],
            Formula::FoodQuality => [self.organic_farms, self.cuisine, self.food_safety],
            Formula::CostOfLiving => [self.monthly_cost, self.purchasing_power, self.housing_ratio],
            Formula::BeachAccess => [
                self.beach_distance,
                self.beach_quality,
                self.beach_facilities,
            ],
        }
    }
}

#[derive(Args)]
pub struct ShowCommand {
    pub name: String,
}

#[derive(Args)]
pub struct CompareCommand {
    #[arg(long, conflicts_with = "category")]
    pub factor: Option<String>,
    #[arg(long, conflicts_with = "factor")]
    pub category: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ProfileCommand {
    #[arg(required = true)]
    pub names: Vec<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct SampleCommand {
    /// Overwrite an existing store
    #[arg(long)]
    pub force: bool,
}
