//! rmf-assess: command-line front end for the NIST AI RMF self-assessment.
//!
//! Every subcommand prints JSON on stdout; logs go to stderr.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rmf_assessor::{AnswerInput, AssessmentService, AssessorConfig, Submission};
use rmf_taxonomy::RmfFunction;
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rmf-assess")]
#[command(about = "NIST AI RMF maturity self-assessment")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, env = "RMF_ASSESS_CONFIG")]
    config: Option<PathBuf>,

    /// Log level for this tool's crates (overrides config file; RUST_LOG wins over both)
    #[arg(long, env = "RMF_ASSESS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Organization name used when none is given (overrides config file)
    #[arg(long, env = "RMF_ASSESS_DEFAULT_ORG")]
    default_organization: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the questionnaire
    Questions,
    /// List supported industries
    Industries,
    /// Print the maturity level table
    MaturityLevels,
    /// Print recommendations for an industry
    Recommendations {
        industry: String,
        /// Limit to one function (govern, map, measure, manage)
        #[arg(long)]
        function: Option<String>,
    },
    /// Score an answers file and print the assessment record
    Assess {
        #[arg(long)]
        industry: String,
        #[arg(long)]
        organization: Option<String>,
        /// JSON file: a list of {question_id, score} or a {question_id: score} map
        #[arg(long)]
        answers: PathBuf,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnswersFile {
    List(Vec<AnswerInput>),
    Map(BTreeMap<String, i64>),
}

impl AnswersFile {
    fn into_inputs(self) -> Vec<AnswerInput> {
        match self {
            Self::List(inputs) => inputs,
            Self::Map(map) => map
                .into_iter()
                .map(|(id, score)| AnswerInput::new(id, score))
                .collect(),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AssessorConfig::from_file(path)?,
        None => AssessorConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.general.log_level = level;
    }
    if let Some(name) = cli.default_organization {
        config.service.default_organization_name = name;
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.general.log_directive()?)?,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let service = AssessmentService::new(config)?;

    match cli.command {
        Command::Questions => print_json(&service.list_questions()),
        Command::Industries => print_json(&service.list_industries()),
        Command::MaturityLevels => print_json(&service.get_maturity_levels()),
        Command::Recommendations { industry, function } => {
            let function = function
                .map(|f| RmfFunction::parse(&f).with_context(|| format!("unknown function: {f}")))
                .transpose()?;
            print_json(&service.get_recommendations(&industry, function)?)
        }
        Command::Assess {
            industry,
            organization,
            answers,
        } => {
            let content = std::fs::read_to_string(&answers)
                .with_context(|| format!("reading {}", answers.display()))?;
            let file: AnswersFile = serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", answers.display()))?;

            let mut submission = Submission::new(industry, file.into_inputs());
            submission.organization_name = organization;

            let id = service.submit(submission).await?;
            info!(assessment_id = %id, "Assessment complete");
            print_json(service.get_assessment(&id).await?.as_ref())
        }
    }
}
