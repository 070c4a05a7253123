use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use records::{
    GenerateResponse, ObservationRequest, QueryRows, ReportQuery, ReportRow, SaveMode, SaveOutcome, StagingForm,
    StagingRecord, ValidationError,
};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("observation is empty")]
    EmptyObservation,
    #[error("enter at least one of --date-from / --date-to")]
    MissingDateBound,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("could not read {path}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{}", .0.message())]
    Validation(#[from] ValidationError),
    #[error("save incomplete: {0}")]
    SaveIncomplete(String),
}

#[derive(Parser, Debug)]
#[command(name = "lungstage-cli", about = "Lung staging intake CLI")]
struct Cli {
    #[arg(long, env = "LUNGSTAGE_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Send an observation to the report-generation webhook.
    Generate(GenerateArgs),
    /// Query stored reports through the query webhook.
    Query(QueryArgs),
    /// Validate a record file the way the staging form does.
    Check { file: PathBuf },
    /// Save a record file through the server.
    Save {
        file: PathBuf,
        /// Save as a draft (no validation, draft directory).
        #[arg(long, default_value_t = false)]
        draft: bool,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long, env = "LUNGSTAGE_SEND_OBSERVATION_URL", default_value = "https://n8n.fcubiolab.com/webhook/send-observation")]
    url: String,

    /// Observation text; words are joined with spaces.
    #[arg(required = true)]
    observation: Vec<String>,
}

#[derive(Args, Debug)]
struct QueryArgs {
    #[arg(long, env = "LUNGSTAGE_QUERY_REPORTS_URL", default_value = "http://172.20.10.2:5678/webhook/query-reports")]
    url: String,

    #[arg(long, default_value = "")]
    patient_id: String,

    #[arg(long, default_value = "")]
    patient_name: String,

    #[arg(long, default_value = "")]
    date_from: String,

    #[arg(long, default_value = "")]
    date_to: String,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let base_url = cli.base_url.trim_end_matches('/').to_owned();

    match cli.command {
        Command::Ping => run_ping(&base_url).await,
        Command::Generate(args) => run_generate(args).await,
        Command::Query(args) => run_query(args).await,
        Command::Check { file } => run_check(&file),
        Command::Save { file, draft } => {
            let mode = if draft { SaveMode::Draft } else { SaveMode::Final };
            run_save(&base_url, &file, mode).await
        }
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let response = reqwest::Client::new().get(format!("{base_url}/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let request = ObservationRequest::from_input(&args.observation.join(" ")).ok_or(CliError::EmptyObservation)?;
    let reply: GenerateResponse = post_json(&args.url, &request).await?;

    println!("{}", reply.display_text());
    if let Some(classification) = reply.classification() {
        println!("classification: {classification:?}");
    }
    if let Some(record) = reply.prepared_record() {
        print_json(&serde_json::to_value(record)?)?;
    }
    Ok(())
}

async fn run_query(args: QueryArgs) -> Result<(), CliError> {
    let query = build_query(&args)?;
    let body: Value = post_json(&args.url, &query).await?;

    match records::normalize_rows(body) {
        QueryRows::Rows(rows) => {
            for row in &rows {
                println!("{}", format_row(&ReportRow::from_value(row)));
            }
        }
        QueryRows::Empty => println!("{}", records::NOT_FOUND_MESSAGE),
        QueryRows::Malformed(reason) => {
            return Err(CliError::ServerError { status: 200, message: reason });
        }
    }
    Ok(())
}

fn run_check(file: &Path) -> Result<(), CliError> {
    let record = read_record(file)?;
    check_record(&record)?;
    println!("ok: {}", record.derived_filename());
    Ok(())
}

async fn run_save(base_url: &str, file: &Path, mode: SaveMode) -> Result<(), CliError> {
    let mut record = read_record(file)?;
    if mode.requires_validation() {
        check_record(&record)?;
    }
    if record.filename.is_none() {
        record.filename = Some(record.derived_filename());
    }

    let outcome: SaveOutcome = post_json(&format!("{base_url}{}", mode.endpoint()), &record).await?;
    println!("{}", outcome.summary());
    if outcome.is_success() {
        Ok(())
    } else {
        Err(CliError::SaveIncomplete(outcome.summary()))
    }
}

fn build_query(args: &QueryArgs) -> Result<ReportQuery, CliError> {
    let query = ReportQuery {
        patient_id: args.patient_id.clone(),
        patient_name: args.patient_name.clone(),
        date_from: args.date_from.clone(),
        date_to: args.date_to.clone(),
    }
    .trimmed();
    if !query.has_date_bound() {
        return Err(CliError::MissingDateBound);
    }
    Ok(query)
}

/// Validate a record by loading it into a staging form.
fn check_record(record: &StagingRecord) -> Result<(), ValidationError> {
    let mut form = StagingForm::default();
    form.apply_record(record);
    form.validate()
}

fn read_record(path: &Path) -> Result<StagingRecord, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::ReadFile { path: path.to_owned(), source })?;
    Ok(StagingRecord::from_json(&raw)?)
}

/// POST `body` as JSON and decode the reply. A save that failed locally still
/// answers with an outcome body, so error statuses are decoded when possible.
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, CliError>
where
    B: serde::Serialize + ?Sized,
    T: serde::de::DeserializeOwned,
{
    let response = reqwest::Client::new().post(url).json(body).send().await?;
    let status = response.status();
    let text = response.text().await?;
    match serde_json::from_str::<T>(&text) {
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => Err(CliError::ServerError { status: status.as_u16(), message: text }),
        Err(e) => Err(CliError::InvalidJson(e)),
    }
}

fn format_row(row: &ReportRow) -> String {
    [
        row.created_at.as_str(),
        row.record_id.as_str(),
        row.patient_name.as_str(),
        row.tumor_location.as_str(),
        row.tumor_size_cm.as_str(),
        row.t_stage.as_str(),
        row.n_stage.as_str(),
        row.m_stage.as_str(),
        row.lung_rads_category.as_str(),
    ]
    .join("\t")
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
