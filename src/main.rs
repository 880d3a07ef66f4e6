
use std::collections::BTreeMap;

use clap::{Args, Parser, Subcommand};
use dealermate_client::config::resolve_api_base;
use dealermate_client::net::types::{AssistRequest, FilterSearchRequest};
use dealermate_client::{ApiClient, ApiError, AuthStore, ClientConfig, Profile, RequestOptions};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing credentials; pass --employee-id/--password or set DEALERMATE_EMPLOYEE_ID/DEALERMATE_PASSWORD")]
    MissingCredentials,
    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),
    #[error("invalid header argument `{0}` (expected NAME:VALUE)")]
    InvalidHeaderArg(String),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "dealermate", about = "DealerMate API client")]
struct Cli {
    /// Backend base URL; empty falls back to http://localhost:8001.
    #[arg(long, env = "DEALERMATE_API_BASE")]
    api_base: Option<String>,

    #[arg(long, env = "DEALERMATE_EMPLOYEE_ID")]
    employee_id: Option<String>,

    #[arg(long, env = "DEALERMATE_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and print the profile.
    Login,
    /// List your most recently updated deals.
    Deals,
    Questions(QuestionsCommand),
    Filters(FiltersCommand),
    /// Ask the sales assistant.
    Assist {
        message: String,
        #[arg(long)]
        deal_id: Option<i64>,
    },
    /// Send an arbitrary request through the dispatcher.
    Request(RawRequestArgs),
}

#[derive(Args, Debug)]
struct QuestionsCommand {
    #[command(subcommand)]
    command: QuestionsSubcommand,
}

#[derive(Subcommand, Debug)]
enum QuestionsSubcommand {
    List,
    Add { text: String },
    Rm { id: i64 },
}

#[derive(Args, Debug)]
struct FiltersCommand {
    #[command(subcommand)]
    command: FiltersSubcommand,
}

#[derive(Subcommand, Debug)]
enum FiltersSubcommand {
    Options,
    Search {
        #[arg(long)]
        query: Option<String>,
        /// JSON object of filter values.
        #[arg(long)]
        filters: Option<String>,
        #[arg(long, default_value_t = 50)]
        top_k: u32,
    },
}

#[derive(Args, Debug)]
struct RawRequestArgs {
    method: String,
    path: String,
    /// JSON request body.
    #[arg(long)]
    data: Option<String>,
    /// Extra header as NAME:VALUE; repeatable.
    #[arg(long = "header", short = 'H')]
    headers: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(base) = cli.api_base.as_deref() {
        config.api_base = resolve_api_base(Some(base));
    }
    let client = ApiClient::new(config, AuthStore::new())?;
    let credentials = cli.employee_id.as_deref().zip(cli.password.as_deref());

    match cli.command {
        Command::Request(args) => {
            if let Some((id, pw)) = credentials {
                client.login(id, pw).await?;
            }
            run_raw_request(&client, args).await
        }
        command => {
            let (id, pw) = credentials.ok_or(CliError::MissingCredentials)?;
            let profile = client.login(id, pw).await?;
            run_command(&client, command, &profile).await
        }
    }
}

async fn run_command(client: &ApiClient, command: Command, profile: &Profile) -> Result<(), CliError> {
    match command {
        Command::Login => print_json(profile),
        Command::Deals => print_json(&client.list_deals().await?),
        Command::Questions(questions) => run_questions(client, questions).await,
        Command::Filters(filters) => run_filters(client, filters).await,
        Command::Assist { message, deal_id } => {
            let resp = client.assist(&AssistRequest { deal_id, message }).await?;
            print_json(&resp)
        }
        Command::Request(args) => run_raw_request(client, args).await,
    }
}

async fn run_questions(client: &ApiClient, questions: QuestionsCommand) -> Result<(), CliError> {
    match questions.command {
        QuestionsSubcommand::List => print_json(&client.list_quick_questions().await?),
        QuestionsSubcommand::Add { text } => print_json(&client.create_quick_question(&text).await?),
        QuestionsSubcommand::Rm { id } => print_json(&client.delete_quick_question(id).await?),
    }
}

async fn run_filters(client: &ApiClient, filters: FiltersCommand) -> Result<(), CliError> {
    match filters.command {
        FiltersSubcommand::Options => print_json(&client.filter_options().await?),
        FiltersSubcommand::Search { query, filters, top_k } => {
            let filters = match filters {
                Some(raw) => serde_json::from_str::<Map<String, Value>>(&raw)?,
                None => Map::new(),
            };
            let search = FilterSearchRequest { query, filters, top_k };
            print_json(&client.search_listings(&search).await?)
        }
    }
}

async fn run_raw_request(client: &ApiClient, args: RawRequestArgs) -> Result<(), CliError> {
    let method = reqwest::Method::from_bytes(args.method.to_ascii_uppercase().as_bytes())
        .map_err(|_| CliError::InvalidMethod(args.method.clone()))?;

    let mut opts = RequestOptions::default().method(method);
    opts.headers = parse_header_args(&args.headers)?;
    if let Some(data) = args.data {
        opts = opts.body(serde_json::from_str::<Value>(&data)?);
    }

    let value: Value = client.request(&args.path, opts).await?;
    print_json(&value)
}

fn parse_header_args(raw: &[String]) -> Result<BTreeMap<String, String>, CliError> {
    raw.iter()
        .map(|arg| {
            let (name, value) = arg
                .split_once(':')
                .ok_or_else(|| CliError::InvalidHeaderArg(arg.clone()))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(CliError::InvalidHeaderArg(arg.clone()));
            }
            Ok((name.to_owned(), value.trim().to_owned()))
        })
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
