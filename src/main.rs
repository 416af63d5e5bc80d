use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use decision_helper::adapters::{
    postgres, read_draft_file, FileDraftStorage, InMemoryDecisionRepository,
    PostgresDecisionRepository,
};
use decision_helper::application::{
    GetSharedDecisionHandler, GetSharedDecisionQuery, ListDecisionsHandler, ListDecisionsQuery,
    SaveDecisionCommand, SaveDecisionHandler,
};
use decision_helper::config::{AppConfig, ConfigError};
use decision_helper::domain::analysis::KeywordWeighting;
use decision_helper::domain::decision::{DecisionError, DecisionReport};
use decision_helper::domain::foundation::{UserId, ValidationError};
use decision_helper::domain::sharing::SlugGenerator;
use decision_helper::ports::{DecisionRepository, DraftStorage, DraftStorageError};
use decision_helper::telemetry::{self, TelemetryError};

#[derive(Parser, Debug)]
#[command(
    name = "decision-helper",
    about = "Score options against weighted criteria and share the result",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a draft file and print the report as JSON
    Evaluate {
        /// YAML draft with options, criteria and scores
        draft: PathBuf,
    },
    /// Print a fresh share slug
    Slug {
        /// Slug length, clamped to 8..=12
        #[arg(long)]
        length: Option<usize>,
    },
    /// Show which criteria a context would emphasize
    Keywords {
        /// Free-text context, e.g. "요즘 너무 피곤해서"
        context: String,
    },
    /// Save a draft file as a decision
    Save(SaveArgs),
    /// List a user's saved decisions
    List {
        #[arg(long)]
        user: String,
    },
    /// Show a publicly shared decision
    Shared {
        slug: String,
    },
    /// Manage the per-user working draft
    Draft {
        #[command(subcommand)]
        command: DraftCommand,
    },
}

#[derive(Args, Debug)]
struct SaveArgs {
    draft: PathBuf,
    #[arg(long)]
    user: String,
    /// Publish under a share slug
    #[arg(long)]
    publish: bool,
}

#[derive(Subcommand, Debug)]
enum DraftCommand {
    /// Store a draft file as the user's working draft
    Put {
        #[arg(long)]
        user: String,
        file: PathBuf,
    },
    /// Print the user's working draft as YAML
    Show {
        #[arg(long)]
        user: String,
    },
    /// Discard the user's working draft
    Clear {
        #[arg(long)]
        user: String,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Draft(#[from] DraftStorageError),

    #[error("{}", .0.message())]
    Decision(#[from] DecisionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("output encoding failed: {0}")]
    Encode(String),
}

#[derive(Debug, Serialize)]
struct SavedOutput<'a> {
    id: String,
    share_slug: Option<String>,
    is_public: bool,
    report: &'a DecisionReport,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config
        .validate()
        .map_err(|e| CliError::Config(ConfigError::ValidationFailed(e)))?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Evaluate { draft } => {
            let draft = read_draft_file(&draft).await?;
            draft.validate()?;
            print_json(&draft.evaluate())
        }
        Command::Slug { length } => {
            let mut generator = SlugGenerator::from_config(&config.sharing);
            if let Some(length) = length {
                generator = generator.with_length(length);
            }
            println!("{}", generator.generate());
            Ok(())
        }
        Command::Keywords { context } => print_json(&KeywordWeighting::matched_criteria(&context)),
        Command::Save(args) => {
            let repository = repository(&config).await?;
            let draft = read_draft_file(&args.draft).await?;
            let handler =
                SaveDecisionHandler::new(repository, SlugGenerator::from_config(&config.sharing));
            let result = handler
                .handle(SaveDecisionCommand {
                    user_id: UserId::new(args.user)?,
                    draft,
                    publish: args.publish,
                })
                .await?;
            print_json(&SavedOutput {
                id: result.decision.id().to_string(),
                share_slug: result.decision.share_slug().map(|slug| slug.to_string()),
                is_public: result.decision.is_public(),
                report: &result.report,
            })
        }
        Command::List { user } => {
            let handler = ListDecisionsHandler::new(repository(&config).await?);
            let rows = handler
                .handle(ListDecisionsQuery {
                    user_id: UserId::new(user)?,
                })
                .await?;
            print_json(&rows)
        }
        Command::Shared { slug } => {
            let handler = GetSharedDecisionHandler::new(repository(&config).await?);
            let view = handler.handle(GetSharedDecisionQuery { slug }).await?;
            print_json(&view.report)
        }
        Command::Draft { command } => {
            let storage = FileDraftStorage::new(&config.drafts.directory);
            run_draft(&storage, command).await
        }
    }
}

async fn run_draft(storage: &dyn DraftStorage, command: DraftCommand) -> Result<(), CliError> {
    match command {
        DraftCommand::Put { user, file } => {
            let draft = read_draft_file(&file).await?;
            storage.save_draft(&UserId::new(user)?, &draft).await?;
            info!(file = %file.display(), "draft stored");
            Ok(())
        }
        DraftCommand::Show { user } => match storage.load_draft(&UserId::new(user)?).await? {
            Some(draft) => {
                let yaml = serde_yaml::to_string(&draft)
                    .map_err(|e| CliError::Encode(e.to_string()))?;
                print!("{yaml}");
                Ok(())
            }
            None => {
                println!("no draft");
                Ok(())
            }
        },
        DraftCommand::Clear { user } => {
            storage.clear_draft(&UserId::new(user)?).await?;
            Ok(())
        }
    }
}

async fn repository(config: &AppConfig) -> Result<Arc<dyn DecisionRepository>, CliError> {
    match &config.database {
        Some(database) => {
            let pool = postgres::connect(database).await?;
            Ok(Arc::new(PostgresDecisionRepository::new(pool)))
        }
        None => {
            warn!("no database configured; decisions will not outlive this process");
            Ok(Arc::new(InMemoryDecisionRepository::new()))
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| CliError::Encode(e.to_string()))?;
    println!("{json}");
    Ok(())
}
