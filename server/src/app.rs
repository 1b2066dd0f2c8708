//! Core application

use std::fmt::Write;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::api::ApiServer;
use crate::core::banner;
use crate::core::cli::{self, CliConfig, Commands};
use crate::core::config::AppConfig;
use crate::core::constants::{DEBUG_LOG_FILTER, DEFAULT_LOG_FILTER, ENV_DEBUG, ENV_LOG};
use crate::core::shutdown::ShutdownService;
use crate::core::storage::AppStorage;
use crate::data::SqliteService;
use crate::domain::books::BookSchema;
use crate::domain::filters::{FilterError, parse_with_schema};

pub struct CoreApp {
    pub shutdown: ShutdownService,
    pub config: AppConfig,
    pub storage: AppStorage,
    pub database: Arc<SqliteService>,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();

        let (cli_config, command) = cli::parse();
        Self::init_logging(cli_config.debug);
        tracing::trace!(command = ?command, "Parsed command");

        match command {
            Some(Commands::Explain { filter }) => {
                let rendered = explain(&filter)?;
                println!("{}", rendered);
                Ok(())
            }
            Some(Commands::Start) | None => {
                let app = Self::init(&cli_config).await?;
                Self::start_server(app).await
            }
        }
    }

    async fn init(cli: &CliConfig) -> Result<Self> {
        let config = AppConfig::load(cli)?;
        let storage = AppStorage::init(&config).await?;

        let database = SqliteService::init(storage.database_path())
            .await
            .with_context(|| {
                format!(
                    "Failed to open database: {}",
                    storage.database_path().display()
                )
            })?;
        let database = Arc::new(database);
        let shutdown = ShutdownService::new(database.clone());

        Ok(Self {
            shutdown,
            config,
            storage,
            database,
        })
    }

    fn init_logging(debug: bool) {
        let default_filter = if debug || std::env::var(ENV_DEBUG).is_ok() {
            DEBUG_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        };

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| default_filter.to_string());

        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }

    async fn start_server(app: Self) -> Result<()> {
        // Install signal handlers before any blocking calls
        app.shutdown.install_signal_handlers();

        app.shutdown
            .register(
                app.database
                    .start_checkpoint_task(app.shutdown.subscribe()),
            )
            .await;

        banner::print_banner(
            &app.config.server.host,
            app.config.server.port,
            &app.storage.database_path().display().to_string(),
        );

        let server = ApiServer::new(app);
        let app = server.start().await?;
        app.shutdown.shutdown().await;

        Ok(())
    }
}

/// Parse a filter with the book schema and describe the SQL it renders to
pub fn explain(filter: &str) -> Result<String, FilterError> {
    let chain = parse_with_schema(filter, &BookSchema)?;
    let (fragment, params) = chain.render();

    let mut out = format!("WHERE {}", fragment);
    for (i, param) in params.iter().enumerate() {
        let _ = write!(out, "\n  ?{} = {:?}", i + 1, param);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_renders_fragment_and_params() {
        let out = explain("author_eq_William-Shakespeare_and_edition_ne_2").unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("WHERE author = ? AND edition <> ?"));
        assert_eq!(lines.next(), Some(r#"  ?1 = "William Shakespeare""#));
        assert_eq!(lines.next(), Some(r#"  ?2 = "2""#));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_explain_reports_filter_error() {
        let err = explain("colour_eq_red").unwrap_err();
        assert_eq!(err.to_string(), "invalid filter: Colour does not exist");
    }
}
