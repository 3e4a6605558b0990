use {
    crate::{
        api::{
            self,
            ApiState,
        },
        config::RunOptions,
        kernel::db::DB,
        user,
    },
    anyhow::{
        anyhow,
        Result,
    },
    sqlx::postgres::PgPoolOptions,
    std::{
        sync::{
            atomic::{
                AtomicBool,
                Ordering,
            },
            Arc,
        },
        time::Duration,
    },
};

const DATABASE_MAX_CONNECTIONS: u32 = 10;

pub async fn start_server(run_options: RunOptions) -> Result<()> {
    tokio::spawn(async move {
        tracing::info!("Registered shutdown signal handler...");
        tokio::signal::ctrl_c().await.unwrap();
        tracing::info!("Shut down signal received, waiting for tasks...");
        SHOULD_EXIT.store(true, Ordering::Release);
    });

    let pool: DB = PgPoolOptions::new()
        .max_connections(DATABASE_MAX_CONNECTIONS)
        .connect(&run_options.server.database_url)
        .await
        .map_err(|err| anyhow!("Failed to connect to database: {:?}", err))?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let user_service =
        user::service::Service::new(Arc::new(user::repository::Repository::new(pool)));

    let state = Arc::new(ApiState { user_service });
    api::start_api(run_options, state).await
}

// A static exit flag to indicate to running threads that we're shutting down.
// This is used to gracefully shut down the application. Everything else is
// wired explicitly at startup, so the process carries no other global state.
pub(crate) static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);
pub const EXIT_CHECK_INTERVAL: Duration = Duration::from_secs(1);
