use anyhow::Result;
use blog_core::application::{
    ports::{
        ClockPort, ImageStorePort, PasswordHasherPort, SlugGeneratorPort, TokenManagerPort,
    },
    services::ApplicationServices,
};
use blog_core::config::AppConfig;
use blog_core::domain::{
    post::{PostReadRepository, PostWriteRepository},
    user::UserRepository,
};
use blog_core::infrastructure::{
    database,
    images::{CloudinaryImageStore, DisabledImageStore},
    repositories::{
        PostgresPostReadRepository, PostgresPostWriteRepository, PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::JwtTokenManager},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use blog_core::presentation::http::{
    routes::build_router_with_rate_limiter,
    state::{HttpSettings, HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(environment = ?config.environment(), "configuration loaded");

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(PostgresPostWriteRepository::new(pool.clone()));
    let post_read_repo: Arc<dyn PostReadRepository> =
        Arc::new(PostgresPostReadRepository::new(pool));

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let password_hasher: Arc<PasswordHasherPort> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<TokenManagerPort> = Arc::new(JwtTokenManager::new(
        config.jwt_secret(),
        config.token_ttl_secs(),
        Arc::clone(&clock),
    ));
    let image_store: Arc<ImageStorePort> = match config.cloudinary() {
        Some(cloudinary) => Arc::new(CloudinaryImageStore::new(
            cloudinary.clone(),
            Arc::clone(&clock),
        )?),
        None => {
            tracing::warn!("cloudinary is not configured, image uploads will fail");
            Arc::new(DisabledImageStore)
        }
    };
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        post_write_repo,
        post_read_repo,
        password_hasher,
        token_manager,
        image_store,
        clock,
        slugger,
    ));

    let state = HttpState {
        services,
        settings: Arc::new(HttpSettings {
            secure_cookies: !config.environment().is_development(),
            allowed_origins: config.allowed_origins().to_vec(),
        }),
    };

    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,sqlx=warn"));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
