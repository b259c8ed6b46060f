use talentos_backoffice::application::{
    ports::{auth::AuthProvider, storage::ObjectStorage, time::Clock, util::SlugGenerator},
    services::{ApplicationServices, ServiceDependencies},
};
use talentos_backoffice::config::AppConfig;
use talentos_backoffice::infrastructure::{
    database,
    repositories::{
        PostgresContactRepository, PostgresMaterialRepository, PostgresSliderRepository,
        PostgresTalentReadRepository, PostgresTalentWriteRepository,
    },
    supabase::{SupabaseAuthProvider, SupabaseClient, SupabaseStorage},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use talentos_backoffice::presentation::http::{
    routes::build_router_with_rate_limiter,
    state::{HttpSettings, HttpState},
};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    if config.run_migrations() {
        database::run_migrations(&pool).await?;
        tracing::info!("migrations applied");
    }

    let supabase = SupabaseClient::new(
        config.supabase_url(),
        config.supabase_service_key().to_string(),
        config.supabase_anon_key().map(str::to_string),
    );
    let storage: Arc<dyn ObjectStorage> = Arc::new(SupabaseStorage::new(supabase.clone()));
    let auth_provider: Arc<dyn AuthProvider> = Arc::new(SupabaseAuthProvider::new(supabase));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        talent_write_repo: Arc::new(PostgresTalentWriteRepository::new(pool.clone())),
        talent_read_repo: Arc::new(PostgresTalentReadRepository::new(pool.clone())),
        contact_repo: Arc::new(PostgresContactRepository::new(pool.clone())),
        material_repo: Arc::new(PostgresMaterialRepository::new(pool.clone())),
        slider_repo: Arc::new(PostgresSliderRepository::new(pool)),
        storage,
        auth_provider,
        clock,
        slugger,
    }));

    let state = HttpState {
        services,
        settings: HttpSettings {
            allowed_origins: config.allowed_origins().to_vec(),
            max_request_bytes: config.max_request_bytes(),
            cookie_secure: config.session_cookie_secure(),
        },
    };

    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
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
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
