use dioxus::prelude::*;

use store::SuiteConfig;
use ui::{use_auth_session, use_toast_queue, Dashboard, Toaster};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Presentation settings, baked in at build time so the client and server agree.
const SUITE_TOML: &str = include_str!("../suite.toml");

fn main() {
    #[cfg(feature = "server")]
    {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                eprintln!("Failed to start tokio runtime: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = runtime.block_on(launch_server()) {
            tracing::error!("Server exited with error: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() -> Result<(), Box<dyn std::error::Error>> {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_sessions::cookie::{time, SameSite};
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let config = api::config::ServerConfig::from_env()?;

    // Initialize database pool
    let pool = api::db::get_pool().await?;

    // Run migrations
    api::db::MIGRATOR.run(pool).await?;

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(i64::from(
            config.session_ttl_days,
        ))));

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    let config = use_hook(|| SuiteConfig::from_toml_or_default(SUITE_TOML));
    let session = use_auth_session();
    let toasts = use_toast_queue();
    let default_duration_ms = config.toasts.default_duration_ms;

    rsx! {
        Dashboard { session: session, toasts: toasts, config: config }
        Toaster { queue: toasts, default_duration_ms: default_duration_ms }
    }
}
