//! This crate contains the fullstack server functions of linkshort.
#[cfg(feature = "server")]
mod cli;
#[cfg(feature = "server")]
pub mod registry;

pub mod link_api;

#[cfg(feature = "server")]
use dioxus::logger::tracing::{error, info};

#[cfg(feature = "server")]
pub fn launch_linkshort(app: fn() -> Result<dioxus::prelude::VNode, dioxus::prelude::RenderError>) {
    if let Err(e) = dioxus::logger::init(dioxus::logger::tracing::Level::INFO) {
        eprintln!("Failed to initialize the logger: {e}");
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("\nError: failed to start the runtime: {e}");
            std::process::exit(1);
        }
    };
    runtime.block_on(async move {
        match cli::setup() {
            Ok(Some(server_config)) => {
                println!(
                    "Linkshort server started:\n\tOpen: http://{}:{}/\n\tShort links: {}",
                    server_config.internal_ip,
                    server_config.port,
                    server_config.site.short_link("<slug>")
                );
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        println!("Received Ctrl+C, shutting down server...");
                    }
                    result = launch_server(app, server_config) => {
                        if let Err(e) = result {
                            error!("Server stopped: {e:#}");
                            std::process::exit(1);
                        }
                        println!("Server stopped");
                    }
                }
            }
            Ok(None) => {
                std::thread::sleep(std::time::Duration::from_millis(100));
                std::process::exit(0);
            }
            Err(e) => {
                eprintln!("\nError: {e:#}");
                std::thread::sleep(std::time::Duration::from_millis(100));
                std::process::exit(1);
            }
        }
    });
}

#[cfg(feature = "server")]
async fn launch_server(
    app: fn() -> Result<dioxus::prelude::VNode, dioxus::prelude::RenderError>,
    server_config: cli::ServerConfig,
) -> anyhow::Result<()> {
    use anyhow::Context as _;
    use axum::Router;
    use dioxus::prelude::DioxusRouterExt;
    use dioxus_fullstack::ServeConfigBuilder;

    info!(
        "Starting the server with {} registered links",
        registry::get_registry().len()
    );

    // Server side render the application, serve static assets, and register server functions
    let axum_route = Router::new().serve_dioxus_application(
        ServeConfigBuilder::default()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build ServeConfig: {e:?}"))?,
        app,
    );
    info!("Server configured");

    let address = format!("{}:{}", server_config.internal_ip, server_config.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    axum::serve(listener, axum_route.into_make_service())
        .await
        .context("The http server failed")?;
    Ok(())
}
