//! notegraph CLI entrypoint

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell as ClapShell};
use std::io::Write;
use std::sync::Arc;

use notegraph::{build_schema, MemoryStore};

mod cli;
use cli::*;

// ══════════════════════════════════════════════════════════════════════════════
// MAIN
// ══════════════════════════════════════════════════════════════════════════════

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.global.log_level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    };
    std::env::set_var("RUST_LOG", log_level);
    tracing_subscriber::fmt::init();

    let quiet = cli.global.quiet;

    // The sole source of truth for the process lifetime
    let store = Arc::new(MemoryStore::with_fixtures());

    match cli.command {
        Commands::Serve { host, port } => {
            handle_serve(host, port, store, quiet).await?;
        }

        Commands::Query {
            query,
            variables,
            pretty,
        } => {
            handle_query(query, variables, pretty, store).await?;
        }

        Commands::Schema { output } => {
            handle_schema(output, store)?;
        }

        Commands::Completions { shell } => {
            let clap_shell = match shell {
                Shell::Bash => ClapShell::Bash,
                Shell::Zsh => ClapShell::Zsh,
                Shell::Fish => ClapShell::Fish,
                Shell::Elvish => ClapShell::Elvish,
                Shell::PowerShell => ClapShell::PowerShell,
            };
            let mut cmd = Cli::command();
            generate(clap_shell, &mut cmd, "note-cli", &mut std::io::stdout());
            std::io::stdout().flush()?;
        }
    }

    Ok(())
}

// ══════════════════════════════════════════════════════════════════════════════
// COMMAND HANDLERS
// ══════════════════════════════════════════════════════════════════════════════

async fn handle_serve(host: String, port: u16, store: Arc<MemoryStore>, quiet: bool) -> Result<()> {
    use async_graphql::http::GraphiQLSource;
    use axum::{
        extract::Query,
        response::{Html, IntoResponse},
        routing::get,
        Json, Router,
    };

    let schema = build_schema(store);

    // GraphQL POST handler
    let schema_post = schema.clone();
    let graphql_post = move |Json(request): Json<async_graphql::Request>| {
        let schema = schema_post.clone();
        async move {
            let response = schema.execute(request).await;
            Json(response)
        }
    };

    // Query-string form of a GraphQL request (GET convention)
    #[derive(serde::Deserialize)]
    struct GetRequest {
        query: Option<String>,
        variables: Option<String>,
        #[serde(rename = "operationName")]
        operation_name: Option<String>,
    }

    // GET executes a query-string request, or serves GraphiQL when no
    // query parameter is present (a browser visiting the endpoint)
    let schema_get = schema.clone();
    let graphql_get = move |Query(params): Query<GetRequest>| {
        let schema = schema_get.clone();
        async move {
            let Some(query) = params.query else {
                return Html(GraphiQLSource::build().endpoint("/graphql").finish())
                    .into_response();
            };

            let mut request = async_graphql::Request::new(query);
            if let Some(vars) = params.variables {
                if let Ok(json) = serde_json::from_str::<serde_json::Value>(&vars) {
                    request = request.variables(async_graphql::Variables::from_json(json));
                }
            }
            if let Some(op) = params.operation_name {
                request = request.operation_name(op);
            }

            Json(schema.execute(request).await).into_response()
        }
    };

    let health_handler = || async { "OK" };

    let app = Router::new()
        .route(
            "/graphql",
            axum::routing::post(graphql_post).get(graphql_get),
        )
        .route("/health", get(health_handler));

    let addr = format!("{}:{}", host, port);
    if !quiet {
        println!("Listening on http://{}/graphql", addr);
        println!("GraphiQL explorer at http://{}/graphql", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn handle_query(
    query: String,
    variables: Option<String>,
    pretty: bool,
    store: Arc<MemoryStore>,
) -> Result<()> {
    let schema = build_schema(store);

    let query_str = if let Some(path) = query.strip_prefix('@') {
        std::fs::read_to_string(path)?
    } else {
        query
    };

    let mut request = async_graphql::Request::new(query_str);

    if let Some(vars) = variables {
        let vars: serde_json::Value = serde_json::from_str(&vars)?;
        request = request.variables(async_graphql::Variables::from_json(vars));
    }

    let response = schema.execute(request).await;
    let output = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    Ok(())
}

fn handle_schema(output: String, store: Arc<MemoryStore>) -> Result<()> {
    let schema = build_schema(store);
    let sdl = schema.sdl();
    if output == "-" {
        println!("{}", sdl);
    } else {
        std::fs::write(&output, sdl)?;
        println!("Schema written to {}", output);
    }
    Ok(())
}
