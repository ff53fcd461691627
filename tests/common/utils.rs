use secrecy::ExposeSecret;
use serde_json::{json, Value};
use sqlx::{PgPool, PgConnection, Connection, Executor};
use std::net::TcpListener;
use uuid::Uuid;
use once_cell::sync::Lazy;
use reqwest::Client;

use tipping_backend::run;
use tipping_backend::config::settings::{get_config, DatabaseSettings, get_jwt_settings};
use tipping_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp{
    pub address: String,
    pub db_pool: PgPool
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    configuration.database.db_url = None;
    let connection_pool = configure_db(&configuration.database)
        .await;
    let jwt_settings = get_jwt_settings(&configuration);
    let server = run(
        listener,
        connection_pool.clone(),
        jwt_settings,
        configuration.football_api,
    )
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);
    TestApp {
        address,
        db_pool: connection_pool
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(
            &config.connection_string_without_db()
        )
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

/// Register `username` and return a bearer token for it.
pub async fn register_and_login(app_address: &str, username: &str) -> String {
    let client = Client::new();
    let password = "password123";

    let register_response = client
        .post(&format!("{}/register_user", app_address))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .expect("Failed to register user.");
    assert!(register_response.status().is_success());

    let login_response = client
        .post(&format!("{}/login", app_address))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .expect("Failed to execute login request.");

    let login_response: Value = login_response.json().await.expect("Failed to parse login response");
    login_response["data"]["token"]
        .as_str()
        .expect("No token in response")
        .to_string()
}

/// The `admin` username is registered with admin rights.
pub async fn create_admin_and_login(app_address: &str) -> String {
    register_and_login(app_address, "admin").await
}

pub async fn make_authenticated_request(
    client: &Client,
    method: reqwest::Method,
    url: &str,
    token: &str,
    body: Option<Value>,
) -> reqwest::Response {
    let mut request = client
        .request(method, url)
        .header("Authorization", format!("Bearer {}", token));

    if let Some(body) = body {
        request = request.json(&body);
    }

    request.send().await.expect("Failed to execute request.")
}

/// One fixture item in the football API's wire shape.
pub fn fixture_payload(
    id: i64,
    round: i32,
    kickoff: &str,
    status: &str,
    goals: (Option<i32>, Option<i32>),
) -> Value {
    json!({
        "fixture": { "id": id, "date": kickoff, "status": { "short": status } },
        "teams": {
            "home": { "id": 40, "name": "Liverpool" },
            "away": { "id": 50, "name": "Manchester City" }
        },
        "goals": { "home": goals.0, "away": goals.1 },
        "league": { "round": format!("Regular Season - {}", round) }
    })
}

/// Create the season and ingest `fixtures` into it as the admin.
pub async fn seed_season(app: &TestApp, admin_token: &str, season: &str, fixtures: Vec<Value>) -> Value {
    let client = Client::new();

    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/seasons", app.address),
        admin_token,
        Some(json!({ "season": season })),
    )
    .await;
    assert_eq!(response.status().as_u16(), 201);

    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/seasons/{}/ingest/fixtures", app.address, season),
        admin_token,
        Some(json!({ "response": fixtures })),
    )
    .await;
    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse sync report")
}
