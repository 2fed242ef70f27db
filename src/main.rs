use surgadmin::app::AdminApp;
use surgadmin::config::ApiConfig;
use surgadmin::net::ApiClient;
use surgadmin::notify::LogNotifier;
use surgadmin::session::MemoryStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let _ = dotenvy::dotenv();

    let config = ApiConfig::from_env().expect("SURGADMIN_API_BASE_URL required");
    let email = std::env::var("SURGADMIN_EMAIL").expect("SURGADMIN_EMAIL required");
    let password = std::env::var("SURGADMIN_PASSWORD").expect("SURGADMIN_PASSWORD required");

    let api = ApiClient::new(&config).expect("HTTP client build failed");
    let mut app = AdminApp::new(api, MemoryStore::default(), LogNotifier);

    app.login(&email, &password).await;
    if !app.state.auth.is_authenticated() {
        tracing::error!("login failed, aborting");
        std::process::exit(1);
    }

    app.load_doctors().await;
    app.load_surgeries().await;
    app.load_dashboard().await;

    tracing::info!(
        doctors = app.state.doctors.doctors.len(),
        surgeries = app.state.surgeries.surgeries.len(),
        "records loaded"
    );
    if let Some(data) = app.state.dashboard.data.value() {
        tracing::info!(
            total_doctors = data.summary.total_doctors,
            total_surgeries = data.summary.total_surgeries,
            active_patients = data.summary.active_patients,
            "dashboard summary"
        );
    } else if let Some(error) = app.state.dashboard.data.error() {
        tracing::warn!(%error, "dashboard load failed");
    }

    app.logout().await;
}
