//! Application state wiring: database, repositories, services and auth.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use brickdesk_core::catalog::{CatalogService, CatalogServiceTrait};
use brickdesk_core::conversations::{ConversationService, ConversationServiceTrait};
use brickdesk_core::leads::{LeadService, LeadServiceTrait};
use brickdesk_core::profiles::{NewProfile, ProfileService, ProfileServiceTrait, Role};
use brickdesk_core::settings::{SettingsService, SettingsServiceTrait};
use brickdesk_storage_sqlite as storage;
use brickdesk_storage_sqlite::db::spawn_writer;

use crate::auth::AuthManager;
use crate::config::Config;

pub struct AppState {
    pub profile_service: Arc<dyn ProfileServiceTrait>,
    pub lead_service: Arc<dyn LeadServiceTrait>,
    pub conversation_service: Arc<dyn ConversationServiceTrait>,
    pub catalog_service: Arc<dyn CatalogServiceTrait>,
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub auth: Arc<AuthManager>,
    pub http: reqwest::Client,
    pub instance_id: String,
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if std::env::var("BD_LOG_JSON").is_ok() {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Builds the full service graph against the configured SQLite database.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = storage::init(&config.db_path)?;
    let pool = storage::create_pool(&db_path)?;
    storage::run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    let profile_repo = Arc::new(storage::profiles::ProfileRepository::new(
        pool.clone(),
        writer.clone(),
    ));
    let lead_repo = Arc::new(storage::leads::LeadRepository::new(
        pool.clone(),
        writer.clone(),
    ));
    let conversation_repo = Arc::new(storage::conversations::ConversationRepository::new(
        pool.clone(),
        writer.clone(),
    ));
    let catalog_repo = Arc::new(storage::catalog::CatalogRepository::new(
        pool.clone(),
        writer.clone(),
    ));
    let settings_repo = Arc::new(storage::settings::SettingsRepository::new(
        pool.clone(),
        writer.clone(),
    ));

    let profile_service: Arc<dyn ProfileServiceTrait> =
        Arc::new(ProfileService::new(profile_repo));
    let lead_service: Arc<dyn LeadServiceTrait> = Arc::new(LeadService::new(lead_repo));
    let conversation_service: Arc<dyn ConversationServiceTrait> = Arc::new(
        ConversationService::new(conversation_repo, lead_service.clone()),
    );
    let catalog_service: Arc<dyn CatalogServiceTrait> = Arc::new(CatalogService::new(catalog_repo));
    let settings_service: Arc<dyn SettingsServiceTrait> =
        Arc::new(SettingsService::new(settings_repo));

    let instance_id = ensure_instance_id(settings_service.as_ref()).await?;

    let auth = Arc::new(AuthManager::new(&config.auth_secret)?);

    bootstrap_admin(config, profile_service.as_ref(), &auth).await?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    Ok(Arc::new(AppState {
        profile_service,
        lead_service,
        conversation_service,
        catalog_service,
        settings_service,
        auth,
        http,
        instance_id,
    }))
}

async fn ensure_instance_id(
    settings_service: &dyn SettingsServiceTrait,
) -> anyhow::Result<String> {
    if let Some(existing) = settings_service.get_setting_value("instance_id")? {
        if !existing.is_empty() {
            return Ok(existing);
        }
    }
    let id = uuid::Uuid::new_v4().to_string();
    settings_service.set_setting_value("instance_id", &id).await?;
    Ok(id)
}

/// Seeds the first admin account from the environment. Only runs against an
/// empty profile table so existing deployments are never touched.
async fn bootstrap_admin(
    config: &Config,
    profile_service: &dyn ProfileServiceTrait,
    auth: &AuthManager,
) -> anyhow::Result<()> {
    let (Some(email), Some(password)) = (
        config.bootstrap_admin_email.as_ref(),
        config.bootstrap_admin_password.as_ref(),
    ) else {
        return Ok(());
    };

    if profile_service.count_profiles()? > 0 {
        return Ok(());
    }

    let new_profile = NewProfile {
        id: None,
        email: email.clone(),
        password: password.clone(),
        full_name: "Administrator".to_string(),
        role: Role::Admin,
        phone: None,
    };
    new_profile.validate()?;
    let password_hash = auth
        .hash_password(password)
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let profile = profile_service
        .create_profile(new_profile, password_hash)
        .await?;
    tracing::info!("Bootstrapped admin profile {} ({})", profile.id, profile.email);
    Ok(())
}
