use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use primekit_core::{
    assessment::{AssessmentService, AssessmentServiceTrait},
    budget::{BudgetService, BudgetServiceTrait},
    layers::{LayersService, LayersServiceTrait},
    planning::{PlanningService, PlanningServiceTrait},
    records::{RecordsService, RecordsServiceTrait},
    settings::{UserSettingsService, UserSettingsServiceTrait},
    summary::{SummaryService, SummaryServiceTrait},
    tracker::{TrackerService, TrackerServiceTrait},
    users::{SubscriberService, SubscriberServiceTrait, UsersService, UsersServiceTrait},
};
use primekit_storage_sqlite::{
    assessment::AssessmentRepository,
    budget::BudgetRepository,
    db::{self, write_actor},
    layers::LayersRepository,
    planning::PlanningRepository,
    records::RecordsRepository,
    settings::UserSettingsRepository,
    tracker::TrackerRepository,
    users::{SubscriberRepository, UsersRepository},
};

use crate::auth::AuthManager;
use crate::config::Config;

pub struct AppState {
    pub users_service: Arc<dyn UsersServiceTrait>,
    pub subscriber_service: Arc<dyn SubscriberServiceTrait>,
    pub records_service: Arc<dyn RecordsServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub layers_service: Arc<dyn LayersServiceTrait>,
    pub planning_service: Arc<dyn PlanningServiceTrait>,
    pub summary_service: Arc<dyn SummaryServiceTrait>,
    pub settings_service: Arc<dyn UserSettingsServiceTrait>,
    pub assessment_service: Arc<dyn AssessmentServiceTrait>,
    pub tracker_service: Arc<dyn TrackerServiceTrait>,
    pub db_path: String,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("PK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    // Keep DATABASE_URL aligned with PK_DB_PATH so diesel tooling sees the same file
    std::env::set_var("DATABASE_URL", &config.db_path);
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let users_repo = Arc::new(UsersRepository::new(pool.clone(), writer.clone()));
    let users_service: Arc<dyn UsersServiceTrait> = Arc::new(UsersService::new(users_repo));

    let subscriber_repo = Arc::new(SubscriberRepository::new(pool.clone(), writer.clone()));
    let subscriber_service: Arc<dyn SubscriberServiceTrait> =
        Arc::new(SubscriberService::new(subscriber_repo));

    let settings_repo = Arc::new(UserSettingsRepository::new(pool.clone(), writer.clone()));
    let settings_service: Arc<dyn UserSettingsServiceTrait> =
        Arc::new(UserSettingsService::new(settings_repo));

    let records_repo = Arc::new(RecordsRepository::new(pool.clone(), writer.clone()));
    let records_service: Arc<dyn RecordsServiceTrait> =
        Arc::new(RecordsService::new(records_repo.clone()));

    let budget_repo = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let budget_service: Arc<dyn BudgetServiceTrait> =
        Arc::new(BudgetService::new(budget_repo.clone()));

    let layers_repo = Arc::new(LayersRepository::new(pool.clone(), writer.clone()));
    let layers_service: Arc<dyn LayersServiceTrait> =
        Arc::new(LayersService::new(layers_repo.clone()));

    let planning_repo = Arc::new(PlanningRepository::new(pool.clone(), writer.clone()));
    let planning_service: Arc<dyn PlanningServiceTrait> = Arc::new(PlanningService::new(
        planning_repo.clone(),
        budget_service.clone(),
    ));

    let summary_service: Arc<dyn SummaryServiceTrait> = Arc::new(SummaryService::new(
        records_repo.clone(),
        budget_repo.clone(),
        settings_service.clone(),
    ));

    let assessment_repo = Arc::new(AssessmentRepository::new(pool.clone(), writer.clone()));
    let assessment_service: Arc<dyn AssessmentServiceTrait> =
        Arc::new(AssessmentService::new(assessment_repo));

    let tracker_repo = Arc::new(TrackerRepository::new(pool.clone(), writer.clone()));
    let tracker_service: Arc<dyn TrackerServiceTrait> = Arc::new(TrackerService::new(
        tracker_repo,
        summary_service.clone(),
        records_repo,
        budget_repo,
        layers_repo,
        planning_repo,
    ));

    let auth = Arc::new(AuthManager::new(&config.auth));

    Ok(Arc::new(AppState {
        users_service,
        subscriber_service,
        records_service,
        budget_service,
        layers_service,
        planning_service,
        summary_service,
        settings_service,
        assessment_service,
        tracker_service,
        db_path,
        auth,
    }))
}
