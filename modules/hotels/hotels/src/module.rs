//! Module declaration for the hotels module.

use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait as _;
use tracing::{debug, info};

use crate::auth::{JwtSessionValidator, TokenValidator};
use crate::config::HotelsConfig;
use crate::domain::service::HotelsService;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::{
    SeaOrmEnrollmentRepository, SeaOrmHotelRepository, SeaOrmSessionStore,
    SeaOrmTicketRepository,
};

/// Hotels module.
///
/// Owns the domain service and the token validator, both wired to one
/// database connection supplied by the host.
#[derive(Clone)]
pub struct HotelsModule {
    service: Arc<HotelsService>,
    validator: Arc<dyn TokenValidator>,
    enable_docs: bool,
}

impl HotelsModule {
    /// Wire repositories, service and auth on top of `db`.
    ///
    /// # Errors
    /// Fails when the configured JWT secret is empty.
    pub fn init(db: &DatabaseConnection, cfg: &HotelsConfig) -> anyhow::Result<Self> {
        info!("Initializing hotels module");
        debug!(
            token_leeway_seconds = cfg.token_leeway_seconds,
            enable_docs = cfg.enable_docs,
            "Loaded hotels config"
        );

        if cfg.jwt_secret.is_empty() {
            anyhow::bail!("hotels.jwt_secret must not be empty");
        }

        let service = Arc::new(HotelsService::new(
            Arc::new(SeaOrmEnrollmentRepository::new(db.clone())),
            Arc::new(SeaOrmTicketRepository::new(db.clone())),
            Arc::new(SeaOrmHotelRepository::new(db.clone())),
        ));
        let validator: Arc<dyn TokenValidator> = Arc::new(JwtSessionValidator::new(
            &cfg.jwt_secret,
            cfg.token_leeway_seconds,
            Arc::new(SeaOrmSessionStore::new(db.clone())),
        ));

        info!("Hotels module initialized");
        Ok(Self {
            service,
            validator,
            enable_docs: cfg.enable_docs,
        })
    }

    /// Apply pending schema migrations.
    ///
    /// # Errors
    /// Propagates the migrator's database error.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running hotels migrations");
        Migrator::up(db, None)
            .await
            .context("failed to run hotels migrations")?;
        Ok(())
    }

    #[must_use]
    pub fn service(&self) -> Arc<HotelsService> {
        Arc::clone(&self.service)
    }

    /// Mount the module's routes on `router`.
    #[must_use]
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering hotels REST routes");
        crate::api::rest::routes::register_routes(
            router,
            self.service(),
            Arc::clone(&self.validator),
            self.enable_docs,
        )
    }
}
