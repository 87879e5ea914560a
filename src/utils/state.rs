use sqlx::PgPool;

use crate::services::ergast::ErgastClient;
use crate::utils::config::Config;

pub struct AppState {
    pub db_pool: PgPool,
    pub config: Config,
    pub ergast: ErgastClient,
}
