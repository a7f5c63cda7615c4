use crate::file_access::domain::model::enums::geofence_enforcement::GeofenceEnforcement;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_admin_database: String,
    pub geofence_enforcement: GeofenceEnforcement,
    pub office_utc_offset_minutes: i32,
    pub access_log_max_limit: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Connection settings fall back to local defaults. Access policy settings
    /// that are present but malformed are rejected instead of defaulted.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let geofence_enforcement = match lookup("GEOFENCE_ENFORCEMENT") {
            Some(raw) => raw
                .parse::<GeofenceEnforcement>()
                .map_err(|e| format!("GEOFENCE_ENFORCEMENT: {e}"))?,
            None => GeofenceEnforcement::PresenceOnly,
        };

        let office_utc_offset_minutes = match lookup("OFFICE_UTC_OFFSET_MINUTES") {
            Some(raw) => {
                let minutes: i32 = raw.trim().parse().map_err(|_| {
                    format!("OFFICE_UTC_OFFSET_MINUTES: '{raw}' is not a whole number of minutes")
                })?;
                if minutes.abs() >= 24 * 60 {
                    return Err(format!(
                        "OFFICE_UTC_OFFSET_MINUTES: {minutes} must be within +/-1439"
                    ));
                }
                minutes
            }
            None => 0,
        };

        let access_log_max_limit = match lookup("ACCESS_LOG_MAX_LIMIT") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    return Err(format!(
                        "ACCESS_LOG_MAX_LIMIT: '{raw}' must be a positive integer"
                    ));
                }
            },
            None => 1000,
        };

        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "8081".to_string())
                .parse()
                .unwrap_or(8081),
            postgres_host: lookup("POSTGRES_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            postgres_port: lookup("POSTGRES_PORT")
                .unwrap_or_else(|| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: lookup("POSTGRES_USER").unwrap_or_else(|| "postgres".to_string()),
            postgres_password: lookup("POSTGRES_PASSWORD").unwrap_or_else(|| "admin".to_string()),
            postgres_admin_database: lookup("POSTGRES_ADMIN_DATABASE")
                .unwrap_or_else(|| "geocrypt".to_string()),
            geofence_enforcement,
            office_utc_offset_minutes,
            access_log_max_limit,
        })
    }

    pub fn admin_database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_admin_database
        )
    }
}
