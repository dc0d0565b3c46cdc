use entity::payment::{PaymentCategory, PaymentMethod, PaymentStatus};
use sea_orm::ActiveEnum;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "http://localhost:3000";
const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 1440;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// `None` when `JWT_SECRET` is unset; a random per-process secret is used instead.
    pub jwt_secret: Option<String>,
    pub jwt_expiration_minutes: i64,

    pub cors_allowed_origins: Vec<String>,
    pub static_dir: Option<String>,

    pub defaults: Defaults,
}

/// Values applied when a request omits them.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub payment_category: PaymentCategory,
    /// Session count of a counted pass whose product has no usage count.
    pub product_total_count: i32,
    /// Usage count given to new count-based products that omit one.
    pub product_usage_count: i32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Completed,
            payment_category: PaymentCategory::Product,
            product_total_count: 10,
            product_usage_count: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let fallback = Defaults::default();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: optional("JWT_SECRET"),
            jwt_expiration_minutes: parse_or("JWT_EXPIRATION_MINUTES", DEFAULT_JWT_EXPIRATION_MINUTES)?,
            cors_allowed_origins: optional("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGINS.to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            static_dir: optional("STATIC_DIR"),
            defaults: Defaults {
                payment_method: enum_or("DEFAULT_PAYMENT_METHOD", fallback.payment_method)?,
                payment_status: enum_or("DEFAULT_PAYMENT_STATUS", fallback.payment_status)?,
                payment_category: enum_or("DEFAULT_PAYMENT_CATEGORY", fallback.payment_category)?,
                product_total_count: parse_or(
                    "DEFAULT_PRODUCT_TOTAL_COUNT",
                    fallback.product_total_count,
                )?,
                product_usage_count: parse_or(
                    "DEFAULT_PRODUCT_USAGE_COUNT",
                    fallback.product_usage_count,
                )?,
            },
        })
    }
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match optional(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
    }
}

/// Parses a string-backed enum by its stored value, e.g. `CARD`.
fn enum_or<E>(name: &str, default: E) -> Result<E, ConfigError>
where
    E: ActiveEnum<Value = String>,
{
    match optional(name) {
        None => Ok(default),
        Some(value) => {
            E::try_from_value(&value.trim().to_uppercase()).map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            })
        }
    }
}
