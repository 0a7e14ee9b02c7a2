//! Application configuration from the environment.
//!
//! Tuning knobs (fees, pricing, gateway success rate) always have defaults;
//! a malformed value defaults with a warning in debug builds and is rejected
//! in release builds. Session settings follow their own, stricter rules in
//! [`session_config`](crate::inbound::http::session_config).

use std::net::SocketAddr;

use mockable::Env;
use tracing::warn;

use crate::domain::{FeeSchedule, StyleMultipliers};
use crate::inbound::http::session_config::{
    BuildMode, SessionConfigError, SessionSettings, session_settings_from_env,
};

const BIND_ADDR_ENV: &str = "BIND_ADDR";
const BIND_ADDR_DEFAULT: &str = "0.0.0.0:8080";
const SUCCESS_RATE_ENV: &str = "PAYMENT_SUCCESS_RATE_PERCENT";
const SUCCESS_RATE_DEFAULT: u32 = 90;
const FEE_CREDIT_CARD_ENV: &str = "FEE_CREDIT_CARD_BPS";
const FEE_E_WALLET_ENV: &str = "FEE_E_WALLET_BPS";
const FEE_BANK_TRANSFER_ENV: &str = "FEE_BANK_TRANSFER_BPS";
const FEE_CASH_ENV: &str = "FEE_CASH_BPS";
const STYLE_BUDGET_ENV: &str = "STYLE_BUDGET_PERCENT";
const STYLE_COMFORT_ENV: &str = "STYLE_COMFORT_PERCENT";
const STYLE_LUXURY_ENV: &str = "STYLE_LUXURY_PERCENT";

/// Everything the server needs to start.
pub struct AppConfig {
    /// Socket address to bind the listener to.
    pub bind_addr: SocketAddr,
    /// Session cookie settings.
    pub session: SessionSettings,
    /// Per-method payment processing fees.
    pub fees: FeeSchedule,
    /// Style multipliers for itinerary pricing.
    pub pricing: StyleMultipliers,
    /// Share of charges the mock gateway accepts, in whole percent.
    pub success_rate_percent: u32,
}

/// Errors raised while building the application configuration.
#[derive(thiserror::Error, Debug)]
pub enum AppConfigError {
    /// Session settings failed validation.
    #[error(transparent)]
    Session(#[from] SessionConfigError),
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Build the application configuration from environment variables.
pub fn app_config_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<AppConfig, AppConfigError> {
    let session = session_settings_from_env(env, mode)?;
    let bind_addr = bind_addr_from_env(env)?;
    let success_rate_percent = success_rate_from_env(env, mode)?;

    let defaults = FeeSchedule::default();
    let fees = FeeSchedule {
        credit_card_bps: numeric_knob(env, mode, FEE_CREDIT_CARD_ENV, defaults.credit_card_bps)?,
        e_wallet_bps: numeric_knob(env, mode, FEE_E_WALLET_ENV, defaults.e_wallet_bps)?,
        bank_transfer_bps: numeric_knob(
            env,
            mode,
            FEE_BANK_TRANSFER_ENV,
            defaults.bank_transfer_bps,
        )?,
        cash_bps: numeric_knob(env, mode, FEE_CASH_ENV, defaults.cash_bps)?,
    };

    let defaults = StyleMultipliers::default();
    let pricing = StyleMultipliers {
        budget_percent: numeric_knob(env, mode, STYLE_BUDGET_ENV, defaults.budget_percent)?,
        comfort_percent: numeric_knob(env, mode, STYLE_COMFORT_ENV, defaults.comfort_percent)?,
        luxury_percent: numeric_knob(env, mode, STYLE_LUXURY_ENV, defaults.luxury_percent)?,
    };

    Ok(AppConfig {
        bind_addr,
        session,
        fees,
        pricing,
        success_rate_percent,
    })
}

/// An unparseable bind address is never usable, so it fails in every mode.
fn bind_addr_from_env<E: Env>(env: &E) -> Result<SocketAddr, AppConfigError> {
    let value = env
        .string(BIND_ADDR_ENV)
        .unwrap_or_else(|| BIND_ADDR_DEFAULT.to_owned());
    value
        .parse()
        .map_err(|_| AppConfigError::InvalidEnv {
            name: BIND_ADDR_ENV,
            value,
            expected: "host:port socket address",
        })
}

fn success_rate_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<u32, AppConfigError> {
    let rate = numeric_knob(env, mode, SUCCESS_RATE_ENV, SUCCESS_RATE_DEFAULT)?;
    if rate > 100 {
        if mode == BuildMode::Debug {
            warn!(rate, "success rate above 100 percent; using default");
            return Ok(SUCCESS_RATE_DEFAULT);
        }
        return Err(AppConfigError::InvalidEnv {
            name: SUCCESS_RATE_ENV,
            value: rate.to_string(),
            expected: "whole percent in 0..=100",
        });
    }
    Ok(rate)
}

/// Read a numeric tuning knob, defaulting when unset.
fn numeric_knob<E: Env>(
    env: &E,
    mode: BuildMode,
    name: &'static str,
    default: u32,
) -> Result<u32, AppConfigError> {
    let Some(value) = env.string(name) else {
        return Ok(default);
    };
    match value.parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) if mode == BuildMode::Debug => {
            warn!(name, value = %value, default, "invalid numeric setting; using default");
            Ok(default)
        }
        Err(_) => Err(AppConfigError::InvalidEnv {
            name,
            value,
            expected: "non-negative integer",
        }),
    }
}
