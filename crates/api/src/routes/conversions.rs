//! Conversion routes.
//!
//! USD -> INR (what lands in the bank) and INR -> USD (what to invoice).
//! Any schedule field a request leaves out falls back to the configured
//! calculator defaults.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use super::error_response;
use crate::AppState;
use paycalc_core::conversion::{FeeSchedule, ForwardBreakdown, forward_breakdown, inverse_convert};
use paycalc_shared::types::{Currency, display_f64};
use paycalc_shared::{AppError, AppResult, CalculatorConfig};

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/conversions/defaults", get(get_defaults))
        .route("/conversions/usd-to-inr", post(usd_to_inr))
        .route("/conversions/inr-to-usd", post(inr_to_usd))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Optional overrides for the fee schedule.
#[derive(Debug, Default, Deserialize)]
pub struct ScheduleOverrides {
    /// Percentage fee (%).
    pub fee_percent: Option<f64>,
    /// Fixed fee (USD).
    pub fixed_fee: Option<f64>,
    /// Tax/TDS (%).
    pub tax_percent: Option<f64>,
    /// USD to INR exchange rate.
    pub exchange_rate: Option<f64>,
}

/// Request body for a USD -> INR calculation.
#[derive(Debug, Default, Deserialize)]
pub struct UsdToInrRequest {
    /// Amount received in USD.
    pub amount_usd: Option<f64>,
    /// Schedule overrides.
    #[serde(flatten)]
    pub schedule: ScheduleOverrides,
}

/// Request body for an INR -> USD calculation.
#[derive(Debug, Default, Deserialize)]
pub struct InrToUsdRequest {
    /// INR amount that should land in the bank.
    pub target_inr: Option<f64>,
    /// Schedule overrides.
    #[serde(flatten)]
    pub schedule: ScheduleOverrides,
}

/// Response for a USD -> INR calculation.
#[derive(Debug, Serialize)]
pub struct UsdToInrResponse {
    /// Amount received in USD.
    pub amount_usd: f64,
    /// INR received after fees, tax and conversion.
    pub inr_received: f64,
    /// Amount after each deduction stage.
    pub breakdown: ForwardBreakdown,
    /// Schedule actually applied.
    pub schedule: FeeSchedule,
    /// INR received, formatted for display.
    pub formatted: String,
    /// Human-readable summary.
    pub message: String,
}

/// Response for an INR -> USD calculation.
#[derive(Debug, Serialize)]
pub struct InrToUsdResponse {
    /// INR amount that should land in the bank.
    pub target_inr: f64,
    /// USD amount to invoice.
    pub required_usd: f64,
    /// Schedule actually applied.
    pub schedule: FeeSchedule,
    /// Required USD, formatted for display.
    pub formatted: String,
    /// Human-readable summary.
    pub message: String,
}

/// Response listing the configured defaults.
#[derive(Debug, Serialize)]
pub struct DefaultsResponse {
    /// Percentage fee (%).
    pub fee_percent: f64,
    /// Fixed fee (USD).
    pub fixed_fee: f64,
    /// Tax/TDS (%).
    pub tax_percent: f64,
    /// USD to INR exchange rate.
    pub exchange_rate: f64,
    /// Default USD amount for forward calculations.
    pub amount_usd: f64,
    /// Default INR target for inverse calculations.
    pub target_inr: f64,
}

impl From<&CalculatorConfig> for DefaultsResponse {
    fn from(config: &CalculatorConfig) -> Self {
        Self {
            fee_percent: config.fee_percent,
            fixed_fee: config.fixed_fee,
            tax_percent: config.tax_percent,
            exchange_rate: config.exchange_rate,
            amount_usd: config.amount_usd,
            target_inr: config.target_inr,
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Rejects NaN, infinities and negative numbers.
fn checked(field: &str, value: f64) -> AppResult<f64> {
    if !value.is_finite() {
        return Err(AppError::Validation(format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(AppError::Validation(format!("{field} must not be negative")));
    }
    Ok(value)
}

impl ScheduleOverrides {
    /// Fills missing fields from `defaults` and validates the result.
    pub fn resolve(&self, defaults: &CalculatorConfig) -> AppResult<FeeSchedule> {
        Ok(FeeSchedule::new(
            checked("fee_percent", self.fee_percent.unwrap_or(defaults.fee_percent))?,
            checked("fixed_fee", self.fixed_fee.unwrap_or(defaults.fixed_fee))?,
            checked("tax_percent", self.tax_percent.unwrap_or(defaults.tax_percent))?,
            checked(
                "exchange_rate",
                self.exchange_rate.unwrap_or(defaults.exchange_rate),
            )?,
        ))
    }
}

/// Formats a computed amount, rejecting results that overflowed.
fn formatted(field: &str, value: f64, currency: Currency) -> AppResult<String> {
    display_f64(value, currency)
        .ok_or_else(|| AppError::OutOfRange(format!("{field} overflowed to {value}")))
}

/// Builds the response for an inversion that cannot be solved.
///
/// The zero sentinel is reported alongside the flag, never as a formatted
/// amount.
fn degenerate_response(err: &AppError) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "error": err.error_code(),
            "message": err.message(),
            "degenerate": true,
            "required_usd": 0.0,
        })),
    )
        .into_response()
}

/// Runs a USD -> INR calculation against the configured defaults.
pub fn compute_usd_to_inr(
    defaults: &CalculatorConfig,
    request: &UsdToInrRequest,
) -> AppResult<UsdToInrResponse> {
    let amount_usd = checked("amount_usd", request.amount_usd.unwrap_or(defaults.amount_usd))?;
    let schedule = request.schedule.resolve(defaults)?;

    let breakdown = forward_breakdown(amount_usd, &schedule);
    let received = formatted("inr_received", breakdown.inr, Currency::Inr)?;

    Ok(UsdToInrResponse {
        amount_usd,
        inr_received: breakdown.inr,
        breakdown,
        schedule,
        message: format!("You will receive approximately {received}"),
        formatted: received,
    })
}

/// Runs an INR -> USD calculation against the configured defaults.
///
/// A degenerate schedule surfaces as [`AppError::InvalidParameters`].
pub fn compute_inr_to_usd(
    defaults: &CalculatorConfig,
    request: &InrToUsdRequest,
) -> AppResult<InrToUsdResponse> {
    let target_inr = checked("target_inr", request.target_inr.unwrap_or(defaults.target_inr))?;
    let schedule = request.schedule.resolve(defaults)?;

    let outcome = inverse_convert(target_inr, &schedule);
    if outcome.degenerate {
        warn!(
            fee_percent = schedule.fee_percent,
            tax_percent = schedule.tax_percent,
            exchange_rate = schedule.exchange_rate,
            "Rejected degenerate INR to USD conversion"
        );
    }

    let required_usd = outcome.into_result()?;
    let target = formatted("target_inr", target_inr, Currency::Inr)?;
    let required = formatted("required_usd", required_usd, Currency::Usd)?;

    Ok(InrToUsdResponse {
        target_inr,
        required_usd,
        schedule,
        message: format!("To receive {target}, you should request about {required}."),
        formatted: required,
    })
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /conversions/defaults
async fn get_defaults(State(state): State<AppState>) -> Json<DefaultsResponse> {
    Json(DefaultsResponse::from(state.calculator.as_ref()))
}

/// POST /conversions/usd-to-inr
async fn usd_to_inr(
    State(state): State<AppState>,
    payload: Result<Json<UsdToInrRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return error_response(&AppError::Validation(rejection.body_text())),
    };

    match compute_usd_to_inr(&state.calculator, &request) {
        Ok(body) => {
            debug!(
                amount_usd = body.amount_usd,
                inr_received = body.inr_received,
                "Computed USD to INR conversion"
            );
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => error_response(&err),
    }
}

/// POST /conversions/inr-to-usd
async fn inr_to_usd(
    State(state): State<AppState>,
    payload: Result<Json<InrToUsdRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return error_response(&AppError::Validation(rejection.body_text())),
    };

    match compute_inr_to_usd(&state.calculator, &request) {
        Ok(body) => {
            debug!(
                target_inr = body.target_inr,
                required_usd = body.required_usd,
                "Computed INR to USD conversion"
            );
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err @ AppError::InvalidParameters(_)) => degenerate_response(&err),
        Err(err) => error_response(&err),
    }
}
