//! ForecastService: external predictor first, statistical estimator on failure.
//!
//! The predictor runs on its own thread and the service waits at most the
//! configured timeout for it. A timed-out worker is left detached and its
//! late result is dropped, so the fallback is never blocked. At most one
//! worker is outstanding per service: while a detached worker is still
//! running, further calls go straight to the fallback.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use aquarisk_core::config::ForecastConfig;
use aquarisk_core::errors::{AquariskError, PredictorError};
use aquarisk_core::models::{DegradationEvent, ForecastReport, ForecastRequest, ForecastSource};
use aquarisk_core::traits::IOutbreakPredictor;
use aquarisk_observability::events;
use chrono::Utc;
use tracing::debug;

use crate::estimator::EnvironmentalRiskEstimator;

const COMPONENT: &str = "forecast";
const FALLBACK: &str = "statistical";

/// A forecast plus the degradation that produced it, if any.
#[derive(Debug, Clone)]
pub struct ForecastOutcome {
    pub report: ForecastReport,
    /// Set when the external predictor was configured but failed.
    pub degradation: Option<DegradationEvent>,
}

impl ForecastOutcome {
    pub fn is_degraded(&self) -> bool {
        self.degradation.is_some()
    }
}

pub struct ForecastService {
    predictor: Option<Arc<dyn IOutbreakPredictor>>,
    estimator: EnvironmentalRiskEstimator,
    timeout: Duration,
    in_flight: Arc<AtomicBool>,
}

/// Clears the in-flight flag when the worker finishes, including by panic.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for ForecastService {
    fn default() -> Self {
        Self::from_config(&ForecastConfig::default(), None)
    }
}

impl ForecastService {
    /// Build from configuration. The predictor is ignored when
    /// `use_external_predictor` is off.
    pub fn from_config(
        config: &ForecastConfig,
        predictor: Option<Arc<dyn IOutbreakPredictor>>,
    ) -> Self {
        Self {
            predictor: predictor.filter(|_| config.use_external_predictor),
            estimator: EnvironmentalRiskEstimator::default(),
            timeout: config.predictor_timeout(),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_predictor(mut self, predictor: Arc<dyn IOutbreakPredictor>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn with_estimator(mut self, estimator: EnvironmentalRiskEstimator) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn estimator(&self) -> &EnvironmentalRiskEstimator {
        &self.estimator
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn has_predictor(&self) -> bool {
        self.predictor.is_some()
    }

    /// True while a predictor worker from an earlier call is still running.
    pub fn predictor_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Forecast for a request. Always returns a report.
    pub fn forecast(&self, request: &ForecastRequest) -> ForecastOutcome {
        let Some(predictor) = &self.predictor else {
            return ForecastOutcome {
                report: self.estimator.forecast(request),
                degradation: None,
            };
        };

        match self.consult(predictor, request) {
            Ok(report) => {
                events::forecast_completed(
                    predictor.name(),
                    report.risk_score,
                    report.overall_risk.as_str(),
                );
                ForecastOutcome {
                    report,
                    degradation: None,
                }
            }
            Err(e) => {
                let failure = e.to_string();
                events::degradation_triggered(COMPONENT, &failure, FALLBACK);
                ForecastOutcome {
                    report: self.estimator.forecast(request),
                    degradation: Some(DegradationEvent {
                        component: COMPONENT.to_string(),
                        failure,
                        fallback_used: FALLBACK.to_string(),
                        timestamp: Utc::now(),
                    }),
                }
            }
        }
    }

    fn consult(
        &self,
        predictor: &Arc<dyn IOutbreakPredictor>,
        request: &ForecastRequest,
    ) -> Result<ForecastReport, PredictorError> {
        let name = predictor.name().to_string();
        let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
        let _span = aquarisk_observability::predictor_span!(name.as_str(), timeout_ms).entered();

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(PredictorError::Unavailable {
                name: format!("{name} (previous call still running)"),
            });
        }
        let guard = InFlightGuard(Arc::clone(&self.in_flight));

        let (tx, rx) = mpsc::channel();
        let worker = Arc::clone(predictor);
        let worker_request = request.clone();
        thread::Builder::new()
            .name("aquarisk-predictor".to_string())
            .spawn(move || {
                let guard = guard;
                let result = worker.predict(&worker_request);
                // Cleared before sending so the caller sees it idle on return.
                drop(guard);
                // The receiver is gone once the caller timed out.
                let _ = tx.send(result);
            })
            .map_err(|e| PredictorError::Unavailable {
                name: format!("{name} ({e})"),
            })?;

        let report = match rx.recv_timeout(self.timeout) {
            Ok(Ok(report)) => report,
            Ok(Err(AquariskError::PredictorError(e))) => return Err(e),
            Ok(Err(e)) => {
                return Err(PredictorError::PredictionFailed {
                    name,
                    reason: e.to_string(),
                })
            }
            Err(RecvTimeoutError::Timeout) => {
                return Err(PredictorError::Timeout { name, timeout_ms })
            }
            Err(RecvTimeoutError::Disconnected) => {
                return Err(PredictorError::PredictionFailed {
                    name,
                    reason: "worker exited without a result".to_string(),
                })
            }
        };

        if let Some(reason) = report.shape_violation() {
            return Err(PredictorError::InvalidOutput { name, reason });
        }
        debug!(model = %name, "external forecast accepted");

        Ok(ForecastReport {
            source: ForecastSource::External { model: name },
            ..report
        })
    }
}
