use async_trait::async_trait;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use super::advisor_model::{BacktestPoint, BacktestReport, VerdictThresholds};
use super::advisor_traits::BacktestEngine;
use super::verdict::{compute_stats, evaluate_verdict};
use crate::constants::BACKTEST_POINTS;
use crate::errors::{Error, Result};
use crate::portfolios::FundAllocation;

/// Monthly return distribution of the draft portfolio
const PORTFOLIO_DRIFT: f64 = 0.006;
const PORTFOLIO_SD: f64 = 0.02;
/// Monthly return distribution of the benchmark
const BENCHMARK_DRIFT: f64 = 0.004;
const BENCHMARK_SD: f64 = 0.025;

/// Random-walk backtest over [`BACKTEST_POINTS`] months.
///
/// With a seed the series is reproducible; without one each run draws from
/// system entropy.
#[derive(Debug, Clone)]
pub struct SimulatedBacktestEngine {
    seed: Option<u64>,
    thresholds: VerdictThresholds,
}

impl SimulatedBacktestEngine {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            thresholds: VerdictThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: VerdictThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn simulate(&self) -> Result<Vec<BacktestPoint>> {
        let portfolio_dist = Normal::new(PORTFOLIO_DRIFT, PORTFOLIO_SD)
            .map_err(|e| Error::Advisor(format!("invalid return distribution: {}", e)))?;
        let benchmark_dist = Normal::new(BENCHMARK_DRIFT, BENCHMARK_SD)
            .map_err(|e| Error::Advisor(format!("invalid return distribution: {}", e)))?;

        let mut rng = self.rng();
        let mut portfolio_value = 1.0_f64;
        let mut benchmark_value = 1.0_f64;
        let series = (1..=BACKTEST_POINTS)
            .map(|month| {
                portfolio_value *= 1.0 + portfolio_dist.sample(&mut rng);
                benchmark_value *= 1.0 + benchmark_dist.sample(&mut rng);
                BacktestPoint {
                    period: format!("M{}", month),
                    portfolio: portfolio_value - 1.0,
                    benchmark: benchmark_value - 1.0,
                }
            })
            .collect();
        Ok(series)
    }
}

#[async_trait]
impl BacktestEngine for SimulatedBacktestEngine {
    async fn run(&self, holdings: &[FundAllocation]) -> Result<BacktestReport> {
        if holdings.is_empty() {
            return Err(Error::Advisor("nothing to backtest".to_string()));
        }
        let series = self.simulate()?;
        let stats = compute_stats(&series);
        let verdict = evaluate_verdict(&series, &self.thresholds);
        debug!(
            "Backtest of {} holdings: vol {:.3}, drawdown {:.3}, verdict {:?}",
            holdings.len(),
            stats.annualized_volatility,
            stats.max_drawdown,
            verdict
        );
        Ok(BacktestReport {
            series,
            stats,
            verdict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::BacktestVerdict;
    use rust_decimal_macros::dec;

    fn holdings() -> Vec<FundAllocation> {
        vec![
            FundAllocation::new("A", dec!(60)),
            FundAllocation::new("B", dec!(40)),
        ]
    }

    #[tokio::test]
    async fn test_series_has_one_point_per_month() {
        let report = SimulatedBacktestEngine::new(Some(7))
            .run(&holdings())
            .await
            .unwrap();
        assert_eq!(report.series.len(), BACKTEST_POINTS);
        assert_eq!(report.series[0].period, "M1");
        assert_eq!(report.series[35].period, "M36");
    }

    #[tokio::test]
    async fn test_seeded_runs_are_reproducible() {
        let engine = SimulatedBacktestEngine::new(Some(42));
        let first = engine.run(&holdings()).await.unwrap();
        let second = engine.run(&holdings()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_verdict_matches_thresholds() {
        let report = SimulatedBacktestEngine::new(Some(42))
            .with_thresholds(VerdictThresholds {
                max_drawdown: 0.0,
                max_volatility: 0.0,
            })
            .run(&holdings())
            .await
            .unwrap();
        assert_eq!(report.verdict, BacktestVerdict::Fail);
    }

    #[tokio::test]
    async fn test_empty_holdings_are_rejected() {
        assert!(SimulatedBacktestEngine::new(None).run(&[]).await.is_err());
    }
}
