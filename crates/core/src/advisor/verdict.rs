//! Risk statistics and the PASS / FAIL verdict of a backtest series.

use super::advisor_model::{BacktestPoint, BacktestStats, BacktestVerdict, VerdictThresholds};

const MONTHS_PER_YEAR: f64 = 12.0;
const RISK_FREE_RATE: f64 = 0.02;

fn monthly_returns(series: &[BacktestPoint]) -> Vec<f64> {
    let mut prev = 1.0;
    series
        .iter()
        .map(|point| {
            let value = 1.0 + point.portfolio;
            let r = if prev > 0.0 { value / prev - 1.0 } else { 0.0 };
            prev = value;
            r
        })
        .collect()
}

fn max_drawdown(series: &[BacktestPoint]) -> f64 {
    let mut peak: f64 = 1.0;
    let mut worst: f64 = 0.0;
    for point in series {
        let value = 1.0 + point.portfolio;
        peak = peak.max(value);
        if peak > 0.0 {
            worst = worst.max((peak - value) / peak);
        }
    }
    worst
}

/// Summary statistics of a monthly cumulative-return series.
pub fn compute_stats(series: &[BacktestPoint]) -> BacktestStats {
    let Some(last) = series.last() else {
        return BacktestStats::default();
    };
    let returns = monthly_returns(series);
    let n = returns.len() as f64;

    let annualized_volatility = if returns.len() > 1 {
        let mean = returns.iter().sum::<f64>() / n;
        let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
        variance.sqrt() * MONTHS_PER_YEAR.sqrt()
    } else {
        0.0
    };

    let final_value = 1.0 + last.portfolio;
    let annualized_return = if final_value > 0.0 {
        final_value.powf(MONTHS_PER_YEAR / n) - 1.0
    } else {
        -1.0
    };

    let sharpe_ratio = if annualized_volatility > 0.0 {
        (annualized_return - RISK_FREE_RATE) / annualized_volatility
    } else {
        0.0
    };

    BacktestStats {
        annualized_return,
        annualized_volatility,
        max_drawdown: max_drawdown(series),
        sharpe_ratio,
        excess_return: last.portfolio - last.benchmark,
    }
}

/// PASS when drawdown and annualised volatility both stay within limits.
/// An empty series never passes.
pub fn evaluate_verdict(series: &[BacktestPoint], thresholds: &VerdictThresholds) -> BacktestVerdict {
    if series.is_empty() {
        return BacktestVerdict::Fail;
    }
    let stats = compute_stats(series);
    if stats.max_drawdown <= thresholds.max_drawdown
        && stats.annualized_volatility <= thresholds.max_volatility
    {
        BacktestVerdict::Pass
    } else {
        BacktestVerdict::Fail
    }
}
