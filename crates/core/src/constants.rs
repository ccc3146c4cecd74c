use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Target sum for every fund-weight vector
pub const WEIGHT_TOTAL: Decimal = dec!(100);

/// Allowed absolute distance from 100 for a vector to count as balanced
pub const WEIGHT_TOLERANCE: Decimal = dec!(0.01);

/// Decimal places kept when weights are re-normalised
pub const WEIGHT_PRECISION: u32 = 2;

/// Fee charged on the agreement amount when an account is terminated
pub const TERMINATION_FEE_RATE: Decimal = dec!(0.001);

/// Deviation left on a portfolio after a rebalance has been committed
pub const DEVIATION_RESIDUAL: Decimal = dec!(0.1);

/// Number of monthly points in a backtest series (3 years)
pub const BACKTEST_POINTS: usize = 36;

/// Simulated processing delays observed in the workbench (milliseconds)
pub const DEFAULT_SETTLEMENT_DELAY_MS: u64 = 1500;
pub const DEFAULT_REBALANCE_DELAY_MS: u64 = 2000;
pub const DEFAULT_BACKTEST_DELAY_MS: u64 = 1200;

/// Cash balance the demo workbench starts with
pub const DEFAULT_OPENING_BALANCE: Decimal = dec!(1250000);

/// Display precision for money
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
