//! Applies a [`StateAction`] to a [`WorkbenchState`].

use log::debug;
use rust_decimal::Decimal;

use super::{StateAction, WorkbenchState};
use crate::errors::{Error, Result};
use crate::portfolios::{FundAllocation, PortfolioError};
use crate::requests::RequestError;
use crate::termination::TerminationError;
use crate::weights::{is_balanced, total_weight};

fn ensure_balanced(id: &str, funds: &[FundAllocation]) -> Result<()> {
    let total = total_weight(funds.iter().map(|f| &f.weight));
    if !is_balanced(total) {
        return Err(PortfolioError::UnbalancedFunds {
            id: id.to_string(),
            total,
        }
        .into());
    }
    Ok(())
}

fn ensure_non_negative(amount: Decimal, what: &str) -> Result<()> {
    if amount.is_sign_negative() {
        return Err(Error::State(format!("{} amount cannot be negative: {}", what, amount)));
    }
    Ok(())
}

impl WorkbenchState {
    /// Applies one action in place. On error `self` is left as it was.
    pub fn apply(&mut self, action: StateAction) -> Result<()> {
        debug!("Applying state action {}", action.name());
        match action {
            StateAction::PortfolioAppended(portfolio) => {
                if self.portfolio(&portfolio.id).is_some() {
                    return Err(PortfolioError::DuplicateId(portfolio.id).into());
                }
                ensure_balanced(&portfolio.id, &portfolio.funds)?;
                self.portfolios.push(portfolio);
            }
            StateAction::PortfolioFundsReplaced {
                portfolio_id,
                funds,
                deviation,
            } => {
                ensure_balanced(&portfolio_id, &funds)?;
                let portfolio = self
                    .portfolios
                    .iter_mut()
                    .find(|p| p.id == portfolio_id)
                    .ok_or(PortfolioError::NotFound(portfolio_id))?;
                portfolio.funds = funds;
                portfolio.deviation = deviation;
            }
            StateAction::PortfolioDeviationReset {
                portfolio_id,
                deviation,
            } => {
                let portfolio = self
                    .portfolios
                    .iter_mut()
                    .find(|p| p.id == portfolio_id)
                    .ok_or(PortfolioError::NotFound(portfolio_id))?;
                portfolio.deviation = deviation;
            }
            StateAction::RequestAppended(request) => {
                if self.request(&request.id).is_some() {
                    return Err(RequestError::DuplicateId(request.id).into());
                }
                self.requests.push(request);
                self.next_request_seq += 1;
            }
            StateAction::RequestStatusChanged { request_id, status } => {
                let request = self
                    .requests
                    .iter_mut()
                    .find(|r| r.id == request_id)
                    .ok_or_else(|| RequestError::NotFound(request_id.clone()))?;
                if request.status.is_terminal() {
                    return Err(RequestError::already_resolved(request_id, request.status).into());
                }
                request.status = status;
            }
            StateAction::AgreementRemoved { agreement_id } => {
                let idx = self
                    .agreements
                    .iter()
                    .position(|a| a.id == agreement_id)
                    .ok_or(TerminationError::AgreementNotFound(agreement_id))?;
                self.agreements.remove(idx);
            }
            StateAction::BalanceDebited(amount) => {
                ensure_non_negative(amount, "Debit")?;
                if amount > self.balance {
                    return Err(TerminationError::InsufficientBalance {
                        balance: self.balance,
                        required: amount,
                    }
                    .into());
                }
                self.balance -= amount;
            }
            StateAction::BalanceCredited(amount) => {
                ensure_non_negative(amount, "Credit")?;
                self.balance += amount;
            }
            StateAction::LocaleSwitched(locale) => {
                self.locale = locale;
            }
        }
        Ok(())
    }
}
