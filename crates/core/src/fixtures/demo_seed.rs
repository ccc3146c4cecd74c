//! Demo book of five clients, four strategies and a short review queue.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::SeedSource;
use crate::agreements::{Agreement, AgreementStatus};
use crate::customers::{Customer, CustomerStatus, RiskPreference};
use crate::fees::{FeeTemplate, FeeType};
use crate::portfolios::{FundAllocation, Portfolio, Subscriber};
use crate::requests::{RequestStatus, RequestType, ReviewRequest};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: &str,
    name: &str,
    name_en: &str,
    email: &str,
    phone: &str,
    risk_preference: RiskPreference,
    account_balance: Decimal,
    registration_date: NaiveDate,
    status: CustomerStatus,
) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        name_en: name_en.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        risk_preference,
        account_balance,
        registration_date,
        status,
    }
}

fn subscriber(
    customer_id: &str,
    customer_name: &str,
    invested: Decimal,
    profit_and_loss: Decimal,
    since: NaiveDate,
) -> Subscriber {
    Subscriber {
        customer_id: customer_id.to_string(),
        customer_name: customer_name.to_string(),
        invested,
        profit_and_loss,
        since,
    }
}

fn rebalancing(
    id: &str,
    customer: (&str, &str),
    on: NaiveDate,
    status: RequestStatus,
    portfolio_name: Option<&str>,
    description: Option<&str>,
) -> ReviewRequest {
    ReviewRequest {
        id: id.to_string(),
        request_type: RequestType::Rebalancing,
        status,
        customer_id: Some(customer.0.to_string()),
        customer_name: Some(customer.1.to_string()),
        amount: Decimal::ZERO,
        date: on,
        portfolio_name: portfolio_name.map(str::to_string),
        description: description.map(str::to_string),
        suitability_passed: true,
    }
}

/// Built-in demo data set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSeed;

impl SeedSource for DemoSeed {
    fn customers(&self) -> Vec<Customer> {
        use CustomerStatus::*;
        use RiskPreference::*;
        vec![
            customer("C001", "李忠", "Li Zhong", "li.zhong@example.com", "+86 138 0000 1111", Balanced, dec!(1250000), date(2023, 10, 12), Active),
            customer("C002", "陈莎拉", "Sarah Chen", "schen88@example.com", "+86 139 2222 3333", Aggressive, dec!(4500000), date(2023, 11, 5), Active),
            customer("C003", "王大卫", "David Wang", "david.w@example.com", "+86 137 5555 6666", Conservative, dec!(850000), date(2024, 1, 20), Pending),
            customer("C004", "张艾琳", "Elena Zhang", "elena.z@example.com", "+86 135 1111 2222", Balanced, dec!(2100000), date(2023, 9, 15), Active),
            customer("C005", "何罗伯特", "Robert He", "rho.finance@example.com", "+86 133 4444 5555", Aggressive, dec!(120000), date(2024, 2, 10), Inactive),
        ]
    }

    fn portfolios(&self) -> Vec<Portfolio> {
        vec![
            Portfolio {
                id: "P01".to_string(),
                name: "Aggressive Alpha A1".to_string(),
                risk: RiskPreference::Aggressive,
                aum: dec!(42500000),
                funds: vec![
                    FundAllocation::new("Tech Leaders", dec!(60)),
                    FundAllocation::new("Emerging Markets", dec!(20)),
                    FundAllocation::new("Private Equity", dec!(15)),
                    FundAllocation::new("Cash Reserve", dec!(5)),
                ],
                subscribers: vec![
                    subscriber("C002", "Sarah Chen", dec!(1500000), dec!(182000), date(2023, 11, 10)),
                    subscriber("C001", "Li Zhong", dec!(500000), dec!(-12500), date(2023, 10, 15)),
                ],
                deviation: dec!(4.2),
                description: Some("Global technology growth with an emerging-market sleeve.".to_string()),
            },
            Portfolio {
                id: "P02".to_string(),
                name: "Steady Dividend B2".to_string(),
                risk: RiskPreference::Conservative,
                aum: dec!(85200000),
                funds: vec![
                    FundAllocation::new("Government Bonds", dec!(50)),
                    FundAllocation::new("Blue-chip Dividend", dec!(30)),
                    FundAllocation::new("Corporate Credit", dec!(15)),
                    FundAllocation::new("Liquidity", dec!(5)),
                ],
                subscribers: vec![
                    subscriber("C003", "David Wang", dec!(600000), dec!(24000), date(2024, 1, 25)),
                    subscriber("C004", "Elena Zhang", dec!(800000), dec!(41000), date(2023, 9, 20)),
                ],
                deviation: dec!(1.1),
                description: Some("Retirement-oriented income allocation.".to_string()),
            },
            Portfolio {
                id: "P03".to_string(),
                name: "ESG Leaders Portfolio".to_string(),
                risk: RiskPreference::Balanced,
                aum: dec!(31800000),
                funds: vec![
                    FundAllocation::new("Clean Energy", dec!(35)),
                    FundAllocation::new("ESG Equity Index", dec!(40)),
                    FundAllocation::new("Green Bonds", dec!(25)),
                ],
                subscribers: vec![subscriber("C004", "Elena Zhang", dec!(900000), dec!(35000), date(2023, 9, 20))],
                deviation: dec!(3.5),
                description: None,
            },
            Portfolio {
                id: "P04".to_string(),
                name: "Nasdaq-100 Strategy".to_string(),
                risk: RiskPreference::Aggressive,
                aum: dec!(56000000),
                funds: vec![
                    FundAllocation::new("Nasdaq-100 Tracker", dec!(70)),
                    FundAllocation::new("Semiconductor Select", dec!(20)),
                    FundAllocation::new("Money Market", dec!(10)),
                ],
                subscribers: vec![subscriber("C002", "Sarah Chen", dec!(1200000), dec!(96000), date(2023, 12, 1))],
                deviation: dec!(5.8),
                description: None,
            },
        ]
    }

    fn agreements(&self) -> Vec<Agreement> {
        let agreement = |id: &str, customer_id: &str, strategy: &str, signed: NaiveDate, status, amount| Agreement {
            id: id.to_string(),
            customer_id: customer_id.to_string(),
            strategy_name: strategy.to_string(),
            sign_date: signed,
            status,
            amount,
        };
        vec![
            agreement("WA-0856", "C001", "Aggressive Alpha A1", date(2024, 3, 12), AgreementStatus::Signed, dec!(1250000)),
            agreement("WA-0857", "C002", "Steady Dividend B2", date(2024, 3, 14), AgreementStatus::Signed, dec!(4500000)),
            agreement("WA-0858", "C003", "Nasdaq-100 Strategy", date(2024, 3, 16), AgreementStatus::Pending, dec!(850000)),
            agreement("WA-0859", "C004", "ESG Leaders Portfolio", date(2024, 3, 15), AgreementStatus::Signed, dec!(2100000)),
        ]
    }

    fn requests(&self) -> Vec<ReviewRequest> {
        let day = date(2024, 3, 16);
        vec![
            rebalancing(
                "AI-20240316-001",
                ("C002", "Sarah Chen"),
                day,
                RequestStatus::Auditing,
                Some("Aggressive Alpha A1"),
                Some("Tech exposure hit profit-take limit. Algo reallocated to hedging assets."),
            ),
            rebalancing(
                "AI-20240316-002",
                ("C004", "Elena Zhang"),
                day,
                RequestStatus::Auditing,
                Some("ESG Leaders Portfolio"),
                Some("ESG rating shift detected. Algo swapped non-compliant assets for green energy."),
            ),
            ReviewRequest {
                id: "TX-20240316-003".to_string(),
                request_type: RequestType::TransferOut,
                status: RequestStatus::Auditing,
                customer_id: Some("C001".to_string()),
                customer_name: Some("Li Zhong".to_string()),
                amount: dec!(80000),
                date: day,
                portfolio_name: None,
                description: None,
                suitability_passed: true,
            },
            rebalancing(
                "AI-20240316-004",
                ("C003", "David Wang"),
                day,
                RequestStatus::Validating,
                Some("Steady Dividend B2"),
                Some("Bond yield outlook shifted. Portfolio duration increased via long-term bonds."),
            ),
            rebalancing(
                "AI-20240316-005",
                ("C002", "Sarah Chen"),
                day,
                RequestStatus::Auditing,
                Some("Nasdaq-100 Strategy"),
                None,
            ),
            rebalancing("AI-20240310-099", ("C004", "Elena Zhang"), date(2024, 3, 10), RequestStatus::Success, None, None),
            rebalancing("AI-20240309-098", ("C001", "Li Zhong"), date(2024, 3, 9), RequestStatus::Failed, None, None),
        ]
    }

    fn fee_templates(&self) -> Vec<FeeTemplate> {
        let template = |id: &str, name: &str, fee_type, rate| FeeTemplate {
            id: id.to_string(),
            name: name.to_string(),
            fee_type,
            rate,
        };
        vec![
            template("F001", "Standard A management fee", FeeType::Management, dec!(0.8)),
            template("F002", "Excess performance fee", FeeType::Performance, dec!(20.0)),
            template("F003", "Custodian fee", FeeType::Custodian, dec!(0.05)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::is_balanced;

    #[test]
    fn test_every_demo_portfolio_is_balanced() {
        for portfolio in DemoSeed.portfolios() {
            assert!(is_balanced(portfolio.total_weight()), "{} is unbalanced", portfolio.name);
        }
    }

    #[test]
    fn test_open_rebalancing_requests_point_at_existing_portfolios() {
        let portfolios = DemoSeed.portfolios();
        for request in DemoSeed.requests() {
            if request.request_type == RequestType::Rebalancing && !request.is_terminal() {
                let name = request.portfolio_name.as_deref().unwrap();
                assert!(portfolios.iter().any(|p| p.name == name), "missing {}", name);
            }
        }
    }

    #[test]
    fn test_agreements_belong_to_known_customers() {
        let customers = DemoSeed.customers();
        for agreement in DemoSeed.agreements() {
            assert!(customers.iter().any(|c| c.id == agreement.customer_id));
        }
    }
}
