use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::customers::RiskPreference;
use crate::errors::{Error, Result, ValidationError};
use crate::i18n::{translate, Locale};
use crate::portfolios::{FundAllocation, NewPortfolio};
use crate::weights::{clamp_weight, is_balanced, parse_weight_input, total_weight};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetRow {
    /// Stable row handle; never reused after removal
    pub id: u32,
    pub name: String,
    pub weight: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub label_key: &'static str,
    pub passed: bool,
}

/// Hand-built strategy draft. Always holds at least one asset row.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrategyTemplateForm {
    pub name: String,
    pub risk: RiskPreference,
    pub description: String,
    rows: Vec<AssetRow>,
    #[serde(skip)]
    locale: Locale,
    #[serde(skip)]
    next_row_id: u32,
}

impl StrategyTemplateForm {
    /// Empty form with the two default rows at 50/50.
    pub fn new(locale: Locale) -> Self {
        let rows = vec![
            AssetRow {
                id: 1,
                name: translate(locale, "template_asset_growth").to_string(),
                weight: dec!(50),
            },
            AssetRow {
                id: 2,
                name: translate(locale, "template_asset_cash").to_string(),
                weight: dec!(50),
            },
        ];
        Self {
            name: String::new(),
            risk: RiskPreference::Balanced,
            description: String::new(),
            rows,
            locale,
            next_row_id: 3,
        }
    }

    pub fn rows(&self) -> &[AssetRow] {
        &self.rows
    }

    fn row_mut(&mut self, id: u32) -> Result<&mut AssetRow> {
        self.rows.iter_mut().find(|r| r.id == id).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "No asset row {}",
                id
            )))
        })
    }

    /// Appends a placeholder row at 0% and returns its id.
    pub fn add_asset(&mut self) -> u32 {
        let id = self.next_row_id;
        self.next_row_id += 1;
        self.rows.push(AssetRow {
            id,
            name: translate(self.locale, "template_asset_new").to_string(),
            weight: Decimal::ZERO,
        });
        id
    }

    pub fn rename_asset(&mut self, id: u32, name: impl Into<String>) -> Result<()> {
        self.row_mut(id)?.name = name.into();
        Ok(())
    }

    pub fn set_asset_weight(&mut self, id: u32, weight: Decimal) -> Result<()> {
        self.row_mut(id)?.weight = clamp_weight(weight);
        Ok(())
    }

    pub fn set_asset_weight_input(&mut self, id: u32, raw: &str) -> Result<()> {
        self.set_asset_weight(id, parse_weight_input(raw))
    }

    /// Removes a row unless it is the last one. Returns whether it was removed.
    pub fn remove_asset(&mut self, id: u32) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        self.rows.len() != before
    }

    pub fn total_weight(&self) -> Decimal {
        total_weight(self.rows.iter().map(|r| &r.weight))
    }

    fn name_defined(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn checklist(&self) -> Vec<ChecklistItem> {
        vec![
            ChecklistItem {
                label_key: "check_name_defined",
                passed: self.name_defined(),
            },
            ChecklistItem {
                label_key: "check_balanced",
                passed: is_balanced(self.total_weight()),
            },
            ChecklistItem {
                label_key: "check_no_empty",
                passed: self.rows.iter().all(|r| r.weight > Decimal::ZERO),
            },
        ]
    }

    /// Name defined and weights balanced. Zero-weight rows are advisory only.
    pub fn is_valid(&self) -> bool {
        self.name_defined() && is_balanced(self.total_weight())
    }

    pub fn into_new_portfolio(self, aum: Decimal) -> Result<NewPortfolio> {
        if !self.name_defined() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        let total = self.total_weight();
        if !is_balanced(total) {
            return Err(ValidationError::UnbalancedWeights(total).into());
        }
        let description = Some(self.description.trim().to_string()).filter(|d| !d.is_empty());
        Ok(NewPortfolio {
            id: None,
            name: self.name,
            risk: self.risk,
            aum,
            funds: self
                .rows
                .into_iter()
                .map(|r| FundAllocation::new(r.name, r.weight))
                .collect(),
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_balanced_but_unnamed() {
        let form = StrategyTemplateForm::new(Locale::En);
        assert_eq!(form.rows().len(), 2);
        assert_eq!(form.rows()[0].name, "Large-cap Growth");
        assert_eq!(form.total_weight(), dec!(100));
        assert!(!form.is_valid());
        let checks = form.checklist();
        assert!(!checks[0].passed);
        assert!(checks[1].passed);
        assert!(checks[2].passed);
    }

    #[test]
    fn test_last_row_is_never_removed() {
        let mut form = StrategyTemplateForm::new(Locale::Zh);
        assert!(form.remove_asset(1));
        assert!(!form.remove_asset(2));
        assert_eq!(form.rows().len(), 1);
    }

    #[test]
    fn test_row_ids_are_not_reused() {
        let mut form = StrategyTemplateForm::new(Locale::En);
        form.remove_asset(2);
        let id = form.add_asset();
        assert_eq!(id, 3);
        assert_eq!(form.rows()[1].name, "New Asset Class");
        assert_eq!(form.rows()[1].weight, Decimal::ZERO);
    }

    #[test]
    fn test_zero_weight_row_fails_checklist_only() {
        let mut form = StrategyTemplateForm::new(Locale::En);
        form.name = "Core Income".to_string();
        form.add_asset();
        assert!(form.is_valid());
        assert!(!form.checklist()[2].passed);
    }

    #[test]
    fn test_into_new_portfolio() {
        let mut form = StrategyTemplateForm::new(Locale::En);
        form.name = " Core Income ".to_string();
        form.risk = RiskPreference::Conservative;
        form.set_asset_weight_input(1, "30").unwrap();
        assert!(form.into_new_portfolio(dec!(1000000)).is_err());

        let mut form = StrategyTemplateForm::new(Locale::En);
        form.name = "Core Income".to_string();
        form.set_asset_weight(1, dec!(30)).unwrap();
        form.set_asset_weight(2, dec!(70)).unwrap();
        form.rename_asset(2, "Short Duration Bonds").unwrap();
        let new_portfolio = form.into_new_portfolio(dec!(1000000)).unwrap();
        assert!(new_portfolio.validate().is_ok());
        assert_eq!(new_portfolio.funds[1].name, "Short Duration Bonds");
        assert_eq!(new_portfolio.description, None);
    }
}
