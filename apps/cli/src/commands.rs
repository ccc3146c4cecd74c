//! Subcommand handlers. Each returns the JSON document printed on stdout.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use wealthpulse_core::advisor::Factor;
use wealthpulse_core::customers::{CustomerFilter, RiskPreference};
use wealthpulse_core::i18n::{format_compact_aum, format_money, translate, Locale};
use wealthpulse_core::requests::{QueueView, ReviewDecision, ReviewRequest};
use wealthpulse_core::wizard::PublishDetails;
use wealthpulse_core::Workbench;

use crate::cli::Command;

fn parse_decimal(field: &str, raw: &str) -> anyhow::Result<Decimal> {
    Decimal::from_str(raw.trim()).with_context(|| format!("Invalid {} '{}'", field, raw))
}

fn parse_risk(raw: Option<&str>) -> anyhow::Result<Option<RiskPreference>> {
    Ok(raw.map(RiskPreference::from_str).transpose()?)
}

fn request_json(workbench: &Workbench, request: &ReviewRequest, locale: Locale) -> anyhow::Result<Value> {
    let action = workbench.request_service.available_action(&request.id)?;
    Ok(json!({
        "request": request,
        "typeLabel": translate(locale, request.request_type.info().label_key),
        "statusLabel": translate(locale, request.status.label_key()),
        "rationale": workbench.request_service.rationale(request, locale),
        "amountLabel": format_money(request.amount),
        "action": action,
    }))
}

pub async fn run(workbench: &Workbench, command: Command) -> anyhow::Result<Value> {
    let locale = workbench.locale()?;
    match command {
        Command::Summary => Ok(serde_json::to_value(workbench.summary()?)?),

        Command::Clients { status } => {
            let filter = status
                .as_deref()
                .map(CustomerFilter::from_str)
                .transpose()?
                .unwrap_or_default();
            let customers = workbench.customer_service.list_customers(filter)?;
            Ok(Value::Array(
                customers
                    .iter()
                    .map(|c| {
                        json!({
                            "customer": c,
                            "displayName": c.display_name(locale),
                            "statusLabel": translate(locale, c.status.label_key()),
                            "riskLabel": translate(locale, c.risk_preference.label_key()),
                        })
                    })
                    .collect(),
            ))
        }

        Command::Portfolios => {
            let portfolios = workbench.portfolio_service.list_portfolios()?;
            Ok(Value::Array(
                portfolios
                    .iter()
                    .map(|p| {
                        json!({
                            "portfolio": p,
                            "aumLabel": format_compact_aum(p.aum, locale),
                            "riskLabel": translate(locale, p.risk.label_key()),
                        })
                    })
                    .collect(),
            ))
        }

        Command::Requests { history } => {
            let view = if history {
                QueueView::History
            } else {
                QueueView::Active
            };
            let requests = workbench.request_service.list_requests(view)?;
            let items = requests
                .iter()
                .map(|r| request_json(workbench, r, locale))
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok(json!({
                "counts": workbench.request_service.counts()?,
                "requests": items,
            }))
        }

        Command::Decide { id, decision } => {
            let decision: ReviewDecision = decision.parse()?;
            let request = workbench.request_service.decide(&id, decision).await?;
            request_json(workbench, &request, locale)
        }

        Command::Advance { id } => {
            let request = workbench.request_service.advance_request(&id).await?;
            request_json(workbench, &request, locale)
        }

        Command::Rebalance {
            request_id,
            weights,
            auto,
        } => {
            if auto {
                let portfolio = workbench.rebalance_service.auto_rebalance(&request_id).await?;
                return Ok(json!({ "applied": true, "portfolio": portfolio }));
            }
            let mut editor = workbench.rebalance_service.open_for_request(&request_id)?;
            for (name, raw) in &weights {
                let index = editor
                    .position(name)
                    .ok_or_else(|| anyhow!("Portfolio has no fund named '{}'", name))?;
                editor.set_weight_input(index, raw)?;
            }
            let preview = json!({
                "editor": &editor,
                "totalWeight": editor.total_weight(),
                "deltas": editor.deltas(),
                "insight": editor.insight(locale),
                "insightStats": editor.insight_stats(),
                "projection": editor.projection_series(),
            });
            if weights.is_empty() {
                return Ok(json!({ "applied": false, "preview": preview }));
            }
            let portfolio = workbench.rebalance_service.apply(editor).await?;
            Ok(json!({ "applied": true, "preview": preview, "portfolio": portfolio }))
        }

        Command::Terminate { agreement_id, yes } => {
            let quote = workbench.termination_service.initiate(&agreement_id)?;
            if !yes {
                return Ok(json!({
                    "confirmed": false,
                    "quote": quote,
                    "feeLabel": format_money(quote.fee),
                    "netLabel": format_money(quote.net),
                }));
            }
            let receipt = workbench.termination_service.confirm(quote).await?;
            Ok(json!({
                "confirmed": true,
                "notice": receipt.notice(locale),
                "receipt": receipt,
            }))
        }

        Command::Wizard {
            view,
            factors,
            weights,
            name,
            risk,
            aum,
        } => {
            let details = PublishDetails {
                name,
                risk: parse_risk(risk.as_deref())?,
                aum: parse_decimal("aum", &aum)?,
            };
            let mut wizard = workbench.new_wizard();
            wizard.set_market_view(view)?;
            wizard.submit_view().await?;
            for (factor, raw) in &factors {
                let factor: Factor = factor.parse()?;
                let value: i64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid factor value '{}'", raw))?;
                wizard.set_factor(factor, value.clamp(0, 100) as u8)?;
            }
            wizard.pick_funds().await?;
            for (code, raw) in &weights {
                wizard.set_holding_weight_input(code, raw)?;
            }
            wizard.run_backtest().await?;

            let report = wizard
                .state()
                .report()
                .cloned()
                .ok_or_else(|| anyhow!("Backtest produced no report"))?;
            let narrative = wizard.narrative(locale).unwrap_or_default();
            if !wizard.can_publish() {
                tracing::warn!(?report.stats, "Backtest verdict is FAIL");
                bail!("{}", narrative);
            }
            let portfolio = wizard.publish(details).await?;
            Ok(json!({
                "narrative": narrative,
                "verdictLabel": translate(locale, report.verdict.label_key()),
                "stats": report.stats,
                "portfolio": portfolio,
            }))
        }

        Command::Fees => {
            let templates = workbench.fee_service.list_templates()?;
            Ok(Value::Array(
                templates
                    .iter()
                    .map(|t| {
                        json!({
                            "template": t,
                            "typeLabel": translate(locale, t.fee_type.label_key()),
                        })
                    })
                    .collect(),
            ))
        }

        Command::Template {
            name,
            assets,
            risk,
            description,
            aum,
        } => {
            let mut form = workbench.new_template_form()?;
            form.name = name;
            if let Some(risk) = parse_risk(risk.as_deref())? {
                form.risk = risk;
            }
            form.description = description.unwrap_or_default();

            let default_ids: Vec<u32> = form.rows().iter().map(|r| r.id).collect();
            for (i, (asset, raw)) in assets.iter().enumerate() {
                let id = match default_ids.get(i) {
                    Some(id) => *id,
                    None => form.add_asset(),
                };
                form.rename_asset(id, asset.clone())?;
                form.set_asset_weight_input(id, raw)?;
            }
            for id in default_ids.iter().skip(assets.len()) {
                form.remove_asset(*id);
            }

            let checklist = form.checklist();
            if !form.is_valid() {
                tracing::warn!(?checklist, "Template form is incomplete");
            }
            let portfolio = workbench
                .publish_template(form, parse_decimal("aum", &aum)?)
                .await?;
            Ok(json!({ "checklist": checklist, "portfolio": portfolio }))
        }
    }
}
