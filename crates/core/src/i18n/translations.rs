//! Static key → label table for both locales.

use super::Locale;

/// (key, zh, en)
const TRANSLATIONS: &[(&str, &str, &str)] = &[
    // Navigation
    ("nav_dashboard", "工作控制台", "Dashboard"),
    ("nav_clients", "客户管理", "Clients"),
    ("nav_portfolios", "基金策略组合管理", "Fund Strategy Management"),
    ("nav_requests", "审批任务中心", "Audit Center"),
    ("nav_settings", "系统设置", "Settings"),
    // Queue
    ("tab_active", "待处理任务", "Pending"),
    ("tab_history", "历史归档", "Archives"),
    (
        "msg_transfer_out_notice",
        "注：根据客户托管协议，资金转出属于告知项，系统已自动处理，请点击确认知晓。",
        "Note: Per custody agreement, fund withdrawals are notification-only. System has processed this; please acknowledge.",
    ),
    (
        "msg_ai_rebalance_notice",
        "注：系统已根据 AI 模型算法完成自动调仓，请投资经理对执行结果进行合规性复核。",
        "Note: System has auto-executed rebalancing via AI. Manager review required for compliance verification.",
    ),
    ("btn_acknowledge", "确认知晓", "Acknowledge"),
    ("btn_manual_fix", "手动修正/干预", "Manual Adjustment"),
    ("btn_verify_ok", "核对无误/归档", "Verify & Archive"),
    ("history_success_note", "合规核验通过，流水已入账。", "Compliance verified, log archived."),
    ("history_failed_note", "复核警示：经理已进行手动对冲干预。", "Warning: Manager performed manual hedging."),
    // Risk preference
    ("risk_con", "保守型", "Conservative"),
    ("risk_bal", "稳健型", "Balanced"),
    ("risk_agg", "激进型", "Aggressive"),
    // Customer status
    ("filter_all", "全部客户", "All Clients"),
    ("status_active", "存续中", "Active"),
    ("status_pending", "开户中", "Pending"),
    ("status_inactive", "已销户", "Closed"),
    // Request types
    ("req_transfer_in", "资金转入", "Deposit"),
    ("req_transfer_out", "资金转出通知", "Withdrawal Alert"),
    ("req_rebalancing", "算法调仓流水", "Algo Rebalance Log"),
    ("req_termination", "协议解约", "Termination"),
    ("req_kyc_expired", "风险测评到期", "KYC Expired"),
    ("req_drift_alert", "策略偏离预警", "Drift Alert"),
    // Request status
    ("req_status_submitted", "已提交", "Submitted"),
    ("req_status_validating", "校验中", "Validating"),
    ("req_status_auditing", "待审", "Pending"),
    ("req_status_success", "已归档", "Archived"),
    ("req_status_failed", "驳回", "Rejected"),
    // Agreements
    ("agreement_signed", "已签约", "Signed"),
    ("agreement_pending", "签约中", "Pending"),
    ("agreement_terminating", "解约中", "Terminating"),
    ("agreement_terminated", "已解约", "Terminated"),
    // Fees
    ("fee_management", "固定管理费", "Management Fee"),
    ("fee_performance", "超额业绩报酬", "Performance Fee"),
    ("fee_custodian", "托管费", "Custodian Fee"),
    // Wizard
    ("ai_step_1", "主观观点录入", "Market View"),
    ("ai_step_2", "因子选基规则", "Factor Rules"),
    ("ai_step_3", "历史回溯评测", "Backtest Analysis"),
    ("ai_step_4", "方案上架", "Publishing"),
    ("ai_factor_sharpe", "夏普比率 (Sharpe)", "Sharpe Ratio"),
    ("ai_factor_alpha", "超额收益 (Alpha)", "Alpha (Alpha)"),
    ("ai_factor_vol", "波动率控制", "Volatility Ctrl"),
    ("ai_factor_size", "基金规模优先", "Fund Size Pref"),
    ("ai_verdict_pass", "评测通过：建议上架", "Verdict: PASS (Ready to Publish)"),
    ("ai_verdict_fail", "评测未通过：风险波动过载", "Verdict: FAIL (High Risk Drift)"),
    (
        "ai_publish_ready",
        "方案已准备就绪，可以发布至客户终端。",
        "Portfolio is ready to be published to client terminals.",
    ),
    ("ai_publish_blocked", "回测未通过，方案不可发布。", "Backtest failed; the draft cannot be published."),
    // Request rationale fallbacks
    ("reason_transfer_in", "客户发起资金转入，待核对到账流水。", "Client deposit pending reconciliation."),
    (
        "reason_defensive_rotation",
        "检测到市场波动性上升，系统已完成防御性仓位切换。",
        "Market volatility rising. Defensive rotation completed.",
    ),
    ("reason_termination", "客户申请解除投顾协议。", "Client requested termination of the advisory agreement."),
    ("reason_kyc_expired", "客户风险测评已过有效期，需重新评估。", "Client risk assessment has expired and must be renewed."),
    ("reason_drift_alert", "组合偏离目标配置超出阈值。", "Portfolio drift exceeded the target allocation threshold."),
    // Rebalance
    (
        "rebalance_unbalanced",
        "当前权重尚未配平至 100%，请继续调整。",
        "Weights not yet balanced to 100%.",
    ),
    (
        "rebalance_insight",
        "经 AI 实时分析，当前调仓策略相比原方案预期收益提升 {return_lift}%，波动率下降 {vol_reduction}%。",
        "AI real-time analysis: Expected return +{return_lift}%, Volatility -{vol_reduction}% vs original.",
    ),
    // Termination
    (
        "termination_notice",
        "协议 {id} 已解约：扣除手续费 {fee}，净额 {net}。",
        "Agreement {id} terminated: fee {fee} deducted, net {net}.",
    ),
    // Templates
    ("template_asset_growth", "大盘成长股", "Large-cap Growth"),
    ("template_asset_cash", "现金/货币工具", "Cash / Money Market"),
    ("template_asset_new", "新增资产类别", "New Asset Class"),
    ("check_name_defined", "方案名称已定义", "Strategy name defined"),
    ("check_balanced", "资产分配比例平衡 (100%)", "Allocation balanced (100%)"),
    ("check_no_empty", "无空缺权重的资产项", "No empty asset weights"),
];

/// Looks up `key` for `locale`, falling back to the key itself.
pub fn translate(locale: Locale, key: &str) -> &str {
    TRANSLATIONS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, zh, en)| match locale {
            Locale::Zh => *zh,
            Locale::En => *en,
        })
        .unwrap_or(key)
}

/// Looks up `key` and fills `{name}` placeholders from `args`.
pub fn translate_with(locale: Locale, key: &str, args: &[(&str, String)]) -> String {
    args.iter()
        .fold(translate(locale, key).to_string(), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
}

/// Locale-bound lookup handle.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.locale, key)
    }

    pub fn format(&self, key: &str, args: &[(&str, String)]) -> String {
        translate_with(self.locale, key, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_locales() {
        assert_eq!(Translator::new(Locale::En).t("tab_history"), "Archives");
        assert_eq!(Translator::new(Locale::Zh).t("tab_history"), "历史归档");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(Translator::new(Locale::En).t("no_such_key"), "no_such_key");
    }

    #[test]
    fn test_placeholders_are_filled() {
        let text = translate_with(
            Locale::En,
            "termination_notice",
            &[
                ("id", "WA-0856".to_string()),
                ("fee", "¥200".to_string()),
                ("net", "¥199,800".to_string()),
            ],
        );
        assert_eq!(text, "Agreement WA-0856 terminated: fee ¥200 deducted, net ¥199,800.");
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = TRANSLATIONS.iter().map(|(k, _, _)| *k).collect();
        keys.sort_unstable();
        let before = keys.len();
        keys.dedup();
        assert_eq!(before, keys.len());
    }
}
