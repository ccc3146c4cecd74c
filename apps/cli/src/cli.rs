use clap::{Parser, Subcommand};

/// Splits `NAME=VALUE` command-line pairs.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{}'", raw));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// WealthPulse advisor workbench. Every run starts from the demo data set.
#[derive(Parser, Debug)]
#[command(name = "wealthpulse")]
#[command(version)]
#[command(about = "Advisor workbench: strategies, rebalancing, review queue and terminations", long_about = None)]
pub struct Cli {
    /// Display locale (zh or en); overrides WP_LOCALE
    #[arg(long, global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dashboard figures
    Summary,

    /// List clients
    Clients {
        /// ACTIVE, PENDING, INACTIVE or ALL
        #[arg(long)]
        status: Option<String>,
    },

    /// List strategy portfolios
    Portfolios,

    /// Show the review queue
    Requests {
        /// Show archived requests instead of pending ones
        #[arg(long)]
        history: bool,
    },

    /// Accept or reject a pending request
    Decide {
        id: String,
        /// accept or reject
        decision: String,
    },

    /// Move a submitted request one stage through intake
    Advance { id: String },

    /// Review a rebalancing proposal
    Rebalance {
        request_id: String,

        /// Proposed weight for a fund, e.g. --set "Tech Leaders=50"
        #[arg(long = "set", value_parser = parse_assignment)]
        weights: Vec<(String, String)>,

        /// Accept the engine's own rebalance without edits
        #[arg(long, conflicts_with = "weights")]
        auto: bool,
    },

    /// Quote, and with --yes settle, an agreement termination
    Terminate {
        agreement_id: String,

        /// Confirm the termination
        #[arg(long)]
        yes: bool,
    },

    /// Run the portfolio construction wizard end to end
    Wizard {
        /// Market view text
        #[arg(long)]
        view: String,

        /// Factor slider, e.g. --factor sharpe=80
        #[arg(long = "factor", value_parser = parse_assignment)]
        factors: Vec<(String, String)>,

        /// Holding weight by fund code, e.g. --set 005827=25
        #[arg(long = "set", value_parser = parse_assignment)]
        weights: Vec<(String, String)>,

        /// Portfolio name (derived from the view when omitted)
        #[arg(long)]
        name: Option<String>,

        /// CONSERVATIVE, BALANCED or AGGRESSIVE
        #[arg(long)]
        risk: Option<String>,

        /// Starting AUM of the published portfolio
        #[arg(long, default_value = "0")]
        aum: String,
    },

    /// List fee templates
    Fees,

    /// Publish a hand-built strategy template
    Template {
        #[arg(long)]
        name: String,

        /// Asset row, e.g. --asset "Large-cap Growth=60"
        #[arg(long = "asset", value_parser = parse_assignment, required = true)]
        assets: Vec<(String, String)>,

        #[arg(long)]
        risk: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, default_value = "0")]
        aum: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("Tech Leaders = 50").unwrap(),
            ("Tech Leaders".to_string(), "50".to_string())
        );
        assert!(parse_assignment("50").is_err());
        assert!(parse_assignment("=50").is_err());
    }

    #[test]
    fn test_rebalance_args() {
        let cli = Cli::parse_from([
            "wealthpulse",
            "--locale",
            "en",
            "rebalance",
            "AI-20240316-001",
            "--set",
            "Tech Leaders=50",
            "--set",
            "Cash Reserve=15",
        ]);
        match cli.command {
            Command::Rebalance { weights, auto, .. } => {
                assert_eq!(weights.len(), 2);
                assert!(!auto);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.locale.as_deref(), Some("en"));
    }
}
