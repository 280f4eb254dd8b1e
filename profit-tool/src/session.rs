//! Interactive collection of a scenario request

use std::io::{BufRead, Write};

use common::error::{Error, Result};
use common::model::scenario::BasisSelection;
use magnitude::{format_usd, parse_magnitude};
use scenario_engine::{
    circulating_from_percent, resolve_circulating, ScenarioConfig, ScenarioRequest,
    ScenarioService,
};
use tracing::info;

use crate::prompt::Prompter;

/// Values supplied on the command line; each one skips its prompt
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Investment amount
    pub invest: Option<String>,
    /// Buy market cap, a menu position or a magnitude
    pub buy_market_cap: Option<String>,
    /// Comma-separated sell targets
    pub targets: Option<String>,
    /// Total supply
    pub total_supply: Option<String>,
    /// Circulating supply, absolute or `N%`
    pub circulating: Option<String>,
    /// Bases to report
    pub basis: Option<BasisSelection>,
}

impl Overrides {
    /// Whether the required values are all present, so that nothing needs
    /// to be asked
    pub fn is_complete(&self) -> bool {
        self.invest.is_some()
            && self.buy_market_cap.is_some()
            && self.targets.is_some()
            && self.total_supply.is_some()
    }
}

/// Walk the user through the inputs of a scenario run.
///
/// Returns `None` when no usable target was given.
pub fn collect_request<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    service: &ScenarioService,
    config: &ScenarioConfig,
    overrides: &Overrides,
) -> Result<Option<ScenarioRequest>> {
    let invest = match &overrides.invest {
        Some(raw) => parse_magnitude(raw)?,
        None => prompter.ask_until(
            "Investment amount (e.g. 50, 100, 22.3k)",
            Some(config.default_invest.as_str()),
            parse_magnitude,
        )?,
    };

    let menu = service.menu();
    let buy_market_cap = match &overrides.buy_market_cap {
        Some(raw) => menu.select(raw)?,
        None => {
            prompter.say("Select market cap WHEN YOU BUY (preset/custom):")?;
            for line in menu.lines() {
                prompter.say(&line)?;
            }
            prompter.ask_until(
                "Choose number or type a custom value (like 22.3k, 1.3million, 70b)",
                None,
                |choice| menu.select(choice),
            )?
        }
    };
    prompter.say(&format!("Buy market cap set to: {}", format_usd(buy_market_cap)))?;

    let raw_targets = match &overrides.targets {
        Some(raw) => raw.clone(),
        None => {
            prompter.say(
                "\nEnter target market cap(s). You can enter multiple values separated by commas \
                 (e.g. 100m,1b,70b). Use #N to pick preset N.",
            )?;
            prompter.read_line("Targets: ")?
        }
    };
    let selection = service.resolve_targets(&raw_targets);
    for skipped in &selection.skipped {
        prompter.say(&format!("Skipping target '{}': {}", skipped.entry, skipped.error))?;
    }
    if selection.targets.is_empty() {
        return Ok(None);
    }

    let total_supply = match &overrides.total_supply {
        Some(raw) => parse_magnitude(raw)?,
        None => prompter.ask_until(
            "Total token supply (e.g. 1000000000 or 1b)",
            Some(config.default_total_supply.as_str()),
            parse_magnitude,
        )?,
    };

    let circulating_supply = match &overrides.circulating {
        Some(raw) => resolve_circulating(raw, total_supply)?,
        None if overrides.is_complete() => total_supply,
        None => ask_circulating(prompter, total_supply)?,
    };

    let basis = match overrides.basis {
        Some(basis) => basis,
        None if overrides.is_complete() => BasisSelection::Both,
        None => ask_basis(prompter)?,
    };

    info!(
        "Request: invest {}, buy at {}, {} targets, supply {} (circulating {}), {:?}",
        invest,
        buy_market_cap,
        selection.targets.len(),
        total_supply,
        circulating_supply,
        basis
    );

    Ok(Some(ScenarioRequest {
        invest,
        buy_market_cap,
        targets: selection.market_caps(),
        total_supply,
        circulating_supply,
        basis,
    }))
}

fn ask_circulating<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    total_supply: f64,
) -> Result<f64> {
    let specify = prompter.ask("Do you want to specify circulating supply? (y/n) [n]", None)?;

    if specify.eq_ignore_ascii_case("y") {
        prompter.ask_until(
            "Enter circulating supply (number or percent like 20%)",
            None,
            |answer| resolve_circulating(answer, total_supply),
        )
    } else {
        prompter.ask_until(
            "Enter circulating supply percent of total (e.g. 20 for 20%)",
            Some("100"),
            |answer| {
                let percent: f64 = answer.trim().parse().map_err(|_| Error::parse(answer))?;
                circulating_from_percent(percent, total_supply).map_err(|_| Error::parse(answer))
            },
        )
    }
}

fn ask_basis<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<BasisSelection> {
    let choice = prompter.ask("Basis? 1) circulating 2) fdv 3) both [3]", None)?;

    Ok(match choice.as_str() {
        "1" => BasisSelection::Circulating,
        "2" => BasisSelection::Fdv,
        _ => BasisSelection::Both,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str, overrides: &Overrides) -> (Result<Option<ScenarioRequest>>, String) {
        let service = ScenarioService::new();
        let config = ScenarioConfig::default();
        let mut output = Vec::new();
        let result = {
            let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), &mut output);
            collect_request(&mut prompter, &service, &config, overrides)
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_full_interactive_session() {
        // invest, preset 1, targets, supply, specify circulating, 20%, fdv
        let input = "100\n1\n100m, 70b\n1b\ny\n20%\n2\n";
        let (result, output) = run_session(input, &Overrides::default());

        let request = result.unwrap().unwrap();
        assert_eq!(request.invest, 100.0);
        assert_eq!(request.buy_market_cap, 1_000_000.0);
        assert_eq!(request.targets, vec![100_000_000.0, 70_000_000_000.0]);
        assert_eq!(request.total_supply, 1_000_000_000.0);
        assert_eq!(request.circulating_supply, 200_000_000.0);
        assert_eq!(request.basis, BasisSelection::Fdv);

        assert!(output.contains("  6. 70 billion -> $70.000B"));
        assert!(output.contains("Buy market cap set to: $1.000M"));
    }

    #[test]
    fn test_defaults_and_retries() {
        // blank invest, bad then custom buy cap, bad target skipped,
        // blank supply, no circulating, blank percent, blank basis
        let input = "\nabc\n2.5m\n1b, junk\n\nn\n\n\n";
        let (result, output) = run_session(input, &Overrides::default());

        let request = result.unwrap().unwrap();
        assert_eq!(request.invest, 100.0);
        assert_eq!(request.buy_market_cap, 2_500_000.0);
        assert_eq!(request.targets, vec![1_000_000_000.0]);
        assert_eq!(request.total_supply, 1_000_000_000.0);
        assert_eq!(request.circulating_supply, 1_000_000_000.0);
        assert_eq!(request.basis, BasisSelection::Both);

        assert!(output.contains("'abc'. Please try again."));
        assert!(output.contains("Skipping target 'junk'"));
    }

    #[test]
    fn test_circulating_percent_prompt() {
        let input = "100\n1\n1b\n1b\nn\nhalf\n50\n1\n";
        let (result, _) = run_session(input, &Overrides::default());

        let request = result.unwrap().unwrap();
        assert_eq!(request.circulating_supply, 500_000_000.0);
        assert_eq!(request.basis, BasisSelection::Circulating);
    }

    #[test]
    fn test_no_targets() {
        let (result, _) = run_session("100\n1\n\n", &Overrides::default());
        assert!(result.unwrap().is_none());

        let (result, output) = run_session("100\n1\nnope, 1.2.3\n", &Overrides::default());
        assert!(result.unwrap().is_none());
        assert!(output.contains("Skipping target 'nope'"));
    }

    #[test]
    fn test_non_interactive_overrides() {
        let overrides = Overrides {
            invest: Some("$250".to_string()),
            buy_market_cap: Some("5m".to_string()),
            targets: Some("#6, 1b".to_string()),
            total_supply: Some("1 billion".to_string()),
            circulating: None,
            basis: None,
        };
        let (result, _) = run_session("", &overrides);

        let request = result.unwrap().unwrap();
        assert_eq!(request.invest, 250.0);
        assert_eq!(request.buy_market_cap, 5_000_000.0);
        assert_eq!(request.targets, vec![70_000_000_000.0, 1_000_000_000.0]);
        assert_eq!(request.circulating_supply, 1_000_000_000.0);
        assert_eq!(request.basis, BasisSelection::Both);
    }

    #[test]
    fn test_bad_override_is_fatal() {
        let overrides = Overrides {
            invest: Some("lots".to_string()),
            ..Overrides::default()
        };
        let (result, _) = run_session("100\n", &overrides);
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_input_closed_mid_session() {
        let (result, _) = run_session("100\n", &Overrides::default());
        assert!(matches!(result, Err(Error::Input(_))));
    }
}
