use anyhow::Result;
use deckguard_config::Config;
use deckguard_security::{RedactionInfo, Redactor};
use std::io::Read;

pub fn handle(config: &Config, text: Option<String>, report: bool) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let redactor = Redactor::new(config.rule_set()?);
    let (redacted, redactions) = redactor.redact_with_report(&text);

    print!("{}", redacted);
    if !redacted.ends_with('\n') {
        println!();
    }

    if report {
        eprint!("{}", format_report(&redactions));
    }

    Ok(())
}

fn format_report(redactions: &[RedactionInfo]) -> String {
    if redactions.is_empty() {
        return "No redactions\n".to_string();
    }

    redactions
        .iter()
        .map(|info| format!("  {} x{} -> {}\n", info.term, info.count, info.replacement))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckguard_security::RedactionRule;

    #[test]
    fn test_report_lists_rules_in_order() {
        let (_, redactions) =
            Redactor::default().redact_with_report("Password, confidential, PASSWORD");

        assert_eq!(
            format_report(&redactions),
            "  password x2 -> [REDACTED-SEC]\n  confidential x1 -> [REDACTED-SEC]\n"
        );
    }

    #[test]
    fn test_report_without_matches() {
        assert_eq!(format_report(&[]), "No redactions\n");
    }

    #[test]
    fn test_invalid_config_fails() {
        let mut config = Config::default();
        config.redaction.rules.insert(0, RedactionRule::new("", "x"));

        assert!(handle(&config, Some("password".to_string()), false).is_err());
    }
}
