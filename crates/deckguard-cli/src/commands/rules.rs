use anyhow::Result;
use deckguard_config::Config;
use deckguard_security::RedactionRuleSet;

pub fn handle(config: &Config) -> Result<()> {
    let rules = config.rule_set()?;
    print!("{}", format_rules(&rules));
    Ok(())
}

fn format_rules(rules: &RedactionRuleSet) -> String {
    if rules.is_empty() {
        return "No redaction rules configured\n".to_string();
    }

    let mut out = format!("Redaction rules ({}):\n", rules.len());
    for (i, rule) in rules.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {:?} -> {:?}\n",
            i + 1,
            rule.term,
            rule.replacement
        ));
    }
    out
}
