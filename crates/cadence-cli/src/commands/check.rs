use anyhow::Result;
use owo_colors::OwoColorize;

use cadence_core::validation::validate;

use crate::cli::CheckCommand;
use crate::commands::print_validation_errors;
use crate::config::Config;
use crate::parser::build_rule_config;

pub fn check_rule(command: CheckCommand, config: &Config) -> Result<()> {
    let rule = build_rule_config(&command.rule, config.dialect())?;

    let errors = validate(&rule);
    if errors.is_empty() {
        println!("{}", "Rule is valid.".green());
        Ok(())
    } else {
        print_validation_errors(&errors);
        anyhow::bail!("{} validation error(s) found", errors.len())
    }
}
