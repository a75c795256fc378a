use anyhow::Result;

use cadence_core::occurrence::generate;
use cadence_core::validation::validate;

use crate::cli::PreviewCommand;
use crate::commands::print_validation_errors;
use crate::config::Config;
use crate::parser::build_rule_config;
use crate::views::table::display_occurrences;

pub fn preview_rule(command: PreviewCommand, config: &Config) -> Result<()> {
    let rule = build_rule_config(&command.rule, config.dialect())?;

    // Generation must not run while the rule is inconsistent; the preview
    // is the error list instead.
    let errors = validate(&rule);
    if !errors.is_empty() {
        print_validation_errors(&errors);
        anyhow::bail!("{} validation error(s) found", errors.len());
    }

    let dates = generate(&rule);
    let limit = command.limit.unwrap_or(config.display_limit);
    display_occurrences(&dates, limit);
    Ok(())
}
