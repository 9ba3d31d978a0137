//! Active configuration output formatter

use super::common::{format_timestamp, new_table, print_json, print_table, print_yaml};
use crate::cli::OutputFormat;
use crate::qbee::ActiveConfiguration;

/// Output active configurations in the specified format
pub fn output_configurations(configs: &[ActiveConfiguration], format: &OutputFormat) {
    match format {
        OutputFormat::Table => output_table(configs),
        OutputFormat::Json => print_json(configs),
        OutputFormat::Yaml => print_yaml(configs),
    }
}

fn output_table(configs: &[ActiveConfiguration]) {
    let mut table = new_table(vec!["Target", "Commit", "Committed At", "Bundles"]);

    for config in configs {
        let target = config
            .target()
            .map(|t| t.to_string())
            .unwrap_or_else(|| format!("{}:{}", config.target_type, config.id));
        table.add_row(vec![
            target,
            config.commit_id.clone().unwrap_or_default(),
            format_timestamp(config.commit_created),
            config.bundles.join(", "),
        ]);
    }

    print_table(&table, configs.len(), "target");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_configurations() {
        let config: ActiveConfiguration = serde_json::from_value(serde_json::json!({
            "id": "t1",
            "type": "tag",
            "bundles": ["firewall", "settings"]
        }))
        .unwrap();

        output_configurations(&[config.clone()], &OutputFormat::Table);
        output_configurations(&[config], &OutputFormat::Yaml);
    }
}
