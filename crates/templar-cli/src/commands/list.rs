//! Implementation of the `templar list` command.

use templar_core::application::TemplateInfo;

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    commands::open_service,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Placeholder for templates without a recorded extension.
const NO_EXTENSION: &str = "-";

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = open_service(&config)?;
    let templates = service.list_templates()?;

    // `--output-format json` applies to list as well.
    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            if templates.is_empty() {
                output.info("No templates yet")?;
                return Ok(());
            }

            let width = templates.iter().map(|t| t.name.len()).max().unwrap_or(0);
            output.header("Templates:")?;
            for template in &templates {
                output.print(&format!(
                    "  {:<width$}  {}",
                    template.name,
                    extension_label(template),
                ))?;
            }
        }

        ListFormat::List => {
            for template in &templates {
                output.data(&template.name)?;
            }
        }

        ListFormat::Json => {
            // Serialised straight to stdout so pipes always get valid JSON.
            let json = serde_json::to_string_pretty(&templates).map_err(|e| CliError::IoError {
                message: "Failed to serialise template list".into(),
                source: e.into(),
            })?;
            output.data(&json)?;
        }

        ListFormat::Csv => {
            output.data("name,extension")?;
            for template in &templates {
                output.data(&format!(
                    "{},{}",
                    csv_field(&template.name),
                    csv_field(template.extension.as_deref().unwrap_or_default()),
                ))?;
            }
        }
    }

    Ok(())
}

fn extension_label(template: &TemplateInfo) -> &str {
    match template.extension.as_deref() {
        Some(ext) if !ext.is_empty() => ext,
        _ => NO_EXTENSION,
    }
}

/// Quote a CSV field when it contains a separator, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_csv_field_is_untouched() {
        assert_eq!(csv_field("greet"), "greet");
    }

    #[test]
    fn csv_field_with_comma_is_quoted() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
    }

    #[test]
    fn csv_field_quotes_are_doubled() {
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn missing_or_empty_extension_shows_placeholder() {
        let none = TemplateInfo {
            name: "a".into(),
            extension: None,
        };
        let empty = TemplateInfo {
            name: "b".into(),
            extension: Some(String::new()),
        };
        let txt = TemplateInfo {
            name: "c".into(),
            extension: Some(".txt".into()),
        };
        assert_eq!(extension_label(&none), "-");
        assert_eq!(extension_label(&empty), "-");
        assert_eq!(extension_label(&txt), ".txt");
    }
}
