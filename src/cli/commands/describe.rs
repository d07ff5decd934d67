use anyhow::anyhow;
use clap::Subcommand;

use crate::cli::utils::{format_table, output_structured};
use crate::cli::OutputFormat;
use crate::introspect::{FieldDescriptor, Schema};

#[derive(Subcommand)]
pub enum DescribeCommands {
    #[command(about = "List registered resources")]
    List,

    #[command(about = "Show the capability document of a resource")]
    Show {
        #[arg(help = "Resource name")]
        resource: String,
    },
}

pub fn handle(cmd: DescribeCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let registry = crate::models::registry();

    match cmd {
        DescribeCommands::List => {
            let resources: Vec<&str> = registry.resources().collect();
            if !output_structured(output_format, &resources)? {
                let rows: Vec<Vec<String>> = registry
                    .iter()
                    .map(|(name, schema)| vec![name.to_string(), schema.table.clone(), schema.len().to_string()])
                    .collect();
                println!("{}", format_table(&["RESOURCE", "TABLE", "FIELDS"], &rows));
            }
            Ok(())
        }
        DescribeCommands::Show { resource } => {
            let schema = registry
                .get(&resource)
                .ok_or_else(|| anyhow!("unknown resource '{}'", resource))?;
            if !output_structured(output_format, schema)? {
                println!("{}", render_schema(schema));
            }
            Ok(())
        }
    }
}

fn render_schema(schema: &Schema) -> String {
    let rows: Vec<Vec<String>> = schema.iter().map(field_row).collect();
    format!(
        "Table: {}\n\n{}",
        schema.table,
        format_table(&["KEY", "COLUMN", "TYPE", "OPERATORS", "FLAGS"], &rows)
    )
}

fn field_row(field: &FieldDescriptor) -> Vec<String> {
    let operators = field.operators.iter().map(|op| op.as_str()).collect::<Vec<_>>().join(",");
    let flags = [
        (field.visible, "visible"),
        (field.filterable, "filterable"),
        (field.sortable, "sortable"),
        (field.creatable, "creatable"),
        (field.editable, "editable"),
    ]
    .into_iter()
    .filter_map(|(set, name)| set.then_some(name))
    .collect::<Vec<_>>()
    .join(",");

    vec![
        field.key.clone(),
        field.column.clone(),
        field.semantic_type.to_string(),
        operators,
        if flags.is_empty() { "-".to_string() } else { flags },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_product_fields() {
        let schema = crate::models::registry().get("product").unwrap();
        let text = render_schema(schema);
        assert!(text.starts_with("Table: products"));
        let status = text.lines().find(|l| l.starts_with("status ")).unwrap();
        assert!(status.contains("visible,filterable,sortable,editable"));
    }
}
