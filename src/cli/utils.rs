use serde::Serialize;

use crate::cli::OutputFormat;

/// Prints a structured value as JSON or YAML. Returns `false` for text
/// output so the caller can render its own view.
pub fn output_structured<T: Serialize>(output_format: OutputFormat, value: &T) -> anyhow::Result<bool> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(true)
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(value)?);
            Ok(true)
        }
        OutputFormat::Text => Ok(false),
    }
}

/// Renders rows as a left-aligned, space-padded table.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let render = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![render(headers.to_vec())];
    for row in rows {
        out.push(render(row.iter().map(String::as_str).collect()));
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_columns_to_widest_cell() {
        let table = format_table(
            &["KEY", "TYPE"],
            &[vec!["name".into(), "string".into()], vec!["is_active".into(), "boolean".into()]],
        );
        assert_eq!(table, "KEY        TYPE\nname       string\nis_active  boolean");
    }
}
