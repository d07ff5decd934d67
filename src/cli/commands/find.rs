use anyhow::{anyhow, Context};

use crate::cli::utils::output_structured;
use crate::cli::OutputFormat;
use crate::filter::{Filter, FilterData};

pub fn handle(resource: &str, filter_json: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let schema = crate::models::registry()
        .get(resource)
        .ok_or_else(|| anyhow!("unknown resource '{}'", resource))?;
    let filter_data: FilterData = serde_json::from_str(filter_json).context("filter is not valid JSON")?;

    let mut filter = Filter::new(schema);
    filter.assign(filter_data)?;
    let sql = filter.to_sql();

    if !output_structured(output_format, &sql)? {
        println!("{}", sql.query);
        for (i, param) in sql.params.iter().enumerate() {
            println!("  ${} = {}", i + 1, param);
        }
    }
    Ok(())
}
