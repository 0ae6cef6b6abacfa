use anyhow::Result;
use log::info;

use crate::{
    cli::DetectArgs,
    process::load_input,
    resolver::{ColumnResolution, TypeSource, resolve_columns},
    roles::{DEFAULT_TYPE_VALUE, Role},
    table,
};

pub fn execute(args: &DetectArgs) -> Result<()> {
    let dataset = load_input(&args.input)?;
    let resolution = resolve_columns(&dataset);
    table::print_table(&summary_headers(), &summary_rows(&resolution));
    let missing = resolution.missing_roles();
    if missing.is_empty() {
        info!("All roles resolved for {}", dataset.source());
    } else {
        info!(
            "{} role(s) unresolved for {}",
            missing.len(),
            dataset.source()
        );
    }
    Ok(())
}

fn summary_headers() -> Vec<String> {
    vec!["role".to_string(), "column".to_string(), "note".to_string()]
}

pub(crate) fn summary_rows(resolution: &ColumnResolution) -> Vec<Vec<String>> {
    Role::ALL
        .iter()
        .map(|role| {
            let (column, note) = match (role, resolution.column(*role)) {
                (Role::Type, Some(name)) if resolution.kind == TypeSource::Default => {
                    (name.to_string(), format!("default '{DEFAULT_TYPE_VALUE}'"))
                }
                (_, Some(name)) => (name.to_string(), String::new()),
                (_, None) => ("-".to_string(), "missing".to_string()),
            };
            vec![role.to_string(), column, note]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn summary_marks_defaults_and_missing_roles() {
        let dataset = Dataset::from_records(
            "t",
            vec!["Lat".into(), "long".into()],
            Vec::<Vec<&str>>::new(),
        )
        .unwrap();
        let rows = summary_rows(&resolve_columns(&dataset));
        assert_eq!(rows[0], vec!["latitude", "Lat", ""]);
        assert_eq!(rows[2], vec!["volume", "-", "missing"]);
        assert_eq!(rows[3], vec!["type", "type", "default 'demand'"]);
    }
}
