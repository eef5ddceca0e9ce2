use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::table::Table;

/// Handle the `modes` command: list configured modes in detection order.
pub fn handle(cfg: &Config) -> AppResult<()> {
    messages::header("Configured modes (detection order)");
    println!();

    let header: Vec<String> = ["#", "Name", "Label", "Table id", "Applied cols"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let rows: Vec<Vec<String>> = cfg
        .modes
        .iter()
        .enumerate()
        .map(|(i, m)| {
            vec![
                (i + 1).to_string(),
                m.name.clone(),
                m.label.clone(),
                m.table_id.clone(),
                format!("{}/{}", m.columns.ap_start, m.columns.ap_end),
            ]
        })
        .collect();

    print!("{}", Table::from_rows(&header, &rows).render());
    Ok(())
}
