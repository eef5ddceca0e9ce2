use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{detect, report};
use crate::errors::{AppError, AppResult};
use crate::export;
use crate::input::html::HtmlDocument;
use crate::input::{self, InputFormat, TableData};
use crate::models::mode::ModeConfig;
use crate::models::report::CheckReport;
use crate::ui::messages;
use crate::utils::colors;
use crate::utils::table::Table;
use std::path::Path;

/// Handle the `check` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        file,
        threshold,
        mode,
        input_format,
        show_table,
        export: export_file,
        export_format,
    } = cmd
    {
        let path = Path::new(file);
        let format = match input_format {
            Some(f) => f.clone(),
            None => InputFormat::from_path(path)?,
        };

        let threshold = threshold.unwrap_or(cfg.threshold_minutes);

        let (mode_cfg, table) = load_table(path, &format, mode.as_deref(), cfg)?;

        let result = report::check_table(
            &table,
            &mode_cfg.columns,
            threshold,
            Some(mode_cfg.label.clone()),
        );

        for row in &result.skipped {
            messages::warning(format!(
                "Row {} has fewer cells than the '{}' layout needs; skipped",
                row, mode_cfg.name
            ));
        }

        print_report(&result, threshold);

        if *show_table {
            print_table(&table, mode_cfg, &result);
        }

        if let Some(out) = export_file {
            export::write_report(&result, export_format, Path::new(out))?;
        }
    }
    Ok(())
}

/// Resolve the mode and extract the table from the input file.
///
/// HTML goes through table-id detection unless `--mode` pins a mode; CSV
/// has no table id to match against, so the mode must be named explicitly.
fn load_table<'a>(
    path: &Path,
    format: &InputFormat,
    mode: Option<&str>,
    cfg: &'a Config,
) -> AppResult<(&'a ModeConfig, TableData)> {
    match format {
        InputFormat::Html => {
            let doc = HtmlDocument::load(path)?;
            match mode {
                Some(name) => {
                    let m = cfg.mode(name)?;
                    let table = doc
                        .table_by_id(&m.table_id)
                        .ok_or_else(|| AppError::TableNotFound(m.table_id.clone()))?;
                    Ok((m, table))
                }
                None => detect::detect_mode(&doc, &cfg.modes)
                    .ok_or_else(|| AppError::TableNotFound(detect::searched_ids(&cfg.modes))),
            }
        }
        InputFormat::Csv => {
            let name = mode.ok_or(AppError::ModeRequired)?;
            let m = cfg.mode(name)?;
            Ok((m, input::csv::read_csv(path)?))
        }
    }
}

fn print_report(report: &CheckReport, threshold: u32) {
    if let Some(mode) = &report.mode {
        messages::info(format!("Mode: {} (threshold {} min)", mode, threshold));
    }

    if report.success {
        messages::success(format!(
            "No consistency errors ({} rows checked)",
            report.rows_checked
        ));
        return;
    }

    for entry in &report.entries {
        messages::error(entry.message());
    }
    messages::error(format!(
        "{} consistency error(s) found",
        report.entries.len()
    ));
}

/// Render the checked table, washing flagged rows red and painting the
/// offending applied cell stronger, per the report's highlight
/// instructions.
fn print_table(data: &TableData, mode: &ModeConfig, report: &CheckReport) {
    let Some((header, rows)) = data.rows.split_first() else {
        return;
    };

    let table = Table::from_rows(header, rows);
    let rendered = table.render_styled(|ri, ci, cell| {
        // Table rows are 0-based over the data rows; the report counts
        // data rows from 1.
        let boundaries = report.highlighted_boundaries(ri + 1);
        if boundaries.is_empty() {
            return cell.to_string();
        }
        let flagged_cell = boundaries
            .iter()
            .any(|b| mode.columns.applied_column(*b) == ci);
        if flagged_cell {
            colors::flag_cell(cell)
        } else {
            colors::flag_row(cell)
        }
    });

    println!();
    print!("{}", rendered);
}
