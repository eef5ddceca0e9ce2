#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tbc() -> Command {
    let mut cmd = cargo_bin_cmd!("tablecheck");
    // Keep a developer's real config out of the test runs.
    cmd.env("HOME", env::temp_dir());
    cmd.env("APPDATA", env::temp_dir());
    cmd
}

/// Write a fixture file into the system temp dir and return its path.
pub fn write_fixture(name: &str, contents: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("tablecheck_{}", name));
    fs::write(&path, contents).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path and ensure no stale file is left.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("tablecheck_{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// An approver-mode table (id `my-specific-data-table`) with the given
/// data rows, six cells each.
pub fn approver_html(rows: &[[&str; 6]]) -> String {
    html_table("my-specific-data-table", rows)
}

/// A user-mode table (id `user-data-table`).
pub fn user_html(rows: &[[&str; 6]]) -> String {
    html_table("user-data-table", rows)
}

pub fn html_table(id: &str, rows: &[[&str; 6]]) -> String {
    let mut html = format!(
        "<html><body><table id=\"{}\">\n\
         <tr><th>ID start</th><th>ID end</th><th>PC start</th><th>PC end</th>\
         <th>Ap start</th><th>Ap end</th></tr>\n",
        id
    );
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table></body></html>\n");
    html
}
