#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Write `contents` to a temp file that is removed on drop.
pub fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("cartwise-config-")
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

/// A config file in `dir` pointing at `orders`.
pub fn config_for(dir: &Path, orders: &Path) -> PathBuf {
    let path = dir.join("config.toml");
    let contents = format!(
        "[logging]\nlevel = \"warn\"\nformat = \"pretty\"\n\n[data]\norders_path = {:?}\n",
        orders.display().to_string()
    );
    fs::write(&path, contents).expect("write config");
    path
}

/// An order CSV in `dir` with the given `(order id, product)` rows.
pub fn orders_csv(dir: &Path, rows: &[(&str, &str)]) -> PathBuf {
    let path = dir.join("orders.csv");
    let mut contents =
        String::from("Order ID,Product,Quantity Ordered,Price Each,Order Date,Purchase Address\n");
    for (id, product) in rows {
        contents.push_str(&format!("{id},{product},1,9.99,04/19/19 08:46,\"1 Main St, Austin, TX\"\n"));
    }
    fs::write(&path, contents).expect("write orders");
    path
}
