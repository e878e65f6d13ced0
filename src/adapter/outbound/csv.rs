//! CSV-backed order log.
//!
//! One row per `(order, product)` line with the columns `Order ID`,
//! `Product`, `Quantity Ordered`, `Price Each`, `Order Date` and
//! `Purchase Address`.
//!
//! Appends follow the column order of an existing file's header, so files
//! written by other tools keep reading back correctly.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ::csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, warn};

use crate::domain::OrderLine;
use crate::error::{Error, Result};
use crate::port::outbound::order_log::OrderLog;

/// Order log stored as a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvOrderLog {
    path: PathBuf,
}

impl CsvOrderLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn needs_header(&self) -> Result<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e.into()),
        }
    }

    /// Header row of the existing file.
    ///
    /// Fails with [`Error::Storage`] when either interpreted column is absent,
    /// since appended lines could not be read back.
    fn existing_header(&self) -> Result<StringRecord> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(::csv::Trim::Headers)
            .from_path(&self.path)?;
        let header = reader.headers()?.clone();

        for required in ["Order ID", "Product"] {
            if !header.iter().any(|column| column == required) {
                return Err(Error::Storage(format!(
                    "{} has no `{required}` column",
                    self.path.display()
                )));
            }
        }
        Ok(header)
    }
}

impl OrderLog for CsvOrderLog {
    fn load(&self) -> Result<Vec<OrderLine>> {
        if !self.path.exists() {
            warn!(path = %self.path.display(), "Order file not found; starting empty");
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(::csv::Trim::Headers)
            .from_path(&self.path)?;

        let mut lines = Vec::new();
        for record in reader.deserialize::<OrderLine>() {
            lines.push(record?);
        }

        debug!(path = %self.path.display(), lines = lines.len(), "Order file read");
        Ok(lines)
    }

    fn append(&self, lines: &[OrderLine]) -> Result<()> {
        let header = if self.needs_header()? {
            None
        } else {
            Some(self.existing_header()?)
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = WriterBuilder::new()
            .has_headers(header.is_none())
            .from_writer(file);

        match header {
            None => {
                for line in lines {
                    writer.serialize(line)?;
                }
            }
            Some(header) => {
                // unknown columns are left blank
                for line in lines {
                    let record: StringRecord = header
                        .iter()
                        .map(|column| line.field(column).unwrap_or_default())
                        .collect();
                    writer.write_record(&record)?;
                }
            }
        }
        writer.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let log = CsvOrderLog::new(dir.path().join("absent.csv"));
        assert!(log.load().unwrap().is_empty());
    }

    #[test]
    fn append_to_new_file_writes_header_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        let log = CsvOrderLog::new(&path);

        log.append(&[OrderLine::new("1", "A"), OrderLine::new("1", "B")])
            .unwrap();
        log.append(&[OrderLine::new("2", "C")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("Order ID").count(), 1);

        let lines = log.load().unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], OrderLine::new("2", "C"));
    }

    #[test]
    fn append_follows_existing_column_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(&path, "Product,Order ID,Store\nA,1,north\n").unwrap();
        let log = CsvOrderLog::new(&path);

        log.append(&[OrderLine::new("2", "B")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with("B,2,\n"), "{content}");
        let pairs: Vec<(String, String)> = log
            .load()
            .unwrap()
            .into_iter()
            .map(|line| (line.order_id, line.product))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("1".to_string(), "A".to_string()),
                ("2".to_string(), "B".to_string()),
            ]
        );
    }

    #[test]
    fn append_uses_aliased_headers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(&path, "Order ID,Product,Price\n1,A,9.99\n").unwrap();
        let log = CsvOrderLog::new(&path);

        let mut line = OrderLine::new("2", "B");
        line.price = "4.50".to_string();
        log.append(&[line]).unwrap();

        let lines = log.load().unwrap();
        assert_eq!(lines[1].product, "B");
        assert_eq!(lines[1].price, "4.50");
    }

    #[test]
    fn append_rejects_file_without_product_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(&path, "Order ID,Item\n1,A\n").unwrap();

        let err = CsvOrderLog::new(&path)
            .append(&[OrderLine::new("2", "B")])
            .unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Order ID,Item\n1,A\n");
    }

    #[test]
    fn reads_passthrough_columns_and_aliases() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(
            &path,
            "Order ID,Product,Quantity,Price,Order Date,Purchase Address\n\
             176558,USB-C Charging Cable,2,11.95,04/19/19 08:46,\"917 1st St, Dallas, TX 75001\"\n",
        )
        .unwrap();

        let lines = CsvOrderLog::new(&path).load().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].order_id, "176558");
        assert_eq!(lines[0].quantity, "2");
        assert_eq!(lines[0].price, "11.95");
        assert_eq!(lines[0].purchase_address, "917 1st St, Dallas, TX 75001");
    }

    #[test]
    fn tolerates_missing_passthrough_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(&path, "Order ID,Product\n1,A\n,B\n").unwrap();

        let lines = CsvOrderLog::new(&path).load().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].is_complete());
        assert!(!lines[1].is_complete());
    }
}
