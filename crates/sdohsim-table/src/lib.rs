//! In-memory tab-separated table model for the sdohsim project.
//!
//! A [`DataTable`] is the whole input file held in memory as a header row
//! plus string cells. The enrichment run reads the table once, appends
//! derived columns, and writes it back out; there is no streaming path.
//!
//! # Examples
//!
//! ```
//! use sdohsim_table::DataTable;
//!
//! let tsv = "patient\tOS_MONTHS\np1\t12.5\np2\tnot_reported\n";
//! let mut table = DataTable::from_reader(tsv.as_bytes()).unwrap();
//!
//! let durations = table.numeric_column("OS_MONTHS").unwrap();
//! assert_eq!(durations[0], 12.5);
//! assert!(durations[1].is_nan());
//!
//! table
//!     .push_column("Group", vec!["A".to_owned(), String::new()])
//!     .unwrap();
//! assert_eq!(table.headers(), ["patient", "OS_MONTHS", "Group"]);
//! ```

use std::{fs::File, io, path::Path};

/// Errors reading, writing, or reshaping a table.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TableError {
    #[display("table IO failed: {_0}")]
    Csv(#[error(source)] csv::Error),
    #[display("column '{name}' not found in table header")]
    MissingColumn { name: String },
    #[display("column '{name}' has {actual} values for {expected} rows")]
    ColumnLength {
        name: String,
        expected: usize,
        actual: usize,
    },
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// A tab-separated table held fully in memory.
///
/// Cells are kept as raw strings; numeric interpretation happens only on
/// demand via [`Self::numeric_column`], so a round trip through the table
/// never reformats untouched columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Reads a TSV table from any reader.
    ///
    /// The first record is the header. Ragged rows are rejected by the
    /// underlying parser.
    pub fn from_reader<R>(reader: R) -> Result<Self, TableError>
    where
        R: io::Read,
    {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(str::to_owned).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_owned).collect());
        }
        Ok(Self { headers, rows })
    }

    /// Reads a TSV table from a file.
    pub fn from_path<P>(path: P) -> Result<Self, TableError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path.as_ref()).map_err(csv::Error::from)?;
        Self::from_reader(io::BufReader::new(file))
    }

    /// Writes the table as TSV to any writer.
    pub fn to_writer<W>(&self, writer: W) -> Result<(), TableError>
    where
        W: io::Write,
    {
        let mut wtr = csv::WriterBuilder::new().delimiter(b'\t').from_writer(writer);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Writes the table as TSV to a file.
    pub fn to_path<P>(&self, path: P) -> Result<(), TableError>
    where
        P: AsRef<Path>,
    {
        let file = File::create(path.as_ref()).map_err(csv::Error::from)?;
        self.to_writer(io::BufWriter::new(file))
    }

    /// The header row.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// The data rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Finds the position of a named column.
    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::MissingColumn {
                name: name.to_owned(),
            })
    }

    /// Coerces a named column to numbers.
    ///
    /// Cells that are empty or fail to parse become NaN, mirroring how a
    /// missing clinical measurement propagates: downstream code must
    /// decide what an undefined value means.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, TableError> {
        let idx = self.column_index(name)?;
        let values = self
            .rows
            .iter()
            .map(|row| row[idx].trim().parse().unwrap_or(f64::NAN))
            .collect();
        Ok(values)
    }

    /// Appends a new column with one value per row.
    pub fn push_column(&mut self, name: &str, values: Vec<String>) -> Result<(), TableError> {
        if values.len() != self.rows.len() {
            return Err(TableError::ColumnLength {
                name: name.to_owned(),
                expected: self.rows.len(),
                actual: values.len(),
            });
        }
        self.headers.push(name.to_owned());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }
}
