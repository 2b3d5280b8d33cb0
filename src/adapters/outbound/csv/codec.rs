use crate::shared::error::ReportError;
use crate::tree_report::domain::{DependencyRow, Library, VersionRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Read;

/// A record type with a fixed CSV column layout.
///
/// Columns map positionally onto the record's fields; the title row is
/// checked by column count only.
pub trait CsvSchema: Serialize + DeserializeOwned {
    const COLUMNS: &'static [&'static str];

    /// Whether a table with this many columns can be read as this record
    fn accepts_width(width: usize) -> bool {
        width == Self::COLUMNS.len()
    }
}

impl CsvSchema for Library {
    const COLUMNS: &'static [&'static str] = &["name", "new_location", "latest", "description"];
}

impl CsvSchema for VersionRecord {
    const COLUMNS: &'static [&'static str] = &["name", "version", "date"];
}

/// Width of the batch dependency report, which lacks the library columns
const BATCH_REPORT_WIDTH: usize = 5;

impl CsvSchema for DependencyRow {
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "version",
        "date",
        "latest",
        "latest_date",
        "new_location",
        "description",
    ];

    fn accepts_width(width: usize) -> bool {
        width == BATCH_REPORT_WIDTH || width == Self::COLUMNS.len()
    }
}

/// CsvCodec - Reads and writes reference tables and dependency reports.
pub struct CsvCodec;

impl CsvCodec {
    /// Reads a title row followed by zero or more records.
    ///
    /// # Errors
    /// Returns `ReportError::CsvFormatError` when the title row is missing
    /// or has an unexpected width, when any row's field count differs from
    /// the title row, or when the bytes are not valid CSV.
    pub fn read<T: CsvSchema, R: Read>(reader: R, source_name: &str) -> Result<Vec<T>, ReportError> {
        let format_error = |details: String| ReportError::CsvFormatError {
            source_name: source_name.to_string(),
            details,
            expected: T::COLUMNS.join(","),
        };

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader);
        let mut records = csv_reader.records();

        let title = match records.next() {
            Some(title) => title.map_err(|e| format_error(e.to_string()))?,
            None => return Err(format_error("missing title row".to_string())),
        };
        if !T::accepts_width(title.len()) {
            return Err(format_error(format!(
                "title row has {} columns",
                title.len()
            )));
        }

        records
            .map(|record| {
                let record = record.map_err(|e| format_error(e.to_string()))?;
                record
                    .deserialize::<T>(None)
                    .map_err(|e| format_error(e.to_string()))
            })
            .collect()
    }

    pub fn parse<T: CsvSchema>(content: &str, source_name: &str) -> Result<Vec<T>, ReportError> {
        Self::read(content.as_bytes(), source_name)
    }

    /// Renders the title row and one row per record, in the order given.
    pub fn render<T: CsvSchema>(records: &[T]) -> Result<String, ReportError> {
        let render_error = |details: String| ReportError::CsvFormatError {
            source_name: "output".to_string(),
            details,
            expected: T::COLUMNS.join(","),
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer
            .write_record(T::COLUMNS)
            .map_err(|e| render_error(e.to_string()))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|e| render_error(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| render_error(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| render_error(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree_report::tables::{LibraryTable, VersionTable};

    #[test]
    fn test_parse_libraries() {
        let content = "\
name,new_location,latest,description
junit:junit,org.junit.jupiter:junit-jupiter,4.13.2,\"JUnit, the unit testing framework\"
org.slf4j:slf4j-api,,2.0.9,
";
        let libraries: Vec<Library> = CsvCodec::parse(content, "libraries.csv").unwrap();
        assert_eq!(
            libraries,
            vec![
                Library::new("junit:junit")
                    .with_new_location("org.junit.jupiter:junit-jupiter")
                    .with_latest("4.13.2")
                    .with_description("JUnit, the unit testing framework"),
                Library::new("org.slf4j:slf4j-api").with_latest("2.0.9"),
            ]
        );
    }

    #[test]
    fn test_title_names_are_not_checked() {
        let content = "library,version,released\na:b,1.0,2020-01-01\n";
        let versions: Vec<VersionRecord> = CsvCodec::parse(content, "versions.csv").unwrap();
        assert_eq!(versions, vec![VersionRecord::new("a:b", "1.0", "2020-01-01")]);
    }

    #[test]
    fn test_title_only_is_empty_table() {
        let versions: Vec<VersionRecord> =
            CsvCodec::parse("name,version,date\n", "versions.csv").unwrap();
        assert!(versions.is_empty());
    }

    #[test]
    fn test_missing_title_row() {
        let err = CsvCodec::parse::<VersionRecord>("", "versions.csv").unwrap_err();
        assert!(err.to_string().contains("missing title row"));
    }

    #[test]
    fn test_wrong_title_width() {
        let err = CsvCodec::parse::<VersionRecord>("name,version\n", "versions.csv").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("title row has 2 columns"));
        assert!(message.contains("name,version,date"));
    }

    #[test]
    fn test_row_width_mismatch_fails_whole_read() {
        let content = "name,version,date\na:b,1.0,2020-01-01\nc:d,2.0\n";
        let err = CsvCodec::parse::<VersionRecord>(content, "versions.csv").unwrap_err();
        assert!(matches!(err, ReportError::CsvFormatError { .. }));
        assert!(err.to_string().contains("versions.csv"));
    }

    #[test]
    fn test_dependency_report_accepts_both_widths() {
        let batch = "name,version,date,latest,latest_date\na:b,1.0,2020-01-01,2.0,2021-01-01\n";
        let rows: Vec<DependencyRow> = CsvCodec::parse(batch, "batch.csv").unwrap();
        assert_eq!(
            rows,
            vec![DependencyRow {
                date: "2020-01-01".to_string(),
                latest: "2.0".to_string(),
                latest_date: "2021-01-01".to_string(),
                ..DependencyRow::new("a:b", "1.0")
            }]
        );

        let enriched = "name,version,date,latest,latest_date,new_location,description\n\
                        a:b,1.0,,,,c:d,moved\n";
        let rows: Vec<DependencyRow> = CsvCodec::parse(enriched, "enriched.csv").unwrap();
        assert_eq!(rows[0].new_location, "c:d");
        assert_eq!(rows[0].description, "moved");

        let err = CsvCodec::parse::<DependencyRow>("name,version,date\n", "short.csv").unwrap_err();
        assert!(err.to_string().contains("title row has 3 columns"));
    }

    #[test]
    fn test_render_keeps_caller_order() {
        let content = CsvCodec::render(&[
            VersionRecord::new("z:z", "1.0", "2020-01-01"),
            VersionRecord::new("a:a", "1.0", ""),
        ])
        .unwrap();
        assert_eq!(content, "name,version,date\nz:z,1.0,2020-01-01\na:a,1.0,\n");
    }

    #[test]
    fn test_render_empty_table_writes_title() {
        let content = CsvCodec::render::<DependencyRow>(&[]).unwrap();
        assert_eq!(
            content,
            "name,version,date,latest,latest_date,new_location,description\n"
        );
    }

    #[test]
    fn test_render_quotes_embedded_commas() {
        let content =
            CsvCodec::render(&[Library::new("a:b").with_description("fast, small")]).unwrap();
        assert_eq!(content, "name,new_location,latest,description\na:b,,,\"fast, small\"\n");
    }

    #[test]
    fn test_library_table_round_trip() {
        let mut table = LibraryTable::new();
        table
            .merge_library(&Library::new("b:b").with_latest("1.0").with_description("x, y"))
            .unwrap();
        table
            .merge_library(&Library::new("a:a").with_new_location("c:c"))
            .unwrap();

        let content = CsvCodec::render(&table.libraries()).unwrap();
        let reloaded = LibraryTable::from_records(CsvCodec::parse(&content, "libraries.csv").unwrap());
        assert_eq!(reloaded, table);
    }

    #[test]
    fn test_version_table_round_trip() {
        let table = VersionTable::from_records(vec![
            VersionRecord::new("a:a", "1.0", "2020-01-01"),
            VersionRecord::new("a:a", "2.0", ""),
        ]);

        let content = CsvCodec::render(&table.versions()).unwrap();
        let reloaded = VersionTable::from_records(CsvCodec::parse(&content, "versions.csv").unwrap());
        assert_eq!(reloaded, table);
    }
}
