use cpumark_core::CpuRecord;
use std::io::Write;

/// The fixed output header.
pub const CSV_HEADER: &str = "cpu_name;cores;cpu_mark;thread_mark;tdp;socket;category";

/// Destination for records as the pagination loop accepts them.
pub trait RecordSink {
    /// Receive one deduplicated, accepted record.
    fn accept(&mut self, record: &CpuRecord) -> std::io::Result<()>;
}

/// Collecting sink for tests and in-memory use.
impl RecordSink for Vec<CpuRecord> {
    fn accept(&mut self, record: &CpuRecord) -> std::io::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Writes the fixed-column, semicolon-delimited output.
///
/// Not a general-purpose CSV writer: fields are emitted verbatim with no
/// quoting or escaping, so a field containing `;` corrupts its line.
pub struct CsvEmitter<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> CsvEmitter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    /// Write the header line. Safe to call once before any records; the
    /// header is also emitted lazily on the first record otherwise.
    pub fn write_header(&mut self) -> std::io::Result<()> {
        if !self.header_written {
            writeln!(self.out, "{CSV_HEADER}")?;
            self.header_written = true;
        }
        Ok(())
    }

    pub fn write_record(&mut self, record: &CpuRecord) -> std::io::Result<()> {
        self.write_header()?;
        writeln!(
            self.out,
            "{};{};{};{};{};{};{}",
            record.name,
            record.cores,
            record.cpu_mark,
            record.thread_mark,
            record.tdp,
            record.socket,
            record.category
        )
    }

    /// Write a whole collection in order.
    pub fn write_all<'a, I>(&mut self, records: I) -> std::io::Result<()>
    where
        I: IntoIterator<Item = &'a CpuRecord>,
    {
        self.write_header()?;
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> RecordSink for CsvEmitter<W> {
    fn accept(&mut self, record: &CpuRecord) -> std::io::Result<()> {
        self.write_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> CpuRecord {
        CpuRecord {
            name: name.to_string(),
            cores: 6,
            cpu_mark: 17828,
            thread_mark: 2674,
            tdp: 65,
            socket: "AM4".to_string(),
            category: "Desktop".to_string(),
        }
    }

    fn emitted(emit: impl FnOnce(&mut CsvEmitter<&mut Vec<u8>>)) -> String {
        let mut buf = Vec::new();
        let mut emitter = CsvEmitter::new(&mut buf);
        emit(&mut emitter);
        String::from_utf8(buf).expect("output is UTF-8")
    }

    #[test]
    fn test_header_exact() {
        let out = emitted(|e| e.write_header().expect("write header"));
        assert_eq!(out, "cpu_name;cores;cpu_mark;thread_mark;tdp;socket;category\n");
    }

    #[test]
    fn test_empty_collection_prints_only_header() {
        let records: Vec<CpuRecord> = Vec::new();
        let out = emitted(|e| e.write_all(records.iter()).expect("write empty collection"));
        assert_eq!(out.lines().count(), 1);
        assert_eq!(out.lines().next(), Some(CSV_HEADER));
    }

    #[test]
    fn test_two_records_print_three_lines_with_six_separators() {
        let records = vec![record("Ryzen 5 3600"), record("Core i5-9400F")];
        let out = emitted(|e| e.write_all(records.iter()).expect("write records"));

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert_eq!(line.matches(';').count(), 6);
        }
    }

    #[test]
    fn test_record_line_field_order() {
        let out = emitted(|e| e.write_record(&record("Ryzen 5 3600")).expect("write record"));
        assert_eq!(
            out.lines().nth(1),
            Some("Ryzen 5 3600;6;17828;2674;65;AM4;Desktop")
        );
    }

    #[test]
    fn test_header_not_repeated() {
        let out = emitted(|e| {
            e.write_header().expect("write header");
            e.write_record(&record("A")).expect("write record");
            e.write_record(&record("B")).expect("write record");
        });
        assert_eq!(out.matches(CSV_HEADER).count(), 1);
    }

    #[test]
    fn test_no_trailing_blank_line() {
        let out = emitted(|e| e.write_record(&record("A")).expect("write record"));
        assert!(out.ends_with("Desktop\n"));
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<CpuRecord> = Vec::new();
        sink.accept(&record("A")).expect("accept record");
        sink.accept(&record("B")).expect("accept record");
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].name, "A");
    }
}
