use crate::error::{Result, ScrapeError};
use cpumark_core::CpuRecord;
use scraper::{Html, Selector};

/// Selector for the listing table body.
pub const TABLE_BODY_SELECTOR: &str = "#cputable tbody";
/// Selector for the paginator's next-page link.
pub const NEXT_LINK_SELECTOR: &str = "#cputable_next a";

const ROW_SELECTOR: &str = "#cputable tbody tr";
const CELL_SELECTOR: &str = "td";

/// Extracts `CpuRecord`s from a rendered listing page.
pub struct TableParser {
    body: Selector,
    rows: Selector,
    cells: Selector,
}

impl Default for TableParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TableParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: Selector::parse(TABLE_BODY_SELECTOR).expect("valid selector"),
            rows: Selector::parse(ROW_SELECTOR).expect("valid selector"),
            cells: Selector::parse(CELL_SELECTOR).expect("valid selector"),
        }
    }

    /// Parse every row of the listing table out of a rendered page.
    ///
    /// A page without the table body is a structural failure; a present but
    /// empty body yields an empty vec and is judged by the caller.
    pub fn parse(&self, html: &str) -> Result<Vec<CpuRecord>> {
        let document = Html::parse_document(html);

        if document.select(&self.body).next().is_none() {
            return Err(ScrapeError::TableMissing);
        }

        let records = document
            .select(&self.rows)
            .map(|row| {
                let cells: Vec<String> = row
                    .select(&self.cells)
                    .map(|cell| cell.text().collect::<String>().trim().to_string())
                    .collect();
                parse_row(&cells)
            })
            .collect();

        Ok(records)
    }
}

/// Positionally map one row's cell texts onto a record.
///
/// Cell 0 is the row expander and is ignored. Missing trailing cells fall
/// back to empty text or the numeric sentinel; a malformed cell never fails
/// the row.
#[must_use]
pub fn parse_row(cells: &[String]) -> CpuRecord {
    CpuRecord {
        name: cell_text(cells, 1),
        cores: int_cell(cells, 2),
        cpu_mark: grouped_int_cell(cells, 3),
        thread_mark: grouped_int_cell(cells, 4),
        tdp: int_cell(cells, 5),
        socket: cell_text(cells, 6),
        category: cell_text(cells, 7),
    }
}

fn cell_text(cells: &[String], idx: usize) -> String {
    cells.get(idx).cloned().unwrap_or_default()
}

fn int_cell(cells: &[String], idx: usize) -> i32 {
    cells
        .get(idx)
        .and_then(|text| text.parse().ok())
        .unwrap_or(CpuRecord::SENTINEL)
}

/// Score columns carry digit-grouping commas ("12,345") that must be
/// stripped before conversion.
fn grouped_int_cell(cells: &[String], idx: usize) -> i32 {
    cells
        .get(idx)
        .and_then(|text| text.replace(',', "").parse().ok())
        .unwrap_or(CpuRecord::SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_parse_row_positional_mapping() {
        let row = cells(&[
            "1",
            "Ryzen 5 3600",
            "6",
            "15000",
            "2200",
            "65",
            "AM4",
            "Desktop",
        ]);
        let record = parse_row(&row);

        assert_eq!(record.name, "Ryzen 5 3600");
        assert_eq!(record.cores, 6);
        assert_eq!(record.cpu_mark, 15000);
        assert_eq!(record.thread_mark, 2200);
        assert_eq!(record.tdp, 65);
        assert_eq!(record.socket, "AM4");
        assert_eq!(record.category, "Desktop");
    }

    #[test]
    fn test_parse_row_strips_digit_grouping() {
        let row = cells(&[
            "1",
            "Xeon Platinum 8280",
            "28",
            "12,345",
            "1,972",
            "205",
            "FCLGA3647",
            "Server",
        ]);
        let record = parse_row(&row);

        assert_eq!(record.cpu_mark, 12345);
        assert_eq!(record.thread_mark, 1972);
    }

    #[test]
    fn test_parse_row_non_numeric_cells_fall_back_to_sentinel() {
        let row = cells(&["1", "Mystery CPU", "n/a", "NA", "", "unknown", "?", "?"]);
        let record = parse_row(&row);

        assert_eq!(record.cores, CpuRecord::SENTINEL);
        assert_eq!(record.cpu_mark, CpuRecord::SENTINEL);
        assert_eq!(record.thread_mark, CpuRecord::SENTINEL);
        assert_eq!(record.tdp, CpuRecord::SENTINEL);
        assert_eq!(record.socket, "?");
    }

    #[test]
    fn test_parse_row_missing_trailing_cells() {
        let row = cells(&["1", "Truncated CPU", "4"]);
        let record = parse_row(&row);

        assert_eq!(record.name, "Truncated CPU");
        assert_eq!(record.cores, 4);
        assert_eq!(record.cpu_mark, CpuRecord::SENTINEL);
        assert_eq!(record.socket, "");
        assert_eq!(record.category, "");
    }

    #[test]
    fn test_parse_row_accepts_negative_tdp() {
        // No plausibility validation on parsed values
        let row = cells(&["1", "Odd CPU", "2", "100", "50", "-20", "BGA", "Mobile"]);
        assert_eq!(parse_row(&row).tdp, -20);
    }

    #[test]
    fn test_parse_table_html() {
        let html = r#"
            <table id="cputable">
              <tbody>
                <tr>
                  <td></td><td>Ryzen 5 3600</td><td>6</td><td>17,828</td>
                  <td>2,674</td><td>65</td><td>AM4</td><td>Desktop</td>
                </tr>
                <tr>
                  <td></td><td>Core i5-9400F</td><td>6</td><td>9,541</td>
                  <td>2,432</td><td>65</td><td>LGA1151</td><td>Desktop</td>
                </tr>
              </tbody>
            </table>
        "#;

        let parser = TableParser::new();
        let records = parser.parse(html).expect("parse table");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Ryzen 5 3600");
        assert_eq!(records[0].cpu_mark, 17828);
        assert_eq!(records[1].name, "Core i5-9400F");
        assert_eq!(records[1].socket, "LGA1151");
    }

    #[test]
    fn test_parse_missing_table_is_structural_error() {
        let parser = TableParser::new();
        let result = parser.parse("<html><body><p>loading...</p></body></html>");
        assert!(matches!(result, Err(ScrapeError::TableMissing)));
    }

    #[test]
    fn test_parse_empty_body_yields_no_rows() {
        let parser = TableParser::new();
        let records = parser
            .parse(r#"<table id="cputable"><tbody></tbody></table>"#)
            .expect("parse empty table");
        assert!(records.is_empty());
    }
}
