// src/table.rs

/// Parsed contents of a delimited text file: one header row plus a matrix
/// of string cells. Built once by [`Table::parse`], never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse full file text into a table.
    ///
    /// The first line becomes the headers. Empty input or a blank first line
    /// yields an empty table; that is defined behavior, not an error. Rows
    /// whose field count differs from the header count are kept as-is.
    pub fn parse(text: &str) -> Table {
        let mut lines = text.lines();

        let headers = match lines.next() {
            Some(first) if !first.trim().is_empty() => parse_record(first),
            _ => return Table::default(),
        };

        let rows = lines.map(parse_record).collect();

        Table { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Headers define the column count; ragged rows do not widen the table.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Split one line into fields.
///
/// A `"` toggles quoting without being emitted; a `,` outside quotes ends the
/// field, inside quotes it is literal. There is no escape for an embedded
/// quote. Fields that were never quoted are trimmed of surrounding
/// whitespace; quoted fields keep their interior verbatim.
fn parse_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut inside = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                inside = !inside;
                quoted = true;
            }
            ',' if !inside => {
                fields.push(finish_field(field, quoted));
                field = String::new();
                quoted = false;
            }
            _ => field.push(c),
        }
    }
    fields.push(finish_field(field, quoted));

    fields
}

fn finish_field(field: String, quoted: bool) -> String {
    if quoted {
        field
    } else {
        field.trim().to_string()
    }
}
