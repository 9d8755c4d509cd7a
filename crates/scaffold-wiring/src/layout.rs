//! gofmt-style column alignment
//!
//! gofmt lays out struct fields and keyed literal elements with an elastic
//! tabwriter: each line is a sequence of cells, and a cell that is followed
//! by another cell on its line is padded to the widest cell of its column
//! across the block of adjacent lines that also have a terminated cell in
//! that column. The last cell of a line never takes part in alignment.

/// Spaces between an aligned cell and the next one
const PADDING: usize = 1;

/// Render rows of cells into aligned lines (without indentation)
#[must_use]
pub(crate) fn align(rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<Vec<usize>> = rows.iter().map(|r| vec![0; r.len()]).collect();
    layout_column(rows, &mut widths, 0..rows.len(), 0);

    rows.iter()
        .zip(widths)
        .map(|(cells, widths)| {
            let mut line = String::new();
            for (i, cell) in cells.iter().enumerate() {
                line.push_str(cell);
                if i + 1 < cells.len() {
                    let pad = widths[i].saturating_sub(cell_width(cell)) + PADDING;
                    line.extend(std::iter::repeat(' ').take(pad));
                }
            }
            line
        })
        .collect()
}

/// Assign widths for `column` over `lines`, recursing into each block
fn layout_column(
    rows: &[Vec<String>],
    widths: &mut [Vec<usize>],
    lines: std::ops::Range<usize>,
    column: usize,
) {
    let has_cell = |row: &Vec<String>| row.len() > column + 1;

    let mut line = lines.start;
    while line < lines.end {
        if !has_cell(&rows[line]) {
            line += 1;
            continue;
        }

        let block_start = line;
        let mut width = 0;
        while line < lines.end && has_cell(&rows[line]) {
            width = width.max(cell_width(&rows[line][column]));
            line += 1;
        }
        for row in &mut widths[block_start..line] {
            row[column] = width;
        }
        layout_column(rows, widths, block_start..line, column + 1);
    }
}

fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows(lines: &[&[&str]]) -> Vec<Vec<String>> {
        lines
            .iter()
            .map(|cells| cells.iter().map(|c| (*c).to_string()).collect())
            .collect()
    }

    #[test]
    fn aligns_struct_fields() {
        let lines = align(&rows(&[
            &["DB", "*sql.DB"],
            &["HealthModule", "*health.HealthModule"],
        ]));
        assert_eq!(
            lines,
            vec!["DB           *sql.DB", "HealthModule *health.HealthModule"]
        );
    }

    #[test]
    fn aligns_keyed_elements() {
        let lines = align(&rows(&[
            &["DB:", "db,"],
            &["OrdersModule:", "orders.NewOrdersModule(db),"],
        ]));
        assert_eq!(
            lines,
            vec!["DB:           db,", "OrdersModule: orders.NewOrdersModule(db),"]
        );
    }

    #[test]
    fn single_row_uses_single_spaces() {
        let lines = align(&rows(&[&["OrdersModule", "*orders.OrdersModule"]]));
        assert_eq!(lines, vec!["OrdersModule *orders.OrdersModule"]);
    }

    #[test]
    fn comments_align_only_across_commented_lines() {
        let lines = align(&rows(&[
            &["A", "int", "// first"],
            &["Longer", "string", "// second"],
            &["C", "bool"],
        ]));
        assert_eq!(
            lines,
            vec![
                "A      int    // first",
                "Longer string // second",
                "C      bool",
            ]
        );
    }

    #[test]
    fn single_cell_line_breaks_block() {
        let lines = align(&rows(&[
            &["A", "int"],
            &["// section"],
            &["Longer", "string"],
        ]));
        assert_eq!(lines, vec!["A int", "// section", "Longer string"]);
    }
}
