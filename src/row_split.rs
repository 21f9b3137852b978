use crate::model::Table;

fn split_on_tabs(line: &str) -> Vec<String> {
    line.split('\t').map(str::to_string).collect()
}

fn split_on_space_runs(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut space_run = 0_usize;

    for ch in line.chars() {
        if ch == ' ' {
            space_run += 1;
            continue;
        }

        if space_run >= 2 {
            if !current.is_empty() {
                fields.push(std::mem::take(&mut current));
            }
        } else if space_run == 1 {
            current.push(' ');
        }
        space_run = 0;
        current.push(ch);
    }

    if !current.is_empty() {
        fields.push(current);
    }

    fields
}

/// One row per non-blank line. Tab lines split on every tab (empties
/// kept); other lines split on runs of two or more spaces (empties
/// dropped). A single separating space never splits.
#[must_use]
pub fn derive_rows(text: &str) -> Table {
    let mut rows = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let row = if line.contains('\t') {
            split_on_tabs(line)
        } else {
            split_on_space_runs(line)
        };
        rows.push(row);
    }

    Table { rows }
}
