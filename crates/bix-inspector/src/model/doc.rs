//! Documentation cleanup applied before text leaves the object model.
//!
//! Mirrors what the host runtime's documentation accessor does to raw
//! docstrings: tabs expand to 8-column stops, the common indentation of the
//! continuation lines is removed, the first line loses its leading
//! whitespace, and empty leading/trailing lines are dropped.

const TAB_SIZE: usize = 8;

pub fn clean_doc(raw: &str) -> String {
    let expanded: Vec<String> = raw.split('\n').map(expand_tabs).collect();

    let margin = expanded
        .iter()
        .skip(1)
        .filter_map(|line| {
            let content = line.trim_start();
            (!content.is_empty()).then(|| line.chars().count() - content.chars().count())
        })
        .min();

    let mut lines: Vec<String> = expanded
        .iter()
        .enumerate()
        .map(|(index, line)| {
            if index == 0 {
                line.trim_start().to_string()
            } else if let Some(margin) = margin {
                line.chars().skip(margin).collect()
            } else {
                line.clone()
            }
        })
        .collect();

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|line| line.is_empty()).count();
    lines.drain(..leading);

    lines.join("\n")
}

fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_SIZE - column % TAB_SIZE;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}
