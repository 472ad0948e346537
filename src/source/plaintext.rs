use crate::source::Entry;

/// One entry per line. Blank lines are kept so output lines up with input.
pub fn parse(name: &str, content: &str) -> Vec<Entry> {
    content
        .lines()
        .enumerate()
        .map(|(line_num, line)| Entry::text(format!("{}:{}", name, line_num + 1), line))
        .collect()
}
