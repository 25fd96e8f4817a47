use crate::storage::record::Course;

/// Splits `line` the way a stream tokenizer does: an empty line has no
/// fields, and one trailing delimiter does not open an extra empty field.
pub fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }
    let line = line.strip_suffix(delimiter).unwrap_or(line);
    line.split(delimiter).collect()
}

/// Builds a course from one source line, or `None` when the line has fewer
/// than two fields. Empty prerequisite fields are dropped.
pub fn parse_line(line: &str, delimiter: char) -> Option<Course> {
    let fields = split_fields(line, delimiter);
    if fields.len() < 2 {
        return None;
    }

    let prerequisites = fields[2..]
        .iter()
        .filter(|field| !field.is_empty())
        .map(|field| field.to_string())
        .collect();

    Some(Course::new(fields[0], fields[1], prerequisites))
}
