use crate::storage::ChainedHashTable;
use crate::storage::record::Course;

pub const LISTING_HEADER: &str = "Here is a sample schedule:";

/// Outcome of looking up one course for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    Found(String),
    NotFound { key: String },
}

impl Description {
    pub fn render(&self) -> String {
        match self {
            Description::Found(text) => text.clone(),
            Description::NotFound { key } if key.is_empty() => "Course not found.".to_string(),
            Description::NotFound { key } => format!("Course {} not found.", key),
        }
    }
}

/// All courses ordered by key. Equal keys keep their table order.
pub fn sorted_courses(table: &ChainedHashTable) -> Vec<&Course> {
    let mut courses = table.all_records();
    // `sort_by` is stable
    courses.sort_by(|a, b| a.key.cmp(&b.key));
    courses
}

pub fn list_sorted(table: &ChainedHashTable) -> String {
    let mut out = String::from(LISTING_HEADER);
    for course in sorted_courses(table) {
        out.push('\n');
        out.push_str(&course.headline());
    }
    out
}

pub fn render_course(course: &Course) -> String {
    let prerequisites = if course.has_prerequisites() {
        course.prerequisites.join(", ")
    } else {
        "None".to_string()
    };
    format!("{}\nPrerequisites: {}", course.headline(), prerequisites)
}

/// Looks `key` up after folding ASCII letters to uppercase. Stored keys are
/// expected to be uppercase already.
pub fn describe(table: &ChainedHashTable, key: &str) -> Description {
    let key = key.trim().to_ascii_uppercase();
    match table.find(&key) {
        Some(course) => Description::Found(render_course(course)),
        None => Description::NotFound { key },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketStat {
    pub bucket: usize,
    pub chain_length: usize,
    pub keys: Vec<String>,
}

pub fn bucket_stats(table: &ChainedHashTable) -> Vec<BucketStat> {
    (0..table.bucket_count())
        .map(|bucket| {
            let keys: Vec<String> = table
                .chain(bucket)
                .iter()
                .map(|course| course.key.clone())
                .collect();
            BucketStat {
                bucket,
                chain_length: keys.len(),
                keys,
            }
        })
        .collect()
}

/// `(course, prerequisite)` pairs whose prerequisite key is not in the table,
/// ordered by course key.
pub fn dangling_prerequisites(table: &ChainedHashTable) -> Vec<(String, String)> {
    sorted_courses(table)
        .into_iter()
        .flat_map(|course| {
            course
                .prerequisites
                .iter()
                .filter(|prereq| table.find(prereq).is_none())
                .map(|prereq| (course.key.clone(), prereq.clone()))
                .collect::<Vec<_>>()
        })
        .collect()
}
