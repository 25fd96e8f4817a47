#[cfg(test)]
mod tests {
    use crate::index::HashPolicy;
    use crate::report::{
        BucketStat, Description, LISTING_HEADER, bucket_stats, dangling_prerequisites, describe,
        list_sorted, sorted_courses,
    };
    use crate::storage::ChainedHashTable;
    use crate::storage::record::Course;

    fn course(key: &str, title: &str, prereqs: &[&str]) -> Course {
        Course::new(key, title, prereqs.iter().map(|p| p.to_string()).collect())
    }

    fn sample_table() -> ChainedHashTable {
        let mut table = ChainedHashTable::new(10, HashPolicy::SumOfCodes).unwrap();
        table.insert(course("CSCI300", "Introduction to Algorithms", &["CSCI200", "MATH201"]));
        table.insert(course("CSCI100", "Introduction to Computer Science", &[]));
        table.insert(course("MATH201", "Discrete Mathematics", &[]));
        table.insert(course("CSCI200", "Data Structures", &["CSCI101"]));
        table
    }

    #[test]
    fn test_list_sorted() {
        let table = sample_table();
        let expected = format!(
            "{}\nCSCI100, Introduction to Computer Science\nCSCI200, Data Structures\n\
             CSCI300, Introduction to Algorithms\nMATH201, Discrete Mathematics",
            LISTING_HEADER
        );
        assert_eq!(list_sorted(&table), expected);
    }

    #[test]
    fn test_list_sorted_empty_table_has_header_only() {
        let table = ChainedHashTable::new(3, HashPolicy::SumOfCodes).unwrap();
        assert_eq!(list_sorted(&table), LISTING_HEADER);
    }

    #[test]
    fn test_sort_is_stable_for_duplicate_keys() {
        let mut table = ChainedHashTable::new(10, HashPolicy::SumOfCodes).unwrap();
        table.insert(course("CS200", "second key", &[]));
        table.insert(course("CS101", "first", &[]));
        table.insert(course("CS101", "again", &[]));

        let titles: Vec<&str> = sorted_courses(&table)
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "again", "second key"]);
    }

    #[test]
    fn test_describe_without_prerequisites() {
        let mut table = ChainedHashTable::new(10, HashPolicy::SumOfCodes).unwrap();
        table.insert(course("CS101", "Intro", &[]));

        assert_eq!(
            describe(&table, "CS101"),
            Description::Found("CS101, Intro\nPrerequisites: None".to_string())
        );
    }

    #[test]
    fn test_describe_folds_case_and_keeps_prerequisite_order() {
        let table = sample_table();
        assert_eq!(
            describe(&table, "  csci300 ").render(),
            "CSCI300, Introduction to Algorithms\nPrerequisites: CSCI200, MATH201"
        );
    }

    #[test]
    fn test_describe_not_found() {
        let table = sample_table();
        let description = describe(&table, "cs999");
        assert_eq!(
            description,
            Description::NotFound {
                key: "CS999".to_string()
            }
        );
        assert_eq!(description.render(), "Course CS999 not found.");
    }

    #[test]
    fn test_bucket_stats_cover_every_bucket() {
        let table = sample_table();
        let stats = bucket_stats(&table);

        assert_eq!(stats.len(), 10);
        assert_eq!(stats.iter().map(|s| s.chain_length).sum::<usize>(), 4);
        for BucketStat { bucket, keys, .. } in &stats {
            for key in keys {
                assert_eq!(table.bucket_of(key), *bucket);
            }
        }
    }

    #[test]
    fn test_dangling_prerequisites() {
        let table = sample_table();
        assert_eq!(
            dangling_prerequisites(&table),
            vec![("CSCI200".to_string(), "CSCI101".to_string())]
        );
    }

    #[test]
    fn test_describe_folds_ascii_letters_only() {
        let mut table = ChainedHashTable::new(10, HashPolicy::SumOfCodes).unwrap();
        table.insert(course("STRAßE1", "Street Design", &[]));

        assert_eq!(
            describe(&table, "straße1").render(),
            "STRAßE1, Street Design\nPrerequisites: None"
        );
    }

    #[test]
    fn test_describe_empty_key() {
        let table = sample_table();
        let description = describe(&table, "   ");
        assert_eq!(description, Description::NotFound { key: String::new() });
        assert_eq!(description.render(), "Course not found.");
    }
}
