use std::io::Cursor;

use medoid::{Corpus, CorpusOptions, Distance, Error, Levenshtein, MedoidIndex, Pam};

const WORDS: &str = "hello\nHallo\nhollo\nworld\nword\nward\nhello\n";

fn load() -> Vec<String> {
    let corpus = Corpus::from_reader(Cursor::new(WORDS), &CorpusOptions::default()).unwrap();
    assert_eq!(corpus.report().duplicates, ["hello"]);
    corpus.into_parts().0
}

fn strings(found: Vec<&String>) -> Vec<&str> {
    found.into_iter().map(String::as_str).collect()
}

#[test]
fn index_separates_the_two_families() {
    let index = MedoidIndex::build(load(), Levenshtein).unwrap();

    assert!(index.clusters().len() >= 2);
    let points = index.points();
    for cluster in index.clusters() {
        let hello_like = cluster
            .members
            .iter()
            .filter(|&&i| points[i].starts_with('h'))
            .count();
        // No cluster mixes the two families.
        assert!(hello_like == 0 || hello_like == cluster.len());
    }
}

#[test]
fn helo_is_corrected_to_hello() {
    let index = MedoidIndex::build(load(), Levenshtein).unwrap();
    let found = strings(index.query(&"helo".to_string()));

    assert!(found.contains(&"hello"));
    assert!(!found.contains(&"word"));
    assert!(!found.contains(&"ward"));
}

#[test]
fn final_pass_is_a_no_op() {
    let index = MedoidIndex::build(load(), Levenshtein).unwrap();
    for query in ["helo", "wrd", "wort", "hallo", "x"] {
        let query = query.to_string();
        let found = index.query(&query);
        let again = medoid::closest_within(&query, found.iter().copied(), &Levenshtein, 0);
        assert_eq!(found, again, "query {query:?}");
    }
}

#[test]
fn repeated_builds_are_identical() {
    let a = MedoidIndex::build(load(), Levenshtein).unwrap();
    let b = MedoidIndex::build_with(load(), Pam::new(Levenshtein).with_min_points_per_task(1)).unwrap();

    assert_eq!(a.clusters(), b.clusters());
    for query in ["helo", "wrd", "wort"] {
        let query = query.to_string();
        assert_eq!(a.query(&query), b.query(&query));
    }
}

#[test]
fn suggestions_are_sorted_by_distance() {
    let index = MedoidIndex::build(load(), Levenshtein).unwrap();
    let query = "wrd".to_string();
    let ranked = index.suggestions(&query);

    assert!(!ranked.is_empty());
    for pair in ranked.windows(2) {
        assert!(pair[0].1 <= pair[1].1);
    }
    for (word, d) in &ranked {
        assert_eq!(Levenshtein.distance(&query, *word), *d);
    }
}

#[test]
fn closure_distances_work_end_to_end() {
    let numbers: Vec<i64> = vec![1, 2, 3, 50, 51, 52, 53];
    let index = MedoidIndex::build(numbers, |a: &i64, b: &i64| a.abs_diff(*b) as usize).unwrap();

    let found = index.query(&49);
    assert_eq!(found, [&50]);
    let found = index.query(&0);
    assert_eq!(found, [&1]);
}

#[test]
fn degenerate_corpora_are_rejected() {
    assert!(matches!(
        MedoidIndex::build(Vec::<String>::new(), Levenshtein),
        Err(Error::EmptyInput)
    ));
    assert!(matches!(
        Corpus::from_reader(Cursor::new("\n\n"), &CorpusOptions::default()),
        Err(Error::EmptyInput)
    ));
}
