//! Medoid clustering and closest-match lookup on a small word list.

use medoid::{Levenshtein, MedoidIndex, Pam};

fn main() {
    // Three loose word families.
    let words: Vec<String> = [
        // Greetings
        "hello", "hallo", "hullo", "jello",
        // World / word
        "world", "word", "ward", "sword",
        // Cats
        "cat", "cart", "chat", "coat",
    ]
    .map(String::from)
    .to_vec();

    // --- Central point of the whole list ---
    let pam = Pam::new(Levenshtein);
    let central = pam.central_point(&words).unwrap();
    println!("=== Central word ===");
    println!("  {central}");

    // --- Clusters ---
    let index = MedoidIndex::build_with(words, pam).unwrap();
    println!("\n=== Clusters ({}) ===", index.clusters().len());
    for cluster in index.clusters() {
        let members: Vec<&str> = cluster
            .members
            .iter()
            .map(|&i| index.points()[i].as_str())
            .collect();
        println!("  {:8} => {}", index.points()[cluster.medoid], members.join(", "));
    }

    // --- Queries ---
    println!("\n=== Queries ===");
    for query in ["helo", "wrld", "caat", "swrd"] {
        let suggestions: Vec<String> = index
            .suggestions(&query.to_string())
            .into_iter()
            .map(|(w, d)| format!("{w} ({d})"))
            .collect();
        println!("  {query:6} => {}", suggestions.join(", "));
    }
}
