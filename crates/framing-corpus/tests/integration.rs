//! End-to-end ingest and output tests against a real directory tree,
//! mirroring the layout the collector layer produces.

use std::fs;
use std::path::PathBuf;

use framing_core::{SourceCategory, SourceRegistry, SourcesFile};
use framing_corpus::{load_raw_corpus, read_dataset_file, write_dataset_file};

fn registry() -> SourceRegistry {
    let yaml = r"
sources:
  - name: China Daily
    category: Chinese State Media
  - name: Xinhua
    category: Chinese State Media
  - name: The Guardian
    category: Western Media
";
    let file: SourcesFile = serde_yaml::from_str(yaml).unwrap();
    SourceRegistry::from_file(&file).unwrap()
}

/// Scratch directory, removed on drop so failed assertions don't leak trees.
struct Scratch {
    root: PathBuf,
}

impl Scratch {
    fn new(tag: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "framing-corpus-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("clock before epoch")
                .as_nanos()
        ));
        fs::create_dir_all(&root).expect("create scratch dir");
        Self { root }
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

#[test]
fn loads_per_outlet_directories_and_dedupes() {
    let scratch = Scratch::new("ingest");
    let raw = scratch.root.join("raw");

    fs::create_dir_all(raw.join("china_daily")).unwrap();
    fs::create_dir_all(raw.join("guardian")).unwrap();

    // No source column: the outlet comes from the directory name.
    fs::write(
        raw.join("china_daily").join("2020.csv"),
        "url,headline,body_text,publication_date\n\
         https://cd.example/1,One,Body one,2020-02-01\n\
         https://cd.example/2,Two,Body two,2020-03-01\n\
         https://cd.example/1,One again,Body dup,2020-02-01\n",
    )
    .unwrap();

    // Explicit source column plus a row outside the year window.
    fs::write(
        raw.join("guardian").join("articles.csv"),
        "url,source,headline,body_text,publication_date\n\
         https://g.example/1,The Guardian,G one,Body,2020-06-05T10:00:00Z\n\
         https://g.example/2,The Guardian,G two,Body,2012-01-01\n",
    )
    .unwrap();

    let corpus = load_raw_corpus(&raw, &registry(), 2017, 2024).unwrap();

    assert_eq!(corpus.summary.files_read, 2);
    assert_eq!(corpus.summary.raw_count, 5);
    assert_eq!(corpus.summary.outside_year_window, 1);
    assert_eq!(corpus.summary.duplicates_removed, 1);
    assert_eq!(corpus.summary.record_count, 3);
    assert_eq!(corpus.records.len(), 3);

    let chinese = corpus
        .records
        .iter()
        .filter(|r| r.category == SourceCategory::ChineseStateMedia)
        .count();
    assert_eq!(chinese, 2);

    // Duplicate resolved keep-first.
    let first = corpus
        .records
        .iter()
        .find(|r| r.url == "https://cd.example/1")
        .unwrap();
    assert_eq!(first.headline, "One");
}

#[test]
fn unknown_outlet_directory_aborts_the_load() {
    let scratch = Scratch::new("unknown");
    let raw = scratch.root.join("raw");
    fs::create_dir_all(raw.join("fox_news")).unwrap();
    fs::write(
        raw.join("fox_news").join("articles.csv"),
        "url,headline,body_text,publication_date\n\
         https://fox.example/1,Title,Body,2020-01-01\n",
    )
    .unwrap();

    let err = load_raw_corpus(&raw, &registry(), 2017, 2024).unwrap_err();
    assert!(
        err.to_string().contains("unknown source"),
        "expected unknown-source failure, got: {err}"
    );
}

#[test]
fn dataset_file_roundtrip_preserves_records() {
    let scratch = Scratch::new("roundtrip");
    let path = scratch.root.join("out").join("balanced_dataset.csv");

    let records = vec![framing_core::ArticleRecord {
        url: "https://cd.example/9".to_string(),
        source: "China Daily".to_string(),
        category: SourceCategory::ChineseStateMedia,
        year: 2021,
        headline: "Roundtrip".to_string(),
        body_text: "Original body".to_string(),
        clean_text: "Original body".to_string(),
        token_count: 2,
        publication_date: Some("2021-05-05".to_string()),
    }];

    write_dataset_file(&path, &records).unwrap();
    let back = read_dataset_file(&path).unwrap();

    assert_eq!(back.len(), 1);
    assert_eq!(back[0].url, records[0].url);
    assert_eq!(back[0].category, SourceCategory::ChineseStateMedia);
    assert_eq!(back[0].token_count, 2);
    assert_eq!(back[0].clean_text, "Original body");
    assert_eq!(back[0].publication_date.as_deref(), Some("2021-05-05"));
}
