use std::path::PathBuf;

use grimoire_model::{AffinityTier, Category};
use grimoire_standards::{
    DataFile, StandardsError, embedded_context, load_context, workspace_data_dir,
};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "grimoire-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn embedded_tables_load_and_validate() {
    let context = embedded_context().expect("load embedded context");
    for category in Category::ALL {
        assert!(!context.vocabulary().is_empty(category), "{category} empty");
    }
    assert!(context.vocabulary().contains(Category::Element, "Fire"));
    assert!(
        context
            .synonyms()
            .get(Category::Effect, "Damage")
            .iter()
            .any(|s| s == "blast")
    );
    assert!(!context.durations().get("Instant").is_empty());
    assert_eq!(context.aliases().get("Wind"), Some("Air"));
    assert_eq!(
        context.affinities().elements("Fire", AffinityTier::Best),
        ["Lightning".to_string()]
    );
    assert!(
        context
            .templates()
            .family("Damage")
            .is_some_and(|family| family.contains_key("Fire"))
    );
}

#[test]
fn effect_vocabulary_keeps_declared_order() {
    let context = embedded_context().expect("load embedded context");
    let names = context.vocabulary().names(Category::Effect).join(", ");
    insta::assert_snapshot!(
        names,
        @"Creation, Damage, Shield, Heal, Summon, Transform, Detect, Control, Teleport"
    );
}

#[test]
fn workspace_files_match_embedded_copies() {
    let dir = workspace_data_dir();
    for file in DataFile::ALL {
        let on_disk = std::fs::read_to_string(dir.join(file.file_name())).expect("read table");
        assert_eq!(on_disk, file.embedded(), "{} drifted", file.file_name());
    }
}

#[test]
fn override_directory_replaces_only_present_files() {
    let dir = unique_temp_dir("override");
    std::fs::write(
        dir.join("vocabulary.toml"),
        r#"
Effect = [{ name = "Creation" }, { name = "Damage", affix = "Ruin" }]
Element = [{ name = "Moon" }, { name = "Fire" }]
Level = [{ name = "1" }]
Duration = [
    { name = "Instant" },
    { name = "1_minute" },
    { name = "5_minute" },
    { name = "10_minute" },
]
Range = [{ name = "30ft" }]
"#,
    )
    .expect("write vocabulary");

    let context = load_context(&dir).expect("load override");
    assert_eq!(
        context.vocabulary().names(Category::Effect),
        ["Creation", "Damage"]
    );
    assert_eq!(context.vocabulary().affix(Category::Effect, "Damage"), "Ruin");
    // Synonyms still come from the embedded copy.
    assert!(!context.synonyms().get(Category::Element, "Fire").is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn malformed_override_reports_its_path() {
    let dir = unique_temp_dir("malformed");
    let path = dir.join("durations.toml");
    std::fs::write(&path, "Instant = [unterminated").expect("write durations");

    let err = load_context(&dir).expect_err("malformed TOML");
    match err {
        StandardsError::Toml { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = std::env::temp_dir().join("grimoire-does-not-exist-7f3a");
    let err = load_context(&dir).expect_err("missing dir");
    assert!(matches!(err, StandardsError::Io { .. }));
}
