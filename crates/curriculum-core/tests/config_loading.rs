use curriculum_core::config::load_config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_empty_file_falls_back_to_builtin_registry() -> anyhow::Result<()> {
    let mut tmp = NamedTempFile::new()?;
    writeln!(tmp, "version: 1")?;

    let cfg = load_config(tmp.path(), false)?;
    assert_eq!(cfg.categories.len(), 5);
    assert_eq!(cfg.categories[0].name, "temptation");
    assert_eq!(cfg.settings.verses_table, "BSB_verses");
    assert_eq!(cfg.base_total(), 100);
    Ok(())
}

#[test]
fn test_partial_settings_keep_defaults() -> anyhow::Result<()> {
    let mut tmp = NamedTempFile::new()?;
    writeln!(
        tmp,
        r#"
configVersion: 1
settings:
  verses_per_week: 7
  title: Test Curriculum
categories:
  - name: hope
    target: 40
    keywords: ["%hope%", "%trust%"]
"#
    )?;

    let cfg = load_config(tmp.path(), false)?;
    assert_eq!(cfg.settings.verses_per_week, 7);
    assert_eq!(cfg.settings.base_per_category, 20);
    assert_eq!(cfg.settings.max_text_len, 600);
    assert_eq!(cfg.categories.len(), 1);
    assert_eq!(cfg.categories[0].additional_needed(20), 20);
    assert_eq!(cfg.categories[0].keywords[1].needle(), "trust");
    Ok(())
}

#[test]
fn test_unknown_keys_rejected_in_strict_mode() -> anyhow::Result<()> {
    let mut tmp = NamedTempFile::new()?;
    writeln!(
        tmp,
        r#"
version: 1
settings:
  verse_table: typo
"#
    )?;

    assert!(load_config(tmp.path(), false).is_ok());
    let err = load_config(tmp.path(), true).unwrap_err();
    assert!(err.0.contains("settings.verse_table"), "{}", err);
    Ok(())
}

#[test]
fn test_invalid_table_identifier_rejected() -> anyhow::Result<()> {
    let mut tmp = NamedTempFile::new()?;
    writeln!(
        tmp,
        r#"
version: 1
settings:
  books_table: "books; DROP TABLE x"
"#
    )?;

    let err = load_config(tmp.path(), false).unwrap_err();
    assert!(err.0.contains("books_table"));
    Ok(())
}

#[test]
fn test_empty_category_list_rejected() -> anyhow::Result<()> {
    let mut tmp = NamedTempFile::new()?;
    writeln!(tmp, "version: 1\ncategories: []")?;

    let err = load_config(tmp.path(), false).unwrap_err();
    assert!(err.0.contains("no categories"));
    Ok(())
}
