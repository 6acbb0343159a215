/// Columns the generator reads or targets on the verses relation.
pub const VERSE_COLUMNS: &[&str] = &[
    "id",
    "book_id",
    "chapter",
    "verse",
    "text",
    "category",
    "curriculum_week",
    "difficulty",
    "keyword",
];

pub const BOOK_COLUMNS: &[&str] = &["id", "name"];

/// Layout of the Bible database with the default table names.
/// The generator never runs this; fixtures and local tooling do.
pub const DDL: &str = r#"
CREATE TABLE IF NOT EXISTS BSB_books (
  id INTEGER PRIMARY KEY,
  name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS BSB_verses (
  id INTEGER PRIMARY KEY,
  book_id INTEGER NOT NULL REFERENCES BSB_books(id),
  chapter INTEGER NOT NULL,
  verse INTEGER NOT NULL,
  text TEXT NOT NULL,
  category TEXT,
  curriculum_week INTEGER,
  difficulty INTEGER,
  keyword TEXT,
  UNIQUE (book_id, chapter, verse)
);
"#;
