use crate::model::{CategoryOutcome, GenerationReport};
use std::path::Path;

pub fn print_category_start(category: &str) {
    println!("\n🔍 Finding verses for: {}", category);
}

pub fn print_category_done(outcome: &CategoryOutcome) {
    if outcome.found() < outcome.requested as usize {
        println!(
            "   ✅ Found {} verses (requested {})",
            outcome.found(),
            outcome.requested
        );
    } else {
        println!("   ✅ Found {} verses", outcome.found());
    }
}

pub fn print_summary(report: &GenerationReport, db: &Path, out: &Path, base_seed_file: &str) {
    let db_name = db
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| db.display().to_string());
    let out_name = out
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| out.display().to_string());

    println!("\n✅ Generated curriculum SQL: {}", out.display());
    println!("📊 Total verses: {}", report.total_with_base());
    println!("📝 Run: sqlite3 {} < {}", db_name, base_seed_file);
    println!("📝 Then: sqlite3 {} < {}", db_name, out_name);
}
