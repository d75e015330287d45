//! The `quizsheet init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizsheet.toml").exists() {
        println!("quizsheet.toml already exists, skipping.");
    } else {
        std::fs::write("quizsheet.toml", SAMPLE_CONFIG)?;
        println!("Created quizsheet.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizsheet fetch --link <share-link> --index 1");
    println!("  2. Run: quizsheet collate");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizsheet configuration

# Directory holding answers_respondent_{n}.txt files.
data_dir = "./data"

# numeric: respondent 2 before 10. lexicographic: by file name.
sort_order = "numeric"

# indexed: blocks keyed by header number. sequential: single counter-driven pass.
scan_strategy = "indexed"

[fetch]
base_url = "https://drive.google.com"
timeout_secs = 60
"#;
