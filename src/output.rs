// src/output.rs
// =============================================================================
// Printing and saving the crawl result.
//
// - JSON (--json, and always for --result-path files) for scripts and CI
// - a ranked table for humans
// =============================================================================

use crate::crawl::CrawlResult;
use anyhow::{Context, Result};
use std::path::Path;

// Prints the result either as a table or JSON
pub fn print_results(result: &CrawlResult, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(result)?;
        println!("{}", json_output);
    } else {
        print_table(result);
    }
    Ok(())
}

/// Writes the result as pretty JSON to `path`, replacing any existing file
pub fn write_result_file(path: &Path, result: &CrawlResult) -> Result<()> {
    let json_output = serde_json::to_string_pretty(result)?;
    std::fs::write(path, json_output)
        .with_context(|| format!("cannot write result to {}", path.display()))?;
    Ok(())
}

fn print_table(result: &CrawlResult) {
    println!("{:<6} {:<40} {:>10}", "RANK", "WORD", "COUNT");
    println!("{}", "=".repeat(58));

    for (rank, (word, count)) in result.word_counts.iter().enumerate() {
        // Truncate very long words so the columns stay aligned
        let word_display = if word.chars().count() > 37 {
            format!("{}...", word.chars().take(37).collect::<String>())
        } else {
            word.clone()
        };

        println!("{:<6} {:<40} {:>10}", rank + 1, word_display, count);
    }

    if result.word_counts.is_empty() {
        println!("(no words found)");
    }

    println!();
    println!("📊 Summary:");
    println!("   🌐 URLs visited: {}", result.urls_visited);
    println!("   📝 Words shown: {}", result.word_counts.len());
}
