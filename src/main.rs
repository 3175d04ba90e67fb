//! # chatzip CLI
//!
//! Command-line interface for the chatzip library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatzip::cli::Args;
use chatzip::config::ParserConfig;
use chatzip::filter::{FilterConfig, apply_filters};
use chatzip::format::{OutputFormat, write_to_format};
use chatzip::parser::ArchiveParser;
use chatzip::{ChatzipError, archive};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatzipError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Determine output extension based on format
    let output_path = adjust_output_extension(&args.output, args.format);

    // Print header
    println!("📦 chatzip v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Archive:  {}", args.archive);
    println!("💾 Output:   {}", output_path);
    println!("📄 Format:   {}", args.format);
    println!("🔍 Strategy: {}", args.strategy);

    // Build filter configuration
    let mut filter_config = FilterConfig::new();

    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        println!("📅 After:    {}", after);
    }

    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        println!("📅 Before:   {}", before);
    }

    if let Some(ref from) = args.from {
        filter_config = filter_config.with_author(from.clone());
        println!("👤 From:     {}", from);
    }

    println!();

    // Step 1: Extract and parse
    println!("⏳ Parsing archive...");
    let parse_start = Instant::now();

    let config = ParserConfig::new()
        .with_strategy(args.strategy.into())
        .with_entry_name(&args.entry);
    let parser = ArchiveParser::with_config(config);

    let messages = match parser.parse(Path::new(&args.archive)) {
        Ok(messages) => messages,
        Err(e) => {
            if e.is_missing_entry() {
                if let Ok(entries) = archive::list_entries(Path::new(&args.archive)) {
                    eprintln!("   Archive entries: {}", entries.join(", "));
                }
            }
            return Err(e);
        }
    };

    let parse_time = parse_start.elapsed();
    let original_count = messages.len();
    println!(
        "   Found {} messages ({:.2}s)",
        original_count,
        parse_time.as_secs_f64()
    );

    // Step 2: Filter
    let final_messages = if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        let filter_start = Instant::now();
        let filtered = apply_filters(messages, &filter_config);
        println!(
            "   {} messages after filtering ({:.2}s)",
            filtered.len(),
            filter_start.elapsed().as_secs_f64()
        );
        filtered
    } else {
        messages
    };

    // Step 3: Write output in selected format
    let lib_format: OutputFormat = args.format.into();
    println!("💾 Writing {}...", lib_format);
    let write_start = Instant::now();
    write_to_format(&final_messages, &output_path, lib_format)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Parsed:  {} messages", original_count);
    if filter_config.is_active() {
        println!("   Final:   {} messages", final_messages.len());
    }

    // Performance stats
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let msgs_per_sec = original_count as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} messages/sec", msgs_per_sec);

    Ok(())
}

/// Adjusts output file extension based on format if using default output.
fn adjust_output_extension(output: &str, format: chatzip::cli::OutputFormat) -> String {
    if output != "parsed_chat.csv" {
        return output.to_string();
    }

    format!("parsed_chat.{}", format.extension())
}
