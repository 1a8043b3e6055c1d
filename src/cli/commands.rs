use crate::error::LibellesResult;
use crate::generator::LocalesGenerator;
use crate::types::GeneratorOptions;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the generate command
pub fn generate(
    input: PathBuf,
    locales: PathBuf,
    overwrite: bool,
    section: Option<String>,
    verbose: bool,
) -> LibellesResult<()> {
    println!("{}", "🌐 Libellés - Generating locales".bold().green());
    println!("   Input:   {}", input.display());
    println!("   Locales: {}", locales.display());
    if overwrite {
        println!("   {}", "Existing translations will be overwritten".yellow());
    }
    if let Some(ref s) = section {
        println!(
            "   Section: {} {}",
            s.bright_yellow().bold(),
            "(not applied, every section is generated)".dimmed()
        );
    }
    println!();

    let options = GeneratorOptions::new(input, locales)
        .with_overwrite(overwrite)
        .with_section(section);
    let mut generator = LocalesGenerator::new(options);

    if verbose {
        println!("{}", "📖 Loading current translations...".cyan());
    }
    generator.load_current_translations()?;

    if verbose {
        println!(
            "   Found {} translation files\n",
            generator.summary().files_loaded
        );
        println!("{}", "📊 Reading Widgets sheet...".cyan());
    }
    generator.add_translations_from_excel()?;

    if verbose {
        let summary = generator.summary();
        println!(
            "   {} rows, {} translations\n",
            summary.rows_read, summary.translations_applied
        );
        println!("{}", "💾 Writing translation files...".cyan());
    }
    generator.save_all_translations()?;

    let summary = generator.summary();
    println!("{}", "✅ Generate translations successfully".bold().green());
    println!("   Files written: {}", summary.files_written);
    println!(
        "   Files unchanged: {}\n",
        generator.translations().len() - summary.files_written
    );

    Ok(())
}
