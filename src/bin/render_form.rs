//! Render JSON form descriptions to PDF
//!
//! Writes one `<stem>.pdf` per input form and optionally bundles every
//! rendered PDF into a single zip archive.
//!
//! Usage:
//!   cargo run --release --bin render_form -- order.json invoice.json
//!   cargo run --release --bin render_form -- forms/*.json --output-dir out --zip out/forms.zip

use pdf_formkit::form::FormDescription;
use pdf_formkit::OutputMerger;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

struct RenderConfig {
    forms: Vec<PathBuf>,
    output_dir: PathBuf,
    zip_path: Option<PathBuf>,
    verbose: bool,
}

impl RenderConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut forms = Vec::new();
        let mut output_dir = PathBuf::from(".");
        let mut zip_path = None;
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output-dir" => {
                    i += 1;
                    if i < args.len() {
                        output_dir = PathBuf::from(&args[i]);
                    }
                },
                "--zip" => {
                    i += 1;
                    if i < args.len() {
                        zip_path = Some(PathBuf::from(&args[i]));
                    }
                },
                "--verbose" | "-v" => {
                    verbose = true;
                },
                other => forms.push(PathBuf::from(other)),
            }
            i += 1;
        }

        Self {
            forms,
            output_dir,
            zip_path,
            verbose,
        }
    }
}

/// Hands out one output file name per form, suffixing repeated stems
/// (`order.pdf`, `order-2.pdf`, ...) so neither the output directory nor
/// the archive ends up with two entries under the same name.
#[derive(Default)]
struct OutputNames {
    taken: HashSet<String>,
}

impl OutputNames {
    fn claim(&mut self, form_path: &Path) -> String {
        let stem = form_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("form");

        let mut name = format!("{}.pdf", stem);
        let mut n = 2;
        while !self.taken.insert(name.clone()) {
            name = format!("{}-{}.pdf", stem, n);
            n += 1;
        }
        name
    }
}

fn render_one(form_path: &Path, output_dir: &Path, name: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let form = FormDescription::from_file(form_path)?;
    let bytes = form.render()?;
    fs::write(output_dir.join(name), &bytes)?;

    Ok(bytes)
}

fn write_archive(merger: &OutputMerger, zip_path: &Path) -> pdf_formkit::Result<()> {
    let archive = merger.finish()?;
    fs::write(zip_path, archive)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let config = RenderConfig::from_args();

    if config.forms.is_empty() {
        eprintln!("Usage: render_form <form.json>... [--output-dir DIR] [--zip bundle.zip] [--verbose]");
        return ExitCode::FAILURE;
    }

    if let Err(e) = fs::create_dir_all(&config.output_dir) {
        eprintln!("Error creating {}: {}", config.output_dir.display(), e);
        return ExitCode::FAILURE;
    }

    let start = Instant::now();
    let mut merger = OutputMerger::new();
    let mut names = OutputNames::default();
    let mut error_count = 0;

    for (i, form_path) in config.forms.iter().enumerate() {
        let name = names.claim(form_path);
        match render_one(form_path, &config.output_dir, &name) {
            Ok(bytes) => {
                if config.verbose {
                    println!(
                        "[{}/{}] {} -> {} ({} bytes)",
                        i + 1,
                        config.forms.len(),
                        form_path.display(),
                        name,
                        bytes.len()
                    );
                }
                merger.add(name, bytes);
            },
            Err(e) => {
                eprintln!("[{}/{}] {}: {}", i + 1, config.forms.len(), form_path.display(), e);
                error_count += 1;
            },
        }
    }

    if let Some(zip_path) = &config.zip_path {
        if merger.is_empty() {
            eprintln!("No forms rendered, skipping {}", zip_path.display());
        } else {
            match write_archive(&merger, zip_path) {
                Ok(()) => {
                    if config.verbose {
                        println!("Bundled {} PDFs into {}", merger.len(), zip_path.display());
                    }
                },
                Err(e) => {
                    eprintln!("Error writing {}: {}", zip_path.display(), e);
                    error_count += 1;
                },
            }
        }
    }

    if config.verbose {
        println!(
            "Rendered {}/{} forms in {:?}",
            merger.len(),
            config.forms.len(),
            start.elapsed()
        );
    }

    if error_count > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
