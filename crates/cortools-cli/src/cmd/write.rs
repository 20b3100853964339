// crates/cortools-cli/src/cmd/write.rs

use anyhow::Context;
use clap::Args;
use cortools_core::config::DEFAULT_LENS_SIZE_MM;
use cortools_core::format::write_template;
use cortools_core::TemplateConfig;

#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Write an uncalibrated (all-zero) correction template to this path
    #[arg(short, long)]
    pub write: Option<String>,

    /// Lens size in millimeters used for the template's scale factor
    #[arg(short, long, default_value_t = DEFAULT_LENS_SIZE_MM, allow_negative_numbers = true)]
    pub lens_size: f64,
}

/// Returns whether a template was written.
pub fn run(args: &WriteArgs) -> anyhow::Result<bool> {
    let Some(path) = args.write.as_deref() else {
        return Ok(false);
    };

    let cfg = TemplateConfig::new(args.lens_size);
    let bytes = write_template(&cfg);
    std::fs::write(path, &bytes).with_context(|| format!("write template {path}"))?;

    log::info!(
        "wrote {} ({} bytes, lens {} mm, scale {:.6})",
        path,
        bytes.len(),
        cfg.lens_size_mm,
        cfg.scale()
    );
    Ok(true)
}
