//! One-shot render command.

use std::path::Path;

use console::style;

use folio::animation::AnimationFetcher;
use folio::Settings;

/// Render the page once and write it to `output` or stdout.
pub async fn cmd_render(settings: &Settings, output: Option<&Path>) -> anyhow::Result<()> {
    let fetcher = AnimationFetcher::new(settings.animation_timeout)?;
    let html = folio::server::render_page(settings, &fetcher).await?;

    match output {
        Some(path) => {
            tokio::fs::write(path, html.as_bytes()).await?;
            eprintln!(
                "{} Wrote {} ({} bytes)",
                style("✓").green(),
                path.display(),
                html.len()
            );
        }
        None => println!("{}", html),
    }

    Ok(())
}
