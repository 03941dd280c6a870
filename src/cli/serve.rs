//! Web server command.

use console::style;

use folio::Settings;

/// Port used when the bind address names only a host.
const DEFAULT_PORT: u16 = 3030;

/// Start the web server.
pub async fn cmd_serve(settings: Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind);

    println!(
        "{} Serving content from {}",
        style("→").cyan(),
        settings.content_dir.display()
    );
    for (label, path) in [
        ("profile", &settings.profile_path),
        ("resume", &settings.resume_path),
        ("photo", &settings.photo_path),
    ] {
        if path.is_file() {
            println!("  {} {} {}", style("✓").green(), label, path.display());
        } else {
            println!(
                "  {} {} missing at {} (page will show a warning)",
                style("!").yellow(),
                label,
                path.display()
            );
        }
    }

    println!(
        "{} Starting folio at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    folio::server::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "3030" -> 127.0.0.1:3030
/// - Just a host: "0.0.0.0" -> 0.0.0.0:3030
/// - Host and port: "0.0.0.0:3030" -> 0.0.0.0:3030
fn parse_bind_address(bind: &str) -> (String, u16) {
    if let Ok(port) = bind.parse::<u16>() {
        return ("127.0.0.1".to_string(), port);
    }

    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return (host.to_string(), port);
        }
    }

    (bind.to_string(), DEFAULT_PORT)
}
