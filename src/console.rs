//! Pretty terminal output for startup.

use colored::Colorize;

pub fn print_banner() {
    println!();
    println!("{}", "╔═══════════════════════════════════════════════════╗".cyan());
    println!("║     {}                          ║", "🛒 Storefront v0.1.0".bold().white());
    println!("║     {}     ║", "Demo users, orders and inventory API".dimmed());
    println!("{}", "╚═══════════════════════════════════════════════════╝".cyan());
    println!();
}

pub fn print_startup(addr: &str) {
    println!("{} {}", "✓".green().bold(), "Server ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{}", addr).cyan().underline());
    println!();
    println!("{}", "Endpoints:".white().bold());
    println!("  {} {}  {}", "GET ".green(), "/hello".white(), "Tracked greeting".dimmed());
    println!("  {} {} {}", "GET ".green(), "/health".white(), "Health check".dimmed());
    println!("  {} {} {}", "GET ".green(), "/metrics".white(), "Telemetry".dimmed());
    println!();
    println!("{}", "Storefront:".white().bold());
    println!("  {} {}  {}", "GET ".green(), "/v1/users".white(), "List users".dimmed());
    println!("  {} {}  {}", "POST".yellow(), "/v1/users".white(), "Create user".dimmed());
    println!("  {} {}  {}", "GET ".green(), "/v1/users/:id/dashboard".white(), "Aggregated view".dimmed());
    println!("  {} {}  {}", "GET ".green(), "/v1/orders".white(), "List orders".dimmed());
    println!("  {} {}  {}", "POST".yellow(), "/v1/orders".white(), "Create order".dimmed());
    println!("  {} {}  {}", "GET ".green(), "/v1/inventory".white(), "List inventory".dimmed());
    println!("  {} {}  {}", "PUT ".yellow(), "/v1/inventory/:id".white(), "Update quantity".dimmed());
    println!();
}
