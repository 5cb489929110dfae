use colored::Colorize;

const BANNER: &str = r"
     _            _           _
  __| | _____   _| | ___  ___| | __
 / _` |/ _ \ \ / / |/ _ \/ __| |/ /
| (_| |  __/\ V /| |  __/ (__|   <
 \__,_|\___| \_/ |_|\___|\___|_|\_\
";

pub fn print_banner_with_version() {
    println!("{}", BANNER.trim_start_matches('\n').cyan().bold());
    println!(
        "  {} {}",
        "devdeck".bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).green()
    );
    println!("  {}", env!("CARGO_PKG_DESCRIPTION").dimmed());
}
