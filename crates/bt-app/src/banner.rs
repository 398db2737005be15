const LOGO: &str = "⣿⣿ ⠃⠗⠁⠊⠇⠇⠑⠗⠞ ⣿⣿";

/// Logo, auteurs et version, suivis d'une ligne de tirets.
#[must_use]
pub fn banner() -> String {
    let info = format!(
        "Author: {}  Version: {}",
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_VERSION")
    );
    let delimiter = "-".repeat(info.chars().count());
    format!("{LOGO}\n{info}\n{delimiter}")
}

pub fn print_banner() {
    println!("{}", banner());
}
