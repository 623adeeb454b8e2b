use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=style/tailwind.css");

    let site_pkg_dir = Path::new("target/site/pkg");
    if !site_pkg_dir.exists() {
        fs::create_dir_all(site_pkg_dir).expect("Failed to create site/pkg directory");
    }

    // Tailwind writes here; the shell links /pkg/soil-watch.css.
    let css_source = Path::new("target/tmp/tailwind.css");
    let css_dest = site_pkg_dir.join("soil-watch.css");

    if css_source.exists() {
        match fs::copy(css_source, &css_dest) {
            Ok(_) => println!("Copied CSS from {css_source:?} to {css_dest:?}"),
            Err(e) => println!("cargo:warning=Failed to copy CSS file: {e}"),
        }
    } else {
        println!("Source CSS file not found at {css_source:?}");
    }
}
