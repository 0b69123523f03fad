use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("recast")
        .version("0.1.0")
        .author("Recast Contributors")
        .about("Rewrite web page content for a chosen audience")
        .arg(clap::arg!(<INPUT> "URL to fetch, local HTML file, or '-' for stdin"))
        .arg(
            clap::arg!(-a --audience <AUDIENCE> "Target audience")
                .default_value("journalist")
                .value_parser(["imaging-technicians", "procurement", "journalist"]),
        )
        .arg(
            clap::arg!(-c --context <CONTEXT> "Consumption context")
                .default_value("desktop")
                .value_parser(["mobile", "desktop", "podcast"]),
        )
        .arg(
            clap::arg!(--channel <CHANNEL> "Delivery channel")
                .value_parser(["email", "newsletter", "social-media"]),
        )
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(--dry_run "Print the extracted text and prompt without calling the model"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "recast", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "recast", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "recast", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "recast", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
