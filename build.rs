const SITE_ENV: [&str; 6] = [
    "PORTFOLIO_PROJECTS_URL",
    "PORTFOLIO_PROJECTS_PAGE_SIZE",
    "PORTFOLIO_EMAILJS_SERVICE",
    "PORTFOLIO_EMAILJS_TEMPLATE",
    "PORTFOLIO_EMAILJS_AUTOREPLY_TEMPLATE",
    "PORTFOLIO_EMAILJS_PUBLIC_KEY",
];

fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Site config is read with option_env!, so changes need a rebuild
    for key in SITE_ENV {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=content");

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
