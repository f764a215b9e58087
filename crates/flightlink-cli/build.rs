use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=FLIGHTLINK_BUILD_SHA");

    let commit_full = env::var("FLIGHTLINK_BUILD_SHA")
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| git(&["rev-parse", "HEAD"]));
    let commit_short = match commit_full.as_deref() {
        Some(full) => full.chars().take(7).collect(),
        None => "unknown".to_string(),
    };
    let commit_full = commit_full.unwrap_or_else(|| "unknown".to_string());
    let build_date = git(&["log", "-1", "--format=%cI"]).unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=FLIGHTLINK_BUILD_COMMIT={commit_short}");
    println!("cargo:rustc-env=FLIGHTLINK_BUILD_COMMIT_FULL={commit_full}");
    println!("cargo:rustc-env=FLIGHTLINK_BUILD_DATE={build_date}");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!value.is_empty()).then_some(value)
}
