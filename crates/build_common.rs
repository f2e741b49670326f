// Build-script helpers shared by every crate in the workspace.
// Pulled into a build.rs with: include!("../build_common.rs");
//
// The including file must import:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Render the crate README into `$OUT_DIR/README_GENERATED.md` so `lib.rs`
/// can use it as the crate-level rustdoc.
///
/// A crate without a README gets an empty page rather than a build failure.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let content = fs::read_to_string(Path::new(crate_dir).join("README.md")).unwrap_or_default();
    let repo_url = workspace_repository(crate_dir);
    let rendered = rewrite_readme_links(&content, repo_url.as_deref());

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    fs::write(Path::new(&out_dir).join("README_GENERATED.md"), rendered)
        .expect("OUT_DIR is writable");
}

/// Turn file links that work on a forge into links rustdoc can resolve.
///
/// `](src/foo.rs)` becomes `](foo)`, and links to the workspace README
/// point at the repository URL when one is configured.
fn rewrite_readme_links(content: &str, repo_url: Option<&str>) -> String {
    let rendered = content.replace("](src/", "](").replace(".rs)", ")");
    match repo_url {
        Some(url) => rendered.replace("](../../README.md", &format!("]({url}")),
        None => rendered,
    }
}

/// The `repository` value from `[workspace.package]` in the root manifest.
fn workspace_repository(crate_dir: &str) -> Option<String> {
    let manifest = Path::new(crate_dir).parent()?.parent()?.join("Cargo.toml");
    let content = fs::read_to_string(manifest).ok()?;

    content.lines().find_map(|line| {
        let value = line.trim().strip_prefix("repository")?.trim_start().strip_prefix('=')?;
        let value = value.trim().strip_prefix('"')?;
        let end = value.find('"')?;
        Some(value[..end].to_string())
    })
}
