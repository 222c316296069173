use std::path::Path;
use std::process::Command;

/// Embed a short commit id for `shelfwise --version`; "unknown" outside a git checkout.
fn main() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");

    let describe = Command::new("git")
        .arg("-C")
        .arg(&root)
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output();
    let sha = match describe {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout).trim().to_owned(),
        _ => String::new(),
    };
    let sha = if sha.is_empty() { "unknown".to_owned() } else { sha };

    println!("cargo:rustc-env=SHELFWISE_BUILD_SHA={sha}");
    for watched in [".git/HEAD", ".git/index"] {
        let p = root.join(watched);
        if p.exists() {
            println!("cargo:rerun-if-changed={}", p.display());
        }
    }
}
