use std::fs;
use std::path::Path;

// Embeds the trunk build of the dashboard. Without one, an empty bundle is
// embedded so the API still builds and runs.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        if let Err(e) = fs::create_dir_all(out_dir) {
            println!("cargo:warning=cannot create {}: {}", out_dir.display(), e);
        }
        let options = fs_extra::dir::CopyOptions::new()
            .overwrite(true)
            .copy_inside(true);
        if let Err(e) = fs_extra::dir::copy(dist_dir, out_dir, &options) {
            println!("cargo:warning=cannot copy dashboard bundle: {}", e);
        }
    }

    if let Err(e) = fs::create_dir_all(out_dir.join("dist")) {
        println!("cargo:warning=cannot create embedded bundle dir: {}", e);
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
