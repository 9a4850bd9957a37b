use std::path::Path;

use airlift_archive::pack_dir_with_ignore_file;

pub fn pack(dir: &Path, use_ignore_file: bool, output: &Path) -> anyhow::Result<()> {
    let archive = pack_dir_with_ignore_file(dir, use_ignore_file)?;
    std::fs::write(output, &archive)?;

    println!("Wrote {} ({} bytes)", output.display(), archive.len());

    Ok(())
}
