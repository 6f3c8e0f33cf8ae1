use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{info, warn};
use recolr::prelude::*;

use crate::{bootstrapper::Bootstrapper, cli::CliArgs, manifest};

pub async fn run(args: CliArgs) -> anyhow::Result<()> {
    let fonts = collect_fonts(&args.path).await?;
    anyhow::ensure!(!fonts.is_empty(), "No font files found under {:?}", args.path);

    let mut outputs = Vec::with_capacity(fonts.len());

    for font in &fonts {
        let output = recolor_file(font, args.color)
            .await
            .with_context(|| format!("Failed to recolor {font:?}"))?;
        info!("Processed: {output:?}");
        outputs.push(output);
    }

    info!("Processed {} fonts", outputs.len());

    match args.bootstrapper {
        Some(bootstrapper) => {
            install(bootstrapper, args.mod_name.as_deref(), &outputs).await?;
        }
        // With no launcher involved the fonts may still sit inside an
        // extracted overlay tree, which wants a manifest at its root.
        None => {
            if let Some(root) = manifest::find_mod_root(&args.path) {
                manifest::write(&root).await?;
            }
        }
    }

    Ok(())
}

/// The font files to process: the path itself, or every `.ttf`/`.otf` found
/// under it when it's a directory.
async fn collect_fonts(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Err(RecolorError::NotFound(path.to_path_buf()).into());
        }
        Err(error) => {
            return Err(error).with_context(|| format!("Failed to read {path:?}"));
        }
    };

    if metadata.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut fonts = Vec::new();
    let mut pending = vec![path.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .with_context(|| format!("Failed to read directory {dir:?}"))?;

        while let Some(entry) = entries.next_entry().await? {
            let entry_path = entry.path();

            if entry.file_type().await?.is_dir() {
                pending.push(entry_path);
            } else if is_font_file(&entry_path) {
                fonts.push(entry_path);
            }
        }
    }

    // Directory iteration order isn't stable across platforms
    fonts.sort();

    Ok(fonts)
}

/// Copies the recolored fonts into the bootstrapper's mod folder and drops
/// the manifest next to them.
async fn install(
    bootstrapper: Bootstrapper,
    mod_name: Option<&str>,
    fonts: &[PathBuf],
) -> anyhow::Result<()> {
    let Some(font_dir) = bootstrapper.font_dir(mod_name) else {
        warn!("{bootstrapper:?} has no mod directory on this platform; skipping install");
        return Ok(());
    };

    tokio::fs::create_dir_all(&font_dir)
        .await
        .with_context(|| format!("Failed to create mod font directory {font_dir:?}"))?;

    for font in fonts {
        let file_name = font
            .file_name()
            .with_context(|| format!("Font output path has no file name: {font:?}"))?;
        let destination = font_dir.join(file_name);

        tokio::fs::copy(font, &destination)
            .await
            .with_context(|| format!("Failed to copy {font:?} to {destination:?}"))?;
        info!("Installed: {destination:?}");
    }

    let root = font_dir
        .parent()
        .context("Mod font directory has no parent")?;

    manifest::write(root).await
}
