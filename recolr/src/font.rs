use std::path::{Path, PathBuf};

use log::{debug, info};
use write_fonts::{
    FontBuilder,
    from_obj::ToOwnedTable,
    read::{FontRef, ReadError, TableProvider},
    tables::cpal::Cpal,
};

use crate::{
    color::ColorRgb24,
    error::RecolorError,
    path::{PathBufExt, PathExt},
};

/// File extensions of the supported font containers.
pub const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

pub fn is_font_file(path: &Path) -> bool {
    path.has_extension(&FONT_EXTENSIONS)
}

/// Where the recolored copy of `input` gets written.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("otf")
}

/// Rewrites every CPAL palette entry of the font to `color`.
///
/// Each entry keeps its original alpha; every table other than CPAL is
/// carried over untouched, so glyph outlines, metrics, and names survive
/// byte-for-byte. Recoloring the same font to the same color twice yields
/// identical bytes.
pub fn recolor(data: &[u8], color: ColorRgb24) -> Result<Vec<u8>, RecolorError> {
    let font = FontRef::new(data)?;

    let cpal = match font.cpal() {
        Ok(cpal) => cpal,
        Err(ReadError::TableIsMissing(_)) => return Err(RecolorError::MissingPalette),
        Err(error) => return Err(error.into()),
    };

    let mut cpal: Cpal = cpal.to_owned_table();
    let records = cpal
        .color_records_array
        .as_mut()
        .filter(|records| !records.is_empty())
        .ok_or(RecolorError::EmptyPalette)?;

    debug!("Rewriting {} palette entries", records.len());

    for record in records.iter_mut() {
        record.red = color.red;
        record.green = color.green;
        record.blue = color.blue;
    }

    let mut builder = FontBuilder::default();
    builder.add_table(&cpal)?;
    builder.copy_missing_tables(font);

    Ok(builder.build())
}

/// Recolors the font at `input` and writes the result to [`output_path`].
///
/// The output lands in a staging file first and is only renamed into place
/// once the whole transform succeeded, so a failure never leaves a corrupt
/// font behind.
pub async fn recolor_file(input: &Path, color: ColorRgb24) -> Result<PathBuf, RecolorError> {
    let data = match tokio::fs::read(input).await {
        Ok(data) => data,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Err(RecolorError::NotFound(input.to_path_buf()));
        }
        Err(error) => return Err(error.into()),
    };

    let recolored = recolor(&data, color)?;

    let output = output_path(input);
    // Staged next to the final path so the rename can't cross filesystems.
    let staging = output.clone().append_str(".tmp");
    let staged = async {
        tokio::fs::write(&staging, &recolored).await?;
        tokio::fs::rename(&staging, &output).await
    }
    .await;

    if let Err(error) = staged {
        // Best effort; the write or rename failure is the one to report
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(error.into());
    }

    info!("Recolored {input:?} -> {output:?}");

    Ok(output)
}
