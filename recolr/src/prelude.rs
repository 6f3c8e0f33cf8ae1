pub use crate::{
    color::{ColorParseError, ColorRgb24},
    error::RecolorError,
    font::{FONT_EXTENSIONS, is_font_file, output_path, recolor, recolor_file},
    path::{PathBufExt, PathExt},
};
