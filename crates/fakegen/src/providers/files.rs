//! `*_file` providers: render a document and write it under the faker's
//! file root, returning the path.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::binary::{
    render_bmp, render_docx, render_eml, render_epub, render_gif, render_jpg, render_odt,
    render_pdf, render_png, render_ppm, render_rtf, render_svg, render_tar, render_tif,
    render_wav, render_zip,
};
use super::text::make_text;
use crate::kwargs::{self, Kwargs};
use crate::{FakeError, Faker, NativeValue};

/// A file name component must stay inside the file root.
fn name_component<'a>(kw: &'a Kwargs, param: &str) -> Result<Option<&'a str>, FakeError> {
    let value = kwargs::string(kw, param)?;
    if let Some(v) = value {
        if v.contains(['/', '\\']) || v.contains("..") {
            return Err(FakeError::InvalidArgument {
                param: param.to_string(),
                expected: "plain file name without path separators",
                got: v.to_string(),
            });
        }
    }
    Ok(value)
}

fn write_file(
    faker: &Faker,
    kw: &Kwargs,
    extension: &str,
    data: &[u8],
) -> Result<NativeValue, FakeError> {
    let prefix = name_component(kw, "prefix")?.unwrap_or("");
    let basename = match name_component(kw, "basename")? {
        Some(b) if !b.is_empty() => b.to_string(),
        _ => uuid::Uuid::new_v4().simple().to_string(),
    };

    let root = faker.file_root();
    fs::create_dir_all(root).map_err(|source| FakeError::Write {
        path: root.to_path_buf(),
        source,
    })?;

    let path: PathBuf = root.join(format!("{}{}.{}", prefix, basename, extension));
    fs::write(&path, data).map_err(|source| FakeError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "wrote fake file");

    Ok(path.to_string_lossy().into_owned().into())
}

macro_rules! file_providers {
    ($($name:ident => $render:ident, $ext:literal),* $(,)?) => {
        $(
            pub fn $name(faker: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
                write_file(faker, kw, $ext, &$render(kw)?)
            }
        )*
    };
}

file_providers! {
    bmp_file => render_bmp, "bmp",
    docx_file => render_docx, "docx",
    eml_file => render_eml, "eml",
    epub_file => render_epub, "epub",
    gif_file => render_gif, "gif",
    jpg_file => render_jpg, "jpg",
    odt_file => render_odt, "odt",
    pdf_file => render_pdf, "pdf",
    png_file => render_png, "png",
    ppm_file => render_ppm, "ppm",
    rtf_file => render_rtf, "rtf",
    svg_file => render_svg, "svg",
    tar_file => render_tar, "tar",
    tif_file => render_tif, "tif",
    wav_file => render_wav, "wav",
    zip_file => render_zip, "zip",
}

pub fn txt_file(faker: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let nb_chars = kwargs::char_count(kw, "nb_chars", 200)?;
    write_file(faker, kw, "txt", make_text(nb_chars).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;

    fn kw(value: serde_json::Value) -> Kwargs {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_txt_file_written_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let faker = Faker::with_file_root(dir.path());
        let args = kw(json!({ "nb_chars": 40, "basename": "notes", "prefix": "tmp_" }));

        let value = txt_file(&faker, &args).unwrap();
        let path = Path::new(value.as_str().unwrap());
        assert_eq!(path, dir.path().join("tmp_notes.txt"));
        assert_eq!(fs::read_to_string(path).unwrap().len(), 40);
    }

    #[test]
    fn test_png_file_has_png_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let faker = Faker::with_file_root(dir.path().join("nested"));

        let value = png_file(&faker, &Kwargs::new()).unwrap();
        let path = value.as_str().unwrap();
        assert!(path.ends_with(".png"));
        assert_eq!(&fs::read(path).unwrap()[..4], b"\x89PNG");
    }

    #[test]
    fn test_path_traversal_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let faker = Faker::with_file_root(dir.path());
        for args in [
            json!({ "basename": "../escape" }),
            json!({ "prefix": "a/b" }),
            json!({ "basename": "..\\x" }),
        ] {
            let err = txt_file(&faker, &kw(args)).unwrap_err();
            assert!(matches!(err, FakeError::InvalidArgument { .. }));
        }
    }
}
