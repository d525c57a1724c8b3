//! Binary document formats.
//!
//! Raster images go through the `image` encoders, audio through `hound`,
//! archives through `tar` and `zip`. The text-based formats (svg, pdf, rtf,
//! eml) are small enough to template directly. Every renderer returns raw
//! bytes; the `*_file` variants in [`super::files`] reuse them.

use std::f64::consts::PI;
use std::io::{Cursor, Write};

use image::codecs::pnm::{PnmSubtype, SampleEncoding};
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use serde_json::Value;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::text::{make_paragraph, make_sentence, make_text};
use crate::kwargs::{self, Kwargs};
use crate::{FakeError, Faker, NativeValue};

const MAX_DIMENSION: u32 = 4096;
const MAX_PAGES: usize = 100;
const MAX_WAV_SECONDS: i64 = 60;

fn invalid(param: &str, expected: &'static str, got: &Value) -> FakeError {
    FakeError::InvalidArgument {
        param: param.to_string(),
        expected,
        got: got.to_string(),
    }
}

/// Read a fixed-size tuple of non-negative ints, e.g. `size=[100, 100]`.
fn int_tuple<const N: usize>(
    kw: &Kwargs,
    name: &str,
    default: [u32; N],
) -> Result<[u32; N], FakeError> {
    let Some(value) = kw.get(name).filter(|v| !v.is_null()) else {
        return Ok(default);
    };
    let items = value
        .as_array()
        .filter(|items| items.len() == N)
        .ok_or_else(|| invalid(name, "tuple of non-negative ints", value))?;

    let mut out = [0u32; N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = item
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| invalid(name, "tuple of non-negative ints", value))?;
    }
    Ok(out)
}

fn size_arg(kw: &Kwargs) -> Result<(u32, u32), FakeError> {
    let [width, height] = int_tuple(kw, "size", [100, 100])?;
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(FakeError::Range {
            what: "image size",
            low: format!("{}x{}", width, height),
            high: format!("{}x{}", MAX_DIMENSION, MAX_DIMENSION),
        });
    }
    Ok((width, height))
}

fn color_arg(kw: &Kwargs) -> Result<[u8; 3], FakeError> {
    let rgb = int_tuple(kw, "color", [0, 0, 255])?;
    let mut out = [0u8; 3];
    for (slot, channel) in out.iter_mut().zip(rgb) {
        *slot = u8::try_from(channel).map_err(|_| FakeError::InvalidArgument {
            param: "color".to_string(),
            expected: "RGB channels in 0..=255",
            got: channel.to_string(),
        })?;
    }
    Ok(out)
}

fn page_count(kw: &Kwargs) -> Result<usize, FakeError> {
    let nb_pages = kwargs::count(kw, "nb_pages", 1)?.max(1);
    if nb_pages > MAX_PAGES {
        return Err(FakeError::Range {
            what: "nb_pages",
            low: nb_pages.to_string(),
            high: MAX_PAGES.to_string(),
        });
    }
    Ok(nb_pages)
}

/// Page texts: the caller's `texts` list if given, otherwise one generated
/// paragraph per page.
fn page_texts(kw: &Kwargs) -> Result<Vec<String>, FakeError> {
    match kw.get("texts").filter(|v| !v.is_null()) {
        Some(value) => value
            .as_array()
            .and_then(|items| {
                items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
            })
            .ok_or_else(|| invalid("texts", "list of str", value)),
        None => Ok((0..page_count(kw)?).map(|_| make_paragraph(5)).collect()),
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// Raster images

fn raster(
    kw: &Kwargs,
    format: ImageOutputFormat,
    name: &'static str,
) -> Result<Vec<u8>, FakeError> {
    let (width, height) = size_arg(kw)?;
    let color = color_arg(kw)?;
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)));

    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, format)
        .map_err(|e| FakeError::encode(name, e))?;
    Ok(cursor.into_inner())
}

pub(crate) fn render_png(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    raster(kw, ImageOutputFormat::Png, "png")
}

pub(crate) fn render_jpg(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    raster(kw, ImageOutputFormat::Jpeg(75), "jpg")
}

pub(crate) fn render_gif(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    raster(kw, ImageOutputFormat::Gif, "gif")
}

pub(crate) fn render_bmp(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    raster(kw, ImageOutputFormat::Bmp, "bmp")
}

pub(crate) fn render_tif(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    raster(kw, ImageOutputFormat::Tiff, "tif")
}

pub(crate) fn render_ppm(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    let pixmap = PnmSubtype::Pixmap(SampleEncoding::Binary);
    raster(kw, ImageOutputFormat::Pnm(pixmap), "ppm")
}

pub(crate) fn render_svg(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    let (width, height) = size_arg(kw)?;
    let [r, g, b] = color_arg(kw)?;
    let svg = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
         <rect width=\"100%\" height=\"100%\" fill=\"rgb({r},{g},{b})\"/>\n\
         </svg>\n",
        w = width,
        h = height,
        r = r,
        g = g,
        b = b,
    );
    Ok(svg.into_bytes())
}

// Text documents

fn pdf_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// A PDF 1.4 file with one Helvetica text line per page.
fn pdf_document(texts: &[String]) -> Vec<u8> {
    let font_id = 3 + 2 * texts.len();
    let kids: Vec<String> = (0..texts.len())
        .map(|i| format!("{} 0 R", 3 + 2 * i))
        .collect();

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            texts.len()
        ),
    ];
    for (i, text) in texts.iter().enumerate() {
        let content_id = 4 + 2 * i;
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 {} 0 R >> >> /Contents {} 0 R >>",
            font_id, content_id
        ));
        let stream = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", pdf_escape(text));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            stream.len(),
            stream
        ));
    }
    objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, object) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, object));
    }

    let xref_at = out.len();
    out.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        out.push_str(&format!("{:010} 00000 n \n", offset));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_at
    ));
    out.into_bytes()
}

pub(crate) fn render_pdf(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    Ok(pdf_document(&page_texts(kw)?))
}

fn rtf_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('{', "\\{")
        .replace('}', "\\}")
}

pub(crate) fn render_rtf(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    let pages: Vec<String> = page_texts(kw)?
        .iter()
        .map(|text| format!("{}\\par", rtf_escape(text)))
        .collect();
    let rtf = format!(
        "{{\\rtf1\\ansi\\deff0 {{\\fonttbl {{\\f0 Times New Roman;}}}}\\f0\\fs24 {}}}",
        pages.join("\\page ")
    );
    Ok(rtf.into_bytes())
}

pub(crate) fn render_eml(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    let subject = match kwargs::string(kw, "subject")? {
        Some(s) => s.to_string(),
        None => make_sentence(4, ""),
    };
    let content = match kwargs::string(kw, "content")? {
        Some(c) => c.to_string(),
        None => make_text(300),
    };
    let eml = format!(
        "From: sender@example.com\r\n\
         To: recipient@example.com\r\n\
         Subject: {}\r\n\
         Date: {}\r\n\
         Message-ID: <{}@example.com>\r\n\
         MIME-Version: 1.0\r\n\
         Content-Type: text/plain; charset=\"utf-8\"\r\n\
         \r\n\
         {}\r\n",
        subject.replace(['\r', '\n'], " "),
        chrono::Utc::now().to_rfc2822(),
        uuid::Uuid::new_v4().simple(),
        content
    );
    Ok(eml.into_bytes())
}

// Audio

pub(crate) fn render_wav(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    let frequency = kwargs::int(kw, "frequency")?.unwrap_or(440);
    let duration = kwargs::int(kw, "duration")?.unwrap_or(1);
    let volume = kwargs::float(kw, "volume")?.unwrap_or(0.5);
    let sample_rate = kwargs::int(kw, "sample_rate")?.unwrap_or(44_100);

    if !(0..=MAX_WAV_SECONDS).contains(&duration) {
        return Err(FakeError::Range {
            what: "duration",
            low: duration.to_string(),
            high: MAX_WAV_SECONDS.to_string(),
        });
    }
    if !(0.0..=1.0).contains(&volume) {
        return Err(FakeError::Range {
            what: "volume",
            low: volume.to_string(),
            high: "1.0".to_string(),
        });
    }
    let sample_rate = u32::try_from(sample_rate)
        .ok()
        .filter(|rate| (1..=192_000).contains(rate))
        .ok_or_else(|| FakeError::InvalidArgument {
            param: "sample_rate".to_string(),
            expected: "sample rate in 1..=192000",
            got: sample_rate.to_string(),
        })?;

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let amplitude = volume * f64::from(i16::MAX);
    let total = duration as u64 * u64::from(sample_rate);

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer =
            hound::WavWriter::new(&mut cursor, spec).map_err(|e| FakeError::encode("wav", e))?;
        for t in 0..total {
            let phase = 2.0 * PI * frequency as f64 * t as f64 / f64::from(sample_rate);
            writer
                .write_sample((phase.sin() * amplitude) as i16)
                .map_err(|e| FakeError::encode("wav", e))?;
        }
        writer.finalize().map_err(|e| FakeError::encode("wav", e))?;
    }
    Ok(cursor.into_inner())
}

// Archives

fn archive_members(kw: &Kwargs) -> Result<Vec<(String, Vec<u8>)>, FakeError> {
    let nb_files = kwargs::count(kw, "nb_files", 1)?.clamp(1, MAX_PAGES);
    Ok((0..nb_files)
        .map(|i| (format!("file_{}.txt", i + 1), make_text(200).into_bytes()))
        .collect())
}

pub(crate) fn render_tar(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    let mtime = u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default();
    let mut builder = tar::Builder::new(Vec::new());
    for (name, data) in archive_members(kw)? {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_mtime(mtime);
        header.set_cksum();
        builder
            .append_data(&mut header, &name, data.as_slice())
            .map_err(|e| FakeError::encode("tar", e))?;
    }
    builder.into_inner().map_err(|e| FakeError::encode("tar", e))
}

fn stored() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
}

fn zip_archive(format: &'static str, entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>, FakeError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        writer
            .start_file(name.as_str(), stored())
            .map_err(|e| FakeError::encode(format, e))?;
        writer
            .write_all(data)
            .map_err(|e| FakeError::encode(format, e))?;
    }
    let cursor = writer.finish().map_err(|e| FakeError::encode(format, e))?;
    Ok(cursor.into_inner())
}

pub(crate) fn render_zip(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    zip_archive("zip", &archive_members(kw)?)
}

pub(crate) fn render_docx(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    let body: String = page_texts(kw)?
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let page_break = if i > 0 { "<w:r><w:br w:type=\"page\"/></w:r>" } else { "" };
            format!(
                "<w:p>{}<w:r><w:t>{}</w:t></w:r></w:p>",
                page_break,
                xml_escape(text)
            )
        })
        .collect();

    let entries = vec![
        (
            "[Content_Types].xml".to_string(),
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>",
                "<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">",
                "<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>",
                "<Default Extension=\"xml\" ContentType=\"application/xml\"/>",
                "<Override PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/>",
                "</Types>"
            )
            .as_bytes()
            .to_vec(),
        ),
        (
            "_rels/.rels".to_string(),
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>",
                "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">",
                "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"word/document.xml\"/>",
                "</Relationships>"
            )
            .as_bytes()
            .to_vec(),
        ),
        (
            "word/document.xml".to_string(),
            format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
                 <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
                 <w:body>{}</w:body></w:document>",
                body
            )
            .into_bytes(),
        ),
    ];
    zip_archive("docx", &entries)
}

pub(crate) fn render_odt(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    let body: String = page_texts(kw)?
        .iter()
        .map(|text| format!("<text:p>{}</text:p>", xml_escape(text)))
        .collect();

    // The mimetype entry has to come first and uncompressed.
    let entries = vec![
        (
            "mimetype".to_string(),
            b"application/vnd.oasis.opendocument.text".to_vec(),
        ),
        (
            "META-INF/manifest.xml".to_string(),
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
                "<manifest:manifest xmlns:manifest=\"urn:oasis:names:tc:opendocument:xmlns:manifest:1.0\" manifest:version=\"1.2\">",
                "<manifest:file-entry manifest:full-path=\"/\" manifest:media-type=\"application/vnd.oasis.opendocument.text\"/>",
                "<manifest:file-entry manifest:full-path=\"content.xml\" manifest:media-type=\"text/xml\"/>",
                "</manifest:manifest>"
            )
            .as_bytes()
            .to_vec(),
        ),
        (
            "content.xml".to_string(),
            format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
                 <office:document-content \
                 xmlns:office=\"urn:oasis:names:tc:opendocument:xmlns:office:1.0\" \
                 xmlns:text=\"urn:oasis:names:tc:opendocument:xmlns:text:1.0\" office:version=\"1.2\">\
                 <office:body><office:text>{}</office:text></office:body>\
                 </office:document-content>",
                body
            )
            .into_bytes(),
        ),
    ];
    zip_archive("odt", &entries)
}

pub(crate) fn render_epub(kw: &Kwargs) -> Result<Vec<u8>, FakeError> {
    let texts = page_texts(kw)?;
    let title = match kwargs::string(kw, "title")? {
        Some(t) => t.to_string(),
        None => make_sentence(3, ""),
    };
    let author = kwargs::string(kw, "author")?.unwrap_or("Anonymous");
    let book_id = uuid::Uuid::new_v4();

    let mut manifest = String::from(
        "<item id=\"ncx\" href=\"toc.ncx\" media-type=\"application/x-dtbncx+xml\"/>",
    );
    let mut spine = String::new();
    let mut nav_points = String::new();
    let mut entries = vec![
        ("mimetype".to_string(), b"application/epub+zip".to_vec()),
        (
            "META-INF/container.xml".to_string(),
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
                "<container version=\"1.0\" xmlns=\"urn:oasis:names:tc:opendocument:xmlns:container\">",
                "<rootfiles><rootfile full-path=\"OEBPS/content.opf\" media-type=\"application/oebps-package+xml\"/></rootfiles>",
                "</container>"
            )
            .as_bytes()
            .to_vec(),
        ),
    ];

    for (i, text) in texts.iter().enumerate() {
        let n = i + 1;
        manifest.push_str(&format!(
            "<item id=\"chapter{n}\" href=\"chapter{n}.xhtml\" media-type=\"application/xhtml+xml\"/>"
        ));
        spine.push_str(&format!("<itemref idref=\"chapter{n}\"/>"));
        nav_points.push_str(&format!(
            "<navPoint id=\"np{n}\" playOrder=\"{n}\"><navLabel><text>Chapter {n}</text></navLabel>\
             <content src=\"chapter{n}.xhtml\"/></navPoint>"
        ));
        entries.push((
            format!("OEBPS/chapter{}.xhtml", n),
            format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
                 <html xmlns=\"http://www.w3.org/1999/xhtml\"><head><title>Chapter {}</title></head>\
                 <body><h1>Chapter {}</h1><p>{}</p></body></html>",
                n,
                n,
                xml_escape(text)
            )
            .into_bytes(),
        ));
    }

    entries.push((
        "OEBPS/content.opf".to_string(),
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <package xmlns=\"http://www.idpf.org/2007/opf\" unique-identifier=\"bookid\" version=\"2.0\">\
             <metadata xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\
             <dc:title>{}</dc:title><dc:creator>{}</dc:creator><dc:language>en</dc:language>\
             <dc:identifier id=\"bookid\">urn:uuid:{}</dc:identifier></metadata>\
             <manifest>{}</manifest><spine toc=\"ncx\">{}</spine></package>",
            xml_escape(&title),
            xml_escape(author),
            book_id,
            manifest,
            spine
        )
        .into_bytes(),
    ));
    entries.push((
        "OEBPS/toc.ncx".to_string(),
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <ncx xmlns=\"http://www.daisy.org/z3986/2005/ncx/\" version=\"2005-1\">\
             <head><meta name=\"dtb:uid\" content=\"urn:uuid:{}\"/></head>\
             <docTitle><text>{}</text></docTitle><navMap>{}</navMap></ncx>",
            book_id,
            xml_escape(&title),
            nav_points
        )
        .into_bytes(),
    ));
    zip_archive("epub", &entries)
}

macro_rules! bytes_providers {
    ($($name:ident => $render:ident),* $(,)?) => {
        $(
            pub fn $name(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
                Ok(NativeValue::Bytes($render(kw)?))
            }
        )*
    };
}

bytes_providers! {
    bmp => render_bmp,
    docx => render_docx,
    eml => render_eml,
    epub => render_epub,
    gif => render_gif,
    jpg => render_jpg,
    odt => render_odt,
    pdf => render_pdf,
    png => render_png,
    ppm => render_ppm,
    rtf => render_rtf,
    svg => render_svg,
    tar => render_tar,
    tif => render_tif,
    wav => render_wav,
    zip => render_zip,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kw(value: Value) -> Kwargs {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_png_signature_and_size() {
        let bytes = render_png(&kw(json!({ "size": [3, 2] }))).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
    }

    #[test]
    fn test_raster_magic_numbers() {
        let none = Kwargs::new();
        assert_eq!(&render_jpg(&none).unwrap()[..2], &[0xFF, 0xD8]);
        assert_eq!(&render_gif(&none).unwrap()[..3], b"GIF");
        assert_eq!(&render_bmp(&none).unwrap()[..2], b"BM");
        assert_eq!(&render_ppm(&none).unwrap()[..2], b"P6");
        let tif = render_tif(&none).unwrap();
        assert!(tif.starts_with(b"II*\0") || tif.starts_with(b"MM\0*"));
    }

    #[test]
    fn test_bad_size_rejected() {
        assert!(render_png(&kw(json!({ "size": [0, 10] }))).is_err());
        assert!(render_png(&kw(json!({ "size": "big" }))).is_err());
        assert!(render_png(&kw(json!({ "color": [0, 0, 300] }))).is_err());
    }

    #[test]
    fn test_pdf_structure() {
        let bytes = render_pdf(&kw(json!({ "texts": ["one (1)", "two"] }))).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.contains("/Count 2"));
        assert!(text.contains("(one \\(1\\)) Tj"));
        assert!(text.trim_end().ends_with("%%EOF"));

        let startxref: usize = text
            .lines()
            .skip_while(|line| *line != "startxref")
            .nth(1)
            .unwrap()
            .parse()
            .unwrap();
        assert!(text[startxref..].starts_with("xref"));
    }

    #[test]
    fn test_wav_header() {
        let bytes = render_wav(&kw(json!({ "duration": 0 }))).unwrap();
        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");

        let bytes = render_wav(&Kwargs::new()).unwrap();
        let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.spec().sample_rate, 44_100);
        assert_eq!(reader.len(), 44_100);
    }

    #[test]
    fn test_wav_volume_out_of_range() {
        assert!(matches!(
            render_wav(&kw(json!({ "volume": 2.0 }))).unwrap_err(),
            FakeError::Range { .. }
        ));
    }

    #[test]
    fn test_tar_members() {
        let bytes = render_tar(&kw(json!({ "nb_files": 2 }))).unwrap();
        let mut archive = tar::Archive::new(Cursor::new(bytes));
        let names: Vec<String> = archive
            .entries()
            .unwrap()
            .map(|e| e.unwrap().path().unwrap().display().to_string())
            .collect();
        assert_eq!(names, vec!["file_1.txt", "file_2.txt"]);
    }

    #[test]
    fn test_zip_based_formats_are_zip() {
        let renderers: [fn(&Kwargs) -> Result<Vec<u8>, FakeError>; 4] =
            [render_zip, render_docx, render_odt, render_epub];
        for render in renderers {
            let bytes = render(&Kwargs::new()).unwrap();
            assert_eq!(&bytes[..4], b"PK\x03\x04");
        }
    }

    #[test]
    fn test_epub_starts_with_mimetype() {
        let bytes = render_epub(&Kwargs::new()).unwrap();
        assert_eq!(&bytes[30..38], b"mimetype");
    }

    #[test]
    fn test_eml_subject() {
        let bytes = render_eml(&kw(json!({ "subject": "Hello", "content": "Body" }))).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Subject: Hello\r\n"));
        assert!(text.ends_with("Body\r\n"));
    }

    #[test]
    fn test_svg_uses_color() {
        let bytes = render_svg(&kw(json!({ "color": [1, 2, 3] }))).unwrap();
        assert!(String::from_utf8(bytes).unwrap().contains("rgb(1,2,3)"));
    }

    #[test]
    fn test_bytes_provider_wraps_renderer() {
        let value = rtf(&Faker::new(), &Kwargs::new()).unwrap();
        assert!(value.as_bytes().unwrap().starts_with(b"{\\rtf1"));
    }
}
