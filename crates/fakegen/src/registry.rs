//! The static provider registry.
//!
//! One sorted table holds every public member of the faker. Most members are
//! providers; a few are plain values (the locale, for instance) that callers
//! can read but not call. Signatures describe the parameters exactly as
//! declared, including shapes that only in-process callers can supply
//! (tuples, option dicts, storage backends, `**kwargs`).

use crate::providers::{binary, files, geo, numbers, person, text, time};
use crate::signature::{Literal, ParamSpec, ProviderFn, ProviderSpec, TypeExpr};

/// What a registry name refers to.
#[derive(Debug, Clone, Copy)]
pub enum Member {
    Provider(ProviderSpec),
    Value(Literal),
}

impl Member {
    pub fn is_callable(&self) -> bool {
        matches!(self, Member::Provider(_))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RegistryEntry {
    pub name: &'static str,
    pub member: Member,
}

const fn provider(
    name: &'static str,
    params: &'static [ParamSpec],
    doc: &'static str,
    func: ProviderFn,
) -> RegistryEntry {
    RegistryEntry {
        name,
        member: Member::Provider(ProviderSpec {
            name,
            params,
            doc: Some(doc),
            func,
        }),
    }
}

const fn undocumented(
    name: &'static str,
    params: &'static [ParamSpec],
    func: ProviderFn,
) -> RegistryEntry {
    RegistryEntry {
        name,
        member: Member::Provider(ProviderSpec {
            name,
            params,
            doc: None,
            func,
        }),
    }
}

const fn value(name: &'static str, literal: Literal) -> RegistryEntry {
    RegistryEntry {
        name,
        member: Member::Value(literal),
    }
}

// Shared parameter shapes

const NONE: &[ParamSpec] = &[];
const NB_3: &[ParamSpec] = &[ParamSpec::optional("nb", TypeExpr::Int, Literal::Int(3))];
const NB_5: &[ParamSpec] = &[ParamSpec::optional("nb", TypeExpr::Int, Literal::Int(5))];

const KWARGS: ParamSpec = ParamSpec::var_kwargs("kwargs");
const OPTIONAL_STR_LIST: TypeExpr =
    TypeExpr::Union(&[TypeExpr::List(&TypeExpr::Str), TypeExpr::NoneType]);
const OPTIONAL_DICT: TypeExpr = TypeExpr::Union(&[TypeExpr::Dict, TypeExpr::NoneType]);

const SIZE: ParamSpec = ParamSpec::optional(
    "size",
    TypeExpr::Tuple(&[TypeExpr::Int, TypeExpr::Int]),
    Literal::Opaque("(100, 100)"),
);
const COLOR: ParamSpec = ParamSpec::optional(
    "color",
    TypeExpr::Tuple(&[TypeExpr::Int, TypeExpr::Int, TypeExpr::Int]),
    Literal::Opaque("(0, 0, 255)"),
);
const NB_PAGES: ParamSpec =
    ParamSpec::optional("nb_pages", TypeExpr::OPTIONAL_INT, Literal::Int(1));
const TEXTS: ParamSpec = ParamSpec::optional("texts", OPTIONAL_STR_LIST, Literal::None);
const METADATA: ParamSpec = ParamSpec::untyped("metadata", Some(Literal::None));
const OPTIONS: ParamSpec = ParamSpec::optional("options", OPTIONAL_DICT, Literal::None);
const NB_FILES: ParamSpec = ParamSpec::optional("nb_files", TypeExpr::Int, Literal::Int(1));

const STORAGE: ParamSpec = ParamSpec::optional(
    "storage",
    TypeExpr::Union(&[TypeExpr::Opaque("BaseStorage"), TypeExpr::NoneType]),
    Literal::None,
)
.keyword_only();
const BASENAME: ParamSpec =
    ParamSpec::optional("basename", TypeExpr::OPTIONAL_STR, Literal::None).keyword_only();
const PREFIX: ParamSpec =
    ParamSpec::optional("prefix", TypeExpr::OPTIONAL_STR, Literal::None).keyword_only();

const TZINFO: ParamSpec = ParamSpec::optional(
    "tzinfo",
    TypeExpr::Union(&[TypeExpr::Opaque("tzinfo"), TypeExpr::NoneType]),
    Literal::None,
);
const DATE_RANGE: &[ParamSpec] = &[
    ParamSpec::optional("start_date", TypeExpr::Str, Literal::Str("-7d")),
    ParamSpec::optional("end_date", TypeExpr::Str, Literal::Str("+0d")),
    TZINFO,
];

/// Append the storage parameters every `*_file` provider takes.
macro_rules! with_storage {
    ($($param:expr),* $(,)?) => {
        &[$($param,)* STORAGE, BASENAME, PREFIX, KWARGS]
    };
}

const IMAGE: &[ParamSpec] = &[SIZE, COLOR, KWARGS];
const IMAGE_FILE: &[ParamSpec] = with_storage![SIZE, COLOR];

const DOCUMENT: &[ParamSpec] = &[NB_PAGES, TEXTS, METADATA, KWARGS];
const DOCUMENT_FILE: &[ParamSpec] = with_storage![NB_PAGES, TEXTS, METADATA];

const PDF_GENERATOR: ParamSpec = ParamSpec::optional(
    "generator",
    TypeExpr::Opaque("Type[BasePdfGenerator]"),
    Literal::Opaque("TextPdfGenerator"),
);
const PDF: &[ParamSpec] = &[
    ParamSpec::optional("nb_pages", TypeExpr::Int, Literal::Int(1)),
    TEXTS,
    PDF_GENERATOR,
    METADATA,
    KWARGS,
];
const PDF_FILE: &[ParamSpec] = with_storage![
    ParamSpec::optional("nb_pages", TypeExpr::Int, Literal::Int(1)),
    TEXTS,
    PDF_GENERATOR,
    METADATA,
];

const EPUB_TITLE: ParamSpec = ParamSpec::optional("title", TypeExpr::OPTIONAL_STR, Literal::None);
const EPUB_AUTHOR: ParamSpec =
    ParamSpec::optional("author", TypeExpr::OPTIONAL_STR, Literal::None);
const EPUB: &[ParamSpec] = &[NB_PAGES, TEXTS, EPUB_TITLE, EPUB_AUTHOR, METADATA, KWARGS];
const EPUB_FILE: &[ParamSpec] = with_storage![NB_PAGES, TEXTS, EPUB_TITLE, EPUB_AUTHOR, METADATA];

const EML_CONTENT: ParamSpec =
    ParamSpec::optional("content", TypeExpr::OPTIONAL_STR, Literal::None);
const EML_SUBJECT: ParamSpec =
    ParamSpec::optional("subject", TypeExpr::OPTIONAL_STR, Literal::None);
const EML: &[ParamSpec] = &[OPTIONS, EML_CONTENT, EML_SUBJECT, METADATA, KWARGS];
const EML_FILE: &[ParamSpec] = with_storage![OPTIONS, EML_CONTENT, EML_SUBJECT, METADATA];

const WAV_FREQUENCY: ParamSpec = ParamSpec::optional("frequency", TypeExpr::Int, Literal::Int(440));
const WAV_DURATION: ParamSpec = ParamSpec::optional("duration", TypeExpr::Int, Literal::Int(1));
const WAV_VOLUME: ParamSpec = ParamSpec::optional("volume", TypeExpr::Float, Literal::Float(0.5));
const WAV_SAMPLE_RATE: ParamSpec =
    ParamSpec::optional("sample_rate", TypeExpr::Int, Literal::Int(44_100));
const WAV: &[ParamSpec] = &[
    WAV_FREQUENCY,
    WAV_DURATION,
    WAV_VOLUME,
    WAV_SAMPLE_RATE,
    METADATA,
    KWARGS,
];
const WAV_FILE: &[ParamSpec] = with_storage![
    WAV_FREQUENCY,
    WAV_DURATION,
    WAV_VOLUME,
    WAV_SAMPLE_RATE,
    METADATA,
];

const ARCHIVE: &[ParamSpec] = &[NB_FILES, OPTIONS, KWARGS];
const ARCHIVE_FILE: &[ParamSpec] = with_storage![NB_FILES, OPTIONS];

const TXT_FILE: &[ParamSpec] =
    with_storage![ParamSpec::optional("nb_chars", TypeExpr::OPTIONAL_INT, Literal::Int(200))];

const OPTIONAL_DOMAIN: &[ParamSpec] =
    &[ParamSpec::optional("domain", TypeExpr::OPTIONAL_STR, Literal::None)];

/// Every public faker member, sorted by name.
static REGISTRY: &[RegistryEntry] = &[
    provider("bmp", IMAGE, "Create a BMP image of a single colour.", binary::bmp),
    provider("bmp_file", IMAGE_FILE, "Create a BMP image file.", files::bmp_file),
    provider("city", NONE, "Get a random city name.", geo::city),
    provider("company", NONE, "Generate a company name.", person::company),
    provider(
        "company_email",
        OPTIONAL_DOMAIN,
        "Generate a company email address.",
        person::company_email,
    ),
    provider("country", NONE, "Get a random country name.", geo::country),
    provider(
        "country_code",
        NONE,
        "Get a random ISO 3166-1 alpha-2 country code.",
        geo::country_code,
    ),
    provider(
        "date",
        DATE_RANGE,
        "Generate a random date between start_date and end_date.",
        time::date,
    ),
    provider(
        "date_time",
        DATE_RANGE,
        "Generate a random datetime between start_date and end_date.",
        time::date_time,
    ),
    provider("docx", DOCUMENT, "Create a DOCX document.", binary::docx),
    provider("docx_file", DOCUMENT_FILE, "Create a DOCX document file.", files::docx_file),
    provider(
        "domain_name",
        &[ParamSpec::optional("tld", TypeExpr::OPTIONAL_STR, Literal::None)],
        "Generate a domain name.",
        person::domain_name,
    ),
    provider("email", OPTIONAL_DOMAIN, "Generate a random email address.", person::email),
    provider("eml", EML, "Create an EML email message.", binary::eml),
    provider("eml_file", EML_FILE, "Create an EML email message file.", files::eml_file),
    provider("epub", EPUB, "Create an EPUB book.", binary::epub),
    provider("epub_file", EPUB_FILE, "Create an EPUB book file.", files::epub_file),
    provider("first_name", NONE, "Generate a first name.", person::first_name),
    provider("first_names", NB_5, "Generate a list of first names.", person::first_names),
    provider(
        "free_email",
        NONE,
        "Generate an email address on a free provider.",
        person::free_email,
    ),
    provider(
        "free_email_domain",
        NONE,
        "Get a free email provider domain.",
        person::free_email_domain,
    ),
    provider("gif", IMAGE, "Create a GIF image of a single colour.", binary::gif),
    provider("gif_file", IMAGE_FILE, "Create a GIF image file.", files::gif_file),
    provider(
        "image_url",
        &[
            ParamSpec::optional("width", TypeExpr::Int, Literal::Int(800)),
            ParamSpec::optional("height", TypeExpr::Int, Literal::Int(600)),
            ParamSpec::optional("service", TypeExpr::OPTIONAL_STR, Literal::None),
        ],
        "Generate a placeholder image URL.",
        person::image_url,
    ),
    provider("ipv4", NONE, "Generate a random IPv4 address.", person::ipv4),
    provider("jpg", IMAGE, "Create a JPG image of a single colour.", binary::jpg),
    provider("jpg_file", IMAGE_FILE, "Create a JPG image file.", files::jpg_file),
    provider("last_name", NONE, "Generate a last name.", person::last_name),
    provider("last_names", NB_5, "Generate a list of last names.", person::last_names),
    provider("latitude", NONE, "Generate a random latitude.", geo::latitude),
    provider(
        "latitude_longitude",
        NONE,
        "Generate a random (latitude, longitude) pair.",
        geo::latitude_longitude,
    ),
    value("locale", Literal::Str("en_US")),
    provider("longitude", NONE, "Generate a random longitude.", geo::longitude),
    provider("name", NONE, "Generate a full name.", person::name),
    provider("names", NB_5, "Generate a list of full names.", person::names),
    provider("odt", DOCUMENT, "Create an ODT document.", binary::odt),
    provider("odt_file", DOCUMENT_FILE, "Create an ODT document file.", files::odt_file),
    provider(
        "paragraph",
        &[ParamSpec::optional("nb_sentences", TypeExpr::Int, Literal::Int(5))],
        "Generate a paragraph.",
        text::paragraph,
    ),
    provider("paragraphs", NB_3, "Generate a list of paragraphs.", text::paragraphs),
    provider("pdf", PDF, "Create a PDF document.", binary::pdf),
    provider("pdf_file", PDF_FILE, "Create a PDF document file.", files::pdf_file),
    provider("png", IMAGE, "Create a PNG image of a single colour.", binary::png),
    provider("png_file", IMAGE_FILE, "Create a PNG image file.", files::png_file),
    provider("ppm", IMAGE, "Create a PPM image of a single colour.", binary::ppm),
    provider("ppm_file", IMAGE_FILE, "Create a PPM image file.", files::ppm_file),
    provider("pybool", NONE, "Generate a random boolean.", numbers::pybool),
    provider(
        "pydecimal",
        &[
            ParamSpec::optional("left_digits", TypeExpr::Int, Literal::Int(5)),
            ParamSpec::optional("right_digits", TypeExpr::Int, Literal::Int(2)),
            ParamSpec::optional("positive", TypeExpr::Bool, Literal::Bool(true)),
        ],
        "Generate a random decimal number.",
        numbers::pydecimal,
    ),
    provider(
        "pyfloat",
        &[
            ParamSpec::optional("min_value", TypeExpr::Float, Literal::Float(0.0)),
            ParamSpec::optional("max_value", TypeExpr::Float, Literal::Float(10.0)),
        ],
        "Generate a random float number.",
        numbers::pyfloat,
    ),
    provider(
        "pyint",
        &[
            ParamSpec::optional("min_value", TypeExpr::Int, Literal::Int(0)),
            ParamSpec::optional("max_value", TypeExpr::Int, Literal::Int(9999)),
        ],
        "Generate a random integer.",
        numbers::pyint,
    ),
    undocumented(
        "pystr",
        &[
            ParamSpec::optional("nb_chars", TypeExpr::Int, Literal::Int(20)),
            ParamSpec::untyped("letters", Some(Literal::Str(text::ASCII_LETTERS))),
        ],
        text::pystr,
    ),
    provider("rtf", DOCUMENT, "Create an RTF document.", binary::rtf),
    provider("rtf_file", DOCUMENT_FILE, "Create an RTF document file.", files::rtf_file),
    provider(
        "sentence",
        &[
            ParamSpec::optional("nb_words", TypeExpr::Int, Literal::Int(5)),
            ParamSpec::optional("suffix", TypeExpr::Str, Literal::Str(".")),
        ],
        "Generate a sentence.",
        text::sentence,
    ),
    provider("sentences", NB_3, "Generate a list of sentences.", text::sentences),
    provider("slug", NONE, "Generate a slug.", text::slug),
    provider("slugs", NB_3, "Generate a list of slugs.", text::slugs),
    provider("svg", IMAGE, "Create an SVG image of a single colour.", binary::svg),
    provider("svg_file", IMAGE_FILE, "Create an SVG image file.", files::svg_file),
    provider("tar", ARCHIVE, "Create a TAR archive of text files.", binary::tar),
    provider("tar_file", ARCHIVE_FILE, "Create a TAR archive file.", files::tar_file),
    provider(
        "text",
        &[ParamSpec::optional("nb_chars", TypeExpr::Int, Literal::Int(200))],
        "Generate a text of at most nb_chars characters.",
        text::text,
    ),
    provider("texts", NB_3, "Generate a list of texts.", text::texts),
    provider("tif", IMAGE, "Create a TIF image of a single colour.", binary::tif),
    provider("tif_file", IMAGE_FILE, "Create a TIF image file.", files::tif_file),
    provider(
        "title",
        &[ParamSpec::optional("nb_words", TypeExpr::Int, Literal::Int(4))],
        "Generate a title.",
        text::title,
    ),
    undocumented("tld", NONE, person::tld),
    provider("txt_file", TXT_FILE, "Create a text file.", files::txt_file),
    provider("url", NONE, "Generate a random URL.", person::url),
    provider("username", NONE, "Generate a username.", person::username),
    provider("usernames", NB_5, "Generate a list of usernames.", person::usernames),
    provider("uuid", NONE, "Generate a UUID4.", time::uuid),
    provider("wav", WAV, "Create a WAV file with a sine tone.", binary::wav),
    provider("wav_file", WAV_FILE, "Create a WAV audio file.", files::wav_file),
    provider("word", NONE, "Generate a word.", text::word),
    provider("words", NB_5, "Generate a list of words.", text::words),
    provider(
        "year",
        &[
            ParamSpec::optional("start_year", TypeExpr::Int, Literal::Int(1900)),
            ParamSpec::optional("end_year", TypeExpr::Int, Literal::Int(2100)),
        ],
        "Generate a random year.",
        numbers::year,
    ),
    provider("zip", ARCHIVE, "Create a ZIP archive of text files.", binary::zip),
    provider("zip_file", ARCHIVE_FILE, "Create a ZIP archive file.", files::zip_file),
];

/// All public members, sorted by name.
pub fn registry() -> &'static [RegistryEntry] {
    REGISTRY
}

pub fn lookup(name: &str) -> Option<&'static RegistryEntry> {
    REGISTRY
        .binary_search_by(|entry| entry.name.cmp(name))
        .ok()
        .map(|index| &REGISTRY[index])
}

/// Iterate the callable members only.
pub fn providers() -> impl Iterator<Item = &'static ProviderSpec> {
    REGISTRY.iter().filter_map(|entry| match &entry.member {
        Member::Provider(spec) => Some(spec),
        Member::Value(_) => None,
    })
}
