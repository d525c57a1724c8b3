//! Lorem-style text providers.

use rand::Rng;

use super::pick;
use crate::kwargs::{self, Kwargs};
use crate::words::LOREM;
use crate::{FakeError, Faker, NativeValue};

fn random_words(n: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| pick(&mut rng, LOREM).to_string()).collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn make_sentence(nb_words: usize, suffix: &str) -> String {
    let words = random_words(nb_words.max(1));
    format!("{}{}", capitalize(&words.join(" ")), suffix)
}

pub(crate) fn make_paragraph(nb_sentences: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..nb_sentences.max(1))
        .map(|_| make_sentence(rng.gen_range(4..=9), "."))
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn make_text(nb_chars: usize) -> String {
    let mut out = String::new();
    while out.len() < nb_chars {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&make_sentence(6, "."));
    }
    out.truncate(nb_chars);
    out
}

fn make_slug() -> String {
    random_words(3).join("-")
}

pub fn word(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(random_words(1).remove(0).into())
}

pub fn words(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(random_words(kwargs::count(kw, "nb", 5)?).into())
}

pub fn sentence(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let nb_words = kwargs::count(kw, "nb_words", 5)?;
    let suffix = kwargs::string(kw, "suffix")?.unwrap_or(".");
    Ok(make_sentence(nb_words, suffix).into())
}

pub fn sentences(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let nb = kwargs::count(kw, "nb", 3)?;
    Ok((0..nb).map(|_| make_sentence(5, ".")).collect::<Vec<_>>().into())
}

pub fn paragraph(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(make_paragraph(kwargs::count(kw, "nb_sentences", 5)?).into())
}

pub fn paragraphs(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let nb = kwargs::count(kw, "nb", 3)?;
    Ok((0..nb).map(|_| make_paragraph(5)).collect::<Vec<_>>().into())
}

pub fn text(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(make_text(kwargs::char_count(kw, "nb_chars", 200)?).into())
}

pub fn texts(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let nb = kwargs::count(kw, "nb", 3)?;
    Ok((0..nb).map(|_| make_text(200)).collect::<Vec<_>>().into())
}

pub fn slug(_: &Faker, _: &Kwargs) -> Result<NativeValue, FakeError> {
    Ok(make_slug().into())
}

pub fn slugs(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let nb = kwargs::count(kw, "nb", 3)?;
    Ok((0..nb).map(|_| make_slug()).collect::<Vec<_>>().into())
}

pub fn title(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let nb_words = kwargs::count(kw, "nb_words", 4)?;
    let words: Vec<String> = random_words(nb_words.max(1))
        .iter()
        .map(|w| capitalize(w))
        .collect();
    Ok(words.join(" ").into())
}

pub const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn pystr(_: &Faker, kw: &Kwargs) -> Result<NativeValue, FakeError> {
    let nb_chars = kwargs::char_count(kw, "nb_chars", 20)?;
    let alphabet: Vec<char> = kwargs::string(kw, "letters")?
        .filter(|letters| !letters.is_empty())
        .unwrap_or(ASCII_LETTERS)
        .chars()
        .collect();
    let mut rng = rand::thread_rng();
    let s: String = (0..nb_chars)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();
    Ok(s.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kw(value: serde_json::Value) -> Kwargs {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_words_honours_nb() {
        let value = words(&Faker::new(), &kw(json!({ "nb": 7 }))).unwrap();
        match value {
            NativeValue::StrList(list) => assert_eq!(list.len(), 7),
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_sentence_is_capitalized_with_suffix() {
        let value = sentence(&Faker::new(), &kw(json!({ "suffix": "!" }))).unwrap();
        let s = value.as_str().unwrap();
        assert!(s.ends_with('!'));
        assert!(s.chars().next().unwrap().is_uppercase());
    }

    #[test]
    fn test_text_respects_length() {
        let value = text(&Faker::new(), &kw(json!({ "nb_chars": 50 }))).unwrap();
        assert_eq!(value.as_str().unwrap().len(), 50);
    }

    #[test]
    fn test_slug_shape() {
        let value = slug(&Faker::new(), &Kwargs::new()).unwrap();
        assert_eq!(value.as_str().unwrap().split('-').count(), 3);
    }

    #[test]
    fn test_pystr_length() {
        let value = pystr(&Faker::new(), &kw(json!({ "nb_chars": 12 }))).unwrap();
        assert_eq!(value.as_str().unwrap().len(), 12);
    }

    #[test]
    fn test_pystr_custom_letters() {
        let value = pystr(&Faker::new(), &kw(json!({ "nb_chars": 8, "letters": "x" }))).unwrap();
        assert_eq!(value.as_str().unwrap(), "xxxxxxxx");
    }
}
