//! Metadata normalization and display-name cleaning
//!
//! Two rewriting passes over an `#EXTINF` record:
//!
//! - **Attributes**: stale identifiers and prior group labels are stripped,
//!   the logo attribute is backfilled with the network default, whitespace
//!   is collapsed. Normalization is idempotent.
//! - **Name**: an ordered table of noise rules removes language qualifiers,
//!   feed tags and resolution markers, separators become spaces, the result
//!   is title-cased and broadcast acronyms are restored afterwards (title
//!   casing would otherwise lowercase them).

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::MediaKind;

/// Fallback channel logo applied when the source playlist has none
pub const DEFAULT_LOGO: &str = "https://simgbb.com/avatar/dw9KLnpdGh3y.jpg";

lazy_static! {
    static ref GROUP_TITLE_ATTR: Regex = Regex::new(r#"group-title=".*?""#).unwrap();
    static ref TVG_NAME_ATTR: Regex = Regex::new(r#"tvg-name=".*?""#).unwrap();

    /// Noise rules applied to every raw name, in order. Replacement is a
    /// space so adjacent words never fuse; the final whitespace collapse
    /// cleans up. Patterns deliberately carry no word boundaries: they
    /// mirror the upstream feed tags exactly as they appear.
    static ref NOISE_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?i)Telugu:\s*").unwrap(), " "),
        (Regex::new(r"(?i)\(\s*Telugu\s*\)").unwrap(), " "),
        (Regex::new(r"(?i)Cric\s*\|*").unwrap(), " "),
        (Regex::new(r"(?i)Tl\s*\|*").unwrap(), " "),
        (Regex::new(r"(?i)In:\s*").unwrap(), " "),
        (Regex::new(r"(?i)24/7\s*:*").unwrap(), " "),
        (Regex::new(r"(?i)\(FHD\)").unwrap(), " "),
        (Regex::new(r"(?i)\(4K\)").unwrap(), " "),
        (Regex::new("⁴ᵏ").unwrap(), " "),
        (Regex::new(r"\|+").unwrap(), " "),
    ];

    /// Movies additionally drop the standalone language word
    static ref MOVIE_LANGUAGE_WORD: Regex = Regex::new(r"(?i)\bTelugu\b").unwrap();

    /// Broadcast acronyms re-uppercased after title casing
    static ref ACRONYM_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?i)\bHd\b").unwrap(), "HD"),
        (Regex::new(r"(?i)\bSd\b").unwrap(), "SD"),
        (Regex::new(r"(?i)\bTv\b").unwrap(), "TV"),
        (Regex::new(r"(?i)\bCam\b").unwrap(), "CAM"),
    ];
}

/// Remove the empty legacy id, any group label and any name hint from a
/// metadata line. Runs before the comma split so a removed attribute value
/// can never shift the last comma.
pub fn strip_stale_attributes(line: &str) -> String {
    let line = line.replace(r#"tvg-id="""#, "");
    let line = GROUP_TITLE_ATTR.replace_all(&line, "");
    TVG_NAME_ATTR.replace_all(&line, "").into_owned()
}

/// Backfill the logo attribute and collapse whitespace on the attribute
/// section. Idempotent.
pub fn normalize_attributes(meta: &str) -> String {
    let meta = if meta.contains(r#"tvg-logo="""#) {
        meta.replace(r#"tvg-logo="""#, &format!(r#"tvg-logo="{DEFAULT_LOGO}""#))
    } else if !meta.contains("tvg-logo=") {
        format!(r#"{meta} tvg-logo="{DEFAULT_LOGO}""#)
    } else {
        meta.to_string()
    };
    collapse_whitespace(&meta)
}

/// Collapse internal whitespace runs to single spaces and trim
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean a raw display name into its canonical form
pub fn clean_name(raw: &str, kind: MediaKind) -> String {
    let mut name = raw.to_string();

    for (pattern, replacement) in NOISE_RULES.iter() {
        name = pattern.replace_all(&name, *replacement).into_owned();
    }

    if kind == MediaKind::Movie {
        name = MOVIE_LANGUAGE_WORD.replace_all(&name, " ").into_owned();
    }

    // Quotes become commas, a quirk kept for player compatibility
    let name = name
        .replace(['_', '-', '.'], " ")
        .replace('"', ",");

    let name = title_case(&collapse_whitespace(&name));

    restore_acronyms(&name)
}

/// Title casing: first letter of each alphabetic run uppercased, the rest
/// lowercased. Digits and punctuation break runs.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

fn restore_acronyms(name: &str) -> String {
    let mut name = name.to_string();
    for (pattern, replacement) in ACRONYM_RULES.iter() {
        name = pattern.replace_all(&name, *replacement).into_owned();
    }
    name
}

/// Replace any existing group label with the network one
pub fn set_group_title(meta: &str, title: &str) -> String {
    let stripped = GROUP_TITLE_ATTR.replace_all(meta, "");
    format!(r#"{} group-title="RJM | {}""#, stripped.trim_end(), title)
}
