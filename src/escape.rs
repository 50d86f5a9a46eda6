//! HTML escaping and sanitization helpers.
//!
//! Escaping never double-encodes: an `&` that already starts a numeric
//! reference or a known named entity is left alone, so escaping is
//! idempotent.

use std::sync::LazyLock;

use regex::Regex;

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:([A-Za-z][A-Za-z0-9]*)|#[0-9]+|#[xX][0-9A-Fa-f]+);")
        .expect("reference pattern is valid")
});

static SEMVER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").expect("version pattern is valid"));

/// HTML 4 named entities.
const NAMED_ENTITIES: &[&str] = &[
    "nbsp", "iexcl", "cent", "pound", "curren", "yen", "brvbar", "sect", "uml", "copy", "ordf",
    "laquo", "not", "shy", "reg", "macr", "deg", "plusmn", "acute", "micro", "para", "middot",
    "cedil", "ordm", "raquo", "iquest", "Agrave", "Aacute", "Acirc", "Atilde", "Auml", "Aring",
    "AElig", "Ccedil", "Egrave", "Eacute", "Ecirc", "Euml", "Igrave", "Iacute", "Icirc", "Iuml",
    "ETH", "Ntilde", "Ograve", "Oacute", "Ocirc", "Otilde", "Ouml", "times", "Oslash", "Ugrave",
    "Uacute", "Ucirc", "Uuml", "Yacute", "THORN", "szlig", "agrave", "aacute", "acirc", "atilde",
    "auml", "aring", "aelig", "ccedil", "egrave", "eacute", "ecirc", "euml", "igrave", "iacute",
    "icirc", "iuml", "eth", "ntilde", "ograve", "oacute", "ocirc", "otilde", "ouml", "divide",
    "oslash", "ugrave", "uacute", "ucirc", "uuml", "yacute", "thorn", "yuml", "quot", "amp", "lt",
    "gt", "apos", "OElig", "oelig", "Scaron", "scaron", "Yuml", "circ", "tilde", "ensp", "emsp",
    "thinsp", "zwnj", "zwj", "lrm", "rlm", "ndash", "mdash", "lsquo", "rsquo", "sbquo", "ldquo",
    "rdquo", "bdquo", "dagger", "Dagger", "permil", "lsaquo", "rsaquo", "euro", "fnof", "Alpha",
    "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa", "Lambda", "Mu",
    "Nu", "Xi", "Omicron", "Pi", "Rho", "Sigma", "Tau", "Upsilon", "Phi", "Chi", "Psi", "Omega",
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "omicron", "pi", "rho", "sigmaf", "sigma", "tau", "upsilon", "phi",
    "chi", "psi", "omega", "thetasym", "upsih", "piv", "bull", "hellip", "prime", "Prime", "oline",
    "frasl", "weierp", "image", "real", "trade", "alefsym", "larr", "uarr", "rarr", "darr", "harr",
    "crarr", "lArr", "uArr", "rArr", "dArr", "hArr", "forall", "part", "exist", "empty", "nabla",
    "isin", "notin", "ni", "prod", "sum", "minus", "lowast", "radic", "prop", "infin", "ang", "and",
    "or", "cap", "cup", "int", "sim", "cong", "asymp", "ne", "equiv", "le", "ge", "sub", "sup",
    "nsub", "sube", "supe", "oplus", "otimes", "perp", "sdot", "lceil", "rceil", "lfloor",
    "rfloor", "lang", "rang", "loz", "spades", "clubs", "hearts", "diams",
];

/// Returns `true` if `text` starts with a numeric reference or a known named entity.
fn starts_with_reference(text: &str) -> bool {
    REFERENCE.captures(text).is_some_and(|caps| {
        caps.get(1)
            .is_none_or(|name| NAMED_ENTITIES.contains(&name.as_str()))
    })
}

/// Escapes a string for use inside a quoted HTML attribute.
#[must_use]
pub fn esc_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (index, c) in input.char_indices() {
        match c {
            '&' if starts_with_reference(&input[index..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a string for use as HTML text content.
#[must_use]
pub fn esc_html(input: &str) -> String {
    esc_attr(input)
}

/// Removes markup tags and comments, keeping the text between them.
///
/// A `<` followed by whitespace (or ending the input) is text, not a tag.
/// Inside a tag, `>` only closes it outside quoted attribute values. A tag
/// or comment that never closes is dropped along with the rest of the input.
#[must_use]
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        if let Some(comment) = after.strip_prefix("!--") {
            let Some(end) = comment.find("-->") else {
                return out;
            };
            rest = &comment[end + 3..];
            continue;
        }

        if after.chars().next().is_none_or(char::is_whitespace) {
            out.push('<');
            rest = after;
            continue;
        }

        let Some(end) = tag_end(after) else {
            return out;
        };
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

/// Byte offset of the `>` closing a tag body, skipping quoted values.
fn tag_end(tag: &str) -> Option<usize> {
    let mut quote = None;
    for (index, c) in tag.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(open), c) if c == open => quote = None,
            (None, '>') => return Some(index),
            _ => {}
        }
    }
    None
}

/// Returns `true` if `version` looks like `major.minor.patch`.
#[must_use]
pub fn is_semver(version: &str) -> bool {
    SEMVER.is_match(version)
}
