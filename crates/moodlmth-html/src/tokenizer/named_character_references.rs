//! Named character reference lookup table.
//!
//! [§ 13.5 Named character references](https://html.spec.whatwg.org/multipage/named-characters.html)
//!
//! Covers the legacy (semicolon-optional) references, the Latin-1 range and
//! the punctuation, math, arrow and Greek references that occur in
//! hand-written pages. Unknown references are left in the text as written.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Maps entity names (without the leading '&') to their replacement strings.
///
/// Legacy names appear twice, with and without the trailing semicolon.
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Markup-significant, all legacy
        ("amp", "&"),
        ("amp;", "&"),
        ("AMP", "&"),
        ("AMP;", "&"),
        ("lt", "<"),
        ("lt;", "<"),
        ("LT", "<"),
        ("LT;", "<"),
        ("gt", ">"),
        ("gt;", ">"),
        ("GT", ">"),
        ("GT;", ">"),
        ("quot", "\""),
        ("quot;", "\""),
        ("QUOT", "\""),
        ("QUOT;", "\""),
        ("apos;", "'"),
        // Latin-1 symbols, legacy
        ("nbsp", "\u{00A0}"),
        ("nbsp;", "\u{00A0}"),
        ("iexcl;", "\u{00A1}"),
        ("cent", "\u{00A2}"),
        ("cent;", "\u{00A2}"),
        ("pound", "\u{00A3}"),
        ("pound;", "\u{00A3}"),
        ("curren;", "\u{00A4}"),
        ("yen", "\u{00A5}"),
        ("yen;", "\u{00A5}"),
        ("brvbar;", "\u{00A6}"),
        ("sect", "\u{00A7}"),
        ("sect;", "\u{00A7}"),
        ("uml;", "\u{00A8}"),
        ("copy", "\u{00A9}"),
        ("copy;", "\u{00A9}"),
        ("COPY", "\u{00A9}"),
        ("COPY;", "\u{00A9}"),
        ("ordf;", "\u{00AA}"),
        ("laquo", "\u{00AB}"),
        ("laquo;", "\u{00AB}"),
        ("not", "\u{00AC}"),
        ("not;", "\u{00AC}"),
        ("shy;", "\u{00AD}"),
        ("reg", "\u{00AE}"),
        ("reg;", "\u{00AE}"),
        ("REG", "\u{00AE}"),
        ("REG;", "\u{00AE}"),
        ("macr;", "\u{00AF}"),
        ("deg", "\u{00B0}"),
        ("deg;", "\u{00B0}"),
        ("plusmn", "\u{00B1}"),
        ("plusmn;", "\u{00B1}"),
        ("sup2;", "\u{00B2}"),
        ("sup3;", "\u{00B3}"),
        ("acute;", "\u{00B4}"),
        ("micro", "\u{00B5}"),
        ("micro;", "\u{00B5}"),
        ("para", "\u{00B6}"),
        ("para;", "\u{00B6}"),
        ("middot", "\u{00B7}"),
        ("middot;", "\u{00B7}"),
        ("cedil;", "\u{00B8}"),
        ("sup1;", "\u{00B9}"),
        ("ordm;", "\u{00BA}"),
        ("raquo", "\u{00BB}"),
        ("raquo;", "\u{00BB}"),
        ("frac14;", "\u{00BC}"),
        ("frac12;", "\u{00BD}"),
        ("frac34;", "\u{00BE}"),
        ("iquest;", "\u{00BF}"),
        ("times", "\u{00D7}"),
        ("times;", "\u{00D7}"),
        ("divide", "\u{00F7}"),
        ("divide;", "\u{00F7}"),
        // Latin-1 letters
        ("Agrave;", "\u{00C0}"),
        ("Aacute;", "\u{00C1}"),
        ("Acirc;", "\u{00C2}"),
        ("Atilde;", "\u{00C3}"),
        ("Auml;", "\u{00C4}"),
        ("Aring;", "\u{00C5}"),
        ("AElig;", "\u{00C6}"),
        ("Ccedil;", "\u{00C7}"),
        ("Egrave;", "\u{00C8}"),
        ("Eacute;", "\u{00C9}"),
        ("Ecirc;", "\u{00CA}"),
        ("Euml;", "\u{00CB}"),
        ("Igrave;", "\u{00CC}"),
        ("Iacute;", "\u{00CD}"),
        ("Icirc;", "\u{00CE}"),
        ("Iuml;", "\u{00CF}"),
        ("Ntilde;", "\u{00D1}"),
        ("Ograve;", "\u{00D2}"),
        ("Oacute;", "\u{00D3}"),
        ("Ocirc;", "\u{00D4}"),
        ("Otilde;", "\u{00D5}"),
        ("Ouml;", "\u{00D6}"),
        ("Oslash;", "\u{00D8}"),
        ("Ugrave;", "\u{00D9}"),
        ("Uacute;", "\u{00DA}"),
        ("Ucirc;", "\u{00DB}"),
        ("Uuml;", "\u{00DC}"),
        ("Yacute;", "\u{00DD}"),
        ("szlig;", "\u{00DF}"),
        ("agrave;", "\u{00E0}"),
        ("aacute;", "\u{00E1}"),
        ("acirc;", "\u{00E2}"),
        ("atilde;", "\u{00E3}"),
        ("auml;", "\u{00E4}"),
        ("aring;", "\u{00E5}"),
        ("aelig;", "\u{00E6}"),
        ("ccedil;", "\u{00E7}"),
        ("egrave;", "\u{00E8}"),
        ("eacute;", "\u{00E9}"),
        ("ecirc;", "\u{00EA}"),
        ("euml;", "\u{00EB}"),
        ("igrave;", "\u{00EC}"),
        ("iacute;", "\u{00ED}"),
        ("icirc;", "\u{00EE}"),
        ("iuml;", "\u{00EF}"),
        ("ntilde;", "\u{00F1}"),
        ("ograve;", "\u{00F2}"),
        ("oacute;", "\u{00F3}"),
        ("ocirc;", "\u{00F4}"),
        ("otilde;", "\u{00F5}"),
        ("ouml;", "\u{00F6}"),
        ("oslash;", "\u{00F8}"),
        ("ugrave;", "\u{00F9}"),
        ("uacute;", "\u{00FA}"),
        ("ucirc;", "\u{00FB}"),
        ("uuml;", "\u{00FC}"),
        ("yacute;", "\u{00FD}"),
        ("yuml;", "\u{00FF}"),
        // General punctuation
        ("ensp;", "\u{2002}"),
        ("emsp;", "\u{2003}"),
        ("thinsp;", "\u{2009}"),
        ("zwnj;", "\u{200C}"),
        ("zwj;", "\u{200D}"),
        ("ndash;", "\u{2013}"),
        ("mdash;", "\u{2014}"),
        ("lsquo;", "\u{2018}"),
        ("rsquo;", "\u{2019}"),
        ("sbquo;", "\u{201A}"),
        ("ldquo;", "\u{201C}"),
        ("rdquo;", "\u{201D}"),
        ("bdquo;", "\u{201E}"),
        ("dagger;", "\u{2020}"),
        ("Dagger;", "\u{2021}"),
        ("bull;", "\u{2022}"),
        ("hellip;", "\u{2026}"),
        ("permil;", "\u{2030}"),
        ("prime;", "\u{2032}"),
        ("lsaquo;", "\u{2039}"),
        ("rsaquo;", "\u{203A}"),
        ("euro;", "\u{20AC}"),
        ("trade;", "\u{2122}"),
        ("TRADE;", "\u{2122}"),
        // Arrows
        ("larr;", "\u{2190}"),
        ("uarr;", "\u{2191}"),
        ("rarr;", "\u{2192}"),
        ("darr;", "\u{2193}"),
        ("harr;", "\u{2194}"),
        ("lArr;", "\u{21D0}"),
        ("rArr;", "\u{21D2}"),
        ("hArr;", "\u{21D4}"),
        // Math
        ("forall;", "\u{2200}"),
        ("part;", "\u{2202}"),
        ("exist;", "\u{2203}"),
        ("empty;", "\u{2205}"),
        ("nabla;", "\u{2207}"),
        ("isin;", "\u{2208}"),
        ("notin;", "\u{2209}"),
        ("sum;", "\u{2211}"),
        ("minus;", "\u{2212}"),
        ("radic;", "\u{221A}"),
        ("infin;", "\u{221E}"),
        ("and;", "\u{2227}"),
        ("or;", "\u{2228}"),
        ("cap;", "\u{2229}"),
        ("cup;", "\u{222A}"),
        ("int;", "\u{222B}"),
        ("asymp;", "\u{2248}"),
        ("ne;", "\u{2260}"),
        ("equiv;", "\u{2261}"),
        ("le;", "\u{2264}"),
        ("ge;", "\u{2265}"),
        // Greek
        ("Alpha;", "\u{0391}"),
        ("Beta;", "\u{0392}"),
        ("Gamma;", "\u{0393}"),
        ("Delta;", "\u{0394}"),
        ("Theta;", "\u{0398}"),
        ("Lambda;", "\u{039B}"),
        ("Pi;", "\u{03A0}"),
        ("Sigma;", "\u{03A3}"),
        ("Phi;", "\u{03A6}"),
        ("Omega;", "\u{03A9}"),
        ("alpha;", "\u{03B1}"),
        ("beta;", "\u{03B2}"),
        ("gamma;", "\u{03B3}"),
        ("delta;", "\u{03B4}"),
        ("epsilon;", "\u{03B5}"),
        ("theta;", "\u{03B8}"),
        ("lambda;", "\u{03BB}"),
        ("mu;", "\u{03BC}"),
        ("pi;", "\u{03C0}"),
        ("sigma;", "\u{03C3}"),
        ("tau;", "\u{03C4}"),
        ("phi;", "\u{03C6}"),
        ("omega;", "\u{03C9}"),
        // Multi-codepoint
        ("fjlig;", "fj"),
    ])
});

/// Look up a named character reference.
///
/// The `name` should NOT include the leading '&'.
///
/// # Example
/// ```
/// use moodlmth_html::tokenizer::named_character_references::lookup_entity;
///
/// assert_eq!(lookup_entity("amp;"), Some("&"));
/// assert_eq!(lookup_entity("xyz;"), None);
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}

/// Check if any entity name starts with the given prefix, which tells the
/// tokenizer whether to keep consuming while looking for the longest match.
#[must_use]
pub fn any_entity_has_prefix(prefix: &str) -> bool {
    NAMED_ENTITIES.keys().any(|name| name.starts_with(prefix))
}
