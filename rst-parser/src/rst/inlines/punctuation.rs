//! Punctuation tables for inline markup boundaries
//!
//! Inline markup is only recognized at word boundaries. A start string must follow
//! whitespace or an opening bracket, quote or delimiter; an end string must be followed by
//! whitespace or a closing bracket, quote, delimiter or sentence punctuation. The tables
//! below are the Unicode classes docutils uses for this (2-clause BSD, Günter Milde), stored
//! as sorted inclusive ranges for binary search.

use std::cmp::Ordering;

/// Characters allowed right before an inline markup start string.
static START_BOUNDARY: &[(char, char)] = &[
    ('"', '"'),
    ('\'', '('),
    ('-', '-'),
    ('/', '/'),
    (':', ':'),
    ('<', '<'),
    ('[', '['),
    ('{', '{'),
    ('\u{00a1}', '\u{00a1}'),
    ('\u{00ab}', '\u{00ab}'),
    ('\u{00b7}', '\u{00b7}'),
    ('\u{00bb}', '\u{00bb}'),
    ('\u{00bf}', '\u{00bf}'),
    ('\u{037e}', '\u{037e}'),
    ('\u{0387}', '\u{0387}'),
    ('\u{055a}', '\u{055f}'),
    ('\u{0589}', '\u{058a}'),
    ('\u{05be}', '\u{05be}'),
    ('\u{05c0}', '\u{05c0}'),
    ('\u{05c3}', '\u{05c3}'),
    ('\u{05c6}', '\u{05c6}'),
    ('\u{05f3}', '\u{05f4}'),
    ('\u{0609}', '\u{060a}'),
    ('\u{060c}', '\u{060d}'),
    ('\u{061b}', '\u{061b}'),
    ('\u{061e}', '\u{061f}'),
    ('\u{066a}', '\u{066d}'),
    ('\u{06d4}', '\u{06d4}'),
    ('\u{0700}', '\u{070d}'),
    ('\u{07f7}', '\u{07f9}'),
    ('\u{0830}', '\u{083e}'),
    ('\u{0964}', '\u{0965}'),
    ('\u{0970}', '\u{0970}'),
    ('\u{0df4}', '\u{0df4}'),
    ('\u{0e4f}', '\u{0e4f}'),
    ('\u{0e5a}', '\u{0e5b}'),
    ('\u{0f04}', '\u{0f12}'),
    ('\u{0f3a}', '\u{0f3a}'),
    ('\u{0f3c}', '\u{0f3c}'),
    ('\u{0f85}', '\u{0f85}'),
    ('\u{0fd0}', '\u{0fd4}'),
    ('\u{104a}', '\u{104f}'),
    ('\u{10fb}', '\u{10fb}'),
    ('\u{1361}', '\u{1368}'),
    ('\u{1400}', '\u{1400}'),
    ('\u{166d}', '\u{166e}'),
    ('\u{169b}', '\u{169b}'),
    ('\u{16eb}', '\u{16ed}'),
    ('\u{1735}', '\u{1736}'),
    ('\u{17d4}', '\u{17d6}'),
    ('\u{17d8}', '\u{17da}'),
    ('\u{1800}', '\u{180a}'),
    ('\u{1944}', '\u{1945}'),
    ('\u{19de}', '\u{19df}'),
    ('\u{1a1e}', '\u{1a1f}'),
    ('\u{1aa0}', '\u{1aa6}'),
    ('\u{1aa8}', '\u{1aad}'),
    ('\u{1b5a}', '\u{1b60}'),
    ('\u{1c3b}', '\u{1c3f}'),
    ('\u{1c7e}', '\u{1c7f}'),
    ('\u{1cd3}', '\u{1cd3}'),
    ('\u{2010}', '\u{2027}'),
    ('\u{2030}', '\u{203e}'),
    ('\u{2041}', '\u{2043}'),
    ('\u{2045}', '\u{2045}'),
    ('\u{2047}', '\u{2051}'),
    ('\u{2053}', '\u{2053}'),
    ('\u{2055}', '\u{205e}'),
    ('\u{207d}', '\u{207d}'),
    ('\u{208d}', '\u{208d}'),
    ('\u{2329}', '\u{2329}'),
    ('\u{2768}', '\u{2768}'),
    ('\u{276a}', '\u{276a}'),
    ('\u{276c}', '\u{276c}'),
    ('\u{276e}', '\u{276e}'),
    ('\u{2770}', '\u{2770}'),
    ('\u{2772}', '\u{2772}'),
    ('\u{2774}', '\u{2774}'),
    ('\u{27c5}', '\u{27c5}'),
    ('\u{27e6}', '\u{27e6}'),
    ('\u{27e8}', '\u{27e8}'),
    ('\u{27ea}', '\u{27ea}'),
    ('\u{27ec}', '\u{27ec}'),
    ('\u{27ee}', '\u{27ee}'),
    ('\u{2983}', '\u{2983}'),
    ('\u{2985}', '\u{2985}'),
    ('\u{2987}', '\u{2987}'),
    ('\u{2989}', '\u{2989}'),
    ('\u{298b}', '\u{298b}'),
    ('\u{298d}', '\u{298d}'),
    ('\u{298f}', '\u{298f}'),
    ('\u{2991}', '\u{2991}'),
    ('\u{2993}', '\u{2993}'),
    ('\u{2995}', '\u{2995}'),
    ('\u{2997}', '\u{2997}'),
    ('\u{29d8}', '\u{29d8}'),
    ('\u{29da}', '\u{29da}'),
    ('\u{29fc}', '\u{29fc}'),
    ('\u{2cf9}', '\u{2cfc}'),
    ('\u{2cfe}', '\u{2cff}'),
    ('\u{2e00}', '\u{2e22}'),
    ('\u{2e24}', '\u{2e24}'),
    ('\u{2e26}', '\u{2e26}'),
    ('\u{2e28}', '\u{2e28}'),
    ('\u{2e2a}', '\u{2e2e}'),
    ('\u{2e30}', '\u{2e31}'),
    ('\u{3001}', '\u{3003}'),
    ('\u{3008}', '\u{3008}'),
    ('\u{300a}', '\u{300a}'),
    ('\u{300c}', '\u{300c}'),
    ('\u{300e}', '\u{300e}'),
    ('\u{3010}', '\u{3010}'),
    ('\u{3014}', '\u{3014}'),
    ('\u{3016}', '\u{3016}'),
    ('\u{3018}', '\u{3018}'),
    ('\u{301a}', '\u{301a}'),
    ('\u{301c}', '\u{301d}'),
    ('\u{3030}', '\u{3030}'),
    ('\u{303d}', '\u{303d}'),
    ('\u{30a0}', '\u{30a0}'),
    ('\u{30fb}', '\u{30fb}'),
    ('\u{a4fe}', '\u{a4ff}'),
    ('\u{a60d}', '\u{a60f}'),
    ('\u{a673}', '\u{a673}'),
    ('\u{a67e}', '\u{a67e}'),
    ('\u{a6f2}', '\u{a6f7}'),
    ('\u{a874}', '\u{a877}'),
    ('\u{a8ce}', '\u{a8cf}'),
    ('\u{a8f8}', '\u{a8fa}'),
    ('\u{a92e}', '\u{a92f}'),
    ('\u{a95f}', '\u{a95f}'),
    ('\u{a9c1}', '\u{a9cd}'),
    ('\u{a9de}', '\u{a9df}'),
    ('\u{aa5c}', '\u{aa5f}'),
    ('\u{aade}', '\u{aadf}'),
    ('\u{abeb}', '\u{abeb}'),
    ('\u{fd3e}', '\u{fd3e}'),
    ('\u{fe10}', '\u{fe17}'),
    ('\u{fe19}', '\u{fe19}'),
    ('\u{fe30}', '\u{fe32}'),
    ('\u{fe35}', '\u{fe35}'),
    ('\u{fe37}', '\u{fe37}'),
    ('\u{fe39}', '\u{fe39}'),
    ('\u{fe3b}', '\u{fe3b}'),
    ('\u{fe3d}', '\u{fe3d}'),
    ('\u{fe3f}', '\u{fe3f}'),
    ('\u{fe41}', '\u{fe41}'),
    ('\u{fe43}', '\u{fe43}'),
    ('\u{fe45}', '\u{fe47}'),
    ('\u{fe49}', '\u{fe4c}'),
    ('\u{fe50}', '\u{fe52}'),
    ('\u{fe54}', '\u{fe59}'),
    ('\u{fe5b}', '\u{fe5b}'),
    ('\u{fe5d}', '\u{fe5d}'),
    ('\u{fe5f}', '\u{fe61}'),
    ('\u{fe63}', '\u{fe63}'),
    ('\u{fe68}', '\u{fe68}'),
    ('\u{fe6a}', '\u{fe6b}'),
    ('\u{ff01}', '\u{ff03}'),
    ('\u{ff05}', '\u{ff08}'),
    ('\u{ff0a}', '\u{ff0a}'),
    ('\u{ff0c}', '\u{ff0f}'),
    ('\u{ff1a}', '\u{ff1b}'),
    ('\u{ff1f}', '\u{ff20}'),
    ('\u{ff3b}', '\u{ff3c}'),
    ('\u{ff5b}', '\u{ff5b}'),
    ('\u{ff5f}', '\u{ff5f}'),
    ('\u{ff61}', '\u{ff62}'),
    ('\u{ff64}', '\u{ff65}'),
    ('\u{10100}', '\u{10101}'),
    ('\u{1039f}', '\u{1039f}'),
    ('\u{103d0}', '\u{103d0}'),
    ('\u{10857}', '\u{10857}'),
    ('\u{1091f}', '\u{1091f}'),
    ('\u{1093f}', '\u{1093f}'),
    ('\u{10a50}', '\u{10a58}'),
    ('\u{10a7f}', '\u{10a7f}'),
    ('\u{10b39}', '\u{10b3f}'),
    ('\u{110bb}', '\u{110bc}'),
    ('\u{110be}', '\u{110c1}'),
    ('\u{12470}', '\u{12473}'),
];

/// Characters allowed right after an inline markup end string.
static END_BOUNDARY: &[(char, char)] = &[
    ('!', '"'),
    ('\'', '\''),
    (')', ')'),
    (',', '/'),
    (':', ';'),
    ('>', '?'),
    ('\\', ']'),
    ('}', '}'),
    ('\u{00a1}', '\u{00a1}'),
    ('\u{00ab}', '\u{00ab}'),
    ('\u{00b7}', '\u{00b7}'),
    ('\u{00bb}', '\u{00bb}'),
    ('\u{00bf}', '\u{00bf}'),
    ('\u{037e}', '\u{037e}'),
    ('\u{0387}', '\u{0387}'),
    ('\u{055a}', '\u{055f}'),
    ('\u{0589}', '\u{058a}'),
    ('\u{05be}', '\u{05be}'),
    ('\u{05c0}', '\u{05c0}'),
    ('\u{05c3}', '\u{05c3}'),
    ('\u{05c6}', '\u{05c6}'),
    ('\u{05f3}', '\u{05f4}'),
    ('\u{0609}', '\u{060a}'),
    ('\u{060c}', '\u{060d}'),
    ('\u{061b}', '\u{061b}'),
    ('\u{061e}', '\u{061f}'),
    ('\u{066a}', '\u{066d}'),
    ('\u{06d4}', '\u{06d4}'),
    ('\u{0700}', '\u{070d}'),
    ('\u{07f7}', '\u{07f9}'),
    ('\u{0830}', '\u{083e}'),
    ('\u{0964}', '\u{0965}'),
    ('\u{0970}', '\u{0970}'),
    ('\u{0df4}', '\u{0df4}'),
    ('\u{0e4f}', '\u{0e4f}'),
    ('\u{0e5a}', '\u{0e5b}'),
    ('\u{0f04}', '\u{0f12}'),
    ('\u{0f3b}', '\u{0f3b}'),
    ('\u{0f3d}', '\u{0f3d}'),
    ('\u{0f85}', '\u{0f85}'),
    ('\u{0fd0}', '\u{0fd4}'),
    ('\u{104a}', '\u{104f}'),
    ('\u{10fb}', '\u{10fb}'),
    ('\u{1361}', '\u{1368}'),
    ('\u{1400}', '\u{1400}'),
    ('\u{166d}', '\u{166e}'),
    ('\u{169c}', '\u{169c}'),
    ('\u{16eb}', '\u{16ed}'),
    ('\u{1735}', '\u{1736}'),
    ('\u{17d4}', '\u{17d6}'),
    ('\u{17d8}', '\u{17da}'),
    ('\u{1800}', '\u{180a}'),
    ('\u{1944}', '\u{1945}'),
    ('\u{19de}', '\u{19df}'),
    ('\u{1a1e}', '\u{1a1f}'),
    ('\u{1aa0}', '\u{1aa6}'),
    ('\u{1aa8}', '\u{1aad}'),
    ('\u{1b5a}', '\u{1b60}'),
    ('\u{1c3b}', '\u{1c3f}'),
    ('\u{1c7e}', '\u{1c7f}'),
    ('\u{1cd3}', '\u{1cd3}'),
    ('\u{2010}', '\u{2027}'),
    ('\u{2030}', '\u{203e}'),
    ('\u{2041}', '\u{2043}'),
    ('\u{2046}', '\u{2051}'),
    ('\u{2053}', '\u{2053}'),
    ('\u{2055}', '\u{205e}'),
    ('\u{207e}', '\u{207e}'),
    ('\u{208e}', '\u{208e}'),
    ('\u{232a}', '\u{232a}'),
    ('\u{2769}', '\u{2769}'),
    ('\u{276b}', '\u{276b}'),
    ('\u{276d}', '\u{276d}'),
    ('\u{276f}', '\u{276f}'),
    ('\u{2771}', '\u{2771}'),
    ('\u{2773}', '\u{2773}'),
    ('\u{2775}', '\u{2775}'),
    ('\u{27c6}', '\u{27c6}'),
    ('\u{27e7}', '\u{27e7}'),
    ('\u{27e9}', '\u{27e9}'),
    ('\u{27eb}', '\u{27eb}'),
    ('\u{27ed}', '\u{27ed}'),
    ('\u{27ef}', '\u{27ef}'),
    ('\u{2984}', '\u{2984}'),
    ('\u{2986}', '\u{2986}'),
    ('\u{2988}', '\u{2988}'),
    ('\u{298a}', '\u{298a}'),
    ('\u{298c}', '\u{298c}'),
    ('\u{298e}', '\u{298e}'),
    ('\u{2990}', '\u{2990}'),
    ('\u{2992}', '\u{2992}'),
    ('\u{2994}', '\u{2994}'),
    ('\u{2996}', '\u{2996}'),
    ('\u{2998}', '\u{2998}'),
    ('\u{29d9}', '\u{29d9}'),
    ('\u{29db}', '\u{29db}'),
    ('\u{29fd}', '\u{29fd}'),
    ('\u{2cf9}', '\u{2cfc}'),
    ('\u{2cfe}', '\u{2cff}'),
    ('\u{2e00}', '\u{2e21}'),
    ('\u{2e23}', '\u{2e23}'),
    ('\u{2e25}', '\u{2e25}'),
    ('\u{2e27}', '\u{2e27}'),
    ('\u{2e29}', '\u{2e2e}'),
    ('\u{2e30}', '\u{2e31}'),
    ('\u{3001}', '\u{3003}'),
    ('\u{3009}', '\u{3009}'),
    ('\u{300b}', '\u{300b}'),
    ('\u{300d}', '\u{300d}'),
    ('\u{300f}', '\u{300f}'),
    ('\u{3011}', '\u{3011}'),
    ('\u{3015}', '\u{3015}'),
    ('\u{3017}', '\u{3017}'),
    ('\u{3019}', '\u{3019}'),
    ('\u{301b}', '\u{301c}'),
    ('\u{301e}', '\u{301f}'),
    ('\u{3030}', '\u{3030}'),
    ('\u{303d}', '\u{303d}'),
    ('\u{30a0}', '\u{30a0}'),
    ('\u{30fb}', '\u{30fb}'),
    ('\u{a4fe}', '\u{a4ff}'),
    ('\u{a60d}', '\u{a60f}'),
    ('\u{a673}', '\u{a673}'),
    ('\u{a67e}', '\u{a67e}'),
    ('\u{a6f2}', '\u{a6f7}'),
    ('\u{a874}', '\u{a877}'),
    ('\u{a8ce}', '\u{a8cf}'),
    ('\u{a8f8}', '\u{a8fa}'),
    ('\u{a92e}', '\u{a92f}'),
    ('\u{a95f}', '\u{a95f}'),
    ('\u{a9c1}', '\u{a9cd}'),
    ('\u{a9de}', '\u{a9df}'),
    ('\u{aa5c}', '\u{aa5f}'),
    ('\u{aade}', '\u{aadf}'),
    ('\u{abeb}', '\u{abeb}'),
    ('\u{fd3f}', '\u{fd3f}'),
    ('\u{fe10}', '\u{fe16}'),
    ('\u{fe18}', '\u{fe19}'),
    ('\u{fe30}', '\u{fe32}'),
    ('\u{fe36}', '\u{fe36}'),
    ('\u{fe38}', '\u{fe38}'),
    ('\u{fe3a}', '\u{fe3a}'),
    ('\u{fe3c}', '\u{fe3c}'),
    ('\u{fe3e}', '\u{fe3e}'),
    ('\u{fe40}', '\u{fe40}'),
    ('\u{fe42}', '\u{fe42}'),
    ('\u{fe44}', '\u{fe46}'),
    ('\u{fe48}', '\u{fe4c}'),
    ('\u{fe50}', '\u{fe52}'),
    ('\u{fe54}', '\u{fe58}'),
    ('\u{fe5a}', '\u{fe5a}'),
    ('\u{fe5c}', '\u{fe5c}'),
    ('\u{fe5e}', '\u{fe61}'),
    ('\u{fe63}', '\u{fe63}'),
    ('\u{fe68}', '\u{fe68}'),
    ('\u{fe6a}', '\u{fe6b}'),
    ('\u{ff01}', '\u{ff03}'),
    ('\u{ff05}', '\u{ff07}'),
    ('\u{ff09}', '\u{ff0a}'),
    ('\u{ff0c}', '\u{ff0f}'),
    ('\u{ff1a}', '\u{ff1b}'),
    ('\u{ff1f}', '\u{ff20}'),
    ('\u{ff3c}', '\u{ff3d}'),
    ('\u{ff5d}', '\u{ff5d}'),
    ('\u{ff60}', '\u{ff61}'),
    ('\u{ff63}', '\u{ff65}'),
    ('\u{10100}', '\u{10101}'),
    ('\u{1039f}', '\u{1039f}'),
    ('\u{103d0}', '\u{103d0}'),
    ('\u{10857}', '\u{10857}'),
    ('\u{1091f}', '\u{1091f}'),
    ('\u{1093f}', '\u{1093f}'),
    ('\u{10a50}', '\u{10a58}'),
    ('\u{10a7f}', '\u{10a7f}'),
    ('\u{10b39}', '\u{10b3f}'),
    ('\u{110bb}', '\u{110bc}'),
    ('\u{110be}', '\u{110c1}'),
    ('\u{12470}', '\u{12473}'),
];

/// Opening punctuation, index-aligned with [`CLOSERS`].
static OPENERS: &[char] = &[
    '"', '\'', '(', '<', '\\', '[', '{', '\u{0f3a}',
    '\u{0f3c}', '\u{169b}', '\u{2045}', '\u{207d}', '\u{208d}', '\u{2329}', '\u{2768}', '\u{276a}',
    '\u{276c}', '\u{276e}', '\u{2770}', '\u{2772}', '\u{2774}', '\u{27c5}', '\u{27e6}', '\u{27e8}',
    '\u{27ea}', '\u{27ec}', '\u{27ee}', '\u{2983}', '\u{2985}', '\u{2987}', '\u{2989}', '\u{298b}',
    '\u{298d}', '\u{298f}', '\u{2991}', '\u{2993}', '\u{2995}', '\u{2997}', '\u{29d8}', '\u{29da}',
    '\u{29fc}', '\u{2e22}', '\u{2e24}', '\u{2e26}', '\u{2e28}', '\u{3008}', '\u{300a}', '\u{300c}',
    '\u{300e}', '\u{3010}', '\u{3014}', '\u{3016}', '\u{3018}', '\u{301a}', '\u{301d}', '\u{301d}',
    '\u{fd3e}', '\u{fe17}', '\u{fe35}', '\u{fe37}', '\u{fe39}', '\u{fe3b}', '\u{fe3d}', '\u{fe3f}',
    '\u{fe41}', '\u{fe43}', '\u{fe47}', '\u{fe59}', '\u{fe5b}', '\u{fe5d}', '\u{ff08}', '\u{ff3b}',
    '\u{ff5b}', '\u{ff5f}', '\u{ff62}', '\u{00ab}', '\u{2018}', '\u{201c}', '\u{2039}', '\u{2e02}',
    '\u{2e04}', '\u{2e09}', '\u{2e0c}', '\u{2e1c}', '\u{2e20}', '\u{201a}', '\u{201e}', '\u{00bb}',
    '\u{2019}', '\u{201d}', '\u{203a}', '\u{2e03}', '\u{2e05}', '\u{2e0a}', '\u{2e0d}', '\u{2e1d}',
    '\u{2e21}', '\u{201b}', '\u{201f}',
];

static CLOSERS: &[char] = &[
    '"', '\'', ')', '>', '\\', ']', '}', '\u{0f3b}',
    '\u{0f3d}', '\u{169c}', '\u{2046}', '\u{207e}', '\u{208e}', '\u{232a}', '\u{2769}', '\u{276b}',
    '\u{276d}', '\u{276f}', '\u{2771}', '\u{2773}', '\u{2775}', '\u{27c6}', '\u{27e7}', '\u{27e9}',
    '\u{27eb}', '\u{27ed}', '\u{27ef}', '\u{2984}', '\u{2986}', '\u{2988}', '\u{298a}', '\u{298c}',
    '\u{298e}', '\u{2990}', '\u{2992}', '\u{2994}', '\u{2996}', '\u{2998}', '\u{29d9}', '\u{29db}',
    '\u{29fd}', '\u{2e23}', '\u{2e25}', '\u{2e27}', '\u{2e29}', '\u{3009}', '\u{300b}', '\u{300d}',
    '\u{300f}', '\u{3011}', '\u{3015}', '\u{3017}', '\u{3019}', '\u{301b}', '\u{301e}', '\u{301f}',
    '\u{fd3f}', '\u{fe18}', '\u{fe36}', '\u{fe38}', '\u{fe3a}', '\u{fe3c}', '\u{fe3e}', '\u{fe40}',
    '\u{fe42}', '\u{fe44}', '\u{fe48}', '\u{fe5a}', '\u{fe5c}', '\u{fe5e}', '\u{ff09}', '\u{ff3d}',
    '\u{ff5d}', '\u{ff60}', '\u{ff63}', '\u{00bb}', '\u{2019}', '\u{201d}', '\u{203a}', '\u{2e03}',
    '\u{2e05}', '\u{2e0a}', '\u{2e0d}', '\u{2e1d}', '\u{2e21}', '\u{201b}', '\u{201f}', '\u{00ab}',
    '\u{2018}', '\u{201c}', '\u{2039}', '\u{2e02}', '\u{2e04}', '\u{2e09}', '\u{2e0c}', '\u{2e1c}',
    '\u{2e20}', '\u{201a}', '\u{201e}',
];

/// Quote styles where an opener is also matched by some other closer.
static QUOTE_PAIRS: &[(char, &str)] = &[
    ('\u{00bb}', "\u{00bb}"),
    ('\u{2018}', "\u{201a}"),
    ('\u{2019}', "\u{2019}"),
    ('\u{201a}', "\u{2018}\u{2019}"),
    ('\u{201c}', "\u{201e}"),
    ('\u{201e}', "\u{201c}\u{201d}"),
    ('\u{201d}', "\u{201d}"),
    ('\u{203a}', "\u{203a}"),
];

fn in_ranges(ranges: &[(char, char)], ch: char) -> bool {
    ranges
        .binary_search_by(|&(lo, hi)| {
            if hi < ch {
                Ordering::Less
            } else if lo > ch {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// True when `open` directly followed by `close` forms a matching pair, like `(` and `)` or
/// `„` and `“`. Markup right between such a pair is not recognized: `"*"` stays text.
pub fn match_chars(open: char, close: char) -> bool {
    let Some(index) = OPENERS.iter().position(|&ch| ch == open) else {
        return false;
    };
    if CLOSERS.get(index) == Some(&close) {
        return true;
    }
    QUOTE_PAIRS
        .iter()
        .find(|(ch, _)| *ch == open)
        .is_some_and(|(_, closers)| closers.contains(close))
}

/// Can a start string sit between `prev` and `next`?
pub fn is_start_string(prev: char, next: char) -> bool {
    if next.is_whitespace() {
        return false;
    }
    if prev.is_whitespace() {
        return true;
    }
    if match_chars(prev, next) {
        return false;
    }
    in_ranges(START_BOUNDARY, prev)
}

/// Can an end string sit between `prev` and `next`?
pub fn is_end_string(prev: char, next: char) -> bool {
    if prev.is_whitespace() {
        return false;
    }
    if next.is_whitespace() {
        return true;
    }
    if match_chars(prev, next) {
        return false;
    }
    in_ranges(END_BOUNDARY, next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        for table in [START_BOUNDARY, END_BOUNDARY] {
            for pair in table.windows(2) {
                assert!(pair[0].1 < pair[1].0, "{:?} overlaps {:?}", pair[0], pair[1]);
            }
        }
        assert_eq!(OPENERS.len(), CLOSERS.len());
    }

    #[test]
    fn start_strings() {
        assert!(is_start_string(' ', 'a'));
        assert!(is_start_string('(', 'a'));
        assert!(is_start_string('-', 'a'));
        assert!(!is_start_string('a', 'b'));
        assert!(!is_start_string(' ', ' '));
        assert!(!is_start_string('(', ')'));
        assert!(!is_start_string('\u{201e}', '\u{201c}'));
    }

    #[test]
    fn end_strings() {
        assert!(is_end_string('a', ' '));
        assert!(is_end_string('a', '.'));
        assert!(is_end_string('a', ')'));
        assert!(is_end_string('a', '\\'));
        assert!(!is_end_string('a', 'b'));
        assert!(!is_end_string(' ', '.'));
    }

    #[test]
    fn quote_pairs() {
        assert!(match_chars('"', '"'));
        assert!(match_chars('\u{00bb}', '\u{00bb}'));
        assert!(!match_chars('a', 'a'));
    }
}
