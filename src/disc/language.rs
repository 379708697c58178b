//! ISO-639-1 language names for the two-letter codes stored on disc.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Name returned for codes absent from the table.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

const ISO_639_1: &[([u8; 2], &str)] = &[
    (*b"aa", "Afar"),
    (*b"ab", "Abkhazian"),
    (*b"af", "Afrikaans"),
    (*b"am", "Amharic"),
    (*b"ar", "Arabic"),
    (*b"as", "Assamese"),
    (*b"ay", "Aymara"),
    (*b"az", "Azerbaijani"),
    (*b"ba", "Bashkir"),
    (*b"be", "Byelorussian"),
    (*b"bg", "Bulgarian"),
    (*b"bh", "Bihari"),
    (*b"bi", "Bislama"),
    (*b"bn", "Bengali, Bangla"),
    (*b"bo", "Tibetan"),
    (*b"br", "Breton"),
    (*b"ca", "Catalan"),
    (*b"co", "Corsican"),
    (*b"cs", "Czech"),
    (*b"cy", "Welsh"),
    (*b"da", "Danish"),
    (*b"de", "German"),
    (*b"dz", "Bhutani"),
    (*b"el", "Greek"),
    (*b"en", "English"),
    (*b"eo", "Esperanto"),
    (*b"es", "Spanish"),
    (*b"et", "Estonian"),
    (*b"eu", "Basque"),
    (*b"fa", "Persian"),
    (*b"fi", "Finnish"),
    (*b"fj", "Fiji"),
    (*b"fo", "Faroese"),
    (*b"fr", "French"),
    (*b"fy", "Frisian"),
    (*b"ga", "Irish"),
    (*b"gd", "Scots Gaelic"),
    (*b"gl", "Galician"),
    (*b"gn", "Guarani"),
    (*b"gu", "Gujarati"),
    (*b"ha", "Hausa"),
    (*b"he", "Hebrew"),
    (*b"hi", "Hindi"),
    (*b"hr", "Croatian"),
    (*b"hu", "Hungarian"),
    (*b"hy", "Armenian"),
    (*b"ia", "Interlingua"),
    (*b"ie", "Interlingue"),
    (*b"ik", "Inupiak"),
    (*b"id", "Indonesian"),
    (*b"is", "Icelandic"),
    (*b"it", "Italian"),
    (*b"ja", "Japanese"),
    (*b"jv", "Javanese"),
    (*b"ka", "Georgian"),
    (*b"kk", "Kazakh"),
    (*b"kl", "Greenlandic"),
    (*b"km", "Cambodian"),
    (*b"kn", "Kannada"),
    (*b"ko", "Korean"),
    (*b"ks", "Kashmiri"),
    (*b"ku", "Kurdish"),
    (*b"ky", "Kirghiz"),
    (*b"la", "Latin"),
    (*b"lb", "Luxembourgish"),
    (*b"ln", "Lingala"),
    (*b"lo", "Laotian"),
    (*b"lt", "Lithuanian"),
    (*b"lv", "Latvian, Lettish"),
    (*b"mg", "Malagasy"),
    (*b"mi", "Maori"),
    (*b"mk", "Macedonian"),
    (*b"ml", "Malayalam"),
    (*b"mn", "Mongolian"),
    (*b"mo", "Moldavian"),
    (*b"mr", "Marathi"),
    (*b"ms", "Malay"),
    (*b"mt", "Maltese"),
    (*b"my", "Burmese"),
    (*b"na", "Nauru"),
    (*b"ne", "Nepali"),
    (*b"nl", "Dutch"),
    (*b"no", "Norwegian"),
    (*b"oc", "Occitan"),
    (*b"om", "(Afan) Oromo"),
    (*b"or", "Oriya"),
    (*b"pa", "Punjabi"),
    (*b"pl", "Polish"),
    (*b"ps", "Pashto, Pushto"),
    (*b"pt", "Portuguese"),
    (*b"qu", "Quechua"),
    (*b"rm", "Rhaeto-Romance"),
    (*b"rn", "Kirundi"),
    (*b"ro", "Romanian"),
    (*b"ru", "Russian"),
    (*b"rw", "Kinyarwanda"),
    (*b"sa", "Sanskrit"),
    (*b"sd", "Sindhi"),
    (*b"sg", "Sangho"),
    (*b"sh", "Serbo-Croatian"),
    (*b"si", "Singhalese"),
    (*b"sk", "Slovak"),
    (*b"sl", "Slovenian"),
    (*b"sm", "Samoan"),
    (*b"sn", "Shona"),
    (*b"so", "Somali"),
    (*b"sq", "Albanian"),
    (*b"sr", "Serbian"),
    (*b"ss", "Siswati"),
    (*b"st", "Sesotho"),
    (*b"su", "Sundanese"),
    (*b"sv", "Swedish"),
    (*b"sw", "Swahili"),
    (*b"ta", "Tamil"),
    (*b"te", "Telugu"),
    (*b"tg", "Tajik"),
    (*b"th", "Thai"),
    (*b"ti", "Tigrinya"),
    (*b"tk", "Turkmen"),
    (*b"tl", "Tagalog"),
    (*b"tn", "Setswana"),
    (*b"to", "Tongan"),
    (*b"tr", "Turkish"),
    (*b"ts", "Tsonga"),
    (*b"tt", "Tatar"),
    (*b"tw", "Twi"),
    (*b"uk", "Ukrainian"),
    (*b"ur", "Urdu"),
    (*b"uz", "Uzbek"),
    (*b"vi", "Vietnamese"),
    (*b"vo", "Volapuk"),
    (*b"wo", "Wolof"),
    (*b"xh", "Xhosa"),
    (*b"yo", "Yoruba"),
    (*b"zh", "Chinese"),
    (*b"zu", "Zulu"),
];

static ISO_639_1_TABLE: OnceLock<LanguageTable> = OnceLock::new();

/// Lookup table from two-letter language codes to English names.
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    names: HashMap<[u8; 2], &'static str>,
}

impl LanguageTable {
    /// Build a table from `(code, name)` pairs. Codes are matched without
    /// regard to ASCII case.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ([u8; 2], &'static str)>,
    {
        let names = entries
            .into_iter()
            .map(|(code, name)| (code.map(|b| b.to_ascii_lowercase()), name))
            .collect();
        Self { names }
    }

    /// The built-in ISO-639-1 table, shared process-wide.
    pub fn iso639_1() -> &'static LanguageTable {
        ISO_639_1_TABLE.get_or_init(|| Self::from_entries(ISO_639_1.iter().copied()))
    }

    /// English name for `code`, or "Unknown".
    pub fn name(&self, code: [u8; 2]) -> &'static str {
        self.names
            .get(&code.map(|b| b.to_ascii_lowercase()))
            .copied()
            .unwrap_or(UNKNOWN_LANGUAGE)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
