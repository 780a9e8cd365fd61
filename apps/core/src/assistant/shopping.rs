//! Shopping-intent parsing.
//!
//! Regex-driven extraction of a structured shopping query (recipient,
//! occasion, budget range, keyword residue) from free-text chat input.
//! Pure and synchronous: unmatched input is `None`, never an error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// A parsed budget constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetRange {
    /// "between $X and $Y", "$X-$Y"
    Between(u32, u32),
    /// "under $X", or a bare "$X" treated as a ceiling
    Under(u32),
    /// "over $X", "more than $X"
    Over(u32),
}

impl BudgetRange {
    /// Wire encoding used in the shop querystring and the preference cache:
    /// `"<low>-<high>"`, `"0-<n>"` (under), or `"<n>-"` (over).
    pub fn encode(&self) -> String {
        match self {
            BudgetRange::Between(low, high) => format!("{}-{}", low, high),
            BudgetRange::Under(n) => format!("0-{}", n),
            BudgetRange::Over(n) => format!("{}-", n),
        }
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// A structured shopping query extracted from chat input.
///
/// Invariant: at least one of `recipient`, `budget`, `keywords` is present;
/// otherwise [`parse_shopping`] returns `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingQuery {
    /// Gift recipient, normalized through a fixed lexicon where possible.
    pub recipient: Option<String>,
    /// One of "birthday", "holiday", "anniversary", "housewarming".
    pub occasion: Option<String>,
    /// Parsed budget constraint.
    pub budget: Option<BudgetRange>,
    /// Residual descriptive words after all other extractions.
    pub keywords: Option<String>,
}

// Pattern families, compiled once. expect() is acceptable: a malformed
// pattern is unrecoverable and caught by the test suite.
static SHOPPING_VOCAB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(gifts?|presents?|buy|shop|shopping|find|purchase|presentes?|regalos?|cadeaux?|comprar|compra|acheter|achat|loja|tienda|boutique)\b",
    )
    .expect("Invalid regex: shopping vocabulary")
});

static DOLLAR_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\s*\d+").expect("Invalid regex: dollar amount"));

static BUDGET_BETWEEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:between|from|entre|de)\s+\$?\s*(\d+)\s+(?:and|to|e|y|a|et|à)\s+\$?\s*(\d+)\b")
        .expect("Invalid regex: budget between")
});

static BUDGET_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\s*(\d+)\s*-\s*\$?\s*(\d+)").expect("Invalid regex: budget range")
});

static BUDGET_UNDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:under|below|less than|up to|menos de|abaixo de|até|hasta|moins de)\s+\$?\s*(\d+)")
        .expect("Invalid regex: budget under")
});

static BUDGET_OVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:over|above|more than|at least|mais de|más de|plus de)\s+\$?\s*(\d+)")
        .expect("Invalid regex: budget over")
});

static BUDGET_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\s*(\d+)").expect("Invalid regex: bare amount"));

static RECIPIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:for|para|pour)\s+([\p{L}'’ -]+)").expect("Invalid regex: recipient")
});

static OCCASION_BIRTHDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(birthday|bday|aniversário|aniversario|cumpleaños|cumple|anniversaire)\b")
        .expect("Invalid regex: birthday occasion")
});

static OCCASION_HOLIDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(christmas|xmas|holidays?|natal|navidad|noël|noel|fêtes)\b")
        .expect("Invalid regex: holiday occasion")
});

static OCCASION_ANNIVERSARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(anniversary|bodas)\b").expect("Invalid regex: anniversary occasion")
});

static OCCASION_HOUSEWARMING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(housewarming|house-warming|crémaillère|inauguração)\b")
        .expect("Invalid regex: housewarming occasion")
});

/// Articles and possessives skipped at the start of a recipient phrase.
const LEADING_ARTICLES: &[&str] = &[
    "my", "the", "a", "an", "mi", "mis", "meu", "minha", "o", "os", "as", "el", "la", "los",
    "las", "un", "una", "um", "uma", "mon", "ma", "mes", "le", "les", "une",
];

/// Words that end a recipient phrase (prepositions, budget keywords,
/// conjunctions).
const RECIPIENT_STOPS: &[&str] = &[
    "under", "over", "between", "from", "below", "above", "less", "more", "than", "with", "on",
    "in", "at", "of", "and", "or", "that", "who", "budget", "about", "around", "menos", "mais",
    "más", "moins", "plus", "entre", "hasta", "até", "com", "con", "avec", "e", "y", "et", "de",
    "à", "por",
];

/// Words stripped from the keyword residue (shopping filler, articles,
/// request verbs in all four languages).
const FILLER_WORDS: &[&str] = &[
    "a", "an", "the", "i", "me", "my", "we", "you", "it", "is", "to", "of", "in", "on", "at",
    "for", "with", "and", "or", "some", "any", "want", "need", "would", "like", "please",
    "looking", "go", "get", "something", "um", "uma", "o", "os", "as", "de", "da", "do", "que",
    "quero", "quiero", "necesito", "je", "veux", "cherche", "busco", "procuro", "para", "pour",
    "un", "une", "el", "la", "los", "las", "le", "les", "y", "e", "et", "ou", "open", "abrir",
    "ouvrir", "aller", "ir", "à", "al", "au", "ver", "voltar", "volver", "retour", "back",
    "meu", "minha", "mi", "mis", "mon", "ma", "mes", "seu", "sua", "su", "ton", "ta", "tes",
    // French elision fragments left behind once the elided word is removed.
    "l", "d", "j", "qu", "c", "n",
];

fn cap_u32(caps: &regex::Captures<'_>, i: usize) -> Option<u32> {
    caps.get(i)?.as_str().parse().ok()
}

/// Extract a budget constraint, trying the pattern families in a fixed
/// order. Only the first successful pattern is taken even when several
/// could match; the order below is the defined tie-break.
pub fn parse_budget(lower: &str) -> Option<BudgetRange> {
    if let Some(caps) = BUDGET_BETWEEN.captures(lower) {
        if let (Some(low), Some(high)) = (cap_u32(&caps, 1), cap_u32(&caps, 2)) {
            return Some(BudgetRange::Between(low, high));
        }
    }
    if let Some(caps) = BUDGET_RANGE.captures(lower) {
        if let (Some(low), Some(high)) = (cap_u32(&caps, 1), cap_u32(&caps, 2)) {
            return Some(BudgetRange::Between(low, high));
        }
    }
    if let Some(caps) = BUDGET_UNDER.captures(lower) {
        if let Some(n) = cap_u32(&caps, 1) {
            return Some(BudgetRange::Under(n));
        }
    }
    if let Some(caps) = BUDGET_OVER.captures(lower) {
        if let Some(n) = cap_u32(&caps, 1) {
            return Some(BudgetRange::Over(n));
        }
    }
    if let Some(caps) = BUDGET_BARE.captures(lower) {
        if let Some(n) = cap_u32(&caps, 1) {
            return Some(BudgetRange::Under(n));
        }
    }
    None
}

/// Normalize a recipient word through the fixed lexicon.
fn canonical(word: &str) -> Option<&'static str> {
    let canon = match word {
        "woman" | "women" | "lady" | "ladies" | "mulher" | "mujer" | "femme" => "woman",
        "man" | "men" | "guy" | "guys" | "homem" | "hombre" | "homme" => "man",
        "mom" | "mum" | "mommy" | "mother" | "mãe" | "mamãe" | "madre" | "mamá" | "mère"
        | "maman" => "mom",
        "dad" | "daddy" | "father" | "pai" | "papai" | "padre" | "papá" | "père" | "papa" => {
            "dad"
        }
        "girlfriend" | "namorada" | "novia" | "copine" => "girlfriend",
        "boyfriend" | "namorado" | "novio" | "copain" => "boyfriend",
        "wife" | "esposa" | "épouse" => "wife",
        "husband" | "marido" | "esposo" | "mari" => "husband",
        "sister" | "irmã" | "hermana" | "sœur" | "soeur" => "sister",
        "brother" | "irmão" | "hermano" | "frère" => "brother",
        "friend" | "friends" | "amigo" | "amiga" | "ami" | "amie" => "friend",
        "kid" | "kids" | "child" | "children" | "filho" | "filha" | "hijo" | "hija" | "enfant"
        | "niño" | "niña" => "kid",
        "grandma" | "grandmother" | "granny" | "avó" | "abuela" | "grand-mère" => "grandma",
        "grandpa" | "grandfather" | "avô" | "abuelo" | "grand-père" => "grandpa",
        _ => return None,
    };
    Some(canon)
}

fn strip_possessive(token: &str) -> (&str, bool) {
    if let Some(stripped) = token.strip_suffix("'s").or_else(|| token.strip_suffix("’s")) {
        (stripped, true)
    } else {
        (token, false)
    }
}

/// The normalized recipient plus the raw tokens it consumed (needed to
/// subtract the recipient phrase from the keyword residue).
fn recipient_parts(lower: &str) -> Option<(String, Vec<String>)> {
    let caps = RECIPIENT.captures(lower)?;
    let phrase = caps.get(1)?.as_str();

    let mut kept: Vec<String> = Vec::new();
    for raw in phrase.split_whitespace() {
        let token = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '’' && c != '-');
        if token.is_empty() {
            continue;
        }
        let (token, possessive) = strip_possessive(token);
        if kept.is_empty() && LEADING_ARTICLES.contains(&token) {
            continue;
        }
        // Occasion words bound the phrase too ("for my mom's birthday").
        if RECIPIENT_STOPS.contains(&token) || extract_occasion(token).is_some() {
            break;
        }
        kept.push(token.to_string());
        // Recipients are short phrases; a possessive closes the phrase.
        if possessive || kept.len() == 3 {
            break;
        }
    }

    if kept.is_empty() {
        return None;
    }
    for token in &kept {
        if let Some(canon) = canonical(token) {
            return Some((canon.to_string(), kept));
        }
    }
    let joined = kept.join(" ");
    Some((joined, kept))
}

/// Extract and normalize the gift recipient, if any.
pub fn extract_recipient(lower: &str) -> Option<String> {
    recipient_parts(lower).map(|(recipient, _)| recipient)
}

/// Extract the occasion. Fixed keyword set, first match wins, in the order
/// birthday, holiday, anniversary, housewarming.
pub fn extract_occasion(lower: &str) -> Option<&'static str> {
    if OCCASION_BIRTHDAY.is_match(lower) {
        Some("birthday")
    } else if OCCASION_HOLIDAY.is_match(lower) {
        Some("holiday")
    } else if OCCASION_ANNIVERSARY.is_match(lower) {
        Some("anniversary")
    } else if OCCASION_HOUSEWARMING.is_match(lower) {
        Some("housewarming")
    } else {
        None
    }
}

/// Descriptive residue left after removing budget substrings, shopping
/// vocabulary, occasion words, the recipient phrase, and filler words.
fn keyword_residue(lower: &str, recipient_tokens: &[String]) -> Option<String> {
    let mut text = lower.to_string();
    for re in [
        &*BUDGET_BETWEEN,
        &*BUDGET_RANGE,
        &*BUDGET_UNDER,
        &*BUDGET_OVER,
        &*BUDGET_BARE,
    ] {
        text = re.replace_all(&text, " ").into_owned();
    }
    for re in [
        &*OCCASION_BIRTHDAY,
        &*OCCASION_HOLIDAY,
        &*OCCASION_ANNIVERSARY,
        &*OCCASION_HOUSEWARMING,
    ] {
        text = re.replace_all(&text, " ").into_owned();
    }
    text = SHOPPING_VOCAB.replace_all(&text, " ").into_owned();

    let mut remaining: Vec<String> = recipient_tokens.to_vec();
    let mut words: Vec<&str> = Vec::new();
    // Apostrophes stay inside tokens so "mom's" strips to "mom" instead of
    // splitting into an orphan "s".
    for raw in text.split(|c: char| !c.is_alphanumeric() && c != '-' && c != '\'' && c != '’') {
        let (raw, _) = strip_possessive(raw);
        let word = raw.trim_matches(|c: char| c == '-' || c == '\'' || c == '’');
        if word.is_empty() || word.chars().all(|c| c.is_numeric()) {
            continue;
        }
        if FILLER_WORDS.contains(&word) {
            continue;
        }
        // Subtract each recipient token once.
        if let Some(pos) = remaining.iter().position(|t| t.as_str() == word) {
            remaining.remove(pos);
            continue;
        }
        words.push(word);
    }

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Parse free text into a shopping query.
///
/// A text counts as shopping input when it contains gift/purchase
/// vocabulary, a dollar amount, or a "between X and Y" phrase. Returns
/// `None` when nothing shopping-like is found, or when recipient, budget,
/// and keywords are all absent (an occasion alone is not a match).
pub fn parse_shopping(text: &str) -> Option<ShoppingQuery> {
    let lower = text.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }

    let looks_like_shopping = SHOPPING_VOCAB.is_match(&lower)
        || DOLLAR_AMOUNT.is_match(&lower)
        || BUDGET_BETWEEN.is_match(&lower);
    if !looks_like_shopping {
        return None;
    }

    let parts = recipient_parts(&lower);
    let occasion = extract_occasion(&lower);
    let budget = parse_budget(&lower);
    let keywords = match &parts {
        Some((_, raw)) => keyword_residue(&lower, raw),
        None => keyword_residue(&lower, &[]),
    };
    let recipient = parts.map(|(recipient, _)| recipient);

    if recipient.is_none() && budget.is_none() && keywords.is_none() {
        return None;
    }

    Some(ShoppingQuery {
        recipient,
        occasion: occasion.map(str::to_string),
        budget,
        keywords,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gift_under_budget_for_mom() {
        let q = parse_shopping("gift ideas under $50 for mom").expect("should parse");
        assert_eq!(q.recipient.as_deref(), Some("mom"));
        assert_eq!(q.budget, Some(BudgetRange::Under(50)));
        assert_eq!(q.budget.unwrap().encode(), "0-50");
        assert_eq!(q.keywords.as_deref(), Some("ideas"));
    }

    #[test]
    fn test_gift_between_budget_for_dad() {
        let q = parse_shopping("gift between $50 and $100 for dad").expect("should parse");
        assert_eq!(q.recipient.as_deref(), Some("dad"));
        assert_eq!(q.budget, Some(BudgetRange::Between(50, 100)));
        assert_eq!(q.budget.unwrap().encode(), "50-100");
    }

    #[test]
    fn test_plain_greeting_is_not_shopping() {
        assert_eq!(parse_shopping("hello"), None);
        assert_eq!(parse_shopping("how are you today"), None);
        assert_eq!(parse_shopping(""), None);
        assert_eq!(parse_shopping("   "), None);
    }

    #[test]
    fn test_budget_pattern_order() {
        // First successful pattern in the fixed order wins.
        assert_eq!(
            parse_budget("between $20 and $40 but under $50"),
            Some(BudgetRange::Between(20, 40))
        );
        assert_eq!(parse_budget("$30-$60"), Some(BudgetRange::Between(30, 60)));
        assert_eq!(parse_budget("under $50 or maybe $30"), Some(BudgetRange::Under(50)));
        assert_eq!(parse_budget("more than $200"), Some(BudgetRange::Over(200)));
        assert_eq!(parse_budget("around $25"), Some(BudgetRange::Under(25)));
        assert_eq!(parse_budget("no numbers here"), None);
    }

    #[test]
    fn test_budget_encoding() {
        assert_eq!(BudgetRange::Between(50, 100).encode(), "50-100");
        assert_eq!(BudgetRange::Under(50).encode(), "0-50");
        assert_eq!(BudgetRange::Over(200).encode(), "200-");
        assert_eq!(BudgetRange::Over(200).to_string(), "200-");
    }

    #[test]
    fn test_recipient_lexicon_normalization() {
        assert_eq!(extract_recipient("gift for women"), Some("woman".to_string()));
        assert_eq!(extract_recipient("something for the ladies"), Some("woman".to_string()));
        assert_eq!(extract_recipient("present for my mother"), Some("mom".to_string()));
        assert_eq!(extract_recipient("buy for men"), Some("man".to_string()));
        assert_eq!(extract_recipient("ideas for the guys"), Some("man".to_string()));
    }

    #[test]
    fn test_recipient_possessive_boundary() {
        assert_eq!(
            extract_recipient("gift for my mom's birthday"),
            Some("mom".to_string())
        );
    }

    #[test]
    fn test_recipient_stops_at_budget_keyword() {
        assert_eq!(
            extract_recipient("gift for mom under $50"),
            Some("mom".to_string())
        );
        assert_eq!(
            extract_recipient("present for dad between $10 and $20"),
            Some("dad".to_string())
        );
    }

    #[test]
    fn test_recipient_unknown_kept_verbatim() {
        assert_eq!(
            extract_recipient("gift for my coworker"),
            Some("coworker".to_string())
        );
    }

    #[test]
    fn test_recipient_multilingual() {
        assert_eq!(extract_recipient("presente para minha mãe"), Some("mom".to_string()));
        assert_eq!(extract_recipient("regalo para mi madre"), Some("mom".to_string()));
        assert_eq!(extract_recipient("cadeau pour maman"), Some("mom".to_string()));
    }

    #[test]
    fn test_occasion_first_match_wins() {
        assert_eq!(extract_occasion("a birthday and christmas gift"), Some("birthday"));
        assert_eq!(extract_occasion("christmas present"), Some("holiday"));
        assert_eq!(extract_occasion("for our anniversary"), Some("anniversary"));
        assert_eq!(extract_occasion("housewarming party"), Some("housewarming"));
        assert_eq!(extract_occasion("no occasion here"), None);
    }

    #[test]
    fn test_occasion_alone_is_not_a_match() {
        // Shopping vocabulary present, but recipient, budget, and keywords
        // all come up empty: the parse falls through.
        assert_eq!(parse_shopping("buy for birthday"), None);
    }

    #[test]
    fn test_full_query_with_occasion_and_keywords() {
        let q = parse_shopping("birthday gift for mom under $50 candles").expect("should parse");
        assert_eq!(q.recipient.as_deref(), Some("mom"));
        assert_eq!(q.occasion.as_deref(), Some("birthday"));
        assert_eq!(q.budget, Some(BudgetRange::Under(50)));
        assert_eq!(q.keywords.as_deref(), Some("candles"));
    }

    #[test]
    fn test_possessive_leaves_no_residue() {
        // The possessive suffix must not survive as a stray keyword.
        let q = parse_shopping("gift for my mom's birthday").expect("should parse");
        assert_eq!(q.recipient.as_deref(), Some("mom"));
        assert_eq!(q.occasion.as_deref(), Some("birthday"));
        assert_eq!(q.keywords, None);

        // Curly apostrophe variant.
        let q = parse_shopping("gift for my mom’s birthday").expect("should parse");
        assert_eq!(q.recipient.as_deref(), Some("mom"));
        assert_eq!(q.keywords, None);
    }

    #[test]
    fn test_bare_amount_counts_as_shopping() {
        let q = parse_shopping("$30 candles").expect("should parse");
        assert_eq!(q.budget, Some(BudgetRange::Under(30)));
        assert_eq!(q.keywords.as_deref(), Some("candles"));
    }

    #[test]
    fn test_navigation_phrase_is_not_shopping() {
        // "go to shop" carries vocabulary but no recipient, budget, or
        // keyword residue, so it falls through to the navigation rules.
        assert_eq!(parse_shopping("go to shop"), None);
        assert_eq!(parse_shopping("shop"), None);
    }

    #[test]
    fn test_idempotent_parse() {
        let a = parse_shopping("gift ideas under $50 for mom");
        let b = parse_shopping("gift ideas under $50 for mom");
        assert_eq!(a, b);
    }
}
