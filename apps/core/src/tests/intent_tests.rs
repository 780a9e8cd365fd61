//! Intent extractor tests.
//!
//! Exercises the documented behavior of the extractor: rule priority,
//! localization, shopping parsing, and the never-fails contract.

use crate::assistant::{parse_shopping, Assistant, BudgetRange};
use crate::locale::{text, Lang, TextKey};
use crate::storage::MemoryStore;

fn assistant() -> Assistant<MemoryStore> {
    Assistant::new(MemoryStore::new(), "tester")
}

mod shopping_detection {
    use super::*;

    #[test]
    fn test_vocabulary_triggers_detection() {
        for input in [
            "gift for mom",
            "present for my sister",
            "buy candles for dad",
            "cadeau pour maman",
            "regalo para mi hermana",
            "presente para meu irmão",
        ] {
            assert!(parse_shopping(input).is_some(), "expected a parse for '{}'", input);
        }
    }

    #[test]
    fn test_dollar_amount_alone_triggers_detection() {
        let q = parse_shopping("something nice around $40").expect("should parse");
        assert_eq!(q.budget, Some(BudgetRange::Under(40)));
    }

    #[test]
    fn test_small_talk_never_parses() {
        for input in ["hello", "thanks!", "what time is it", "bom dia", "merci beaucoup"] {
            assert!(parse_shopping(input).is_none(), "unexpected parse for '{}'", input);
        }
    }
}

mod rule_priority {
    use super::*;

    #[test]
    fn test_explanation_beats_shopping_phrasing() {
        // "profile" questions win even when the text carries shopping words.
        let mut a = assistant();
        let out = a.answer("why complete my profile before I buy a gift?", "/shop", Lang::En);
        assert_eq!(out.nav.as_deref(), Some("/profile"));
        assert_eq!(out.reply, text(Lang::En, TextKey::ProfileExplainer));
    }

    #[test]
    fn test_shopping_beats_navigation_keywords() {
        // A budget makes this a shopping query even though "shop" is also a
        // navigation keyword.
        let mut a = assistant();
        let out = a.answer("shop for candles under $20", "/dashboard", Lang::En);
        assert_eq!(out.reply, text(Lang::En, TextKey::ShoppingAck));
        let nav = out.nav.unwrap();
        assert!(nav.starts_with("/shop?"), "nav was {}", nav);
        assert!(nav.contains("budget=0-20"));
    }

    #[test]
    fn test_navigation_when_shopping_comes_up_empty() {
        let mut a = assistant();
        let out = a.answer("go to shop", "/dashboard", Lang::En);
        assert_eq!(out.nav.as_deref(), Some("/shop"));
        assert_eq!(out.reply, text(Lang::En, TextKey::OpeningShop));
    }
}

mod localization {
    use super::*;

    #[test]
    fn test_replies_follow_the_active_language() {
        let cases = [
            (Lang::En, "open reminders"),
            (Lang::Pt, "abrir lembretes"),
            (Lang::Es, "abrir recordatorios"),
            (Lang::Fr, "ouvrir rappels"),
        ];
        for (lang, input) in cases {
            let mut a = assistant();
            let out = a.answer(input, "/dashboard", lang);
            assert_eq!(out.nav.as_deref(), Some("/reminders"), "for '{}'", input);
            assert_eq!(out.reply, text(lang, TextKey::OpeningReminders));
        }
    }

    #[test]
    fn test_unsupported_language_code_behaves_like_english() {
        let mut a = assistant();
        let out = a.answer("open reminders", "/dashboard", Lang::parse("zz"));
        assert_eq!(out.reply, text(Lang::En, TextKey::OpeningReminders));
    }

    #[test]
    fn test_referral_chips_answer_in_all_languages() {
        let cases = [
            (Lang::En, "referrals"),
            (Lang::Pt, "indicações"),
            (Lang::Es, "referencias"),
            (Lang::Fr, "parrainages"),
        ];
        for (lang, input) in cases {
            let mut a = assistant();
            let out = a.answer(input, "/dashboard", lang);
            assert_eq!(out.nav.as_deref(), Some("/referrals"), "for '{}'", input);
            assert_eq!(out.reply, text(lang, TextKey::ReferralsExplainer));
        }
    }
}

mod never_fails {
    use super::*;

    #[test]
    fn test_every_input_gets_a_reply() {
        let mut a = assistant();
        let inputs = [
            "",
            "    ",
            "!!!???",
            "$$$$",
            "for for for for",
            "under over between",
            "🎁🎁🎁",
            "a very long rambling message that mentions nothing actionable at all",
        ];
        for input in inputs {
            for path in ["/dashboard", "/reminders", "/shop", "/unknown"] {
                let out = a.answer(input, path, Lang::En);
                assert!(!out.reply.is_empty(), "empty reply for '{}' on {}", input, path);
            }
        }
    }
}
