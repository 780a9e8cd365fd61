//! Ordered intent rules.
//!
//! The original widget answered with a chain of sequential `if` statements;
//! here the same priorities are an explicit table of named rules evaluated
//! first-match-wins:
//!
//! 1. explanation intents (why profile / why referrals)
//! 2. shopping queries
//! 3. direct navigation keywords
//! 4. page-contextual help
//! 5. generic fallback (always matches)
//!
//! Every rule is a pure function of the request context; the engine applies
//! any preference update a rule asks for.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use url::form_urlencoded;

use super::shopping::{parse_shopping, ShoppingQuery};
use crate::locale::{text, Lang, TextKey};
use crate::models::SoftPreferences;

/// The page the user is currently on, parsed from the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Reminders,
    Profile,
    Referrals,
    Shop,
    Other,
}

impl Page {
    /// Parse a path (querystring ignored). Unknown paths behave like
    /// [`Page::Other`].
    pub fn from_path(path: &str) -> Page {
        let path = path.split('?').next().unwrap_or(path);
        match path.trim_end_matches('/') {
            "/dashboard" => Page::Dashboard,
            "/reminders" => Page::Reminders,
            "/profile" => Page::Profile,
            "/referrals" => Page::Referrals,
            "/shop" => Page::Shop,
            _ => Page::Other,
        }
    }
}

/// Everything a rule may look at.
pub struct RequestContext<'a> {
    /// Raw user input.
    pub text: &'a str,
    /// Trimmed, lowercased input (what the patterns run against).
    pub lower: String,
    pub lang: Lang,
    pub page: Page,
    /// Cached soft preferences for the user, if any.
    pub prefs: Option<&'a SoftPreferences>,
}

impl<'a> RequestContext<'a> {
    pub fn new(text: &'a str, lang: Lang, page: Page, prefs: Option<&'a SoftPreferences>) -> Self {
        Self {
            text,
            lower: text.trim().to_lowercase(),
            lang,
            page,
            prefs,
        }
    }
}

/// The assistant's answer: a localized reply, an optional navigation
/// target, and whether that navigation is a same-page refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub reply: String,
    pub nav: Option<String>,
    pub refresh: bool,
}

/// A rule match: the outcome plus an optional soft-preference update for
/// the engine to persist.
#[derive(Debug, Clone)]
pub struct RuleMatch {
    pub outcome: Outcome,
    pub prefs_update: Option<SoftPreferences>,
}

impl RuleMatch {
    fn reply(reply: String) -> Self {
        Self {
            outcome: Outcome {
                reply,
                nav: None,
                refresh: false,
            },
            prefs_update: None,
        }
    }

    fn nav(reply: String, nav: &str) -> Self {
        Self {
            outcome: Outcome {
                reply,
                nav: Some(nav.to_string()),
                refresh: false,
            },
            prefs_update: None,
        }
    }
}

/// A named intent rule. Evaluated in table order; the first match wins.
pub struct Rule {
    pub name: &'static str,
    check: fn(&RequestContext<'_>) -> Option<RuleMatch>,
}

impl Rule {
    pub fn evaluate(&self, ctx: &RequestContext<'_>) -> Option<RuleMatch> {
        (self.check)(ctx)
    }
}

static WHY_PROFILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:why|por ?que|por ?quê|por ?qué|pourquoi)\b.*\b(?:profile|perfil|profil)")
        .expect("Invalid regex: why profile")
});

static WHY_REFERRALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:why|por ?que|por ?quê|por ?qué|pourquoi)\b.*(?:referral|indica|referencia|parrainage)",
    )
    .expect("Invalid regex: why referrals")
});

static NAV_REMINDERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:open|abrir|ouvrir|go to|ver)\b.*(?:reminder|lembrete|recordatorio|rappel)")
        .expect("Invalid regex: reminders navigation")
});

static NAV_SHOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:shop|loja|tienda|boutique)\b").expect("Invalid regex: shop navigation")
});

static NAV_DASHBOARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:dashboard|painel|panel|tableau)\b")
        .expect("Invalid regex: dashboard navigation")
});

static NAV_REFERRALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:referral|indica|referencia|parrainage)")
        .expect("Invalid regex: referrals navigation")
});

static NAV_PROFILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:profile|perfil|profil)\b").expect("Invalid regex: profile navigation")
});

/// Build the `/shop` navigation target from whichever fields are present.
/// A missing budget or keywords is prefilled from the cached soft
/// preferences; the reply never depends on them.
fn shop_nav(query: &ShoppingQuery, prefs: Option<&SoftPreferences>) -> String {
    let mut qs = form_urlencoded::Serializer::new(String::new());
    if let Some(recipient) = &query.recipient {
        qs.append_pair("for", recipient);
    }
    if let Some(occasion) = &query.occasion {
        qs.append_pair("occasion", occasion);
    }
    let budget = query
        .budget
        .map(|b| b.encode())
        .or_else(|| prefs.and_then(|p| p.last_budget.clone()));
    if let Some(budget) = budget {
        qs.append_pair("budget", &budget);
    }
    let keywords = query
        .keywords
        .clone()
        .or_else(|| prefs.and_then(|p| p.last_keywords.clone()));
    if let Some(keywords) = keywords {
        qs.append_pair("keywords", &keywords);
    }
    format!("/shop?{}", qs.finish())
}

fn explain_profile(ctx: &RequestContext<'_>) -> Option<RuleMatch> {
    if WHY_PROFILE.is_match(&ctx.lower) {
        Some(RuleMatch::nav(
            text(ctx.lang, TextKey::ProfileExplainer).to_string(),
            "/profile",
        ))
    } else {
        None
    }
}

fn explain_referrals(ctx: &RequestContext<'_>) -> Option<RuleMatch> {
    if WHY_REFERRALS.is_match(&ctx.lower) {
        Some(RuleMatch::nav(
            text(ctx.lang, TextKey::ReferralsExplainer).to_string(),
            "/referrals",
        ))
    } else {
        None
    }
}

// The preference cache is overwritten wholesale on every successful parse:
// a parse without a budget still prefills this nav from the cache, then
// clears the cached budget for the next query.
fn shopping(ctx: &RequestContext<'_>) -> Option<RuleMatch> {
    let query = parse_shopping(&ctx.lower)?;
    let nav = shop_nav(&query, ctx.prefs);
    let prefs_update = SoftPreferences {
        last_budget: query.budget.map(|b| b.encode()),
        last_keywords: query.keywords.clone(),
    };
    Some(RuleMatch {
        outcome: Outcome {
            reply: text(ctx.lang, TextKey::ShoppingAck).to_string(),
            nav: Some(nav),
            refresh: false,
        },
        prefs_update: Some(prefs_update),
    })
}

fn nav_reminders(ctx: &RequestContext<'_>) -> Option<RuleMatch> {
    NAV_REMINDERS.is_match(&ctx.lower).then(|| {
        RuleMatch::nav(
            text(ctx.lang, TextKey::OpeningReminders).to_string(),
            "/reminders",
        )
    })
}

fn nav_shop(ctx: &RequestContext<'_>) -> Option<RuleMatch> {
    NAV_SHOP.is_match(&ctx.lower).then(|| {
        RuleMatch::nav(text(ctx.lang, TextKey::OpeningShop).to_string(), "/shop")
    })
}

fn nav_dashboard(ctx: &RequestContext<'_>) -> Option<RuleMatch> {
    NAV_DASHBOARD.is_match(&ctx.lower).then(|| {
        RuleMatch::nav(
            text(ctx.lang, TextKey::BackToDashboard).to_string(),
            "/dashboard",
        )
    })
}

fn nav_referrals(ctx: &RequestContext<'_>) -> Option<RuleMatch> {
    NAV_REFERRALS.is_match(&ctx.lower).then(|| {
        RuleMatch::nav(
            text(ctx.lang, TextKey::ReferralsExplainer).to_string(),
            "/referrals",
        )
    })
}

fn nav_profile(ctx: &RequestContext<'_>) -> Option<RuleMatch> {
    NAV_PROFILE.is_match(&ctx.lower).then(|| {
        RuleMatch::nav(
            text(ctx.lang, TextKey::OpeningProfile).to_string(),
            "/profile",
        )
    })
}

fn page_help(ctx: &RequestContext<'_>) -> Option<RuleMatch> {
    match ctx.page {
        Page::Reminders => Some(RuleMatch::reply(
            text(ctx.lang, TextKey::RemindersHelp).to_string(),
        )),
        Page::Profile => Some(RuleMatch::reply(
            text(ctx.lang, TextKey::ProfileHelp).to_string(),
        )),
        Page::Referrals => Some(RuleMatch::reply(
            text(ctx.lang, TextKey::ReferralsHelp).to_string(),
        )),
        Page::Shop => {
            // Navigating back to the same page forces a refresh of the
            // shop results.
            let mut m = RuleMatch::nav(text(ctx.lang, TextKey::ShopHelp).to_string(), "/shop");
            m.outcome.refresh = true;
            Some(m)
        }
        Page::Dashboard | Page::Other => None,
    }
}

fn fallback(ctx: &RequestContext<'_>) -> Option<RuleMatch> {
    Some(RuleMatch::reply(
        text(ctx.lang, TextKey::Fallback).to_string(),
    ))
}

/// The rule table, in priority order. The final rule always matches.
pub fn rule_table() -> &'static [Rule] {
    static TABLE: [Rule; 10] = [
        Rule {
            name: "explain-profile",
            check: explain_profile,
        },
        Rule {
            name: "explain-referrals",
            check: explain_referrals,
        },
        Rule {
            name: "shopping",
            check: shopping,
        },
        Rule {
            name: "nav-reminders",
            check: nav_reminders,
        },
        Rule {
            name: "nav-shop",
            check: nav_shop,
        },
        Rule {
            name: "nav-dashboard",
            check: nav_dashboard,
        },
        Rule {
            name: "nav-referrals",
            check: nav_referrals,
        },
        Rule {
            name: "nav-profile",
            check: nav_profile,
        },
        Rule {
            name: "page-help",
            check: page_help,
        },
        Rule {
            name: "fallback",
            check: fallback,
        },
    ];
    &TABLE
}
